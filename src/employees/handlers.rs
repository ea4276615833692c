use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use time::OffsetDateTime;
use tracing::{info, instrument, warn};

use crate::{error::Error, geocode, state::AppState};

use super::dto::{DeleteQuery, RegisterRequest, RegisterResponse, UpdateRequest};
use super::repo_types::{Employee, NewEmployee};
use super::services;

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, (StatusCode, String)> {
    payload.email = payload.email.trim().to_lowercase();

    if !services::is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err((StatusCode::BAD_REQUEST, "Invalid email".into()));
    }

    let home = geocode::services::coordinates_for_address(
        state.geocoder.as_ref(),
        &payload.home_address,
    )
    .await
    .map_err(|e| Error::GeoCode(e).into_rejection())?;
    let work = geocode::services::coordinates_for_address(
        state.geocoder.as_ref(),
        &payload.work_address,
    )
    .await
    .map_err(|e| Error::GeoCode(e).into_rejection())?;

    let employee = services::add(
        &state.db,
        NewEmployee {
            name: payload.name,
            email: payload.email,
            home,
            work,
            default_mode: payload.default_commute_mode,
        },
    )
    .await
    .map_err(Error::into_rejection)?;

    info!(employee_id = %employee.id, email = %employee.email, "employee registered");
    Ok(Json(RegisterResponse { id: employee.id }))
}

#[instrument(skip(state, payload))]
pub async fn update(
    State(state): State<AppState>,
    Json(payload): Json<UpdateRequest>,
) -> Result<StatusCode, (StatusCode, String)> {
    let home = geocode::services::coordinates_for_address(
        state.geocoder.as_ref(),
        &payload.home_address,
    )
    .await
    .map_err(|e| Error::GeoCode(e).into_rejection())?;
    let work = geocode::services::coordinates_for_address(
        state.geocoder.as_ref(),
        &payload.work_address,
    )
    .await
    .map_err(|e| Error::GeoCode(e).into_rejection())?;

    let now = OffsetDateTime::now_utc();
    let incoming = Employee {
        id: payload.id,
        name: payload.name,
        email: String::new(), // replaced with the stored value by the service
        home_lon: home.lon,
        home_lat: home.lat,
        work_lon: work.lon,
        work_lat: work.lat,
        default_mode: payload.default_commute_mode,
        created_at: now, // replaced with the stored value by the service
        updated_at: now,
    };

    let employee = services::update(&state.db, incoming)
        .await
        .map_err(Error::into_rejection)?;

    info!(employee_id = %employee.id, "employee updated");
    Ok(StatusCode::OK)
}

#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Query(query): Query<DeleteQuery>,
) -> Result<StatusCode, (StatusCode, String)> {
    let removed = services::delete_by_id(&state.db, query.id)
        .await
        .map_err(Error::into_rejection)?;

    if !removed {
        info!(employee_id = %query.id, "delete affected no rows");
    }
    Ok(StatusCode::OK)
}
