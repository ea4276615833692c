use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use time::OffsetDateTime;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{auth::AuthUser, error::Error, state::AppState};

use super::dto::{
    AddCommuteRequest, CommuteDto, CommuteResponse, CommutesQuery, DeleteQuery,
    UpdateCommuteRequest,
};
use super::repo_types::{Commute, NewCommute};
use super::services;

#[instrument(skip(state))]
pub async fn list_for_employee(
    State(state): State<AppState>,
    AuthUser(_caller): AuthUser,
    Query(query): Query<CommutesQuery>,
) -> Result<Json<Vec<CommuteDto>>, (StatusCode, String)> {
    let commutes = services::get_by_employee_id(&state.db, query.employee_id)
        .await
        .map_err(Error::into_rejection)?;
    Ok(Json(commutes.into_iter().map(CommuteDto::from).collect()))
}

#[instrument(skip(state, payload))]
pub async fn add(
    State(state): State<AppState>,
    AuthUser(_caller): AuthUser,
    Json(payload): Json<AddCommuteRequest>,
) -> Result<Json<CommuteResponse>, (StatusCode, String)> {
    let commute = services::add(
        &state.db,
        NewCommute {
            employee_id: payload.employee_id,
            mode: payload.mode,
            date: payload.date,
        },
    )
    .await
    .map_err(Error::into_rejection)?;

    info!(commute_id = %commute.id, employee_id = %commute.employee_id, "commute recorded");
    Ok(Json(CommuteResponse {
        id: commute.id,
        mode: commute.mode,
        date: commute.date,
    }))
}

#[instrument(skip(state, payload))]
pub async fn update(
    State(state): State<AppState>,
    AuthUser(_caller): AuthUser,
    Json(payload): Json<UpdateCommuteRequest>,
) -> Result<Json<CommuteResponse>, (StatusCode, String)> {
    let now = OffsetDateTime::now_utc();
    let incoming = Commute {
        id: payload.id,
        employee_id: Uuid::nil(), // replaced with the stored value by the service
        mode: payload.mode,
        date: payload.date,
        created_at: now, // replaced with the stored value by the service
        updated_at: now,
    };

    let commute = services::update(&state.db, incoming)
        .await
        .map_err(Error::into_rejection)?;

    Ok(Json(CommuteResponse {
        id: commute.id,
        mode: commute.mode,
        date: commute.date,
    }))
}

#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    AuthUser(_caller): AuthUser,
    Query(query): Query<DeleteQuery>,
) -> Result<StatusCode, (StatusCode, String)> {
    let removed = services::delete(&state.db, query.id)
        .await
        .map_err(Error::into_rejection)?;

    if !removed {
        info!(commute_id = %query.id, "delete affected no rows");
    }
    Ok(StatusCode::OK)
}
