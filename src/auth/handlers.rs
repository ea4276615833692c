use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    Json,
};
use tracing::{error, info, instrument, warn};

use crate::{employees, error::Error, state::AppState};

use super::dto::{LoginRequest, LoginResponse};
use super::jwt::JwtKeys;

/// Issues a token when the submitted id/email pair matches a registered
/// employee. Every failure mode answers with a bare 401 so callers cannot
/// tell an unknown id from a mismatched email or a broken lookup.
#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, StatusCode> {
    let employee = match employees::services::get_by_id(&state.db, payload.id).await {
        Ok(employee) => employee,
        Err(Error::EmployeeNotFound) => {
            warn!(employee_id = %payload.id, "login for unknown employee");
            return Err(StatusCode::UNAUTHORIZED);
        }
        Err(e) => {
            error!(error = %e, "login lookup failed");
            return Err(StatusCode::UNAUTHORIZED);
        }
    };

    if !employee.email.eq_ignore_ascii_case(payload.email.trim()) {
        warn!(employee_id = %employee.id, "login email mismatch");
        return Err(StatusCode::UNAUTHORIZED);
    }

    let keys = JwtKeys::from_ref(&state);
    let (token, claims) = keys.sign(employee.id, &employee.email).map_err(|e| {
        error!(error = %e, "jwt sign failed");
        StatusCode::UNAUTHORIZED
    })?;

    info!(employee_id = %employee.id, "employee logged in");
    Ok(Json(LoginResponse { token, claims }))
}
