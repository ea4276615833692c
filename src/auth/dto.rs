use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::claims::Claims;

/// Request body for login: the employee id plus the email it was
/// registered with.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub id: Uuid,
    pub email: String,
}

/// Response returned after a successful login.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub claims: Claims,
}
