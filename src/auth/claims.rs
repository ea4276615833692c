use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT payload issued after a successful login. Fixed claim set: no
/// open-ended claim bag, only the identity pair plus the standard fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,    // employee ID
    pub name: String, // registered email
    pub iat: usize,   // issued at (unix timestamp)
    pub exp: usize,   // expires at (unix timestamp)
    pub iss: String,  // issuer
    pub aud: String,  // audience
}
