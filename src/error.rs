use axum::http::StatusCode;
use tracing::error;

use crate::geocode::GeoCodeError;

/// Error kinds produced by the service layer. The API layer translates
/// these to status codes; anything unexpected collapses to a generic 400.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("employee not found")]
    EmployeeNotFound,
    #[error("commute not found")]
    CommuteNotFound,
    #[error("email already registered")]
    EmailTaken,
    #[error(transparent)]
    GeoCode(#[from] GeoCodeError),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl Error {
    pub fn into_rejection(self) -> (StatusCode, String) {
        match self {
            Error::EmployeeNotFound | Error::CommuteNotFound => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            Error::EmailTaken | Error::GeoCode(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            Error::Database(e) => {
                error!(error = %e, "unhandled database error");
                (StatusCode::BAD_REQUEST, "request could not be processed".into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let (status, _) = Error::EmployeeNotFound.into_rejection();
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = Error::CommuteNotFound.into_rejection();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn geocode_failures_map_to_400() {
        let err = Error::GeoCode(GeoCodeError::StreetMismatch {
            requested: "Mier".into(),
            resolved: "Meir".into(),
        });
        let (status, message) = err.into_rejection();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(message.contains("Mier"));
    }

    #[test]
    fn database_errors_map_to_400_without_detail() {
        let (status, message) = Error::Database(sqlx::Error::RowNotFound).into_rejection();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!message.contains("row"));
    }
}
