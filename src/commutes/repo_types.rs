use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

/// Mode of transport for a single commute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "commute_mode", rename_all = "snake_case")]
pub enum CommuteMode {
    Car,
    Bike,
    PublicTransport,
    Walk,
}

/// Commute record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Commute {
    pub id: Uuid,
    pub employee_id: Uuid,            // owning employee, immutable after creation
    pub mode: CommuteMode,
    pub date: Date,
    pub created_at: OffsetDateTime,   // immutable after creation
    pub updated_at: OffsetDateTime,
}

/// Insert payload; id and timestamps are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewCommute {
    pub employee_id: Uuid,
    pub mode: CommuteMode,
    pub date: Date,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commute_mode_serializes_as_snake_case() {
        assert_eq!(
            serde_json::to_value(CommuteMode::PublicTransport).unwrap(),
            "public_transport"
        );
        assert_eq!(serde_json::to_value(CommuteMode::Car).unwrap(), "car");
    }

    #[test]
    fn commute_mode_deserializes_from_snake_case() {
        let mode: CommuteMode = serde_json::from_str(r#""bike""#).unwrap();
        assert_eq!(mode, CommuteMode::Bike);
    }
}
