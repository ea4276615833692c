use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::commutes::CommuteMode;
use crate::geocode::Coordinate;

/// Employee record in the database. Coordinates are stored as plain
/// lon/lat column pairs.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub email: String,                // unique, immutable after registration
    pub home_lon: f64,
    pub home_lat: f64,
    pub work_lon: f64,
    pub work_lat: f64,
    pub default_mode: CommuteMode,
    pub created_at: OffsetDateTime,   // immutable after registration
    pub updated_at: OffsetDateTime,
}

impl Employee {
    pub fn home(&self) -> Coordinate {
        Coordinate {
            lon: self.home_lon,
            lat: self.home_lat,
        }
    }

    pub fn work(&self) -> Coordinate {
        Coordinate {
            lon: self.work_lon,
            lat: self.work_lat,
        }
    }
}

/// Insert payload; id and timestamps are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub home: Coordinate,
    pub work: Coordinate,
    pub default_mode: CommuteMode,
}
