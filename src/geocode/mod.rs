pub mod client;
pub mod services;
pub mod types;

pub use client::{GeoCodeClient, GeoCodeError, Nominatim};
pub use types::{Address, Coordinate};
