use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::config::GeoCodeConfig;

use super::types::{Address, Coordinate};

#[derive(Debug, thiserror::Error)]
pub enum GeoCodeError {
    #[error("no coordinates found for \"{0}\"")]
    ForwardFailed(String),
    #[error("no address found at ({lon}, {lat})")]
    ReverseFailed { lon: f64, lat: f64 },
    #[error("street name mismatch: requested \"{requested}\", provider returned \"{resolved}\"")]
    StreetMismatch { requested: String, resolved: String },
    #[error("geocoding provider error: {0}")]
    Provider(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

#[async_trait]
pub trait GeoCodeClient: Send + Sync {
    async fn forward(&self, address: &Address) -> Result<Coordinate, GeoCodeError>;
    async fn reverse(&self, coordinate: Coordinate) -> Result<Address, GeoCodeError>;
}

/// Nominatim-compatible HTTP geocoder.
#[derive(Clone)]
pub struct Nominatim {
    http: reqwest::Client,
    base_url: String,
}

impl Nominatim {
    pub fn new(config: &GeoCodeConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

// Nominatim serializes lat/lon as strings in its search replies.
#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
}

#[derive(Debug, Deserialize)]
struct ReverseReply {
    address: Option<ReverseAddress>,
}

#[derive(Debug, Deserialize)]
struct ReverseAddress {
    road: Option<String>,
    house_number: Option<String>,
    postcode: Option<String>,
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    country_code: Option<String>,
}

#[async_trait]
impl GeoCodeClient for Nominatim {
    async fn forward(&self, address: &Address) -> Result<Coordinate, GeoCodeError> {
        let query = address.to_query_string();
        let hits: Vec<SearchHit> = self
            .http
            .get(format!("{}/search", self.base_url))
            .query(&[("q", query.as_str()), ("format", "jsonv2"), ("limit", "1")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let hit = hits
            .into_iter()
            .next()
            .ok_or_else(|| GeoCodeError::ForwardFailed(query.clone()))?;

        let lon = hit
            .lon
            .parse::<f64>()
            .map_err(|_| GeoCodeError::Provider(format!("unparseable longitude \"{}\"", hit.lon)))?;
        let lat = hit
            .lat
            .parse::<f64>()
            .map_err(|_| GeoCodeError::Provider(format!("unparseable latitude \"{}\"", hit.lat)))?;

        debug!(%query, lon, lat, "forward geocoded");
        Ok(Coordinate { lon, lat })
    }

    async fn reverse(&self, coordinate: Coordinate) -> Result<Address, GeoCodeError> {
        let reply: ReverseReply = self
            .http
            .get(format!("{}/reverse", self.base_url))
            .query(&[
                ("lat", coordinate.lat.to_string()),
                ("lon", coordinate.lon.to_string()),
                ("format", "jsonv2".to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let parts = reply.address.ok_or(GeoCodeError::ReverseFailed {
            lon: coordinate.lon,
            lat: coordinate.lat,
        })?;

        debug!(lon = coordinate.lon, lat = coordinate.lat, road = ?parts.road, "reverse geocoded");
        Ok(Address {
            street: parts.road.unwrap_or_default(),
            number: parts.house_number.unwrap_or_default(),
            zip_code: parts.postcode.unwrap_or_default(),
            city: parts.city.or(parts.town).or(parts.village).unwrap_or_default(),
            country_iso2_code: parts.country_code.map(|c| c.to_lowercase()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_reply_parses_string_coordinates() {
        let hits: Vec<SearchHit> = serde_json::from_str(
            r#"[{"place_id":1,"lat":"51.193298900000002","lon":"4.4224318731099341","display_name":"Grotesteenweg 214"}]"#,
        )
        .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].lon.parse::<f64>().unwrap(), 4.4224318731099341);
        assert_eq!(hits[0].lat.parse::<f64>().unwrap(), 51.193298900000002);
    }

    #[test]
    fn reverse_reply_parses_address_parts() {
        let reply: ReverseReply = serde_json::from_str(
            r#"{"address":{"house_number":"214","road":"Grotesteenweg","town":"Berchem","city":"Antwerpen","postcode":"2600","country_code":"be"}}"#,
        )
        .unwrap();
        let parts = reply.address.unwrap();
        assert_eq!(parts.road.as_deref(), Some("Grotesteenweg"));
        assert_eq!(parts.house_number.as_deref(), Some("214"));
        assert_eq!(parts.postcode.as_deref(), Some("2600"));
        assert_eq!(parts.country_code.as_deref(), Some("be"));
    }

    #[test]
    fn reverse_reply_without_address_is_none() {
        let reply: ReverseReply =
            serde_json::from_str(r#"{"error":"Unable to geocode"}"#).unwrap();
        assert!(reply.address.is_none());
    }
}
