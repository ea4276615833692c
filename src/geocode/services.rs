use tracing::warn;

use super::client::{GeoCodeClient, GeoCodeError};
use super::types::{Address, Coordinate};

/// Resolves an address to a coordinate and verifies the hit by reverse
/// geocoding it: the provider's street name must match the requested one.
pub async fn coordinates_for_address(
    client: &dyn GeoCodeClient,
    address: &Address,
) -> Result<Coordinate, GeoCodeError> {
    let coordinate = client.forward(address).await?;
    let resolved = client.reverse(coordinate).await?;

    if !street_matches(&address.street, &resolved.street) {
        warn!(
            requested = %address.street,
            resolved = %resolved.street,
            "reverse lookup disagrees with requested street"
        );
        return Err(GeoCodeError::StreetMismatch {
            requested: address.street.clone(),
            resolved: resolved.street,
        });
    }

    Ok(coordinate)
}

fn street_matches(requested: &str, resolved: &str) -> bool {
    requested.trim().to_lowercase() == resolved.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct Resolver {
        street: &'static str,
    }

    #[async_trait]
    impl GeoCodeClient for Resolver {
        async fn forward(&self, _address: &Address) -> Result<Coordinate, GeoCodeError> {
            Ok(Coordinate {
                lon: 4.4224318731099341,
                lat: 51.193298900000002,
            })
        }

        async fn reverse(&self, _coordinate: Coordinate) -> Result<Address, GeoCodeError> {
            Ok(Address {
                street: self.street.into(),
                number: "1".into(),
                zip_code: "2000".into(),
                city: "Antwerpen".into(),
                country_iso2_code: Some("be".into()),
            })
        }
    }

    fn antwerp(street: &str) -> Address {
        Address {
            street: street.into(),
            number: "1".into(),
            zip_code: "2000".into(),
            city: "Antwerpen".into(),
            country_iso2_code: Some("BE".into()),
        }
    }

    #[tokio::test]
    async fn matching_street_yields_coordinate() {
        let client = Resolver { street: "Meir" };
        let coordinate = coordinates_for_address(&client, &antwerp("Meir"))
            .await
            .expect("lookup should validate");
        assert_eq!(coordinate.lon, 4.4224318731099341);
        assert_eq!(coordinate.lat, 51.193298900000002);
    }

    #[tokio::test]
    async fn misspelled_street_is_rejected() {
        // "Mier" forward-resolves somewhere, but the true street there is "Meir".
        let client = Resolver { street: "Meir" };
        let err = coordinates_for_address(&client, &antwerp("Mier"))
            .await
            .unwrap_err();
        assert!(matches!(err, GeoCodeError::StreetMismatch { .. }));
    }

    #[test]
    fn street_comparison_ignores_case_and_whitespace() {
        assert!(street_matches(" grotesteenweg ", "Grotesteenweg"));
        assert!(!street_matches("Mier", "Meir"));
    }
}
