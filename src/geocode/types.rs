use serde::{Deserialize, Serialize};

/// Postal address as used for geocoding. Never persisted; employees only
/// store the resolved coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub number: String,
    pub zip_code: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_iso2_code: Option<String>,
}

impl Address {
    /// Free-form query string understood by the geocoding provider.
    pub fn to_query_string(&self) -> String {
        let mut query = format!(
            "{} {}, {} {}",
            self.street, self.number, self.zip_code, self.city
        );
        if let Some(code) = &self.country_iso2_code {
            query.push_str(", ");
            query.push_str(code);
        }
        query
    }
}

/// Longitude/latitude pair (x = lon, y = lat).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_includes_country_code_when_present() {
        let address = Address {
            street: "Grotesteenweg".into(),
            number: "214".into(),
            zip_code: "2600".into(),
            city: "Antwerpen".into(),
            country_iso2_code: Some("BE".into()),
        };
        assert_eq!(address.to_query_string(), "Grotesteenweg 214, 2600 Antwerpen, BE");
    }

    #[test]
    fn query_string_omits_missing_country_code() {
        let address = Address {
            street: "Meir".into(),
            number: "1".into(),
            zip_code: "2000".into(),
            city: "Antwerpen".into(),
            country_iso2_code: None,
        };
        assert_eq!(address.to_query_string(), "Meir 1, 2000 Antwerpen");
    }

    #[test]
    fn address_deserializes_from_camel_case() {
        let address: Address = serde_json::from_str(
            r#"{"street":"Meir","number":"1","zipCode":"2000","city":"Antwerpen","countryIso2Code":"BE"}"#,
        )
        .unwrap();
        assert_eq!(address.zip_code, "2000");
        assert_eq!(address.country_iso2_code.as_deref(), Some("BE"));
    }
}
