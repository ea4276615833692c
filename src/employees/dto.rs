use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::commutes::CommuteMode;
use crate::geocode::Address;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub home_address: Address,
    pub work_address: Address,
    pub default_commute_mode: CommuteMode,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub id: Uuid,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    pub id: Uuid,
    pub name: String,
    pub home_address: Address,
    pub work_address: Address,
    pub default_commute_mode: CommuteMode,
}

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    pub id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_deserializes_camel_case() {
        let request: RegisterRequest = serde_json::from_value(serde_json::json!({
            "name": "Jos",
            "email": "jos@intracto.com",
            "homeAddress": {
                "street": "Meir", "number": "1", "zipCode": "2000",
                "city": "Antwerpen", "countryIso2Code": "BE"
            },
            "workAddress": {
                "street": "Grotesteenweg", "number": "128", "zipCode": "2600",
                "city": "Antwerpen"
            },
            "defaultCommuteMode": "public_transport",
        }))
        .unwrap();

        assert_eq!(request.home_address.street, "Meir");
        assert!(request.work_address.country_iso2_code.is_none());
        assert_eq!(request.default_commute_mode, CommuteMode::PublicTransport);
    }
}
