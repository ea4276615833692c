use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use super::repo_types::{Commute, CommuteMode};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCommuteRequest {
    pub employee_id: Uuid,
    pub mode: CommuteMode,
    pub date: Date,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCommuteRequest {
    pub id: Uuid,
    pub mode: CommuteMode,
    pub date: Date,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommutesQuery {
    pub employee_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    pub id: Uuid,
}

/// One commute as listed for an employee.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommuteDto {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub mode: CommuteMode,
    pub date: Date,
}

impl From<Commute> for CommuteDto {
    fn from(c: Commute) -> Self {
        Self {
            id: c.id,
            employee_id: c.employee_id,
            mode: c.mode,
            date: c.date,
        }
    }
}

/// Response for add and update.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommuteResponse {
    pub id: Uuid,
    pub mode: CommuteMode,
    pub date: Date,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn commute_dto_serializes_camel_case() {
        let employee_id = Uuid::new_v4();
        let dto = CommuteDto {
            id: Uuid::new_v4(),
            employee_id,
            mode: CommuteMode::PublicTransport,
            date: date!(2021 - 09 - 14),
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["employeeId"], employee_id.to_string());
        assert_eq!(json["mode"], "public_transport");
        assert_eq!(json["date"], "2021-09-14");
    }

    #[test]
    fn add_request_deserializes_camel_case() {
        let employee_id = Uuid::new_v4();
        let request: AddCommuteRequest = serde_json::from_value(serde_json::json!({
            "employeeId": employee_id,
            "mode": "car",
            "date": "2021-09-14",
        }))
        .unwrap();
        assert_eq!(request.employee_id, employee_id);
        assert_eq!(request.mode, CommuteMode::Car);
        assert_eq!(request.date, date!(2021 - 09 - 14));
    }
}
