//! DTOs for hospital registration and update.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::{Hospital, NewHospital};
use crate::error::{AppError, FieldErrors, field_errors};

/// Accepted phone format: optional `+`, optional leading `1`, then 9–15 digits.
pub static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?1?\d{9,15}$").unwrap());

const MISSING: &str = "Missing data for required field.";
const NOT_A_STRING: &str = "Not a valid string.";
const NOT_AN_INTEGER: &str = "Not a valid integer.";

/// Request body for `POST /api/hospitals` and `PUT /api/hospitals/{id}`.
///
/// Kept as a raw JSON object so that a field of the wrong type is reported
/// next to every other violation instead of aborting deserialization.
/// Unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct HospitalRequest(Map<String, Value>);

/// Typed view of a request body, checked by `validator`.
///
/// A field is `None` when it is absent, `null` or of the wrong type.
#[derive(Debug, Validate)]
struct HospitalFields {
    #[validate(
        required(message = "Missing data for required field."),
        length(min = 1, max = 100, message = "Length must be between 1 and 100.")
    )]
    name: Option<String>,

    #[validate(
        required(message = "Missing data for required field."),
        length(min = 1, max = 200, message = "Length must be between 1 and 200.")
    )]
    address: Option<String>,

    #[validate(
        required(message = "Missing data for required field."),
        regex(path = *PHONE_REGEX, message = "String does not match expected pattern.")
    )]
    phone: Option<String>,

    #[validate(
        required(message = "Missing data for required field."),
        range(min = 1, message = "Must be greater than or equal to 1.")
    )]
    capacity: Option<i64>,
}

fn take_string(body: &mut Map<String, Value>, key: &str, errors: &mut FieldErrors) -> Option<String> {
    match body.remove(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(_) => {
            errors.insert(key.to_string(), vec![NOT_A_STRING.to_string()]);
            None
        }
    }
}

fn take_integer(body: &mut Map<String, Value>, key: &str, errors: &mut FieldErrors) -> Option<i64> {
    match body.remove(key) {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) if n.is_i64() => n.as_i64(),
        Some(_) => {
            errors.insert(key.to_string(), vec![NOT_AN_INTEGER.to_string()]);
            None
        }
    }
}

impl TryFrom<HospitalRequest> for NewHospital {
    type Error = AppError;

    fn try_from(HospitalRequest(mut body): HospitalRequest) -> Result<Self, Self::Error> {
        let mut type_errors = FieldErrors::new();
        let fields = HospitalFields {
            name: take_string(&mut body, "name", &mut type_errors),
            address: take_string(&mut body, "address", &mut type_errors),
            phone: take_string(&mut body, "phone", &mut type_errors),
            capacity: take_integer(&mut body, "capacity", &mut type_errors),
        };

        let mut invalid = match fields.validate() {
            Ok(()) => FieldErrors::new(),
            Err(errors) => field_errors(&errors),
        };
        // A mistyped field reads as missing to the validator; keep the type error instead.
        invalid.extend(type_errors);

        if !invalid.is_empty() {
            return Err(AppError::invalid_fields(invalid));
        }

        match (fields.name, fields.address, fields.phone, fields.capacity) {
            (Some(name), Some(address), Some(phone), Some(capacity)) => Ok(NewHospital {
                name,
                address,
                phone,
                capacity,
            }),
            _ => Err(AppError::bad_request(MISSING)),
        }
    }
}

/// Serialized hospital record.
#[derive(Debug, Serialize, Deserialize)]
pub struct HospitalResponse {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub capacity: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Hospital> for HospitalResponse {
    fn from(h: Hospital) -> Self {
        Self {
            id: h.id,
            name: h.name,
            address: h.address,
            phone: h.phone,
            capacity: h.capacity,
            created_at: h.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> HospitalRequest {
        serde_json::from_value(body).unwrap()
    }

    fn valid(name: &str, address: &str, phone: &str, capacity: i64) -> HospitalRequest {
        request(json!({
            "name": name,
            "address": address,
            "phone": phone,
            "capacity": capacity
        }))
    }

    fn invalid_fields(req: HospitalRequest) -> FieldErrors {
        match NewHospital::try_from(req) {
            Err(AppError::Validation {
                fields: Some(fields),
                ..
            }) => fields,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    fn invalid_names(req: HospitalRequest) -> Vec<String> {
        invalid_fields(req).into_keys().collect()
    }

    #[test]
    fn test_valid_request_converts() {
        let new = NewHospital::try_from(valid("Test Hospital", "123 Test St", "1234567890", 100))
            .unwrap();

        assert_eq!(new.name, "Test Hospital");
        assert_eq!(new.capacity, 100);
    }

    #[test]
    fn test_phone_pattern() {
        for ok in ["123456789", "+11234567890", "1123456789012345", "+123456789012345"] {
            assert!(PHONE_REGEX.is_match(ok), "{ok} should match");
        }
        for bad in ["12345678", "phone-number", "+1 234 567 890", "1234567890123456789", ""] {
            assert!(!PHONE_REGEX.is_match(bad), "{bad} should not match");
        }
    }

    #[test]
    fn test_capacity_zero_rejected() {
        assert_eq!(invalid_names(valid("A", "B", "1234567890", 0)), vec!["capacity"]);
    }

    #[test]
    fn test_length_bounds() {
        let long_name = "n".repeat(101);
        let long_address = "a".repeat(201);

        assert_eq!(
            invalid_names(valid(&long_name, &long_address, "1234567890", 5)),
            vec!["address", "name"]
        );
        assert_eq!(invalid_names(valid("", "B", "1234567890", 5)), vec!["name"]);

        let edge = valid(&"n".repeat(100), &"a".repeat(200), "1234567890", 1);
        assert!(NewHospital::try_from(edge).is_ok());
    }

    #[test]
    fn test_all_missing_fields_reported_together() {
        let fields = invalid_fields(request(json!({})));

        assert_eq!(
            fields.keys().collect::<Vec<_>>(),
            vec!["address", "capacity", "name", "phone"]
        );
        assert_eq!(fields["name"], vec![MISSING]);
    }

    #[test]
    fn test_null_counts_as_missing() {
        let req = request(json!({
            "name": null,
            "address": "B",
            "phone": "1234567890",
            "capacity": 3
        }));

        assert_eq!(invalid_names(req), vec!["name"]);
    }

    #[test]
    fn test_wrong_types_reported_with_other_violations() {
        let fields = invalid_fields(request(json!({
            "name": 123,
            "address": "",
            "phone": "x",
            "capacity": 0
        })));

        assert_eq!(fields["name"], vec![NOT_A_STRING]);
        assert_eq!(fields.len(), 4);
        assert!(fields.contains_key("address"));
        assert!(fields.contains_key("phone"));
        assert!(fields.contains_key("capacity"));
    }

    #[test]
    fn test_non_integer_capacity() {
        for capacity in [json!("10"), json!(2.5), json!(true), json!([1])] {
            let fields = invalid_fields(request(json!({
                "name": "A",
                "address": "B",
                "phone": "1234567890",
                "capacity": capacity
            })));

            assert_eq!(fields["capacity"], vec![NOT_AN_INTEGER]);
            assert_eq!(fields.len(), 1);
        }
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut body = json!({
            "name": "A",
            "address": "B",
            "phone": "1234567890",
            "capacity": 1
        });
        body["id"] = json!(99);
        body["created_at"] = json!("1999-01-01T00:00:00Z");

        assert!(NewHospital::try_from(request(body)).is_ok());
    }

    #[test]
    fn test_non_object_body_rejected_by_serde() {
        assert!(serde_json::from_value::<HospitalRequest>(json!([1, 2])).is_err());
        assert!(serde_json::from_value::<HospitalRequest>(json!("name")).is_err());
    }

    #[test]
    fn test_multibyte_names_count_characters() {
        let name = "é".repeat(100);
        assert!(NewHospital::try_from(valid(&name, "B", "1234567890", 1)).is_ok());
    }
}
