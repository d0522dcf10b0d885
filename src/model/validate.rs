//! Entity validators.
//!
//! Each `*_from_payload` constructor turns a raw JSON request body into
//! a typed entity, checking field presence, JSON types, enum membership
//! and numeric bounds. Validation fails fast on the first offending
//! field and runs before any referential check for the entity. Unknown
//! extra fields are ignored.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use super::errors::{ValidationError, ValidationResult};
use super::{Appointment, AppointmentStatus, Doctor, Gender, Patient, Prescription, Role, User};

/// Build a [`User`] from a request body. `is_active` defaults to true.
pub fn user_from_payload(payload: &Value) -> ValidationResult<User> {
    let obj = as_object(payload)?;
    Ok(User {
        name: require_string(obj, "name")?,
        email: require_string(obj, "email")?,
        role: require_enum::<Role>(obj, "role")?,
        is_active: optional_bool(obj, "is_active")?.unwrap_or(true),
    })
}

/// Build a [`Doctor`] from a request body. `experience_years` defaults
/// to 0 and must not be negative; `availability` defaults to empty.
pub fn doctor_from_payload(payload: &Value) -> ValidationResult<Doctor> {
    let obj = as_object(payload)?;
    Ok(Doctor {
        user_id: require_string(obj, "user_id")?,
        specialty: require_string(obj, "specialty")?,
        experience_years: optional_int_in_range(obj, "experience_years", 0, i64::MAX)?
            .unwrap_or(0),
        availability: optional_string_list(obj, "availability")?,
    })
}

/// Build a [`Patient`] from a request body. `age`, when present, must
/// fall in [0, 120]; `conditions` defaults to empty.
pub fn patient_from_payload(payload: &Value) -> ValidationResult<Patient> {
    let obj = as_object(payload)?;
    Ok(Patient {
        user_id: require_string(obj, "user_id")?,
        age: optional_int_in_range(obj, "age", 0, 120)?,
        gender: optional_enum::<Gender>(obj, "gender")?,
        conditions: optional_string_list(obj, "conditions")?,
    })
}

/// Build an [`Appointment`] from a request body. `status` defaults to
/// pending; `scheduled_at` must be an RFC 3339 timestamp.
pub fn appointment_from_payload(payload: &Value) -> ValidationResult<Appointment> {
    let obj = as_object(payload)?;
    Ok(Appointment {
        patient_id: require_string(obj, "patient_id")?,
        doctor_id: require_string(obj, "doctor_id")?,
        reason: require_string(obj, "reason")?,
        scheduled_at: require_datetime(obj, "scheduled_at")?,
        status: optional_enum::<AppointmentStatus>(obj, "status")?
            .unwrap_or(AppointmentStatus::Pending),
    })
}

/// Build a [`Prescription`] from a request body. `medications` defaults
/// to empty; `notes` is optional.
pub fn prescription_from_payload(payload: &Value) -> ValidationResult<Prescription> {
    let obj = as_object(payload)?;
    Ok(Prescription {
        appointment_id: require_string(obj, "appointment_id")?,
        medications: optional_string_list(obj, "medications")?,
        notes: optional_string(obj, "notes")?,
    })
}

/// Validate a `{"status": ...}` PATCH body.
pub fn status_update_from_payload(payload: &Value) -> ValidationResult<AppointmentStatus> {
    let obj = as_object(payload)?;
    require_enum::<AppointmentStatus>(obj, "status")
}

fn as_object(payload: &Value) -> ValidationResult<&Map<String, Value>> {
    payload
        .as_object()
        .ok_or_else(|| ValidationError::type_mismatch("$body", "a JSON object"))
}

fn require_string(obj: &Map<String, Value>, field: &str) -> ValidationResult<String> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(ValidationError::missing(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ValidationError::type_mismatch(field, "a string")),
    }
}

fn optional_string(obj: &Map<String, Value>, field: &str) -> ValidationResult<Option<String>> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ValidationError::type_mismatch(field, "a string")),
    }
}

fn optional_bool(obj: &Map<String, Value>, field: &str) -> ValidationResult<Option<bool>> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(ValidationError::type_mismatch(field, "a boolean")),
    }
}

fn optional_int_in_range(
    obj: &Map<String, Value>,
    field: &str,
    min: i64,
    max: i64,
) -> ValidationResult<Option<i64>> {
    let value = match obj.get(field) {
        None | Some(Value::Null) => return Ok(None),
        Some(value) => value,
    };
    let n = value
        .as_i64()
        .ok_or_else(|| ValidationError::type_mismatch(field, "an integer"))?;
    if n < min || n > max {
        return Err(ValidationError::new(
            field,
            if max == i64::MAX {
                format!("must be at least {}", min)
            } else {
                format!("must be between {} and {}", min, max)
            },
        ));
    }
    Ok(Some(n))
}

fn optional_string_list(obj: &Map<String, Value>, field: &str) -> ValidationResult<Vec<String>> {
    let items = match obj.get(field) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(ValidationError::type_mismatch(field, "an array of strings")),
    };
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                ValidationError::type_mismatch(format!("{}[{}]", field, i), "a string")
            })
        })
        .collect()
}

fn require_enum<T>(obj: &Map<String, Value>, field: &str) -> ValidationResult<T>
where
    T: FromStr<Err = String>,
{
    let raw = require_string(obj, field)?;
    raw.parse::<T>()
        .map_err(|reason| ValidationError::new(field, reason))
}

fn optional_enum<T>(obj: &Map<String, Value>, field: &str) -> ValidationResult<Option<T>>
where
    T: FromStr<Err = String>,
{
    match optional_string(obj, field)? {
        None => Ok(None),
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|reason| ValidationError::new(field, reason)),
    }
}

fn require_datetime(obj: &Map<String, Value>, field: &str) -> ValidationResult<DateTime<Utc>> {
    let raw = require_string(obj, field)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            ValidationError::type_mismatch(field, "an RFC 3339 timestamp")
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_user() {
        let user = user_from_payload(&json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "role": "admin"
        }))
        .unwrap();
        assert_eq!(user.role, Role::Admin);
        assert!(user.is_active);
    }

    #[test]
    fn test_user_is_active_override() {
        let user = user_from_payload(&json!({
            "name": "Ada",
            "email": "ada@example.com",
            "role": "doctor",
            "is_active": false
        }))
        .unwrap();
        assert!(!user.is_active);
    }

    #[test]
    fn test_user_missing_field() {
        let err = user_from_payload(&json!({"name": "Ada", "role": "admin"})).unwrap_err();
        assert_eq!(err.field, "email");
    }

    #[test]
    fn test_user_bad_role() {
        let err = user_from_payload(&json!({
            "name": "Ada",
            "email": "ada@example.com",
            "role": "superuser"
        }))
        .unwrap_err();
        assert_eq!(err.field, "role");
        assert!(err.reason.contains("admin"));
    }

    #[test]
    fn test_non_object_body() {
        let err = user_from_payload(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(err.field, "$body");
    }

    #[test]
    fn test_extra_fields_ignored() {
        let user = user_from_payload(&json!({
            "name": "Ada",
            "email": "ada@example.com",
            "role": "patient",
            "favorite_color": "teal"
        }));
        assert!(user.is_ok());
    }

    #[test]
    fn test_doctor_defaults() {
        let doctor = doctor_from_payload(&json!({
            "user_id": "u1",
            "specialty": "cardiology"
        }))
        .unwrap();
        assert_eq!(doctor.experience_years, 0);
        assert!(doctor.availability.is_empty());
    }

    #[test]
    fn test_doctor_negative_experience() {
        let err = doctor_from_payload(&json!({
            "user_id": "u1",
            "specialty": "cardiology",
            "experience_years": -3
        }))
        .unwrap_err();
        assert_eq!(err.field, "experience_years");
        assert!(err.reason.contains("at least 0"));
    }

    #[test]
    fn test_patient_age_bounds() {
        let ok = patient_from_payload(&json!({"user_id": "u1", "age": 120}));
        assert!(ok.is_ok());

        let err = patient_from_payload(&json!({"user_id": "u1", "age": 121})).unwrap_err();
        assert_eq!(err.field, "age");
        assert!(err.reason.contains("between 0 and 120"));
    }

    #[test]
    fn test_patient_optional_gender() {
        let patient = patient_from_payload(&json!({"user_id": "u1"})).unwrap();
        assert!(patient.gender.is_none());

        let err =
            patient_from_payload(&json!({"user_id": "u1", "gender": "unknown"})).unwrap_err();
        assert_eq!(err.field, "gender");
    }

    #[test]
    fn test_appointment_defaults_to_pending() {
        let appt = appointment_from_payload(&json!({
            "patient_id": "p1",
            "doctor_id": "d1",
            "reason": "checkup",
            "scheduled_at": "2026-09-01T09:30:00Z"
        }))
        .unwrap();
        assert_eq!(appt.status, AppointmentStatus::Pending);
    }

    #[test]
    fn test_appointment_bad_timestamp() {
        let err = appointment_from_payload(&json!({
            "patient_id": "p1",
            "doctor_id": "d1",
            "reason": "checkup",
            "scheduled_at": "next tuesday"
        }))
        .unwrap_err();
        assert_eq!(err.field, "scheduled_at");
    }

    #[test]
    fn test_prescription_medication_list() {
        let rx = prescription_from_payload(&json!({
            "appointment_id": "a1",
            "medications": ["ibuprofen", "amoxicillin"]
        }))
        .unwrap();
        assert_eq!(rx.medications.len(), 2);
        assert!(rx.notes.is_none());

        let err = prescription_from_payload(&json!({
            "appointment_id": "a1",
            "medications": ["ibuprofen", 42]
        }))
        .unwrap_err();
        assert_eq!(err.field, "medications[1]");
    }

    #[test]
    fn test_status_update() {
        let status = status_update_from_payload(&json!({"status": "completed"})).unwrap();
        assert_eq!(status, AppointmentStatus::Completed);

        let err = status_update_from_payload(&json!({"status": "done"})).unwrap_err();
        assert_eq!(err.field, "status");

        let err = status_update_from_payload(&json!({})).unwrap_err();
        assert_eq!(err.field, "status");
        assert!(err.reason.contains("missing"));
    }
}
