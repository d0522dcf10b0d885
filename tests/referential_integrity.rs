//! Referential integrity invariants.
//!
//! A dependent document is only created when every reference it carries
//! resolves; a failed check aborts the creation with no partial write.

use mediward::api::{ApiError, HospitalApi};
use mediward::model::{Appointment, Doctor, Patient, Prescription};
use mediward::store::{DocumentId, MemoryStore};
use serde_json::json;

fn api() -> HospitalApi<MemoryStore> {
    HospitalApi::new(MemoryStore::new())
}

fn create_user(api: &HospitalApi<MemoryStore>, role: &str) -> String {
    api.create_user(&json!({
        "name": "Someone",
        "email": "someone@example.com",
        "role": role
    }))
    .unwrap()
    .id
}

fn dangling() -> String {
    DocumentId::mint().encode()
}

#[test]
fn doctor_with_dangling_user_is_not_inserted() {
    let api = api();
    let err = api
        .create_doctor(&json!({"user_id": dangling(), "specialty": "cardiology"}))
        .unwrap_err();

    assert!(matches!(err, ApiError::ReferenceNotFound("User")));
    assert_eq!(err.status_code().as_u16(), 404);
    assert_eq!(api.store().count(Doctor::COLLECTION).unwrap(), 0);
}

#[test]
fn doctor_with_malformed_user_id_is_rejected() {
    let api = api();
    let err = api
        .create_doctor(&json!({"user_id": "not-an-id", "specialty": "cardiology"}))
        .unwrap_err();

    assert!(matches!(err, ApiError::InvalidIdentifier(_)));
    assert_eq!(err.status_code().as_u16(), 400);
    assert_eq!(api.store().count(Doctor::COLLECTION).unwrap(), 0);
}

#[test]
fn patient_with_dangling_user_is_not_inserted() {
    let api = api();
    let err = api.create_patient(&json!({"user_id": dangling()})).unwrap_err();

    assert!(matches!(err, ApiError::ReferenceNotFound("User")));
    assert_eq!(api.store().count(Patient::COLLECTION).unwrap(), 0);
}

#[test]
fn appointment_with_bad_references_is_not_inserted() {
    let api = api();
    let user_id = create_user(&api, "patient");
    let patient_id = api.create_patient(&json!({"user_id": user_id})).unwrap().id;

    // Valid patient, dangling doctor
    let err = api
        .create_appointment(&json!({
            "patient_id": patient_id,
            "doctor_id": dangling(),
            "reason": "checkup",
            "scheduled_at": "2026-09-01T09:30:00Z"
        }))
        .unwrap_err();
    assert!(matches!(err, ApiError::ReferenceNotFound("Doctor")));

    // Dangling patient: reported before the doctor is even checked
    let err = api
        .create_appointment(&json!({
            "patient_id": dangling(),
            "doctor_id": dangling(),
            "reason": "checkup",
            "scheduled_at": "2026-09-01T09:30:00Z"
        }))
        .unwrap_err();
    assert!(matches!(err, ApiError::ReferenceNotFound("Patient")));

    // Missing patient_id entirely: validation failure, still no insert
    let err = api
        .create_appointment(&json!({
            "doctor_id": dangling(),
            "reason": "checkup",
            "scheduled_at": "2026-09-01T09:30:00Z"
        }))
        .unwrap_err();
    assert!(matches!(err, ApiError::Validation { .. }));

    assert_eq!(api.store().count(Appointment::COLLECTION).unwrap(), 0);
}

#[test]
fn prescription_with_dangling_appointment_is_not_inserted() {
    let api = api();
    let err = api
        .create_prescription(&json!({
            "appointment_id": dangling(),
            "medications": ["ibuprofen"]
        }))
        .unwrap_err();

    assert!(matches!(err, ApiError::ReferenceNotFound("Appointment")));
    assert_eq!(api.store().count(Prescription::COLLECTION).unwrap(), 0);
}

#[test]
fn every_created_id_resolves_as_a_reference() {
    let api = api();

    let patient_user = create_user(&api, "patient");
    let doctor_user = create_user(&api, "doctor");

    let patient_id = api
        .create_patient(&json!({"user_id": patient_user, "age": 34}))
        .unwrap()
        .id;
    let doctor_id = api
        .create_doctor(&json!({"user_id": doctor_user, "specialty": "gp"}))
        .unwrap()
        .id;

    let appointment_id = api
        .create_appointment(&json!({
            "patient_id": patient_id,
            "doctor_id": doctor_id,
            "reason": "persistent cough",
            "scheduled_at": "2026-09-01T09:30:00Z"
        }))
        .unwrap()
        .id;

    let rx = api
        .create_prescription(&json!({
            "appointment_id": appointment_id,
            "medications": ["amoxicillin"],
            "notes": "five days"
        }))
        .unwrap();

    assert_eq!(api.store().count(Prescription::COLLECTION).unwrap(), 1);
    assert!(DocumentId::decode(&rx.id).is_ok());
}
