//! End-to-end behavior of the operation core: round-trips, list
//! idempotence and the serialization rules every endpoint shares.

use chrono::DateTime;
use mediward::api::{HospitalApi, PrescriptionQuery};
use mediward::store::MemoryStore;
use serde_json::json;

fn api() -> HospitalApi<MemoryStore> {
    HospitalApi::new(MemoryStore::new())
}

#[test]
fn user_create_then_list_round_trip() {
    let api = api();
    let created = api
        .create_user(&json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "role": "admin"
        }))
        .unwrap();

    let users = api.list_users().unwrap();
    assert_eq!(users.len(), 1);

    let user = &users[0];
    assert_eq!(user["id"].as_str().unwrap(), created.id);
    assert_eq!(user["name"], "Ada Lovelace");
    assert_eq!(user["email"], "ada@example.com");
    assert_eq!(user["role"], "admin");
    assert_eq!(user["is_active"], true);
}

#[test]
fn serialized_documents_use_public_id_and_iso_timestamps() {
    let api = api();
    api.create_user(&json!({
        "name": "Ada",
        "email": "ada@example.com",
        "role": "admin"
    }))
    .unwrap();

    let user = &api.list_users().unwrap()[0];
    assert!(user.get("_id").is_none());
    assert!(user["id"].is_string());

    let created_at = user["created_at"].as_str().unwrap();
    assert!(DateTime::parse_from_rfc3339(created_at).is_ok());
}

#[test]
fn list_endpoints_are_idempotent() {
    let api = api();
    for i in 0..3 {
        api.create_user(&json!({
            "name": format!("User {}", i),
            "email": format!("user{}@example.com", i),
            "role": "patient"
        }))
        .unwrap();
    }

    let first = api.list_users().unwrap();
    let second = api.list_users().unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

#[test]
fn validation_failures_map_to_bad_request() {
    let api = api();

    let cases = [
        json!({"email": "a@example.com", "role": "admin"}),          // missing name
        json!({"name": "A", "email": "a@example.com", "role": "x"}), // bad enum
        json!({"name": 1, "email": "a@example.com", "role": "admin"}), // bad type
    ];
    for payload in cases {
        let err = api.create_user(&payload).unwrap_err();
        assert_eq!(err.status_code().as_u16(), 400, "payload: {}", payload);
    }
    assert!(api.list_users().unwrap().is_empty());
}

#[test]
fn prescriptions_filter_by_appointment() {
    let api = api();

    let patient_user = api
        .create_user(&json!({"name": "P", "email": "p@example.com", "role": "patient"}))
        .unwrap()
        .id;
    let doctor_user = api
        .create_user(&json!({"name": "D", "email": "d@example.com", "role": "doctor"}))
        .unwrap()
        .id;
    let patient_id = api
        .create_patient(&json!({"user_id": patient_user}))
        .unwrap()
        .id;
    let doctor_id = api
        .create_doctor(&json!({"user_id": doctor_user, "specialty": "gp"}))
        .unwrap()
        .id;

    let mut appointment_ids = Vec::new();
    for day in ["01", "02"] {
        let id = api
            .create_appointment(&json!({
                "patient_id": patient_id.clone(),
                "doctor_id": doctor_id.clone(),
                "reason": "follow-up",
                "scheduled_at": format!("2026-09-{}T09:30:00Z", day)
            }))
            .unwrap()
            .id;
        api.create_prescription(&json!({
            "appointment_id": id.clone(),
            "medications": ["ibuprofen"]
        }))
        .unwrap();
        appointment_ids.push(id);
    }

    let all = api.list_prescriptions(&PrescriptionQuery::default()).unwrap();
    assert_eq!(all.len(), 2);

    let filtered = api
        .list_prescriptions(&PrescriptionQuery {
            appointment_id: Some(appointment_ids[0].clone()),
        })
        .unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0]["appointment_id"].as_str().unwrap(), appointment_ids[0]);

    // Unknown or malformed ids simply match nothing in list queries.
    let none = api
        .list_prescriptions(&PrescriptionQuery {
            appointment_id: Some("not-an-id".to_string()),
        })
        .unwrap();
    assert!(none.is_empty());
}

#[test]
fn patient_optional_fields_round_trip() {
    let api = api();
    let user_id = api
        .create_user(&json!({"name": "P", "email": "p@example.com", "role": "patient"}))
        .unwrap()
        .id;

    api.create_patient(&json!({
        "user_id": user_id,
        "age": 41,
        "gender": "female",
        "conditions": ["asthma"]
    }))
    .unwrap();

    let patient = &api.list_patients().unwrap()[0];
    assert_eq!(patient["age"], 41);
    assert_eq!(patient["gender"], "female");
    assert_eq!(patient["conditions"], json!(["asthma"]));
}
