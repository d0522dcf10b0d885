//! # Operation Core
//!
//! [`HospitalApi`] implements every API operation independently of the
//! HTTP transport: validate the payload, run the referential checks in
//! their fixed order, then touch the store. The HTTP layer only decodes
//! requests and hands them here, which keeps the whole surface testable
//! against an injected [`MemoryStore`](crate::store::MemoryStore).

pub mod errors;
pub mod response;

pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use response::Created;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::integrity::require_exists;
use crate::model::validate;
use crate::model::{Appointment, Doctor, Patient, Prescription, User};
use crate::observability::{log_event, Severity};
use crate::store::{DocumentStore, Filter};
use crate::workflow;

use response::{serialize_document, serialize_documents};

/// Exact-match query parameters for `GET /api/appointments`.
///
/// Values are matched against the stored reference strings as-is; a
/// malformed id simply matches nothing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppointmentQuery {
    pub patient_id: Option<String>,
    pub doctor_id: Option<String>,
    pub status: Option<String>,
}

/// Query parameters for `GET /api/prescriptions`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrescriptionQuery {
    pub appointment_id: Option<String>,
}

/// Transport-independent operation core over an injected store.
pub struct HospitalApi<S> {
    store: S,
}

impl<S: DocumentStore> HospitalApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store gateway.
    pub fn store(&self) -> &S {
        &self.store
    }

    // ==================
    // Users
    // ==================

    pub fn create_user(&self, payload: &Value) -> ApiResult<Created> {
        let user = validate::user_from_payload(payload)?;
        let created = self.insert_entity(User::COLLECTION, &user)?;
        log_event(
            Severity::Info,
            "user.created",
            &[("id", &created.id), ("role", &user.role.to_string())],
        );
        Ok(created)
    }

    pub fn list_users(&self) -> ApiResult<Vec<Value>> {
        self.list_collection(User::COLLECTION, &Filter::new())
    }

    // ==================
    // Doctors
    // ==================

    pub fn create_doctor(&self, payload: &Value) -> ApiResult<Created> {
        let doctor = validate::doctor_from_payload(payload)?;
        require_exists(&self.store, User::COLLECTION, "User", &doctor.user_id)?;
        let created = self.insert_entity(Doctor::COLLECTION, &doctor)?;
        log_event(Severity::Info, "doctor.created", &[("id", &created.id)]);
        Ok(created)
    }

    pub fn list_doctors(&self) -> ApiResult<Vec<Value>> {
        self.list_collection(Doctor::COLLECTION, &Filter::new())
    }

    // ==================
    // Patients
    // ==================

    pub fn create_patient(&self, payload: &Value) -> ApiResult<Created> {
        let patient = validate::patient_from_payload(payload)?;
        require_exists(&self.store, User::COLLECTION, "User", &patient.user_id)?;
        let created = self.insert_entity(Patient::COLLECTION, &patient)?;
        log_event(Severity::Info, "patient.created", &[("id", &created.id)]);
        Ok(created)
    }

    pub fn list_patients(&self) -> ApiResult<Vec<Value>> {
        self.list_collection(Patient::COLLECTION, &Filter::new())
    }

    // ==================
    // Appointments
    // ==================

    pub fn create_appointment(&self, payload: &Value) -> ApiResult<Created> {
        let appt = validate::appointment_from_payload(payload)?;
        // Patient is checked before Doctor; the first failure aborts.
        require_exists(&self.store, Patient::COLLECTION, "Patient", &appt.patient_id)?;
        require_exists(&self.store, Doctor::COLLECTION, "Doctor", &appt.doctor_id)?;
        let created = self.insert_entity(Appointment::COLLECTION, &appt)?;
        log_event(
            Severity::Info,
            "appointment.created",
            &[("id", &created.id), ("status", &appt.status.to_string())],
        );
        Ok(created)
    }

    pub fn list_appointments(&self, query: &AppointmentQuery) -> ApiResult<Vec<Value>> {
        let mut filter = Filter::new();
        if let Some(patient_id) = &query.patient_id {
            filter = filter.eq("patient_id", patient_id.clone());
        }
        if let Some(doctor_id) = &query.doctor_id {
            filter = filter.eq("doctor_id", doctor_id.clone());
        }
        if let Some(status) = &query.status {
            filter = filter.eq("status", status.clone());
        }
        self.list_collection(Appointment::COLLECTION, &filter)
    }

    /// `PATCH /api/appointments/:id` — set the status, stamp
    /// `updated_at`, return the updated appointment.
    pub fn update_appointment_status(&self, raw_id: &str, payload: &Value) -> ApiResult<Value> {
        let status = validate::status_update_from_payload(payload)?;
        let doc = workflow::set_status(&self.store, raw_id, status)?;
        log_event(
            Severity::Info,
            "appointment.status_changed",
            &[("id", raw_id), ("status", &status.to_string())],
        );
        Ok(serialize_document(doc))
    }

    // ==================
    // Prescriptions
    // ==================

    pub fn create_prescription(&self, payload: &Value) -> ApiResult<Created> {
        let rx = validate::prescription_from_payload(payload)?;
        require_exists(
            &self.store,
            Appointment::COLLECTION,
            "Appointment",
            &rx.appointment_id,
        )?;
        let created = self.insert_entity(Prescription::COLLECTION, &rx)?;
        log_event(Severity::Info, "prescription.created", &[("id", &created.id)]);
        Ok(created)
    }

    pub fn list_prescriptions(&self, query: &PrescriptionQuery) -> ApiResult<Vec<Value>> {
        let mut filter = Filter::new();
        if let Some(appointment_id) = &query.appointment_id {
            filter = filter.eq("appointment_id", appointment_id.clone());
        }
        self.list_collection(Prescription::COLLECTION, &filter)
    }

    // ==================
    // Diagnostics
    // ==================

    /// Status object for `GET /test`.
    pub fn diagnostics(&self, database_url_set: bool, database_name_set: bool) -> Value {
        let set_flag = |set: bool| if set { "set" } else { "not set" };

        match self.store.collection_names() {
            Ok(mut names) => {
                names.truncate(10);
                json!({
                    "backend": "running",
                    "database": "connected",
                    "database_url": set_flag(database_url_set),
                    "database_name": set_flag(database_name_set),
                    "connection_status": "connected",
                    "collections": names,
                })
            }
            Err(err) => json!({
                "backend": "running",
                "database": format!("error: {}", err),
                "database_url": set_flag(database_url_set),
                "database_name": set_flag(database_name_set),
                "connection_status": "not connected",
                "collections": [],
            }),
        }
    }

    // ==================
    // Helpers
    // ==================

    fn insert_entity<T: Serialize>(&self, collection: &str, entity: &T) -> ApiResult<Created> {
        let record = match serde_json::to_value(entity) {
            Ok(Value::Object(record)) => record,
            Ok(_) => {
                return Err(ApiError::Internal(format!(
                    "entity for {} did not serialize to an object",
                    collection
                )))
            }
            Err(err) => return Err(ApiError::Internal(err.to_string())),
        };
        let id = self.store.insert(collection, record)?;
        Ok(Created::new(id.encode()))
    }

    fn list_collection(&self, collection: &str, filter: &Filter) -> ApiResult<Vec<Value>> {
        let docs = self.store.find_many(collection, filter)?;
        Ok(serialize_documents(docs))
    }
}
