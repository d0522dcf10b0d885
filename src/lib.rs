//! mediward - hospital management backend API
//!
//! CRUD and workflow endpoints over users, doctors, patients,
//! appointments and prescriptions, backed by a pluggable document
//! store. The interesting invariants live in `integrity` (references
//! must resolve before a dependent document is created) and `workflow`
//! (the appointment status lifecycle).

pub mod api;
pub mod cli;
pub mod http_server;
pub mod integrity;
pub mod model;
pub mod observability;
pub mod store;
pub mod workflow;
