//! # Entities
//!
//! The five persisted entities and their closed enums. Each entity maps
//! to a collection named after it in lowercase. Role, gender and
//! appointment status are tagged variants rather than loose strings, so
//! an out-of-range value is unrepresentable once a payload has passed
//! validation.
//!
//! Reference fields (`user_id`, `patient_id`, `doctor_id`,
//! `appointment_id`) hold the encoded identifier of another document.
//! They are lookup keys only; the referenced document is independently
//! owned.

pub mod errors;
pub mod validate;

pub use errors::{ValidationError, ValidationResult};

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Doctor,
    Patient,
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "doctor" => Ok(Role::Doctor),
            "patient" => Ok(Role::Patient),
            other => Err(format!(
                "unknown role {:?}, expected one of: admin, doctor, patient",
                other
            )),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Admin => "admin",
            Role::Doctor => "doctor",
            Role::Patient => "patient",
        };
        write!(f, "{}", name)
    }
}

/// Patient gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            unknown => Err(format!(
                "unknown gender {:?}, expected one of: male, female, other",
                unknown
            )),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        };
        write!(f, "{}", name)
    }
}

/// Appointment lifecycle status.
///
/// Any status may be set from any other; the workflow controller stamps
/// `updated_at` on each transition but enforces no ordering between
/// states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl FromStr for AppointmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(AppointmentStatus::Pending),
            "confirmed" => Ok(AppointmentStatus::Confirmed),
            "completed" => Ok(AppointmentStatus::Completed),
            "cancelled" => Ok(AppointmentStatus::Cancelled),
            unknown => Err(format!(
                "unknown status {:?}, expected one of: pending, confirmed, completed, cancelled",
                unknown
            )),
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        };
        write!(f, "{}", name)
    }
}

/// An account. Created by admin action; never deleted in scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub is_active: bool,
}

impl User {
    pub const COLLECTION: &'static str = "user";
}

/// A doctor profile. `user_id` must reference an existing [`User`] at
/// creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub user_id: String,
    pub specialty: String,
    pub experience_years: i64,
    pub availability: Vec<String>,
}

impl Doctor {
    pub const COLLECTION: &'static str = "doctor";
}

/// A patient profile. `user_id` must reference an existing [`User`] at
/// creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    pub conditions: Vec<String>,
}

impl Patient {
    pub const COLLECTION: &'static str = "patient";
}

/// A scheduled visit. `patient_id` and `doctor_id` must reference
/// existing documents at creation time; `updated_at` appears once the
/// status changes for the first time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub patient_id: String,
    pub doctor_id: String,
    pub reason: String,
    pub scheduled_at: DateTime<Utc>,
    pub status: AppointmentStatus,
}

impl Appointment {
    pub const COLLECTION: &'static str = "appointment";
}

/// A doctor's prescription. `appointment_id` must reference an existing
/// [`Appointment`] at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prescription {
    pub appointment_id: String,
    pub medications: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Prescription {
    pub const COLLECTION: &'static str = "prescription";
}
