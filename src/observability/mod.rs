//! Structured logging.
//!
//! One JSON object per line on stdout, written synchronously. No
//! metrics; the spec scopes observability to event logs.

pub mod logger;

pub use logger::{log_event, Severity};
