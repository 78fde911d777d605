//! Doctor fees module
//!
//! Contains the `DoctorFeeService` which owns every fee use-case:
//! batch save, lookups, fee amount update and delete.

pub mod service;

pub use service::{DoctorFeeService, SharedDoctorFeeService};
