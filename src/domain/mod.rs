//! Domain layer: entities and repository interfaces

pub mod doctor_fee;

pub use doctor_fee::{DoctorFee, DoctorFeeRepository, NewDoctorFee};

pub use crate::shared::errors::{DomainError, DomainResult};
