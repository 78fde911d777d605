//! Doctor fee aggregate
//!
//! Contains the DoctorFee entity and the repository interface that the
//! persistence layer implements.

pub mod model;
pub mod repository;

pub use model::{DoctorFee, NewDoctorFee};
pub use repository::DoctorFeeRepository;
