pub mod fees;

pub use fees::{DoctorFeeService, SharedDoctorFeeService};
