//! Database repository implementations

pub mod doctor_fee_repository;

pub use doctor_fee_repository::SeaOrmDoctorFeeRepository;
