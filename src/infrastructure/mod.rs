//! Infrastructure layer - external concerns

pub mod database;

pub use database::repositories::SeaOrmDoctorFeeRepository;
pub use database::{init_database, DatabaseConfig};
