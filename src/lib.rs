//! # OneHealth Doctor Fees Service
//!
//! CRUD REST service for doctor fee records (doctor, speciality, fee amount).
//!
//! ## Architecture
//!
//! - **domain**: the `DoctorFee` entity and the repository interface
//! - **application**: `DoctorFeeService`, existence checks and logging
//! - **infrastructure**: SeaORM entity, migrations and repository
//! - **interfaces**: axum REST API with Swagger documentation
//! - **shared**: error types and shutdown coordination

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmDoctorFeeRepository};

// Re-export API router
pub use interfaces::http::create_api_router;
