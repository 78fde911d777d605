pub mod doctor_fees;
pub mod health;
pub mod metrics;
pub mod request_id;
