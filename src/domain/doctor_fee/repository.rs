//! Doctor fee repository interface

use async_trait::async_trait;

use super::model::{DoctorFee, NewDoctorFee};
use crate::domain::DomainResult;

#[async_trait]
pub trait DoctorFeeRepository: Send + Sync {
    /// Insert every record atomically, returning them with assigned ids
    /// in input order.
    async fn save_all(&self, fees: Vec<NewDoctorFee>) -> DomainResult<Vec<DoctorFee>>;
    async fn find_by_id(&self, fees_id: i64) -> DomainResult<Option<DoctorFee>>;
    async fn find_all(&self) -> DomainResult<Vec<DoctorFee>>;
    async fn find_by_doctor_id(&self, doctor_id: i64) -> DomainResult<Vec<DoctorFee>>;
    async fn update(&self, fee: DoctorFee) -> DomainResult<DoctorFee>;
    async fn delete(&self, fees_id: i64) -> DomainResult<()>;
}
