//! Doctor fee service: application-layer orchestration
//!
//! HTTP handlers are thin wrappers that delegate to this service.
//! The only business rule is that a record must exist before it can be
//! updated or deleted.

use std::sync::Arc;

use tracing::info;

use crate::domain::{DoctorFee, DoctorFeeRepository, DomainError, DomainResult, NewDoctorFee};

const ENTITY: &str = "doctor fees";

pub type SharedDoctorFeeService<R> = Arc<DoctorFeeService<R>>;

/// Generic over `R: DoctorFeeRepository` so it stays decoupled from the
/// concrete persistence layer.
pub struct DoctorFeeService<R: DoctorFeeRepository> {
    repo: Arc<R>,
}

impl<R: DoctorFeeRepository> DoctorFeeService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Persist a batch of fee records. Ids are assigned by the database.
    pub async fn save_fees(&self, fees: Vec<NewDoctorFee>) -> DomainResult<Vec<DoctorFee>> {
        let saved = self.repo.save_all(fees).await?;
        info!(count = saved.len(), "Doctor fees saved: {:?}", saved);
        Ok(saved)
    }

    pub async fn get_fees_by_id(&self, fees_id: i64) -> DomainResult<DoctorFee> {
        let fee = self.require(fees_id).await?;
        info!("Doctor fees retrieved: {}", fee);
        Ok(fee)
    }

    pub async fn get_all_fees(&self) -> DomainResult<Vec<DoctorFee>> {
        let fees = self.repo.find_all().await?;
        info!(count = fees.len(), "All doctor fees retrieved");
        Ok(fees)
    }

    /// Overwrite the fee amount of an existing record. Doctor and speciality
    /// are never changed here.
    pub async fn update_fees_by_id(&self, fees_id: i64, fees: i64) -> DomainResult<DoctorFee> {
        let existing = self.require(fees_id).await?;
        let updated = self.repo.update(existing.with_fees(fees)).await?;
        info!("Doctor fees updated: {}", updated);
        Ok(updated)
    }

    /// Delete a record and hand back what was removed.
    pub async fn delete_fees_by_id(&self, fees_id: i64) -> DomainResult<DoctorFee> {
        let existing = self.require(fees_id).await?;
        self.repo.delete(fees_id).await?;
        info!(fees_id, "Doctor fees deleted");
        Ok(existing)
    }

    /// All records of one doctor. An unknown doctor yields an empty list.
    pub async fn find_by_doctor_id(&self, doctor_id: i64) -> DomainResult<Vec<DoctorFee>> {
        let fees = self.repo.find_by_doctor_id(doctor_id).await?;
        info!(doctor_id, count = fees.len(), "Doctor fees found for doctor");
        Ok(fees)
    }

    async fn require(&self, fees_id: i64) -> DomainResult<DoctorFee> {
        self.repo
            .find_by_id(fees_id)
            .await?
            .ok_or_else(|| DomainError::not_found(ENTITY, "feesId", fees_id))
    }
}
