//! Doctor fee DTOs
//!
//! Wire names are camelCase: `feesId`, `doctorId`, `speciality`, `fees`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::domain::{DoctorFee, NewDoctorFee};

/// Stored doctor fee record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DoctorFeeResponse {
    pub fees_id: i64,
    pub doctor_id: i64,
    pub speciality: String,
    pub fees: i64,
}

impl From<DoctorFee> for DoctorFeeResponse {
    fn from(f: DoctorFee) -> Self {
        Self {
            fees_id: f.fees_id,
            doctor_id: f.doctor_id,
            speciality: f.speciality,
            fees: f.fees,
        }
    }
}

/// One fee record to create. Unknown keys, including a client-sent
/// `feesId`, are dropped during deserialization.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DoctorFeeRequest {
    pub doctor_id: i64,
    #[validate(length(min = 1, max = 255, message = "speciality must be 1-255 characters"))]
    pub speciality: String,
    #[validate(range(min = 0, message = "fees must be non-negative"))]
    pub fees: i64,
}

impl From<DoctorFeeRequest> for NewDoctorFee {
    fn from(r: DoctorFeeRequest) -> Self {
        NewDoctorFee::new(r.doctor_id, r.speciality, r.fees)
    }
}

/// Batch body of `POST /saveFees`: a JSON array of fee records.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SaveFeesRequest(pub Vec<DoctorFeeRequest>);

/// Key under which per-record failures of a batch are reported,
/// rendered as `records[1].speciality: ...`.
pub const BATCH_ERRORS_KEY: &str = "records";

impl Validate for SaveFeesRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let failed: BTreeMap<usize, Box<ValidationErrors>> = self
            .0
            .iter()
            .enumerate()
            .filter_map(|(i, record)| record.validate().err().map(|e| (i, Box::new(e))))
            .collect();

        if failed.is_empty() {
            return Ok(());
        }
        let mut errors = ValidationErrors::new();
        errors
            .errors_mut()
            .insert(BATCH_ERRORS_KEY, ValidationErrorsKind::List(failed));
        Err(errors)
    }
}

/// Body of the update endpoint. A full fee record may be sent, but only
/// `fees` is read.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDoctorFeesRequest {
    #[validate(range(min = 0, message = "fees must be non-negative"))]
    pub fees: i64,
}
