//! Doctor fee domain entity

use std::fmt;

/// A fee charged by a doctor for one speciality.
///
/// `fees_id` is assigned by the database when the record is first saved and
/// never changes afterwards. A doctor may own several records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorFee {
    pub fees_id: i64,
    pub doctor_id: i64,
    pub speciality: String,
    /// Fee amount in whole currency units
    pub fees: i64,
}

impl DoctorFee {
    /// Copy of this record with a new fee amount; every other field is kept.
    pub fn with_fees(self, fees: i64) -> Self {
        Self { fees, ..self }
    }
}

impl fmt::Display for DoctorFee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DoctorFee [feesId={}, doctorId={}, speciality={}, fees={}]",
            self.fees_id, self.doctor_id, self.speciality, self.fees
        )
    }
}

/// A fee record that has not been persisted yet (no id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDoctorFee {
    pub doctor_id: i64,
    pub speciality: String,
    pub fees: i64,
}

impl NewDoctorFee {
    pub fn new(doctor_id: i64, speciality: impl Into<String>, fees: i64) -> Self {
        Self {
            doctor_id,
            speciality: speciality.into(),
            fees,
        }
    }

    /// Attach the id the database assigned on insert.
    pub fn into_saved(self, fees_id: i64) -> DoctorFee {
        DoctorFee {
            fees_id,
            doctor_id: self.doctor_id,
            speciality: self.speciality,
            fees: self.fees,
        }
    }
}
