//! Doctor fee entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Doctor fee model - one fee per doctor and speciality
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "doctor_fees")]
pub struct Model {
    /// Database-generated fee record ID
    #[sea_orm(primary_key)]
    pub fees_id: i64,

    /// Doctor the fee belongs to (not unique)
    pub doctor_id: i64,

    /// Medical speciality label
    pub speciality: String,

    /// Fee amount
    pub fees: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
