//! Create doctor_fees table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DoctorFees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DoctorFees::FeesId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DoctorFees::DoctorId).big_integer().not_null())
                    .col(ColumnDef::new(DoctorFees::Speciality).string().not_null())
                    .col(ColumnDef::new(DoctorFees::Fees).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Secondary lookup path by doctor
        manager
            .create_index(
                Index::create()
                    .name("idx_doctor_fees_doctor_id")
                    .table(DoctorFees::Table)
                    .col(DoctorFees::DoctorId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DoctorFees::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum DoctorFees {
    Table,
    FeesId,
    DoctorId,
    Speciality,
    Fees,
}
