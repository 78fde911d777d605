//! SeaORM implementation of DoctorFeeRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::debug;

use crate::domain::{DoctorFee, DoctorFeeRepository, DomainError, DomainResult, NewDoctorFee};
use crate::infrastructure::database::entities::doctor_fee;

const ENTITY: &str = "doctor fees";

fn entity_to_domain(m: doctor_fee::Model) -> DoctorFee {
    DoctorFee {
        fees_id: m.fees_id,
        doctor_id: m.doctor_id,
        speciality: m.speciality,
        fees: m.fees,
    }
}

pub struct SeaOrmDoctorFeeRepository {
    db: DatabaseConnection,
}

impl SeaOrmDoctorFeeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DoctorFeeRepository for SeaOrmDoctorFeeRepository {
    async fn save_all(&self, fees: Vec<NewDoctorFee>) -> DomainResult<Vec<DoctorFee>> {
        if fees.is_empty() {
            return Ok(Vec::new());
        }

        let txn = self.db.begin().await?;
        let mut saved = Vec::with_capacity(fees.len());
        for fee in fees {
            let model = doctor_fee::ActiveModel {
                fees_id: NotSet,
                doctor_id: Set(fee.doctor_id),
                speciality: Set(fee.speciality),
                fees: Set(fee.fees),
            };
            let result = model.insert(&txn).await?;
            debug!(fees_id = result.fees_id, "Doctor fee row inserted");
            saved.push(entity_to_domain(result));
        }
        txn.commit().await?;

        Ok(saved)
    }

    async fn find_by_id(&self, fees_id: i64) -> DomainResult<Option<DoctorFee>> {
        let model = doctor_fee::Entity::find_by_id(fees_id).one(&self.db).await?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<DoctorFee>> {
        let models = doctor_fee::Entity::find()
            .order_by_asc(doctor_fee::Column::FeesId)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_by_doctor_id(&self, doctor_id: i64) -> DomainResult<Vec<DoctorFee>> {
        let models = doctor_fee::Entity::find()
            .filter(doctor_fee::Column::DoctorId.eq(doctor_id))
            .order_by_asc(doctor_fee::Column::FeesId)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn update(&self, fee: DoctorFee) -> DomainResult<DoctorFee> {
        let existing = doctor_fee::Entity::find_by_id(fee.fees_id)
            .one(&self.db)
            .await?;

        let Some(existing) = existing else {
            return Err(DomainError::not_found(ENTITY, "feesId", fee.fees_id));
        };

        let mut model: doctor_fee::ActiveModel = existing.into();
        model.doctor_id = Set(fee.doctor_id);
        model.speciality = Set(fee.speciality);
        model.fees = Set(fee.fees);
        let result = model.update(&self.db).await?;

        Ok(entity_to_domain(result))
    }

    async fn delete(&self, fees_id: i64) -> DomainResult<()> {
        let result = doctor_fee::Entity::delete_by_id(fees_id)
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found(ENTITY, "feesId", fees_id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::memory_database;

    async fn repo() -> SeaOrmDoctorFeeRepository {
        SeaOrmDoctorFeeRepository::new(memory_database().await)
    }

    #[tokio::test]
    async fn save_all_assigns_ids_in_input_order() {
        let repo = repo().await;
        let saved = repo
            .save_all(vec![
                NewDoctorFee::new(5, "Cardiology", 500),
                NewDoctorFee::new(5, "Neurology", 650),
                NewDoctorFee::new(9, "Dermatology", 300),
            ])
            .await
            .unwrap();

        assert_eq!(saved.len(), 3);
        assert_eq!(saved[0].speciality, "Cardiology");
        assert_eq!(saved[2].doctor_id, 9);
        assert!(saved[0].fees_id < saved[1].fees_id);
        assert!(saved[1].fees_id < saved[2].fees_id);
    }

    #[tokio::test]
    async fn save_all_with_empty_batch_is_a_no_op() {
        let repo = repo().await;
        assert!(repo.save_all(Vec::new()).await.unwrap().is_empty());
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_batch_leaves_no_rows_behind() {
        use sea_orm::ConnectionTrait;

        let db = memory_database().await;
        db.execute_unprepared(
            "CREATE TRIGGER reject_unlisted_speciality BEFORE INSERT ON doctor_fees \
             WHEN NEW.speciality = 'Unlisted' \
             BEGIN SELECT RAISE(ABORT, 'speciality not accepted'); END;",
        )
        .await
        .unwrap();
        let repo = SeaOrmDoctorFeeRepository::new(db);

        let err = repo
            .save_all(vec![
                NewDoctorFee::new(5, "Cardiology", 500),
                NewDoctorFee::new(5, "Unlisted", 650),
                NewDoctorFee::new(9, "Dermatology", 300),
            ])
            .await
            .unwrap_err();

        assert!(err.is_persistence());
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn find_by_id_returns_saved_record() {
        let repo = repo().await;
        let saved = repo
            .save_all(vec![NewDoctorFee::new(5, "Cardiology", 500)])
            .await
            .unwrap();

        let found = repo.find_by_id(saved[0].fees_id).await.unwrap();
        assert_eq!(found.as_ref(), Some(&saved[0]));
        assert!(repo.find_by_id(saved[0].fees_id + 100).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_by_doctor_id_filters_on_doctor() {
        let repo = repo().await;
        repo.save_all(vec![
            NewDoctorFee::new(5, "Cardiology", 500),
            NewDoctorFee::new(7, "Oncology", 900),
            NewDoctorFee::new(5, "Neurology", 650),
        ])
        .await
        .unwrap();

        let doctor_five = repo.find_by_doctor_id(5).await.unwrap();
        let specialities: Vec<_> = doctor_five.iter().map(|f| f.speciality.as_str()).collect();
        assert_eq!(specialities, ["Cardiology", "Neurology"]);
        assert!(repo.find_by_doctor_id(42).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_missing_record_is_not_found() {
        let repo = repo().await;
        let ghost = NewDoctorFee::new(5, "Cardiology", 500).into_saved(77);

        let err = repo.update(ghost).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn update_persists_new_amount() {
        let repo = repo().await;
        let saved = repo
            .save_all(vec![NewDoctorFee::new(5, "Cardiology", 500)])
            .await
            .unwrap()
            .remove(0);

        let updated = repo.update(saved.clone().with_fees(700)).await.unwrap();
        assert_eq!(updated.fees, 700);
        assert_eq!(
            repo.find_by_id(saved.fees_id).await.unwrap().map(|f| f.fees),
            Some(700)
        );
    }

    #[tokio::test]
    async fn delete_removes_row_and_reports_missing() {
        let repo = repo().await;
        let saved = repo
            .save_all(vec![NewDoctorFee::new(5, "Cardiology", 500)])
            .await
            .unwrap()
            .remove(0);

        repo.delete(saved.fees_id).await.unwrap();
        assert!(repo.find_by_id(saved.fees_id).await.unwrap().is_none());

        let err = repo.delete(saved.fees_id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
