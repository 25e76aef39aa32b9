use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::{NotSet, Unchanged}, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

use models::car;

use crate::car::domain::{CarFields, CarFilter, CarSort, SortField, SortOrder};
use crate::car::repository::CarRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation.
pub struct SeaOrmCarRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCarRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

fn condition(filter: &CarFilter) -> Condition {
    Condition::all()
        .add_option(filter.make.clone().map(|m| car::Column::Make.eq(m)))
        .add_option(filter.model.clone().map(|m| car::Column::Model.eq(m)))
        .add_option(filter.year.map(|y| car::Column::Year.eq(y)))
}

fn column(field: SortField) -> car::Column {
    match field {
        SortField::Id => car::Column::Id,
        SortField::Make => car::Column::Make,
        SortField::Model => car::Column::Model,
        SortField::Year => car::Column::Year,
        SortField::CreatedAt => car::Column::CreatedAt,
        SortField::UpdatedAt => car::Column::UpdatedAt,
    }
}

#[async_trait::async_trait]
impl CarRepository for SeaOrmCarRepository {
    async fn count(&self, filter: &CarFilter) -> Result<u64, ServiceError> {
        Ok(car::Entity::find().filter(condition(filter)).count(&self.db).await?)
    }

    async fn find_many(&self, filter: &CarFilter, sort: CarSort, skip: u64, take: u64) -> Result<Vec<car::Model>, ServiceError> {
        let order = match sort.order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        };
        let mut select = car::Entity::find()
            .filter(condition(filter))
            .order_by(column(sort.field), order);
        if sort.field != SortField::Id {
            select = select.order_by_asc(car::Column::Id);
        }
        let rows = select.offset(skip).limit(take).all(&self.db).await?;
        Ok(rows)
    }

    async fn find_unique(&self, id: i32) -> Result<Option<car::Model>, ServiceError> {
        Ok(car::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn create(&self, fields: CarFields) -> Result<car::Model, ServiceError> {
        // validations are in models::car
        let created = car::create(&self.db, &fields.make, &fields.model, fields.year).await?;
        Ok(created)
    }

    async fn update(&self, id: i32, fields: CarFields) -> Result<car::Model, ServiceError> {
        let am = car::ActiveModel {
            id: Unchanged(id),
            make: Set(fields.make),
            model: Set(fields.model),
            year: Set(fields.year),
            created_at: NotSet,
            updated_at: Set(Utc::now().into()),
        };
        match am.update(&self.db).await {
            Ok(updated) => Ok(updated),
            Err(DbErr::RecordNotUpdated) => Err(ServiceError::not_found("Car")),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = car::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn car_crud_seaorm() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() { return Ok(()); }
        let repo = SeaOrmCarRepository::new(get_db().await?);
        let make = format!("Make-{}", std::process::id());

        let a = repo.create(CarFields { make: make.clone(), model: "Alpha".into(), year: 2001 }).await?;
        let b = repo.create(CarFields { make: make.clone(), model: "Beta".into(), year: 2002 }).await?;
        assert_eq!(a.created_at, a.updated_at);

        let filter = CarFilter { make: Some(make.clone()), ..Default::default() };
        assert_eq!(repo.count(&filter).await?, 2);

        let sort = CarSort { field: SortField::Year, order: SortOrder::Desc };
        let rows = repo.find_many(&filter, sort, 0, 10).await?;
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![b.id, a.id]);
        let second = repo.find_many(&filter, sort, 1, 10).await?;
        assert_eq!(second.len(), 1);

        let updated = repo.update(a.id, CarFields { make: make.clone(), model: "Gamma".into(), year: 2001 }).await?;
        assert_eq!(updated.model, "Gamma");
        assert_eq!(updated.created_at, a.created_at);
        assert!(updated.updated_at >= a.updated_at);

        assert!(repo.delete(a.id).await?);
        assert!(repo.delete(b.id).await?);
        assert!(!repo.delete(b.id).await?);
        assert!(repo.find_unique(a.id).await?.is_none());

        let missing = repo.update(a.id, CarFields { make, model: "x".into(), year: 1 }).await;
        assert!(matches!(missing, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
