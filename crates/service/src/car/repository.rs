use async_trait::async_trait;
use models::car;

use super::domain::{CarFields, CarFilter, CarSort};
use crate::errors::ServiceError;

/// Persistence abstraction for car records.
///
/// Each call is a single atomic store operation; callers hold no locks across calls.
#[async_trait]
pub trait CarRepository: Send + Sync {
    async fn count(&self, filter: &CarFilter) -> Result<u64, ServiceError>;
    async fn find_many(&self, filter: &CarFilter, sort: CarSort, skip: u64, take: u64) -> Result<Vec<car::Model>, ServiceError>;
    async fn find_unique(&self, id: i32) -> Result<Option<car::Model>, ServiceError>;
    async fn create(&self, fields: CarFields) -> Result<car::Model, ServiceError>;
    /// Overwrite the columns of `id` and refresh `updated_at`; `NotFound` if the row is gone.
    async fn update(&self, id: i32, fields: CarFields) -> Result<car::Model, ServiceError>;
    /// Returns true if a row was removed.
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// Simple in-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;

    use chrono::Utc;
    use tokio::sync::RwLock;

    #[derive(Default)]
    struct Table {
        rows: BTreeMap<i32, car::Model>,
        last_id: i32,
    }

    #[derive(Default)]
    pub struct InMemoryCarRepository {
        table: RwLock<Table>,
        unavailable: bool,
    }

    impl InMemoryCarRepository {
        /// Pre-populated with `models::seed::SEED_CARS` (ids 1..=22).
        pub fn seeded() -> Self {
            let mut table = Table::default();
            for (make, model, year) in models::seed::SEED_CARS {
                table.insert(CarFields { make: make.to_string(), model: model.to_string(), year: *year });
            }
            Self { table: RwLock::new(table), unavailable: false }
        }

        /// Every operation fails with a database error, like a store that is down.
        pub fn unavailable() -> Self {
            Self { unavailable: true, ..Self::default() }
        }

        fn check(&self) -> Result<(), ServiceError> {
            if self.unavailable {
                return Err(ServiceError::Db("connection refused".into()));
            }
            Ok(())
        }
    }

    impl Table {
        fn insert(&mut self, fields: CarFields) -> car::Model {
            self.last_id += 1;
            let now = Utc::now().into();
            let row = car::Model {
                id: self.last_id,
                make: fields.make,
                model: fields.model,
                year: fields.year,
                created_at: now,
                updated_at: now,
            };
            self.rows.insert(row.id, row.clone());
            row
        }
    }

    #[async_trait]
    impl CarRepository for InMemoryCarRepository {
        async fn count(&self, filter: &CarFilter) -> Result<u64, ServiceError> {
            self.check()?;
            let table = self.table.read().await;
            Ok(table.rows.values().filter(|c| filter.matches(c)).count() as u64)
        }

        async fn find_many(&self, filter: &CarFilter, sort: CarSort, skip: u64, take: u64) -> Result<Vec<car::Model>, ServiceError> {
            self.check()?;
            let table = self.table.read().await;
            let mut rows: Vec<car::Model> = table.rows.values().filter(|c| filter.matches(c)).cloned().collect();
            rows.sort_by(|a, b| sort.compare(a, b));
            let skip = usize::try_from(skip).unwrap_or(usize::MAX);
            let take = usize::try_from(take).unwrap_or(usize::MAX);
            Ok(rows.into_iter().skip(skip).take(take).collect())
        }

        async fn find_unique(&self, id: i32) -> Result<Option<car::Model>, ServiceError> {
            self.check()?;
            Ok(self.table.read().await.rows.get(&id).cloned())
        }

        async fn create(&self, fields: CarFields) -> Result<car::Model, ServiceError> {
            self.check()?;
            Ok(self.table.write().await.insert(fields))
        }

        async fn update(&self, id: i32, fields: CarFields) -> Result<car::Model, ServiceError> {
            self.check()?;
            let mut table = self.table.write().await;
            let row = table.rows.get_mut(&id).ok_or_else(|| ServiceError::not_found("Car"))?;
            row.make = fields.make;
            row.model = fields.model;
            row.year = fields.year;
            row.updated_at = Utc::now().into();
            Ok(row.clone())
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            self.check()?;
            Ok(self.table.write().await.rows.remove(&id).is_some())
        }
    }
}
