use std::sync::Arc;

use models::car;
use tracing::{debug, info, instrument};

use super::domain::{CarPatch, CarQuery, ListParams, NewCar};
use super::repository::CarRepository;
use crate::errors::ServiceError;
use crate::pagination::{Page, PageLimits};

/// Car catalogue business service independent of web framework.
///
/// Stateless apart from the injected repository handle; safe to share behind an `Arc`.
pub struct CarService<R: CarRepository + ?Sized> {
    repo: Arc<R>,
    limits: PageLimits,
}

impl<R: CarRepository + ?Sized> CarService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo, limits: PageLimits::default() } }

    pub fn with_limits(repo: Arc<R>, limits: PageLimits) -> Self { Self { repo, limits } }

    /// Filtered, sorted, paginated listing.
    ///
    /// # Examples
    /// ```
    /// use service::car::{CarService, domain::ListParams, repository::mock::InMemoryCarRepository};
    /// use std::sync::Arc;
    /// let svc = CarService::new(Arc::new(InMemoryCarRepository::seeded()));
    /// let page = tokio_test::block_on(svc.list(ListParams::default())).unwrap();
    /// assert_eq!(page.total_count, 22);
    /// assert_eq!(page.total_pages, 3);
    /// assert_eq!(page.data.len(), 10);
    /// ```
    #[instrument(skip(self, params))]
    pub async fn list(&self, params: ListParams) -> Result<Page<car::Model>, ServiceError> {
        let CarQuery { filter, sort, page } = CarQuery::from_params(params, self.limits)?;
        let total = self.repo.count(&filter).await?;
        let data = self.repo.find_many(&filter, sort, page.offset(), page.limit()).await?;
        debug!(total, returned = data.len(), page = page.page, page_size = page.page_size, "cars_listed");
        Ok(Page::new(data, total, page))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<car::Model, ServiceError> {
        self.repo.find_unique(id).await?.ok_or_else(|| ServiceError::not_found("Car"))
    }

    /// Create a car; all of `make`, `model`, `year` are required.
    ///
    /// # Examples
    /// ```
    /// use service::car::{CarService, domain::NewCar, repository::mock::InMemoryCarRepository};
    /// use std::sync::Arc;
    /// let svc = CarService::new(Arc::new(InMemoryCarRepository::default()));
    /// let input = NewCar { make: Some("Mercedes".into()), model: Some("S400".into()), year: Some(2024) };
    /// let car = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(car.id, 1);
    /// assert_eq!(car.created_at, car.updated_at);
    /// ```
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: NewCar) -> Result<car::Model, ServiceError> {
        let fields = input.into_fields()?;
        let created = self.repo.create(fields).await?;
        info!(id = created.id, make = %created.make, model = %created.model, year = created.year, "car_created");
        Ok(created)
    }

    /// Merge `patch` over the stored row. Existence is checked before the empty-patch check.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i32, patch: CarPatch) -> Result<car::Model, ServiceError> {
        let existing = self.get(id).await?;
        if patch.is_empty() {
            return Err(ServiceError::Validation("Nothing to update".into()));
        }
        patch.validate()?;
        let updated = self.repo.update(id, patch.apply_to(&existing)).await?;
        info!(id, "car_updated");
        Ok(updated)
    }

    /// Hard delete; `NotFound` when no row had this id.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("Car"));
        }
        info!(id, "car_deleted");
        Ok(())
    }
}
