use std::sync::Arc;

use service::car::{repository::CarRepository, CarService};
use service::pagination::PageLimits;

/// Shared handler state; the repository is injected, never global.
#[derive(Clone)]
pub struct AppState {
    pub cars: Arc<CarService<dyn CarRepository>>,
}

impl AppState {
    pub fn new(repo: Arc<dyn CarRepository>, limits: PageLimits) -> Self {
        Self { cars: Arc::new(CarService::with_limits(repo, limits)) }
    }
}

pub fn page_limits(api: &configs::ApiConfig) -> PageLimits {
    PageLimits { default_page_size: api.default_page_size, max_page_size: api.max_page_size }
}
