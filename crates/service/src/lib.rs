//! Service layer providing the car catalogue operations on top of models.
//! - Separates business logic from data access (`car::repository::CarRepository`).
//! - Reuses validation and entity definitions in `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod pagination;
pub mod car;
#[cfg(test)]
pub mod test_support;
