//! Car module: three-layer architecture (domain, repository, service).
//!
//! `CarService` owns the list/get/create/update/delete rules; persistence is
//! reached only through `CarRepository`.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::CarService;
