//! Sample catalogue used by the `seed` binary and by tests.

use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use tracing::info;

use crate::{car, errors::ModelError};

/// `(make, model, year)` rows inserted by [`seed_cars`].
pub const SEED_CARS: &[(&str, &str, i32)] = &[
    ("Toyota", "Camry", 2022),
    ("Honda", "Civic", 2021),
    ("Ford", "Mustang", 2020),
    ("Toyota", "Corolla", 2019),
    ("Honda", "Accord", 2023),
    ("Ford", "F-150", 2022),
    ("Chevrolet", "Malibu", 2018),
    ("Chevrolet", "Silverado", 2021),
    ("Nissan", "Altima", 2020),
    ("Nissan", "Leaf", 2022),
    ("BMW", "X5", 2023),
    ("BMW", "M3", 2021),
    ("Mercedes", "S400", 2024),
    ("Mercedes", "C300", 2019),
    ("Audi", "A4", 2020),
    ("Audi", "Q7", 2022),
    ("Volkswagen", "Golf", 2018),
    ("Volkswagen", "Passat", 2017),
    ("Hyundai", "Elantra", 2021),
    ("Kia", "Sorento", 2023),
    ("Toyota", "RAV4", 2024),
    ("Tesla", "Model 3", 2023),
];

/// Insert [`SEED_CARS`] when the `car` table is empty. Returns the number of rows inserted.
pub async fn seed_cars(db: &DatabaseConnection) -> Result<usize, ModelError> {
    let existing = car::Entity::find().count(db).await?;
    if existing > 0 {
        info!(existing, "car table not empty; skip seeding");
        return Ok(0);
    }
    for (make, model, year) in SEED_CARS {
        car::create(db, make, model, *year).await?;
    }
    info!(inserted = SEED_CARS.len(), "seeded sample cars");
    Ok(SEED_CARS.len())
}
