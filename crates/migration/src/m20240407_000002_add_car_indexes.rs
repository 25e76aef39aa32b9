//! Secondary indexes backing the exact-match list filters.
use sea_orm_migration::prelude::*;

use crate::m20240407_000001_create_car::Car;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, col) in [
            ("idx_car_make", Car::Make),
            ("idx_car_model", Car::Model),
            ("idx_car_year", Car::Year),
        ] {
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name(name)
                        .table(Car::Table)
                        .col(col)
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in ["idx_car_year", "idx_car_model", "idx_car_make"] {
            manager
                .drop_index(Index::drop().if_exists().name(name).table(Car::Table).to_owned())
                .await?;
        }
        Ok(())
    }
}
