use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DatabaseConnection, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "car")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub make: String,
    #[sea_orm(column_type = "Text")]
    pub model: String,
    pub year: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Only empty strings and a zero year are rejected; length is unbounded (`text` columns).
pub fn validate_make(make: &str) -> Result<(), errors::ModelError> {
    if make.is_empty() {
        return Err(errors::ModelError::Validation("make must not be empty".into()));
    }
    Ok(())
}

pub fn validate_model(model: &str) -> Result<(), errors::ModelError> {
    if model.is_empty() {
        return Err(errors::ModelError::Validation("model must not be empty".into()));
    }
    Ok(())
}

pub fn validate_year(year: i32) -> Result<(), errors::ModelError> {
    if year == 0 {
        return Err(errors::ModelError::Validation("year must not be 0".into()));
    }
    Ok(())
}

/// Validate and insert a car; the database assigns `id`, both timestamps are `now`.
pub async fn create(
    db: &DatabaseConnection,
    make: &str,
    model: &str,
    year: i32,
) -> Result<Model, errors::ModelError> {
    validate_make(make)?;
    validate_model(model)?;
    validate_year(year)?;

    let now: DateTimeWithTimeZone = Utc::now().into();
    let am = ActiveModel {
        id: NotSet,
        make: Set(make.to_string()),
        model: Set(model.to_string()),
        year: Set(year),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_empty_strings_are_rejected() {
        assert!(validate_make("").is_err());
        assert!(validate_model("").is_err());
        assert!(validate_make("   ").is_ok());
        assert!(validate_make("Toyota").is_ok());
        assert!(validate_model("Camry").is_ok());
        assert!(validate_make(&"A".repeat(300)).is_ok());
    }

    #[test]
    fn only_zero_year_is_rejected() {
        assert!(validate_year(0).is_err());
        assert!(validate_year(-1).is_ok());
        assert!(validate_year(2024).is_ok());
    }

    #[test]
    fn serializes_with_camel_case_timestamps() {
        let now: DateTimeWithTimeZone = Utc::now().into();
        let car = Model { id: 7, make: "Mercedes".into(), model: "S400".into(), year: 2024, created_at: now, updated_at: now };
        let v = serde_json::to_value(&car).unwrap();
        assert_eq!(v["id"], 7);
        assert_eq!(v["make"], "Mercedes");
        assert_eq!(v["model"], "S400");
        assert_eq!(v["year"], 2024);
        assert!(v.get("createdAt").is_some());
        assert!(v.get("updatedAt").is_some());
        assert!(v.get("created_at").is_none());
    }
}
