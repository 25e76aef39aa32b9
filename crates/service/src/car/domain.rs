use std::{cmp::Ordering, str::FromStr};

use models::car;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use crate::pagination::{PageLimits, PageRequest};

/// Conjunctive exact-match filter; `None` leaves a column unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarFilter {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
}

impl CarFilter {
    /// Case-sensitive equality on every supplied field.
    pub fn matches(&self, c: &car::Model) -> bool {
        self.make.as_deref().map_or(true, |m| c.make == m)
            && self.model.as_deref().map_or(true, |m| c.model == m)
            && self.year.map_or(true, |y| c.year == y)
    }
}

/// Columns a list may be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    Id,
    Make,
    Model,
    Year,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    pub const ALLOWED: [&'static str; 6] = ["id", "make", "model", "year", "createdAt", "updatedAt"];

    /// Compare two rows on this column only.
    pub fn compare(self, a: &car::Model, b: &car::Model) -> Ordering {
        match self {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Make => a.make.cmp(&b.make),
            SortField::Model => a.model.cmp(&b.model),
            SortField::Year => a.year.cmp(&b.year),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        }
    }
}

impl FromStr for SortField {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortField::Id),
            "make" => Ok(SortField::Make),
            "model" => Ok(SortField::Model),
            "year" => Ok(SortField::Year),
            "createdAt" => Ok(SortField::CreatedAt),
            "updatedAt" => Ok(SortField::UpdatedAt),
            other => Err(ServiceError::Validation(format!(
                "invalid sortBy '{}'; expected one of: {}",
                other,
                SortField::ALLOWED.join(", ")
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// `desc` (any case) sorts descending; everything else, including absence, is ascending.
    pub fn parse_lenient(s: Option<&str>) -> Self {
        match s {
            Some(v) if v.trim().eq_ignore_ascii_case("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarSort {
    pub field: SortField,
    pub order: SortOrder,
}

impl CarSort {
    /// Row ordering with ascending `id` as the tie-breaker.
    pub fn compare(self, a: &car::Model, b: &car::Model) -> Ordering {
        let primary = match self.order {
            SortOrder::Asc => self.field.compare(a, b),
            SortOrder::Desc => self.field.compare(b, a),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}

/// Raw list inputs as received from a caller.
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

/// Validated list query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarQuery {
    pub filter: CarFilter,
    pub sort: CarSort,
    pub page: PageRequest,
}

impl CarQuery {
    pub fn from_params(params: ListParams, limits: PageLimits) -> Result<Self, ServiceError> {
        let non_empty = |s: Option<String>| s.filter(|v| !v.is_empty());
        let filter = CarFilter {
            make: non_empty(params.make),
            model: non_empty(params.model),
            year: params.year,
        };
        let field = match params.sort_by.as_deref().map(str::trim) {
            None | Some("") => SortField::default(),
            Some(s) => s.parse()?,
        };
        let sort = CarSort { field, order: SortOrder::parse_lenient(params.sort_order.as_deref()) };
        let page = PageRequest::new(params.page, params.page_size, limits)?;
        Ok(Self { filter, sort, page })
    }
}

/// Complete, validated column values handed to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarFields {
    pub make: String,
    pub model: String,
    pub year: i32,
}

/// Create request body; every field is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewCar {
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
}

impl NewCar {
    /// Missing, empty or zero values all count as missing.
    pub fn into_fields(self) -> Result<CarFields, ServiceError> {
        let make = self.make.filter(|m| car::validate_make(m).is_ok());
        let model = self.model.filter(|m| car::validate_model(m).is_ok());
        let year = self.year.filter(|y| car::validate_year(*y).is_ok());
        match (make, model, year) {
            (Some(make), Some(model), Some(year)) => Ok(CarFields { make, model, year }),
            _ => Err(ServiceError::Validation("Missing required fields".into())),
        }
    }
}

/// Partial update body; supplied fields override stored ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CarPatch {
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
}

impl CarPatch {
    pub fn is_empty(&self) -> bool {
        self.make.is_none() && self.model.is_none() && self.year.is_none()
    }

    pub fn validate(&self) -> Result<(), ServiceError> {
        if let Some(m) = &self.make { car::validate_make(m)?; }
        if let Some(m) = &self.model { car::validate_model(m)?; }
        if let Some(y) = self.year { car::validate_year(y)?; }
        Ok(())
    }

    pub fn apply_to(&self, existing: &car::Model) -> CarFields {
        CarFields {
            make: self.make.clone().unwrap_or_else(|| existing.make.clone()),
            model: self.model.clone().unwrap_or_else(|| existing.model.clone()),
            year: self.year.unwrap_or(existing.year),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample(id: i32, make: &str, model: &str, year: i32) -> car::Model {
        let now = Utc::now().into();
        car::Model { id, make: make.into(), model: model.into(), year, created_at: now, updated_at: now }
    }

    #[test]
    fn filter_is_exact_and_case_sensitive() {
        let c = sample(1, "Toyota", "Camry", 2022);
        assert!(CarFilter::default().matches(&c));
        assert!(CarFilter { make: Some("Toyota".into()), ..Default::default() }.matches(&c));
        assert!(!CarFilter { make: Some("toyota".into()), ..Default::default() }.matches(&c));
        assert!(!CarFilter { make: Some("Toy".into()), ..Default::default() }.matches(&c));
        assert!(!CarFilter { make: Some("Toyota".into()), year: Some(2021), ..Default::default() }.matches(&c));
    }

    #[test]
    fn sort_field_allow_list() {
        assert_eq!("year".parse::<SortField>().unwrap(), SortField::Year);
        assert_eq!("createdAt".parse::<SortField>().unwrap(), SortField::CreatedAt);
        let err = "price".parse::<SortField>().unwrap_err();
        assert!(err.is_invalid_input());
        assert!("Make".parse::<SortField>().is_err());
    }

    #[test]
    fn sort_order_normalizes_unknown_to_asc() {
        assert_eq!(SortOrder::parse_lenient(Some("desc")), SortOrder::Desc);
        assert_eq!(SortOrder::parse_lenient(Some("DESC")), SortOrder::Desc);
        assert_eq!(SortOrder::parse_lenient(Some("asc")), SortOrder::Asc);
        assert_eq!(SortOrder::parse_lenient(Some("sideways")), SortOrder::Asc);
        assert_eq!(SortOrder::parse_lenient(None), SortOrder::Asc);
    }

    #[test]
    fn descending_sort_breaks_ties_by_ascending_id() {
        let a = sample(1, "Honda", "Civic", 2021);
        let b = sample(2, "Honda", "Accord", 2023);
        let c = sample(3, "Audi", "A4", 2020);
        let sort = CarSort { field: SortField::Make, order: SortOrder::Desc };
        let mut rows = vec![c.clone(), b.clone(), a.clone()];
        rows.sort_by(|x, y| sort.compare(x, y));
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn query_defaults() {
        let q = CarQuery::from_params(ListParams::default(), PageLimits::default()).unwrap();
        assert_eq!(q.filter, CarFilter::default());
        assert_eq!(q.sort, CarSort { field: SortField::Id, order: SortOrder::Asc });
        assert_eq!(q.page, PageRequest { page: 1, page_size: 10 });
    }

    #[test]
    fn query_drops_empty_filters_and_rejects_bad_sort() {
        let q = CarQuery::from_params(
            ListParams { make: Some(String::new()), model: Some("Civic".into()), ..Default::default() },
            PageLimits::default(),
        ).unwrap();
        assert_eq!(q.filter.make, None);
        assert_eq!(q.filter.model.as_deref(), Some("Civic"));

        let bad = CarQuery::from_params(
            ListParams { sort_by: Some("price".into()), ..Default::default() },
            PageLimits::default(),
        );
        assert!(matches!(bad, Err(ServiceError::Validation(_))));
    }

    #[test]
    fn new_car_requires_all_truthy_fields() {
        let ok = NewCar { make: Some("Ford".into()), model: Some("Mustang".into()), year: Some(2020) };
        assert_eq!(ok.into_fields().unwrap(), CarFields { make: "Ford".into(), model: "Mustang".into(), year: 2020 });

        for bad in [
            NewCar { make: Some("Ford".into()), model: Some("Mustang".into()), year: None },
            NewCar { make: Some(String::new()), model: Some("Mustang".into()), year: Some(2020) },
            NewCar { make: Some("Ford".into()), model: Some("Mustang".into()), year: Some(0) },
            NewCar::default(),
        ] {
            let err = bad.into_fields().unwrap_err();
            assert_eq!(err.public_message(), Some("Missing required fields"));
        }
    }

    #[test]
    fn patch_overrides_only_supplied_fields() {
        let existing = sample(5, "Honda", "Civic", 2021);
        let patch = CarPatch { make: Some("X".into()), ..Default::default() };
        assert!(!patch.is_empty());
        assert_eq!(patch.apply_to(&existing), CarFields { make: "X".into(), model: "Civic".into(), year: 2021 });
        assert!(CarPatch::default().is_empty());
    }

    #[test]
    fn patch_rejects_empty_values() {
        let patch = CarPatch { model: Some(String::new()), ..Default::default() };
        assert!(patch.validate().unwrap_err().is_invalid_input());
        assert!(CarPatch { year: Some(0), ..Default::default() }.validate().is_err());
        assert!(CarPatch { make: Some(" ".into()), year: Some(-3), ..Default::default() }.validate().is_ok());
    }
}
