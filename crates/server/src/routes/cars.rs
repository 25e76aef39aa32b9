use axum::{
    extract::{rejection::{JsonRejection, PathRejection, QueryRejection}, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::info;

use models::car;
use service::car::domain::{CarPatch, ListParams, NewCar};
use service::pagination::Page;

use crate::{errors::JsonApiError, state::AppState};

/// Query string accepted by `GET /api/cars`.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListCarsQuery {
    /// Exact, case-sensitive make
    pub make: Option<String>,
    /// Exact, case-sensitive model
    pub model: Option<String>,
    /// Exact year; an empty value is ignored like the string filters
    #[serde(default, deserialize_with = "empty_as_none")]
    pub year: Option<i32>,
    /// One of `id`, `make`, `model`, `year`, `createdAt`, `updatedAt` (default `id`)
    pub sort_by: Option<String>,
    /// `asc` or `desc`; anything else sorts ascending
    pub sort_order: Option<String>,
    /// 1-based page (default 1)
    pub page: Option<u64>,
    /// Items per page (default 10)
    pub page_size: Option<u64>,
}

fn empty_as_none<'de, D>(de: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(de)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => v.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

impl From<ListCarsQuery> for ListParams {
    fn from(q: ListCarsQuery) -> Self {
        ListParams {
            make: q.make,
            model: q.model,
            year: q.year,
            sort_by: q.sort_by,
            sort_order: q.sort_order,
            page: q.page,
            page_size: q.page_size,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[utoipa::path(
    get, path = "/api/cars", tag = "cars",
    params(ListCarsQuery),
    responses(
        (status = 200, description = "A page of cars", body = crate::openapi::CarPageDoc),
        (status = 400, description = "Invalid query", body = crate::openapi::MessageDoc)
    )
)]
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<ListCarsQuery>, QueryRejection>,
) -> Result<Json<Page<car::Model>>, JsonApiError> {
    let Query(q) = query?;
    let page = state
        .cars
        .list(q.into())
        .await
        .map_err(|e| JsonApiError::from_service(e, "Error listing cars"))?;
    info!(total = page.total_count, returned = page.data.len(), "list cars");
    Ok(Json(page))
}

#[utoipa::path(
    post, path = "/api/cars", tag = "cars",
    request_body = crate::openapi::NewCarDoc,
    responses(
        (status = 201, description = "The newly created car", body = crate::openapi::CarDoc),
        (status = 400, description = "Missing required fields", body = crate::openapi::MessageDoc),
        (status = 500, description = "Error creating car", body = crate::openapi::MessageDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewCar>, JsonRejection>,
) -> Result<(StatusCode, Json<car::Model>), JsonApiError> {
    let Json(input) = body?;
    let created = state
        .cars
        .create(input)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Error creating car"))?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/api/cars/{id}", tag = "cars",
    params(("id" = i32, Path, description = "ID of the car to retrieve")),
    responses(
        (status = 200, description = "The requested car", body = crate::openapi::CarDoc),
        (status = 404, description = "Car not found", body = crate::openapi::MessageDoc)
    )
)]
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<car::Model>, JsonApiError> {
    let Path(id) = id?;
    let found = state
        .cars
        .get(id)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Error fetching car"))?;
    Ok(Json(found))
}

#[utoipa::path(
    put, path = "/api/cars/{id}", tag = "cars",
    params(("id" = i32, Path, description = "ID of the car to update")),
    request_body = crate::openapi::CarPatchDoc,
    responses(
        (status = 200, description = "The updated car", body = crate::openapi::CarDoc),
        (status = 400, description = "Nothing to update", body = crate::openapi::MessageDoc),
        (status = 404, description = "Car not found", body = crate::openapi::MessageDoc),
        (status = 500, description = "Error updating car", body = crate::openapi::MessageDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<CarPatch>, JsonRejection>,
) -> Result<Json<car::Model>, JsonApiError> {
    let Path(id) = id?;
    let Json(patch) = body?;
    let updated = state
        .cars
        .update(id, patch)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Error updating car"))?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/api/cars/{id}", tag = "cars",
    params(("id" = i32, Path, description = "ID of the car to delete")),
    responses(
        (status = 200, description = "Car deleted successfully", body = crate::openapi::MessageDoc),
        (status = 404, description = "Car not found", body = crate::openapi::MessageDoc),
        (status = 500, description = "Error deleting car", body = crate::openapi::MessageDoc)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    let Path(id) = id?;
    state
        .cars
        .delete(id)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Error deleting car"))?;
    Ok(Json(MessageResponse { message: "Car deleted successfully" }))
}
