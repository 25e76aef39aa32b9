use utoipa::OpenApi;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
}

/// Stored car as returned by the API.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarDoc {
    #[schema(example = 1)]
    pub id: i32,
    /// The car's brand.
    #[schema(example = "Mercedes")]
    pub make: String,
    #[schema(example = "S400")]
    pub model: String,
    #[schema(example = 2024)]
    pub year: i32,
    #[schema(format = DateTime, example = "2024-04-07T17:32:28Z")]
    pub created_at: String,
    #[schema(format = DateTime, example = "2024-04-07T17:32:28Z")]
    pub updated_at: String,
}

#[derive(ToSchema)]
pub struct NewCarDoc {
    #[schema(example = "Mercedes")]
    pub make: String,
    #[schema(example = "S400")]
    pub model: String,
    #[schema(example = 2024)]
    pub year: i32,
}

/// Any subset of fields; at least one is required.
#[derive(ToSchema)]
pub struct CarPatchDoc {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarPageDoc {
    #[schema(example = 22)]
    pub total_count: u64,
    #[schema(example = 3)]
    pub total_pages: u64,
    #[schema(example = 1)]
    pub current_page: u64,
    #[schema(example = 10)]
    pub page_size: u64,
    pub data: Vec<CarDoc>,
}

#[derive(ToSchema)]
pub struct MessageDoc {
    #[schema(example = "Car not found")]
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Car Catalogue API", description = "CRUD over the car resource"),
    paths(
        crate::routes::health,
        crate::routes::cars::list,
        crate::routes::cars::create,
        crate::routes::cars::get,
        crate::routes::cars::update,
        crate::routes::cars::delete,
    ),
    components(
        schemas(
            HealthResponse,
            CarDoc,
            NewCarDoc,
            CarPatchDoc,
            CarPageDoc,
            MessageDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "cars")
    )
)]
pub struct ApiDoc;
