use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use tracing::error;

/// Error response rendered as `{"message": ...}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn bad_request(message: impl Into<String>) -> Self { Self::new(StatusCode::BAD_REQUEST, message) }

    /// Map a service failure; internal failures are logged and answered with `internal_message`.
    pub fn from_service(e: ServiceError, internal_message: &str) -> Self {
        match (&e, e.public_message()) {
            (ServiceError::NotFound(_), Some(msg)) => Self::new(StatusCode::NOT_FOUND, msg),
            (_, Some(msg)) if e.is_invalid_input() => Self::bad_request(msg),
            _ => {
                error!(err = %e, "{}", internal_message);
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, internal_message)
            }
        }
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self { Self::from_service(e, "Internal server error") }
}

impl From<JsonRejection> for JsonApiError {
    fn from(r: JsonRejection) -> Self { Self::bad_request(r.body_text()) }
}

impl From<QueryRejection> for JsonApiError {
    fn from(r: QueryRejection) -> Self { Self::bad_request(r.body_text()) }
}

impl From<PathRejection> for JsonApiError {
    fn from(r: PathRejection) -> Self { Self::bad_request(r.body_text()) }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({"message": self.message}))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn maps_service_errors_to_status() {
        assert_eq!(JsonApiError::from(ServiceError::not_found("Car")).status, StatusCode::NOT_FOUND);
        assert_eq!(JsonApiError::from(ServiceError::Validation("Nothing to update".into())).status, StatusCode::BAD_REQUEST);
        assert_eq!(JsonApiError::from(ServiceError::Model(ModelError::Validation("make must not be empty".into()))).status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_detail_is_not_leaked() {
        let e = JsonApiError::from_service(ServiceError::Db("password authentication failed".into()), "Error creating car");
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.message, "Error creating car");
        let e = JsonApiError::from(ServiceError::Model(ModelError::Db("x".into())));
        assert_eq!(e.message, "Internal server error");
    }
}
