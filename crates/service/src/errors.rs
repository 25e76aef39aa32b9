use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Caller-supplied input was rejected (maps to 400).
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Model(models::errors::ModelError::Validation(_)))
    }

    /// Message safe to return to a client; `None` for internal failures.
    pub fn public_message(&self) -> Option<&str> {
        match self {
            Self::Validation(m) | Self::NotFound(m) => Some(m),
            Self::Model(models::errors::ModelError::Validation(m)) => Some(m),
            Self::Db(_) | Self::Model(models::errors::ModelError::Db(_)) => None,
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { Self::Db(e.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn classification() {
        assert!(ServiceError::Validation("x".into()).is_invalid_input());
        assert!(ServiceError::Model(ModelError::Validation("x".into())).is_invalid_input());
        assert!(!ServiceError::not_found("Car").is_invalid_input());
        assert!(!ServiceError::Db("boom".into()).is_invalid_input());
    }

    #[test]
    fn internal_errors_have_no_public_message() {
        assert_eq!(ServiceError::not_found("Car").public_message(), Some("Car not found"));
        assert_eq!(ServiceError::Db("connection reset".into()).public_message(), None);
        assert_eq!(ServiceError::Model(ModelError::Db("x".into())).public_message(), None);
    }
}
