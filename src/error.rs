//! Service error taxonomy
//!
//! Every service function fails fast with the most specific kind; the web
//! layer converts the kind to an HTTP status and a JSON body. Store-level
//! failures are logged and surfaced as an opaque 500.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use derive_more::Display;
use sea_orm::DbErr;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Display)]
pub enum ServiceError {
    /// Missing or malformed payload fields (400)
    #[display(fmt = "{}", _0)]
    Validation(String),
    /// Missing or invalid requester identity (401)
    #[display(fmt = "{}", _0)]
    Authentication(String),
    /// Role mismatch or missing relationship link (403)
    #[display(fmt = "{}", _0)]
    Authorization(String),
    /// Referenced entity absent (404)
    #[display(fmt = "{}", _0)]
    NotFound(String),
    /// Uniqueness violation or illegal state transition (409)
    #[display(fmt = "{}", _0)]
    Conflict(String),
    /// Store-level failure (500)
    #[display(fmt = "database error: {}", _0)]
    Database(DbErr),
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Authentication(_) => StatusCode::UNAUTHORIZED,
            Self::Authorization(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DbErr> for ServiceError {
    fn from(err: DbErr) -> Self {
        Self::Database(err)
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        ServiceError::status_code(self)
    }

    fn error_response(&self) -> HttpResponse {
        let status = ServiceError::status_code(self);
        // Store errors are logged but never echoed to the client.
        let message = match self {
            Self::Database(err) => {
                log::error!("database error: {}", err);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(status).json(serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_taxonomy() {
        assert_eq!(
            ServiceError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::Authentication("x".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ServiceError::Authorization("x".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ServiceError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServiceError::Conflict("x".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ServiceError::Database(DbErr::Custom("x".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn database_errors_keep_their_source_out_of_display_for_clients() {
        let err = ServiceError::Validation("title is required".into());
        assert_eq!(err.to_string(), "title is required");
    }
}
