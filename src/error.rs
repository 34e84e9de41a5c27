//! Request-level error type.
//!
//! Every failure a handler can produce ends up here and is rendered as
//! `{"msg": "..."}` with the matching status code.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sqlx::error::ErrorKind;
use thiserror::Error;
use tracing::error;

use crate::response::Message;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    /// Duplicate of a unique value. Reported as 400 like any other bad input.
    #[error("{0}")]
    Conflict(String),

    #[error("database error")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        AppError::Conflict(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Constraint kind behind a database error, if any.
    fn constraint_kind(&self) -> Option<ErrorKind> {
        match self {
            AppError::Database(sqlx::Error::Database(db)) => Some(db.kind()),
            _ => None,
        }
    }

    fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) | AppError::NotFound(msg) | AppError::Conflict(msg) => {
                msg.clone()
            }
            AppError::Database(e) => {
                error!(error = %e, "database error");
                "A database error occurred".into()
            }
            AppError::Internal(e) => {
                error!(error = ?e, "internal error");
                "An internal error occurred".into()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Message::new(self.user_message());
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

// Ids are part of the route, so an id that does not parse names no resource.
impl From<PathRejection> for AppError {
    fn from(_: PathRejection) -> Self {
        AppError::NotFound("Resource not found".into())
    }
}

/// Translates storage constraint violations into request errors.
pub trait ConstraintExt<T> {
    fn on_unique_violation(self, msg: &str) -> AppResult<T>;
    fn on_foreign_key_violation(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ConstraintExt<T> for Result<T, E>
where
    E: Into<AppError>,
{
    fn on_unique_violation(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| {
            let err = e.into();
            match err.constraint_kind() {
                Some(ErrorKind::UniqueViolation) => AppError::conflict(msg),
                _ => err,
            }
        })
    }

    fn on_foreign_key_violation(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| {
            let err = e.into();
            match err.constraint_kind() {
                Some(ErrorKind::ForeignKeyViolation) => AppError::not_found(msg),
                _ => err,
            }
        })
    }
}

pub trait OptionExt<T> {
    fn ok_or_not_found(self, msg: &str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, msg: &str) -> AppResult<T> {
        self.ok_or_else(|| AppError::not_found(msg))
    }
}
