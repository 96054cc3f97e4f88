//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Command Function  ──► Result<T, ApiError>                              │
//! │         │                                                               │
//! │         ├── DbError::QueryFailed ─────────────┐                         │
//! │         ├── CoreError::InvalidVoucherCode ────┤                         │
//! │         ├── FormErrors (admin forms) ─────────┼──► ApiError { code,     │
//! │         ├── CatalogError ─────────────────────┤              message }  │
//! │         └── ConfigError ──────────────────────┘                         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! What the page receives when a command fails:
//! ```json
//! {
//!   "code": "INVALID_VOUCHER",
//!   "message": "Invalid voucher code: BADCODE"
//! }
//! ```

use serde::Serialize;
use shoez_catalog::CatalogError;
use shoez_core::admin::FormErrors;
use shoez_core::{CoreError, ValidationError};
use shoez_db::DbError;

use crate::config::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NotFound,
    ValidationError,
    DatabaseError,
    /// Code not in either voucher table
    InvalidVoucher,
    /// A second voucher on the same checkout
    VoucherAlreadyApplied,
    CartError,
    CatalogError,
    ConfigError,
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => ApiError::not_found(&entity, &id),
            DbError::ConnectionFailed(_) => {
                ApiError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::MigrationFailed(_) => {
                ApiError::new(ErrorCode::DatabaseError, "Database migration failed")
            }
            DbError::QueryFailed(e) => {
                tracing::error!("Database query failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::PoolExhausted => {
                ApiError::new(ErrorCode::DatabaseError, "Database pool exhausted")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        match err {
            CoreError::InvalidVoucherCode(_) => ApiError::new(ErrorCode::InvalidVoucher, message),
            CoreError::VoucherAlreadyApplied { .. } => {
                ApiError::new(ErrorCode::VoucherAlreadyApplied, message)
            }
            CoreError::TotalOutOfRange { .. } => ApiError::validation(message),
            CoreError::MalformedPersistedCart(_) | CoreError::CartStorage(_) => {
                ApiError::new(ErrorCode::CartError, message)
            }
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// All field messages joined, in form order.
impl From<FormErrors> for ApiError {
    fn from(err: FormErrors) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        ApiError::new(ErrorCode::CatalogError, err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

pub type ApiResult<T> = Result<T, ApiError>;
