//! Entity store gateways: repository contracts and SQLite implementations.
//!
//! # Responsibility
//! - Define one repository contract per entity kind.
//! - Isolate SQL details from services and the assignment engine.
//! - Translate every storage failure into a `PersistenceFailure` carrying a
//!   registered `ErrorCode`.
//!
//! # Invariants
//! - Every operation runs inside its own transaction and releases it on
//!   every exit path; failures roll back before release.
//! - "Nothing found" is `Ok(None)` / `Ok(0)`, never an error.
//! - Ids that are not persisted (`<= 0`) never reach SQL.

use crate::db::DbError;
use crate::error_codes::ErrorCode;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod initiative_repo;
pub mod location_repo;
mod rows;
mod unit;
pub mod worker_repo;

pub type GatewayResult<T> = Result<T, PersistenceFailure>;

/// Infrastructure-level failure of one gateway operation.
///
/// The transaction of the failing operation has already been rolled back
/// when this value is observed.
#[derive(Debug)]
pub struct PersistenceFailure {
    code: ErrorCode,
    cause: DbError,
}

impl PersistenceFailure {
    pub fn new(code: ErrorCode, cause: impl Into<DbError>) -> Self {
        Self {
            code,
            cause: cause.into(),
        }
    }

    /// Stable code to branch on. Prefer this over the display text.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &'static str {
        self.code.message()
    }

    /// Underlying storage error, for diagnostics only.
    pub fn cause(&self) -> &DbError {
        &self.cause
    }
}

impl Display for PersistenceFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.code.message())
    }
}

impl Error for PersistenceFailure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.cause)
    }
}
