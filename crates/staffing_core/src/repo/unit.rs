//! Scoped unit of work shared by all gateways.
//!
//! One call = begin, run the closure, commit or roll back, release. The
//! transaction value is consumed on both paths, and rusqlite rolls back on
//! drop should the closure panic.

use super::{GatewayResult, PersistenceFailure};
use crate::db::{DbError, DbResult};
use crate::error_codes::ErrorCode;
use log::{debug, error, warn};
use rusqlite::{Connection, Transaction, TransactionBehavior};
use std::time::Instant;

/// Runs a read-only unit. Takes no write lock up front.
pub(crate) fn read_unit<T>(
    conn: &Connection,
    event: &'static str,
    code: ErrorCode,
    work: impl FnOnce(&Transaction<'_>) -> DbResult<T>,
) -> GatewayResult<T> {
    run_unit(conn, TransactionBehavior::Deferred, event, code, work)
}

/// Runs a mutating unit under an immediate write lock.
pub(crate) fn write_unit<T>(
    conn: &Connection,
    event: &'static str,
    code: ErrorCode,
    work: impl FnOnce(&Transaction<'_>) -> DbResult<T>,
) -> GatewayResult<T> {
    run_unit(conn, TransactionBehavior::Immediate, event, code, work)
}

fn run_unit<T>(
    conn: &Connection,
    behavior: TransactionBehavior,
    event: &'static str,
    code: ErrorCode,
    work: impl FnOnce(&Transaction<'_>) -> DbResult<T>,
) -> GatewayResult<T> {
    let started_at = Instant::now();
    let tx = Transaction::new_unchecked(conn, behavior)
        .map_err(|err| failure(event, code, started_at, err.into()))?;

    match work(&tx) {
        Ok(value) => {
            tx.commit()
                .map_err(|err| failure(event, code, started_at, err.into()))?;
            debug!(
                "event={} module=repo status=ok duration_ms={}",
                event,
                started_at.elapsed().as_millis()
            );
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback() {
                warn!(
                    "event={} module=repo status=error error_code={} rollback_error={}",
                    event, code, rollback_err
                );
            }
            Err(failure(event, code, started_at, err))
        }
    }
}

fn failure(
    event: &'static str,
    code: ErrorCode,
    started_at: Instant,
    cause: DbError,
) -> PersistenceFailure {
    error!(
        "event={} module=repo status=error duration_ms={} error_code={} error={}",
        event,
        started_at.elapsed().as_millis(),
        code,
        cause
    );
    PersistenceFailure::new(code, cause)
}
