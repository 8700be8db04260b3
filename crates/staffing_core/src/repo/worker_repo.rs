//! Worker repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist workers together with their owned locations and initiative
//!   links.
//! - Serve exact-match phone/email lookups for uniqueness checks upstream.
//!
//! # Invariants
//! - `update_worker` is guarded by `revision`; a stale revision changes
//!   nothing and reports absent.
//! - Initiatives that gain or lose a link to the worker get their revision
//!   bumped in the same transaction.
//! - Deleting a worker removes its locations and links through
//!   `ON DELETE CASCADE`.
//! - No phone/email uniqueness is enforced here.

use super::rows::{
    hydrate_worker, insert_location, load_worker, replace_links_of_worker, replace_locations_of,
    worker_from_row, INITIATIVES_SHAPE, LINKS_SHAPE, LOCATIONS_SHAPE, WORKERS_SHAPE,
    WORKER_SELECT_SQL,
};
use super::unit::{read_unit, write_unit};
use super::GatewayResult;
use crate::db::{ensure_schema_ready, DbResult};
use crate::error_codes::ErrorCode;
use crate::model::is_persisted_id;
use crate::model::worker::{Worker, WorkerId};
use log::debug;
use rusqlite::{params, Connection};

/// Repository interface for worker persistence.
pub trait WorkerRepository {
    /// Inserts the worker, its locations and its links; returns the new id.
    fn create_worker(&self, worker: &Worker) -> GatewayResult<WorkerId>;
    fn fetch_worker(&self, id: WorkerId) -> GatewayResult<Option<Worker>>;
    /// All workers in id order. Empty store yields an empty list.
    fn fetch_all_workers(&self) -> GatewayResult<Vec<Worker>>;
    /// Replaces own fields, the link set and the location set.
    ///
    /// Returns the stored worker with its new revision, or `None` when no
    /// row matched `id` and `revision`.
    fn update_worker(&self, worker: &Worker) -> GatewayResult<Option<Worker>>;
    /// Returns how many rows were removed (0 or 1).
    fn delete_worker(&self, id: WorkerId) -> GatewayResult<usize>;
    fn delete_all_workers(&self) -> GatewayResult<usize>;
    fn fetch_worker_by_phone(&self, phone_number: &str) -> GatewayResult<Option<Worker>>;
    fn fetch_worker_by_email(&self, email: &str) -> GatewayResult<Option<Worker>>;
}

/// SQLite-backed worker repository.
pub struct SqliteWorkerRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteWorkerRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> DbResult<Self> {
        ensure_schema_ready(
            conn,
            &[WORKERS_SHAPE, LOCATIONS_SHAPE, INITIATIVES_SHAPE, LINKS_SHAPE],
        )?;
        Ok(Self { conn })
    }
}

impl WorkerRepository for SqliteWorkerRepository<'_> {
    fn create_worker(&self, worker: &Worker) -> GatewayResult<WorkerId> {
        let id = write_unit(self.conn, "worker_create", ErrorCode::WorkerCreate, |tx| {
            tx.execute(
                "INSERT INTO workers (
                    name,
                    phone_number,
                    date_of_birth,
                    salary,
                    email
                ) VALUES (?1, ?2, ?3, ?4, ?5);",
                params![
                    worker.name,
                    worker.phone_number,
                    worker.date_of_birth,
                    worker.salary,
                    worker.email,
                ],
            )?;
            let id = tx.last_insert_rowid();
            for location in &worker.locations {
                insert_location(tx, id, location)?;
            }
            replace_links_of_worker(tx, id, worker.initiatives.iter().map(|it| it.id))?;
            Ok(id)
        })?;
        debug!("event=worker_create module=repo status=ok worker_id={id}");
        Ok(id)
    }

    fn fetch_worker(&self, id: WorkerId) -> GatewayResult<Option<Worker>> {
        if !is_persisted_id(id) {
            return Ok(None);
        }
        read_unit(self.conn, "worker_fetch", ErrorCode::WorkerFetch, |tx| {
            load_worker(tx, "WHERE id = ?1;", &id)
        })
    }

    fn fetch_all_workers(&self) -> GatewayResult<Vec<Worker>> {
        read_unit(
            self.conn,
            "worker_fetch_all",
            ErrorCode::WorkerFetchAll,
            |tx| {
                let mut stmt = tx.prepare(&format!("{WORKER_SELECT_SQL} ORDER BY id ASC;"))?;
                let mut rows = stmt.query([])?;
                let mut workers = Vec::new();
                while let Some(row) = rows.next()? {
                    workers.push(worker_from_row(row)?);
                }
                for worker in &mut workers {
                    hydrate_worker(tx, worker)?;
                }
                Ok(workers)
            },
        )
    }

    fn update_worker(&self, worker: &Worker) -> GatewayResult<Option<Worker>> {
        if !worker.is_persisted() {
            return Ok(None);
        }
        let updated = write_unit(self.conn, "worker_update", ErrorCode::WorkerUpdate, |tx| {
            let changed = tx.execute(
                "UPDATE workers
                 SET
                    name = ?3,
                    phone_number = ?4,
                    date_of_birth = ?5,
                    salary = ?6,
                    email = ?7,
                    revision = revision + 1
                 WHERE id = ?1
                   AND revision = ?2;",
                params![
                    worker.id,
                    worker.revision,
                    worker.name,
                    worker.phone_number,
                    worker.date_of_birth,
                    worker.salary,
                    worker.email,
                ],
            )?;
            if changed == 0 {
                return Ok(None);
            }

            replace_links_of_worker(tx, worker.id, worker.initiatives.iter().map(|it| it.id))?;
            let locations = replace_locations_of(tx, worker.id, &worker.locations)?;
            Ok(Some(Worker {
                revision: worker.revision + 1,
                locations,
                ..worker.clone()
            }))
        })?;

        if updated.is_none() {
            debug!(
                "event=worker_update module=repo status=skipped worker_id={} revision={}",
                worker.id, worker.revision
            );
        }
        Ok(updated)
    }

    fn delete_worker(&self, id: WorkerId) -> GatewayResult<usize> {
        if !is_persisted_id(id) {
            return Ok(0);
        }
        write_unit(self.conn, "worker_delete", ErrorCode::WorkerDelete, |tx| {
            Ok(tx.execute("DELETE FROM workers WHERE id = ?1;", [id])?)
        })
    }

    fn delete_all_workers(&self) -> GatewayResult<usize> {
        write_unit(
            self.conn,
            "worker_delete_all",
            ErrorCode::WorkerDeleteAll,
            |tx| Ok(tx.execute("DELETE FROM workers;", [])?),
        )
    }

    fn fetch_worker_by_phone(&self, phone_number: &str) -> GatewayResult<Option<Worker>> {
        read_unit(
            self.conn,
            "worker_phone_lookup",
            ErrorCode::WorkerPhoneLookup,
            |tx| load_worker(tx, "WHERE phone_number = ?1 ORDER BY id ASC LIMIT 1;", &phone_number),
        )
    }

    fn fetch_worker_by_email(&self, email: &str) -> GatewayResult<Option<Worker>> {
        read_unit(
            self.conn,
            "worker_email_lookup",
            ErrorCode::WorkerEmailLookup,
            |tx| load_worker(tx, "WHERE email = ?1 ORDER BY id ASC LIMIT 1;", &email),
        )
    }
}
