//! Initiative repository contract and SQLite implementation.
//!
//! # Invariants
//! - `update_initiative` is guarded by `revision` and replaces the whole
//!   worker link set of the initiative. Workers whose membership changed
//!   get their revision bumped.
//! - Linked workers are loaded with their own fields only.

use super::rows::{
    initiative_from_row, load_workers_of, replace_links_of_initiative, INITIATIVES_SHAPE,
    INITIATIVE_SELECT_SQL, LINKS_SHAPE, WORKERS_SHAPE,
};
use super::unit::{read_unit, write_unit};
use super::GatewayResult;
use crate::db::{ensure_schema_ready, DbResult};
use crate::error_codes::ErrorCode;
use crate::model::initiative::{Initiative, InitiativeId};
use crate::model::is_persisted_id;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};

/// Repository interface for initiative persistence.
pub trait InitiativeRepository {
    /// Inserts the initiative and its worker links; returns the new id.
    fn create_initiative(&self, initiative: &Initiative) -> GatewayResult<InitiativeId>;
    fn fetch_initiative(&self, id: InitiativeId) -> GatewayResult<Option<Initiative>>;
    fn fetch_all_initiatives(&self) -> GatewayResult<Vec<Initiative>>;
    /// Replaces own fields and the worker link set.
    ///
    /// Returns `None` when no row matched `id` and `revision`.
    fn update_initiative(&self, initiative: &Initiative) -> GatewayResult<Option<Initiative>>;
    fn delete_initiative(&self, id: InitiativeId) -> GatewayResult<usize>;
    fn delete_all_initiatives(&self) -> GatewayResult<usize>;
}

/// SQLite-backed initiative repository.
pub struct SqliteInitiativeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteInitiativeRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> DbResult<Self> {
        ensure_schema_ready(conn, &[INITIATIVES_SHAPE, WORKERS_SHAPE, LINKS_SHAPE])?;
        Ok(Self { conn })
    }
}

impl InitiativeRepository for SqliteInitiativeRepository<'_> {
    fn create_initiative(&self, initiative: &Initiative) -> GatewayResult<InitiativeId> {
        let id = write_unit(
            self.conn,
            "initiative_create",
            ErrorCode::InitiativeCreate,
            |tx| {
                tx.execute(
                    "INSERT INTO initiatives (
                        name,
                        domain,
                        start_date,
                        manager_name
                    ) VALUES (?1, ?2, ?3, ?4);",
                    params![
                        initiative.name,
                        initiative.domain,
                        initiative.start_date,
                        initiative.manager_name,
                    ],
                )?;
                let id = tx.last_insert_rowid();
                replace_links_of_initiative(tx, id, initiative.workers.iter().map(|it| it.id))?;
                Ok(id)
            },
        )?;
        debug!("event=initiative_create module=repo status=ok initiative_id={id}");
        Ok(id)
    }

    fn fetch_initiative(&self, id: InitiativeId) -> GatewayResult<Option<Initiative>> {
        if !is_persisted_id(id) {
            return Ok(None);
        }
        read_unit(
            self.conn,
            "initiative_fetch",
            ErrorCode::InitiativeFetch,
            |tx| {
                let initiative = tx
                    .query_row(
                        &format!("{INITIATIVE_SELECT_SQL} WHERE id = ?1;"),
                        [id],
                        initiative_from_row,
                    )
                    .optional()?;
                let Some(mut initiative) = initiative else {
                    return Ok(None);
                };
                initiative.workers = load_workers_of(tx, initiative.id)?;
                Ok(Some(initiative))
            },
        )
    }

    fn fetch_all_initiatives(&self) -> GatewayResult<Vec<Initiative>> {
        read_unit(
            self.conn,
            "initiative_fetch_all",
            ErrorCode::InitiativeFetchAll,
            |tx| {
                let mut stmt =
                    tx.prepare(&format!("{INITIATIVE_SELECT_SQL} ORDER BY id ASC;"))?;
                let mut rows = stmt.query([])?;
                let mut initiatives = Vec::new();
                while let Some(row) = rows.next()? {
                    initiatives.push(initiative_from_row(row)?);
                }
                for initiative in &mut initiatives {
                    initiative.workers = load_workers_of(tx, initiative.id)?;
                }
                Ok(initiatives)
            },
        )
    }

    fn update_initiative(&self, initiative: &Initiative) -> GatewayResult<Option<Initiative>> {
        if !initiative.is_persisted() {
            return Ok(None);
        }
        let updated = write_unit(
            self.conn,
            "initiative_update",
            ErrorCode::InitiativeUpdate,
            |tx| {
                let changed = tx.execute(
                    "UPDATE initiatives
                     SET
                        name = ?3,
                        domain = ?4,
                        start_date = ?5,
                        manager_name = ?6,
                        revision = revision + 1
                     WHERE id = ?1
                       AND revision = ?2;",
                    params![
                        initiative.id,
                        initiative.revision,
                        initiative.name,
                        initiative.domain,
                        initiative.start_date,
                        initiative.manager_name,
                    ],
                )?;
                if changed == 0 {
                    return Ok(None);
                }

                replace_links_of_initiative(
                    tx,
                    initiative.id,
                    initiative.workers.iter().map(|it| it.id),
                )?;
                Ok(Some(Initiative {
                    revision: initiative.revision + 1,
                    ..initiative.clone()
                }))
            },
        )?;

        if updated.is_none() {
            debug!(
                "event=initiative_update module=repo status=skipped initiative_id={} revision={}",
                initiative.id, initiative.revision
            );
        }
        Ok(updated)
    }

    fn delete_initiative(&self, id: InitiativeId) -> GatewayResult<usize> {
        if !is_persisted_id(id) {
            return Ok(0);
        }
        write_unit(
            self.conn,
            "initiative_delete",
            ErrorCode::InitiativeDelete,
            |tx| Ok(tx.execute("DELETE FROM initiatives WHERE id = ?1;", [id])?),
        )
    }

    fn delete_all_initiatives(&self) -> GatewayResult<usize> {
        write_unit(
            self.conn,
            "initiative_delete_all",
            ErrorCode::InitiativeDeleteAll,
            |tx| Ok(tx.execute("DELETE FROM initiatives;", [])?),
        )
    }
}
