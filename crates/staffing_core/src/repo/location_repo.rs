//! Location repository contract and SQLite implementation.
//!
//! Locations belong to exactly one worker for their whole lifetime: the
//! owner is set at creation and every update is matched on `(id, worker_id)`.

use super::rows::{
    insert_location, location_from_row, update_location_row, LOCATIONS_SHAPE,
    LOCATION_SELECT_SQL, WORKERS_SHAPE,
};
use super::unit::{read_unit, write_unit};
use super::GatewayResult;
use crate::db::{ensure_schema_ready, DbResult};
use crate::error_codes::ErrorCode;
use crate::model::is_persisted_id;
use crate::model::location::{Location, LocationId};
use log::debug;
use rusqlite::{Connection, OptionalExtension};

/// Repository interface for location persistence.
pub trait LocationRepository {
    /// Inserts the location under `location.worker_id`; returns the new id.
    fn create_location(&self, location: &Location) -> GatewayResult<LocationId>;
    fn fetch_location(&self, id: LocationId) -> GatewayResult<Option<Location>>;
    fn fetch_all_locations(&self) -> GatewayResult<Vec<Location>>;
    /// Replaces the address fields. `None` when no row matched id and owner.
    fn update_location(&self, location: &Location) -> GatewayResult<Option<Location>>;
    fn delete_location(&self, id: LocationId) -> GatewayResult<usize>;
    fn delete_all_locations(&self) -> GatewayResult<usize>;
}

/// SQLite-backed location repository.
pub struct SqliteLocationRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteLocationRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> DbResult<Self> {
        ensure_schema_ready(conn, &[LOCATIONS_SHAPE, WORKERS_SHAPE])?;
        Ok(Self { conn })
    }
}

impl LocationRepository for SqliteLocationRepository<'_> {
    fn create_location(&self, location: &Location) -> GatewayResult<LocationId> {
        let created = write_unit(
            self.conn,
            "location_create",
            ErrorCode::LocationCreate,
            |tx| insert_location(tx, location.worker_id, location),
        )?;
        debug!(
            "event=location_create module=repo status=ok location_id={} worker_id={}",
            created.id, created.worker_id
        );
        Ok(created.id)
    }

    fn fetch_location(&self, id: LocationId) -> GatewayResult<Option<Location>> {
        if !is_persisted_id(id) {
            return Ok(None);
        }
        read_unit(self.conn, "location_fetch", ErrorCode::LocationFetch, |tx| {
            let location = tx
                .query_row(
                    &format!("{LOCATION_SELECT_SQL} WHERE id = ?1;"),
                    [id],
                    location_from_row,
                )
                .optional()?;
            Ok(location)
        })
    }

    fn fetch_all_locations(&self) -> GatewayResult<Vec<Location>> {
        read_unit(
            self.conn,
            "location_fetch_all",
            ErrorCode::LocationFetchAll,
            |tx| {
                let mut stmt = tx.prepare(&format!("{LOCATION_SELECT_SQL} ORDER BY id ASC;"))?;
                let mut rows = stmt.query([])?;
                let mut locations = Vec::new();
                while let Some(row) = rows.next()? {
                    locations.push(location_from_row(row)?);
                }
                Ok(locations)
            },
        )
    }

    fn update_location(&self, location: &Location) -> GatewayResult<Option<Location>> {
        if !is_persisted_id(location.id) {
            return Ok(None);
        }
        write_unit(
            self.conn,
            "location_update",
            ErrorCode::LocationUpdate,
            |tx| {
                if update_location_row(tx, location.worker_id, location)? == 0 {
                    return Ok(None);
                }
                Ok(Some(location.clone()))
            },
        )
    }

    fn delete_location(&self, id: LocationId) -> GatewayResult<usize> {
        if !is_persisted_id(id) {
            return Ok(0);
        }
        write_unit(
            self.conn,
            "location_delete",
            ErrorCode::LocationDelete,
            |tx| Ok(tx.execute("DELETE FROM locations WHERE id = ?1;", [id])?),
        )
    }

    fn delete_all_locations(&self) -> GatewayResult<usize> {
        write_unit(
            self.conn,
            "location_delete_all",
            ErrorCode::LocationDeleteAll,
            |tx| Ok(tx.execute("DELETE FROM locations;", [])?),
        )
    }
}
