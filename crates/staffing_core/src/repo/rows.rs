//! Row parsing, table shapes and link/location helpers shared by gateways.
//!
//! Helpers take `&Connection`; callers pass their open transaction, which
//! derefs to the connection it wraps.

use crate::db::{DbResult, TableShape};
use crate::model::initiative::{Initiative, InitiativeId};
use crate::model::location::{Location, LocationId};
use crate::model::worker::{Worker, WorkerId};
use crate::model::is_persisted_id;
use rusqlite::{params, Connection, Row};
use std::collections::BTreeSet;

pub(crate) const WORKERS_SHAPE: TableShape = (
    "workers",
    &[
        "id",
        "name",
        "phone_number",
        "date_of_birth",
        "salary",
        "email",
        "revision",
    ],
);

pub(crate) const INITIATIVES_SHAPE: TableShape = (
    "initiatives",
    &[
        "id",
        "name",
        "domain",
        "start_date",
        "manager_name",
        "revision",
    ],
);

pub(crate) const LOCATIONS_SHAPE: TableShape = (
    "locations",
    &[
        "id",
        "worker_id",
        "door_number",
        "street",
        "district",
        "state",
        "country",
        "postal_code",
    ],
);

pub(crate) const LINKS_SHAPE: TableShape = ("worker_initiatives", &["worker_id", "initiative_id"]);

pub(crate) const WORKER_SELECT_SQL: &str = "SELECT
        id,
        name,
        phone_number,
        date_of_birth,
        salary,
        email,
        revision
     FROM workers";

pub(crate) const INITIATIVE_SELECT_SQL: &str = "SELECT
        id,
        name,
        domain,
        start_date,
        manager_name,
        revision
     FROM initiatives";

pub(crate) const LOCATION_SELECT_SQL: &str = "SELECT
        id,
        worker_id,
        door_number,
        street,
        district,
        state,
        country,
        postal_code
     FROM locations";

/// Own fields only; nested collections start empty.
pub(crate) fn worker_from_row(row: &Row<'_>) -> rusqlite::Result<Worker> {
    Ok(Worker {
        id: row.get("id")?,
        name: row.get("name")?,
        phone_number: row.get("phone_number")?,
        date_of_birth: row.get("date_of_birth")?,
        salary: row.get("salary")?,
        email: row.get("email")?,
        revision: row.get("revision")?,
        locations: Vec::new(),
        initiatives: Vec::new(),
    })
}

/// Own fields only; `workers` starts empty.
pub(crate) fn initiative_from_row(row: &Row<'_>) -> rusqlite::Result<Initiative> {
    Ok(Initiative {
        id: row.get("id")?,
        name: row.get("name")?,
        domain: row.get("domain")?,
        start_date: row.get("start_date")?,
        manager_name: row.get("manager_name")?,
        revision: row.get("revision")?,
        workers: Vec::new(),
    })
}

pub(crate) fn location_from_row(row: &Row<'_>) -> rusqlite::Result<Location> {
    Ok(Location {
        id: row.get("id")?,
        worker_id: row.get("worker_id")?,
        door_number: row.get("door_number")?,
        street: row.get("street")?,
        district: row.get("district")?,
        state: row.get("state")?,
        country: row.get("country")?,
        postal_code: row.get("postal_code")?,
    })
}

/// Loads a worker with its locations and linked initiatives (one level).
pub(crate) fn load_worker(
    conn: &Connection,
    filter_sql: &str,
    value: &dyn rusqlite::ToSql,
) -> DbResult<Option<Worker>> {
    let mut stmt = conn.prepare(&format!("{WORKER_SELECT_SQL} {filter_sql}"))?;
    let mut rows = stmt.query([value])?;
    let Some(row) = rows.next()? else {
        return Ok(None);
    };
    let mut worker = worker_from_row(row)?;
    hydrate_worker(conn, &mut worker)?;
    Ok(Some(worker))
}

pub(crate) fn hydrate_worker(conn: &Connection, worker: &mut Worker) -> DbResult<()> {
    worker.locations = load_locations_of(conn, worker.id)?;
    worker.initiatives = load_initiatives_of(conn, worker.id)?;
    Ok(())
}

pub(crate) fn load_locations_of(conn: &Connection, worker_id: WorkerId) -> DbResult<Vec<Location>> {
    let mut stmt = conn.prepare(&format!(
        "{LOCATION_SELECT_SQL} WHERE worker_id = ?1 ORDER BY id ASC;"
    ))?;
    let mut rows = stmt.query([worker_id])?;
    let mut locations = Vec::new();
    while let Some(row) = rows.next()? {
        locations.push(location_from_row(row)?);
    }
    Ok(locations)
}

pub(crate) fn load_initiatives_of(
    conn: &Connection,
    worker_id: WorkerId,
) -> DbResult<Vec<Initiative>> {
    let mut stmt = conn.prepare(
        "SELECT
            i.id,
            i.name,
            i.domain,
            i.start_date,
            i.manager_name,
            i.revision
         FROM initiatives i
         INNER JOIN worker_initiatives wi ON wi.initiative_id = i.id
         WHERE wi.worker_id = ?1
         ORDER BY i.id ASC;",
    )?;
    let mut rows = stmt.query([worker_id])?;
    let mut initiatives = Vec::new();
    while let Some(row) = rows.next()? {
        initiatives.push(initiative_from_row(row)?);
    }
    Ok(initiatives)
}

pub(crate) fn load_workers_of(
    conn: &Connection,
    initiative_id: InitiativeId,
) -> DbResult<Vec<Worker>> {
    let mut stmt = conn.prepare(
        "SELECT
            w.id,
            w.name,
            w.phone_number,
            w.date_of_birth,
            w.salary,
            w.email,
            w.revision
         FROM workers w
         INNER JOIN worker_initiatives wi ON wi.worker_id = w.id
         WHERE wi.initiative_id = ?1
         ORDER BY w.id ASC;",
    )?;
    let mut rows = stmt.query([initiative_id])?;
    let mut workers = Vec::new();
    while let Some(row) = rows.next()? {
        workers.push(worker_from_row(row)?);
    }
    Ok(workers)
}

pub(crate) fn insert_location(
    conn: &Connection,
    worker_id: WorkerId,
    location: &Location,
) -> DbResult<Location> {
    conn.execute(
        "INSERT INTO locations (
            worker_id,
            door_number,
            street,
            district,
            state,
            country,
            postal_code
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
        params![
            worker_id,
            location.door_number,
            location.street,
            location.district,
            location.state,
            location.country,
            location.postal_code,
        ],
    )?;
    Ok(Location {
        id: conn.last_insert_rowid(),
        worker_id,
        ..location.clone()
    })
}

/// Updates one location row, matched on both id and owner.
///
/// Returns the number of rows changed; 0 when the id is unknown or the row
/// belongs to a different worker.
pub(crate) fn update_location_row(
    conn: &Connection,
    worker_id: WorkerId,
    location: &Location,
) -> DbResult<usize> {
    let changed = conn.execute(
        "UPDATE locations
         SET
            door_number = ?3,
            street = ?4,
            district = ?5,
            state = ?6,
            country = ?7,
            postal_code = ?8
         WHERE id = ?1
           AND worker_id = ?2;",
        params![
            location.id,
            worker_id,
            location.door_number,
            location.street,
            location.district,
            location.state,
            location.country,
            location.postal_code,
        ],
    )?;
    Ok(changed)
}

/// Replaces the whole location set owned by `worker_id`.
///
/// Unsaved entries are inserted, persisted entries are updated in place and
/// rows no longer listed are deleted. A persisted entry that this worker
/// does not own fails the unit with `QueryReturnedNoRows`.
pub(crate) fn replace_locations_of(
    conn: &Connection,
    worker_id: WorkerId,
    locations: &[Location],
) -> DbResult<Vec<Location>> {
    let mut kept = Vec::with_capacity(locations.len());
    for location in locations {
        if is_persisted_id(location.id) {
            if update_location_row(conn, worker_id, location)? == 0 {
                return Err(rusqlite::Error::QueryReturnedNoRows.into());
            }
            kept.push(Location {
                worker_id,
                ..location.clone()
            });
        } else {
            kept.push(insert_location(conn, worker_id, location)?);
        }
    }

    let kept_ids: BTreeSet<LocationId> = kept.iter().map(|location| location.id).collect();
    let mut stmt = conn.prepare("SELECT id FROM locations WHERE worker_id = ?1;")?;
    let mut rows = stmt.query([worker_id])?;
    let mut stale = Vec::new();
    while let Some(row) = rows.next()? {
        let id: LocationId = row.get(0)?;
        if !kept_ids.contains(&id) {
            stale.push(id);
        }
    }
    for id in stale {
        conn.execute("DELETE FROM locations WHERE id = ?1;", [id])?;
    }

    Ok(kept)
}

/// One side of the `worker_initiatives` join table.
struct LinkSide {
    owner_column: &'static str,
    member_column: &'static str,
    member_table: &'static str,
}

const WORKER_SIDE: LinkSide = LinkSide {
    owner_column: "worker_id",
    member_column: "initiative_id",
    member_table: "initiatives",
};

const INITIATIVE_SIDE: LinkSide = LinkSide {
    owner_column: "initiative_id",
    member_column: "worker_id",
    member_table: "workers",
};

/// Replaces every link of `worker_id` with `initiative_ids`.
///
/// Initiatives that gain or lose this worker get their revision bumped.
pub(crate) fn replace_links_of_worker(
    conn: &Connection,
    worker_id: WorkerId,
    initiative_ids: impl IntoIterator<Item = InitiativeId>,
) -> DbResult<()> {
    replace_links(conn, &WORKER_SIDE, worker_id, initiative_ids)
}

/// Replaces every link of `initiative_id` with `worker_ids`.
///
/// Workers that gain or lose this initiative get their revision bumped.
pub(crate) fn replace_links_of_initiative(
    conn: &Connection,
    initiative_id: InitiativeId,
    worker_ids: impl IntoIterator<Item = WorkerId>,
) -> DbResult<()> {
    replace_links(conn, &INITIATIVE_SIDE, initiative_id, worker_ids)
}

fn replace_links(
    conn: &Connection,
    side: &LinkSide,
    owner_id: i64,
    member_ids: impl IntoIterator<Item = i64>,
) -> DbResult<()> {
    let before: BTreeSet<i64> = {
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM worker_initiatives WHERE {} = ?1;",
            side.member_column, side.owner_column
        ))?;
        let ids = stmt
            .query_map([owner_id], |row| row.get::<_, i64>(0))?
            .collect::<Result<BTreeSet<i64>, _>>()?;
        ids
    };
    let after: BTreeSet<i64> = member_ids.into_iter().collect();

    conn.execute(
        &format!("DELETE FROM worker_initiatives WHERE {} = ?1;", side.owner_column),
        [owner_id],
    )?;
    let mut insert = conn.prepare(&format!(
        "INSERT OR IGNORE INTO worker_initiatives ({}, {}) VALUES (?1, ?2);",
        side.owner_column, side.member_column
    ))?;
    for member_id in &after {
        insert.execute(params![owner_id, member_id])?;
    }

    // A counterpart whose link set changed no longer matches older readers.
    let mut touch = conn.prepare(&format!(
        "UPDATE {} SET revision = revision + 1 WHERE id = ?1;",
        side.member_table
    ))?;
    for member_id in before.symmetric_difference(&after) {
        touch.execute([member_id])?;
    }
    Ok(())
}
