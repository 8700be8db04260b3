//! Initiative entity.

use super::worker::Worker;
use super::{is_persisted_id, EntityId, UNSAVED_ID};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type InitiativeId = EntityId;

/// Initiative row plus its worker links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Initiative {
    pub id: InitiativeId,
    pub name: String,
    pub domain: String,
    pub start_date: NaiveDate,
    pub manager_name: String,
    pub revision: i64,
    /// Authoritative for the link table only when this initiative is the
    /// entity handed to `update_initiative`.
    pub workers: Vec<Worker>,
}

impl Initiative {
    /// Creates an unsaved initiative with no linked workers.
    pub fn new(
        name: impl Into<String>,
        domain: impl Into<String>,
        start_date: NaiveDate,
        manager_name: impl Into<String>,
    ) -> Self {
        Self {
            id: UNSAVED_ID,
            name: name.into(),
            domain: domain.into(),
            start_date,
            manager_name: manager_name.into(),
            revision: 0,
            workers: Vec::new(),
        }
    }

    pub fn is_persisted(&self) -> bool {
        is_persisted_id(self.id)
    }
}
