//! Worker entity.

use super::initiative::Initiative;
use super::location::Location;
use super::{is_persisted_id, EntityId, UNSAVED_ID};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type WorkerId = EntityId;

/// Worker row plus its owned locations and initiative links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    pub id: WorkerId,
    pub name: String,
    /// Unique across workers; checked by callers, not by the store.
    pub phone_number: String,
    pub date_of_birth: NaiveDate,
    pub salary: f64,
    /// Unique across workers; checked by callers, not by the store.
    pub email: String,
    /// Optimistic concurrency token, bumped by every successful update.
    pub revision: i64,
    pub locations: Vec<Location>,
    /// Authoritative for the link table only when this worker is the
    /// entity handed to `update_worker`.
    pub initiatives: Vec<Initiative>,
}

impl Worker {
    /// Creates an unsaved worker with empty location and link sets.
    pub fn new(
        name: impl Into<String>,
        phone_number: impl Into<String>,
        date_of_birth: NaiveDate,
        salary: f64,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: UNSAVED_ID,
            name: name.into(),
            phone_number: phone_number.into(),
            date_of_birth,
            salary,
            email: email.into(),
            revision: 0,
            locations: Vec::new(),
            initiatives: Vec::new(),
        }
    }

    pub fn is_persisted(&self) -> bool {
        is_persisted_id(self.id)
    }
}
