//! Transfer records exchanged between services, the assignment engine and
//! presentation code.
//!
//! # Responsibility
//! - Mirror entity fields in a storage-agnostic shape callers may mutate.
//!
//! # Invariants
//! - Records are produced and consumed only through `crate::mapper`.
//! - Nested link members hold their own fields; their back-link collections
//!   are empty (see `mapper` for the shallow-copy boundary).

use crate::model::initiative::InitiativeId;
use crate::model::location::LocationId;
use crate::model::worker::WorkerId;
use crate::model::UNSAVED_ID;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerRecord {
    pub id: WorkerId,
    pub name: String,
    pub phone_number: String,
    pub date_of_birth: NaiveDate,
    pub salary: f64,
    pub email: String,
    pub revision: i64,
    pub locations: Vec<LocationRecord>,
    pub initiatives: Vec<InitiativeRecord>,
}

impl WorkerRecord {
    /// Unsaved worker record with empty location and link sets.
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
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitiativeRecord {
    pub id: InitiativeId,
    pub name: String,
    pub domain: String,
    pub start_date: NaiveDate,
    pub manager_name: String,
    pub revision: i64,
    pub workers: Vec<WorkerRecord>,
}

impl InitiativeRecord {
    /// Unsaved initiative record with no linked workers.
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
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub id: LocationId,
    pub worker_id: WorkerId,
    pub door_number: String,
    pub street: String,
    pub district: String,
    pub state: String,
    pub country: String,
    pub postal_code: u32,
}
