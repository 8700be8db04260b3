//! Location entity.
//!
//! A location is owned by exactly one worker for its whole lifetime; the
//! owner is fixed when the row is created.

use super::worker::WorkerId;
use super::{EntityId, UNSAVED_ID};
use serde::{Deserialize, Serialize};

pub type LocationId = EntityId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    /// Owning worker. Must reference a persisted worker when stored.
    pub worker_id: WorkerId,
    pub door_number: String,
    pub street: String,
    pub district: String,
    pub state: String,
    pub country: String,
    pub postal_code: u32,
}

impl Location {
    /// Creates an unsaved location owned by `worker_id`.
    ///
    /// Locations nested in an unsaved `Worker` may use `UNSAVED_ID` as owner;
    /// the worker gateway fills in the real id on create.
    pub fn new(
        worker_id: WorkerId,
        door_number: impl Into<String>,
        street: impl Into<String>,
        district: impl Into<String>,
        state: impl Into<String>,
        country: impl Into<String>,
        postal_code: u32,
    ) -> Self {
        Self {
            id: UNSAVED_ID,
            worker_id,
            door_number: door_number.into(),
            street: street.into(),
            district: district.into(),
            state: state.into(),
            country: country.into(),
            postal_code,
        }
    }
}
