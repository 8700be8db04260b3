//! Persisted entity model for the staffing registry.
//!
//! # Responsibility
//! - Define the row-shaped entities the gateways read and write.
//! - Keep worker/initiative links as two independently owned collections.
//!
//! # Invariants
//! - An id of `0` (or below) means "not yet persisted" and never addresses
//!   a store row.
//! - Nested link members carry their own fields only; their back-link
//!   collections are always empty.

pub mod initiative;
pub mod location;
pub mod worker;

/// Store-assigned identifier shared by every entity kind.
pub type EntityId = i64;

/// Id carried by entities that have not been created in the store yet.
pub const UNSAVED_ID: EntityId = 0;

/// Returns whether `id` can address a persisted row.
pub fn is_persisted_id(id: EntityId) -> bool {
    id > UNSAVED_ID
}
