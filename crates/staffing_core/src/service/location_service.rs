//! Location use-case service.

use crate::mapper::{location_to_record, locations_to_records, record_to_location};
use crate::model::location::LocationId;
use crate::record::LocationRecord;
use crate::repo::location_repo::LocationRepository;
use crate::repo::GatewayResult;

/// Use-case service wrapper for location operations.
pub struct LocationService<R: LocationRepository> {
    repo: R,
}

impl<R: LocationRepository> LocationService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create(&self, record: &LocationRecord) -> GatewayResult<LocationId> {
        self.repo.create_location(&record_to_location(record))
    }

    pub fn fetch(&self, id: LocationId) -> GatewayResult<Option<LocationRecord>> {
        Ok(self.repo.fetch_location(id)?.as_ref().map(location_to_record))
    }

    pub fn fetch_all(&self) -> GatewayResult<Vec<LocationRecord>> {
        Ok(locations_to_records(&self.repo.fetch_all_locations()?))
    }

    /// Replaces address fields; the owning worker cannot change.
    pub fn update(&self, record: &LocationRecord) -> GatewayResult<Option<LocationRecord>> {
        Ok(self
            .repo
            .update_location(&record_to_location(record))?
            .as_ref()
            .map(location_to_record))
    }

    pub fn delete(&self, id: LocationId) -> GatewayResult<usize> {
        self.repo.delete_location(id)
    }

    pub fn delete_all(&self) -> GatewayResult<usize> {
        self.repo.delete_all_locations()
    }
}
