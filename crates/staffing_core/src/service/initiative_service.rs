//! Initiative use-case service.

use crate::mapper::{initiative_to_record, initiatives_to_records, record_to_initiative};
use crate::model::initiative::InitiativeId;
use crate::record::{InitiativeRecord, WorkerRecord};
use crate::repo::initiative_repo::InitiativeRepository;
use crate::repo::GatewayResult;
use crate::service::assignment::{self, LinkError, LinkOutcome};

/// Use-case service wrapper for initiative operations.
pub struct InitiativeService<R: InitiativeRepository> {
    repo: R,
}

impl<R: InitiativeRepository> InitiativeService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create(&self, record: &InitiativeRecord) -> GatewayResult<InitiativeId> {
        self.repo.create_initiative(&record_to_initiative(record))
    }

    pub fn fetch(&self, id: InitiativeId) -> GatewayResult<Option<InitiativeRecord>> {
        Ok(self
            .repo
            .fetch_initiative(id)?
            .as_ref()
            .map(initiative_to_record))
    }

    pub fn fetch_all(&self) -> GatewayResult<Vec<InitiativeRecord>> {
        Ok(initiatives_to_records(&self.repo.fetch_all_initiatives()?))
    }

    /// Writes `record` back; `None` when it is unknown or stale.
    pub fn update(&self, record: &InitiativeRecord) -> GatewayResult<Option<InitiativeRecord>> {
        Ok(self
            .repo
            .update_initiative(&record_to_initiative(record))?
            .as_ref()
            .map(initiative_to_record))
    }

    pub fn delete(&self, id: InitiativeId) -> GatewayResult<usize> {
        self.repo.delete_initiative(id)
    }

    pub fn delete_all(&self) -> GatewayResult<usize> {
        self.repo.delete_all_initiatives()
    }

    /// Links the workers named in `ids` to `owner`.
    pub fn assign_workers(
        &self,
        owner: &mut InitiativeRecord,
        ids: &str,
        candidates: &[WorkerRecord],
    ) -> Result<LinkOutcome, LinkError> {
        assignment::assign(&self.repo, ids, owner, candidates)
    }

    /// Unlinks the workers named in `ids` from `owner`.
    pub fn unassign_workers(
        &self,
        owner: &mut InitiativeRecord,
        ids: &str,
    ) -> Result<LinkOutcome, LinkError> {
        assignment::de_assign(&self.repo, ids, owner)
    }

    /// Workers from `candidates` not yet linked to `owner`.
    pub fn available_workers(
        &self,
        owner: &InitiativeRecord,
        candidates: &[WorkerRecord],
    ) -> Option<Vec<WorkerRecord>> {
        assignment::unassigned_candidates(candidates, owner)
    }
}
