//! Worker use-case service.
//!
//! # Responsibility
//! - Expose worker CRUD over transfer records.
//! - Answer phone/email uniqueness questions for callers.
//! - Drive initiative linking through the assignment engine.
//!
//! # Invariants
//! - Uniqueness is a caller-side check; two concurrent callers can both pass
//!   it. The store does not enforce it.

use crate::mapper::{record_to_worker, worker_to_record, workers_to_records};
use crate::model::worker::WorkerId;
use crate::record::{InitiativeRecord, WorkerRecord};
use crate::repo::worker_repo::WorkerRepository;
use crate::repo::GatewayResult;
use crate::service::assignment::{self, LinkError, LinkOutcome};

/// Use-case service wrapper for worker operations.
pub struct WorkerService<R: WorkerRepository> {
    repo: R,
}

impl<R: WorkerRepository> WorkerService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create(&self, record: &WorkerRecord) -> GatewayResult<WorkerId> {
        self.repo.create_worker(&record_to_worker(record))
    }

    pub fn fetch(&self, id: WorkerId) -> GatewayResult<Option<WorkerRecord>> {
        Ok(self.repo.fetch_worker(id)?.as_ref().map(worker_to_record))
    }

    pub fn fetch_all(&self) -> GatewayResult<Vec<WorkerRecord>> {
        Ok(workers_to_records(&self.repo.fetch_all_workers()?))
    }

    /// Writes `record` back; `None` when it is unknown or stale.
    pub fn update(&self, record: &WorkerRecord) -> GatewayResult<Option<WorkerRecord>> {
        Ok(self
            .repo
            .update_worker(&record_to_worker(record))?
            .as_ref()
            .map(worker_to_record))
    }

    pub fn delete(&self, id: WorkerId) -> GatewayResult<usize> {
        self.repo.delete_worker(id)
    }

    pub fn delete_all(&self) -> GatewayResult<usize> {
        self.repo.delete_all_workers()
    }

    pub fn find_by_phone(&self, phone_number: &str) -> GatewayResult<Option<WorkerRecord>> {
        Ok(self
            .repo
            .fetch_worker_by_phone(phone_number)?
            .as_ref()
            .map(worker_to_record))
    }

    pub fn find_by_email(&self, email: &str) -> GatewayResult<Option<WorkerRecord>> {
        Ok(self
            .repo
            .fetch_worker_by_email(email)?
            .as_ref()
            .map(worker_to_record))
    }

    /// Whether another worker already uses `phone_number`.
    ///
    /// `except` names the worker being edited, whose own number is allowed.
    pub fn is_duplicate_phone(
        &self,
        phone_number: &str,
        except: Option<WorkerId>,
    ) -> GatewayResult<bool> {
        let found = self.repo.fetch_worker_by_phone(phone_number)?;
        Ok(found.is_some_and(|worker| Some(worker.id) != except))
    }

    /// Whether another worker already uses `email`.
    pub fn is_duplicate_email(&self, email: &str, except: Option<WorkerId>) -> GatewayResult<bool> {
        let found = self.repo.fetch_worker_by_email(email)?;
        Ok(found.is_some_and(|worker| Some(worker.id) != except))
    }

    /// Links the initiatives named in `ids` to `owner`.
    pub fn assign_initiatives(
        &self,
        owner: &mut WorkerRecord,
        ids: &str,
        candidates: &[InitiativeRecord],
    ) -> Result<LinkOutcome, LinkError> {
        assignment::assign(&self.repo, ids, owner, candidates)
    }

    /// Unlinks the initiatives named in `ids` from `owner`.
    pub fn unassign_initiatives(
        &self,
        owner: &mut WorkerRecord,
        ids: &str,
    ) -> Result<LinkOutcome, LinkError> {
        assignment::de_assign(&self.repo, ids, owner)
    }

    /// Initiatives from `candidates` not yet linked to `owner`.
    pub fn available_initiatives(
        &self,
        owner: &WorkerRecord,
        candidates: &[InitiativeRecord],
    ) -> Option<Vec<InitiativeRecord>> {
        assignment::unassigned_candidates(candidates, owner)
    }
}
