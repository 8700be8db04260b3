//! Relationship assignment engine.
//!
//! # Responsibility
//! - Resolve textual id lists against a candidate set and link or unlink
//!   the matches on an owner record.
//! - Persist the changed owner through its gateway at most once per call.
//!
//! # Invariants
//! - Ids that do not resolve are data (`LinkOutcome::Unresolved`), never
//!   errors.
//! - Nothing is persisted when no id resolves.
//! - When nothing is persisted, the owner's link set is left as it was.
//! - Gateway failures propagate unchanged as `LinkError::Persistence`.

use crate::mapper::{record_to_initiative, record_to_worker};
use crate::model::EntityId;
use crate::record::{InitiativeRecord, WorkerRecord};
use crate::repo::initiative_repo::InitiativeRepository;
use crate::repo::worker_repo::WorkerRepository;
use crate::repo::PersistenceFailure;
use log::debug;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Anything addressable by a store id.
pub trait Identified {
    fn id(&self) -> EntityId;
}

impl Identified for WorkerRecord {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl Identified for InitiativeRecord {
    fn id(&self) -> EntityId {
        self.id
    }
}

/// Record that owns one side of the worker/initiative link set.
pub trait LinkOwner: Identified {
    type Member: Identified + Clone;

    fn members(&self) -> &[Self::Member];
    fn members_mut(&mut self) -> &mut Vec<Self::Member>;
}

impl LinkOwner for WorkerRecord {
    type Member = InitiativeRecord;

    fn members(&self) -> &[InitiativeRecord] {
        &self.initiatives
    }

    fn members_mut(&mut self) -> &mut Vec<InitiativeRecord> {
        &mut self.initiatives
    }
}

impl LinkOwner for InitiativeRecord {
    type Member = WorkerRecord;

    fn members(&self) -> &[WorkerRecord] {
        &self.workers
    }

    fn members_mut(&mut self) -> &mut Vec<WorkerRecord> {
        &mut self.workers
    }
}

/// Writes an owner's link set back to the store.
pub trait OwnerGateway<O: LinkOwner> {
    /// Returns `Ok(false)` when the write had zero effect (unknown id or
    /// stale revision). On success the owner carries the new revision.
    fn persist_links(&self, owner: &mut O) -> Result<bool, PersistenceFailure>;
}

impl<R: WorkerRepository> OwnerGateway<WorkerRecord> for R {
    fn persist_links(&self, owner: &mut WorkerRecord) -> Result<bool, PersistenceFailure> {
        match self.update_worker(&record_to_worker(owner))? {
            Some(updated) => {
                owner.revision = updated.revision;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl<R: InitiativeRepository> OwnerGateway<InitiativeRecord> for R {
    fn persist_links(&self, owner: &mut InitiativeRecord) -> Result<bool, PersistenceFailure> {
        match self.update_initiative(&record_to_initiative(owner))? {
            Some(updated) => {
                owner.revision = updated.revision;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Result of one assign/de-assign call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// At least one id resolved and the owner was written.
    Persisted,
    /// Nothing was written. Holds the ids that did not resolve; empty when
    /// every id resolved but the write had zero effect.
    Unresolved(Vec<EntityId>),
}

impl LinkOutcome {
    pub fn is_persisted(&self) -> bool {
        matches!(self, Self::Persisted)
    }

    pub fn unresolved(&self) -> &[EntityId] {
        match self {
            Self::Persisted => &[],
            Self::Unresolved(ids) => ids,
        }
    }
}

#[derive(Debug)]
pub enum LinkError {
    /// A token of the id list is empty or not an integer.
    MalformedIdentifier(String),
    Persistence(PersistenceFailure),
}

impl Display for LinkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedIdentifier(token) => write!(f, "malformed identifier `{token}`"),
            Self::Persistence(err) => write!(f, "{err}"),
        }
    }
}

impl Error for LinkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MalformedIdentifier(_) => None,
            Self::Persistence(err) => Some(err),
        }
    }
}

impl From<PersistenceFailure> for LinkError {
    fn from(value: PersistenceFailure) -> Self {
        Self::Persistence(value)
    }
}

/// Parses `"1, 2,3"` into `[1, 2, 3]`. All whitespace is ignored.
pub fn parse_id_list(ids: &str) -> Result<Vec<EntityId>, LinkError> {
    let compact: String = ids.chars().filter(|ch| !ch.is_whitespace()).collect();
    compact
        .split(',')
        .map(|token| {
            token
                .parse::<EntityId>()
                .map_err(|_| LinkError::MalformedIdentifier(token.to_string()))
        })
        .collect()
}

/// Links every candidate named in `ids` to `owner` and persists the owner.
///
/// The first candidate with a matching id is used; duplicates already in
/// the owner's set are not filtered.
pub fn assign<O, G>(
    gateway: &G,
    ids: &str,
    owner: &mut O,
    candidates: &[O::Member],
) -> Result<LinkOutcome, LinkError>
where
    O: LinkOwner,
    G: OwnerGateway<O> + ?Sized,
{
    let requested = parse_id_list(ids)?;
    let snapshot = owner.members().to_vec();
    let mut unresolved = Vec::new();

    for id in &requested {
        match candidates.iter().find(|candidate| candidate.id() == *id) {
            Some(candidate) => owner.members_mut().push(candidate.clone()),
            None => unresolved.push(*id),
        }
    }

    settle(gateway, "link_assign", owner, snapshot, requested.len(), unresolved)
}

/// Removes every member named in `ids` from `owner` and persists the owner.
///
/// Only the first matching member is removed per id.
pub fn de_assign<O, G>(gateway: &G, ids: &str, owner: &mut O) -> Result<LinkOutcome, LinkError>
where
    O: LinkOwner,
    G: OwnerGateway<O> + ?Sized,
{
    let requested = parse_id_list(ids)?;
    let snapshot = owner.members().to_vec();
    let mut unresolved = Vec::new();

    for id in &requested {
        let position = owner.members().iter().position(|member| member.id() == *id);
        match position {
            Some(index) => {
                owner.members_mut().remove(index);
            }
            None => unresolved.push(*id),
        }
    }

    settle(gateway, "link_unassign", owner, snapshot, requested.len(), unresolved)
}

/// Candidates not yet linked to `owner`; `None` when there are none left.
pub fn unassigned_candidates<O: LinkOwner>(
    candidates: &[O::Member],
    owner: &O,
) -> Option<Vec<O::Member>> {
    let linked: BTreeSet<EntityId> = owner.members().iter().map(Identified::id).collect();
    let remaining: Vec<O::Member> = candidates
        .iter()
        .filter(|candidate| !linked.contains(&candidate.id()))
        .cloned()
        .collect();

    if remaining.is_empty() {
        None
    } else {
        Some(remaining)
    }
}

fn settle<O, G>(
    gateway: &G,
    event: &'static str,
    owner: &mut O,
    snapshot: Vec<O::Member>,
    requested: usize,
    unresolved: Vec<EntityId>,
) -> Result<LinkOutcome, LinkError>
where
    O: LinkOwner,
    G: OwnerGateway<O> + ?Sized,
{
    if unresolved.len() == requested {
        debug!(
            "event={} module=service status=skipped owner_id={} requested={}",
            event,
            owner.id(),
            requested
        );
        return Ok(LinkOutcome::Unresolved(unresolved));
    }

    match gateway.persist_links(owner) {
        Ok(true) => {
            debug!(
                "event={} module=service status=ok owner_id={} requested={} unresolved={}",
                event,
                owner.id(),
                requested,
                unresolved.len()
            );
            Ok(LinkOutcome::Persisted)
        }
        Ok(false) => {
            *owner.members_mut() = snapshot;
            debug!(
                "event={} module=service status=stale owner_id={}",
                event,
                owner.id()
            );
            Ok(LinkOutcome::Unresolved(unresolved))
        }
        Err(err) => {
            *owner.members_mut() = snapshot;
            Err(err.into())
        }
    }
}
