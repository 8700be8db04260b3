//! Conversion between persisted entities and transfer records.
//!
//! # Responsibility
//! - Provide pure, side-effect-free entity <-> record conversions per kind,
//!   plus list-lifted variants.
//!
//! # Invariants
//! - Each conversion copies the entity's own fields and maps its nested
//!   link members one level deep, by their own fields only. A nested
//!   member's own links (e.g. the workers of an initiative nested in a
//!   worker) are dropped, never followed.
//! - Locations nested in a worker are always mapped in full; they have no
//!   links of their own.

use crate::model::initiative::Initiative;
use crate::model::location::Location;
use crate::model::worker::Worker;
use crate::record::{InitiativeRecord, LocationRecord, WorkerRecord};

pub fn worker_to_record(worker: &Worker) -> WorkerRecord {
    WorkerRecord {
        initiatives: worker
            .initiatives
            .iter()
            .map(initiative_fields_to_record)
            .collect(),
        locations: locations_to_records(&worker.locations),
        ..worker_fields_to_record(worker)
    }
}

pub fn record_to_worker(record: &WorkerRecord) -> Worker {
    Worker {
        initiatives: record
            .initiatives
            .iter()
            .map(initiative_fields_from_record)
            .collect(),
        locations: records_to_locations(&record.locations),
        ..worker_fields_from_record(record)
    }
}

pub fn workers_to_records(workers: &[Worker]) -> Vec<WorkerRecord> {
    workers.iter().map(worker_to_record).collect()
}

pub fn records_to_workers(records: &[WorkerRecord]) -> Vec<Worker> {
    records.iter().map(record_to_worker).collect()
}

pub fn initiative_to_record(initiative: &Initiative) -> InitiativeRecord {
    InitiativeRecord {
        workers: initiative
            .workers
            .iter()
            .map(worker_fields_to_record)
            .collect(),
        ..initiative_fields_to_record(initiative)
    }
}

pub fn record_to_initiative(record: &InitiativeRecord) -> Initiative {
    Initiative {
        workers: record.workers.iter().map(worker_fields_from_record).collect(),
        ..initiative_fields_from_record(record)
    }
}

pub fn initiatives_to_records(initiatives: &[Initiative]) -> Vec<InitiativeRecord> {
    initiatives.iter().map(initiative_to_record).collect()
}

pub fn records_to_initiatives(records: &[InitiativeRecord]) -> Vec<Initiative> {
    records.iter().map(record_to_initiative).collect()
}

pub fn location_to_record(location: &Location) -> LocationRecord {
    LocationRecord {
        id: location.id,
        worker_id: location.worker_id,
        door_number: location.door_number.clone(),
        street: location.street.clone(),
        district: location.district.clone(),
        state: location.state.clone(),
        country: location.country.clone(),
        postal_code: location.postal_code,
    }
}

pub fn record_to_location(record: &LocationRecord) -> Location {
    Location {
        id: record.id,
        worker_id: record.worker_id,
        door_number: record.door_number.clone(),
        street: record.street.clone(),
        district: record.district.clone(),
        state: record.state.clone(),
        country: record.country.clone(),
        postal_code: record.postal_code,
    }
}

pub fn locations_to_records(locations: &[Location]) -> Vec<LocationRecord> {
    locations.iter().map(location_to_record).collect()
}

pub fn records_to_locations(records: &[LocationRecord]) -> Vec<Location> {
    records.iter().map(record_to_location).collect()
}

fn worker_fields_to_record(worker: &Worker) -> WorkerRecord {
    WorkerRecord {
        id: worker.id,
        name: worker.name.clone(),
        phone_number: worker.phone_number.clone(),
        date_of_birth: worker.date_of_birth,
        salary: worker.salary,
        email: worker.email.clone(),
        revision: worker.revision,
        locations: Vec::new(),
        initiatives: Vec::new(),
    }
}

fn worker_fields_from_record(record: &WorkerRecord) -> Worker {
    Worker {
        id: record.id,
        name: record.name.clone(),
        phone_number: record.phone_number.clone(),
        date_of_birth: record.date_of_birth,
        salary: record.salary,
        email: record.email.clone(),
        revision: record.revision,
        locations: Vec::new(),
        initiatives: Vec::new(),
    }
}

fn initiative_fields_to_record(initiative: &Initiative) -> InitiativeRecord {
    InitiativeRecord {
        id: initiative.id,
        name: initiative.name.clone(),
        domain: initiative.domain.clone(),
        start_date: initiative.start_date,
        manager_name: initiative.manager_name.clone(),
        revision: initiative.revision,
        workers: Vec::new(),
    }
}

fn initiative_fields_from_record(record: &InitiativeRecord) -> Initiative {
    Initiative {
        id: record.id,
        name: record.name.clone(),
        domain: record.domain.clone(),
        start_date: record.start_date,
        manager_name: record.manager_name.clone(),
        revision: record.revision,
        workers: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    fn sample_worker() -> Worker {
        let mut worker = Worker::new(
            "Asha Rao",
            "9876543210",
            day(1990, 4, 12),
            42000.0,
            "asha@example.com",
        );
        worker.id = 7;
        worker.revision = 3;
        let mut location = Location::new(
            7,
            "12A",
            "Lake Road",
            "Central",
            "Karnataka",
            "India",
            560001,
        );
        location.id = 11;
        worker.locations.push(location);
        worker
    }

    fn sample_initiative(id: i64) -> Initiative {
        let mut initiative = Initiative::new("Atlas", "Logistics", day(2021, 1, 4), "Meera");
        initiative.id = id;
        initiative
    }

    #[test]
    fn worker_round_trip_keeps_own_fields_and_locations() {
        let mut worker = sample_worker();
        worker.initiatives.push(sample_initiative(2));

        let record = worker_to_record(&worker);
        assert_eq!(record.id, 7);
        assert_eq!(record.revision, 3);
        assert_eq!(record.locations.len(), 1);
        assert_eq!(record.locations[0].postal_code, 560001);
        assert_eq!(record_to_worker(&record), worker);
    }

    #[test]
    fn nested_links_are_copied_one_level_only() {
        let mut initiative = sample_initiative(2);
        initiative.workers.push(sample_worker());
        let mut worker = sample_worker();
        worker.initiatives.push(initiative);

        let record = worker_to_record(&worker);
        assert_eq!(record.initiatives.len(), 1);
        assert_eq!(record.initiatives[0].id, 2);
        // Known shallow boundary: the nested initiative's own workers are not followed.
        assert!(record.initiatives[0].workers.is_empty());
    }

    #[test]
    fn nested_workers_drop_their_locations() {
        let mut initiative = sample_initiative(5);
        initiative.workers.push(sample_worker());

        let record = initiative_to_record(&initiative);
        assert_eq!(record.workers.len(), 1);
        assert_eq!(record.workers[0].id, 7);
        assert!(record.workers[0].locations.is_empty());
    }

    #[test]
    fn list_variants_preserve_order() {
        let initiatives = vec![sample_initiative(3), sample_initiative(1)];
        let records = initiatives_to_records(&initiatives);
        let ids: Vec<_> = records.iter().map(|record| record.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(records_to_initiatives(&records), initiatives);
    }
}
