use chrono::NaiveDate;
use staffing_core::db::open_db_in_memory;
use staffing_core::{
    ErrorCode, Location, LocationRepository, SqliteLocationRepository, SqliteWorkerRepository,
    Worker, WorkerId, WorkerRepository, UNSAVED_ID,
};

fn seed_worker(repo: &SqliteWorkerRepository<'_>, phone: &str) -> WorkerId {
    let dob = NaiveDate::from_ymd_opt(1990, 4, 12).unwrap();
    repo.create_worker(&Worker::new("Asha Rao", phone, dob, 42000.0, "asha@example.com"))
        .unwrap()
}

fn location(worker_id: WorkerId) -> Location {
    Location::new(worker_id, "12A", "Lake Road", "Central", "Karnataka", "India", 560001)
}

#[test]
fn create_fetch_and_list() {
    let conn = open_db_in_memory().unwrap();
    let workers = SqliteWorkerRepository::try_new(&conn).unwrap();
    let repo = SqliteLocationRepository::try_new(&conn).unwrap();
    let owner = seed_worker(&workers, "9876543210");

    let id = repo.create_location(&location(owner)).unwrap();
    let loaded = repo.fetch_location(id).unwrap().unwrap();
    assert_eq!(loaded.worker_id, owner);
    assert_eq!(loaded.postal_code, 560001);

    assert_eq!(repo.fetch_all_locations().unwrap(), vec![loaded]);
    assert!(repo.fetch_location(UNSAVED_ID).unwrap().is_none());
}

#[test]
fn create_for_missing_worker_fails_with_create_code() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteLocationRepository::try_new(&conn).unwrap();

    let failure = repo.create_location(&location(31)).unwrap_err();
    assert_eq!(failure.code(), ErrorCode::LocationCreate);
    assert!(repo.fetch_all_locations().unwrap().is_empty());
}

#[test]
fn update_changes_address_but_not_owner() {
    let conn = open_db_in_memory().unwrap();
    let workers = SqliteWorkerRepository::try_new(&conn).unwrap();
    let repo = SqliteLocationRepository::try_new(&conn).unwrap();
    let owner = seed_worker(&workers, "9876543210");
    let other = seed_worker(&workers, "9123456780");
    let id = repo.create_location(&location(owner)).unwrap();

    let mut loaded = repo.fetch_location(id).unwrap().unwrap();
    loaded.street = "Hill Street".to_string();
    let updated = repo.update_location(&loaded).unwrap().unwrap();
    assert_eq!(updated.street, "Hill Street");

    let mut moved = loaded.clone();
    moved.worker_id = other;
    assert!(repo.update_location(&moved).unwrap().is_none());
    assert_eq!(repo.fetch_location(id).unwrap().unwrap().worker_id, owner);
}

#[test]
fn delete_and_delete_all_report_counts() {
    let conn = open_db_in_memory().unwrap();
    let workers = SqliteWorkerRepository::try_new(&conn).unwrap();
    let repo = SqliteLocationRepository::try_new(&conn).unwrap();
    let owner = seed_worker(&workers, "9876543210");
    let first = repo.create_location(&location(owner)).unwrap();
    repo.create_location(&location(owner)).unwrap();
    repo.create_location(&location(owner)).unwrap();

    assert_eq!(repo.delete_location(first).unwrap(), 1);
    assert_eq!(repo.delete_location(first).unwrap(), 0);
    assert_eq!(repo.delete_all_locations().unwrap(), 2);
    assert_eq!(repo.delete_all_locations().unwrap(), 0);
}
