use chrono::NaiveDate;
use staffing_core::db::open_db_in_memory;
use staffing_core::{
    ErrorCode, Initiative, InitiativeRepository, SqliteInitiativeRepository,
    SqliteWorkerRepository, Worker, WorkerRepository, UNSAVED_ID,
};

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn initiative(name: &str) -> Initiative {
    Initiative::new(name, "Logistics", day(2021, 1, 4), "Meera")
}

fn asha() -> Worker {
    Worker::new("Asha Rao", "9876543210", day(1990, 4, 12), 42000.0, "asha@example.com")
}

#[test]
fn create_and_fetch_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteInitiativeRepository::try_new(&conn).unwrap();

    let id = repo.create_initiative(&initiative("Atlas")).unwrap();
    let loaded = repo.fetch_initiative(id).unwrap().unwrap();

    assert_eq!(loaded.id, id);
    assert_eq!(loaded.name, "Atlas");
    assert_eq!(loaded.start_date, day(2021, 1, 4));
    assert_eq!(loaded.manager_name, "Meera");
    assert!(loaded.workers.is_empty());
    assert!(repo.fetch_initiative(UNSAVED_ID).unwrap().is_none());
}

#[test]
fn update_replaces_worker_links_and_bumps_revision() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteInitiativeRepository::try_new(&conn).unwrap();
    let workers = SqliteWorkerRepository::try_new(&conn).unwrap();
    let first = workers.create_worker(&asha()).unwrap();
    let second = workers
        .create_worker(&Worker::new(
            "Ravi Kumar",
            "9123456780",
            day(1988, 2, 3),
            39000.0,
            "ravi@example.com",
        ))
        .unwrap();
    let id = repo.create_initiative(&initiative("Atlas")).unwrap();

    let mut loaded = repo.fetch_initiative(id).unwrap().unwrap();
    loaded.workers.push(workers.fetch_worker(first).unwrap().unwrap());
    loaded.workers.push(workers.fetch_worker(second).unwrap().unwrap());
    let updated = repo.update_initiative(&loaded).unwrap().unwrap();
    assert_eq!(updated.revision, 1);

    let mut reloaded = repo.fetch_initiative(id).unwrap().unwrap();
    let ids: Vec<_> = reloaded.workers.iter().map(|it| it.id).collect();
    assert_eq!(ids, vec![first, second]);
    assert!(reloaded.workers.iter().all(|it| it.locations.is_empty()));

    reloaded.workers.retain(|it| it.id == second);
    repo.update_initiative(&reloaded).unwrap().unwrap();
    let linked = workers.fetch_worker(first).unwrap().unwrap();
    assert!(linked.initiatives.is_empty());
}

#[test]
fn stale_update_is_absent() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteInitiativeRepository::try_new(&conn).unwrap();
    let id = repo.create_initiative(&initiative("Atlas")).unwrap();

    let loaded = repo.fetch_initiative(id).unwrap().unwrap();
    repo.update_initiative(&loaded).unwrap().unwrap();
    assert!(repo.update_initiative(&loaded).unwrap().is_none());
}

#[test]
fn link_to_missing_worker_fails_with_update_code() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteInitiativeRepository::try_new(&conn).unwrap();
    let id = repo.create_initiative(&initiative("Atlas")).unwrap();

    let mut loaded = repo.fetch_initiative(id).unwrap().unwrap();
    let mut ghost = Worker::new("Ghost", "9000000000", day(1990, 1, 1), 1.0, "ghost@example.com");
    ghost.id = 500;
    loaded.workers.push(ghost);

    let failure = repo.update_initiative(&loaded).unwrap_err();
    assert_eq!(failure.code(), ErrorCode::InitiativeUpdate);
    assert_eq!(repo.fetch_initiative(id).unwrap().unwrap().revision, 0);
}

#[test]
fn deleting_an_initiative_drops_its_links() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteInitiativeRepository::try_new(&conn).unwrap();
    let workers = SqliteWorkerRepository::try_new(&conn).unwrap();
    let initiative_id = repo.create_initiative(&initiative("Atlas")).unwrap();
    let mut draft = asha();
    draft.initiatives.push(repo.fetch_initiative(initiative_id).unwrap().unwrap());
    let worker_id = workers.create_worker(&draft).unwrap();

    assert_eq!(repo.delete_initiative(initiative_id).unwrap(), 1);
    assert!(workers.fetch_worker(worker_id).unwrap().unwrap().initiatives.is_empty());
}

#[test]
fn delete_all_twice_returns_count_then_zero() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteInitiativeRepository::try_new(&conn).unwrap();
    repo.create_initiative(&initiative("Atlas")).unwrap();
    repo.create_initiative(&initiative("Beacon")).unwrap();

    assert_eq!(repo.fetch_all_initiatives().unwrap().len(), 2);
    assert_eq!(repo.delete_all_initiatives().unwrap(), 2);
    assert_eq!(repo.delete_all_initiatives().unwrap(), 0);
    assert!(repo.fetch_all_initiatives().unwrap().is_empty());
}
