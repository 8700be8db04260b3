//! Command dispatch: input validation, uniqueness checks and output.
//!
//! Every format rule and phone/email uniqueness check runs here, before any
//! core call. Core "not found" results are reported as text, not errors.

use crate::cli::{
    Command, InitiativeAddArgs, InitiativeCommand, InitiativeUpdateArgs, LocationAddArgs,
    LocationCommand, LocationUpdateArgs, OptionalAddressArgs, WorkerAddArgs, WorkerCommand,
    WorkerUpdateArgs,
};
use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use log::info;
use serde::Serialize;
use staffing_core::validation::{
    format_date, is_valid_age, is_valid_door_number, is_valid_email, is_valid_id_list,
    is_valid_name, is_valid_phone, is_valid_postal_code, is_valid_salary, is_valid_start_date,
    parse_date,
};
use staffing_core::{
    Connection, InitiativeRecord, InitiativeService, LinkOutcome, LocationRecord,
    LocationService, SqliteInitiativeRepository, SqliteLocationRepository,
    SqliteWorkerRepository, WorkerId, WorkerRecord, WorkerService,
};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    Text,
    Json,
}

/// Services bound to one open connection.
pub(crate) struct Registry<'conn> {
    workers: WorkerService<SqliteWorkerRepository<'conn>>,
    initiatives: InitiativeService<SqliteInitiativeRepository<'conn>>,
    locations: LocationService<SqliteLocationRepository<'conn>>,
    today: NaiveDate,
    format: Format,
}

impl<'conn> Registry<'conn> {
    pub(crate) fn open(conn: &'conn Connection, today: NaiveDate, format: Format) -> Result<Self> {
        Ok(Self {
            workers: WorkerService::new(SqliteWorkerRepository::try_new(conn)?),
            initiatives: InitiativeService::new(SqliteInitiativeRepository::try_new(conn)?),
            locations: LocationService::new(SqliteLocationRepository::try_new(conn)?),
            today,
            format,
        })
    }

    pub(crate) fn run(&self, command: Command, out: &mut impl Write) -> Result<()> {
        match command {
            Command::Worker(cli) => self.run_worker(cli.command, out),
            Command::Initiative(cli) => self.run_initiative(cli.command, out),
            Command::Location(cli) => self.run_location(cli.command, out),
        }
    }

    fn run_worker(&self, command: WorkerCommand, out: &mut impl Write) -> Result<()> {
        match command {
            WorkerCommand::Add(args) => {
                let record = self.new_worker(args)?;
                let id = self.workers.create(&record)?;
                info!("event=cli_worker_add module=cli status=ok worker_id={id}");
                writeln!(out, "Worker {id} created")?;
            }
            WorkerCommand::Show { id } => match self.workers.fetch(id)? {
                Some(worker) => self.emit(out, &worker, render_worker_detail)?,
                None => writeln!(out, "Worker {id} not found")?,
            },
            WorkerCommand::List => {
                let workers = self.workers.fetch_all()?;
                self.emit_list(out, &workers, "No workers", render_worker)?;
            }
            WorkerCommand::Update(args) => self.update_worker(args, out)?,
            WorkerCommand::Delete { id } => match self.workers.delete(id)? {
                0 => writeln!(out, "Worker {id} not found")?,
                _ => writeln!(out, "Worker {id} deleted")?,
            },
            WorkerCommand::DeleteAll => {
                let count = self.workers.delete_all()?;
                writeln!(out, "{count} workers deleted")?;
            }
            WorkerCommand::Assign { id, ids } => {
                ensure_id_list(&ids)?;
                let Some(mut owner) = self.workers.fetch(id)? else {
                    writeln!(out, "Worker {id} not found")?;
                    return Ok(());
                };
                let candidates = self.initiatives.fetch_all()?;
                let outcome = self
                    .workers
                    .assign_initiatives(&mut owner, &ids, &candidates)?;
                report_outcome(out, "Worker", id, &outcome, "is not available")?;
            }
            WorkerCommand::Unassign { id, ids } => {
                ensure_id_list(&ids)?;
                let Some(mut owner) = self.workers.fetch(id)? else {
                    writeln!(out, "Worker {id} not found")?;
                    return Ok(());
                };
                let outcome = self.workers.unassign_initiatives(&mut owner, &ids)?;
                report_outcome(out, "Worker", id, &outcome, "is not assigned")?;
            }
            WorkerCommand::Available { id } => {
                let Some(owner) = self.workers.fetch(id)? else {
                    writeln!(out, "Worker {id} not found")?;
                    return Ok(());
                };
                let candidates = self.initiatives.fetch_all()?;
                match self.workers.available_initiatives(&owner, &candidates) {
                    Some(available) => self.emit_list(out, &available, "", render_initiative)?,
                    None => writeln!(out, "No initiatives available for worker {id}")?,
                }
            }
        }
        Ok(())
    }

    fn run_initiative(&self, command: InitiativeCommand, out: &mut impl Write) -> Result<()> {
        match command {
            InitiativeCommand::Add(args) => {
                let record = self.new_initiative(args)?;
                let id = self.initiatives.create(&record)?;
                info!("event=cli_initiative_add module=cli status=ok initiative_id={id}");
                writeln!(out, "Initiative {id} created")?;
            }
            InitiativeCommand::Show { id } => match self.initiatives.fetch(id)? {
                Some(initiative) => self.emit(out, &initiative, render_initiative_detail)?,
                None => writeln!(out, "Initiative {id} not found")?,
            },
            InitiativeCommand::List => {
                let initiatives = self.initiatives.fetch_all()?;
                self.emit_list(out, &initiatives, "No initiatives", render_initiative)?;
            }
            InitiativeCommand::Update(args) => self.update_initiative(args, out)?,
            InitiativeCommand::Delete { id } => match self.initiatives.delete(id)? {
                0 => writeln!(out, "Initiative {id} not found")?,
                _ => writeln!(out, "Initiative {id} deleted")?,
            },
            InitiativeCommand::DeleteAll => {
                let count = self.initiatives.delete_all()?;
                writeln!(out, "{count} initiatives deleted")?;
            }
            InitiativeCommand::Assign { id, ids } => {
                ensure_id_list(&ids)?;
                let Some(mut owner) = self.initiatives.fetch(id)? else {
                    writeln!(out, "Initiative {id} not found")?;
                    return Ok(());
                };
                let candidates = self.workers.fetch_all()?;
                let outcome = self
                    .initiatives
                    .assign_workers(&mut owner, &ids, &candidates)?;
                report_outcome(out, "Initiative", id, &outcome, "is not available")?;
            }
            InitiativeCommand::Unassign { id, ids } => {
                ensure_id_list(&ids)?;
                let Some(mut owner) = self.initiatives.fetch(id)? else {
                    writeln!(out, "Initiative {id} not found")?;
                    return Ok(());
                };
                let outcome = self.initiatives.unassign_workers(&mut owner, &ids)?;
                report_outcome(out, "Initiative", id, &outcome, "is not assigned")?;
            }
            InitiativeCommand::Available { id } => {
                let Some(owner) = self.initiatives.fetch(id)? else {
                    writeln!(out, "Initiative {id} not found")?;
                    return Ok(());
                };
                let candidates = self.workers.fetch_all()?;
                match self.initiatives.available_workers(&owner, &candidates) {
                    Some(available) => self.emit_list(out, &available, "", render_worker)?,
                    None => writeln!(out, "No workers available for initiative {id}")?,
                }
            }
        }
        Ok(())
    }

    fn run_location(&self, command: LocationCommand, out: &mut impl Write) -> Result<()> {
        match command {
            LocationCommand::Add(args) => {
                let record = new_location(args)?;
                if self.workers.fetch(record.worker_id)?.is_none() {
                    writeln!(out, "Worker {} not found", record.worker_id)?;
                    return Ok(());
                }
                let id = self.locations.create(&record)?;
                writeln!(out, "Location {id} created")?;
            }
            LocationCommand::Show { id } => match self.locations.fetch(id)? {
                Some(location) => self.emit(out, &location, render_location)?,
                None => writeln!(out, "Location {id} not found")?,
            },
            LocationCommand::List => {
                let locations = self.locations.fetch_all()?;
                self.emit_list(out, &locations, "No locations", render_location)?;
            }
            LocationCommand::Update(args) => self.update_location(args, out)?,
            LocationCommand::Delete { id } => match self.locations.delete(id)? {
                0 => writeln!(out, "Location {id} not found")?,
                _ => writeln!(out, "Location {id} deleted")?,
            },
            LocationCommand::DeleteAll => {
                let count = self.locations.delete_all()?;
                writeln!(out, "{count} locations deleted")?;
            }
        }
        Ok(())
    }

    fn new_worker(&self, args: WorkerAddArgs) -> Result<WorkerRecord> {
        let date_of_birth = self.birth_date(&args.dob)?;
        ensure_name("name", &args.name)?;
        ensure_phone(&args.phone)?;
        ensure_email(&args.email)?;
        ensure_salary(args.salary)?;
        self.ensure_unique_contact(&args.phone, &args.email, None)?;

        let mut record = WorkerRecord::new(
            args.name,
            args.phone,
            date_of_birth,
            args.salary,
            args.email,
        );
        if let Some(location) = complete_address(args.address)? {
            record.locations.push(location);
        }
        Ok(record)
    }

    fn update_worker(&self, args: WorkerUpdateArgs, out: &mut impl Write) -> Result<()> {
        let Some(mut record) = self.workers.fetch(args.id)? else {
            writeln!(out, "Worker {} not found", args.id)?;
            return Ok(());
        };
        if let Some(name) = args.name {
            ensure_name("name", &name)?;
            record.name = name;
        }
        if let Some(phone) = args.phone {
            ensure_phone(&phone)?;
            record.phone_number = phone;
        }
        if let Some(email) = args.email {
            ensure_email(&email)?;
            record.email = email;
        }
        if let Some(dob) = args.dob {
            record.date_of_birth = self.birth_date(&dob)?;
        }
        if let Some(salary) = args.salary {
            ensure_salary(salary)?;
            record.salary = salary;
        }
        self.ensure_unique_contact(&record.phone_number, &record.email, Some(record.id))?;

        match self.workers.update(&record)? {
            Some(_) => writeln!(out, "Worker {} updated", args.id)?,
            None => writeln!(
                out,
                "Worker {} changed since it was read; nothing was saved",
                args.id
            )?,
        }
        Ok(())
    }

    fn new_initiative(&self, args: InitiativeAddArgs) -> Result<InitiativeRecord> {
        ensure_name("name", &args.name)?;
        ensure_name("domain", &args.domain)?;
        ensure_name("manager", &args.manager)?;
        let start_date = self.start_date(&args.start)?;
        Ok(InitiativeRecord::new(args.name, args.domain, start_date, args.manager))
    }

    fn update_initiative(&self, args: InitiativeUpdateArgs, out: &mut impl Write) -> Result<()> {
        let Some(mut record) = self.initiatives.fetch(args.id)? else {
            writeln!(out, "Initiative {} not found", args.id)?;
            return Ok(());
        };
        if let Some(name) = args.name {
            ensure_name("name", &name)?;
            record.name = name;
        }
        if let Some(domain) = args.domain {
            ensure_name("domain", &domain)?;
            record.domain = domain;
        }
        if let Some(manager) = args.manager {
            ensure_name("manager", &manager)?;
            record.manager_name = manager;
        }
        if let Some(start) = args.start {
            record.start_date = self.start_date(&start)?;
        }

        match self.initiatives.update(&record)? {
            Some(_) => writeln!(out, "Initiative {} updated", args.id)?,
            None => writeln!(
                out,
                "Initiative {} changed since it was read; nothing was saved",
                args.id
            )?,
        }
        Ok(())
    }

    fn update_location(&self, args: LocationUpdateArgs, out: &mut impl Write) -> Result<()> {
        let Some(mut record) = self.locations.fetch(args.id)? else {
            writeln!(out, "Location {} not found", args.id)?;
            return Ok(());
        };
        let fields = args.fields;
        if let Some(door) = fields.door {
            ensure_door_number(&door)?;
            record.door_number = door;
        }
        if let Some(street) = fields.street {
            ensure_name("street", &street)?;
            record.street = street;
        }
        if let Some(district) = fields.district {
            ensure_name("district", &district)?;
            record.district = district;
        }
        if let Some(state) = fields.state {
            ensure_name("state", &state)?;
            record.state = state;
        }
        if let Some(country) = fields.country {
            ensure_name("country", &country)?;
            record.country = country;
        }
        if let Some(postal_code) = fields.postal_code {
            ensure_postal_code(postal_code)?;
            record.postal_code = postal_code;
        }

        match self.locations.update(&record)? {
            Some(_) => writeln!(out, "Location {} updated", args.id)?,
            None => writeln!(out, "Location {} not found", args.id)?,
        }
        Ok(())
    }

    fn ensure_unique_contact(
        &self,
        phone: &str,
        email: &str,
        except: Option<WorkerId>,
    ) -> Result<()> {
        if self.workers.is_duplicate_phone(phone, except)? {
            bail!("phone number {phone} is already registered");
        }
        if self.workers.is_duplicate_email(email, except)? {
            bail!("email {email} is already registered");
        }
        Ok(())
    }

    fn birth_date(&self, value: &str) -> Result<NaiveDate> {
        let date = parse_date(value)
            .with_context(|| format!("invalid date of birth `{value}`; expected dd/mm/yyyy"))?;
        if !is_valid_age(date, self.today) {
            bail!("worker must be at least 18 and younger than 60");
        }
        Ok(date)
    }

    fn start_date(&self, value: &str) -> Result<NaiveDate> {
        let date = parse_date(value)
            .with_context(|| format!("invalid start date `{value}`; expected dd/mm/yyyy"))?;
        if !is_valid_start_date(date, self.today) {
            bail!("start date must not be in the future or 50 or more years ago");
        }
        Ok(date)
    }

    fn emit<T: Serialize>(
        &self,
        out: &mut impl Write,
        value: &T,
        render: fn(&T) -> String,
    ) -> Result<()> {
        match self.format {
            Format::Json => writeln!(out, "{}", serde_json::to_string_pretty(value)?)?,
            Format::Text => writeln!(out, "{}", render(value))?,
        }
        Ok(())
    }

    fn emit_list<T: Serialize>(
        &self,
        out: &mut impl Write,
        values: &[T],
        empty: &str,
        render: fn(&T) -> String,
    ) -> Result<()> {
        match self.format {
            Format::Json => writeln!(out, "{}", serde_json::to_string_pretty(values)?)?,
            Format::Text if values.is_empty() => writeln!(out, "{empty}")?,
            Format::Text => {
                for value in values {
                    writeln!(out, "{}", render(value))?;
                }
            }
        }
        Ok(())
    }
}

fn report_outcome(
    out: &mut impl Write,
    kind: &str,
    id: i64,
    outcome: &LinkOutcome,
    unresolved_suffix: &str,
) -> Result<()> {
    match outcome {
        LinkOutcome::Persisted => writeln!(out, "{kind} {id} updated")?,
        LinkOutcome::Unresolved(ids) if ids.is_empty() => {
            writeln!(out, "{kind} {id} changed since it was read; nothing was saved")?
        }
        LinkOutcome::Unresolved(ids) => {
            for unresolved in ids {
                writeln!(out, "{unresolved} {unresolved_suffix}")?;
            }
        }
    }
    Ok(())
}

fn new_location(args: LocationAddArgs) -> Result<LocationRecord> {
    let address = OptionalAddressArgs {
        door: Some(args.door),
        street: Some(args.street),
        district: Some(args.district),
        state: Some(args.state),
        country: Some(args.country),
        postal_code: Some(args.postal_code),
    };
    let mut record = complete_address(address)?.context("address fields are required")?;
    record.worker_id = args.worker;
    Ok(record)
}

/// `None` when no address field is given; an error when only some are.
fn complete_address(address: OptionalAddressArgs) -> Result<Option<LocationRecord>> {
    let OptionalAddressArgs {
        door,
        street,
        district,
        state,
        country,
        postal_code,
    } = address;
    let (door, street, district, state, country, postal_code) =
        match (door, street, district, state, country, postal_code) {
            (None, None, None, None, None, None) => return Ok(None),
            (Some(door), Some(street), Some(district), Some(state), Some(country), Some(code)) => {
                (door, street, district, state, country, code)
            }
            _ => bail!("address needs --door, --street, --district, --state, --country and --postal-code"),
        };

    ensure_door_number(&door)?;
    ensure_name("street", &street)?;
    ensure_name("district", &district)?;
    ensure_name("state", &state)?;
    ensure_name("country", &country)?;
    ensure_postal_code(postal_code)?;

    Ok(Some(LocationRecord {
        id: staffing_core::UNSAVED_ID,
        worker_id: staffing_core::UNSAVED_ID,
        door_number: door,
        street,
        district,
        state,
        country,
        postal_code,
    }))
}

fn ensure_id_list(ids: &str) -> Result<()> {
    if !is_valid_id_list(ids) {
        bail!("invalid id list `{ids}`; expected comma-separated positive ids");
    }
    Ok(())
}

fn ensure_name(field: &str, value: &str) -> Result<()> {
    if !is_valid_name(value) {
        bail!("invalid {field} `{value}`; use letters and up to three words");
    }
    Ok(())
}

fn ensure_phone(value: &str) -> Result<()> {
    if !is_valid_phone(value) {
        bail!("invalid phone number `{value}`");
    }
    Ok(())
}

fn ensure_email(value: &str) -> Result<()> {
    if !is_valid_email(value) {
        bail!("invalid email `{value}`");
    }
    Ok(())
}

fn ensure_salary(value: f64) -> Result<()> {
    if !is_valid_salary(value) {
        bail!("salary must be above 0 and below 10000000");
    }
    Ok(())
}

fn ensure_door_number(value: &str) -> Result<()> {
    if !is_valid_door_number(value) {
        bail!("invalid door number `{value}`");
    }
    Ok(())
}

fn ensure_postal_code(value: u32) -> Result<()> {
    if !is_valid_postal_code(value) {
        bail!("postal code must be between 110000 and 999999");
    }
    Ok(())
}

fn render_worker(worker: &WorkerRecord) -> String {
    format!(
        "#{} {} | phone {} | email {} | born {} | salary {:.2}",
        worker.id,
        worker.name,
        worker.phone_number,
        worker.email,
        format_date(worker.date_of_birth),
        worker.salary
    )
}

fn render_worker_detail(worker: &WorkerRecord) -> String {
    let mut lines = vec![render_worker(worker)];
    lines.extend(
        worker
            .locations
            .iter()
            .map(|location| format!("  address {}", render_location(location))),
    );
    lines.extend(
        worker
            .initiatives
            .iter()
            .map(|initiative| format!("  initiative {}", render_initiative(initiative))),
    );
    lines.join("\n")
}

fn render_initiative(initiative: &InitiativeRecord) -> String {
    format!(
        "#{} {} | domain {} | started {} | manager {}",
        initiative.id,
        initiative.name,
        initiative.domain,
        format_date(initiative.start_date),
        initiative.manager_name
    )
}

fn render_initiative_detail(initiative: &InitiativeRecord) -> String {
    let mut lines = vec![render_initiative(initiative)];
    lines.extend(
        initiative
            .workers
            .iter()
            .map(|worker| format!("  worker {}", render_worker(worker))),
    );
    lines.join("\n")
}

fn render_location(location: &LocationRecord) -> String {
    format!(
        "#{} worker {} | {}, {}, {}, {}, {} {}",
        location.id,
        location.worker_id,
        location.door_number,
        location.street,
        location.district,
        location.state,
        location.country,
        location.postal_code
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;
    use staffing_core::open_db_in_memory;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()
    }

    fn run(conn: &Connection, args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("staffing").chain(args.iter().copied()))?;
        let format = if cli.json { Format::Json } else { Format::Text };
        let registry = Registry::open(conn, today(), format)?;
        let mut out = Vec::new();
        registry.run(cli.command, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    fn add_worker(conn: &Connection, phone: &str, email: &str) -> String {
        run(
            conn,
            &[
                "worker", "add", "--name", "Asha Rao", "--phone", phone, "--dob", "12/04/1990",
                "--salary", "42000", "--email", email,
            ],
        )
        .unwrap()
    }

    fn add_initiative(conn: &Connection, name: &str) {
        run(
            conn,
            &[
                "initiative", "add", "--name", name, "--domain", "Retail", "--start",
                "04/01/2021", "--manager", "Meera",
            ],
        )
        .unwrap();
    }

    #[test]
    fn worker_add_reports_new_id() {
        let conn = open_db_in_memory().unwrap();
        assert_eq!(add_worker(&conn, "9876543210", "asha@example.com"), "Worker 1 created\n");
    }

    #[test]
    fn duplicate_phone_is_rejected_before_insert() {
        let conn = open_db_in_memory().unwrap();
        add_worker(&conn, "9876543210", "asha@example.com");

        let err = run(
            &conn,
            &[
                "worker", "add", "--name", "Ravi Kumar", "--phone", "9876543210", "--dob",
                "03/02/1988", "--salary", "39000", "--email", "ravi@example.com",
            ],
        )
        .unwrap_err();
        assert!(err.to_string().contains("already registered"));
        assert_eq!(run(&conn, &["worker", "list", "--json"]).unwrap().matches("\"id\"").count(), 1);
    }

    #[test]
    fn invalid_fields_are_rejected() {
        let conn = open_db_in_memory().unwrap();
        let err = run(
            &conn,
            &[
                "worker", "add", "--name", "Asha Rao", "--phone", "12345", "--dob", "12/04/1990",
                "--salary", "42000", "--email", "asha@example.com",
            ],
        )
        .unwrap_err();
        assert!(err.to_string().contains("phone"));

        let err = run(
            &conn,
            &[
                "worker", "add", "--name", "Young One", "--phone", "9876543210", "--dob",
                "01/01/2015", "--salary", "42000", "--email", "young@example.com",
            ],
        )
        .unwrap_err();
        assert!(err.to_string().contains("18"));
    }

    #[test]
    fn partial_address_is_rejected() {
        let conn = open_db_in_memory().unwrap();
        let err = run(
            &conn,
            &[
                "worker", "add", "--name", "Asha Rao", "--phone", "9876543210", "--dob",
                "12/04/1990", "--salary", "42000", "--email", "asha@example.com", "--door", "12A",
            ],
        )
        .unwrap_err();
        assert!(err.to_string().contains("--postal-code"));
    }

    #[test]
    fn assign_prints_nothing_unresolved_on_success() {
        let conn = open_db_in_memory().unwrap();
        add_worker(&conn, "9876543210", "asha@example.com");
        add_initiative(&conn, "Atlas");
        add_initiative(&conn, "Beacon");

        let output = run(&conn, &["worker", "assign", "1", "1, 2, 9"]).unwrap();
        assert_eq!(output, "Worker 1 updated\n");

        let output = run(&conn, &["worker", "assign", "1", "7,8"]).unwrap();
        assert_eq!(output, "7 is not available\n8 is not available\n");
    }

    #[test]
    fn unassign_reports_missing_links() {
        let conn = open_db_in_memory().unwrap();
        add_worker(&conn, "9876543210", "asha@example.com");
        add_initiative(&conn, "Atlas");

        let output = run(&conn, &["worker", "unassign", "1", "1"]).unwrap();
        assert_eq!(output, "1 is not assigned\n");
    }

    #[test]
    fn available_lists_unlinked_initiatives_until_none_remain() {
        let conn = open_db_in_memory().unwrap();
        add_worker(&conn, "9876543210", "asha@example.com");
        add_initiative(&conn, "Atlas");

        let output = run(&conn, &["worker", "available", "1"]).unwrap();
        assert!(output.starts_with("#1 Atlas"));

        run(&conn, &["initiative", "assign", "1", "1"]).unwrap();
        let output = run(&conn, &["worker", "available", "1"]).unwrap();
        assert_eq!(output, "No initiatives available for worker 1\n");
    }

    #[test]
    fn malformed_id_list_is_rejected_by_validation() {
        let conn = open_db_in_memory().unwrap();
        add_worker(&conn, "9876543210", "asha@example.com");

        let err = run(&conn, &["worker", "assign", "1", "0,a"]).unwrap_err();
        assert!(err.to_string().contains("invalid id list"));
    }

    #[test]
    fn location_lifecycle() {
        let conn = open_db_in_memory().unwrap();
        add_worker(&conn, "9876543210", "asha@example.com");

        let output = run(
            &conn,
            &[
                "location", "add", "--worker", "1", "--door", "12A", "--street", "Lake Road",
                "--district", "Central", "--state", "Karnataka", "--country", "India",
                "--postal-code", "560001",
            ],
        )
        .unwrap();
        assert_eq!(output, "Location 1 created\n");

        let output = run(&conn, &["location", "update", "1", "--street", "Hill Street"]).unwrap();
        assert_eq!(output, "Location 1 updated\n");
        let output = run(&conn, &["location", "show", "1"]).unwrap();
        assert!(output.contains("Hill Street"));

        assert_eq!(run(&conn, &["location", "delete-all"]).unwrap(), "1 locations deleted\n");
        assert_eq!(run(&conn, &["location", "delete-all"]).unwrap(), "0 locations deleted\n");
    }

    #[test]
    fn show_missing_worker_is_not_an_error() {
        let conn = open_db_in_memory().unwrap();
        assert_eq!(run(&conn, &["worker", "show", "5"]).unwrap(), "Worker 5 not found\n");
    }
}
