//! CLI struct definitions for the `staffing` command.
//!
//! All clap-derived types live here. Dispatch logic lives in `commands`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "staffing",
    version = env!("CARGO_PKG_VERSION"),
    about = "Register workers, their addresses and the initiatives they work on."
)]
pub(crate) struct Cli {
    /// SQLite database file. Overrides STAFFING_DB_PATH.
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,
    /// Print records as JSON.
    #[clap(long, global = true)]
    pub json: bool,
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Manage workers and their initiative links
    Worker(WorkerCli),
    /// Manage initiatives and their worker links
    Initiative(InitiativeCli),
    /// Manage worker addresses
    Location(LocationCli),
}

#[derive(clap::Args, Debug)]
pub(crate) struct WorkerCli {
    #[clap(subcommand)]
    pub command: WorkerCommand,
}

#[derive(Subcommand, Debug)]
pub(crate) enum WorkerCommand {
    /// Register a worker, optionally with a first address
    Add(WorkerAddArgs),
    /// Show one worker with addresses and initiatives
    Show { id: i64 },
    /// List every worker
    List,
    /// Change fields of a worker
    Update(WorkerUpdateArgs),
    /// Delete one worker with its addresses and links
    Delete { id: i64 },
    /// Delete every worker
    DeleteAll,
    /// Link initiatives, e.g. `assign 4 "1, 2, 9"`
    Assign { id: i64, ids: String },
    /// Unlink initiatives
    Unassign { id: i64, ids: String },
    /// List initiatives the worker is not linked to
    Available { id: i64 },
}

#[derive(clap::Args, Debug)]
pub(crate) struct WorkerAddArgs {
    #[clap(long)]
    pub name: String,
    #[clap(long)]
    pub phone: String,
    /// Date of birth as dd/mm/yyyy
    #[clap(long)]
    pub dob: String,
    #[clap(long)]
    pub salary: f64,
    #[clap(long)]
    pub email: String,
    #[clap(flatten)]
    pub address: OptionalAddressArgs,
}

#[derive(clap::Args, Debug)]
pub(crate) struct WorkerUpdateArgs {
    pub id: i64,
    #[clap(long)]
    pub name: Option<String>,
    #[clap(long)]
    pub phone: Option<String>,
    /// Date of birth as dd/mm/yyyy
    #[clap(long)]
    pub dob: Option<String>,
    #[clap(long)]
    pub salary: Option<f64>,
    #[clap(long)]
    pub email: Option<String>,
}

/// Address fields; either all or none must be given.
#[derive(clap::Args, Debug, Default)]
pub(crate) struct OptionalAddressArgs {
    #[clap(long)]
    pub door: Option<String>,
    #[clap(long)]
    pub street: Option<String>,
    #[clap(long)]
    pub district: Option<String>,
    #[clap(long)]
    pub state: Option<String>,
    #[clap(long)]
    pub country: Option<String>,
    #[clap(long)]
    pub postal_code: Option<u32>,
}

#[derive(clap::Args, Debug)]
pub(crate) struct InitiativeCli {
    #[clap(subcommand)]
    pub command: InitiativeCommand,
}

#[derive(Subcommand, Debug)]
pub(crate) enum InitiativeCommand {
    /// Register an initiative
    Add(InitiativeAddArgs),
    /// Show one initiative with its workers
    Show { id: i64 },
    /// List every initiative
    List,
    /// Change fields of an initiative
    Update(InitiativeUpdateArgs),
    /// Delete one initiative and its links
    Delete { id: i64 },
    /// Delete every initiative
    DeleteAll,
    /// Link workers, e.g. `assign 2 "3,5"`
    Assign { id: i64, ids: String },
    /// Unlink workers
    Unassign { id: i64, ids: String },
    /// List workers not linked to the initiative
    Available { id: i64 },
}

#[derive(clap::Args, Debug)]
pub(crate) struct InitiativeAddArgs {
    #[clap(long)]
    pub name: String,
    #[clap(long)]
    pub domain: String,
    /// Start date as dd/mm/yyyy
    #[clap(long)]
    pub start: String,
    #[clap(long)]
    pub manager: String,
}

#[derive(clap::Args, Debug)]
pub(crate) struct InitiativeUpdateArgs {
    pub id: i64,
    #[clap(long)]
    pub name: Option<String>,
    #[clap(long)]
    pub domain: Option<String>,
    #[clap(long)]
    pub start: Option<String>,
    #[clap(long)]
    pub manager: Option<String>,
}

#[derive(clap::Args, Debug)]
pub(crate) struct LocationCli {
    #[clap(subcommand)]
    pub command: LocationCommand,
}

#[derive(Subcommand, Debug)]
pub(crate) enum LocationCommand {
    /// Add an address to a worker
    Add(LocationAddArgs),
    /// Show one address
    Show { id: i64 },
    /// List every address
    List,
    /// Change address fields; the owning worker stays the same
    Update(LocationUpdateArgs),
    /// Delete one address
    Delete { id: i64 },
    /// Delete every address
    DeleteAll,
}

#[derive(clap::Args, Debug)]
pub(crate) struct LocationAddArgs {
    /// Owning worker id
    #[clap(long)]
    pub worker: i64,
    #[clap(long)]
    pub door: String,
    #[clap(long)]
    pub street: String,
    #[clap(long)]
    pub district: String,
    #[clap(long)]
    pub state: String,
    #[clap(long)]
    pub country: String,
    #[clap(long)]
    pub postal_code: u32,
}

#[derive(clap::Args, Debug)]
pub(crate) struct LocationUpdateArgs {
    pub id: i64,
    #[clap(flatten)]
    pub fields: OptionalAddressArgs,
}
