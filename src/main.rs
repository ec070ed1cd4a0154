mod commands;
mod notify;
mod prompt;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use appointments_core::{AppointmentBook, FileStore, FormInput, Settings};
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "appt")]
#[command(about = "Create, edit, delete and filter appointments stored on your machine")]
struct Cli {
    /// Store appointments in this directory instead of the configured data_dir
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an appointment (prompts for anything required that isn't given)
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Edit an appointment (prompts for every field if no flags are given)
    Edit {
        /// Appointment id
        id: String,

        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Delete an appointment
    Delete {
        /// Appointment id
        id: String,

        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// List appointments
    List {
        /// "all" or a status (pending, completed, missed, ...)
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Show a single appointment
    Show {
        /// Appointment id
        id: String,
    },
}

#[derive(Args)]
struct FieldArgs {
    /// Title
    #[arg(short, long)]
    title: Option<String>,

    /// Date (YYYY-MM-DD)
    #[arg(short, long)]
    date: Option<String>,

    /// Start time (HH:MM)
    #[arg(short, long)]
    start: Option<String>,

    /// End time (HH:MM)
    #[arg(short, long)]
    end: Option<String>,

    /// Location
    #[arg(short, long)]
    location: Option<String>,

    /// Department
    #[arg(long)]
    department: Option<String>,

    /// Status (pending, completed, missed, ...)
    #[arg(long)]
    status: Option<String>,
}

impl From<FieldArgs> for FormInput {
    fn from(args: FieldArgs) -> Self {
        FormInput {
            title: args.title,
            date: args.date,
            start_time: args.start,
            end_time: args.end,
            location: args.location,
            department: args.department,
            status: args.status,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let settings = Settings::load();
    let data_dir = cli.data_dir.unwrap_or_else(|| settings.data_path());
    debug!(data_dir = %data_dir.display(), "opening appointment book");

    let mut book =
        AppointmentBook::open(FileStore::new(data_dir)).with_notifier(notify::TerminalNotifier);

    match cli.command {
        Commands::Add { fields } => commands::add::run(&mut book, fields.into()),
        Commands::Edit { id, fields } => commands::edit::run(&mut book, &id, fields.into()),
        Commands::Delete { id, yes } => commands::delete::run(&mut book, &id, yes),
        Commands::List { filter } => {
            let filter = commands::list::resolve_filter(filter.as_deref(), &settings.default_filter);
            commands::list::run(&book, &filter)
        }
        Commands::Show { id } => commands::show::run(&book, &id),
    }
}

/// Logs go to stderr so they never mix with command output. `RUST_LOG`
/// overrides the default `warn` level.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
