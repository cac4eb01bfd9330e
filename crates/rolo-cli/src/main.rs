mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{completions, contacts, import, interactions, report, tasks, Context};
use crate::error::{exit_code_for, report_error};
use crate::util::now_utc;
use rolo_config as config;
use rolo_store::{paths, Store};

#[derive(Debug, Parser)]
#[command(name = "rolo", version, about = "rolo CLI")]
struct Cli {
    #[arg(long, global = true)]
    db_path: Option<PathBuf>,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Act as this owner instead of the configured one.
    #[arg(long, global = true)]
    owner: Option<String>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
    #[command(name = "add-contact")]
    AddContact(contacts::AddContactArgs),
    #[command(name = "edit-contact")]
    EditContact(contacts::EditContactArgs),
    Show(contacts::ShowArgs),
    List(contacts::ListArgs),
    Delete(contacts::DeleteArgs),
    #[command(name = "add-task")]
    AddTask(tasks::AddTaskArgs),
    #[command(name = "edit-task")]
    EditTask(tasks::EditTaskArgs),
    #[command(name = "list-tasks")]
    ListTasks(tasks::ListTasksArgs),
    #[command(name = "delete-task")]
    DeleteTask(tasks::DeleteTaskArgs),
    /// Log an interaction with a contact
    Log(interactions::LogInteractionArgs),
    #[command(name = "edit-interaction")]
    EditInteraction(interactions::EditInteractionArgs),
    #[command(name = "list-interactions")]
    ListInteractions(interactions::ListInteractionsArgs),
    #[command(name = "delete-interaction")]
    DeleteInteraction(interactions::DeleteInteractionArgs),
    /// Import contacts from a CSV file
    Import(import::ImportArgs),
    /// Print the CSV import template
    Template(import::TemplateArgs),
    Report(report::ReportArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        db_path,
        config: config_path,
        owner,
        json,
        verbose,
        command,
    } = cli;

    match command {
        Command::Completions(args) => completions::emit(args),
        command => {
            let app_config = config::load(config_path).with_context(|| "load config")?;
            let db_path =
                paths::resolve_db_path(db_path).with_context(|| "resolve database path")?;

            if verbose {
                debug!(path = %db_path.display(), "database path resolved");
            }

            let store = Store::open(&db_path)
                .with_context(|| format!("open database {}", db_path.display()))?;
            store.migrate().with_context(|| "run migrations")?;

            let handle = owner.as_deref().unwrap_or(&app_config.owner);
            let owner = store
                .owners()
                .ensure(now_utc(), handle)
                .with_context(|| format!("resolve owner {handle}"))?;

            if verbose {
                debug!(owner = %owner.id, handle = %owner.handle, "owner resolved");
            }

            let ctx = Context {
                store: &store,
                owner: owner.id,
                json,
                config: &app_config,
            };

            match command {
                Command::AddContact(args) => contacts::add_contact(&ctx, args),
                Command::EditContact(args) => contacts::edit_contact(&ctx, args),
                Command::Show(args) => contacts::show_contact(&ctx, args),
                Command::List(args) => contacts::list_contacts(&ctx, args),
                Command::Delete(args) => contacts::delete_contact(&ctx, args),
                Command::AddTask(args) => tasks::add_task(&ctx, args),
                Command::EditTask(args) => tasks::edit_task(&ctx, args),
                Command::ListTasks(args) => tasks::list_tasks(&ctx, args),
                Command::DeleteTask(args) => tasks::delete_task(&ctx, args),
                Command::Log(args) => interactions::log_interaction(&ctx, args),
                Command::EditInteraction(args) => interactions::edit_interaction(&ctx, args),
                Command::ListInteractions(args) => interactions::list_interactions(&ctx, args),
                Command::DeleteInteraction(args) => interactions::delete_interaction(&ctx, args),
                Command::Import(args) => import::import_csv(&ctx, args),
                Command::Template(args) => import::emit_template(&ctx, args),
                Command::Report(args) => report::report(&ctx, args),
                Command::Completions(_) => {
                    unreachable!("completions command handled before store initialization")
                }
            }
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}
