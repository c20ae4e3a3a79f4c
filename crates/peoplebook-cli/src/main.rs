mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{backup, completions, countries, people, picture, Context};
use crate::error::{exit_code_for, report_error};
use peoplebook_config as config;
use peoplebook_store::{paths, Store};

#[derive(Debug, Parser)]
#[command(name = "peoplebook", version, about = "peoplebook personal record directory")]
struct Cli {
    #[arg(long, global = true)]
    db_path: Option<PathBuf>,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create a person record
    Add(people::AddArgs),
    /// Change fields of an existing record
    Edit(people::EditArgs),
    /// Check fields without saving anything
    Validate(people::ValidateArgs),
    Show(people::ShowArgs),
    /// Show one page of the directory
    List(people::ListArgs),
    Delete(people::DeleteArgs),
    #[command(subcommand)]
    Picture(picture::PictureCommand),
    /// Print the country selector options
    Countries,
    Backup(backup::BackupArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
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
        json,
        verbose,
        command,
    } = cli;

    match command {
        Command::Completions(args) => completions::emit(args),
        command => {
            let app_config =
                config::load(config_path.clone()).with_context(|| "load config")?;
            if verbose {
                match config::resolve_config_path(config_path) {
                    Ok(path) if path.exists() => {
                        debug!(path = %path.display(), "config resolved")
                    }
                    Ok(path) => debug!(path = %path.display(), "config missing, using defaults"),
                    Err(err) => debug!(error = %err, "config unavailable"),
                }
            }

            if let Command::Countries = command {
                return countries::list_countries(&app_config, json);
            }

            let db_path =
                paths::resolve_db_path(db_path).with_context(|| "resolve database path")?;
            debug!(path = %db_path.display(), "database path resolved");

            let store = Store::open(&db_path)
                .with_context(|| format!("open database {}", db_path.display()))?;
            store.migrate().with_context(|| "run migrations")?;

            let ctx = Context {
                store: &store,
                json,
                config: &app_config,
            };

            match command {
                Command::Add(args) => people::add_person(&ctx, args),
                Command::Edit(args) => people::edit_person(&ctx, args),
                Command::Validate(args) => people::validate_person(&ctx, args),
                Command::Show(args) => people::show_person(&ctx, args),
                Command::List(args) => people::list_people(&ctx, args),
                Command::Delete(args) => people::delete_person(&ctx, args),
                Command::Picture(cmd) => match cmd {
                    picture::PictureCommand::Set(args) => picture::set_picture(&ctx, args),
                    picture::PictureCommand::Show => picture::show_picture(&ctx),
                    picture::PictureCommand::Export(args) => picture::export_picture(&ctx, args),
                },
                Command::Backup(args) => backup::backup(&ctx, args),
                Command::Countries => {
                    unreachable!("countries command handled before store initialization")
                }
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
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
