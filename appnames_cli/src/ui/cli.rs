use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use appnames_core::{
    matches_query, AddOutcome, AliasSession, AliasStore, InstalledApp, StoreConfig, StoreError,
    WireFormat,
};
use appnames_storage::{FileBackend, StorageError};
use clap::{Parser, Subcommand};
use log::info;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Could not read app list {path:?}: {source}")]
    AppList {
        path: PathBuf,
        source: io::Error,
    },

    #[error("Invalid app list {path:?}: {source}")]
    AppListJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Output error: {0}")]
    Output(#[from] io::Error),
}

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "appnames", version, subcommand_required = true)]
pub struct Args {
    /// Directory holding the alias data and config.json (defaults to the user config dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Save in the old `id:alias,alias;id:alias` format
    #[arg(long, global = true)]
    pub legacy: bool,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show every application that has aliases
    List {
        /// Only applications whose id contains this (case-insensitive)
        #[arg(long, default_value = "")]
        query: String,
    },
    /// Add one or more aliases, separated by ',' or '،'
    Add { app_id: String, aliases: String },
    /// Remove a single alias
    Remove { app_id: String, alias: String },
    /// Print the application an alias belongs to
    Resolve { alias: String },
    /// List installed apps from a JSON file the way the editor shows them
    Apps {
        /// JSON array of {"package_name", "label", "is_system"}
        file: PathBuf,
        /// Only apps whose label contains this (case-insensitive)
        #[arg(long, default_value = "")]
        query: String,
    },
    /// Print the persisted value as stored
    Export,
}

pub fn run_cli(args: Args, out: &mut impl Write) -> Result<(), CliError> {
    let data_dir = match args.data_dir {
        Some(dir) => dir,
        None => FileBackend::default_dir()?,
    };
    let mut config = StoreConfig::load_from(&data_dir)?;
    if args.legacy {
        config.write_format = WireFormat::Legacy;
    }
    info!("Using {:?} (namespace '{}')", data_dir, config.namespace);

    let backend = FileBackend::at(&data_dir, &config.namespace)?;
    let mut session = AliasSession::open(AliasStore::with_config(backend, &config))?;

    match args.command {
        Command::List { query } => {
            for (app_id, aliases) in session.aliases().iter() {
                if matches_query(app_id, &query) {
                    writeln!(out, "{app_id}: {}", aliases.join(", "))?;
                }
            }
        }
        Command::Add { app_id, aliases } => {
            let outcomes = session.add(&app_id, &aliases)?;
            if outcomes.is_empty() {
                writeln!(out, "nothing to add")?;
            }
            for (alias, outcome) in outcomes {
                match outcome {
                    AddOutcome::Added => writeln!(out, "added: {alias}")?,
                    AddOutcome::Duplicate => writeln!(out, "already exists: {alias}")?,
                    AddOutcome::Blank => {}
                }
            }
        }
        Command::Remove { app_id, alias } => {
            if session.remove(&app_id, &alias)? {
                writeln!(out, "removed: {alias}")?;
            } else {
                writeln!(out, "not found: {alias}")?;
            }
        }
        Command::Resolve { alias } => match session.aliases().app_for_alias(&alias) {
            Some(app_id) => writeln!(out, "{app_id}")?,
            None => writeln!(out, "not found: {alias}")?,
        },
        Command::Apps { file, query } => {
            let installed = read_app_list(file)?;
            for entry in session.visible_apps(installed, config.system_allow_list.as_slice(), &query) {
                writeln!(
                    out,
                    "{} ({}){}",
                    entry.app.label,
                    entry.app.package_name,
                    if entry.aliases.is_empty() {
                        String::new()
                    } else {
                        format!(": {}", entry.aliases.join(", "))
                    }
                )?;
            }
        }
        Command::Export => {
            if let Some(raw) = session.store().raw()? {
                writeln!(out, "{raw}")?;
            }
        }
    }
    Ok(())
}

fn read_app_list(path: PathBuf) -> Result<Vec<InstalledApp>, CliError> {
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(source) => return Err(CliError::AppList { path, source }),
    };
    serde_json::from_str(&text).map_err(|source| CliError::AppListJson { path, source })
}
