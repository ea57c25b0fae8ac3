// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod util;

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::thread;

use anyhow::{bail, Context, Result};
use tracing::{debug, info};

use crate::application::{Importer, Provisioner};
use crate::cli::args::Args;
use crate::infrastructure::{AnkiConnectClient, Config};
use crate::util::Stopwatch;

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting ankiload with arguments");

    let config = match &args.config {
        Some(path) => {
            debug!(?path, "Loading config file");
            Config::load(path)?
        }
        None => Config::default(),
    };

    let deck = args.deck.clone().unwrap_or_else(|| config.defaults.deck.clone());
    let folder = args
        .folder
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.defaults.folder));
    if folder.as_os_str().is_empty() {
        bail!("No image directory given (pass FOLDER or set [defaults] folder in the config)");
    }
    let sequential = args.sequential || config.import.sequential;
    let jobs = resolve_jobs(args.jobs, config.import.jobs);

    let stopwatch = Stopwatch::start();

    // Initialize infrastructure
    let client = AnkiConnectClient::new(&config.anki.endpoint);

    // Make sure the import target exists before touching any notes
    let provisioner = Provisioner::new(&client);
    provisioner.check_connectivity().context(
        "Cannot reach AnkiConnect. Is Anki running with the AnkiConnect add-on enabled?",
    )?;
    provisioner.ensure_deck(&deck)?;
    provisioner.ensure_model()?;

    // Execute use case
    let importer = Importer::new(&client, &deck, &folder);
    let imported = if sequential {
        importer.import_sequential()?
    } else {
        importer.import_concurrent(jobs)?
    };

    info!(notes = imported, "{}", stopwatch.summary("Image import"));
    Ok(())
}

/// Worker count for the concurrent importer: CLI flag wins, then the config
/// file, then the host's available parallelism. Zero means "unset" in both
/// the flag and the file.
fn resolve_jobs(cli_jobs: Option<usize>, config_jobs: usize) -> usize {
    cli_jobs
        .filter(|n| *n > 0)
        .or_else(|| (config_jobs > 0).then_some(config_jobs))
        .unwrap_or_else(|| {
            thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1)
        })
}
