// src/args.rs
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true)]
pub struct Args {
    /// Target deck name (falls back to the config file)
    #[arg(value_name = "DECK")]
    pub deck: Option<String>,

    /// Directory containing .jpg/.png images (falls back to the config file)
    #[arg(value_name = "FOLDER")]
    pub folder: Option<PathBuf>,

    /// Path to ankiload.toml (optional)
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Send requests one at a time instead of using the thread pool
    #[arg(short, long)]
    pub sequential: bool,

    /// Worker threads for concurrent import (default: available parallelism)
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
