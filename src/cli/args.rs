// Fri Oct 16 2026 - Alex

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dex-hook-injector")]
#[command(author = "Alex")]
#[command(version)]
#[command(about = "Forwards player response parameters to static hooks in a Dalvik method pool", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the configured target, apply hooks and write a report.
    Patch(PatchArgs),
    /// List every method a fingerprint matches.
    Match(MatchArgs),
    /// List the known fingerprints.
    Fingerprints(FingerprintsArgs),
}

#[derive(Parser, Debug)]
pub struct PatchArgs {
    #[arg(short, long)]
    pub pool: PathBuf,

    #[arg(short, long)]
    pub config: PathBuf,

    #[arg(short, long, default_value = "patch.json")]
    pub output: PathBuf,

    #[arg(long)]
    pub pool_output: Option<PathBuf>,

    #[arg(long)]
    pub markdown_output: Option<PathBuf>,

    #[arg(long)]
    pub compact: bool,
}

#[derive(Parser, Debug)]
pub struct MatchArgs {
    #[arg(short, long)]
    pub pool: PathBuf,

    #[arg(short, long)]
    pub fingerprint: String,

    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub sequential: bool,
}

#[derive(Parser, Debug)]
pub struct FingerprintsArgs {
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub category: Option<String>,
}

impl PatchArgs {
    pub fn validate(&self) -> Result<(), String> {
        if !self.pool.exists() {
            return Err(format!("Method pool does not exist: {:?}", self.pool));
        }
        if !self.config.exists() {
            return Err(format!("Config file does not exist: {:?}", self.config));
        }
        Ok(())
    }
}

impl MatchArgs {
    pub fn validate(&self) -> Result<(), String> {
        if !self.pool.exists() {
            return Err(format!("Method pool does not exist: {:?}", self.pool));
        }
        if self.fingerprint.trim().is_empty() {
            return Err("Fingerprint name cannot be empty".to_string());
        }
        Ok(())
    }
}
