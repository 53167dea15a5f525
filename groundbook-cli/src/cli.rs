//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    ApproveCommand, BookCommand, CancelCommand, CompletionsCommand, GroundCommand, InitCommand,
    ListCommand, RejectCommand, SlotsCommand, UserCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for managing ground reservations.
#[derive(Parser)]
#[command(name = "groundbook")]
#[command(version, about = "Manage ground reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "GROUNDBOOK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(
        long,
        value_name = "SECONDS",
        global = true,
        env = "GROUNDBOOK_BUSY_TIMEOUT"
    )]
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization
    #[arg(long, global = true, env = "GROUNDBOOK_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize the data directory and database
    Init(InitCommand),

    /// Manage grounds
    #[command(subcommand)]
    Ground(GroundCommand),

    /// Manage users
    #[command(subcommand)]
    User(UserCommand),

    /// Book a time slot on a ground
    Book(BookCommand),

    /// Approve a pending reservation
    Approve(ApproveCommand),

    /// Reject a reservation
    Reject(RejectCommand),

    /// Cancel one or more reservations
    Cancel(CancelCommand),

    /// List reservations
    List(ListCommand),

    /// Show upcoming occupied slots for a ground
    Slots(SlotsCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
