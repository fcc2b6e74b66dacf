//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// Personnel records - validate employee data against its domain constraints
#[derive(Parser, Debug)]
#[command(name = "personnel")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Format used to parse dates of birth (chrono syntax)
    #[arg(long, global = true, env = "PERSONNEL_DATE_FORMAT")]
    pub date_format: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build an employee record and print it
    Check(CheckArgs),

    /// Print the attribute constraint table
    Constraints,
}

/// Arguments for the check command
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Employee id (at least 100)
    #[arg(long, allow_negative_numbers = true)]
    pub id: i64,

    #[arg(long)]
    pub first_name: String,

    #[arg(long)]
    pub given_name: String,

    #[arg(long)]
    pub last_name: String,

    /// Optional email address
    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub address: String,

    /// Phone number, e.g. "(84) 912345678"
    #[arg(long)]
    pub phone: String,

    /// Date of birth, in the configured date format
    #[arg(long)]
    pub dob: String,

    /// One of: male, female, other
    #[arg(long)]
    pub gender: String,
}
