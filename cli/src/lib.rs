//! Personnel CLI - command-line front end for the employee domain.
//!
//! # CLI Usage
//!
//! ```bash
//! # Validate a record
//! personnel check --id 100 --first-name A --given-name Van --last-name Nguyen \
//!     --address "Ha Noi" --phone "(84) 912345678" --dob 1995-01-01 --gender male
//!
//! # Show the attribute constraints
//! personnel constraints
//! ```

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands};
