//! Domain layer - Employee entity and its domain constraints.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Construction validates every attribute up front and fails as a whole;
//! mutation goes through setters that either apply a valid value or report
//! `false` and leave the record untouched.

pub mod constants;
pub mod employee;
pub mod error;
pub mod gender;
pub mod validation;

pub use constants::*;
pub use employee::{Employee, EmployeeDraft, NewEmployee};
pub use error::{Attribute, DomainError, DomainResult};
pub use gender::Gender;
pub use validation::*;
