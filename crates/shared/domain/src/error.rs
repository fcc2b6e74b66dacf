//! Domain-level errors.
//!
//! These errors represent constraint violations detected while building an
//! employee record. Mutators do not use them: a rejected mutation is reported
//! as `false` and leaves the record untouched.

use std::fmt;

use thiserror::Error;

use crate::constants::{constraint_for, AttributeConstraint};

/// Attributes of an employee record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Id,
    FirstName,
    GivenName,
    LastName,
    Email,
    Address,
    Phone,
    Gender,
    Dob,
}

impl Attribute {
    /// Order in which construction checks attributes; the first failure wins.
    pub const VALIDATION_ORDER: [Attribute; 9] = [
        Attribute::Id,
        Attribute::FirstName,
        Attribute::GivenName,
        Attribute::LastName,
        Attribute::Email,
        Attribute::Address,
        Attribute::Phone,
        Attribute::Gender,
        Attribute::Dob,
    ];

    /// Label used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Id => "id",
            Attribute::FirstName => "first name",
            Attribute::GivenName => "given name",
            Attribute::LastName => "last name",
            Attribute::Email => "email",
            Attribute::Address => "address",
            Attribute::Phone => "phone",
            Attribute::Gender => "gender",
            Attribute::Dob => "dob",
        }
    }

    /// Domain constraint declared for this attribute
    pub fn constraint(&self) -> &'static AttributeConstraint {
        constraint_for(*self)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Domain-specific errors for constraint violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An attribute failed validation, so the record cannot be constructed
    #[error("Invalid {attribute}: {value}")]
    NotPossible { attribute: Attribute, value: String },

    /// Text that names no gender
    #[error("Unknown gender: {0}")]
    UnknownGender(String),
}

impl DomainError {
    /// Create a construction failure for an attribute and its rejected value
    pub fn not_possible(attribute: Attribute, value: impl fmt::Display) -> Self {
        DomainError::NotPossible {
            attribute,
            value: value.to_string(),
        }
    }

    /// Create an unknown gender error
    pub fn unknown_gender(value: impl Into<String>) -> Self {
        DomainError::UnknownGender(value.into())
    }

    /// Attribute blamed by this error, if any
    pub fn attribute(&self) -> Option<Attribute> {
        match self {
            DomainError::NotPossible { attribute, .. } => Some(*attribute),
            DomainError::UnknownGender(_) => Some(Attribute::Gender),
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
