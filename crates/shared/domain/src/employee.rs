//! Employee domain entity and related types.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::error::{Attribute, DomainError, DomainResult};
use crate::gender::Gender;
use crate::validation::{
    validate_address, validate_dob, validate_email, validate_first_name, validate_given_name,
    validate_id, validate_last_name, validate_phone,
};

/// Employee creation data.
///
/// Leaving `email` as `None` builds a record without an email; the email
/// check is then skipped entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub id: i64,
    pub first_name: String,
    pub given_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub address: String,
    pub phone: String,
    pub dob: NaiveDate,
    pub gender: Gender,
}

impl NewEmployee {
    /// Attach an email to the creation data
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Check every attribute in validation order, stopping at the first failure.
    fn check(&self) -> DomainResult<()> {
        TextFields {
            id: self.id,
            first_name: &self.first_name,
            given_name: &self.given_name,
            last_name: &self.last_name,
            email: self.email.as_deref(),
            address: &self.address,
            phone: &self.phone,
        }
        .check()?;
        // Gender is valid by type.
        ensure(validate_dob(self.dob), Attribute::Dob, self.dob)?;
        Ok(())
    }
}

/// Employee creation data as text, e.g. straight from a command line.
///
/// Gender and date of birth stay unparsed until every attribute before them
/// in validation order has been checked, so the blamed attribute matches
/// the one [`Employee::new`] would report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub id: i64,
    pub first_name: String,
    pub given_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub address: String,
    pub phone: String,
    /// Date of birth in the format passed to [`EmployeeDraft::build`]
    pub dob: String,
    /// Gender name, matched case-insensitively
    pub gender: String,
}

impl EmployeeDraft {
    /// Parse and validate the draft into an employee.
    ///
    /// # Errors
    /// Returns [`DomainError::NotPossible`] for the first rejected attribute.
    /// Unknown gender names and dates that do not match `date_format` are
    /// blamed on `gender` and `dob` in their own slots.
    pub fn build(self, date_format: &str) -> DomainResult<Employee> {
        TextFields {
            id: self.id,
            first_name: &self.first_name,
            given_name: &self.given_name,
            last_name: &self.last_name,
            email: self.email.as_deref(),
            address: &self.address,
            phone: &self.phone,
        }
        .check()?;

        let gender = match self.gender.parse::<Gender>() {
            Ok(gender) => gender,
            Err(_) => return Err(reject(Attribute::Gender, &self.gender)),
        };
        let dob = match NaiveDate::parse_from_str(&self.dob, date_format) {
            Ok(dob) => dob,
            Err(_) => return Err(reject(Attribute::Dob, &self.dob)),
        };

        Employee::new(NewEmployee {
            id: self.id,
            first_name: self.first_name,
            given_name: self.given_name,
            last_name: self.last_name,
            email: self.email,
            address: self.address,
            phone: self.phone,
            dob,
            gender,
        })
    }
}

/// Attributes checked before gender and dob.
struct TextFields<'a> {
    id: i64,
    first_name: &'a str,
    given_name: &'a str,
    last_name: &'a str,
    email: Option<&'a str>,
    address: &'a str,
    phone: &'a str,
}

impl TextFields<'_> {
    fn check(&self) -> DomainResult<()> {
        ensure(validate_id(self.id), Attribute::Id, self.id)?;
        ensure(
            validate_first_name(self.first_name),
            Attribute::FirstName,
            self.first_name,
        )?;
        ensure(
            validate_given_name(self.given_name),
            Attribute::GivenName,
            self.given_name,
        )?;
        ensure(
            validate_last_name(self.last_name),
            Attribute::LastName,
            self.last_name,
        )?;
        if let Some(email) = self.email {
            ensure(validate_email(email), Attribute::Email, email)?;
        }
        ensure(
            validate_address(self.address),
            Attribute::Address,
            self.address,
        )?;
        ensure(validate_phone(self.phone), Attribute::Phone, self.phone)?;
        Ok(())
    }
}

fn ensure(valid: bool, attribute: Attribute, value: impl fmt::Display) -> DomainResult<()> {
    if valid {
        Ok(())
    } else {
        Err(reject(attribute, value))
    }
}

fn reject(attribute: Attribute, value: impl fmt::Display) -> DomainError {
    let err = DomainError::not_possible(attribute, value);
    tracing::debug!(attribute = %attribute, "Employee construction rejected: {}", err);
    err
}

/// Employee domain entity.
///
/// `id`, `dob` and `gender` are fixed at construction. The remaining
/// attributes change only through setters that re-validate the new value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Employee {
    id: i64,
    first_name: String,
    given_name: String,
    last_name: String,
    email: Option<String>,
    address: String,
    phone: String,
    dob: NaiveDate,
    gender: Gender,
}

impl Employee {
    /// Validate the creation data and build the record.
    ///
    /// # Errors
    /// Returns [`DomainError::NotPossible`] naming the first attribute, in
    /// validation order, whose value is rejected.
    pub fn new(data: NewEmployee) -> DomainResult<Self> {
        data.check()?;

        let NewEmployee {
            id,
            first_name,
            given_name,
            last_name,
            email,
            address,
            phone,
            dob,
            gender,
        } = data;

        Ok(Self {
            id,
            first_name,
            given_name,
            last_name,
            email,
            address,
            phone,
            dob,
            gender,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn given_name(&self) -> &str {
        &self.given_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn dob(&self) -> NaiveDate {
        self.dob
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Year of birth
    pub fn yob(&self) -> i32 {
        self.dob.year()
    }

    /// Full name, last name first: `"{last} {given} {first}"`
    pub fn name(&self) -> String {
        format!("{} {} {}", self.last_name, self.given_name, self.first_name)
    }

    #[must_use]
    pub fn set_first_name(&mut self, first_name: impl Into<String>) -> bool {
        replace_if(
            &mut self.first_name,
            first_name.into(),
            validate_first_name,
            Attribute::FirstName,
        )
    }

    #[must_use]
    pub fn set_given_name(&mut self, given_name: impl Into<String>) -> bool {
        replace_if(
            &mut self.given_name,
            given_name.into(),
            validate_given_name,
            Attribute::GivenName,
        )
    }

    #[must_use]
    pub fn set_last_name(&mut self, last_name: impl Into<String>) -> bool {
        replace_if(
            &mut self.last_name,
            last_name.into(),
            validate_last_name,
            Attribute::LastName,
        )
    }

    #[must_use]
    pub fn set_email(&mut self, email: impl Into<String>) -> bool {
        let email = email.into();
        if !validate_email(&email) {
            tracing::debug!(attribute = %Attribute::Email, "Mutation rejected");
            return false;
        }
        self.email = Some(email);
        true
    }

    /// Remove the email; always allowed since the attribute is optional.
    pub fn clear_email(&mut self) {
        self.email = None;
    }

    #[must_use]
    pub fn set_address(&mut self, address: impl Into<String>) -> bool {
        replace_if(
            &mut self.address,
            address.into(),
            validate_address,
            Attribute::Address,
        )
    }

    #[must_use]
    pub fn set_phone(&mut self, phone: impl Into<String>) -> bool {
        replace_if(&mut self.phone, phone.into(), validate_phone, Attribute::Phone)
    }

    /// Check that every stored attribute still satisfies its constraint.
    pub fn rep_ok(&self) -> bool {
        validate_id(self.id)
            && validate_first_name(&self.first_name)
            && validate_given_name(&self.given_name)
            && validate_last_name(&self.last_name)
            && self.email.as_deref().map_or(true, validate_email)
            && validate_address(&self.address)
            && validate_phone(&self.phone)
            && validate_dob(self.dob)
    }
}

fn replace_if(
    slot: &mut String,
    value: String,
    is_valid: fn(&str) -> bool,
    attribute: Attribute,
) -> bool {
    if !is_valid(&value) {
        tracing::debug!(attribute = %attribute, "Mutation rejected");
        return false;
    }
    *slot = value;
    true
}

impl TryFrom<NewEmployee> for Employee {
    type Error = DomainError;

    fn try_from(data: NewEmployee) -> Result<Self, Self::Error> {
        Employee::new(data)
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Employee [id:{}, First Name:{}, Given Name:{}, Last Name:{}, Email:{}, Address:{}, Phone:{}, Date of birth:{}, Gender:{}]",
            self.id,
            self.first_name,
            self.given_name,
            self.last_name,
            self.email.as_deref().unwrap_or("none"),
            self.address,
            self.phone,
            self.dob,
            self.gender,
        )
    }
}
