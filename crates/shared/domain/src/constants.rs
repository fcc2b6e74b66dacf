//! Domain-level constants.
//!
//! These constants define the per-attribute domain constraints of an
//! employee record. The table at the bottom mirrors them as data so callers
//! can inspect mutability and bounds without reading the validation code.

use chrono::NaiveDate;

use crate::error::Attribute;

// =============================================================================
// Identity
// =============================================================================

/// Smallest accepted employee id
pub const MIN_ID: i64 = 100;

// =============================================================================
// Names
// =============================================================================

/// Maximum first name length (in characters)
pub const MAX_FIRST_NAME_LENGTH: usize = 35;

/// Maximum given name length (in characters)
pub const MAX_GIVEN_NAME_LENGTH: usize = 35;

/// Maximum last name length (in characters)
pub const MAX_LAST_NAME_LENGTH: usize = 35;

// =============================================================================
// Contact
// =============================================================================

/// Maximum email length (in characters)
pub const MAX_EMAIL_LENGTH: usize = 200;

/// Maximum address length (in characters)
pub const MAX_ADDRESS_LENGTH: usize = 1500;

/// Maximum phone length (in characters), prefix included
pub const MAX_PHONE_LENGTH: usize = 20;

/// Country prefix every phone number starts with
pub const PHONE_PREFIX: &str = "(84) ";

/// Email shape: local part, `@`, domain with at least one dot, trailing segment.
///
/// Segments may hold any character except a line terminator
/// (`\n`, `\r`, U+0085, U+2028, U+2029).
pub const EMAIL_PATTERN: &str = concat!(
    r"^([^\n\r\x{85}\x{2028}\x{2029}]+)",
    r"@([^\n\r\x{85}\x{2028}\x{2029}]+)",
    r"\.+([^\n\r\x{85}\x{2028}\x{2029}]+)$",
);

/// Phone shape: the country prefix followed by 8 to 15 digits
pub const PHONE_PATTERN: &str = r"^\(84\) [0-9]{8,15}$";

// =============================================================================
// Date of birth
// =============================================================================

/// Earliest accepted date of birth as (year, month, day).
///
/// The constraint was documented as 1990-01-01 but has always been enforced
/// as 1900-01-01; the enforced value is kept.
pub const MIN_DOB_YMD: (i32, u32, u32) = (1900, 1, 1);

/// Earliest accepted date of birth.
pub fn min_dob() -> NaiveDate {
    let (year, month, day) = MIN_DOB_YMD;
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

// =============================================================================
// Constraint table
// =============================================================================

/// Declarative description of one attribute's domain constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeConstraint {
    pub attribute: Attribute,
    /// Value type as it appears to callers
    pub value_type: &'static str,
    /// Whether a setter exists after construction
    pub mutable: bool,
    /// Whether the attribute may be absent
    pub optional: bool,
    /// Upper bound on the text length, if any
    pub max_length: Option<usize>,
    /// Lower bound, rendered as text, if any
    pub min: Option<&'static str>,
}

/// All attribute constraints, in declaration order.
pub static CONSTRAINTS: [AttributeConstraint; 9] = [
    AttributeConstraint {
        attribute: Attribute::Id,
        value_type: "Integer",
        mutable: false,
        optional: false,
        max_length: None,
        min: Some("100"),
    },
    AttributeConstraint {
        attribute: Attribute::FirstName,
        value_type: "String",
        mutable: true,
        optional: false,
        max_length: Some(MAX_FIRST_NAME_LENGTH),
        min: None,
    },
    AttributeConstraint {
        attribute: Attribute::GivenName,
        value_type: "String",
        mutable: true,
        optional: false,
        max_length: Some(MAX_GIVEN_NAME_LENGTH),
        min: None,
    },
    AttributeConstraint {
        attribute: Attribute::LastName,
        value_type: "String",
        mutable: true,
        optional: false,
        max_length: Some(MAX_LAST_NAME_LENGTH),
        min: None,
    },
    AttributeConstraint {
        attribute: Attribute::Email,
        value_type: "String",
        mutable: true,
        optional: true,
        max_length: Some(MAX_EMAIL_LENGTH),
        min: None,
    },
    AttributeConstraint {
        attribute: Attribute::Address,
        value_type: "String",
        mutable: true,
        optional: false,
        max_length: Some(MAX_ADDRESS_LENGTH),
        min: None,
    },
    AttributeConstraint {
        attribute: Attribute::Phone,
        value_type: "String",
        mutable: true,
        optional: false,
        max_length: Some(MAX_PHONE_LENGTH),
        min: None,
    },
    AttributeConstraint {
        attribute: Attribute::Dob,
        value_type: "Date",
        mutable: false,
        optional: false,
        max_length: None,
        min: Some("1900-01-01"),
    },
    AttributeConstraint {
        attribute: Attribute::Gender,
        value_type: "Gender",
        mutable: false,
        optional: false,
        max_length: None,
        min: None,
    },
];

/// Look up the constraint for an attribute.
pub fn constraint_for(attribute: Attribute) -> &'static AttributeConstraint {
    let index = match attribute {
        Attribute::Id => 0,
        Attribute::FirstName => 1,
        Attribute::GivenName => 2,
        Attribute::LastName => 3,
        Attribute::Email => 4,
        Attribute::Address => 5,
        Attribute::Phone => 6,
        Attribute::Dob => 7,
        Attribute::Gender => 8,
    };
    &CONSTRAINTS[index]
}
