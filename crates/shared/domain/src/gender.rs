//! Gender enumeration.

use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Gender of an employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// All members, in declaration order
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    /// Lowercase label
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl FromStr for Gender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::unknown_gender(s))
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("MALE".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!(" other ".parse::<Gender>().unwrap(), Gender::Other);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "".parse::<Gender>().unwrap_err();
        assert_eq!(err, DomainError::unknown_gender(""));
        assert!("unknown".parse::<Gender>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for gender in Gender::ALL {
            assert_eq!(gender.to_string().parse::<Gender>().unwrap(), gender);
        }
    }
}
