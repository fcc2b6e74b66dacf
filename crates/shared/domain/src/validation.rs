//! Attribute validation predicates.
//!
//! Each predicate is pure and answers whether a single value satisfies its
//! attribute's domain constraint. Lengths count characters, not bytes.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{
    min_dob, EMAIL_PATTERN, MAX_ADDRESS_LENGTH, MAX_EMAIL_LENGTH, MAX_FIRST_NAME_LENGTH,
    MAX_GIVEN_NAME_LENGTH, MAX_LAST_NAME_LENGTH, MAX_PHONE_LENGTH, MIN_ID, PHONE_PATTERN,
};
use crate::gender::Gender;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(PHONE_PATTERN).expect("phone pattern is a valid regex"));

#[inline]
fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub fn validate_id(id: i64) -> bool {
    id >= MIN_ID
}

pub fn validate_first_name(first_name: &str) -> bool {
    !first_name.is_empty() && char_len(first_name) <= MAX_FIRST_NAME_LENGTH
}

pub fn validate_given_name(given_name: &str) -> bool {
    !given_name.is_empty() && char_len(given_name) <= MAX_GIVEN_NAME_LENGTH
}

/// Rejects a lone space rather than the empty string, unlike the other names.
pub fn validate_last_name(last_name: &str) -> bool {
    last_name != " " && char_len(last_name) <= MAX_LAST_NAME_LENGTH
}

pub fn validate_email(email: &str) -> bool {
    char_len(email) <= MAX_EMAIL_LENGTH && EMAIL_RE.is_match(email)
}

pub fn validate_address(address: &str) -> bool {
    address != " " && char_len(address) <= MAX_ADDRESS_LENGTH
}

pub fn validate_phone(phone: &str) -> bool {
    char_len(phone) <= MAX_PHONE_LENGTH && PHONE_RE.is_match(phone)
}

/// True unless `dob` falls strictly before 1900-01-01.
pub fn validate_dob(dob: NaiveDate) -> bool {
    dob >= min_dob()
}

/// True iff `gender` names a member of [`Gender`].
pub fn validate_gender(gender: &str) -> bool {
    gender.parse::<Gender>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_id_minimum() {
        assert!(!validate_id(99));
        assert!(validate_id(100));
        assert!(validate_id(i64::MAX));
        assert!(!validate_id(-1));
    }

    #[test]
    fn test_first_and_given_name() {
        assert!(validate_first_name("A"));
        assert!(!validate_first_name(""));
        assert!(validate_first_name(&"a".repeat(35)));
        assert!(!validate_first_name(&"a".repeat(36)));

        assert!(validate_given_name("Van"));
        assert!(!validate_given_name(""));
        assert!(!validate_given_name(&"b".repeat(36)));
    }

    #[test]
    fn test_last_name_asymmetry() {
        assert!(validate_last_name("Nguyen"));
        assert!(validate_last_name(""));
        assert!(!validate_last_name(" "));
        assert!(validate_last_name("  "));
        assert!(!validate_last_name(&"c".repeat(36)));
    }

    #[test]
    fn test_name_length_counts_characters() {
        // 35 two-byte characters are within bounds
        assert!(validate_first_name(&"đ".repeat(35)));
        assert!(!validate_first_name(&"đ".repeat(36)));
    }

    #[test]
    fn test_length_counts_astral_characters_once() {
        // 35 emoji are 70 UTF-16 units but 35 characters
        let emoji = "😀".repeat(35);
        assert_eq!(emoji.encode_utf16().count(), 70);
        assert!(validate_first_name(&emoji));
        assert!(validate_given_name(&emoji));
        assert!(validate_last_name(&emoji));
        assert!(!validate_first_name(&"😀".repeat(36)));
    }

    #[test]
    fn test_email_shape() {
        assert!(validate_email("a@b.co"));
        assert!(validate_email("first.last@mail.example.com"));
        assert!(!validate_email("noatsymbol.com"));
        assert!(!validate_email("a@nodot"));
        assert!(!validate_email("@b.co"));
        assert!(!validate_email("a@b."));
        assert!(!validate_email(""));
    }

    #[test]
    fn test_email_rejects_line_terminators() {
        assert!(!validate_email("a\r@b.co"));
        assert!(!validate_email("a@b\n.co"));
        assert!(!validate_email("a@b.c\u{85}o"));
        assert!(!validate_email("a\u{2028}@b.co"));
        assert!(!validate_email("a@b.co\u{2029}"));
        assert!(validate_email("a\t@b.co"));
    }

    #[test]
    fn test_email_length() {
        let local = "a".repeat(194);
        let ok = format!("{}@b.com", local);
        assert_eq!(ok.chars().count(), 200);
        assert!(validate_email(&ok));

        let too_long = format!("a{}", ok);
        assert!(!validate_email(&too_long));
    }

    #[test]
    fn test_address() {
        assert!(validate_address("1 Nguyen Trai, Ha Noi"));
        assert!(validate_address(""));
        assert!(!validate_address(" "));
        assert!(validate_address(&"x".repeat(1500)));
        assert!(!validate_address(&"x".repeat(1501)));
    }

    #[test]
    fn test_phone() {
        assert!(validate_phone("(84) 912345678"));
        assert!(validate_phone("(84) 12345678"));
        assert!(validate_phone("(84) 123456789012345"));
        assert!(!validate_phone("(84) 1234567"));
        assert!(!validate_phone("(84) 1234567890123456"));
        assert!(!validate_phone("0912345678"));
        assert!(!validate_phone("(84)912345678"));
        assert!(!validate_phone("(84) 91234567a"));
        assert!(!validate_phone("(84) 912345678 "));
    }

    #[test]
    fn test_dob_boundary() {
        assert!(!validate_dob(date(1899, 12, 31)));
        assert!(validate_dob(date(1900, 1, 1)));
        assert!(validate_dob(date(1995, 1, 1)));
    }

    #[test]
    fn test_gender_membership() {
        assert!(validate_gender("male"));
        assert!(validate_gender("Female"));
        assert!(validate_gender("other"));
        assert!(!validate_gender("none"));
    }
}
