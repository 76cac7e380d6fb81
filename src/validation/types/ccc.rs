//! Spanish bank account codes (CCC, Código Cuenta Cliente).
//!
//! A CCC has the shape `EEEE-OOOO-CC-AAAAAAAAAA`: entity, office, two check
//! digits and account. Groups may be separated by hyphens, by single spaces
//! or not at all, as long as the same style is used throughout.
//!
//! The first check digit covers `00` + entity + office, the second covers
//! the account. Each one is `11 - (weighted sum mod 11)`, with 11 read as 0
//! and 10 read as 1.

use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;

use super::digit_values;
use crate::validation::{ValidationError, CCC_LENGTH, CCC_WEIGHTS};

static CCC_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{4})([ -]?)([0-9]{4})([ -]?)([0-9]{2})([ -]?)([0-9]{10})$")
        .expect("Failed to compile CCC regex")
});

/// Wrapper type for a bank account code that has been validated.
/// Always held in its canonical hyphen-grouped form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CccNumber {
    value: String,
}

impl CccNumber {
    /// Validates a bank account code
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        validate_ccc(raw)
    }

    pub fn entity(&self) -> &str {
        &self.value[0..4]
    }

    pub fn office(&self) -> &str {
        &self.value[5..9]
    }

    pub fn check_digits(&self) -> &str {
        &self.value[10..12]
    }

    pub fn account(&self) -> &str {
        &self.value[13..23]
    }

    /// The 20 digits without separators
    pub fn digits(&self) -> String {
        self.value.replace('-', "")
    }
}

impl_validated_string!(CccNumber, validate_ccc);

/// Validates a bank account code and returns it as `EEEE-OOOO-CC-AAAAAAAAAA`
pub fn validate_ccc(raw: &str) -> Result<CccNumber, ValidationError> {
    let result = parse_ccc(raw.trim());
    match &result {
        Ok(ccc) => trace!("accepted bank account for entity {}", ccc.entity()),
        Err(error) => debug!("rejected bank account number: {}", error.code()),
    }
    result
}

fn parse_ccc(candidate: &str) -> Result<CccNumber, ValidationError> {
    let caps = CCC_REGEX
        .captures(candidate)
        .ok_or(ValidationError::InvalidCcc)?;

    let separator = &caps[2];
    if &caps[4] != separator || &caps[6] != separator {
        return Err(ValidationError::InvalidCcc);
    }

    let (entity, office, checksum, account) = (&caps[1], &caps[3], &caps[5], &caps[7]);
    let expected = format!(
        "{}{}",
        ccc_check_digit(&format!("00{entity}{office}")),
        ccc_check_digit(account)
    );
    if expected != checksum {
        return Err(ValidationError::CccChecksum);
    }

    let value = format!("{entity}-{office}-{checksum}-{account}");
    debug_assert_eq!(value.len(), CCC_LENGTH + 3);
    Ok(CccNumber { value })
}

/// Check digit over exactly 10 digits
fn ccc_check_digit(digits: &str) -> u32 {
    let sum: u32 = digit_values(digits)
        .zip(CCC_WEIGHTS)
        .map(|(digit, weight)| digit * weight)
        .sum();

    match 11 - sum % 11 {
        11 => 0,
        10 => 1,
        digit => digit,
    }
}
