//! Spanish phone numbers.
//!
//! Nine digits, where the first one is 6 (mobile), 8 (special rate) or
//! 9 (landlines and special rate). Information numbers are not accepted.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::validation::{ValidationError, PHONE_NUMBER_LENGTH};

static PHONE_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[689][0-9]{8}$").expect("Failed to compile phone number regex")
});

/// Wrapper type for a phone number that has been validated
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PhoneNumber {
    value: String,
}

impl PhoneNumber {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        validate_phone_number(raw)
    }

    pub fn is_mobile(&self) -> bool {
        self.value.starts_with('6')
    }
}

impl_validated_string!(PhoneNumber, validate_phone_number);

pub fn validate_phone_number(raw: &str) -> Result<PhoneNumber, ValidationError> {
    let candidate = raw.trim();

    if candidate.len() != PHONE_NUMBER_LENGTH || !PHONE_NUMBER_REGEX.is_match(candidate) {
        debug!("rejected phone number of length {}", candidate.len());
        return Err(ValidationError::InvalidPhoneNumber);
    }

    Ok(PhoneNumber {
        value: candidate.to_owned(),
    })
}
