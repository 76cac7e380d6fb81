//! Spanish postal codes.
//!
//! Five digits, where the first two are the province code, 01 to 52.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::choices::province_name;
use crate::validation::{ValidationError, MAX_PROVINCE_CODE, POSTAL_CODE_LENGTH};

static POSTAL_CODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2})[0-9]{3}$").expect("Failed to compile postal code regex")
});

/// Wrapper type for a postal code that has been validated
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PostalCode {
    value: String,
}

impl PostalCode {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        validate_postal_code(raw)
    }

    /// The two leading digits, e.g. `"28"` for `"28080"`
    pub fn province_code(&self) -> &str {
        &self.value[..2]
    }

    /// Name of the province the code belongs to
    pub fn province(&self) -> Option<&'static str> {
        province_name(self.province_code())
    }
}

impl_validated_string!(PostalCode, validate_postal_code);

pub fn validate_postal_code(raw: &str) -> Result<PostalCode, ValidationError> {
    let candidate = raw.trim();

    let province = POSTAL_CODE_REGEX
        .captures(candidate)
        .and_then(|caps| caps[1].parse::<u8>().ok());
    let in_range = province.is_some_and(|code| (1..=MAX_PROVINCE_CODE).contains(&code));

    if candidate.len() != POSTAL_CODE_LENGTH || !in_range {
        debug!("rejected postal code of length {}", candidate.len());
        return Err(ValidationError::InvalidPostalCode);
    }

    Ok(PostalCode {
        value: candidate.to_owned(),
    })
}
