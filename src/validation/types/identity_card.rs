//! Spanish fiscal identification codes.
//!
//! Three formats are accepted, each ending in a check character:
//! - NIF (individuals): `12345678Z`
//! - NIE (foreigners): `X1234567L`, where `X`, `Y` and `Z` stand for 0, 1 and 2
//! - CIF (organizations): `B12345674` or `P1234567D`, plus the `K`, `L` and
//!   `M` codes given to people without a DNI
//!
//! A single space or hyphen may separate the leading letter, the digits and
//! the check character. Separators are dropped from the normalized value.

use derive_more::Display;
use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;

use super::digit_values;
use crate::validation::{
    ValidationError, CIF_CONTROL, CIF_DIGIT_TYPES, CIF_LETTER_TYPES, CIF_PERSONAL_TYPES,
    CIF_TYPES, NIE_TYPES, NIF_CONTROL,
};

static NIF_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{8})[ -]?([A-Z])$").expect("Failed to compile NIF regex")
});

static NIE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^([{NIE_TYPES}])[ -]?([0-9]{{7}})[ -]?([A-Z])$"))
        .expect("Failed to compile NIE regex")
});

static CIF_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^([{CIF_TYPES}])[ -]?([0-9]{{7}})[ -]?([0-9A-Z])$"))
        .expect("Failed to compile CIF regex")
});

/// Which of the three fiscal code formats a value follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum IdentityKind {
    #[display("NIF")]
    Nif,
    #[display("NIE")]
    Nie,
    #[display("CIF")]
    Cif,
}

/// Wrapper type for a NIF, NIE or CIF that has been validated
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IdentityCardNumber {
    // Uppercase, without separators
    value: String,
    kind: IdentityKind,
}

impl IdentityCardNumber {
    /// Validates a NIF, NIE or CIF
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        validate_identity_card(raw)
    }

    pub fn kind(&self) -> IdentityKind {
        self.kind
    }

    /// The trailing check digit or letter
    pub fn check_character(&self) -> char {
        self.value.chars().last().unwrap_or_default()
    }

    /// Whether the code identifies a person (NIF or NIE) rather than an organization
    pub fn is_personal(&self) -> bool {
        self.kind != IdentityKind::Cif
    }
}

impl_validated_string!(IdentityCardNumber, validate_identity_card);

/// Validates a NIF, NIE or CIF and returns its normalized form
pub fn validate_identity_card(raw: &str) -> Result<IdentityCardNumber, ValidationError> {
    check_identity(raw, true)
}

/// Same as [`validate_identity_card`], but organization codes (CIF) are
/// rejected as badly formatted.
pub fn validate_personal_identity(raw: &str) -> Result<IdentityCardNumber, ValidationError> {
    check_identity(raw, false)
}

fn check_identity(raw: &str, allow_cif: bool) -> Result<IdentityCardNumber, ValidationError> {
    let result = parse_identity(&raw.trim().to_ascii_uppercase(), allow_cif);
    match &result {
        Ok(identity) => trace!("accepted {} {}", identity.kind, identity.value),
        Err(error) => debug!("rejected identity card number: {}", error.code()),
    }
    result
}

fn parse_identity(candidate: &str, allow_cif: bool) -> Result<IdentityCardNumber, ValidationError> {
    if let Some(caps) = NIF_REGEX.captures(candidate) {
        let (number, control) = (&caps[1], &caps[2]);
        if control.as_bytes()[0] != nif_control(number_value(number)) {
            return Err(ValidationError::NifChecksum);
        }
        return Ok(IdentityCardNumber {
            value: format!("{number}{control}"),
            kind: IdentityKind::Nif,
        });
    }

    if let Some(caps) = NIE_REGEX.captures(candidate) {
        let (prefix, number, control) = (&caps[1], &caps[2], &caps[3]);
        // X, Y and Z are consecutive, so the offset from X is the substituted digit
        let prefix_digit = u32::from(prefix.as_bytes()[0] - b'X');
        let value = prefix_digit * 10_000_000 + number_value(number);
        if control.as_bytes()[0] != nif_control(value) {
            return Err(ValidationError::NieChecksum);
        }
        return Ok(IdentityCardNumber {
            value: format!("{prefix}{number}{control}"),
            kind: IdentityKind::Nie,
        });
    }

    if let Some(caps) = CIF_REGEX.captures(candidate) {
        if !allow_cif {
            return Err(ValidationError::InvalidPersonalIdentity);
        }
        let (organization, number, control) = (&caps[1], &caps[2], &caps[3]);
        if !cif_control_matches(organization, number, control.as_bytes()[0]) {
            return Err(ValidationError::CifChecksum);
        }
        return Ok(IdentityCardNumber {
            value: format!("{organization}{number}{control}"),
            kind: IdentityKind::Cif,
        });
    }

    if allow_cif {
        Err(ValidationError::InvalidIdentityCard)
    } else {
        Err(ValidationError::InvalidPersonalIdentity)
    }
}

fn number_value(digits: &str) -> u32 {
    digit_values(digits).fold(0, |acc, digit| acc * 10 + digit)
}

fn nif_control(value: u32) -> u8 {
    NIF_CONTROL[(value % 23) as usize]
}

/// Control digit over the 7 CIF digits: odd positions are summed as they
/// are, even positions are doubled and the digits of each product summed.
fn cif_control_digit(number: &str) -> u32 {
    let total: u32 = digit_values(number)
        .enumerate()
        .map(|(position, digit)| {
            if position % 2 == 1 {
                digit
            } else {
                let doubled = digit * 2;
                doubled / 10 + doubled % 10
            }
        })
        .sum();

    (10 - total % 10) % 10
}

fn cif_control_matches(organization: &str, number: &str, control: u8) -> bool {
    let digit = cif_control_digit(number);
    let expected_digit = b'0' + digit as u8;
    let expected_letter = CIF_CONTROL[digit as usize];

    if CIF_PERSONAL_TYPES.contains(organization) {
        control == expected_letter || control == nif_control(number_value(number))
    } else if CIF_DIGIT_TYPES.contains(organization) {
        control == expected_digit
    } else if CIF_LETTER_TYPES.contains(organization) {
        control == expected_letter
    } else {
        control == expected_digit || control == expected_letter
    }
}
