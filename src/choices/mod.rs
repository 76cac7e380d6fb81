//! Static choice lists for selection inputs.
//!
//! Each list is an ordered slice of `(code, name)` pairs.

mod provinces;
mod regions;

pub use provinces::PROVINCE_CHOICES;
pub use regions::REGION_CHOICES;

/// A `(code, display name)` pair
pub type Choice = (&'static str, &'static str);

/// The 52 provinces, ordered by code `"01"` to `"52"`
pub fn province_choices() -> &'static [Choice] {
    PROVINCE_CHOICES
}

/// The autonomous communities
pub fn region_choices() -> &'static [Choice] {
    REGION_CHOICES
}

pub fn province_name(code: &str) -> Option<&'static str> {
    lookup(PROVINCE_CHOICES, code)
}

pub fn region_name(code: &str) -> Option<&'static str> {
    lookup(REGION_CHOICES, code)
}

pub fn is_province_code(code: &str) -> bool {
    province_name(code).is_some()
}

fn lookup(choices: &'static [Choice], code: &str) -> Option<&'static str> {
    choices
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, name)| *name)
}
