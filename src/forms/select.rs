//! Single selection over a static choice list

use super::{Field, FieldError, FieldOptions};
use crate::choices::{province_choices, region_choices, Choice};

#[derive(Debug, Clone)]
pub struct Select {
    choices: &'static [Choice],
    options: FieldOptions,
}

impl Select {
    pub fn new(choices: &'static [Choice], options: FieldOptions) -> Self {
        Self { choices, options }
    }

    pub fn provinces() -> Self {
        Self::new(province_choices(), FieldOptions::default())
    }

    pub fn regions() -> Self {
        Self::new(region_choices(), FieldOptions::default())
    }

    pub fn with_options(self, options: FieldOptions) -> Self {
        Self { options, ..self }
    }

    pub fn choices(&self) -> &'static [Choice] {
        self.choices
    }
}

impl Field for Select {
    type Value = Choice;

    fn options(&self) -> &FieldOptions {
        &self.options
    }

    fn validate(&self, value: &str) -> Result<Self::Value, FieldError> {
        self.choices
            .iter()
            .find(|(code, _)| *code == value)
            .copied()
            .ok_or_else(|| FieldError::InvalidChoice(value.to_owned()))
    }
}
