//! Field settings, loadable from YAML

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

use super::{CccField, IdentityCardNumberField, PhoneNumberField, PostalCodeField, Select};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldOptions {
    pub required: bool,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self { required: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityCardOptions {
    pub required: bool,
    /// Refuse organization codes (CIF)
    pub only_nif: bool,
}

impl Default for IdentityCardOptions {
    fn default() -> Self {
        Self {
            required: true,
            only_nif: false,
        }
    }
}

/// Settings for every field the crate provides. Missing entries keep their
/// defaults, so an empty document is a valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub postal_code: FieldOptions,
    pub phone_number: FieldOptions,
    pub identity_card: IdentityCardOptions,
    pub ccc: FieldOptions,
    pub province: FieldOptions,
    pub region: FieldOptions,
}

impl FormConfig {
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self =
            serde_yaml::from_str(content).context("Failed to parse form configuration")?;
        info!("Loaded form configuration: {:?}", config);
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize form configuration")
    }

    pub fn postal_code_field(&self) -> PostalCodeField {
        PostalCodeField::new(self.postal_code)
    }

    pub fn phone_number_field(&self) -> PhoneNumberField {
        PhoneNumberField::new(self.phone_number)
    }

    pub fn identity_card_field(&self) -> IdentityCardNumberField {
        IdentityCardNumberField::new(self.identity_card)
    }

    pub fn ccc_field(&self) -> CccField {
        CccField::new(self.ccc)
    }

    pub fn province_select(&self) -> Select {
        Select::provinces().with_options(self.province)
    }

    pub fn region_select(&self) -> Select {
        Select::regions().with_options(self.region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{Field, FieldError};

    #[test]
    fn test_defaults() {
        let config = FormConfig::from_yaml("{}").unwrap();
        assert_eq!(config, FormConfig::default());
        assert!(config.postal_code.required);
        assert!(!config.identity_card.only_nif);
    }

    #[test]
    fn test_partial_configuration() {
        let yaml = r#"
identity_card:
  only_nif: true
phone_number:
  required: false
"#;
        let config = FormConfig::from_yaml(yaml).unwrap();
        assert!(config.identity_card.required);
        assert!(config.identity_card.only_nif);
        assert!(!config.phone_number.required);

        assert_eq!(config.phone_number_field().clean(""), Ok(None));
        assert_eq!(
            config.identity_card_field().clean("B12345674").unwrap_err().code(),
            "invalid_only_nif"
        );
        assert_eq!(config.region_select().clean(""), Err(FieldError::Required));
    }

    #[test]
    fn test_invalid_configuration() {
        let error = FormConfig::from_yaml("identity_card:\n  only_nif: maybe\n").unwrap_err();
        assert!(error.to_string().contains("Failed to parse form configuration"));
    }

    #[test]
    fn test_yaml_round_trip() {
        let mut config = FormConfig::default();
        config.ccc.required = false;
        let yaml = config.to_yaml().unwrap();
        assert_eq!(FormConfig::from_yaml(&yaml).unwrap(), config);
    }
}
