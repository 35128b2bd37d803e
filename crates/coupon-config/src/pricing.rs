//! Pricing configuration types.
//!
//! Controls how the discount engine treats curve boundaries and accrual.

use std::path::Path;

use serde::{Deserialize, Serialize};

use coupon_math::extrapolation::{ExtrapolationMethod, ShortEndRate};

use crate::error::{ConfigResult, Validate, ValidationError};

/// Pricing configuration for bond valuation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Configuration name/identifier.
    #[serde(default = "default_name")]
    pub name: String,

    /// Description of this configuration.
    #[serde(default)]
    pub description: Option<String>,

    /// How rates are obtained for flows outside the curve's tenor range.
    #[serde(default)]
    pub extrapolation: ExtrapolationMethod,

    /// Which quoted rate extrapolates flows shorter than the first tenor.
    #[serde(default)]
    pub short_end: ShortEndRate,

    /// Log extrapolated lookups at warn level rather than debug.
    #[serde(default = "default_true")]
    pub warn_on_extrapolation: bool,

    /// Report zero accrued interest when the days to the next payment
    /// exceed the period length, rather than a negative amount.
    #[serde(default)]
    pub floor_accrued_at_zero: bool,
}

fn default_name() -> String {
    "DEFAULT".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self::new(default_name())
    }
}

impl PricingConfig {
    /// Creates a new pricing configuration with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            extrapolation: ExtrapolationMethod::default(),
            short_end: ShortEndRate::default(),
            warn_on_extrapolation: default_true(),
            floor_accrued_at_zero: false,
        }
    }

    /// Configuration that refuses to price flows outside the curve.
    pub fn strict() -> Self {
        Self::new("STRICT")
            .with_description("No extrapolation beyond quoted tenors")
            .with_extrapolation(ExtrapolationMethod::None)
    }

    /// Parses and validates a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Loads and validates a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Builder method to set description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder method to set the extrapolation method.
    pub fn with_extrapolation(mut self, method: ExtrapolationMethod) -> Self {
        self.extrapolation = method;
        self
    }

    /// Builder method to set the short-end extrapolation rate.
    pub fn with_short_end(mut self, short_end: ShortEndRate) -> Self {
        self.short_end = short_end;
        self
    }

    /// Builder method to set the extrapolation log level.
    pub fn with_warn_on_extrapolation(mut self, warn: bool) -> Self {
        self.warn_on_extrapolation = warn;
        self
    }

    /// Builder method to set the accrued interest floor.
    pub fn with_accrued_floor(mut self, floor: bool) -> Self {
        self.floor_accrued_at_zero = floor;
        self
    }
}

impl Validate for PricingConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ValidationError::new("name", "Name cannot be empty"));
        } else if self.name.chars().any(char::is_whitespace) {
            errors.push(ValidationError::with_rule(
                "name",
                format!("Name '{}' cannot contain whitespace", self.name),
                "identifier",
            ));
        }

        if let Some(description) = &self.description {
            if description.trim().is_empty() {
                errors.push(ValidationError::with_rule(
                    "description",
                    "Description, when given, cannot be blank",
                    "non_blank",
                ));
            }
        }

        errors
    }
}
