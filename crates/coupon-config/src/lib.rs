//! Coupon Configuration Layer
//!
//! Pricing options for the discount engine, loadable from TOML and checked
//! through the [`Validate`] trait before use.
//!
//! # Example
//!
//! ```rust
//! use coupon_config::{PricingConfig, Validate};
//! use coupon_math::extrapolation::ExtrapolationMethod;
//!
//! let config = PricingConfig::from_toml_str(
//!     r#"
//!     name = "GILT.STRICT"
//!     extrapolation = "none"
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.extrapolation, ExtrapolationMethod::None);
//! assert!(!config.floor_accrued_at_zero);
//! assert!(config.is_valid());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]

pub mod error;
pub mod pricing;

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use pricing::PricingConfig;
