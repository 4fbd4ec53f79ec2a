//! Engine configuration.
//!
//! Sources, lowest precedence first:
//! 1. built-in defaults ([`WorkloadConfig::default`]),
//! 2. a TOML file,
//! 3. `WORKLOAD_`-prefixed environment variables, with `__` separating
//!    nested keys (`WORKLOAD_REQUIRED_LOAD__ADMIN_RELEASE=9`).
//!
//! ```toml
//! [[load_bands]]
//! lower_bound = 0
//! label = "Underloaded"
//!
//! [[load_bands]]
//! lower_bound = 12
//! label = "Normal"
//!
//! [required_load]
//! full_time_phd = 15
//! ```

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::workload::{validate_bands, LoadBand, RequiredLoadPolicy};

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "WORKLOAD_";

/// Thresholds and policies used when building reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadConfig {
    /// Band table, ascending by lower bound.
    pub load_bands: Vec<LoadBand>,
    /// Required units per appointment.
    pub required_load: RequiredLoadPolicy,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            load_bands: LoadBand::defaults(),
            required_load: RequiredLoadPolicy::default(),
        }
    }
}

impl WorkloadConfig {
    /// Loads configuration from defaults, `path` (if it exists) and the
    /// environment, then validates the band table.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_figment(
            Figment::from(Serialized::defaults(Self::default()))
                .merge(Toml::file(path.as_ref()))
                .merge(Env::prefixed(ENV_PREFIX).split("__")),
        )
    }

    /// Extracts and validates configuration from a prepared figment.
    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: Self = figment.extract().map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the band table.
    pub fn validate(&self) -> Result<()> {
        validate_bands(&self.load_bands)
    }

    /// Replaces the band table.
    pub fn with_bands(mut self, bands: Vec<LoadBand>) -> Self {
        self.load_bands = bands;
        self
    }

    /// Replaces the required-load policy.
    pub fn with_required_load(mut self, policy: RequiredLoadPolicy) -> Self {
        self.required_load = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WorkloadError;
    use figment::Jail;

    #[test]
    fn test_defaults_without_file() {
        Jail::expect_with(|_jail| {
            let config = WorkloadConfig::load("missing.toml").unwrap();
            assert_eq!(config, WorkloadConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_toml_overrides() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "workload.toml",
                r#"
                [[load_bands]]
                lower_bound = 0
                label = "Light"

                [[load_bands]]
                lower_bound = 9
                label = "Full"

                [required_load]
                full_time_phd = 12
                "#,
            )?;

            let config = WorkloadConfig::load("workload.toml").unwrap();
            assert_eq!(
                config.load_bands,
                vec![LoadBand::new(0, "Light"), LoadBand::new(9, "Full")]
            );
            assert_eq!(config.required_load.full_time_phd, 12);
            assert_eq!(config.required_load.full_time_ma, 18); // default kept
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("workload.toml", "[required_load]\nadmin_release = 6\n")?;
            jail.set_env("WORKLOAD_REQUIRED_LOAD__ADMIN_RELEASE", "9");

            let config = WorkloadConfig::load("workload.toml").unwrap();
            assert_eq!(config.required_load.admin_release, 9);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_bands_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "workload.toml",
                r#"
                [[load_bands]]
                lower_bound = 5
                label = "X"

                [[load_bands]]
                lower_bound = 0
                label = "Y"
                "#,
            )?;

            let err = WorkloadConfig::load("workload.toml").unwrap_err();
            assert!(matches!(err, WorkloadError::InvalidConfiguration(_)));
            Ok(())
        });
    }

    #[test]
    fn test_malformed_file() {
        Jail::expect_with(|jail| {
            jail.create_file("workload.toml", "load_bands = \"nope\"")?;
            let err = WorkloadConfig::load("workload.toml").unwrap_err();
            assert!(matches!(err, WorkloadError::Config(_)));
            Ok(())
        });
    }
}
