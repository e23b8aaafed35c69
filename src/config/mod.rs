//! Configuration for relationship resolution and relative filtering.

use crate::error::{FamilleError, Result};

/// Default minimum age for a person to be offered as a parent or spouse
pub const DEFAULT_MIN_RELATIVE_AGE: i32 = 20;

/// Default prefix of the family page path
pub const DEFAULT_FAMILY_PATH_PREFIX: &str = "/familles";

/// Environment variable overriding [`FilterConfig::min_relative_age`]
pub const MIN_RELATIVE_AGE_ENV: &str = "FAMILLE_MIN_RELATIVE_AGE";

/// Environment variable overriding [`FamilleConfig::family_path_prefix`]
pub const FAMILY_PATH_PREFIX_ENV: &str = "FAMILLE_FAMILY_PATH_PREFIX";

/// Configuration for the eligible relative filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// Persons with a known age below this are never offered as father,
    /// mother or spouse. Unknown ages always pass.
    pub min_relative_age: i32,
    /// Label of the "no father" entry
    pub father_placeholder: String,
    /// Label of the "no mother" entry
    pub mother_placeholder: String,
    /// Label of the "no spouse" entry
    pub conjoint_placeholder: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_relative_age: DEFAULT_MIN_RELATIVE_AGE,
            father_placeholder: "--Aucun--".to_string(),
            mother_placeholder: "--Aucune--".to_string(),
            conjoint_placeholder: "--Aucun(e)--".to_string(),
        }
    }
}

impl FilterConfig {
    /// Set the minimum relative age
    #[must_use]
    pub const fn with_min_relative_age(mut self, age: i32) -> Self {
        self.min_relative_age = age;
        self
    }

    /// Whether an optional age passes the minimum age check
    #[must_use]
    pub fn age_is_plausible(&self, age: Option<i32>) -> bool {
        age.is_none_or(|age| age >= self.min_relative_age)
    }
}

/// Top-level library configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilleConfig {
    /// Relative filter settings
    pub filter: FilterConfig,
    /// Prefix of the family page path, without trailing slash
    pub family_path_prefix: String,
}

impl Default for FamilleConfig {
    fn default() -> Self {
        Self {
            filter: FilterConfig::default(),
            family_path_prefix: DEFAULT_FAMILY_PATH_PREFIX.to_string(),
        }
    }
}

impl FamilleConfig {
    /// Build a configuration from defaults overridden by environment variables
    ///
    /// # Errors
    /// Returns an error if an override is present but cannot be parsed
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var(MIN_RELATIVE_AGE_ENV) {
            config.filter.min_relative_age = parse_min_age(&raw)?;
        }

        if let Ok(prefix) = std::env::var(FAMILY_PATH_PREFIX_ENV) {
            config.family_path_prefix = normalize_prefix(&prefix);
        }

        log::debug!("Loaded configuration: {config:?}");
        Ok(config)
    }

    /// Path of the family page keyed by `id`
    #[must_use]
    pub fn family_path(&self, id: crate::models::PersonId) -> String {
        format!("{}/{id}/", self.family_path_prefix)
    }
}

fn parse_min_age(raw: &str) -> Result<i32> {
    raw.trim()
        .parse::<i32>()
        .ok()
        .filter(|age| *age >= 0)
        .ok_or_else(|| {
            FamilleError::ConfigError(format!("{MIN_RELATIVE_AGE_ENV} must be a non-negative integer, got {raw:?}"))
        })
}

fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_end_matches('/');
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
