//! Delimiter configuration.
//!
//! The delimiters are plain values handed to the rewriter at construction
//! time. [`BemConfig::from_env`] reads them from the same environment
//! variables the build pipeline sets, but nothing inside the rewriter ever
//! looks at the environment.

use std::env::{self, VarError};

use crate::logging::targets;
use crate::{Error, Result};

/// Environment variable holding the modifier delimiter.
pub const MODIFIER_DELIMITER_VAR: &str = "BEM_MOD_DELIM";
/// Environment variable holding the element delimiter.
pub const ELEMENT_DELIMITER_VAR: &str = "BEM_ELEM_DELIM";

/// Default modifier delimiter (`block_mod_value`).
pub const DEFAULT_MODIFIER_DELIMITER: &str = "_";
/// Default element delimiter (`block__elem`).
pub const DEFAULT_ELEMENT_DELIMITER: &str = "__";

/// Naming delimiters used when composing class selectors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BemConfig {
    /// Inserted before a modifier and between modifier name and value.
    pub modifier_delimiter: String,
    /// Inserted between a block name and an element name.
    pub element_delimiter: String,
}

impl Default for BemConfig {
    fn default() -> Self {
        Self {
            modifier_delimiter: DEFAULT_MODIFIER_DELIMITER.to_string(),
            element_delimiter: DEFAULT_ELEMENT_DELIMITER.to_string(),
        }
    }
}

impl BemConfig {
    /// Create a configuration with the default delimiters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the modifier delimiter.
    pub fn with_modifier_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.modifier_delimiter = delimiter.into();
        self
    }

    /// Set the element delimiter.
    pub fn with_element_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.element_delimiter = delimiter.into();
        self
    }

    /// Read the delimiters from `BEM_MOD_DELIM` and `BEM_ELEM_DELIM`.
    ///
    /// Unset or empty variables fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEnvironment`] if a variable is set to
    /// something that is not valid unicode.
    pub fn from_env() -> Result<Self> {
        let modifier = read_var(MODIFIER_DELIMITER_VAR)?;
        let element = read_var(ELEMENT_DELIMITER_VAR)?;
        Ok(Self::resolve(modifier, element))
    }

    /// Resolve the delimiters through `lookup` instead of the process
    /// environment.
    ///
    /// ```
    /// use pobem::BemConfig;
    ///
    /// let config = BemConfig::from_lookup(|name| {
    ///     (name == "BEM_ELEM_DELIM").then(|| "--".to_string())
    /// });
    /// assert_eq!(config.element_delimiter, "--");
    /// assert_eq!(config.modifier_delimiter, "_");
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::resolve(lookup(MODIFIER_DELIMITER_VAR), lookup(ELEMENT_DELIMITER_VAR))
    }

    fn resolve(modifier: Option<String>, element: Option<String>) -> Self {
        let defaults = Self::default();
        let config = Self {
            modifier_delimiter: modifier
                .filter(|value| !value.is_empty())
                .unwrap_or(defaults.modifier_delimiter),
            element_delimiter: element
                .filter(|value| !value.is_empty())
                .unwrap_or(defaults.element_delimiter),
        };

        tracing::debug!(
            target: targets::CONFIG,
            modifier = %config.modifier_delimiter,
            element = %config.element_delimiter,
            "resolved BEM delimiters"
        );
        config
    }
}

fn read_var(name: &str) -> Result<Option<String>> {
    env_value(name, env::var(name))
}

/// Interpret the result of reading variable `name`.
fn env_value(
    name: &str,
    value: std::result::Result<String, VarError>,
) -> Result<Option<String>> {
    match value {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(Error::invalid_environment(name)),
    }
}
