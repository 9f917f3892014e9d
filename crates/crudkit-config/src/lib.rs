//! TOML-backed configuration for crudkit.
//!
//! Holds the column-level defaults and template maps that the upstream
//! field builder applies before a `PropertyDescriptor` is constructed.

use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fs, path::Path};
use thiserror::Error as ThisError;


///
/// CONSTANTS
///

/// Directory used for per-type field templates when no mapping exists.
pub const DEFAULT_TEMPLATE_DIR: &str = "crud/field";

/// Alignment applied to fields that do not configure one.
pub const DEFAULT_TEXT_ALIGN: &str = "left";

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

///
/// CrudConfig
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CrudConfig {
    pub fields: FieldDefaults,
    pub templates: TemplateConfig,
}

impl CrudConfig {
    /// Parse a config document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config = toml::from_str(source)?;

        Ok(config)
    }

    /// Read and parse a config file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "loaded crud config");

        Ok(config)
    }
}

///
/// FieldDefaults
///
/// Values substituted for field options the builder left unset.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldDefaults {
    pub text_align: String,
    pub sortable: bool,
}

impl Default for FieldDefaults {
    fn default() -> Self {
        Self {
            text_align: DEFAULT_TEXT_ALIGN.to_string(),
            sortable: true,
        }
    }
}

///
/// TemplateConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateConfig {
    /// Directory holding `{type}.html` fallbacks.
    pub fallback_dir: String,

    /// Field type -> template path.
    pub types: BTreeMap<String, String>,

    /// Template name -> template path.
    pub named: BTreeMap<String, String>,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            fallback_dir: DEFAULT_TEMPLATE_DIR.to_string(),
            types: BTreeMap::new(),
            named: BTreeMap::new(),
        }
    }
}
