use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::fields;

/// How the name to canonicalize is chosen from a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// Most meaningful single candidate field.
    #[default]
    BestField,
    /// Space-joined concatenation of every fallback field.
    Concatenate,
}

/// Handling of suffixed names that collide with names already emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UniquenessPolicy {
    /// Keep counting until the identifier is unused.
    #[default]
    Strict,
    /// Emit `base_<n>` without checking it against earlier output.
    Legacy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanonConfig {
    pub primary_field: String,
    pub candidate_fields: Vec<String>,
    pub fallback_fields: Vec<String>,
    pub subsidiary_fields: Vec<String>,
    pub selection: SelectionMode,
    pub uniqueness: UniquenessPolicy,
}

impl CanonConfig {
    /// Load a config from a JSON file. Missing keys take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for CanonConfig {
    fn default() -> Self {
        Self {
            primary_field: fields::FIRST_NAME.into(),
            candidate_fields: owned(fields::CANDIDATE_FIELDS),
            fallback_fields: owned(fields::FALLBACK_FIELDS),
            subsidiary_fields: owned(fields::SUBSIDIARY_FIELDS),
            selection: SelectionMode::default(),
            uniqueness: UniquenessPolicy::default(),
        }
    }
}
