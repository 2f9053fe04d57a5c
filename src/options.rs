//! Typed header configuration.
//!
//! [`HeaderOptions`] replaces the loose option dictionary of older tooling
//! with named fields. Every field has a default, so a partial JSON preset
//! such as `{"comment": "site A"}` is valid.

use serde::{Deserialize, Serialize};

use crate::error::DvsError;
use crate::variant::Variant;

pub const DEFAULT_DESCRIPTION: &str = "Vector file for Siemens 'free' diffusion mode.";
pub const DEFAULT_COORDINATE_SYSTEM: &str = "xyz";
pub const DEFAULT_DECIMALS: usize = 6;

/// Normalisation mode announced to the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Normalisation {
    #[default]
    None,
    Maximum,
}

impl Normalisation {
    pub fn as_str(self) -> &'static str {
        match self {
            Normalisation::None => "none",
            Normalisation::Maximum => "maximum",
        }
    }
}

impl std::fmt::Display for Normalisation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Normalisation {
    type Err = DvsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Normalisation::None),
            "maximum" => Ok(Normalisation::Maximum),
            other => Err(DvsError::InvalidConfiguration(format!(
                "unknown normalisation mode '{}'",
                other
            ))),
        }
    }
}

/// Options controlling the header of a vector file.
///
/// Fields left as `None` fall back to the defaults of the [`Variant`] the
/// file is written for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderOptions {
    /// Free text after `# Description:`.
    pub description: Option<String>,
    /// Value of the `CoordinateSystem =` line.
    pub coordinate_system: String,
    pub normalisation: Normalisation,
    /// Optional `Comment:` line; empty strings are treated as unset.
    pub comment: Option<String>,
    /// Line terminator override.
    pub newline: Option<String>,
    /// Scanner directory override for the `# File:` comment.
    pub default_path: Option<String>,
    pub include_b_values: Option<bool>,
    pub include_dimensions: Option<bool>,
    /// Fractional digits of each vector component.
    pub decimals: usize,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        HeaderOptions {
            description: None,
            coordinate_system: DEFAULT_COORDINATE_SYSTEM.to_string(),
            normalisation: Normalisation::None,
            comment: None,
            newline: None,
            default_path: None,
            include_b_values: None,
            include_dimensions: None,
            decimals: DEFAULT_DECIMALS,
        }
    }
}

impl HeaderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_coordinate_system(mut self, coordinate_system: impl Into<String>) -> Self {
        self.coordinate_system = coordinate_system.into();
        self
    }

    pub fn with_normalisation(mut self, normalisation: Normalisation) -> Self {
        self.normalisation = normalisation;
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_newline(mut self, newline: impl Into<String>) -> Self {
        self.newline = Some(newline.into());
        self
    }

    pub fn with_default_path(mut self, default_path: impl Into<String>) -> Self {
        self.default_path = Some(default_path.into());
        self
    }

    pub fn with_b_values_line(mut self, include: bool) -> Self {
        self.include_b_values = Some(include);
        self
    }

    pub fn with_dimensions_line(mut self, include: bool) -> Self {
        self.include_dimensions = Some(include);
        self
    }

    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION)
    }

    /// The comment, if one is set and not empty.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref().filter(|c| !c.is_empty())
    }

    pub fn newline(&self, variant: Variant) -> &str {
        self.newline.as_deref().unwrap_or(variant.terminator())
    }

    pub fn directory(&self, variant: Variant) -> &str {
        self.default_path.as_deref().unwrap_or(variant.default_directory())
    }

    pub fn b_values_line(&self, variant: Variant) -> bool {
        self.include_b_values.unwrap_or(variant.includes_b_values())
    }

    pub fn dimensions_line(&self, variant: Variant) -> bool {
        self.include_dimensions.unwrap_or(variant.includes_dimensions())
    }

    /// Save the options as a pretty-printed JSON preset.
    pub fn save_to_file(&self, path: &str) -> Result<(), DvsError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| DvsError::OptionsSerialization(format!("JSON serialization failed: {}", e)))?;

        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load options from a JSON preset. Missing fields take their defaults.
    pub fn load_from_file(path: &str) -> Result<Self, DvsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, DvsError> {
        serde_json::from_str(json)
            .map_err(|e| DvsError::OptionsSerialization(format!("JSON deserialization failed: {}", e)))
    }
}
