//! Configuration for the field-to-vector filter.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Name given to the generated vector array unless configured otherwise.
pub const DEFAULT_OUTPUT_NAME: &str = "ConvertedVector";

/// User-facing settings of the field-to-vector filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSettings {
    /// Name of the 2-component point array to read. Empty disables the filter.
    pub field_name: String,

    /// Name of the 3-component point array to write.
    pub output_name: String,

    /// Value written to the third component of every tuple.
    pub default_z: f64,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            field_name: String::new(),
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
            default_z: 0.0,
        }
    }
}

impl FilterSettings {
    /// Creates settings reading `field_name` with the remaining defaults.
    pub fn for_field(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            ..Self::default()
        }
    }

    /// Sets the output array name.
    #[must_use]
    pub fn with_output_name(mut self, output_name: impl Into<String>) -> Self {
        self.output_name = output_name.into();
        self
    }

    /// Sets the third-component value.
    #[must_use]
    pub fn with_default_z(mut self, default_z: f64) -> Self {
        self.default_z = default_z;
        self
    }

    /// Returns true if a source field is configured.
    pub fn is_enabled(&self) -> bool {
        !self.field_name.is_empty()
    }

    /// Parses settings from JSON. Missing keys take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes settings to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
