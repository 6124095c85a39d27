//! Pipeline-facing filter object.
//!
//! [`FieldToVectorFilter`] holds the settings between runs, tracks when they
//! last changed, and exposes the integer-status entry point a host pipeline
//! calls on each update.

use fieldvec_core::{Dataset, FilterSettings, ModifiedTime};

use crate::convert::{convert, Conversion};
use crate::error::ConvertError;

/// Status returned to the host when the run succeeded or was a benign no-op.
pub const STATUS_SUCCESS: i32 = 1;

/// Status returned to the host when the run failed.
pub const STATUS_FAILURE: i32 = 0;

/// A filter that appends a 3-component vector array built from a
/// 2-component point array.
#[derive(Debug, Clone)]
pub struct FieldToVectorFilter {
    settings: FilterSettings,
    modified: ModifiedTime,
    last_run: Option<ModifiedTime>,
}

impl Default for FieldToVectorFilter {
    fn default() -> Self {
        Self::new(FilterSettings::default())
    }
}

impl FieldToVectorFilter {
    /// Creates a filter with the given settings.
    pub fn new(settings: FilterSettings) -> Self {
        Self {
            settings,
            modified: ModifiedTime::now(),
            last_run: None,
        }
    }

    /// Returns the current settings.
    pub fn settings(&self) -> &FilterSettings {
        &self.settings
    }

    /// Returns the source field name.
    pub fn field_name(&self) -> &str {
        &self.settings.field_name
    }

    /// Returns the output array name.
    pub fn output_name(&self) -> &str {
        &self.settings.output_name
    }

    /// Returns the third-component value.
    pub fn default_z(&self) -> f64 {
        self.settings.default_z
    }

    /// Sets the source field name.
    pub fn set_field_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.settings.field_name != name {
            log::debug!("field name: '{}' -> '{name}'", self.settings.field_name);
            self.settings.field_name = name;
            self.modified();
        }
    }

    /// Sets the output array name.
    pub fn set_output_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.settings.output_name != name {
            log::debug!("output name: '{}' -> '{name}'", self.settings.output_name);
            self.settings.output_name = name;
            self.modified();
        }
    }

    /// Sets the third-component value.
    ///
    /// Values are compared bitwise, so re-setting the same NaN is a no-op.
    pub fn set_default_z(&mut self, value: f64) {
        if self.settings.default_z.to_bits() != value.to_bits() {
            log::debug!("default z: {} -> {value}", self.settings.default_z);
            self.settings.default_z = value;
            self.modified();
        }
    }

    /// Replaces all settings at once.
    pub fn set_settings(&mut self, settings: FilterSettings) {
        if !same_settings(&self.settings, &settings) {
            self.settings = settings;
            self.modified();
        }
    }

    /// Marks the filter as changed.
    pub fn modified(&mut self) {
        self.modified = ModifiedTime::now();
    }

    /// Returns when the settings last changed.
    pub fn modified_time(&self) -> ModifiedTime {
        self.modified
    }

    /// Returns true if the settings changed since the last non-failing run.
    ///
    /// Input changes are tracked by the host, not here.
    pub fn needs_update(&self) -> bool {
        self.last_run.map_or(true, |run| self.modified > run)
    }

    /// Runs the conversion and logs its outcome.
    pub fn execute(&mut self, input: Option<&Dataset>) -> Result<Conversion, ConvertError> {
        match convert(input, &self.settings) {
            Ok(conversion) => {
                match &conversion.skipped {
                    Some(skipped) => log::warn!("{skipped}"),
                    None => log::info!(
                        "converted '{}' to '{}' ({} tuples)",
                        self.settings.field_name,
                        self.settings.output_name,
                        conversion
                            .output
                            .point_data()
                            .find(&self.settings.output_name)
                            .map_or(0, |a| a.num_tuples())
                    ),
                }
                self.last_run = Some(ModifiedTime::now());
                Ok(conversion)
            }
            Err(err) => {
                log::error!("{err}");
                Err(err)
            }
        }
    }

    /// Host entry point.
    ///
    /// Fills `output` and returns [`STATUS_SUCCESS`], or returns
    /// [`STATUS_FAILURE`] after which `output` must not be used.
    pub fn request_data(&mut self, input: Option<&Dataset>, output: &mut Dataset) -> i32 {
        if let Some(input) = input {
            *output = input.shallow_copy();
        }
        match self.execute(input) {
            Ok(conversion) => {
                *output = conversion.into_output();
                STATUS_SUCCESS
            }
            Err(_) => STATUS_FAILURE,
        }
    }
}

fn same_settings(a: &FilterSettings, b: &FilterSettings) -> bool {
    a.field_name == b.field_name
        && a.output_name == b.output_name
        && a.default_z.to_bits() == b.default_z.to_bits()
}
