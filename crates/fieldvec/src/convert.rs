//! The field-to-vector conversion.

use fieldvec_core::{DataArray, Dataset, FilterSettings};
use glam::DVec3;

use crate::error::{ConvertError, Skipped};

/// The result of a conversion that did not fail.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Shallow copy of the input, plus the vector array unless skipped.
    pub output: Dataset,
    /// Set when the run was a benign no-op.
    pub skipped: Option<Skipped>,
}

impl Conversion {
    /// Returns true if a vector array was attached.
    pub fn is_converted(&self) -> bool {
        self.skipped.is_none()
    }

    /// Consumes the conversion and returns the output dataset.
    pub fn into_output(self) -> Dataset {
        self.output
    }
}

/// Appends a 3-component vector array built from a 2-component point array.
///
/// The output shares the input's geometry and arrays. Tuple `i` of the new
/// array is `(src[i].0, src[i].1, default_z)`. When several arrays share the
/// source name, the first in enumeration order is used. An existing array
/// with the output name is replaced.
pub fn convert(
    input: Option<&Dataset>,
    settings: &FilterSettings,
) -> Result<Conversion, ConvertError> {
    let input = input.ok_or(ConvertError::MissingInput)?;
    let mut output = input.shallow_copy();

    if !settings.is_enabled() {
        return Ok(Conversion {
            output,
            skipped: Some(Skipped::NoFieldConfigured),
        });
    }

    let source = input
        .point_data()
        .find(&settings.field_name)
        .ok_or_else(|| ConvertError::FieldNotFound(settings.field_name.clone()))?;

    if source.num_components() != 2 {
        return Err(ConvertError::WrongComponentCount {
            field: settings.field_name.clone(),
            components: source.num_components(),
        });
    }

    if source.num_tuples() == 0 {
        return Ok(Conversion {
            output,
            skipped: Some(Skipped::EmptyField(settings.field_name.clone())),
        });
    }

    let vectors = extend_to_vectors(source, settings.default_z);
    output
        .point_data_mut()
        .add_array(DataArray::from_vectors(&settings.output_name, &vectors));

    Ok(Conversion {
        output,
        skipped: None,
    })
}

fn extend_to_vectors(source: &DataArray, z: f64) -> Vec<DVec3> {
    (0..source.num_tuples())
        .map(|i| DVec3::new(source.component(i, 0), source.component(i, 1), z))
        .collect()
}
