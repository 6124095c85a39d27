//! Named point-data arrays.
//!
//! A [`DataArray`] is a flat buffer of values grouped into tuples of a fixed
//! number of components. Storage is typed, but every component can be read
//! back as `f64`, which is all a filter needs to consume an arbitrary input.

use glam::DVec3;

use crate::error::{DataError, Result};

/// The element type of an array's storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Float32,
    Float64,
    Int32,
    Int64,
    UInt8,
}

/// Typed flat storage for a [`DataArray`].
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayStorage {
    Float32(Vec<f32>),
    Float64(Vec<f64>),
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    UInt8(Vec<u8>),
}

impl ArrayStorage {
    /// Returns the number of scalar values held.
    pub fn len(&self) -> usize {
        match self {
            Self::Float32(v) => v.len(),
            Self::Float64(v) => v.len(),
            Self::Int32(v) => v.len(),
            Self::Int64(v) => v.len(),
            Self::UInt8(v) => v.len(),
        }
    }

    /// Returns true if no values are held.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element type.
    pub fn scalar_type(&self) -> ScalarType {
        match self {
            Self::Float32(_) => ScalarType::Float32,
            Self::Float64(_) => ScalarType::Float64,
            Self::Int32(_) => ScalarType::Int32,
            Self::Int64(_) => ScalarType::Int64,
            Self::UInt8(_) => ScalarType::UInt8,
        }
    }

    /// Reads the value at flat index `idx` widened to `f64`.
    #[allow(clippy::cast_precision_loss)]
    fn value(&self, idx: usize) -> f64 {
        match self {
            Self::Float32(v) => f64::from(v[idx]),
            Self::Float64(v) => v[idx],
            Self::Int32(v) => f64::from(v[idx]),
            Self::Int64(v) => v[idx] as f64,
            Self::UInt8(v) => f64::from(v[idx]),
        }
    }

    fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Float32(v) => bytemuck::cast_slice(v.as_slice()),
            Self::Float64(v) => bytemuck::cast_slice(v.as_slice()),
            Self::Int32(v) => bytemuck::cast_slice(v.as_slice()),
            Self::Int64(v) => bytemuck::cast_slice(v.as_slice()),
            Self::UInt8(v) => v.as_slice(),
        }
    }
}

/// A named array of fixed-size tuples attached to the points of a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct DataArray {
    name: String,
    num_components: usize,
    storage: ArrayStorage,
}

impl DataArray {
    /// Creates a new array from flat, tuple-major storage.
    ///
    /// Fails if `num_components` is zero or the value count is not a
    /// multiple of it.
    pub fn new(
        name: impl Into<String>,
        num_components: usize,
        storage: ArrayStorage,
    ) -> Result<Self> {
        if num_components == 0 {
            return Err(DataError::InvalidComponentCount(num_components));
        }
        let len = storage.len();
        if len % num_components != 0 {
            return Err(DataError::SizeMismatch {
                expected: len.next_multiple_of(num_components),
                actual: len,
            });
        }
        Ok(Self {
            name: name.into(),
            num_components,
            storage,
        })
    }

    /// Creates a `Float64` array from flat, tuple-major values.
    pub fn from_f64(
        name: impl Into<String>,
        num_components: usize,
        values: Vec<f64>,
    ) -> Result<Self> {
        Self::new(name, num_components, ArrayStorage::Float64(values))
    }

    /// Creates a 2-component `Float64` array from `[x, y]` pairs.
    pub fn from_pairs(name: impl Into<String>, pairs: &[[f64; 2]]) -> Self {
        Self {
            name: name.into(),
            num_components: 2,
            storage: ArrayStorage::Float64(pairs.iter().flatten().copied().collect()),
        }
    }

    /// Creates a 3-component `Float64` array from vectors.
    pub fn from_vectors(name: impl Into<String>, vectors: &[DVec3]) -> Self {
        Self {
            name: name.into(),
            num_components: 3,
            storage: ArrayStorage::Float64(vectors.iter().flat_map(|v| v.to_array()).collect()),
        }
    }

    /// Returns the array name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of components per tuple.
    pub fn num_components(&self) -> usize {
        self.num_components
    }

    /// Returns the number of tuples.
    pub fn num_tuples(&self) -> usize {
        self.storage.len() / self.num_components
    }

    /// Returns the storage element type.
    pub fn scalar_type(&self) -> ScalarType {
        self.storage.scalar_type()
    }

    /// Reads component `comp` of tuple `tuple` as `f64`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn component(&self, tuple: usize, comp: usize) -> f64 {
        assert!(
            comp < self.num_components,
            "component {comp} out of range for '{}' ({} components)",
            self.name,
            self.num_components
        );
        self.storage.value(tuple * self.num_components + comp)
    }

    /// Reads a whole tuple as `f64` values.
    pub fn tuple(&self, tuple: usize) -> Vec<f64> {
        (0..self.num_components)
            .map(|c| self.component(tuple, c))
            .collect()
    }

    /// Returns the raw storage bytes in native byte order.
    pub fn as_bytes(&self) -> &[u8] {
        self.storage.as_bytes()
    }

    /// Returns the tuples as vectors if this is a 3-component array.
    pub fn as_vectors(&self) -> Option<Vec<DVec3>> {
        if self.num_components != 3 {
            return None;
        }
        Some(
            (0..self.num_tuples())
                .map(|i| {
                    DVec3::new(
                        self.component(i, 0),
                        self.component(i, 1),
                        self.component(i, 2),
                    )
                })
                .collect(),
        )
    }
}
