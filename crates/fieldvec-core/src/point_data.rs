//! Ordered collection of point-data arrays.

use std::sync::Arc;

use crate::array::DataArray;

/// The arrays attached to the points of a dataset.
///
/// Arrays keep the order they were added in, which is the order lookups
/// scan. Arrays are shared by `Arc` so a shallow copy of a dataset costs
/// one pointer per array.
#[derive(Debug, Clone, Default)]
pub struct PointData {
    arrays: Vec<Arc<DataArray>>,
}

impl PointData {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collection from arrays in the given order.
    ///
    /// Duplicate names are kept as supplied; [`find`](Self::find) resolves
    /// them to the first one.
    pub fn from_arrays<I>(arrays: I) -> Self
    where
        I: IntoIterator<Item = DataArray>,
    {
        Self {
            arrays: arrays.into_iter().map(Arc::new).collect(),
        }
    }

    /// Returns the number of arrays.
    pub fn len(&self) -> usize {
        self.arrays.len()
    }

    /// Returns true if there are no arrays.
    pub fn is_empty(&self) -> bool {
        self.arrays.is_empty()
    }

    /// Gets the array at `index` in enumeration order.
    pub fn array(&self, index: usize) -> Option<&Arc<DataArray>> {
        self.arrays.get(index)
    }

    /// Finds the first array whose name matches exactly.
    pub fn find(&self, name: &str) -> Option<&Arc<DataArray>> {
        self.arrays.iter().find(|a| a.name() == name)
    }

    /// Checks if an array with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Attaches an array.
    ///
    /// An existing array with the same name is replaced in place; otherwise
    /// the array is appended.
    pub fn add_array(&mut self, array: impl Into<Arc<DataArray>>) {
        let array = array.into();
        match self.arrays.iter().position(|a| a.name() == array.name()) {
            Some(idx) => {
                log::debug!("replacing point array '{}'", array.name());
                self.arrays[idx] = array;
            }
            None => self.arrays.push(array),
        }
    }

    /// Removes the first array with the given name.
    pub fn remove_array(&mut self, name: &str) -> Option<Arc<DataArray>> {
        let idx = self.arrays.iter().position(|a| a.name() == name)?;
        Some(self.arrays.remove(idx))
    }

    /// Returns an iterator over all arrays.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<DataArray>> {
        self.arrays.iter()
    }

    /// Returns the array names in enumeration order.
    pub fn names(&self) -> Vec<&str> {
        self.arrays.iter().map(|a| a.name()).collect()
    }
}
