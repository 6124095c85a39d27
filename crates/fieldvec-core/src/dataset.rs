//! The mesh container handed between pipeline stages.

use std::sync::Arc;

use crate::array::DataArray;
use crate::error::{DataError, Result};
use crate::geometry::Geometry;
use crate::point_data::PointData;

/// An unstructured dataset: shared geometry plus named point-data arrays.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    geometry: Arc<Geometry>,
    point_data: PointData,
}

impl Dataset {
    /// Creates a dataset with the given geometry and no arrays.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry: Arc::new(geometry),
            point_data: PointData::new(),
        }
    }

    /// Creates a dataset from geometry and existing point data.
    ///
    /// Every array must hold one tuple per point.
    pub fn with_point_data(geometry: Geometry, point_data: PointData) -> Result<Self> {
        let num_points = geometry.num_points();
        if let Some(bad) = point_data.iter().find(|a| a.num_tuples() != num_points) {
            return Err(DataError::SizeMismatch {
                expected: num_points,
                actual: bad.num_tuples(),
            });
        }
        Ok(Self {
            geometry: Arc::new(geometry),
            point_data,
        })
    }

    /// Attaches a point array after checking its tuple count.
    pub fn with_point_array(mut self, array: DataArray) -> Result<Self> {
        if array.num_tuples() != self.num_points() {
            return Err(DataError::SizeMismatch {
                expected: self.num_points(),
                actual: array.num_tuples(),
            });
        }
        self.point_data.add_array(array);
        Ok(self)
    }

    /// Returns a new container sharing this one's geometry and arrays.
    pub fn shallow_copy(&self) -> Self {
        Self {
            geometry: Arc::clone(&self.geometry),
            point_data: self.point_data.clone(),
        }
    }

    /// Returns the geometry.
    pub fn geometry(&self) -> &Arc<Geometry> {
        &self.geometry
    }

    /// Returns the number of points.
    pub fn num_points(&self) -> usize {
        self.geometry.num_points()
    }

    /// Returns the point data.
    pub fn point_data(&self) -> &PointData {
        &self.point_data
    }

    /// Returns the point data mutably.
    pub fn point_data_mut(&mut self) -> &mut PointData {
        &mut self.point_data
    }
}
