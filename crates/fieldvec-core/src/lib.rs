//! Core data model for fieldvec.
//!
//! This crate provides the types pipeline filters operate on:
//! - [`Dataset`], a mesh container of shared [`Geometry`] plus [`PointData`]
//! - [`DataArray`], a named array of fixed-size tuples with typed storage
//! - [`FilterSettings`], the persisted configuration of the vector filter
//! - [`ModifiedTime`], the clock used to decide when a filter must re-run

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Accessors are plain getters
#![allow(clippy::must_use_candidate)]

pub mod array;
pub mod clock;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod point_data;
pub mod settings;

pub use array::{ArrayStorage, DataArray, ScalarType};
pub use clock::ModifiedTime;
pub use dataset::Dataset;
pub use error::{DataError, Result};
pub use geometry::{Cell, CellType, Geometry};
pub use point_data::PointData;
pub use settings::{FilterSettings, DEFAULT_OUTPUT_NAME};

// Re-export glam types for convenience
pub use glam::DVec3;
