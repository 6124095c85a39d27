//! fieldvec: a pipeline filter that turns a 2-component point field into a
//! 3-component vector field.
//!
//! The filter reads a named 2-component point array, appends a new
//! 3-component array `(x, y, z)` with a constant `z`, and passes every other
//! array and the geometry through by reference.
//!
//! # Quick Start
//!
//! ```
//! use fieldvec::*;
//!
//! let input = Dataset::new(Geometry::from_points(vec![DVec3::ZERO, DVec3::X]))
//!     .with_point_array(DataArray::from_pairs("Vel", &[[1.0, 2.0], [3.0, 4.0]]))
//!     .unwrap();
//!
//! let settings = FilterSettings::for_field("Vel")
//!     .with_output_name("Out")
//!     .with_default_z(5.0);
//! let output = convert(Some(&input), &settings).unwrap().into_output();
//!
//! let out = output.point_data().find("Out").unwrap();
//! assert_eq!(out.tuple(1), vec![3.0, 4.0, 5.0]);
//! ```
//!
//! Hosts that drive filters through an integer status use
//! [`FieldToVectorFilter::request_data`].

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod convert;
pub mod error;
pub mod filter;

pub use convert::{convert, Conversion};
pub use error::{ConvertError, ErrorKind, Skipped};
pub use filter::{FieldToVectorFilter, STATUS_FAILURE, STATUS_SUCCESS};

// Re-export core types
pub use fieldvec_core::{
    ArrayStorage, Cell, CellType, DataArray, DataError, Dataset, FilterSettings, Geometry,
    ModifiedTime, PointData, ScalarType, DEFAULT_OUTPUT_NAME, DVec3,
};
