//! Points and cells of a mesh.
//!
//! Geometry is carried through filters untouched; it only needs to be
//! cheap to share between a dataset and its shallow copies.

use glam::DVec3;

/// Cell shapes an unstructured grid may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellType {
    Vertex,
    Line,
    Triangle,
    Quad,
    Tetra,
    Hexahedron,
    Polygon,
}

/// A single cell: its shape plus indices into the point list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub cell_type: CellType,
    pub connectivity: Vec<u32>,
}

impl Cell {
    /// Creates a new cell.
    pub fn new(cell_type: CellType, connectivity: Vec<u32>) -> Self {
        Self {
            cell_type,
            connectivity,
        }
    }
}

/// Point coordinates and cell topology.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geometry {
    points: Vec<DVec3>,
    cells: Vec<Cell>,
}

impl Geometry {
    /// Creates geometry from points and cells.
    pub fn new(points: Vec<DVec3>, cells: Vec<Cell>) -> Self {
        Self { points, cells }
    }

    /// Creates geometry with points only.
    pub fn from_points(points: Vec<DVec3>) -> Self {
        Self::new(points, Vec::new())
    }

    /// Returns the point coordinates.
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Returns the cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the number of points.
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Returns the number of cells.
    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }
}
