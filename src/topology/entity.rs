//! Input coordinates and the three lattice entity records.
//!
//! All records are plain values: they are created once by the graph
//! assembler and never mutated afterwards.

use crate::topology::cell_type::CellShape;
use crate::topology::point::{CellId, EdgeId, VertexId};

/// A coordinate tuple supplied by a mesh source.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    /// Third component, when the source provides one.
    pub z: Option<f64>,
}

impl Point {
    /// Two-component point.
    pub const fn xy(x: f64, y: f64) -> Self {
        Point { x, y, z: None }
    }

    /// Three-component point.
    pub const fn xyz(x: f64, y: f64, z: f64) -> Self {
        Point { x, y, z: Some(z) }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::xy(x, y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Point::xy(x, y)
    }
}

impl From<[f64; 3]> for Point {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Point::xyz(x, y, z)
    }
}

/// A mesh vertex, identified by the index of its input point.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Vertex {
    pub id: VertexId,
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
}

/// An undirected edge between two vertices, stored canonically with `a <= b`.
///
/// `a == b` only for a face that repeats a vertex consecutively (e.g.
/// `[2, 2, 5]`), which yields the self-pair `(2, 2)`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub a: VertexId,
    pub b: VertexId,
    /// Cells whose boundary uses this edge, ascending and without repeats.
    pub cells: Vec<CellId>,
}

impl Edge {
    /// The canonical `(a, b)` pair.
    #[inline]
    pub fn vertices(&self) -> (VertexId, VertexId) {
        (self.a, self.b)
    }

    /// True when exactly one cell uses this edge.
    pub fn is_boundary(&self) -> bool {
        self.cells.len() == 1
    }

    /// Given one endpoint, returns the other.
    pub fn other(&self, v: VertexId) -> Option<VertexId> {
        if v == self.a {
            Some(self.b)
        } else if v == self.b {
            Some(self.a)
        } else {
            None
        }
    }
}

/// A polygonal cell.
///
/// `edges[i]` is the edge between `vertices[i]` and `vertices[(i + 1) % n]`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Cell {
    pub id: CellId,
    pub vertices: Vec<VertexId>,
    pub edges: Vec<EdgeId>,
    pub shape: CellShape,
}

impl Cell {
    pub fn is_degenerate(&self) -> bool {
        self.shape.is_degenerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_conversions_keep_dimension() {
        assert_eq!(Point::from((1.0, 2.0)), Point::xy(1.0, 2.0));
        assert_eq!(Point::from([1.0, 2.0, 3.0]).z, Some(3.0));
        assert_eq!(Point::from([1.0, 2.0]).z, None);
    }

    #[test]
    fn edge_other_endpoint() {
        let e = Edge {
            id: EdgeId::new(0),
            a: VertexId::new(1),
            b: VertexId::new(4),
            cells: vec![CellId::new(0)],
        };
        assert_eq!(e.other(VertexId::new(1)), Some(VertexId::new(4)));
        assert_eq!(e.other(VertexId::new(4)), Some(VertexId::new(1)));
        assert_eq!(e.other(VertexId::new(2)), None);
        assert!(e.is_boundary());
    }
}
