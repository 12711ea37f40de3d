//! Shape classification for polygonal cells.

/// Polygon shape of a cell, derived from its vertex count.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum CellShape {
    /// Fewer than three vertices; carries the actual count (0, 1 or 2).
    Degenerate(usize),
    /// Three vertices.
    Triangle,
    /// Four vertices.
    Quadrilateral,
    /// Polygon with `n >= 5` vertices.
    Polygon(usize),
}

impl CellShape {
    /// Classifies a face by the number of vertices on its boundary.
    pub fn from_vertex_count(n: usize) -> Self {
        match n {
            0..=2 => CellShape::Degenerate(n),
            3 => CellShape::Triangle,
            4 => CellShape::Quadrilateral,
            n => CellShape::Polygon(n),
        }
    }

    /// Number of boundary vertices.
    pub fn vertex_count(self) -> usize {
        match self {
            CellShape::Degenerate(n) | CellShape::Polygon(n) => n,
            CellShape::Triangle => 3,
            CellShape::Quadrilateral => 4,
        }
    }

    pub fn is_degenerate(self) -> bool {
        matches!(self, CellShape::Degenerate(_))
    }
}
