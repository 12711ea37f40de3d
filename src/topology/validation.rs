//! Conversion options and the per-cell validation checks they control.

use crate::mesh_error::LatticeError;
use crate::topology::cell_type::CellShape;
use crate::topology::point::{CellId, VertexId};

/// Optional toggles for a mesh-to-lattice conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionOptions {
    /// How to handle faces with fewer than three vertices.
    pub degenerate: DegenerateHandling,
    /// Keep the third coordinate of 3-component points on each `Vertex`.
    pub keep_z: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            degenerate: DegenerateHandling::Warn,
            keep_z: false,
        }
    }
}

impl ConversionOptions {
    /// Reject degenerate faces and keep every coordinate.
    pub fn strict() -> Self {
        Self {
            degenerate: DegenerateHandling::Error,
            keep_z: true,
        }
    }

    pub fn with_degenerate(mut self, handling: DegenerateHandling) -> Self {
        self.degenerate = handling;
        self
    }

    pub fn with_keep_z(mut self, keep_z: bool) -> Self {
        self.keep_z = keep_z;
        self
    }
}

/// Behavior for faces with fewer than three vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegenerateHandling {
    /// Keep the cell without logging.
    Ignore,
    /// Keep the cell and log a warning.
    #[default]
    Warn,
    /// Abort the conversion with `LatticeError::DegenerateFace`.
    Error,
}

/// Ensure every vertex index of `face` is below `vertex_count`.
pub fn check_vertex_references(
    cell: CellId,
    face: &[VertexId],
    vertex_count: usize,
) -> Result<(), LatticeError> {
    match face.iter().find(|v| v.get() >= vertex_count) {
        Some(&vertex) => Err(LatticeError::DanglingVertexReference {
            cell,
            vertex,
            vertex_count,
        }),
        None => Ok(()),
    }
}

/// Apply `handling` to a cell of the given shape.
///
/// Returns `Ok(true)` when the cell is degenerate and was kept.
pub fn check_degenerate(
    cell: CellId,
    shape: CellShape,
    handling: DegenerateHandling,
) -> Result<bool, LatticeError> {
    let CellShape::Degenerate(n) = shape else {
        return Ok(false);
    };
    match handling {
        DegenerateHandling::Ignore => {}
        DegenerateHandling::Warn => {
            log::warn!("Degenerate face detected: cell={cell} vertices={n}");
        }
        DegenerateHandling::Error => {
            return Err(LatticeError::DegenerateFace { cell, vertices: n });
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face(raw: &[usize]) -> Vec<VertexId> {
        raw.iter().copied().map(VertexId::new).collect()
    }

    #[test]
    fn in_range_references_pass() {
        assert!(check_vertex_references(CellId::new(0), &face(&[0, 1, 3]), 4).is_ok());
    }

    #[test]
    fn first_out_of_range_reference_is_reported() {
        let err = check_vertex_references(CellId::new(5), &face(&[0, 4, 99]), 4).unwrap_err();
        assert_eq!(
            err,
            LatticeError::DanglingVertexReference {
                cell: CellId::new(5),
                vertex: VertexId::new(4),
                vertex_count: 4,
            }
        );
    }

    #[test]
    fn degenerate_handling_modes() {
        let c = CellId::new(1);
        let shape = CellShape::Degenerate(2);
        assert_eq!(check_degenerate(c, shape, DegenerateHandling::Ignore), Ok(true));
        assert_eq!(check_degenerate(c, shape, DegenerateHandling::Warn), Ok(true));
        assert_eq!(
            check_degenerate(c, shape, DegenerateHandling::Error),
            Err(LatticeError::DegenerateFace {
                cell: c,
                vertices: 2
            })
        );
        assert_eq!(
            check_degenerate(c, CellShape::Triangle, DegenerateHandling::Error),
            Ok(false)
        );
    }

    #[test]
    fn default_and_strict_options() {
        let d = ConversionOptions::default();
        assert_eq!(d.degenerate, DegenerateHandling::Warn);
        assert!(!d.keep_z);
        let s = ConversionOptions::strict();
        assert_eq!(s.degenerate, DegenerateHandling::Error);
        assert!(s.keep_z);
        let custom = ConversionOptions::default()
            .with_degenerate(DegenerateHandling::Ignore)
            .with_keep_z(true);
        assert_eq!(custom.degenerate, DegenerateHandling::Ignore);
        assert!(custom.keep_z);
    }
}
