//! Decode a flat, count-prefixed connectivity stream into per-face vertex lists.
//!
//! The stream holds zero or more polygons back to back, each encoded as
//! `[count, idx_0, ..., idx_{count-1}]` (the legacy VTK cell layout):
//!
//! ```rust
//! # fn try_main() -> Result<(), cell_lattice::mesh_error::LatticeError> {
//! use cell_lattice::algs::face_decode::decode_faces;
//! use cell_lattice::topology::VertexId;
//!
//! let faces = decode_faces(&[3, 0, 1, 2, 3, 1, 3, 2])?;
//! assert_eq!(faces.len(), 2);
//! assert_eq!(faces[1], [1, 3, 2].map(VertexId::new));
//! # Ok(())
//! # }
//! # try_main().unwrap();
//! ```

use crate::mesh_error::LatticeError;
use crate::topology::point::VertexId;

/// Ordered vertex indices of one polygon, in boundary order.
pub type Face = Vec<VertexId>;

/// Split `connectivity` into faces.
///
/// Fails with [`LatticeError::MalformedConnectivity`] as soon as a count
/// implies a face extending past the end of the buffer; nothing decoded
/// before that point is returned.
pub fn decode_faces(connectivity: &[usize]) -> Result<Vec<Face>, LatticeError> {
    let len = connectivity.len();
    let mut faces = Vec::new();
    let mut cursor = 0usize;
    while cursor < len {
        let count = connectivity[cursor];
        let end = cursor
            .checked_add(1)
            .and_then(|start| start.checked_add(count))
            .filter(|&end| end <= len)
            .ok_or(LatticeError::MalformedConnectivity {
                offset: cursor,
                count,
                len,
            })?;
        faces.push(
            connectivity[cursor + 1..end]
                .iter()
                .copied()
                .map(VertexId::new)
                .collect(),
        );
        cursor = end;
    }
    Ok(faces)
}
