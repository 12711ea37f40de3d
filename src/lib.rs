//! # cell-lattice
//!
//! cell-lattice converts a polygonal mesh, given as point coordinates plus a flat,
//! count-prefixed connectivity array, into an explicit graph of vertices, edges and
//! cells with stable integer identifiers. The graph is the working data structure for
//! downstream cell-mesh analysis (e.g. force inference over epithelial tissue meshes).
//!
//! ## Features
//! - Cursor-driven decoding of legacy-VTK style `[count, i0, i1, ...]` connectivity
//! - Deterministic edge extraction: ids follow first encounter, never hashing order
//! - Typed `VertexId`/`EdgeId`/`CellId` handles and serde-serializable entity records
//! - Readers for ASCII legacy VTK (`.vtk`) and VTK XML (`.vtu`, `.vtp`) meshes
//!
//! ## Determinism
//!
//! Converting the same input twice yields identical id assignments for vertices, edges
//! and cells. Vertex `i` is input point `i`, cell `i` is the `i`-th decoded face, and
//! edge ids are handed out as each distinct canonical pair is first met while scanning
//! faces in order and each face in boundary order.
//!
//! ## Usage
//! ```rust
//! # fn try_main() -> Result<(), cell_lattice::mesh_error::LatticeError> {
//! use cell_lattice::prelude::*;
//!
//! let mesh = RawMesh::new(
//!     vec![Point::xy(0.0, 0.0), Point::xy(1.0, 0.0), Point::xy(1.0, 1.0), Point::xy(0.0, 1.0)],
//!     vec![4, 0, 1, 2, 3],
//! );
//! let lattice = convert_source(&mesh, ConversionOptions::default())?;
//! let (vertices, edges, cells) = lattice.into_parts();
//! assert_eq!(vertices.len(), 4);
//! assert_eq!(edges[&EdgeId::new(3)].vertices(), (VertexId::new(0), VertexId::new(3)));
//! assert_eq!(cells[&CellId::new(0)].edges.len(), 4);
//! # Ok(())
//! # }
//! # try_main().unwrap();
//! ```
//!
//! Logging goes through the `log` facade; install any logger to see stage transitions
//! (`debug`) and degenerate-face warnings (`warn`).

pub mod algs;
pub mod io;
pub mod lattice;
pub mod mesh_error;
pub mod topology;

pub use lattice::{Lattice, convert, convert_source, convert_with};
pub use mesh_error::LatticeError;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::io::{MeshReader, MeshSource, RawMesh, load};
    pub use crate::lattice::{Conversion, Lattice, convert, convert_source, convert_with};
    pub use crate::mesh_error::LatticeError;
    pub use crate::topology::{
        Cell, CellId, CellShape, ConversionOptions, DegenerateHandling, Edge, EdgeId, Point,
        Vertex, VertexId,
    };
}
