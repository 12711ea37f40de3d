//! LatticeError: Unified error type for cell-lattice public APIs
//!
//! Every fallible operation in the crate (reading a mesh source, decoding the
//! connectivity stream, assembling the graph) reports failure through this
//! type. Failures are fatal for the conversion call that produced them; no
//! partial graph is ever returned alongside an error.

use crate::topology::point::{CellId, VertexId};
use thiserror::Error;

/// Unified error type for cell-lattice operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LatticeError {
    /// The mesh source could not supply points or connectivity.
    #[error("Mesh source unavailable: {0}")]
    SourceUnavailable(String),
    /// A count field implies a face extending past the end of the connectivity buffer.
    #[error(
        "Malformed connectivity: count {count} at offset {offset} runs past the end of a buffer of length {len}"
    )]
    MalformedConnectivity {
        offset: usize,
        count: usize,
        len: usize,
    },
    /// A face references a vertex index outside `[0, vertex_count)`.
    #[error("Cell {cell} references vertex {vertex}, but only {vertex_count} vertices exist")]
    DanglingVertexReference {
        cell: CellId,
        vertex: VertexId,
        vertex_count: usize,
    },
    /// A face with fewer than three vertices, when degenerate faces are treated as errors.
    #[error("Cell {cell} is degenerate: {vertices} vertices (need at least 3)")]
    DegenerateFace { cell: CellId, vertices: usize },
    /// An edge table handed to the assembler lacks a boundary segment of a cell.
    #[error("Edge table has no edge {a}-{b} on the boundary of cell {cell}")]
    MissingEdge {
        cell: CellId,
        a: VertexId,
        b: VertexId,
    },
}

impl From<std::io::Error> for LatticeError {
    fn from(err: std::io::Error) -> Self {
        LatticeError::SourceUnavailable(err.to_string())
    }
}
