//! Lattice entity types.
//!
//! This module provides the value types the conversion pipeline produces:
//! - Typed 0-based identifiers for vertices, edges and cells
//! - The `Point` input record and the `Vertex`/`Edge`/`Cell` output records
//! - Cell shape classification and the options controlling conversion

pub mod cell_type;
pub mod entity;
pub mod point;
pub mod validation;

pub use cell_type::CellShape;
pub use entity::{Cell, Edge, Point, Vertex};
pub use point::{CellId, EdgeId, VertexId};
pub use validation::{ConversionOptions, DegenerateHandling};
