//! Strong, zero-cost handles for lattice entities.
//!
//! Vertices, edges and cells each get their own 0-based identifier type so
//! that an edge id can never be passed where a vertex id is expected. All
//! three wrap a `usize`:
//!
//! - [`VertexId`] is the position of the point in the input coordinate array.
//! - [`EdgeId`] is the first-encounter rank of a canonical vertex pair.
//! - [`CellId`] is the position of the face in the decoded connectivity stream.
//!
//! Each id implements `Debug` as `VertexId(3)` and `Display` as the bare
//! number, orders and hashes like its raw value, and serializes transparently.

use std::fmt;

macro_rules! lattice_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        #[repr(transparent)]
        pub struct $name(usize);

        impl $name {
            /// Wraps a raw 0-based index.
            #[inline]
            pub const fn new(raw: usize) -> Self {
                $name(raw)
            }

            /// Returns the raw 0-based index.
            #[inline]
            pub const fn get(self) -> usize {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.0).finish()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<usize> for $name {
            #[inline]
            fn from(raw: usize) -> Self {
                $name(raw)
            }
        }
    };
}

lattice_id!(
    /// Identifier of a vertex; equal to the index of its input point.
    VertexId
);
lattice_id!(
    /// Identifier of an undirected edge.
    EdgeId
);
lattice_id!(
    /// Identifier of a cell; equal to the index of its face in the connectivity stream.
    CellId
);
