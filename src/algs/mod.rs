//! Conversion pipeline stages: face decoding, edge extraction, graph assembly.

pub mod assemble;
pub mod edge_extract;
pub mod face_decode;

pub use assemble::assemble;
pub use edge_extract::{EdgeTable, canonical_pair, extract_edges};
pub use face_decode::{Face, decode_faces};
