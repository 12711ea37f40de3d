//! Derive the deduplicated set of undirected edges implied by face boundaries.
//!
//! Each face `v[0..n]` contributes the `n` boundary pairs
//! `(v[i], v[(i + 1) % n])`, so the last vertex closes the polygon back to the
//! first. Pairs are canonicalized to `(min, max)` and deduplicated through a
//! first-seen ordered map: edge ids follow the order in which each distinct
//! pair is first met, scanning faces in input order and each face in boundary
//! order. The result never depends on hashing order.

use crate::algs::face_decode::Face;
use crate::topology::point::{CellId, EdgeId, VertexId};
use hashbrown::HashMap;

/// Canonical `(min, max)` form of an undirected vertex pair.
#[inline]
pub fn canonical_pair(a: VertexId, b: VertexId) -> (VertexId, VertexId) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Iterate the boundary pairs of `face` in boundary order, wrapping around.
///
/// Faces with fewer than two vertices have no boundary.
pub fn boundary_pairs(face: &[VertexId]) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
    let n = if face.len() < 2 { 0 } else { face.len() };
    (0..n).map(move |i| (face[i], face[(i + 1) % n]))
}

/// Edges in first-encounter order, with the cells that produced each one.
#[derive(Debug, Default, Clone)]
pub struct EdgeTable {
    pairs: Vec<(VertexId, VertexId)>,
    cells: Vec<Vec<CellId>>,
    index: HashMap<(VertexId, VertexId), EdgeId>,
}

impl EdgeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `cell` has the segment `a`–`b` on its boundary.
    ///
    /// Returns the id of the (possibly pre-existing) edge.
    pub fn insert(&mut self, cell: CellId, a: VertexId, b: VertexId) -> EdgeId {
        let key = canonical_pair(a, b);
        let id = *self.index.entry(key).or_insert_with(|| {
            self.pairs.push(key);
            self.cells.push(Vec::new());
            EdgeId::new(self.pairs.len() - 1)
        });
        let users = &mut self.cells[id.get()];
        if users.last() != Some(&cell) {
            users.push(cell);
        }
        id
    }

    /// Id of the edge between `a` and `b`, in either order.
    pub fn get(&self, a: VertexId, b: VertexId) -> Option<EdgeId> {
        self.index.get(&canonical_pair(a, b)).copied()
    }

    /// Canonical pair of the edge with the given id.
    pub fn pair(&self, id: EdgeId) -> Option<(VertexId, VertexId)> {
        self.pairs.get(id.get()).copied()
    }

    /// Cells using the edge with the given id, ascending.
    pub fn cells_of(&self, id: EdgeId) -> &[CellId] {
        self.cells.get(id.get()).map_or(&[], Vec::as_slice)
    }

    /// `(id, canonical pair)` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (EdgeId, (VertexId, VertexId))> + '_ {
        self.pairs
            .iter()
            .enumerate()
            .map(|(i, &pair)| (EdgeId::new(i), pair))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Build the edge table for `faces`; face `i` is cell `i`.
pub fn extract_edges(faces: &[Face]) -> EdgeTable {
    let mut table = EdgeTable::new();
    for (i, face) in faces.iter().enumerate() {
        let cell = CellId::new(i);
        for (a, b) in boundary_pairs(face) {
            table.insert(cell, a, b);
        }
    }
    table
}
