//! The `Lattice` graph and the one-shot conversion that builds it.
//!
//! A conversion walks a strictly linear, one-way chain of stages:
//!
//! ```text
//! Conversion (unloaded) --decode--> Decoded --extract_edges--> EdgesExtracted --assemble--> Lattice
//! ```
//!
//! Each transition consumes the previous stage, so a failed conversion cannot
//! be resumed; the caller re-runs the whole chain with corrected input. The
//! [`convert`] family of functions runs every stage in one call.
//!
//! # Example
//! ```rust
//! # fn try_main() -> Result<(), cell_lattice::mesh_error::LatticeError> {
//! use cell_lattice::lattice::convert;
//! use cell_lattice::topology::{CellId, Point};
//!
//! let points = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)].map(Point::from);
//! let lattice = convert(&points, &[3, 0, 1, 2, 3, 0, 2, 3])?;
//! assert_eq!(lattice.num_vertices(), 4);
//! assert_eq!(lattice.num_edges(), 5);
//! assert_eq!(lattice.cell(CellId::new(1)).map(|c| c.edges.len()), Some(3));
//! # Ok(())
//! # }
//! # try_main().unwrap();
//! ```

use crate::algs::assemble::{Assembled, assemble};
use crate::algs::edge_extract::{EdgeTable, canonical_pair, extract_edges};
use crate::algs::face_decode::{Face, decode_faces};
use crate::io::MeshSource;
use crate::mesh_error::LatticeError;
use crate::topology::entity::{Cell, Edge, Point, Vertex};
use crate::topology::point::{CellId, EdgeId, VertexId};
use crate::topology::validation::ConversionOptions;
use hashbrown::HashMap;
use std::collections::BTreeMap;

/// Vertex, edge and cell maps keyed by id.
pub type LatticeParts = (
    BTreeMap<VertexId, Vertex>,
    BTreeMap<EdgeId, Edge>,
    BTreeMap<CellId, Cell>,
);

/// Frozen vertex/edge/cell graph of a polygonal mesh.
///
/// The canonical-pair index behind [`Lattice::edge_between`] is not
/// serialized; it is rebuilt from the edges on deserialization.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "LatticeData")]
pub struct Lattice {
    vertices: BTreeMap<VertexId, Vertex>,
    edges: BTreeMap<EdgeId, Edge>,
    cells: BTreeMap<CellId, Cell>,
    degenerate: Vec<CellId>,
    #[serde(skip)]
    pair_index: HashMap<(VertexId, VertexId), EdgeId>,
}

/// Serialized form of a [`Lattice`].
#[derive(serde::Deserialize)]
struct LatticeData {
    vertices: BTreeMap<VertexId, Vertex>,
    edges: BTreeMap<EdgeId, Edge>,
    cells: BTreeMap<CellId, Cell>,
    degenerate: Vec<CellId>,
}

impl From<LatticeData> for Lattice {
    fn from(data: LatticeData) -> Self {
        let pair_index = data
            .edges
            .values()
            .map(|e| (canonical_pair(e.a, e.b), e.id))
            .collect();
        Lattice {
            vertices: data.vertices,
            edges: data.edges,
            cells: data.cells,
            degenerate: data.degenerate,
            pair_index,
        }
    }
}

impl Lattice {
    pub fn vertices(&self) -> &BTreeMap<VertexId, Vertex> {
        &self.vertices
    }

    pub fn edges(&self) -> &BTreeMap<EdgeId, Edge> {
        &self.edges
    }

    pub fn cells(&self) -> &BTreeMap<CellId, Cell> {
        &self.cells
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(&id)
    }

    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(&id)
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    /// Cells kept despite having fewer than three vertices.
    pub fn degenerate_cells(&self) -> &[CellId] {
        &self.degenerate
    }

    /// True when the lattice has no vertices and no cells.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.cells.is_empty()
    }

    /// The edge joining `a` and `b`, in either order.
    pub fn edge_between(&self, a: VertexId, b: VertexId) -> Option<&Edge> {
        self.pair_index
            .get(&canonical_pair(a, b))
            .and_then(|id| self.edges.get(id))
    }

    /// True when the edge exists and exactly one cell uses it.
    pub fn is_boundary_edge(&self, id: EdgeId) -> bool {
        self.edges.get(&id).is_some_and(Edge::is_boundary)
    }

    /// Edges used by exactly one cell, in id order.
    pub fn boundary_edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.values().filter(|e| e.is_boundary())
    }

    /// Split into the `(vertices, edges, cells)` triple.
    pub fn into_parts(self) -> LatticeParts {
        (self.vertices, self.edges, self.cells)
    }
}

impl From<Assembled> for Lattice {
    fn from(a: Assembled) -> Self {
        LatticeData {
            vertices: a.vertices,
            edges: a.edges,
            cells: a.cells,
            degenerate: a.degenerate,
        }
        .into()
    }
}

/// Unloaded stage: raw points and connectivity, nothing decoded yet.
#[derive(Debug, Clone, Copy)]
pub struct Conversion<'a> {
    points: &'a [Point],
    connectivity: &'a [usize],
}

/// Connectivity decoded into faces.
#[derive(Debug, Clone)]
pub struct Decoded<'a> {
    points: &'a [Point],
    faces: Vec<Face>,
}

/// Faces plus their deduplicated edge table.
#[derive(Debug, Clone)]
pub struct EdgesExtracted<'a> {
    points: &'a [Point],
    faces: Vec<Face>,
    edges: EdgeTable,
}

impl<'a> Conversion<'a> {
    pub fn new(points: &'a [Point], connectivity: &'a [usize]) -> Self {
        Self {
            points,
            connectivity,
        }
    }

    pub fn decode(self) -> Result<Decoded<'a>, LatticeError> {
        let faces = decode_faces(self.connectivity)?;
        log::debug!(
            "lattice: decoded {} faces from {} connectivity values",
            faces.len(),
            self.connectivity.len()
        );
        Ok(Decoded {
            points: self.points,
            faces,
        })
    }
}

impl<'a> Decoded<'a> {
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn extract_edges(self) -> EdgesExtracted<'a> {
        let edges = extract_edges(&self.faces);
        log::debug!("lattice: extracted {} distinct edges", edges.len());
        EdgesExtracted {
            points: self.points,
            faces: self.faces,
            edges,
        }
    }
}

impl EdgesExtracted<'_> {
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn edge_table(&self) -> &EdgeTable {
        &self.edges
    }

    pub fn assemble(self, options: ConversionOptions) -> Result<Lattice, LatticeError> {
        if self.points.is_empty() || self.faces.is_empty() {
            log::info!(
                "lattice: empty mesh ({} points, {} faces)",
                self.points.len(),
                self.faces.len()
            );
        }
        let lattice = Lattice::from(assemble(self.points, &self.faces, &self.edges, options)?);
        log::debug!(
            "lattice: assembled {} vertices, {} edges, {} cells",
            lattice.num_vertices(),
            lattice.num_edges(),
            lattice.num_cells()
        );
        Ok(lattice)
    }
}

/// Convert raw points and connectivity with default options.
pub fn convert(points: &[Point], connectivity: &[usize]) -> Result<Lattice, LatticeError> {
    convert_with(points, connectivity, ConversionOptions::default())
}

/// Convert raw points and connectivity.
pub fn convert_with(
    points: &[Point],
    connectivity: &[usize],
    options: ConversionOptions,
) -> Result<Lattice, LatticeError> {
    Conversion::new(points, connectivity)
        .decode()?
        .extract_edges()
        .assemble(options)
}

/// Convert whatever `source` supplies.
pub fn convert_source<S: MeshSource + ?Sized>(
    source: &S,
    options: ConversionOptions,
) -> Result<Lattice, LatticeError> {
    let points = source.points()?;
    let connectivity = source.connectivity()?;
    convert_with(points, connectivity, options)
}
