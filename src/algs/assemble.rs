//! Assemble vertex, edge and cell maps from points, faces and an edge table.
//!
//! Vertex references are validated here, against the completed vertex map:
//! any face index outside `[0, vertex_count)` aborts assembly with
//! [`LatticeError::DanglingVertexReference`] and no maps are returned.

use crate::algs::edge_extract::{EdgeTable, boundary_pairs};
use crate::algs::face_decode::Face;
use crate::mesh_error::LatticeError;
use crate::topology::cell_type::CellShape;
use crate::topology::entity::{Cell, Edge, Point, Vertex};
use crate::topology::point::{CellId, EdgeId, VertexId};
use crate::topology::validation::{
    ConversionOptions, check_degenerate, check_vertex_references,
};
use std::collections::BTreeMap;

/// The three entity maps plus the cells flagged as degenerate.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Assembled {
    pub vertices: BTreeMap<VertexId, Vertex>,
    pub edges: BTreeMap<EdgeId, Edge>,
    pub cells: BTreeMap<CellId, Cell>,
    pub degenerate: Vec<CellId>,
}

/// Build the entity maps. Face `i` becomes cell `i`.
pub fn assemble(
    points: &[Point],
    faces: &[Face],
    edge_table: &EdgeTable,
    options: ConversionOptions,
) -> Result<Assembled, LatticeError> {
    let vertices = build_vertices(points, options.keep_z);
    let vertex_count = vertices.len();

    let mut edges = BTreeMap::new();
    for (id, (a, b)) in edge_table.iter() {
        edges.insert(
            id,
            Edge {
                id,
                a,
                b,
                cells: edge_table.cells_of(id).to_vec(),
            },
        );
    }

    let mut cells = BTreeMap::new();
    let mut degenerate = Vec::new();
    for (i, face) in faces.iter().enumerate() {
        let id = CellId::new(i);
        check_vertex_references(id, face, vertex_count)?;
        let shape = CellShape::from_vertex_count(face.len());
        if check_degenerate(id, shape, options.degenerate)? {
            degenerate.push(id);
        }
        let cell_edges = boundary_pairs(face)
            .map(|(a, b)| {
                edge_table
                    .get(a, b)
                    .ok_or(LatticeError::MissingEdge { cell: id, a, b })
            })
            .collect::<Result<Vec<_>, _>>()?;
        cells.insert(
            id,
            Cell {
                id,
                vertices: face.clone(),
                edges: cell_edges,
                shape,
            },
        );
    }

    Ok(Assembled {
        vertices,
        edges,
        cells,
        degenerate,
    })
}

fn build_vertices(points: &[Point], keep_z: bool) -> BTreeMap<VertexId, Vertex> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let id = VertexId::new(i);
            let z = if keep_z { p.z } else { None };
            (id, Vertex { id, x: p.x, y: p.y, z })
        })
        .collect()
}
