//! Mesh sources: where points and connectivity come from.
//!
//! The conversion only ever needs two things from a mesh: its point
//! coordinates and its flat, count-prefixed polygon connectivity. The
//! [`MeshSource`] trait captures exactly that; [`RawMesh`] is the in-memory
//! implementation every reader produces.

pub mod vtk;
pub mod vtu;

use crate::mesh_error::LatticeError;
use crate::topology::entity::Point;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Anything able to supply points and count-prefixed connectivity.
pub trait MeshSource {
    /// Point coordinates; index `i` is vertex `i`.
    fn points(&self) -> Result<&[Point], LatticeError>;
    /// Flat `[count, idx_0, ..., idx_{count-1}, count, ...]` polygon stream.
    fn connectivity(&self) -> Result<&[usize], LatticeError>;
}

/// Points and connectivity held in memory.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RawMesh {
    pub points: Vec<Point>,
    pub connectivity: Vec<usize>,
}

impl RawMesh {
    pub fn new(points: Vec<Point>, connectivity: Vec<usize>) -> Self {
        Self {
            points,
            connectivity,
        }
    }

    /// Build from per-face vertex lists, encoding them count-prefixed.
    pub fn from_faces<F>(points: Vec<Point>, faces: impl IntoIterator<Item = F>) -> Self
    where
        F: AsRef<[usize]>,
    {
        let mut connectivity = Vec::new();
        for face in faces {
            let face = face.as_ref();
            connectivity.push(face.len());
            connectivity.extend_from_slice(face);
        }
        Self {
            points,
            connectivity,
        }
    }
}

impl MeshSource for RawMesh {
    fn points(&self) -> Result<&[Point], LatticeError> {
        Ok(&self.points)
    }

    fn connectivity(&self) -> Result<&[usize], LatticeError> {
        Ok(&self.connectivity)
    }
}

/// Trait for mesh readers that produce a [`RawMesh`].
pub trait MeshReader {
    /// Parse mesh data from a reader.
    fn read<R: Read>(&self, reader: R) -> Result<RawMesh, LatticeError>;
}

/// Read a mesh file, choosing the reader from its extension.
///
/// `.vtk` is legacy ASCII VTK; `.vtu` and `.vtp` are VTK XML with ASCII
/// data arrays.
pub fn load<P: AsRef<Path>>(path: P) -> Result<RawMesh, LatticeError> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    let open = || -> Result<BufReader<File>, LatticeError> {
        let file = File::open(path).map_err(|err| {
            LatticeError::SourceUnavailable(format!("cannot open {}: {err}", path.display()))
        })?;
        Ok(BufReader::new(file))
    };
    let mesh = match ext.as_str() {
        "vtk" => vtk::VtkReader.read(open()?)?,
        "vtu" | "vtp" => vtu::VtuReader.read(open()?)?,
        _ => {
            return Err(LatticeError::SourceUnavailable(format!(
                "unsupported mesh file extension for {}",
                path.display()
            )));
        }
    };
    log::debug!(
        "io: loaded {} points and {} connectivity values from {}",
        mesh.points.len(),
        mesh.connectivity.len(),
        path.display()
    );
    Ok(mesh)
}

/// Re-encode VTK `offsets` + `connectivity` arrays into a count-prefixed stream.
///
/// `offsets` are end offsets (`[3, 6, ...]`, XML style). With `with_start`
/// set they carry a leading `0` (legacy 5.1 style) that must be present.
/// The last offset must cover the whole connectivity array.
pub(crate) fn offsets_to_count_prefixed(
    offsets: &[usize],
    connectivity: &[usize],
    with_start: bool,
) -> Result<Vec<usize>, LatticeError> {
    let ends = match offsets.split_first() {
        Some((&first, rest)) if with_start => {
            if first != 0 {
                return Err(LatticeError::SourceUnavailable(format!(
                    "first cell offset must be 0, found {first}"
                )));
            }
            rest
        }
        _ => offsets,
    };
    let covered = ends.last().copied().unwrap_or(0);
    if covered != connectivity.len() {
        return Err(LatticeError::SourceUnavailable(format!(
            "last cell offset {covered} does not match connectivity length {}",
            connectivity.len()
        )));
    }
    let mut out = Vec::with_capacity(connectivity.len() + ends.len());
    let mut prev = 0;
    for &end in ends {
        if end < prev || end > connectivity.len() {
            return Err(LatticeError::SourceUnavailable(format!(
                "invalid cell offset {end} (previous {prev}, connectivity length {})",
                connectivity.len()
            )));
        }
        out.push(end - prev);
        out.extend_from_slice(&connectivity[prev..end]);
        prev = end;
    }
    Ok(out)
}
