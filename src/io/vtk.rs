//! Legacy VTK (`.vtk`) reader for polygonal meshes.
//!
//! This implementation targets ASCII legacy VTK files with either an
//! `UNSTRUCTURED_GRID` dataset (connectivity from `CELLS`) or a `POLYDATA`
//! dataset (connectivity from `POLYGONS`). Both the classic count-prefixed
//! cell layout and the VTK 5.1 `OFFSETS`/`CONNECTIVITY` layout are accepted;
//! the latter is re-encoded count-prefixed. Everything after the connectivity
//! block (`CELL_TYPES`, point/cell data) is ignored.

use crate::io::{MeshReader, RawMesh, offsets_to_count_prefixed};
use crate::mesh_error::LatticeError;
use crate::topology::entity::Point;
use std::io::Read;
use std::str::{FromStr, SplitWhitespace};

#[derive(Debug, Default, Clone)]
pub struct VtkReader;

fn parse_error(msg: impl Into<String>) -> LatticeError {
    LatticeError::SourceUnavailable(format!("VTK parse error: {}", msg.into()))
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
        }
    }

    fn next(&mut self, what: &str) -> Result<&'a str, LatticeError> {
        self.inner
            .next()
            .ok_or_else(|| parse_error(format!("missing {what}")))
    }

    fn parse<T: FromStr>(&mut self, what: &str) -> Result<T, LatticeError> {
        let token = self.next(what)?;
        token
            .parse()
            .map_err(|_| parse_error(format!("invalid {what} `{token}`")))
    }

    fn expect(&mut self, keyword: &str) -> Result<(), LatticeError> {
        let token = self.next(keyword)?;
        if token.eq_ignore_ascii_case(keyword) {
            Ok(())
        } else {
            Err(parse_error(format!("expected {keyword}, found `{token}`")))
        }
    }

    fn parse_many<T: FromStr>(&mut self, n: usize, what: &str) -> Result<Vec<T>, LatticeError> {
        (0..n).map(|_| self.parse(what)).collect()
    }
}

impl VtkReader {
    /// Read the block following a `CELLS`/`POLYGONS`/`LINES`/... header whose
    /// two counts have already been consumed.
    ///
    /// In the classic layout `size` values follow. In the 5.1 layout `n` is
    /// the number of offsets and `size` the connectivity length.
    fn read_cell_block(
        tokens: &mut Tokens<'_>,
        n: usize,
        size: usize,
        peek: &str,
    ) -> Result<Vec<usize>, LatticeError> {
        if peek.eq_ignore_ascii_case("OFFSETS") {
            tokens.next("offsets type")?;
            let offsets: Vec<usize> = tokens.parse_many(n, "cell offset")?;
            tokens.expect("CONNECTIVITY")?;
            tokens.next("connectivity type")?;
            let connectivity: Vec<usize> = tokens.parse_many(size, "cell index")?;
            offsets_to_count_prefixed(&offsets, &connectivity, true)
        } else {
            let first: usize = peek
                .parse()
                .map_err(|_| parse_error(format!("invalid cell size `{peek}`")))?;
            if size == 0 {
                return Err(parse_error("cell block of size 0 has data"));
            }
            let mut values = vec![first];
            values.extend(tokens.parse_many::<usize>(size - 1, "cell index")?);
            Ok(values)
        }
    }

    fn read_section(tokens: &mut Tokens<'_>) -> Result<Vec<usize>, LatticeError> {
        let n: usize = tokens.parse("cell count")?;
        let size: usize = tokens.parse("cell size")?;
        if n == 0 && size == 0 {
            return Ok(Vec::new());
        }
        let peek = tokens.next("cell data")?;
        Self::read_cell_block(tokens, n, size, peek)
    }
}

impl MeshReader for VtkReader {
    fn read<R: Read>(&self, mut reader: R) -> Result<RawMesh, LatticeError> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        let mut lines = input.lines();
        let version = lines
            .next()
            .ok_or_else(|| parse_error("missing version line"))?;
        if !version.trim_start().starts_with("# vtk") {
            return Err(parse_error("not a legacy VTK file"));
        }
        let _title = lines.next();
        let format = lines
            .next()
            .ok_or_else(|| parse_error("missing ASCII line"))?;
        if !format.trim().eq_ignore_ascii_case("ASCII") {
            return Err(parse_error("only ASCII legacy VTK is supported"));
        }
        let dataset = lines
            .next()
            .ok_or_else(|| parse_error("missing DATASET line"))?;
        let section = match dataset.split_whitespace().nth(1) {
            Some(kind) if kind.eq_ignore_ascii_case("UNSTRUCTURED_GRID") => "CELLS",
            Some(kind) if kind.eq_ignore_ascii_case("POLYDATA") => "POLYGONS",
            _ => {
                return Err(parse_error(format!(
                    "unsupported dataset `{}`",
                    dataset.trim()
                )));
            }
        };

        let remaining = lines.collect::<Vec<_>>().join("\n");
        let mut tokens = Tokens::new(&remaining);

        tokens.expect("POINTS")?;
        let num_points: usize = tokens.parse("point count")?;
        let _point_type = tokens.next("point type")?;
        let num_coords = num_points
            .checked_mul(3)
            .ok_or_else(|| parse_error(format!("point count {num_points} is too large")))?;
        let coords: Vec<f64> = tokens.parse_many(num_coords, "point value")?;
        let points = coords
            .chunks_exact(3)
            .map(|c| Point::xyz(c[0], c[1], c[2]))
            .collect();

        // Skip VERTICES/LINES/METADATA blocks; their payload is numeric or
        // named, so it can never match the section keyword.
        let connectivity = loop {
            match tokens.next(section) {
                Ok(keyword) if keyword.eq_ignore_ascii_case(section) => {
                    break Self::read_section(&mut tokens)?;
                }
                Ok(_) => {}
                Err(_) if section == "POLYGONS" => break Vec::new(),
                Err(err) => return Err(err),
            }
        };

        Ok(RawMesh {
            points,
            connectivity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRID: &str = "# vtk DataFile Version 3.0
two triangles
ASCII
DATASET UNSTRUCTURED_GRID
POINTS 4 double
0 0 0  1 0 0  1 1 0  0 1 0
CELLS 2 8
3 0 1 2
3 0 2 3
CELL_TYPES 2
5 5
";

    #[test]
    fn reads_classic_unstructured_grid() {
        let mesh = VtkReader.read(GRID.as_bytes()).unwrap();
        assert_eq!(mesh.points.len(), 4);
        assert_eq!(mesh.points[2], Point::xyz(1.0, 1.0, 0.0));
        assert_eq!(mesh.connectivity, vec![3, 0, 1, 2, 3, 0, 2, 3]);
    }

    #[test]
    fn reads_offsets_layout() {
        let text = "# vtk DataFile Version 5.1
quad
ASCII
DATASET UNSTRUCTURED_GRID
POINTS 4 float
0 0 0 1 0 0 1 1 0 0 1 0
CELLS 2 4
OFFSETS vtktypeint64
0 4
CONNECTIVITY vtktypeint64
0 1 2 3
CELL_TYPES 1
9
";
        let mesh = VtkReader.read(text.as_bytes()).unwrap();
        assert_eq!(mesh.connectivity, vec![4, 0, 1, 2, 3]);
    }

    #[test]
    fn polydata_skips_lines_before_polygons() {
        let text = "# vtk DataFile Version 3.0
poly
ASCII
DATASET POLYDATA
POINTS 3 float
0 0 0 1 0 0 0 1 0
LINES 1 3
2 0 1
POLYGONS 1 4
3 0 1 2
";
        let mesh = VtkReader.read(text.as_bytes()).unwrap();
        assert_eq!(mesh.connectivity, vec![3, 0, 1, 2]);
    }

    #[test]
    fn polydata_without_polygons_has_no_faces() {
        let text = "# vtk DataFile Version 3.0
cloud
ASCII
DATASET POLYDATA
POINTS 1 float
0 0 0
";
        let mesh = VtkReader.read(text.as_bytes()).unwrap();
        assert_eq!(mesh.points.len(), 1);
        assert!(mesh.connectivity.is_empty());
    }

    #[test]
    fn grid_without_cells_is_unavailable() {
        let text = "# vtk DataFile Version 3.0\nx\nASCII\nDATASET UNSTRUCTURED_GRID\nPOINTS 0 float\n";
        let err = VtkReader.read(text.as_bytes()).unwrap_err();
        assert!(matches!(err, LatticeError::SourceUnavailable(ref m) if m.contains("CELLS")));
    }

    #[test]
    fn oversized_point_count_is_a_parse_error() {
        let text = "# vtk DataFile Version 3.0
x
ASCII
DATASET POLYDATA
POINTS 9223372036854775807 float
0 0 0
";
        let err = VtkReader.read(text.as_bytes()).unwrap_err();
        assert!(matches!(err, LatticeError::SourceUnavailable(ref m) if m.contains("too large")));
    }

    #[test]
    fn oversized_cell_block_is_a_parse_error() {
        let text = "# vtk DataFile Version 3.0
x
ASCII
DATASET POLYDATA
POINTS 3 float
0 0 0 1 0 0 0 1 0
POLYGONS 1 9223372036854775807
3 0 1 2
";
        let err = VtkReader.read(text.as_bytes()).unwrap_err();
        assert!(matches!(err, LatticeError::SourceUnavailable(ref m) if m.contains("missing cell index")));
    }

    #[test]
    fn offsets_not_starting_at_zero_are_rejected() {
        let text = "# vtk DataFile Version 5.1
x
ASCII
DATASET UNSTRUCTURED_GRID
POINTS 3 float
0 0 0 1 0 0 0 1 0
CELLS 2 5
OFFSETS vtktypeint64
2 5
CONNECTIVITY vtktypeint64
3 3 0 1 2
";
        let err = VtkReader.read(text.as_bytes()).unwrap_err();
        assert!(matches!(err, LatticeError::SourceUnavailable(ref m) if m.contains("first cell offset")));
    }

    #[test]
    fn binary_is_unavailable() {
        let text = "# vtk DataFile Version 3.0\nx\nBINARY\nDATASET POLYDATA\n";
        let err = VtkReader.read(text.as_bytes()).unwrap_err();
        assert!(matches!(err, LatticeError::SourceUnavailable(ref m) if m.contains("ASCII")));
    }

    #[test]
    fn negative_index_is_a_parse_error() {
        let text = GRID.replace("3 0 2 3", "3 0 -2 3");
        let err = VtkReader.read(text.as_bytes()).unwrap_err();
        assert!(matches!(err, LatticeError::SourceUnavailable(ref m) if m.contains("-2")));
    }
}
