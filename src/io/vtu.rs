//! VTK XML reader for `.vtu` (UnstructuredGrid) and `.vtp` (PolyData) files.
//!
//! Only `format="ascii"` data arrays are supported; binary and appended
//! encodings are reported as an unavailable source. Connectivity is taken
//! from the `connectivity`/`offsets` arrays of `Cells` (UnstructuredGrid) or
//! `Polys` (PolyData) and re-encoded count-prefixed. Multi-piece files are
//! concatenated, with each piece's indices shifted past the points of the
//! pieces before it.

use crate::io::{MeshReader, RawMesh, offsets_to_count_prefixed};
use crate::mesh_error::LatticeError;
use crate::topology::entity::Point;
use roxmltree::{Document, Node};
use std::io::Read;
use std::str::FromStr;

#[derive(Debug, Default, Clone)]
pub struct VtuReader;

fn parse_error(msg: impl Into<String>) -> LatticeError {
    LatticeError::SourceUnavailable(format!("VTK XML parse error: {}", msg.into()))
}

impl VtuReader {
    fn parse_data_array<T: FromStr>(node: Node) -> Result<Vec<T>, LatticeError> {
        let name = node.attribute("Name").unwrap_or("<unnamed>");
        let format = node.attribute("format").unwrap_or("ascii");
        if !format.eq_ignore_ascii_case("ascii") {
            return Err(parse_error(format!(
                "DataArray `{name}` uses unsupported format `{format}`"
            )));
        }
        node.text()
            .unwrap_or("")
            .split_whitespace()
            .map(|v| {
                v.parse()
                    .map_err(|_| parse_error(format!("invalid value `{v}` in DataArray `{name}`")))
            })
            .collect()
    }

    fn named_array<'a, 'input>(
        parent: Node<'a, 'input>,
        name: &str,
    ) -> Result<Node<'a, 'input>, LatticeError> {
        parent
            .children()
            .find(|n| n.has_tag_name("DataArray") && n.attribute("Name") == Some(name))
            .ok_or_else(|| parse_error(format!("missing `{name}` DataArray")))
    }

    fn read_points(piece: Node) -> Result<Vec<Point>, LatticeError> {
        let Some(points) = piece.children().find(|n| n.has_tag_name("Points")) else {
            return Ok(Vec::new());
        };
        let array = points
            .children()
            .find(|n| n.has_tag_name("DataArray"))
            .ok_or_else(|| parse_error("missing Points DataArray"))?;
        let components: usize = array
            .attribute("NumberOfComponents")
            .unwrap_or("3")
            .parse()
            .map_err(|_| parse_error("invalid NumberOfComponents"))?;
        let values: Vec<f64> = Self::parse_data_array(array)?;
        if !(2..=3).contains(&components) || values.len() % components != 0 {
            return Err(parse_error(format!(
                "{} point values do not form {components}-component points",
                values.len()
            )));
        }
        Ok(values
            .chunks_exact(components)
            .map(|c| Point {
                x: c[0],
                y: c[1],
                z: c.get(2).copied(),
            })
            .collect())
    }

    fn read_cells(block: Node, base: usize) -> Result<Vec<usize>, LatticeError> {
        let connectivity: Vec<usize> =
            Self::parse_data_array(Self::named_array(block, "connectivity")?)?;
        let offsets: Vec<usize> = Self::parse_data_array(Self::named_array(block, "offsets")?)?;
        let shifted = connectivity
            .into_iter()
            .map(|v| {
                v.checked_add(base).ok_or_else(|| {
                    parse_error(format!("vertex index {v} overflows after shift by {base}"))
                })
            })
            .collect::<Result<Vec<usize>, _>>()?;
        offsets_to_count_prefixed(&offsets, &shifted, false)
    }
}

impl MeshReader for VtuReader {
    fn read<R: Read>(&self, mut reader: R) -> Result<RawMesh, LatticeError> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        let doc = Document::parse(&input)
            .map_err(|err| parse_error(format!("XML parse error: {err}")))?;

        let root = doc.root_element();
        if !root.has_tag_name("VTKFile") {
            return Err(parse_error("missing VTKFile root element"));
        }
        let (dataset, cell_tag) = match root.attribute("type") {
            Some("UnstructuredGrid") => ("UnstructuredGrid", "Cells"),
            Some("PolyData") => ("PolyData", "Polys"),
            other => {
                return Err(parse_error(format!(
                    "unsupported VTKFile type {:?}",
                    other.unwrap_or("")
                )));
            }
        };
        let grid = root
            .children()
            .find(|n| n.has_tag_name(dataset))
            .ok_or_else(|| parse_error(format!("missing {dataset}")))?;

        let mut mesh = RawMesh::default();
        for piece in grid.children().filter(|n| n.has_tag_name("Piece")) {
            let base = mesh.points.len();
            mesh.points.extend(Self::read_points(piece)?);
            if let Some(block) = piece.children().find(|n| n.has_tag_name(cell_tag)) {
                mesh.connectivity.extend(Self::read_cells(block, base)?);
            }
        }
        Ok(mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VTU: &str = r#"<?xml version="1.0"?>
<VTKFile type="UnstructuredGrid" version="0.1" byte_order="LittleEndian">
  <UnstructuredGrid>
    <Piece NumberOfPoints="4" NumberOfCells="2">
      <Points>
        <DataArray type="Float64" NumberOfComponents="3" format="ascii">
          0 0 0  1 0 0  1 1 0  0 1 0
        </DataArray>
      </Points>
      <Cells>
        <DataArray type="Int64" Name="connectivity" format="ascii">0 1 2 0 2 3</DataArray>
        <DataArray type="Int64" Name="offsets" format="ascii">3 6</DataArray>
        <DataArray type="UInt8" Name="types" format="ascii">5 5</DataArray>
      </Cells>
    </Piece>
  </UnstructuredGrid>
</VTKFile>
"#;

    #[test]
    fn reads_ascii_unstructured_grid() {
        let mesh = VtuReader.read(VTU.as_bytes()).unwrap();
        assert_eq!(mesh.points.len(), 4);
        assert_eq!(mesh.points[3], Point::xyz(0.0, 1.0, 0.0));
        assert_eq!(mesh.connectivity, vec![3, 0, 1, 2, 3, 0, 2, 3]);
    }

    #[test]
    fn pieces_are_concatenated_with_shifted_indices() {
        let text = r#"<VTKFile type="PolyData">
  <PolyData>
    <Piece>
      <Points><DataArray NumberOfComponents="2" format="ascii">0 0 1 0 0 1</DataArray></Points>
      <Polys>
        <DataArray Name="connectivity" format="ascii">0 1 2</DataArray>
        <DataArray Name="offsets" format="ascii">3</DataArray>
      </Polys>
    </Piece>
    <Piece>
      <Points><DataArray NumberOfComponents="2" format="ascii">5 5 6 5 5 6</DataArray></Points>
      <Polys>
        <DataArray Name="connectivity" format="ascii">2 1 0</DataArray>
        <DataArray Name="offsets" format="ascii">3</DataArray>
      </Polys>
    </Piece>
  </PolyData>
</VTKFile>"#;
        let mesh = VtuReader.read(text.as_bytes()).unwrap();
        assert_eq!(mesh.points.len(), 6);
        assert_eq!(mesh.points[4], Point::xy(6.0, 5.0));
        assert_eq!(mesh.connectivity, vec![3, 0, 1, 2, 3, 5, 4, 3]);
    }

    #[test]
    fn shifted_index_overflow_is_a_parse_error() {
        let text = r#"<VTKFile type="PolyData">
  <PolyData>
    <Piece>
      <Points><DataArray NumberOfComponents="2" format="ascii">0 0</DataArray></Points>
    </Piece>
    <Piece>
      <Points><DataArray NumberOfComponents="2" format="ascii">1 1</DataArray></Points>
      <Polys>
        <DataArray Name="connectivity" format="ascii">18446744073709551615</DataArray>
        <DataArray Name="offsets" format="ascii">1</DataArray>
      </Polys>
    </Piece>
  </PolyData>
</VTKFile>"#;
        let err = VtuReader.read(text.as_bytes()).unwrap_err();
        assert!(matches!(err, LatticeError::SourceUnavailable(ref m) if m.contains("overflows")));
    }

    #[test]
    fn trailing_connectivity_past_last_offset_is_rejected() {
        let text = r#"<VTKFile type="PolyData">
  <PolyData>
    <Piece>
      <Points><DataArray NumberOfComponents="2" format="ascii">0 0 1 0 0 1 1 1</DataArray></Points>
      <Polys>
        <DataArray Name="connectivity" format="ascii">0 1 2 1 3 2</DataArray>
        <DataArray Name="offsets" format="ascii">3</DataArray>
      </Polys>
    </Piece>
  </PolyData>
</VTKFile>"#;
        let err = VtuReader.read(text.as_bytes()).unwrap_err();
        assert!(matches!(err, LatticeError::SourceUnavailable(ref m) if m.contains("last cell offset")));
    }

    #[test]
    fn binary_arrays_are_unavailable() {
        let text = VTU.replace(r#"Name="offsets" format="ascii""#, r#"Name="offsets" format="binary""#);
        let err = VtuReader.read(text.as_bytes()).unwrap_err();
        assert!(matches!(err, LatticeError::SourceUnavailable(ref m) if m.contains("binary")));
    }

    #[test]
    fn malformed_xml_is_unavailable() {
        let err = VtuReader.read("<VTKFile".as_bytes()).unwrap_err();
        assert!(matches!(err, LatticeError::SourceUnavailable(_)));
    }
}
