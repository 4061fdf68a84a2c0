use std::path::PathBuf;

use pcd_core::pointcloud::{
    point::{Color, Point, PointCloud},
    table::{ColumnData, PointTable},
};

use super::{Parser, ParserProvider};
use crate::{error::ParseError, reader::ply::PlyReader};

pub struct PlyParserProvider {
    pub filename: PathBuf,
}

impl ParserProvider for PlyParserProvider {
    fn get_parser(&self) -> Box<dyn Parser> {
        Box::new(PlyParser {
            filename: self.filename.clone(),
        })
    }
}

pub struct PlyParser {
    pub filename: PathBuf,
}

impl Parser for PlyParser {
    fn parse(&self) -> Result<PointCloud, ParseError> {
        let start = std::time::Instant::now();
        let mut reader = PlyReader::from_path(&self.filename)?;
        log::debug!(
            "PLY header: encoding {:?}, elements {:?}",
            reader.header().encoding,
            reader
                .header()
                .elements
                .values()
                .map(|e| (&e.name, e.count))
                .collect::<Vec<_>>()
        );

        let vertex = reader.read_element("vertex")?;
        log::debug!("Read PLY vertices in {:?}", start.elapsed());

        point_cloud_from_table(&vertex)
    }
}

/// Builds a point cloud from a vertex table. Coordinates of any numeric type are
/// widened to f64; colors must be stored as uchar. Other columns are ignored.
pub fn point_cloud_from_table(vertex: &PointTable) -> Result<PointCloud, ParseError> {
    let xs = coordinate_column(vertex, "x")?;
    let ys = coordinate_column(vertex, "y")?;
    let zs = coordinate_column(vertex, "z")?;
    let reds = color_column(vertex, "red")?;
    let greens = color_column(vertex, "green")?;
    let blues = color_column(vertex, "blue")?;

    let points = (0..vertex.len())
        .map(|i| {
            Point::new(
                xs[i],
                ys[i],
                zs[i],
                Color {
                    r: reds[i],
                    g: greens[i],
                    b: blues[i],
                },
            )
        })
        .collect();

    Ok(PointCloud::new(points))
}

fn coordinate_column(vertex: &PointTable, name: &str) -> Result<Vec<f64>, ParseError> {
    vertex
        .column(name)
        .map(ColumnData::to_f64_vec)
        .ok_or_else(|| ParseError::MissingProperty(name.to_string()))
}

fn color_column<'a>(vertex: &'a PointTable, name: &str) -> Result<&'a [u8], ParseError> {
    match vertex.column(name) {
        Some(ColumnData::UInt8(values)) => Ok(values),
        Some(other) => Err(ParseError::UnsupportedColorType {
            name: name.to_string(),
            found: other.type_name(),
        }),
        None => Err(ParseError::MissingProperty(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use byteorder::{LittleEndian, WriteBytesExt as _};
    use pcd_core::pointcloud::table::Column;
    use tempfile::Builder;

    use super::*;
    use crate::parsers::ParserProvider as _;

    #[test]
    fn parses_binary_file_with_extra_properties() {
        let mut file = Builder::new().suffix(".ply").tempfile().unwrap();
        let header = "ply\nformat binary_little_endian 1.0\ncomment lidar export\n\
            element vertex 2\nproperty float x\nproperty float y\nproperty float z\n\
            property uchar red\nproperty uchar green\nproperty uchar blue\n\
            property float intensity\nend_header\n";
        file.write_all(header.as_bytes()).unwrap();
        for (x, y, z, rgb) in [(1.0f32, 2.0, 3.0, [10u8, 20, 30]), (4.0, 5.0, 6.0, [40, 50, 60])] {
            file.write_f32::<LittleEndian>(x).unwrap();
            file.write_f32::<LittleEndian>(y).unwrap();
            file.write_f32::<LittleEndian>(z).unwrap();
            file.write_all(&rgb).unwrap();
            file.write_f32::<LittleEndian>(0.75).unwrap();
        }
        file.flush().unwrap();

        let provider = PlyParserProvider {
            filename: file.path().to_path_buf(),
        };
        let point_cloud = provider.get_parser().parse().unwrap();

        assert_eq!(point_cloud.len(), 2);
        assert_eq!(point_cloud.points[1].x, 4.0);
        assert_eq!(point_cloud.points[1].z, 6.0);
        assert_eq!(point_cloud.points[0].to_rgb8(), [10, 20, 30]);
    }

    #[test]
    fn missing_color_property_is_an_error() {
        let table = PointTable::new(vec![
            Column::new("x", ColumnData::Float32(vec![0.0])),
            Column::new("y", ColumnData::Float32(vec![0.0])),
            Column::new("z", ColumnData::Float32(vec![0.0])),
            Column::new("red", ColumnData::UInt8(vec![0])),
            Column::new("green", ColumnData::UInt8(vec![0])),
        ])
        .unwrap();
        assert!(matches!(
            point_cloud_from_table(&table),
            Err(ParseError::MissingProperty(name)) if name == "blue"
        ));
    }

    #[test]
    fn non_uchar_color_is_an_error() {
        let table = PointTable::new(vec![
            Column::new("x", ColumnData::Float32(vec![0.0])),
            Column::new("y", ColumnData::Float32(vec![0.0])),
            Column::new("z", ColumnData::Float32(vec![0.0])),
            Column::new("red", ColumnData::UInt16(vec![0])),
            Column::new("green", ColumnData::UInt8(vec![0])),
            Column::new("blue", ColumnData::UInt8(vec![0])),
        ])
        .unwrap();
        assert!(matches!(
            point_cloud_from_table(&table),
            Err(ParseError::UnsupportedColorType { name, found: "ushort" }) if name == "red"
        ));
    }

    #[test]
    fn file_name_does_not_decide_the_format() {
        let mut file = Builder::new().suffix(".ply.bak").tempfile().unwrap();
        let header = "ply\nformat ascii 1.0\nelement vertex 1\n\
            property float x\nproperty float y\nproperty float z\n\
            property uchar red\nproperty uchar green\nproperty uchar blue\nend_header\n\
            1 2 3 4 5 6\n";
        file.write_all(header.as_bytes()).unwrap();
        file.flush().unwrap();

        let parser = PlyParser {
            filename: file.path().to_path_buf(),
        };
        let point_cloud = parser.parse().unwrap();
        assert_eq!(point_cloud.len(), 1);
        assert_eq!(point_cloud.points[0].to_rgb8(), [4, 5, 6]);
    }

    #[test]
    fn garbage_file_is_a_parse_error() {
        let mut file = Builder::new().suffix(".ply").tempfile().unwrap();
        file.write_all(b"\x00\x01\x02 not a point cloud").unwrap();
        file.flush().unwrap();

        let parser = PlyParser {
            filename: file.path().to_path_buf(),
        };
        assert!(matches!(parser.parse(), Err(ParseError::MissingMagic)));
    }
}
