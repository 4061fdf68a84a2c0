use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use pcd_core::pointcloud::table::{Column, ColumnData, PointTable};
use ply_rs::{
    parser::Parser,
    ply::{ElementDef, Header, Property, PropertyAccess, PropertyType, ScalarType},
};

use crate::error::ParseError;

const PLY_MAGIC: &[u8] = b"ply";

/// Scalar values of one row, in header order. List values are dropped.
#[derive(Debug, Default)]
struct ScalarRow(Vec<Property>);

impl PropertyAccess for ScalarRow {
    fn new() -> Self {
        Self::default()
    }

    fn set_property(&mut self, _property_name: String, property: Property) {
        match property {
            Property::ListChar(_)
            | Property::ListUChar(_)
            | Property::ListShort(_)
            | Property::ListUShort(_)
            | Property::ListInt(_)
            | Property::ListUInt(_)
            | Property::ListFloat(_)
            | Property::ListDouble(_) => {}
            scalar => self.0.push(scalar),
        }
    }
}

/// Sequential PLY decoder. Elements are decoded in header order; asking for a
/// later element decodes and drops the ones in front of it.
pub struct PlyReader<R> {
    header: Header,
    reader: R,
    parser: Parser<ScalarRow>,
    next_element: usize,
}

impl PlyReader<BufReader<File>> {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        let file = File::open(path)?;
        Self::new(BufReader::new(file))
    }
}

impl<R: BufRead> PlyReader<R> {
    /// Reads the header. The input is recognised by its `ply` magic line,
    /// whatever the file is called.
    pub fn new(mut reader: R) -> Result<Self, ParseError> {
        if !reader.fill_buf()?.starts_with(PLY_MAGIC) {
            return Err(ParseError::MissingMagic);
        }

        let parser = Parser::<ScalarRow>::new();
        let header = parser
            .read_header(&mut reader)
            .map_err(ParseError::MalformedHeader)?;

        Ok(Self {
            header,
            reader,
            parser,
            next_element: 0,
        })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Decodes the scalar properties of element `name` into a table.
    /// List properties are consumed but not stored.
    pub fn read_element(&mut self, name: &str) -> Result<PointTable, ParseError> {
        let index = self
            .header
            .elements
            .values()
            .position(|e| e.name == name)
            .ok_or_else(|| ParseError::MissingElement(name.to_string()))?;
        if index < self.next_element {
            return Err(ParseError::ElementAlreadyRead(name.to_string()));
        }

        let mut table = None;
        for (position, element) in self.header.elements.values().enumerate() {
            if position < self.next_element || position > index {
                continue;
            }
            if position < index {
                log::debug!("skipping element '{}' ({} rows)", element.name, element.count);
            }

            let rows = self
                .parser
                .read_payload_for_element(&mut self.reader, element, &self.header)
                .map_err(|source| payload_error(element, source))?;
            if position == index {
                table = Some(table_from_rows(element, rows)?);
            }
        }
        self.next_element = index + 1;

        table.ok_or_else(|| ParseError::MissingElement(name.to_string()))
    }
}

fn payload_error(element: &ElementDef, source: io::Error) -> ParseError {
    match source.kind() {
        io::ErrorKind::UnexpectedEof => ParseError::Truncated {
            element: element.name.clone(),
            expected: element.count,
        },
        _ => ParseError::MalformedPayload {
            element: element.name.clone(),
            source,
        },
    }
}

fn table_from_rows(element: &ElementDef, rows: Vec<ScalarRow>) -> Result<PointTable, ParseError> {
    let mut columns: Vec<Column> = element
        .properties
        .values()
        .filter_map(|property| match &property.data_type {
            PropertyType::Scalar(scalar) => Some(Column::new(
                property.name.clone(),
                empty_column(scalar, rows.len()),
            )),
            PropertyType::List(..) => None,
        })
        .collect();

    for row in rows {
        for (column, value) in columns.iter_mut().zip(row.0) {
            push_value(&mut column.data, value);
        }
    }

    Ok(PointTable::new(columns)?)
}

fn empty_column(scalar: &ScalarType, capacity: usize) -> ColumnData {
    match scalar {
        ScalarType::Char => ColumnData::Int8(Vec::with_capacity(capacity)),
        ScalarType::UChar => ColumnData::UInt8(Vec::with_capacity(capacity)),
        ScalarType::Short => ColumnData::Int16(Vec::with_capacity(capacity)),
        ScalarType::UShort => ColumnData::UInt16(Vec::with_capacity(capacity)),
        ScalarType::Int => ColumnData::Int32(Vec::with_capacity(capacity)),
        ScalarType::UInt => ColumnData::UInt32(Vec::with_capacity(capacity)),
        ScalarType::Float => ColumnData::Float32(Vec::with_capacity(capacity)),
        ScalarType::Double => ColumnData::Float64(Vec::with_capacity(capacity)),
    }
}

// A value of the wrong type is dropped; the column then comes up short and
// `PointTable::new` rejects it.
fn push_value(data: &mut ColumnData, value: Property) {
    match (data, value) {
        (ColumnData::Int8(v), Property::Char(x)) => v.push(x),
        (ColumnData::UInt8(v), Property::UChar(x)) => v.push(x),
        (ColumnData::Int16(v), Property::Short(x)) => v.push(x),
        (ColumnData::UInt16(v), Property::UShort(x)) => v.push(x),
        (ColumnData::Int32(v), Property::Int(x)) => v.push(x),
        (ColumnData::UInt32(v), Property::UInt(x)) => v.push(x),
        (ColumnData::Float32(v), Property::Float(x)) => v.push(x),
        (ColumnData::Float64(v), Property::Double(x)) => v.push(x),
        _ => {}
    }
}
