//! Columnar view of a point-cloud element: named, typed columns of equal length.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("column '{name}' has {actual} rows, expected {expected}")]
    LengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
    #[error("column '{0}' appears more than once")]
    DuplicateColumn(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Int8(Vec<i8>),
    UInt8(Vec<u8>),
    Int16(Vec<i16>),
    UInt16(Vec<u16>),
    Int32(Vec<i32>),
    UInt32(Vec<u32>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Int8(v) => v.len(),
            ColumnData::UInt8(v) => v.len(),
            ColumnData::Int16(v) => v.len(),
            ColumnData::UInt16(v) => v.len(),
            ColumnData::Int32(v) => v.len(),
            ColumnData::UInt32(v) => v.len(),
            ColumnData::Float32(v) => v.len(),
            ColumnData::Float64(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// PLY name of the stored scalar type.
    pub fn type_name(&self) -> &'static str {
        match self {
            ColumnData::Int8(_) => "char",
            ColumnData::UInt8(_) => "uchar",
            ColumnData::Int16(_) => "short",
            ColumnData::UInt16(_) => "ushort",
            ColumnData::Int32(_) => "int",
            ColumnData::UInt32(_) => "uint",
            ColumnData::Float32(_) => "float",
            ColumnData::Float64(_) => "double",
        }
    }

    /// Widens the value at `index` to f64. Every supported type converts losslessly.
    pub fn get_f64(&self, index: usize) -> Option<f64> {
        match self {
            ColumnData::Int8(v) => v.get(index).map(|&x| x as f64),
            ColumnData::UInt8(v) => v.get(index).map(|&x| x as f64),
            ColumnData::Int16(v) => v.get(index).map(|&x| x as f64),
            ColumnData::UInt16(v) => v.get(index).map(|&x| x as f64),
            ColumnData::Int32(v) => v.get(index).map(|&x| x as f64),
            ColumnData::UInt32(v) => v.get(index).map(|&x| x as f64),
            ColumnData::Float32(v) => v.get(index).map(|&x| x as f64),
            ColumnData::Float64(v) => v.get(index).copied(),
        }
    }

    pub fn to_f64_vec(&self) -> Vec<f64> {
        (0..self.len()).filter_map(|i| self.get_f64(i)).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

impl Column {
    pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointTable {
    len: usize,
    columns: Vec<Column>,
}

impl PointTable {
    pub fn new(columns: Vec<Column>) -> Result<Self, TableError> {
        let len = columns.first().map(|c| c.data.len()).unwrap_or(0);

        for (i, column) in columns.iter().enumerate() {
            if column.data.len() != len {
                return Err(TableError::LengthMismatch {
                    name: column.name.clone(),
                    expected: len,
                    actual: column.data.len(),
                });
            }
            if columns[..i].iter().any(|c| c.name == column.name) {
                return Err(TableError::DuplicateColumn(column.name.clone()));
            }
        }

        Ok(Self { len, columns })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn column(&self, name: &str) -> Option<&ColumnData> {
        self.columns.iter().find(|c| c.name == name).map(|c| &c.data)
    }
}
