use std::io;

use pcd_core::pointcloud::table::TableError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("not a PLY file (missing 'ply' magic line)")]
    MissingMagic,
    #[error("malformed PLY header: {0}")]
    MalformedHeader(#[source] io::Error),
    #[error("element '{0}' not found")]
    MissingElement(String),
    #[error("element '{0}' has already been read")]
    ElementAlreadyRead(String),
    #[error("property '{0}' not found in vertex element")]
    MissingProperty(String),
    #[error("property '{name}' must be uchar, found {found}")]
    UnsupportedColorType { name: String, found: &'static str },
    #[error("element '{element}' is truncated: expected {expected} rows")]
    Truncated { element: String, expected: usize },
    #[error("malformed data in element '{element}': {source}")]
    MalformedPayload {
        element: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Table(#[from] TableError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
