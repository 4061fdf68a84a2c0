use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use pcd_core::pointcloud::splat::{SplatCloud, SplatPoint, SPLAT_PROPERTY_NAMES};
use ply_rs::{
    ply::{Addable as _, ElementDef, Encoding, Ply, PropertyAccess, PropertyDef, PropertyType, ScalarType},
    writer::Writer,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

const VERTEX_ELEMENT: &str = "vertex";

/// Splat values in `SPLAT_PROPERTY_NAMES` order, as the PLY writer sees them.
#[derive(Debug, Default)]
struct SplatVertex([f32; SplatPoint::PROPERTY_COUNT]);

impl PropertyAccess for SplatVertex {
    fn new() -> Self {
        Self::default()
    }

    fn get_float(&self, property_name: &String) -> Option<f32> {
        let index = SPLAT_PROPERTY_NAMES
            .iter()
            .position(|name| *name == property_name.as_str())?;
        Some(self.0[index])
    }
}

fn splat_ply(splats: &SplatCloud) -> Ply<SplatVertex> {
    let mut ply = Ply::<SplatVertex>::new();
    ply.header.encoding = Encoding::BinaryLittleEndian;

    let mut vertex = ElementDef::new(VERTEX_ELEMENT.to_string());
    vertex.count = splats.len();
    for name in SPLAT_PROPERTY_NAMES {
        vertex.properties.add(PropertyDef::new(
            name.to_string(),
            PropertyType::Scalar(ScalarType::Float),
        ));
    }
    ply.header.elements.add(vertex);

    let vertices = splats
        .iter()
        .map(|splat| SplatVertex(splat.to_array()))
        .collect();
    ply.payload.insert(VERTEX_ELEMENT.to_string(), vertices);
    ply
}

/// Writes a binary little-endian Gaussian splat PLY.
pub fn write_splat_ply<W: Write>(mut writer: W, splats: &SplatCloud) -> io::Result<()> {
    let mut ply = splat_ply(splats);
    Writer::<SplatVertex>::new().write_ply(&mut writer, &mut ply)?;
    writer.flush()
}

pub fn export_splat_ply<P: AsRef<Path>>(path: P, splats: &SplatCloud) -> Result<(), ExportError> {
    let path = path.as_ref();
    let to_export_error = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_export_error)?;
    write_splat_ply(BufWriter::new(file), splats).map_err(to_export_error)?;

    log::debug!("wrote {} splats to {:?}", splats.len(), path);
    Ok(())
}
