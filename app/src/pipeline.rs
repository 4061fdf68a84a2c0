use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use pcd_exporter::{converter::SplatConverter, ply::export_splat_ply};
use pcd_parser::parsers::{ply::PlyParserProvider, ParserProvider as _};
use pcd_transformer::{runner::PointCloudTransformer, Transformer as _};

use crate::{config::Config, error::PipelineError};

const INTERMEDIATE_SUFFIX: &str = "_fixed_30.ply";

/// Intermediate and final paths, next to the input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub intermediate: PathBuf,
    pub output: PathBuf,
}

impl OutputPaths {
    pub fn for_input(input: &Path) -> Self {
        let directory = input.parent().unwrap_or_else(|| Path::new(""));
        let stem = input.file_stem().unwrap_or_default();
        let with_suffix = |suffix: &str| {
            let mut name = OsString::from(stem);
            name.push(suffix);
            directory.join(name)
        };

        Self {
            intermediate: with_suffix(INTERMEDIATE_SUFFIX),
            output: with_suffix(".sog"),
        }
    }
}

/// Reads a LiDAR point cloud, adjusts it for WebGL, injects Gaussian parameters,
/// and converts it to a .sog file. Returns the path of the .sog file.
pub fn process_and_convert(input: &Path, config: &Config) -> Result<PathBuf, PipelineError> {
    if !input.is_file() {
        return Err(PipelineError::FileNotFound(input.to_path_buf()));
    }

    let paths = OutputPaths::for_input(input);

    log::info!("--- Loading {:?} ---", input);
    let start_local = std::time::Instant::now();
    let provider = PlyParserProvider {
        filename: input.to_path_buf(),
    };
    let point_cloud = provider
        .get_parser()
        .parse()
        .map_err(|source| PipelineError::Parse {
            path: input.to_path_buf(),
            source,
        })?;
    log::info!(
        "Loaded {} points in {:?}",
        point_cloud.len(),
        start_local.elapsed()
    );
    match point_cloud.bounding_volume() {
        Some(bounds) => log::info!(
            "Raw bounds min {:?} max {:?} (extent {:?})",
            bounds.min,
            bounds.max,
            bounds.extent()
        ),
        None => log::warn!("{:?} contains no vertices", input),
    }

    let start_local = std::time::Instant::now();
    let transformer = PointCloudTransformer::new(config.transform);
    let splats = transformer.execute(point_cloud);
    log::info!("Finish transforming in {:?}", start_local.elapsed());

    log::info!("--- Saving Intermediate PLY {:?} ---", paths.intermediate);
    export_splat_ply(&paths.intermediate, &splats)?;

    log::info!("--- Converting to SOG via Node.js ---");
    let converter = SplatConverter::new(config.converter.clone());
    let report = converter.convert(&paths.intermediate, &paths.output)?;

    log::info!("SUCCESS! SOG saved to {:?}", report.output);
    Ok(report.output)
}
