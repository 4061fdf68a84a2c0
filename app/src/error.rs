use std::path::PathBuf;

use pcd_exporter::{converter::ConvertError, ply::ExportError};
use pcd_parser::ParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("input file not found at {0:?}")]
    FileNotFound(PathBuf),
    #[error("error reading PLY file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
    #[error("error saving intermediate PLY: {0}")]
    Write(#[from] ExportError),
    #[error("SOG conversion failed: {0}")]
    ExternalTool(#[from] ConvertError),
}

impl PipelineError {
    /// Pipeline stage the failure belongs to, for user-facing messages.
    pub fn stage(&self) -> &'static str {
        match self {
            PipelineError::FileNotFound(_) => "input check",
            PipelineError::Parse { .. } => "loading",
            PipelineError::Write(_) => "writing",
            PipelineError::ExternalTool(_) => "conversion",
        }
    }
}
