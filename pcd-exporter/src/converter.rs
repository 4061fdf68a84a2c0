//! Runs the external `splat-transform` tool that packs a splat PLY into a `.sog` container.
//!
//! The tool runs on Node.js, whose default heap is too small for large captures, so
//! every invocation raises the V8 old-space limit through `NODE_OPTIONS`.
//! The call blocks until the child exits; there is no timeout.

use std::{
    fs,
    io::{self, BufRead as _, BufReader, Read},
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use thiserror::Error;

pub const DEFAULT_CONVERTER: &str = "splat-transform";
pub const DEFAULT_MAX_MEMORY_MB: u32 = 16384;
pub const NODE_OPTIONS: &str = "NODE_OPTIONS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    pub program: String,
    pub max_memory_mb: u32,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_CONVERTER.to_string(),
            max_memory_mb: DEFAULT_MAX_MEMORY_MB,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to start '{program}' (is it installed? try `npm install -g @playcanvas/splat-transform`): {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to wait for '{program}': {source}")]
    Wait {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("'{program}' exited with {}: {stderr}", exit_code_label(.code))]
    Failed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn exit_code_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_string(),
    }
}

/// What happened to the intermediate file after a successful conversion.
#[derive(Debug)]
pub enum Cleanup {
    Removed,
    Failed(io::Error),
}

#[derive(Debug)]
pub struct ConversionReport {
    pub output: PathBuf,
    pub cleanup: Cleanup,
}

pub struct SplatConverter {
    config: ConverterConfig,
}

impl SplatConverter {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    fn command(&self, input: &Path, output: &Path) -> Command {
        let mut command = Command::new(&self.config.program);
        command
            .arg("--input")
            .arg(input)
            .arg("--output")
            .arg(output)
            .env(
                NODE_OPTIONS,
                format!("--max-old-space-size={}", self.config.max_memory_mb),
            )
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped());
        command
    }

    /// Converts `input` into `output`. On success the input file is removed;
    /// on failure it is left in place for a retry.
    pub fn convert(&self, input: &Path, output: &Path) -> Result<ConversionReport, ConvertError> {
        let program = &self.config.program;
        log::debug!("converter {program}: not started");

        let mut command = self.command(input, output);
        log::debug!("converter {program}: running {:?}", command);
        let mut child = command.spawn().map_err(|source| ConvertError::Spawn {
            program: program.clone(),
            source,
        })?;

        let stderr = child
            .stderr
            .take()
            .map(|pipe| relay_stderr(program, pipe))
            .unwrap_or_default();
        let status = child.wait().map_err(|source| ConvertError::Wait {
            program: program.clone(),
            source,
        })?;

        if !status.success() {
            log::debug!("converter {program}: failed ({:?})", status.code());
            return Err(ConvertError::Failed {
                program: program.clone(),
                code: status.code(),
                stderr,
            });
        }

        let cleanup = match fs::remove_file(input) {
            Ok(()) => Cleanup::Removed,
            Err(e) => {
                log::warn!("failed to remove intermediate file {:?}: {}", input, e);
                Cleanup::Failed(e)
            }
        };
        log::debug!("converter {program}: succeeded ({cleanup:?})");

        Ok(ConversionReport {
            output: output.to_path_buf(),
            cleanup,
        })
    }
}

/// Logs each stderr line as the child writes it and returns the whole text.
fn relay_stderr(program: &str, pipe: impl Read) -> String {
    let mut captured = Vec::new();
    for line in BufReader::new(pipe).split(b'\n') {
        match line {
            Ok(line) => {
                let line = String::from_utf8_lossy(&line).trim_end().to_string();
                if !line.is_empty() {
                    log::warn!("{program}: {line}");
                    captured.push(line);
                }
            }
            Err(e) => {
                log::warn!("stopped reading {program} stderr: {e}");
                break;
            }
        }
    }
    captured.join("\n")
}
