mod config;
mod error;
mod pipeline;

use std::io::Write;
use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use env_logger::Builder;
use glob::glob;
use log::LevelFilter;

use config::{Cli, Config};
use pipeline::process_and_convert;

fn expand_globs(input_patterns: &[String]) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    for pattern in input_patterns {
        if pattern.contains('*') || pattern.contains('?') || pattern.contains('[') {
            match glob(pattern) {
                Ok(entries) => {
                    for entry in entries {
                        match entry {
                            Ok(path) => paths.push(path),
                            Err(e) => log::error!("Error: {:?}", e),
                        }
                    }
                }
                Err(e) => log::error!("Invalid glob pattern {:?}: {}", pattern, e),
            }
        } else {
            paths.push(PathBuf::from(pattern));
        }
    }
    paths
}

fn main() {
    let args = Cli::parse();

    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(
            None,
            if args.verbose {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        )
        .init();

    let config = Config::new(expand_globs(&args.input), &args);

    log::info!("input files: {:?}", config.inputs);
    log::info!("density step: {}", config.transform.density_step);
    log::info!("y offset: {}", config.transform.y_offset);
    log::info!("gaussian scale: {}", config.transform.gaussian_scale);
    log::info!("gaussian opacity: {}", config.transform.gaussian_opacity);
    log::info!(
        "converter: {} (max memory {} MB)",
        config.converter.program,
        config.converter.max_memory_mb
    );

    if config.inputs.is_empty() {
        log::error!("No input files matched {:?}", args.input);
        std::process::exit(1);
    }

    let start = std::time::Instant::now();
    for input in &config.inputs {
        if let Err(e) = process_and_convert(input, &config) {
            log::error!("{} failed for {:?}: {}", e.stage(), input, e);
            std::process::exit(1);
        }
    }

    log::info!("Elapsed: {:?}", start.elapsed());
    log::info!("Finish processing");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_are_kept_verbatim() {
        let paths = expand_globs(&["does/not/exist.ply".to_string()]);
        assert_eq!(paths, vec![PathBuf::from("does/not/exist.ply")]);
    }

    #[test]
    fn glob_patterns_are_expanded() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.ply", "b.ply", "c.txt"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }
        let pattern = dir.path().join("*.ply").to_string_lossy().into_owned();

        let mut paths = expand_globs(&[pattern]);
        paths.sort();
        assert_eq!(
            paths,
            vec![dir.path().join("a.ply"), dir.path().join("b.ply")]
        );
    }
}
