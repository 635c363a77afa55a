//! # Media Optimizer Module
//!
//! Orchestratore principale: decide tra walk di directory e unità singola.
//!
//! ## Flusso:
//! 1. Verifica che il path sorgente esista
//! 2. Split stem/estensione e log dei dettagli dell'input
//! 3. Risolve il path di destinazione con `PathResolver`
//! 4. Directory: `TreeWalker` (JPEG saltati); file: `TaskOptimizer` (JPEG copiati)
//! 5. Log del riepilogo e `done!`

use crate::error::ConvertError;
use crate::optimizer::path_resolver::{FileNameSplit, PathResolver};
use crate::optimizer::task_optimizer::{JpegPolicy, TaskOptimizer};
use crate::optimizer::tree_walker::TreeWalker;
use crate::progress::ConversionStats;
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// Orchestratore di una singola esecuzione
pub struct MediaOptimizer {
    src_path: PathBuf,
    dest_path: PathBuf,
    src_is_dir: bool,
}

impl MediaOptimizer {
    /// Inspects the source path and resolves its destination
    pub fn new(src_path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(src_path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConvertError::NotFound(src_path.to_path_buf()),
            _ => ConvertError::io("stat", src_path, e),
        })?;
        let src_is_dir = metadata.is_dir();

        let split = src_path
            .file_name()
            .map(FileNameSplit::split)
            .unwrap_or_else(|| FileNameSplit::split(src_path.as_os_str()));
        info!(
            "stem: {}, ext: {}, isdir: {}",
            split.stem.to_string_lossy(),
            split.ext.to_string_lossy(),
            src_is_dir
        );

        let dest_path = PathResolver::resolve_destination(src_path);
        info!("dest: {}", dest_path.display());

        Ok(Self {
            src_path: src_path.to_path_buf(),
            dest_path,
            src_is_dir,
        })
    }

    pub fn destination(&self) -> &Path {
        &self.dest_path
    }

    /// Runs the conversion. Per-item failures inside a walk or an archive
    /// are logged and counted, never returned.
    pub fn run(&self) -> Result<ConversionStats> {
        let stats = if self.src_is_dir {
            info!("start to walk on: {}", self.src_path.display());
            TreeWalker::new(&self.src_path, &self.dest_path).walk()?
        } else {
            let outcome =
                TaskOptimizer::dispatch_unit(&self.src_path, &self.dest_path, JpegPolicy::Copy)?;
            let mut stats = ConversionStats::new();
            stats.record(&outcome);
            stats
        };

        info!("{}", stats.format_summary());
        info!("done!");
        Ok(stats)
    }
}
