//! # Tree Walker Module
//!
//! Rispecchia una directory sorgente sotto una nuova radice di destinazione.
//!
//! - Directory: creata sotto la destinazione (la radice compresa, al primo
//!   passo). Un errore di creazione interrompe tutto il walk.
//! - File: nome risolto con `PathResolver`, poi `TaskOptimizer` con
//!   `JpegPolicy::Skip`. Un errore su un singolo file viene loggato e il walk
//!   continua.
//!
//! L'ordine è depth-first, lessicale per directory.

use crate::error::{ConvertError, Result};
use crate::optimizer::path_resolver::PathResolver;
use crate::optimizer::task_optimizer::{JpegPolicy, TaskOptimizer};
use crate::progress::ConversionStats;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use walkdir::WalkDir;

/// Recursive directory mirror
pub struct TreeWalker<'a> {
    src_root: &'a Path,
    dest_root: &'a Path,
}

impl<'a> TreeWalker<'a> {
    pub fn new(src_root: &'a Path, dest_root: &'a Path) -> Self {
        Self { src_root, dest_root }
    }

    /// Walks `src_root`, converting every file into the mirrored tree.
    ///
    /// Fails only on directory creation or traversal errors.
    pub fn walk(&self) -> Result<ConversionStats> {
        let mut stats = ConversionStats::new();

        for entry in WalkDir::new(self.src_root)
            .follow_links(false)
            .sort_by_file_name()
        {
            let entry = entry?;
            let child = entry.path();
            info!("  | {}", child.display());

            if entry.file_type().is_dir() {
                let dest_dir = self.mirror(child);
                fs::create_dir(&dest_dir).map_err(|source| ConvertError::Mkdir {
                    path: dest_dir.clone(),
                    source,
                })?;
                continue;
            }

            let dest = self.destination_for_file(child);
            info!("  | dest: {}", dest.display());

            match TaskOptimizer::dispatch_unit(child, &dest, JpegPolicy::Skip) {
                Ok(outcome) => stats.record(&outcome),
                Err(e) => {
                    error!("{}: {}", child.display(), e);
                    stats.add_error();
                }
            }
        }

        Ok(stats)
    }

    /// Same relative location under `dest_root`
    fn mirror(&self, path: &Path) -> PathBuf {
        match path.strip_prefix(self.src_root) {
            Ok(relative) if relative.as_os_str().is_empty() => self.dest_root.to_path_buf(),
            Ok(relative) => self.dest_root.join(relative),
            // WalkDir only yields paths below the root it was given
            Err(_) => self.dest_root.join(path),
        }
    }

    /// Mirrored parent directory joined with the resolved file name
    fn destination_for_file(&self, child: &Path) -> PathBuf {
        let parent = child.parent().unwrap_or(self.src_root);
        let dest_parent = self.mirror(parent);
        match child.file_name() {
            Some(name) => dest_parent.join(PathResolver::resolve_destination(Path::new(name))),
            None => dest_parent,
        }
    }
}
