//! # File Management Module
//!
//! Questo modulo gestisce le operazioni sui file e la classificazione
//! dei tipi supportati.
//!
//! ## Responsabilità:
//! - Determinazione del tipo di unità dall'estensione (case-insensitive)
//! - Lettura/scrittura/copia di file con errori contestualizzati
//! - Formattazione human-readable delle dimensioni
//!
//! ## Tipi supportati:
//! - **PNG**: transcodifica in JPEG
//! - **JPEG** (`.jpg`, `.jpeg`): copia o skip
//! - **ZIP**: transcodifica delle immagini contenute
//!
//! Qualsiasi altra estensione è rifiutata dal dispatcher.

use crate::error::{ConvertError, Result};
use crate::optimizer::path_resolver::FileNameSplit;
use std::fs;
use std::path::Path;
use tracing::debug;

/// What a single file is, judged by its extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitKind {
    Png,
    Jpeg,
    Zip,
    /// Unsupported; carries the original extension (possibly empty)
    Other(String),
}

/// Manages file operations and type detection
pub struct FileManager;

impl FileManager {
    /// Classify a path by its lower-cased extension
    pub fn classify(path: &Path) -> UnitKind {
        let Some(name) = path.file_name() else {
            return UnitKind::Other(String::new());
        };
        let split = FileNameSplit::split(name);
        match split.ext_lower().as_str() {
            ".png" => UnitKind::Png,
            ".jpg" | ".jpeg" => UnitKind::Jpeg,
            ".zip" => UnitKind::Zip,
            _ => UnitKind::Other(split.ext.to_string_lossy().into_owned()),
        }
    }

    /// Read a whole file
    pub fn read(path: &Path) -> Result<Vec<u8>> {
        fs::read(path).map_err(|e| ConvertError::io("open", path, e))
    }

    /// Create (or truncate) `path` and write `bytes` to it
    pub fn write(path: &Path, bytes: &[u8]) -> Result<()> {
        fs::write(path, bytes).map_err(|e| ConvertError::io("write", path, e))
    }

    /// Byte-for-byte copy; returns the number of bytes copied.
    ///
    /// Copying a file onto itself would truncate it first, so that case
    /// leaves the file untouched.
    pub fn copy_file(src: &Path, dest: &Path) -> Result<u64> {
        if Self::same_file(src, dest) {
            debug!("source and destination are the same file: {}", src.display());
            return fs::metadata(src)
                .map(|m| m.len())
                .map_err(|e| ConvertError::io("stat", src, e));
        }
        fs::copy(src, dest).map_err(|e| ConvertError::io("copy", src, e))
    }

    fn same_file(a: &Path, b: &Path) -> bool {
        match (a.canonicalize(), b.canonicalize()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }

    /// Get human-readable file size
    pub fn format_size(size: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = size as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", size as u64, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}
