//! # Task Optimizer Module
//!
//! Dispatcher per singole unità di lavoro (un file o un archivio).
//! Sceglie il comportamento in base all'estensione della sorgente:
//!
//! | estensione      | comportamento |
//! |-----------------|---------------|
//! | `.png`          | transcodifica e scrive in `dest` |
//! | `.jpg`/`.jpeg`  | skip (se `JpegPolicy::Skip`) oppure copia byte-per-byte |
//! | `.zip`          | delega ad `ArchiveProcessor` |
//! | altro           | `ConvertError::UnsupportedType` |

use crate::archive_processor::{ArchiveProcessor, ArchiveReport};
use crate::error::{ConvertError, Result};
use crate::file_manager::{FileManager, UnitKind};
use crate::image_processor::ImageProcessor;
use std::path::Path;
use tracing::info;

/// What to do with JPEG sources
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JpegPolicy {
    /// Copy through unchanged (single file given on the command line)
    Copy,
    /// Produce no output at all (JPEG found while walking a directory)
    Skip,
}

/// What happened to a unit that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitOutcome {
    Converted { bytes: u64 },
    Copied { bytes: u64 },
    Skipped,
    Archive(ArchiveReport),
}

/// Worker per elaborazione singole unità
pub struct TaskOptimizer;

impl TaskOptimizer {
    /// Processes one file, writing its result to `dest`
    pub fn dispatch_unit(src: &Path, dest: &Path, jpeg: JpegPolicy) -> Result<UnitOutcome> {
        match FileManager::classify(src) {
            UnitKind::Png => {
                let input = FileManager::read(src)?;
                let transcoded = ImageProcessor::transcode(&input)?;
                FileManager::write(dest, &transcoded.bytes)?;
                Ok(UnitOutcome::Converted {
                    bytes: transcoded.bytes.len() as u64,
                })
            }
            UnitKind::Jpeg => match jpeg {
                JpegPolicy::Skip => {
                    info!("skip processing jpeg file: {}", src.display());
                    Ok(UnitOutcome::Skipped)
                }
                JpegPolicy::Copy => {
                    let bytes = FileManager::copy_file(src, dest)?;
                    Ok(UnitOutcome::Copied { bytes })
                }
            },
            UnitKind::Zip => {
                let report = ArchiveProcessor::transcode_archive(src, dest)?;
                info!(
                    "archive {}: {} entries written, {} dropped",
                    src.display(),
                    report.written,
                    report.dropped
                );
                Ok(UnitOutcome::Archive(report))
            }
            UnitKind::Other(ext) => Err(ConvertError::UnsupportedType(ext)),
        }
    }
}
