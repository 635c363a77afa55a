//! # Archive Processing Module
//!
//! Converte un archivio zip di immagini in un nuovo archivio zip di JPEG.
//!
//! ## Algoritmo:
//! 1. Apre l'archivio sorgente (errore fatale se non è uno zip valido)
//! 2. Crea uno `ZipWriter` su un buffer in memoria
//! 3. Per ogni entry, nell'ordine dell'archivio:
//!    - legge i byte e prova la transcodifica
//!    - successo: scrive `<stem>.jpg` nell'archivio in memoria; se il nome è
//!      già stato scritto (es. `a.png` e `a.jpg`) usa `<stem>_1.jpg`, `<stem>_2.jpg`...
//!    - fallimento: log + skip, l'archivio non viene mai interrotto
//! 4. Finalizza lo writer (central directory) PRIMA di leggere il buffer
//! 5. Scrive il buffer finalizzato nel file di destinazione
//!
//! ## Errori fatali:
//! - `ArchiveOpen`: sorgente non apribile o malformata
//! - `ArchiveWrite`: creazione entry / finalizzazione
//! - `Io`: creazione o scrittura della destinazione

use crate::error::{ConvertError, Result};
use crate::file_manager::FileManager;
use crate::image_processor::ImageProcessor;
use crate::optimizer::path_resolver::PathResolver;
use std::collections::HashSet;
use std::fs::File;
use std::io::{Cursor, Read, Write};
use std::path::Path;
use tracing::{info, warn};
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

/// Upper bound on the buffer reserved up front for one entry; the size
/// declared by the archive is not trusted beyond this.
const MAX_ENTRY_PREALLOC: u64 = 64 * 1024 * 1024;

/// Per-archive counters
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveReport {
    /// Entries transcoded and written to the destination archive
    pub written: usize,
    /// Entries that could not be read or decoded
    pub dropped: usize,
    /// Size of the finalized destination archive
    pub archive_size: u64,
}

/// Converts zip archives of images
pub struct ArchiveProcessor;

impl ArchiveProcessor {
    /// Transcodes every image entry of `src` into a new archive at `dest`.
    pub fn transcode_archive(src: &Path, dest: &Path) -> Result<ArchiveReport> {
        let file = File::open(src).map_err(|e| ConvertError::io("open", src, e))?;
        let mut archive = ZipArchive::new(file).map_err(|source| ConvertError::ArchiveOpen {
            path: src.to_path_buf(),
            source,
        })?;

        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let mut report = ArchiveReport::default();
        let mut used_names = HashSet::new();

        for index in 0..archive.len() {
            let (name, transcoded) = match Self::transcode_entry(&mut archive, index) {
                Ok(entry) => entry,
                Err((name, e)) => {
                    warn!("cannot convert entry: {}", e);
                    warn!("skip processing {}", name);
                    report.dropped += 1;
                    continue;
                }
            };

            let output_name = Self::unique_entry_name(&name, &mut used_names);
            info!("  => {}", output_name);
            writer.start_file(output_name.as_str(), SimpleFileOptions::default())?;
            writer
                .write_all(&transcoded)
                .map_err(|e| ConvertError::io("write entry", output_name.as_str(), e))?;
            report.written += 1;
        }

        // The central directory is only written by finish(); the buffer is incomplete before that.
        let buffer = writer.finish()?.into_inner();
        report.archive_size = buffer.len() as u64;

        FileManager::write(dest, &buffer)?;
        Ok(report)
    }

    /// `<stem>.jpg` for `entry_name`, or `<stem>_<n>.jpg` with the smallest
    /// free `n` when an earlier entry already took that name.
    fn unique_entry_name(entry_name: &str, used: &mut HashSet<String>) -> String {
        let candidate = PathResolver::archive_entry_name(entry_name);
        if used.insert(candidate.clone()) {
            return candidate;
        }

        let stem = &candidate[..candidate.len() - ".jpg".len()];
        let mut n = 1usize;
        loop {
            let renamed = format!("{}_{}.jpg", stem, n);
            if used.insert(renamed.clone()) {
                warn!("{} already written, storing {} as {}", candidate, entry_name, renamed);
                return renamed;
            }
            n += 1;
        }
    }

    /// Initial capacity for an entry buffer
    fn capacity_hint(declared: u64) -> usize {
        declared.min(MAX_ENTRY_PREALLOC) as usize
    }

    /// Reads and transcodes one entry. On failure returns the entry name (or
    /// its index when even the name is unreadable) alongside the error.
    fn transcode_entry<R: Read + std::io::Seek>(
        archive: &mut ZipArchive<R>,
        index: usize,
    ) -> std::result::Result<(String, Vec<u8>), (String, ConvertError)> {
        let mut entry = archive
            .by_index(index)
            .map_err(|e| (format!("#{}", index), ConvertError::ArchiveEntry(e)))?;
        let name = entry.name().to_string();
        info!("  {}", name);

        let mut data = Vec::with_capacity(Self::capacity_hint(entry.size()));
        if let Err(e) = entry.read_to_end(&mut data) {
            return Err((name.clone(), ConvertError::io("read entry", name.as_str(), e)));
        }

        match ImageProcessor::transcode(&data) {
            Ok(transcoded) => Ok((name, transcoded.bytes)),
            Err(e) => Err((name, e)),
        }
    }
}
