//! # Conversion Statistics Module
//!
//! Questo modulo tiene il conteggio di quanto fatto durante un'esecuzione.
//!
//! ## Statistiche tracciate:
//! - **files_converted**: PNG transcodificati in JPEG
//! - **files_copied**: JPEG copiati così come sono
//! - **files_skipped**: JPEG saltati durante il walk
//! - **archives_converted** / **entries_written** / **entries_dropped**: archivi zip
//! - **errors**: unità fallite (loggate e saltate)
//! - **bytes_written**: byte totali scritti in output
//!
//! Il riepilogo viene loggato una volta, subito prima di `done!`.
//!
//! ## Esempio:
//! ```ignore
//! let mut stats = ConversionStats::new();
//! stats.record(&outcome);
//! info!("{}", stats.format_summary());
//! ```

use crate::file_manager::FileManager;
use crate::optimizer::task_optimizer::UnitOutcome;

/// Statistics tracker for a conversion run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConversionStats {
    pub files_converted: usize,
    pub files_copied: usize,
    pub files_skipped: usize,
    pub archives_converted: usize,
    pub entries_written: usize,
    pub entries_dropped: usize,
    pub errors: usize,
    pub bytes_written: u64,
}

impl ConversionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulates the outcome of one unit
    pub fn record(&mut self, outcome: &UnitOutcome) {
        match *outcome {
            UnitOutcome::Converted { bytes } => {
                self.files_converted += 1;
                self.bytes_written += bytes;
            }
            UnitOutcome::Copied { bytes } => {
                self.files_copied += 1;
                self.bytes_written += bytes;
            }
            UnitOutcome::Skipped => self.files_skipped += 1,
            UnitOutcome::Archive(report) => {
                self.archives_converted += 1;
                self.entries_written += report.written;
                self.entries_dropped += report.dropped;
                self.bytes_written += report.archive_size;
            }
        }
    }

    pub fn add_error(&mut self) {
        self.errors += 1;
    }

    pub fn files_processed(&self) -> usize {
        self.files_converted
            + self.files_copied
            + self.files_skipped
            + self.archives_converted
            + self.errors
    }

    pub fn format_summary(&self) -> String {
        format!(
            "Processed: {} files | Converted: {} | Copied: {} | Skipped: {} | Archives: {} ({} entries, {} dropped) | Errors: {} | Written: {}",
            self.files_processed(),
            self.files_converted,
            self.files_copied,
            self.files_skipped,
            self.archives_converted,
            self.entries_written,
            self.entries_dropped,
            self.errors,
            FileManager::format_size(self.bytes_written),
        )
    }
}
