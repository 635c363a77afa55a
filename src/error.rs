//! # Error Types Module
//!
//! Questo modulo definisce tutti i tipi di errore custom dell'applicazione.
//!
//! ## Responsabilità:
//! - Definisce `ConvertError` enum per categorizzare tutti gli errori possibili
//! - Mantiene il contesto (path, nome entry) insieme all'errore sottostante
//! - Integra con `thiserror` per messaggi e source chaining
//!
//! ## Categorie di errori:
//! - `Decode` / `Encode`: transcodifica di una singola immagine
//! - `ArchiveOpen` / `ArchiveWrite`: gestione archivi zip (fatali per l'archivio)
//! - `ArchiveEntry`: entry illeggibile (saltata, non fatale)
//! - `Mkdir` / `Walk`: attraversamento directory (fatali per tutto il walk)
//! - `UnsupportedType`: estensione non gestita dal dispatcher
//! - `Io`: errori generici del filesystem (open, create, copy, write)
//! - `NotFound`: path sorgente inesistente
//!
//! ## Politica di propagazione:
//! Gli errori confinati a un singolo elemento (un'immagine dentro un archivio,
//! un file dentro una directory) vengono loggati dal chiamante e saltati;
//! tutti gli altri risalgono fino a `main` e producono exit code 1.

use std::path::PathBuf;

/// Custom error types for image conversion
#[derive(thiserror::Error, Debug)]
pub enum ConvertError {
    #[error("image decode error: {0}")]
    Decode(#[source] image::ImageError),

    #[error("jpeg encode error: {0}")]
    Encode(#[source] image::ImageError),

    #[error("cannot open archive {}: {source}", path.display())]
    ArchiveOpen {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("cannot read archive entry: {0}")]
    ArchiveEntry(#[source] zip::result::ZipError),

    #[error("archive write error: {0}")]
    ArchiveWrite(#[from] zip::result::ZipError),

    #[error("cannot create directory {}: {source}", path.display())]
    Mkdir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("{context} {}: {source}", path.display())]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: no such file or directory", .0.display())]
    NotFound(PathBuf),
}

impl ConvertError {
    /// Wraps an I/O error with the operation and path that produced it
    pub fn io(context: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            context,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_type_names_extension() {
        let err = ConvertError::UnsupportedType(".txt".to_string());
        assert_eq!(err.to_string(), "unsupported file type: .txt");
    }

    #[test]
    fn test_io_error_carries_context() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ConvertError::io("create", "out/a.jpg", source);
        let message = err.to_string();
        assert!(message.starts_with("create out/a.jpg"));
        assert!(message.contains("denied"));
    }

    #[test]
    fn test_not_found_message() {
        let err = ConvertError::NotFound(PathBuf::from("missing.png"));
        assert_eq!(err.to_string(), "missing.png: no such file or directory");
    }
}
