//! # Jpeger Library
//!
//! Questo è il modulo principale della libreria che espone tutte le API pubbliche.
//!
//! ## Responsabilità:
//! - Definisce la struttura modulare dell'applicazione
//! - Espone i tipi e le funzioni principali tramite re-exports
//!
//! ## Architettura dei moduli:
//! - `config`: Configurazione, costanti di programma e validazione
//! - `error`: Tipi di errore custom
//! - `file_manager`: Classificazione per estensione e operazioni sui file
//! - `image_processor`: Transcodifica di una singola immagine in JPEG
//! - `archive_processor`: Transcodifica delle immagini dentro un archivio zip
//! - `optimizer`: Risoluzione path, dispatcher, walk e orchestrazione
//! - `platform`: Informazioni sulla piattaforma per il banner
//! - `progress`: Statistiche dell'esecuzione
//!
//! ## Utilizzo:
//! ```ignore
//! use jpeger::MediaOptimizer;
//!
//! let optimizer = MediaOptimizer::new(Path::new("photos.zip"))?;
//! optimizer.run()?;
//! ```

pub mod archive_processor;
pub mod config;
pub mod error;
pub mod file_manager;
pub mod image_processor;
pub mod optimizer;
pub mod platform;
pub mod progress;

pub use config::Config;
pub use error::ConvertError;
pub use optimizer::MediaOptimizer;
pub use progress::ConversionStats;
