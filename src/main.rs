//! # Jpeger - Main Entry Point
//!
//! Questo è il punto di ingresso principale dell'applicazione.
//!
//! ## Responsabilità:
//! - Parsing degli argomenti della command line con `clap`
//! - Inizializzazione del logging con `tracing` (stdout + file di log in append)
//! - Avvio di `MediaOptimizer` e conversione del risultato in exit code
//!
//! ## Exit code:
//! - `0`: esecuzione completata (anche con errori su singoli elementi)
//! - `1`: argomento mancante, sorgente inesistente, errore fatale
//!
//! ## Esempio di utilizzo:
//! ```bash
//! jpeger ./photos.zip
//! jpeger ./album --verbose --log-file /tmp/jpeger.log
//! ```

use anyhow::Result;
use clap::Parser;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;
use tracing::{error, info};
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

use jpeger::config::{PROGRAM, VERSION};
use jpeger::platform::SystemInfo;
use jpeger::{Config, MediaOptimizer};

#[derive(Parser)]
#[command(name = "jpeger", version)]
#[command(about = "Convert PNG images, folders and zip archives of images to JPEG")]
struct Args {
    /// File (.png, .jpg, .jpeg, .zip) or directory to convert
    path: Option<PathBuf>,

    /// Append-only log file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {:#}", PROGRAM, e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(&config) {
        eprintln!("{}: cannot open log file {}: {:#}", PROGRAM, config.log_file.display(), e);
        return ExitCode::FAILURE;
    }

    info!("<<< {} {} {} >>>", PROGRAM, VERSION, SystemInfo::current());
    info!("args: {:?}", std::env::args().collect::<Vec<_>>());

    let Some(src_path) = args.path else {
        error!("too few arguments");
        return ExitCode::FAILURE;
    };

    match run(&src_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(src_path: &std::path::Path) -> Result<()> {
    let optimizer = MediaOptimizer::new(src_path)?;
    optimizer.run()?;
    Ok(())
}

/// Config file first, then command line overrides
fn load_config(args: &Args) -> Result<Config> {
    let mut config = match args.config {
        Some(ref path) => Config::from_file(path)?,
        None => Config::default(),
    };

    if let Some(ref log_file) = args.log_file {
        config.log_file = log_file.clone();
    }
    config.verbose |= args.verbose;

    config.validate()?;
    Ok(config)
}

/// Every log line goes to stdout and to the append-only log file
fn init_logging(config: &Config) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    let level = if config.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stdout.and(Mutex::new(log_file)))
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
