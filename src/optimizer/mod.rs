//! # Optimizer Module
//!
//! Modulo che separa le responsabilità in sottomoduli:
//! - `media_optimizer`: Orchestratore principale
//! - `task_optimizer`: Dispatcher per singole unità
//! - `tree_walker`: Mirror ricorsivo di una directory
//! - `path_resolver`: Logica di calcolo path centralizzata

pub mod media_optimizer;
pub mod path_resolver;
pub mod task_optimizer;
pub mod tree_walker;

pub use media_optimizer::MediaOptimizer;
pub use path_resolver::{FileNameSplit, PathResolver, StemExt};
pub use task_optimizer::{JpegPolicy, TaskOptimizer, UnitOutcome};
pub use tree_walker::TreeWalker;
