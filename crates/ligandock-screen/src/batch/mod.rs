//! Batch docking driver.
//!
//! Walks a directory of receptor PDBQT files, docks one ligand against each
//! with an external smina/Vina-style executable, resumes receptors whose pose
//! file already holds a model, and aggregates one status row per receptor
//! into a summary table.
mod config;
mod pocket;
mod pose;
mod receptor;
mod runner;
mod summary;

pub use config::{
    ScreenConfig, DEFAULT_ENERGY_RANGE, DEFAULT_EXHAUSTIVENESS, DEFAULT_NUM_MODES,
    DEFAULT_WORKERS,
};
pub use pocket::{PocketBox, PocketTable, FALLBACK_BOX};
pub use pose::{has_model, parse_best_affinity};
pub use receptor::{discover_receptors, infer_pdb_id, POSE_SUFFIX};
pub use runner::{run_screen, RunResult, RunStatus};
pub use summary::{ScreenReport, SUMMARY_FILENAME};
