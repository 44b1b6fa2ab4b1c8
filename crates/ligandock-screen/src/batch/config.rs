use std::path::PathBuf;

pub const DEFAULT_NUM_MODES: u32 = 10;
pub const DEFAULT_EXHAUSTIVENESS: u32 = 8;
pub const DEFAULT_ENERGY_RANGE: u32 = 3;
pub const DEFAULT_WORKERS: usize = 8;

/// Every knob of one batch run in one place, handed to [`run_screen`].
///
/// [`run_screen`]: super::run_screen
#[derive(Debug, Clone)]
pub struct ScreenConfig {
    /// Directory searched recursively for receptor `.pdbqt` files.
    pub receptor_dir: PathBuf,
    /// The single ligand docked against every receptor.
    pub ligand: PathBuf,
    /// Pocket-box table; `None` selects the fixed fallback box for all receptors.
    pub pocket_table: Option<PathBuf>,
    /// Directory the summary table is written to.
    pub out_root: PathBuf,
    /// Path to the docking executable.
    pub engine: PathBuf,
    pub num_modes: u32,
    pub energy_range: u32,
    pub exhaustiveness: u32,
    /// Size of the worker pool; one receptor per worker at a time.
    pub workers: usize,
}
