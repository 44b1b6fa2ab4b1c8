use super::batch::{
    ScreenConfig, DEFAULT_ENERGY_RANGE, DEFAULT_EXHAUSTIVENESS, DEFAULT_NUM_MODES,
    DEFAULT_WORKERS,
};
use super::commands;
use clap::{Parser, Subcommand};
use ligandock_core::contacts::DEFAULT_CUTOFF;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare receptor residues contacted by an experimental ligand vs a docked pose
    Contacts {
        /// Experimentally observed ligand structure
        #[arg(long)]
        experimental: PathBuf,
        /// Receptor the docking was performed against
        #[arg(long)]
        receptor: PathBuf,
        /// Docked ligand pose
        #[arg(long)]
        docked: PathBuf,
        /// Contact distance cutoff in Angstroms
        #[arg(long, default_value_t = DEFAULT_CUTOFF)]
        cutoff: f64,
    },
    /// Dock one ligand against every receptor .pdbqt under a directory
    Screen {
        #[arg(long)]
        receptor_dir: PathBuf,
        #[arg(long)]
        ligand: PathBuf,
        /// CSV with columns pdb_id,center_x..size_z; omit to use the fallback box
        #[arg(long)]
        pocket_table: Option<PathBuf>,
        /// Where the summary table is written; defaults to the receptor directory
        #[arg(long)]
        out_root: Option<PathBuf>,
        /// Docking executable (smina / vina)
        #[arg(long)]
        engine: PathBuf,
        #[arg(long, default_value_t = DEFAULT_NUM_MODES)]
        num_modes: u32,
        #[arg(long, default_value_t = DEFAULT_ENERGY_RANGE)]
        energy_range: u32,
        #[arg(long, default_value_t = DEFAULT_EXHAUSTIVENESS)]
        exhaustiveness: u32,
        #[arg(long, default_value_t = DEFAULT_WORKERS)]
        workers: usize,
    },
}

impl Cli {
    pub fn execute(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Contacts {
                experimental,
                receptor,
                docked,
                cutoff,
            } => commands::contacts::execute(&experimental, &receptor, &docked, cutoff),
            Commands::Screen {
                receptor_dir,
                ligand,
                pocket_table,
                out_root,
                engine,
                num_modes,
                energy_range,
                exhaustiveness,
                workers,
            } => {
                let out_root = out_root.unwrap_or_else(|| receptor_dir.clone());
                let config = ScreenConfig {
                    receptor_dir,
                    ligand,
                    pocket_table,
                    out_root,
                    engine,
                    num_modes,
                    energy_range,
                    exhaustiveness,
                    workers,
                };
                commands::screen::execute(&config)
            }
        }
    }
}
