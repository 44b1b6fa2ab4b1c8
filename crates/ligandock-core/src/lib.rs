//! # ligandock-core
//!
//! A library for the structure handling behind the docking tools.
//!
//! __ligandock-core__ provides functionality for:
//! * Reading structures from PDB, mmCIF and PDBQT files
//! * Residue-level identity keys for comparing contact sets
//! * Computing the receptor residues a ligand contacts within a cutoff
//!
//! The main entry point is the [`AtomCollection`] struct, a column-oriented
//! store of one structure's atoms.
//!
mod atomcollection;
mod conversions;
mod load;
mod pdbqt;
mod residue;

pub mod contacts;

pub use self::atomcollection::AtomCollection;
pub use self::load::load_structure;
pub use self::residue::ResidueKey;
