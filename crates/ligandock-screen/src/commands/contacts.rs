use anyhow::Result;
use ligandock_core::{contacts, load_structure};
use std::path::Path;

/// Load the three structures, compute both contact sets and print the fixed
/// comparison layout.
pub fn execute(experimental: &Path, receptor: &Path, docked: &Path, cutoff: f64) -> Result<()> {
    let experimental = load_structure(experimental)?;
    let receptor = load_structure(receptor)?;
    let docked = load_structure(docked)?;

    let comparison = contacts::compare_contacts(&experimental, &docked, &receptor, cutoff);

    println!("\n===== Interaction Comparison =====");
    println!("Experimental ligand contacts:");
    for residue in &comparison.experimental {
        println!("   {residue}");
    }
    println!("\nDocking ligand contacts:");
    for residue in &comparison.docked {
        println!("   {residue}");
    }
    println!("\nCommon residues:");
    for residue in comparison.shared() {
        println!("   {residue}");
    }
    println!("=================================\n");
    Ok(())
}
