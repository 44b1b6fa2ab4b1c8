//! Residue-level contact sets between a ligand and a receptor, and the
//! comparison of an experimental ligand against a docked pose.

use crate::{AtomCollection, ResidueKey};
use std::collections::BTreeSet;

/// Default distance cutoff in Angstroms.
pub const DEFAULT_CUTOFF: f64 = 4.0;

/// Receptor residues with any atom within `cutoff` of any ligand atom.
///
/// Recomputed fresh on every call; multiple atom pairs in the same residue
/// collapse into one key.
pub fn contact_residues(
    ligand: &AtomCollection,
    receptor: &AtomCollection,
    cutoff: f64,
) -> BTreeSet<ResidueKey> {
    let cutoff2 = cutoff * cutoff;
    let mut contacts = BTreeSet::new();
    for rec_idx in 0..receptor.get_size() {
        let rec_coord = receptor.get_coord(rec_idx);
        let in_range = ligand
            .get_coords()
            .iter()
            .any(|lig_coord| distance_squared(lig_coord, rec_coord) <= cutoff2);
        if in_range {
            contacts.insert(receptor.residue_key(rec_idx));
        }
    }
    contacts
}

/// Contact sets of the experimental ligand and the docked pose against the
/// same receptor.
pub struct ContactComparison {
    pub experimental: BTreeSet<ResidueKey>,
    pub docked: BTreeSet<ResidueKey>,
}

impl ContactComparison {
    /// Residues contacted by both ligands.
    pub fn shared(&self) -> BTreeSet<ResidueKey> {
        self.experimental
            .intersection(&self.docked)
            .cloned()
            .collect()
    }
}

pub fn compare_contacts(
    experimental: &AtomCollection,
    docked: &AtomCollection,
    receptor: &AtomCollection,
    cutoff: f64,
) -> ContactComparison {
    ContactComparison {
        experimental: contact_residues(experimental, receptor, cutoff),
        docked: contact_residues(docked, receptor, cutoff),
    }
}

fn distance_squared(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    dx * dx + dy * dy + dz * dz
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AtomCollection;

    fn single_atom(coord: [f64; 3]) -> AtomCollection {
        AtomCollection::new(
            vec![coord],
            vec![1],
            vec!["LIG".to_string()],
            vec!["X".to_string()],
            vec!["C1".to_string()],
            vec![true],
        )
    }

    fn receptor_three_residues() -> AtomCollection {
        // GLY 1, ALA 2, SER 3 on chain A, spaced 6 A apart on the x axis
        AtomCollection::new(
            vec![[0.0, 0.0, 0.0], [6.0, 0.0, 0.0], [12.0, 0.0, 0.0]],
            vec![1, 2, 3],
            vec!["GLY".to_string(), "ALA".to_string(), "SER".to_string()],
            vec!["A".to_string(); 3],
            vec!["CA".to_string(); 3],
            vec![false; 3],
        )
    }

    #[test]
    fn test_contacts_within_cutoff() {
        let receptor = receptor_three_residues();
        let ligand = single_atom([3.0, 0.0, 0.0]);
        // 3 A from GLY 1 and ALA 2, 9 A from SER 3
        let contacts = contact_residues(&ligand, &receptor, 4.0);
        let names: Vec<String> = contacts.iter().map(|k| k.res_name.clone()).collect();
        assert_eq!(names, vec!["ALA", "GLY"]);
    }

    #[test]
    fn test_cutoff_is_inclusive() {
        let receptor = receptor_three_residues();
        let ligand = single_atom([4.0, 0.0, 0.0]);
        let contacts = contact_residues(&ligand, &receptor, 4.0);
        assert!(contacts.iter().any(|k| k.res_name == "GLY"));
    }

    #[test]
    fn test_duplicate_atom_pairs_collapse() {
        // two receptor atoms of the same residue both within range
        let receptor = AtomCollection::new(
            vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]],
            vec![7, 7],
            vec!["HIS".to_string(); 2],
            vec!["B".to_string(); 2],
            vec!["CA".to_string(), "CB".to_string()],
            vec![false; 2],
        );
        let ligand = single_atom([2.0, 0.0, 0.0]);
        let contacts = contact_residues(&ligand, &receptor, 4.0);
        assert_eq!(contacts.len(), 1);
    }

    #[test]
    fn test_shared_is_set_intersection() {
        let receptor = receptor_three_residues();
        let experimental = single_atom([3.0, 0.0, 0.0]); // GLY, ALA
        let docked = single_atom([9.0, 0.0, 0.0]); // ALA, SER

        let cmp = compare_contacts(&experimental, &docked, &receptor, 4.0);
        let shared = cmp.shared();
        assert_eq!(shared.len(), 1);
        assert_eq!(shared.iter().next().unwrap().res_name, "ALA");

        // intersection computed from the two independent sets
        let manual: BTreeSet<_> = cmp.experimental.intersection(&cmp.docked).cloned().collect();
        assert_eq!(shared, manual);
    }

    #[test]
    fn test_empty_ligand_has_no_contacts() {
        let receptor = receptor_three_residues();
        let ligand = AtomCollection::new(vec![], vec![], vec![], vec![], vec![], vec![]);
        assert!(contact_residues(&ligand, &receptor, 4.0).is_empty());
    }
}
