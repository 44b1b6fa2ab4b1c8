use crate::residue::ResidueKey;

/// Column-oriented store of one structure's atoms.
///
/// Only the annotations the contact analysis needs are kept: coordinates plus
/// enough residue identity to build a [`ResidueKey`] per atom.
pub struct AtomCollection {
    size: usize,
    coords: Vec<[f64; 3]>,
    res_ids: Vec<i32>,
    res_names: Vec<String>,
    chain_ids: Vec<String>,
    atom_names: Vec<String>,
    is_hetero: Vec<bool>,
}

impl AtomCollection {
    pub fn new(
        coords: Vec<[f64; 3]>,
        res_ids: Vec<i32>,
        res_names: Vec<String>,
        chain_ids: Vec<String>,
        atom_names: Vec<String>,
        is_hetero: Vec<bool>,
    ) -> Self {
        AtomCollection {
            size: coords.len(),
            coords,
            res_ids,
            res_names,
            chain_ids,
            atom_names,
            is_hetero,
        }
    }
    pub fn get_size(&self) -> usize {
        self.size
    }
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
    pub fn get_coord(&self, idx: usize) -> &[f64; 3] {
        &self.coords[idx]
    }
    pub fn get_coords(&self) -> &Vec<[f64; 3]> {
        self.coords.as_ref()
    }
    pub fn get_res_id(&self, idx: usize) -> i32 {
        self.res_ids[idx]
    }
    pub fn get_res_name(&self, idx: usize) -> &String {
        &self.res_names[idx]
    }
    pub fn get_chain_id(&self, idx: usize) -> &String {
        &self.chain_ids[idx]
    }
    pub fn get_atom_name(&self, idx: usize) -> &String {
        &self.atom_names[idx]
    }
    pub fn get_is_hetero(&self, idx: usize) -> bool {
        self.is_hetero[idx]
    }
    /// Residue identity of the atom at `idx`.
    pub fn residue_key(&self, idx: usize) -> ResidueKey {
        ResidueKey::new(&self.res_names[idx], self.res_ids[idx], &self.chain_ids[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::AtomCollection;

    #[test]
    fn test_residue_key_per_atom() {
        let ac = AtomCollection::new(
            vec![[0.0, 0.0, 0.0], [1.5, 0.0, 0.0]],
            vec![12, 12],
            vec!["LEU".to_string(), "LEU".to_string()],
            vec!["A".to_string(), "A".to_string()],
            vec!["CA".to_string(), "CB".to_string()],
            vec![false, false],
        );
        assert_eq!(ac.get_size(), 2);
        // both atoms resolve to the same residue
        assert_eq!(ac.residue_key(0), ac.residue_key(1));
        assert_eq!(ac.residue_key(0).to_string(), "LEU 12 A");
    }
}
