use crate::atomcollection::AtomCollection;
use itertools::Itertools;
use pdbtbx::PDB;

impl From<&PDB> for AtomCollection {
    // the PDB API requires us to iterate:
    // PDB --> Chain --> Residue --> Atom if we want data from all.
    // Here we collect all the data in one go and return an AtomCollection
    fn from(pdb_data: &PDB) -> Self {
        let (coords, res_ids, res_names, chain_ids, atom_names, is_hetero): (
            Vec<[f64; 3]>,
            Vec<i32>,
            Vec<String>,
            Vec<String>,
            Vec<String>,
            Vec<bool>,
        ) = pdb_data
            .chains()
            .flat_map(|chain| {
                let chain_id = chain.id().to_string();
                chain.residues().flat_map(move |residue| {
                    let (res_number, _insertion_code) = residue.id();
                    let res_id = res_number as i32;
                    let res_name = residue.name().unwrap_or_default().to_string();
                    let chain_id = chain_id.clone();
                    residue.atoms().map(move |atom| {
                        let (x, y, z) = atom.pos();
                        (
                            [x, y, z],
                            res_id,
                            res_name.clone(),
                            chain_id.clone(),
                            atom.name().to_string(),
                            atom.hetero(),
                        )
                    })
                })
            })
            .multiunzip();

        AtomCollection::new(coords, res_ids, res_names, chain_ids, atom_names, is_hetero)
    }
}

#[cfg(test)]
mod tests {
    use crate::AtomCollection;
    use itertools::Itertools;
    use ligandock_test_data::TestFile;

    #[test]
    fn test_pdb_from() {
        let (pdb_file, _temp) = TestFile::complex_01().create_temp().unwrap();
        let (pdb_data, _errors) = pdbtbx::open(&pdb_file).unwrap();

        let ac = AtomCollection::from(&pdb_data);
        assert_eq!(ac.get_size(), pdb_data.atom_count());

        // hetero records survive the conversion
        let hetero_count = (0..ac.get_size()).filter(|&i| ac.get_is_hetero(i)).count();
        assert!(hetero_count > 0);

        // residue names are carried over per atom
        let res_names: Vec<String> = (0..ac.get_size())
            .map(|i| ac.get_res_name(i).clone())
            .unique()
            .sorted()
            .collect();
        assert!(res_names.contains(&"GLY".to_string()));
        assert!(res_names.contains(&"LIG".to_string()));
    }
}
