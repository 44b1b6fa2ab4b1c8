use crate::atomcollection::AtomCollection;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read a PDBQT file into an [`AtomCollection`].
///
/// PDBQT is PDB-like but carries partial charges and AutoDock atom types in
/// the trailing columns, which strict PDB parsers reject. Coordinates and
/// residue identity live in the standard fixed columns, so a small dedicated
/// reader is enough. Multi-model files (docked poses) yield the first model
/// only.
pub fn open_pdbqt(path: &Path) -> Result<AtomCollection> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    from_pdbqt(BufReader::new(file))
}

pub fn from_pdbqt<R: BufRead>(reader: R) -> Result<AtomCollection> {
    let mut coords = Vec::new();
    let mut res_ids = Vec::new();
    let mut res_names = Vec::new();
    let mut chain_ids = Vec::new();
    let mut atom_names = Vec::new();
    let mut is_hetero = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.starts_with("ENDMDL") && !coords.is_empty() {
            break;
        }
        let hetero = if line.starts_with("ATOM") {
            false
        } else if line.starts_with("HETATM") {
            true
        } else {
            continue;
        };

        // standard PDB fixed columns; records too short or malformed are skipped
        let Some(record) = parse_atom_record(&line) else {
            continue;
        };
        coords.push(record.coord);
        res_ids.push(record.res_id);
        res_names.push(record.res_name);
        chain_ids.push(record.chain_id);
        atom_names.push(record.atom_name);
        is_hetero.push(hetero);
    }

    Ok(AtomCollection::new(
        coords, res_ids, res_names, chain_ids, atom_names, is_hetero,
    ))
}

struct AtomRecord {
    coord: [f64; 3],
    res_id: i32,
    res_name: String,
    chain_id: String,
    atom_name: String,
}

fn parse_atom_record(line: &str) -> Option<AtomRecord> {
    let field = |start: usize, end: usize| line.get(start..end).map(str::trim);

    let atom_name = field(12, 16)?.to_string();
    let res_name = field(17, 20)?.to_string();
    let chain_id = field(21, 22)?.to_string();
    let res_id: i32 = field(22, 26)?.parse().ok()?;
    let x: f64 = field(30, 38)?.parse().ok()?;
    let y: f64 = field(38, 46)?.parse().ok()?;
    let z: f64 = field(46, 54)?.parse().ok()?;

    Some(AtomRecord {
        coord: [x, y, z],
        res_id,
        res_name,
        chain_id,
        atom_name,
    })
}

#[cfg(test)]
mod tests {
    use super::from_pdbqt;

    const POSE: &str = "\
MODEL 1
REMARK VINA RESULT:    -8.5      0.000      0.000
HETATM    1  C1  LIG A   1      10.000  10.000  10.000  0.00  0.00    +0.000 C
HETATM    2  O1  LIG A   1      11.200  10.000  10.000  0.00  0.00    -0.350 OA
ENDMDL
MODEL 2
REMARK VINA RESULT:    -7.2      1.500      2.100
HETATM    1  C1  LIG A   1      20.000  20.000  20.000  0.00  0.00    +0.000 C
ENDMDL
";

    #[test]
    fn test_reads_first_model_only() {
        let ac = from_pdbqt(POSE.as_bytes()).unwrap();
        assert_eq!(ac.get_size(), 2);
        assert_eq!(ac.get_coord(0), &[10.0, 10.0, 10.0]);
        assert_eq!(ac.get_atom_name(1), "O1");
        assert!(ac.get_is_hetero(0));
        assert_eq!(ac.residue_key(0).to_string(), "LIG 1 A");
    }

    #[test]
    fn test_malformed_records_are_skipped() {
        let input = "ATOM  truncated line\nHETATM    1  C1  LIG A   1      bad     10.000  10.000\n";
        let ac = from_pdbqt(input.as_bytes()).unwrap();
        assert!(ac.is_empty());
    }
}
