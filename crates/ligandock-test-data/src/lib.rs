//! ligandock-test-data
//!
//! A module to provide test files embedded in the crate for use in testing.
//!
//! The test files are represented as `TestFile` objects which package the raw
//! file data and create temporary files for programs to operate on.
use std::fs;
use tempfile::{Builder, NamedTempFile};

#[derive(Debug)]
/// Test File
///
/// Example usage:
///
/// ```ignore
/// // returns (filepath, _tempfile_handle).
/// // _handle ensures the tempfile remains in scope
/// use ligandock_test_data::TestFile;
/// let (pdb_file, _temp) = TestFile::complex_01().create_temp().unwrap();
/// ```
pub struct TestFile {
    filebinary: &'static [u8],
    suffix: &'static str,
}

impl TestFile {
    /// Small protein/ligand complex: three residues on chain A plus a LIG
    /// hetero group positioned next to GLY 1 and ALA 2.
    pub fn complex_01() -> Self {
        Self {
            filebinary: include_bytes!("../data/structures/complex.pdb"),
            suffix: "pdb",
        }
    }
    /// Receptor prepared for docking (PDBQT charge/type columns).
    pub fn receptor_01() -> Self {
        Self {
            filebinary: include_bytes!("../data/docking/receptor.pdbqt"),
            suffix: "pdbqt",
        }
    }
    /// Docked pose with two models; the second carries the better score (-8.5).
    pub fn pose_01() -> Self {
        Self {
            filebinary: include_bytes!("../data/docking/pose_docked.pdbqt"),
            suffix: "pdbqt",
        }
    }
    /// Pocket-box table with entries for 4XYZ and 7N8T.
    pub fn pockets_01() -> Self {
        Self {
            filebinary: include_bytes!("../data/docking/pockets.csv"),
            suffix: "csv",
        }
    }
    /// Pocket-box table missing the required `size_z` column.
    pub fn pockets_missing_col_01() -> Self {
        Self {
            filebinary: include_bytes!("../data/docking/pockets_missing_col.csv"),
            suffix: "csv",
        }
    }

    /// Raw file contents, for tests that need to control the filename.
    pub fn raw(&self) -> &'static [u8] {
        self.filebinary
    }

    pub fn create_temp(&self) -> std::io::Result<(String, NamedTempFile)> {
        let temp = Builder::new()
            .suffix(&format!(".{}", self.suffix))
            .tempfile()?;

        fs::write(&temp, self.filebinary)?;
        let path = temp.path().to_string_lossy().into_owned();

        Ok((path, temp))
    }
}
