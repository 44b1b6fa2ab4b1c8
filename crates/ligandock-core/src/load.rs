use crate::atomcollection::AtomCollection;
use crate::pdbqt;
use anyhow::{anyhow, Context, Result};
use std::path::Path;

/// Load a structure file into an [`AtomCollection`].
///
/// `.pdbqt` files go through the in-crate reader; everything else is handed
/// to `pdbtbx`, which dispatches on extension (PDB and mmCIF).
pub fn load_structure(path: &Path) -> Result<AtomCollection> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    if ext.as_deref() == Some("pdbqt") {
        return pdbqt::open_pdbqt(path);
    }

    let path_str = path
        .to_str()
        .with_context(|| format!("non-UTF8 path: {}", path.display()))?;
    let (pdb, _errors) = pdbtbx::open(path_str)
        .map_err(|e| anyhow!("failed to parse {}: {:?}", path.display(), e))?;
    Ok(AtomCollection::from(&pdb))
}
