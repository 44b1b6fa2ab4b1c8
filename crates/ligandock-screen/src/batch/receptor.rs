use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Suffix of pose files written beside each receptor.
pub const POSE_SUFFIX: &str = "_docked.pdbqt";

lazy_static! {
    // e.g. 7N8T_protein.pdbqt, 4xyz_A_receptor.pdbqt
    static ref RECEPTOR_ID_RE: Regex =
        Regex::new(r"^([0-9A-Za-z]{4})(?:_[A-Za-z0-9]+)?_(?:protein|receptor|rec)\.pdbqt$")
            .unwrap();
}

/// Canonical receptor identifier from the filename, uppercased.
///
/// Filenames matching the `<pdbid>[_tag]_{protein,receptor,rec}.pdbqt`
/// pattern yield the four-character id; anything else falls back to the bare
/// file stem.
pub fn infer_pdb_id(path: &Path) -> String {
    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    match RECEPTOR_ID_RE.captures(file_name) {
        Some(caps) => caps[1].to_uppercase(),
        None => path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_uppercase(),
    }
}

/// Recursively collect every receptor `.pdbqt` under `dir`, sorted by path.
///
/// Pose files this tool writes (`*_docked.pdbqt`) are excluded so that
/// re-running over a partially completed directory never picks up its own
/// outputs as receptors.
pub fn discover_receptors(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut receptors = Vec::new();
    walk(dir, &mut receptors)?;
    receptors.sort();
    Ok(receptors)
}

fn walk(dir: &Path, receptors: &mut Vec<PathBuf>) -> Result<()> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to read {}", dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        if path.is_dir() {
            walk(&path, receptors)?;
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.ends_with(".pdbqt") && !name.ends_with(POSE_SUFFIX) {
            receptors.push(path);
        }
    }
    Ok(())
}
