use super::config::ScreenConfig;
use super::pocket::{PocketTable, FALLBACK_BOX};
use super::pose::{has_model, parse_best_affinity};
use super::receptor::{discover_receptors, infer_pdb_id, POSE_SUFFIX};
use super::summary::{self, ScreenReport};
use anyhow::{bail, Result};
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use strum::Display;
use tracing::{debug, info, warn};

/// Fixed status vocabulary carried into the summary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum RunStatus {
    /// Docking ran and the pose holds at least one model.
    #[strum(serialize = "OK")]
    Ok,
    /// A valid pose already existed; the engine was not invoked.
    #[strum(serialize = "SKIP_EXIST")]
    SkipExist,
    /// The engine exited cleanly but produced no model.
    #[strum(serialize = "NO_MODEL")]
    NoModel,
    /// The supplied pocket table has no entry for this receptor.
    #[strum(serialize = "NO_BOX")]
    NoBox,
    /// The engine exited non-zero or could not be started.
    #[strum(serialize = "ERR")]
    Err,
}

/// One receptor's outcome; the only artifact of a batch run besides the
/// engine's own pose/log files.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub pdb_id: String,
    pub status: RunStatus,
    pub best_affinity: Option<f64>,
    /// Pose file path; empty when no pose was attempted (NO_BOX).
    pub pose: String,
    pub error: Option<String>,
}

/// Run the whole batch: discover receptors, dock each on a worker pool, write
/// the summary table under `out_root`.
///
/// Per-receptor failures become status rows; only configuration problems
/// (nothing to do, bad pocket table, pool setup) abort the run.
pub fn run_screen(config: &ScreenConfig) -> Result<ScreenReport> {
    let receptors = discover_receptors(&config.receptor_dir)?;
    if receptors.is_empty() {
        bail!(
            "no receptor .pdbqt files found under {}",
            config.receptor_dir.display()
        );
    }
    let pockets = config
        .pocket_table
        .as_deref()
        .map(PocketTable::load)
        .transpose()?;
    match &pockets {
        Some(table) => info!(
            "screening {} receptor(s), {} pocket box(es)",
            receptors.len(),
            table.len()
        ),
        None => warn!(
            "screening {} receptor(s) with the fallback box; results are \
             unlikely to be meaningful for real receptors",
            receptors.len()
        ),
    }
    fs::create_dir_all(&config.out_root)?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.workers)
        .build()?;
    let results: Vec<RunResult> = pool.install(|| {
        receptors
            .par_iter()
            .map(|receptor| {
                let result = run_one(receptor, pockets.as_ref(), config);
                info!(
                    pdb_id = %result.pdb_id,
                    status = %result.status,
                    "receptor processed"
                );
                result
            })
            .collect()
    });

    summary::build_report(results, &config.out_root)
}

/// Dock a single receptor to completion. Never fails the batch: every error
/// path is folded into the returned status.
pub(crate) fn run_one(
    receptor: &Path,
    pockets: Option<&PocketTable>,
    config: &ScreenConfig,
) -> RunResult {
    let pdb_id = infer_pdb_id(receptor);
    let out_dir = receptor.parent().unwrap_or_else(|| Path::new("."));
    let out_pose = out_dir.join(format!("{pdb_id}{POSE_SUFFIX}"));
    let out_log = out_dir.join(format!("{pdb_id}.log"));

    // resume: a pose with a model already counts as done
    if has_model(&out_pose) {
        debug!(pdb_id = %pdb_id, "pose already present, skipping");
        return RunResult {
            pdb_id,
            status: RunStatus::SkipExist,
            best_affinity: parse_best_affinity(&out_pose),
            pose: out_pose.display().to_string(),
            error: None,
        };
    }

    let bbox = match pockets {
        Some(table) => match table.lookup(&pdb_id) {
            Some(bbox) => *bbox,
            None => {
                return RunResult {
                    pdb_id: pdb_id.clone(),
                    status: RunStatus::NoBox,
                    best_affinity: None,
                    pose: String::new(),
                    error: Some(format!("no pocket box for {pdb_id}")),
                }
            }
        },
        None => FALLBACK_BOX,
    };

    let output = Command::new(&config.engine)
        .arg("--receptor")
        .arg(receptor)
        .arg("--ligand")
        .arg(&config.ligand)
        .arg("--center_x")
        .arg(bbox.center[0].to_string())
        .arg("--center_y")
        .arg(bbox.center[1].to_string())
        .arg("--center_z")
        .arg(bbox.center[2].to_string())
        .arg("--size_x")
        .arg(bbox.size[0].to_string())
        .arg("--size_y")
        .arg(bbox.size[1].to_string())
        .arg("--size_z")
        .arg(bbox.size[2].to_string())
        .arg("--num_modes")
        .arg(config.num_modes.to_string())
        .arg("--energy_range")
        .arg(config.energy_range.to_string())
        .arg("--exhaustiveness")
        .arg(config.exhaustiveness.to_string())
        .arg("--out")
        .arg(&out_pose)
        .arg("--log")
        .arg(&out_log)
        .output();

    let pose = out_pose.display().to_string();
    match output {
        Ok(out) if out.status.success() => {
            let status = if has_model(&out_pose) {
                RunStatus::Ok
            } else {
                RunStatus::NoModel
            };
            RunResult {
                pdb_id,
                status,
                best_affinity: parse_best_affinity(&out_pose),
                pose,
                error: None,
            }
        }
        Ok(out) => RunResult {
            pdb_id,
            status: RunStatus::Err,
            best_affinity: None,
            pose,
            error: Some(String::from_utf8_lossy(&out.stderr).into_owned()),
        },
        Err(e) => RunResult {
            pdb_id,
            status: RunStatus::Err,
            best_affinity: None,
            pose,
            error: Some(e.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::RunStatus;

    #[test]
    fn test_status_strings() {
        assert_eq!(RunStatus::Ok.to_string(), "OK");
        assert_eq!(RunStatus::SkipExist.to_string(), "SKIP_EXIST");
        assert_eq!(RunStatus::NoModel.to_string(), "NO_MODEL");
        assert_eq!(RunStatus::NoBox.to_string(), "NO_BOX");
        assert_eq!(RunStatus::Err.to_string(), "ERR");
    }
}
