use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A usable pose starts a model within this many lines of the file head.
const MODEL_SCAN_LINES: usize = 50;

pub const MODEL_MARKER: &str = "MODEL";
pub const RESULT_MARKER: &str = "VINA RESULT";

/// True when the pose file exists, is non-empty and starts a `MODEL` record
/// within its first 50 lines. This is the resume check: such a file counts as
/// an already-completed receptor and must not trigger a re-invocation.
pub fn has_model(pose: &Path) -> bool {
    let Ok(metadata) = fs::metadata(pose) else {
        return false;
    };
    if metadata.len() == 0 {
        return false;
    }
    let Ok(file) = File::open(pose) else {
        return false;
    };
    BufReader::new(file)
        .lines()
        .take(MODEL_SCAN_LINES)
        .map_while(Result::ok)
        .any(|line| line.starts_with(MODEL_MARKER))
}

/// Best (minimum) affinity across every `REMARK ... VINA RESULT` line.
///
/// Per matching line the first whitespace token that parses as a number is
/// taken; for the engine's `VINA RESULT: affinity rmsd_lb rmsd_ub` layout
/// that is the affinity column. Lines that never parse are skipped; `None`
/// when nothing parsed.
pub fn parse_best_affinity(pose: &Path) -> Option<f64> {
    let file = File::open(pose).ok()?;
    let mut best: Option<f64> = None;
    for line in BufReader::new(file).lines() {
        let Ok(line) = line else {
            continue;
        };
        if !(line.contains("REMARK") && line.contains(RESULT_MARKER)) {
            continue;
        }
        if let Some(score) = line
            .split_whitespace()
            .find_map(|tok| tok.parse::<f64>().ok())
        {
            best = Some(best.map_or(score, |b: f64| b.min(score)));
        }
    }
    best
}
