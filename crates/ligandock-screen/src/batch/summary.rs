use super::runner::RunResult;
use anyhow::Result;
use polars::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};

pub const SUMMARY_FILENAME: &str = "summary_dir_docking.csv";

/// Aggregated outcome of one batch run: the per-receptor records, the summary
/// table as written, and where it landed.
#[derive(Debug)]
pub struct ScreenReport {
    pub results: Vec<RunResult>,
    pub table: DataFrame,
    pub summary_path: PathBuf,
}

pub(crate) fn build_report(results: Vec<RunResult>, out_root: &Path) -> Result<ScreenReport> {
    let mut table = results_to_df(&results)?;
    let summary_path = out_root.join(SUMMARY_FILENAME);
    let mut file = File::create(&summary_path)?;
    CsvWriter::new(&mut file).finish(&mut table)?;
    Ok(ScreenReport {
        results,
        table,
        summary_path,
    })
}

fn results_to_df(res: &[RunResult]) -> Result<DataFrame> {
    let df = df!(
        "pdb_id" => res.iter().map(|x| x.pdb_id.clone()).collect::<Vec<String>>(),
        "status" => res.iter().map(|x| x.status.to_string()).collect::<Vec<String>>(),
        "best_affinity" => res.iter().map(|x| x.best_affinity).collect::<Vec<Option<f64>>>(),
        "pose" => res.iter().map(|x| x.pose.clone()).collect::<Vec<String>>(),
        "error" => res.iter().map(|x| x.error.clone().unwrap_or_default()).collect::<Vec<String>>(),
    )?;
    Ok(df)
}

impl ScreenReport {
    /// Row counts grouped by status, sorted by status name.
    pub fn status_counts(&self) -> Result<DataFrame> {
        let counts = self
            .table
            .clone()
            .lazy()
            .group_by([col("status")])
            .agg([len().alias("count")])
            .sort(["status"], Default::default())
            .collect()?;
        Ok(counts)
    }

    /// The `n` most favorable scored receptors, ascending by affinity
    /// (lower = stronger predicted binding).
    pub fn top_scored(&self, n: u32) -> Result<DataFrame> {
        let top = self
            .table
            .clone()
            .lazy()
            .filter(col("best_affinity").is_not_null())
            .sort(["best_affinity"], Default::default())
            .limit(n)
            .select([col("pdb_id"), col("best_affinity"), col("pose")])
            .collect()?;
        Ok(top)
    }

    /// The console report printed after the batch completes.
    pub fn print(&self) -> Result<()> {
        println!("✓ summary: {}", self.summary_path.display());
        println!("{}", self.status_counts()?);
        let top = self.top_scored(10)?;
        if top.height() > 0 {
            println!("{top}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::runner::{RunResult, RunStatus};

    fn result(pdb_id: &str, status: RunStatus, affinity: Option<f64>) -> RunResult {
        RunResult {
            pdb_id: pdb_id.to_string(),
            status,
            best_affinity: affinity,
            pose: String::new(),
            error: None,
        }
    }

    #[test]
    fn test_report_counts_and_ranking() {
        let dir = tempfile::tempdir().unwrap();
        let results = vec![
            result("1AAA", RunStatus::Ok, Some(-6.0)),
            result("2BBB", RunStatus::Ok, Some(-9.1)),
            result("3CCC", RunStatus::NoBox, None),
            result("4DDD", RunStatus::SkipExist, Some(-7.3)),
        ];
        let report = build_report(results, dir.path()).unwrap();

        assert_eq!(report.table.height(), 4);
        assert!(report.summary_path.exists());

        let counts = report.status_counts().unwrap();
        assert_eq!(counts.height(), 3);
        let total: u32 = counts
            .column("count")
            .unwrap()
            .as_materialized_series()
            .u32()
            .unwrap()
            .sum()
            .unwrap();
        assert_eq!(total as usize, report.results.len());

        let top = report.top_scored(10).unwrap();
        assert_eq!(top.height(), 3); // the NO_BOX row has no score
        let first = top
            .column("pdb_id")
            .unwrap()
            .as_materialized_series()
            .str()
            .unwrap()
            .get(0)
            .unwrap();
        assert_eq!(first, "2BBB");
    }
}
