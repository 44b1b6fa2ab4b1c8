use anyhow::{bail, Context, Result};
use polars::prelude::*;
use std::collections::HashMap;
use std::path::Path;

pub const REQUIRED_COLUMNS: [&str; 7] = [
    "pdb_id", "center_x", "center_y", "center_z", "size_x", "size_y", "size_z",
];

/// One receptor's docking search volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PocketBox {
    pub center: [f64; 3],
    pub size: [f64; 3],
}

/// Applied to every receptor when no pocket table was supplied at all.
/// An origin-centered 20 A cube is rarely right for a real receptor; callers
/// are expected to provide a table for anything beyond smoke tests.
pub const FALLBACK_BOX: PocketBox = PocketBox {
    center: [0.0, 0.0, 0.0],
    size: [20.0, 20.0, 20.0],
};

/// Pocket boxes keyed by uppercased receptor identifier, immutable once
/// loaded. A receptor missing from a supplied table is that receptor's
/// failure, never a silent fallback.
#[derive(Debug)]
pub struct PocketTable {
    boxes: HashMap<String, PocketBox>,
}

impl PocketTable {
    pub fn load(path: &Path) -> Result<Self> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.to_path_buf()))
            .with_context(|| format!("failed to open pocket table {}", path.display()))?
            .finish()
            .with_context(|| format!("failed to read pocket table {}", path.display()))?;
        Self::from_dataframe(&df)
    }

    pub fn from_dataframe(df: &DataFrame) -> Result<Self> {
        let columns: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|c| c.to_string())
            .collect();
        for required in REQUIRED_COLUMNS {
            if !columns.iter().any(|c| c == required) {
                bail!("pocket table is missing required column `{required}`");
            }
        }

        let ids = df
            .column("pdb_id")?
            .as_materialized_series()
            .cast(&DataType::String)?;
        let ids = ids.str()?;

        // center_x .. size_z, in REQUIRED_COLUMNS order
        let mut axes = Vec::with_capacity(6);
        for name in &REQUIRED_COLUMNS[1..] {
            axes.push(
                df.column(name)?
                    .as_materialized_series()
                    .cast(&DataType::Float64)?,
            );
        }

        let mut boxes = HashMap::new();
        for row in 0..df.height() {
            let Some(id) = ids.get(row) else {
                continue;
            };
            let mut vals = [0.0_f64; 6];
            for (slot, series) in vals.iter_mut().zip(&axes) {
                *slot = series.f64()?.get(row).unwrap_or(0.0);
            }
            boxes.insert(
                id.to_uppercase(),
                PocketBox {
                    center: [vals[0], vals[1], vals[2]],
                    size: [vals[3], vals[4], vals[5]],
                },
            );
        }
        Ok(PocketTable { boxes })
    }

    pub fn lookup(&self, pdb_id: &str) -> Option<&PocketBox> {
        self.boxes.get(&pdb_id.to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}
