use crate::batch::{self, ScreenConfig};
use anyhow::Result;

pub fn execute(config: &ScreenConfig) -> Result<()> {
    let report = batch::run_screen(config)?;
    report.print()
}
