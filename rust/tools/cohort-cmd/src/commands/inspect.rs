use std::io::Write;

use anyhow::Result;
use cohort_interests::GroupingOptions;

use super::load_dataset;

pub fn run(file: &str, out: &mut impl Write) -> Result<()> {
    let dataset = load_dataset(file, GroupingOptions::default())?;
    let stats = dataset.stats();
    writeln!(out, "File: {file}")?;
    writeln!(out, "Rows: {}", stats.rows)?;
    writeln!(out, "People: {}", stats.people)?;
    writeln!(out, "Interests: {}", stats.interests)?;
    Ok(())
}
