use std::io::Write;

use anyhow::{Context, Result};
use cohort_interests::GroupingOptions;

use super::load_dataset;

pub fn run(
    i_min: usize,
    i_max: usize,
    min_people: usize,
    file: &str,
    out: &mut impl Write,
) -> Result<()> {
    let options = GroupingOptions::new(i_min, i_max, min_people)
        .context("Invalid grouping thresholds (need i-min <= min-people < i-max)")?;
    log::info!("grouping {file} with {options:?}");
    let mut dataset = load_dataset(file, options)?;
    dataset.generate();

    writeln!(out, "numPeople\tnumInterestInSet\tinterests")?;
    if dataset.results().is_empty() {
        writeln!(out, "No results found")?;
    }
    for i in 0..dataset.results().len() {
        let result = dataset.result(i)?;
        writeln!(
            out,
            "{}\t{}\t{}",
            result.num_people,
            result.interests.len(),
            result.interests.join("\t")
        )?;
    }
    Ok(())
}
