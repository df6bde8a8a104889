//! Command implementations for cohort-cmd

use anyhow::{Context, Result};
use cohort_interests::{Dataset, GroupingOptions, tsv};

use crate::utils;

pub mod group;
pub mod inspect;

/// Loads `path` into a fresh dataset configured with `options`.
pub fn load_dataset(path: &str, options: GroupingOptions) -> Result<Dataset> {
    utils::validate_file_exists(path)?;
    let mut dataset = Dataset::new(options);
    tsv::load_tsv_file(&mut dataset, path)
        .with_context(|| format!("Failed to load {path}"))?;
    Ok(dataset)
}
