//! Loading `person<TAB>interest` rows.
//!
//! The first line is a header and is skipped. Every following line must hold
//! exactly two non-empty tab-separated fields.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use cohort_common::{Result, error::Error};

use crate::dataset::Dataset;

/// Reads rows from `reader` into `dataset` and returns the number of rows added.
///
/// Stops at the first malformed line with an `InvalidFormat` error naming the
/// 1-based line number; rows before it stay in the dataset.
pub fn load_tsv(dataset: &mut Dataset, reader: impl BufRead) -> Result<usize> {
    let mut added = 0;
    for (i, line) in reader.lines().enumerate().skip(1) {
        let line = line.map_err(|e| Error::io(format!("line {}", i + 1), e))?;
        let (person, interest) = parse_row(&line).ok_or_else(|| {
            Error::invalid_format(
                format!("line {}", i + 1),
                "expected two non-empty tab-separated fields",
            )
        })?;
        dataset.add_row(person, interest);
        added += 1;
    }
    log::info!(
        "loaded {added} rows: {} people, {} interests",
        dataset.num_people(),
        dataset.num_interests()
    );
    Ok(added)
}

/// Opens `path` and loads it with [`load_tsv`].
pub fn load_tsv_file(dataset: &mut Dataset, path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io(path.display().to_string(), e))?;
    log::debug!("loading {}", path.display());
    load_tsv(dataset, BufReader::new(file))
}

fn parse_row(line: &str) -> Option<(&str, &str)> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let mut fields = line.split('\t');
    let person = fields.next().filter(|f| !f.is_empty())?;
    let interest = fields.next().filter(|f| !f.is_empty())?;
    if fields.next().is_some() {
        return None;
    }
    Some((person, interest))
}
