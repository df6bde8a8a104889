//! Common utilities for cohort-cmd

use anyhow::Result;
use std::path::Path;
use tracing_subscriber::filter::LevelFilter;

pub const DEFAULT_INPUT: &str = "ad_interest.tsv";

/// Installs a stderr subscriber; library `log` records are forwarded to it.
///
/// Returns `false` (after warning on stderr) if a global subscriber is already set.
pub fn init_logging(verbose: u8) -> bool {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    if let Err(e) = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("warning: logging is not available: {e}");
        return false;
    }
    true
}

/// Checks if a file exists and is readable
pub fn validate_file_exists(path: &str) -> Result<()> {
    let file_path = Path::new(path);
    if !file_path.exists() {
        anyhow::bail!("File does not exist: {}", path);
    }
    if !file_path.is_file() {
        anyhow::bail!("Path is not a file: {}", path);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{init_logging, validate_file_exists};

    #[test]
    fn test_init_logging_twice() {
        init_logging(1);
        assert!(!init_logging(2));
    }

    #[test]
    fn test_validate_file_exists() {
        let dir = tempfile::tempdir().unwrap();
        let dir_path = dir.path().to_str().unwrap();
        let err = validate_file_exists(dir_path).unwrap_err();
        assert!(err.to_string().contains("Path is not a file"));

        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(validate_file_exists(file.path().to_str().unwrap()).is_ok());
    }
}
