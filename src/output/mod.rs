pub mod writer_csv;
pub mod writer_json;

use std::collections::BTreeSet;
use std::fs::File;
use std::path::Path;

use crate::config::OutputFormat;
use crate::error::SubhunterError;

pub use writer_csv::write_csv;
pub use writer_json::write_json;

/// Serialize the final result set to `path`, or to stdout when no path was
/// given. Output order is lexicographic in both formats.
pub fn write_results(
    subdomains: &BTreeSet<String>,
    format: OutputFormat,
    path: Option<&Path>,
) -> Result<(), SubhunterError> {
    match path {
        Some(path) => {
            let io_err = |source| SubhunterError::Io {
                path: path.display().to_string(),
                source,
            };
            let file = File::create(path).map_err(io_err)?;
            match format {
                OutputFormat::Csv => write_csv(file, subdomains).map_err(io_err)?,
                OutputFormat::Json => write_json(file, subdomains).map_err(io_err)?,
            }
            tracing::info!(path = %path.display(), count = subdomains.len(), "results saved");
        }
        None => {
            let stdout = std::io::stdout();
            let io_err = |source| SubhunterError::Io { path: "<stdout>".into(), source };
            match format {
                OutputFormat::Csv => write_csv(stdout.lock(), subdomains).map_err(io_err)?,
                OutputFormat::Json => write_json(stdout.lock(), subdomains).map_err(io_err)?,
            }
        }
    }
    Ok(())
}
