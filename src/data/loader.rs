use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::data::company_record::CompanyRecord;
use crate::data::line_parser::parse_line;

/// Read the whole source file and parse every line into a typed record.
///
/// One record per line, no header row. Any malformed row aborts the load
/// with line-numbered context; a partially-typed dataset is never
/// returned. An empty result is also an error — the service must not
/// treat a dataset-less state as loaded.
pub fn load_dataset(path: &Path) -> Result<Vec<CompanyRecord>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading dataset file {}", path.display()))?;

    let mut records = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        let fields = parse_line(line);
        let record = CompanyRecord::from_fields(&fields)
            .with_context(|| format!("line {} of {}", index + 1, path.display()))?;
        records.push(record);
    }

    if records.is_empty() {
        anyhow::bail!("dataset file {} contains no records", path.display());
    }

    info!("Loaded {} company records from {}", records.len(), path.display());
    Ok(records)
}
