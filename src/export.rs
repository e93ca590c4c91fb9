use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::aggregate::ExtractionResult;
use crate::extract::ExtractedRecord;
use crate::rules::RuleKind;

/// CSV document for one rule's records, header row first.
pub fn to_csv(kind: RuleKind, records: &[ExtractedRecord]) -> Result<String, csv::Error> {
    let mut writer = csv::Writer::from_writer(vec![]);

    match kind {
        RuleKind::Images => writer.write_record(["URL", "Alt Text"])?,
        _ => writer.write_record([kind.label()])?,
    }

    for record in records {
        match record {
            ExtractedRecord::Text(s) => writer.write_record([s.as_str()])?,
            ExtractedRecord::Image(img) => {
                writer.write_record([img.absolute_url.as_str(), img.alt_text.as_str()])?
            }
        }
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// `image_data.csv` for images, `<label>_data.csv` otherwise, with spaces in
/// the label replaced by underscores (`custom_class_data.csv`).
pub fn file_name(kind: RuleKind) -> String {
    match kind {
        RuleKind::Images => "image_data.csv".to_string(),
        _ => format!("{}_data.csv", kind.label().to_lowercase().replace(' ', "_")),
    }
}

/// Write one CSV file per present rule kind into `dir`.
pub fn write_all(result: &ExtractionResult, dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let mut written = Vec::with_capacity(result.len());
    for (kind, records) in result.iter() {
        let path = dir.join(file_name(kind));
        let csv = to_csv(kind, records)?;
        fs::write(&path, csv).with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Wrote {} {} records to {}", records.len(), kind.label(), path.display());
        written.push(path);
    }
    Ok(written)
}
