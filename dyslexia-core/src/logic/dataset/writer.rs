use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use super::record::Sample;
use super::{DatasetError, LABEL_COLUMN};
use crate::logic::features::FEATURE_LAYOUT;

/// CSV header line (feature columns followed by the label column)
pub fn header() -> String {
    let mut columns: Vec<&str> = FEATURE_LAYOUT.to_vec();
    columns.push(LABEL_COLUMN);
    columns.join(",")
}

/// Write samples as CSV, creating parent directories when needed.
/// Returns the number of rows written.
pub fn write_csv(path: &Path, samples: &[Sample]) -> Result<usize, DatasetError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| DatasetError::io(parent, e))?;
        }
    }

    let file = File::create(path).map_err(|e| DatasetError::io(path, e))?;
    let mut out = BufWriter::new(file);

    write_rows(&mut out, samples).map_err(|e| DatasetError::io(path, e))?;
    out.flush().map_err(|e| DatasetError::io(path, e))?;

    log::info!("Wrote {} samples to {}", samples.len(), path.display());
    Ok(samples.len())
}

fn write_rows<W: Write>(out: &mut W, samples: &[Sample]) -> std::io::Result<()> {
    writeln!(out, "{}", header())?;

    for sample in samples {
        for value in sample.features.as_slice() {
            write!(out, "{},", value)?;
        }
        writeln!(out, "{}", sample.label.index())?;
    }

    Ok(())
}
