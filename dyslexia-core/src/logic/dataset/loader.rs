use std::fs;
use std::path::Path;

use super::record::{Label, Sample};
use super::{DatasetError, LABEL_COLUMN};
use crate::logic::features::{feature_index, FeatureVector, FEATURE_COUNT};

/// Column role resolved from the header
#[derive(Debug, Clone, Copy)]
enum Column {
    Feature(usize),
    Label,
}

/// Load samples from a CSV file written by `writer::write_csv`.
///
/// Columns may appear in any order but every feature and the label column
/// must be present exactly once.
pub fn load_csv(path: &Path) -> Result<Vec<Sample>, DatasetError> {
    let content = fs::read_to_string(path).map_err(|e| DatasetError::io(path, e))?;
    let samples = parse_csv(&content)?;
    log::info!("Loaded {} samples from {}", samples.len(), path.display());
    Ok(samples)
}

/// Parse CSV text (header + rows)
pub fn parse_csv(content: &str) -> Result<Vec<Sample>, DatasetError> {
    let mut lines = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let (_, header) = lines
        .next()
        .ok_or_else(|| DatasetError::Header("file is empty".to_string()))?;
    let columns = parse_header(header)?;

    let mut samples = Vec::new();
    for (index, line) in lines {
        samples.push(parse_row(index + 1, line, &columns)?);
    }

    Ok(samples)
}

fn parse_header(header: &str) -> Result<Vec<Column>, DatasetError> {
    let mut columns = Vec::new();
    let mut seen = [false; FEATURE_COUNT];
    let mut has_label = false;

    for name in header.split(',').map(str::trim) {
        if name == LABEL_COLUMN {
            if has_label {
                return Err(DatasetError::Header(format!("duplicate column {}", name)));
            }
            has_label = true;
            columns.push(Column::Label);
            continue;
        }

        let index = feature_index(name)
            .ok_or_else(|| DatasetError::Header(format!("unknown column {}", name)))?;
        if seen[index] {
            return Err(DatasetError::Header(format!("duplicate column {}", name)));
        }
        seen[index] = true;
        columns.push(Column::Feature(index));
    }

    if !has_label {
        return Err(DatasetError::Header(format!("missing column {}", LABEL_COLUMN)));
    }
    if let Some(missing) = seen.iter().position(|present| !present) {
        return Err(DatasetError::Header(format!(
            "missing column {}",
            crate::logic::features::FEATURE_LAYOUT[missing]
        )));
    }

    Ok(columns)
}

fn parse_row(line: usize, row: &str, columns: &[Column]) -> Result<Sample, DatasetError> {
    let fields: Vec<&str> = row.split(',').map(str::trim).collect();
    if fields.len() != columns.len() {
        return Err(DatasetError::Row {
            line,
            message: format!("expected {} fields, got {}", columns.len(), fields.len()),
        });
    }

    let mut values = [0.0; FEATURE_COUNT];
    let mut label = Label::NoDyslexia;

    for (field, column) in fields.iter().zip(columns.iter()) {
        match column {
            Column::Feature(index) => {
                values[*index] = field.parse::<f64>().map_err(|_| DatasetError::Row {
                    line,
                    message: format!("'{}' is not a number", field),
                })?;
            }
            Column::Label => {
                label = field
                    .parse::<usize>()
                    .ok()
                    .and_then(Label::from_index)
                    .ok_or_else(|| DatasetError::Row {
                        line,
                        message: format!("label must be 0 or 1, got '{}'", field),
                    })?;
            }
        }
    }

    let features = FeatureVector::from_values(values).map_err(|e| DatasetError::Row {
        line,
        message: e.to_string(),
    })?;

    Ok(Sample::new(features, label))
}
