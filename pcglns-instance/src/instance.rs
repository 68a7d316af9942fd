use crate::{
    error::{CheckerError, CheckerResult},
    field::{Field, FieldIndex},
    matrix::{normalize_row, parse_row, round_row, sentinel_positions, DistanceMatrix},
};
use log::{debug, warn};
use std::{fs, path::Path};

const VALUE_SEPARATOR: &str = " : ";

#[derive(Debug, Clone, Default)]
pub struct Instance {
    pub dimension: usize,
    pub gtsp_sets: Option<usize>,
    pub matrix: DistanceMatrix,
    /// Per row, the 1-based columns that held -1. Only filled in SOP mode.
    pub precedence: Vec<Vec<usize>>,
    pub normalized_text: String,
    pub missing_field: Option<Field>,
}

impl Instance {
    fn missing(text: &str, field: Field) -> Self {
        Self {
            normalized_text: text.to_string(),
            missing_field: Some(field),
            ..Default::default()
        }
    }
}

/// Extracts the distance matrix of an instance.
///
/// In SOP mode the line right after `EDGE_WEIGHT_SECTION` is a header row and is
/// dropped before the matrix is read, and the precedence orderings are derived
/// from the unrounded values. If `EDGE_WEIGHT_SECTION` or `DIMENSION` is absent
/// the text is returned untouched with an empty matrix.
pub fn parse_instance(text: &str, is_sop: bool) -> CheckerResult<Instance> {
    let mut lines = text.split('\n').collect::<Vec<&str>>();
    let index = FieldIndex::build(&lines, &Field::ALL);
    let section = index.position(Field::EdgeWeightSection);

    let index = match section {
        Some(idx) if is_sop => {
            if idx + 1 >= lines.len() {
                return Err(CheckerError::MalformedRow {
                    line: idx + 2,
                    reason: "missing header row after EDGE_WEIGHT_SECTION".to_string(),
                });
            }
            lines.remove(idx + 1);
            FieldIndex::build(&lines, &Field::ALL)
        }
        _ => index,
    };

    let (section, dims_idx) = match (section, index.position(Field::Dimension)) {
        (Some(section), Some(dims_idx)) => (section, dims_idx),
        (None, _) => {
            warn!("No EDGE_WEIGHT_SECTION found, leaving instance untouched");
            return Ok(Instance::missing(text, Field::EdgeWeightSection));
        }
        (Some(_), None) => {
            warn!("No DIMENSION found, leaving instance untouched");
            return Ok(Instance::missing(text, Field::Dimension));
        }
    };
    let gtsp_sets = index
        .position(Field::GtspSets)
        .and_then(|idx| field_value(lines[idx]))
        .and_then(|value| value.parse::<usize>().ok());
    debug!(
        "EDGE_WEIGHT_SECTION at line {}, DIMENSION at line {}, GTSP_SETS: {:?}",
        section + 1,
        dims_idx + 1,
        gtsp_sets
    );

    let dimension = parse_dimension(lines[dims_idx])?;
    let mut rows = Vec::with_capacity(dimension);
    let mut normalized_rows = Vec::with_capacity(dimension);
    let mut precedence = Vec::new();
    // Rows sit below the removed SOP header row in the original text.
    let file_line = |i: usize| i + 1 + is_sop as usize;
    for i in section + 1..=section + dimension {
        let line = lines.get(i).ok_or_else(|| CheckerError::MalformedRow {
            line: file_line(i),
            reason: format!(
                "expected {} matrix rows, instance ends after {}",
                dimension,
                i - section - 1
            ),
        })?;
        let normalized = normalize_row(line);
        let values = parse_row(&normalized, file_line(i), dimension)?;
        if is_sop {
            precedence.push(sentinel_positions(&values));
        }
        rows.push(round_row(&values));
        normalized_rows.push(normalized);
    }

    let normalized_text = lines
        .iter()
        .enumerate()
        .map(|(i, &line)| match i.checked_sub(section + 1) {
            Some(row) if row < dimension => normalized_rows[row].as_str(),
            _ => line,
        })
        .collect::<Vec<&str>>()
        .join("\n");

    Ok(Instance {
        dimension,
        gtsp_sets,
        matrix: DistanceMatrix::from_rows(rows),
        precedence,
        normalized_text,
        missing_field: None,
    })
}

/// The matrix used for plain tour checking.
pub fn read_matrix(text: &str) -> CheckerResult<DistanceMatrix> {
    Ok(parse_instance(text, false)?.matrix)
}

pub fn load_instance<P: AsRef<Path>>(path: P, is_sop: bool) -> CheckerResult<Instance> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| CheckerError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_instance(&text, is_sop)
}

fn field_value(line: &str) -> Option<&str> {
    line.split(VALUE_SEPARATOR).nth(1).map(str::trim)
}

fn parse_dimension(line: &str) -> CheckerResult<usize> {
    field_value(line)
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|&n| n > 0)
        .ok_or_else(|| CheckerError::InvalidDimension {
            line: line.trim_end().to_string(),
        })
}
