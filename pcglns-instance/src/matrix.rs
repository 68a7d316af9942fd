use crate::error::{CheckerError, CheckerResult};
use std::fmt;

// 2^63, the first value past the i64 range.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Distance between two vertices. The raw value -1 marks a forbidden edge.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Distance {
    Finite(i64),
    Forbidden,
}

impl Distance {
    pub const SENTINEL: i64 = -1;

    pub fn from_rounded(value: i64) -> Self {
        if value == Self::SENTINEL {
            Distance::Forbidden
        } else {
            Distance::Finite(value)
        }
    }

    pub fn value(&self) -> Option<i64> {
        match self {
            Distance::Finite(d) => Some(*d),
            Distance::Forbidden => None,
        }
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, Distance::Forbidden)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Forbidden => write!(f, "{}", Self::SENTINEL),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistanceMatrix {
    rows: Vec<Vec<Distance>>,
}

impl DistanceMatrix {
    pub fn from_rows(rows: Vec<Vec<Distance>>) -> Self {
        Self { rows }
    }

    pub fn dimension(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<Distance>] {
        &self.rows
    }

    /// 0-based lookup.
    pub fn get(&self, row: usize, col: usize) -> Option<Distance> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Distance of the edge between two 1-based vertex ids.
    pub fn edge(&self, from: usize, to: usize) -> CheckerResult<Distance> {
        let out_of_range = |vertex| CheckerError::VertexOutOfRange {
            vertex,
            dimension: self.dimension(),
        };
        let row = from.checked_sub(1).ok_or_else(|| out_of_range(from))?;
        let col = to.checked_sub(1).ok_or_else(|| out_of_range(to))?;
        let row = self.rows.get(row).ok_or_else(|| out_of_range(from))?;
        row.get(col).copied().ok_or_else(|| out_of_range(to))
    }
}

impl From<Vec<Vec<i64>>> for DistanceMatrix {
    fn from(rows: Vec<Vec<i64>>) -> Self {
        Self::from_rows(
            rows.into_iter()
                .map(|row| row.into_iter().map(Distance::from_rounded).collect())
                .collect(),
        )
    }
}

/// Trims a row and collapses internal whitespace runs to single spaces.
pub fn normalize_row(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parses a normalized row of exactly `dimension` finite numbers that round
/// into the i64 range.
/// `line_no` is the 1-based line number reported on failure.
pub fn parse_row(line: &str, line_no: usize, dimension: usize) -> CheckerResult<Vec<f64>> {
    let malformed = |reason: String| CheckerError::MalformedRow {
        line: line_no,
        reason,
    };
    if line.is_empty() {
        return Err(malformed("empty line".to_string()));
    }
    let values = line
        .split(' ')
        .map(|token| match token.parse::<f64>() {
            Ok(v) if !v.is_finite() => Err(malformed(format!("non-finite value '{}'", token))),
            Ok(v) if !(-I64_BOUND..I64_BOUND).contains(&v.round_ties_even()) => {
                Err(malformed(format!("value '{}' is out of range", token)))
            }
            Ok(v) => Ok(v),
            Err(_) => Err(malformed(format!("non-numeric token '{}'", token))),
        })
        .collect::<CheckerResult<Vec<f64>>>()?;
    if values.len() != dimension {
        return Err(malformed(format!(
            "expected {} values, found {}",
            dimension,
            values.len()
        )));
    }
    Ok(values)
}

/// Rounds to the nearest integer, ties to even.
pub fn round_half_even(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// 1-based columns holding exactly the sentinel, before any rounding.
pub fn sentinel_positions(values: &[f64]) -> Vec<usize> {
    values
        .iter()
        .enumerate()
        .filter(|&(_, &v)| v == Distance::SENTINEL as f64)
        .map(|(idx, _)| idx + 1)
        .collect()
}

pub fn round_row(values: &[f64]) -> Vec<Distance> {
    values
        .iter()
        .map(|&v| Distance::from_rounded(round_half_even(v)))
        .collect()
}
