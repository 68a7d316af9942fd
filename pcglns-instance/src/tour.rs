use crate::{
    error::{CheckerError, CheckerResult},
    instance::load_instance,
    matrix::{Distance, DistanceMatrix},
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const INSTANCE_EXTENSION: &str = ".pcglns";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EdgeCost {
    pub from: usize,
    pub to: usize,
    /// `None` when the closing edge is forbidden and left out of the total.
    pub cost: Option<i64>,
    pub closing: bool,
}

/// Cost of every edge of a closed tour over 1-based vertex ids.
///
/// A forbidden interior edge fails the whole tour. A forbidden closing edge
/// (last vertex back to the first) does not: it is reported with no cost and
/// contributes nothing to the total.
pub fn edge_costs(matrix: &DistanceMatrix, tour: &[usize]) -> CheckerResult<Vec<EdgeCost>> {
    let (first, last) = match (tour.first(), tour.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => return Err(CheckerError::EmptyTour),
    };

    let mut edges = Vec::with_capacity(tour.len());
    for w in tour.windows(2) {
        match matrix.edge(w[0], w[1])? {
            Distance::Forbidden => {
                return Err(CheckerError::InfeasibleEdge {
                    from: w[0],
                    to: w[1],
                })
            }
            Distance::Finite(d) => edges.push(EdgeCost {
                from: w[0],
                to: w[1],
                cost: Some(d),
                closing: false,
            }),
        }
    }

    let closing = matrix.edge(last, first)?;
    if closing.is_forbidden() {
        debug!("Closing edge {} -> {} is forbidden, skipping it", last, first);
    }
    edges.push(EdgeCost {
        from: last,
        to: first,
        cost: closing.value(),
        closing: true,
    });
    Ok(edges)
}

/// Sum of the edges that carry a cost; a skipped closing edge adds nothing.
pub fn total_cost(edges: &[EdgeCost]) -> CheckerResult<i64> {
    edges
        .iter()
        .filter_map(|e| e.cost)
        .try_fold(0i64, |total, cost| total.checked_add(cost))
        .ok_or(CheckerError::CostOverflow)
}

/// Total cost of a tour. See [`edge_costs`] for how forbidden edges are treated.
pub fn evaluate_tour(matrix: &DistanceMatrix, tour: &[usize]) -> CheckerResult<i64> {
    total_cost(&edge_costs(matrix, tour)?)
}

/// Checks a tour against a `.pcglns` instance file.
pub fn check_tour<P: AsRef<Path>>(path: P, tour: &[usize]) -> CheckerResult<i64> {
    let matrix = load_checked_matrix(path.as_ref())?;
    evaluate_tour(&matrix, tour)
}

/// Like [`check_tour`], but returns the per-edge breakdown.
pub fn check_tour_edges<P: AsRef<Path>>(path: P, tour: &[usize]) -> CheckerResult<Vec<EdgeCost>> {
    let matrix = load_checked_matrix(path.as_ref())?;
    edge_costs(&matrix, tour)
}

fn load_checked_matrix(path: &Path) -> CheckerResult<DistanceMatrix> {
    let name = path.to_string_lossy();
    if !name.ends_with(INSTANCE_EXTENSION) {
        return Err(CheckerError::Format {
            path: name.into_owned(),
        });
    }
    let instance = load_instance(path, false)?;
    match instance.missing_field {
        Some(field) => Err(CheckerError::FieldMissing { field }),
        None => Ok(instance.matrix),
    }
}
