use anyhow::{anyhow, Context, Result};
use pcglns_instance::{check_tour_edges, load_instance, total_cost, EdgeCost};
use serde::{Deserialize, Serialize};
use std::{fs, io::Read, path::Path};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TourReport {
    pub length: i64,
    pub tour: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edges: Option<Vec<EdgeCost>>,
}

impl TourReport {
    pub fn to_text(&self) -> String {
        let mut out = format!("Length: {} tour: {:?}", self.length, self.tour);
        for edge in self.edges.iter().flatten() {
            let cost = match edge.cost {
                Some(cost) => cost.to_string(),
                None => "-1 (skipped)".to_string(),
            };
            out.push_str(&format!("\n  {} -> {}: {}", edge.from, edge.to, cost));
        }
        out
    }
}

/// Evaluates `tour` against an instance file.
pub fn check(instance: &Path, tour: Vec<usize>, with_edges: bool) -> Result<TourReport> {
    let edges = check_tour_edges(instance, &tour)?;
    let length = total_cost(&edges)?;
    Ok(TourReport {
        length,
        tour,
        edges: with_edges.then_some(edges),
    })
}

/// Instance text with SOP header removed (if requested) and matrix rows normalized.
pub fn convert(instance: &Path, is_sop: bool) -> Result<String> {
    let instance = load_instance(instance, is_sop)?;
    Ok(instance.normalized_text)
}

pub fn precedence(instance: &Path) -> Result<Vec<Vec<usize>>> {
    let parsed = load_instance(instance, true)?;
    if let Some(field) = parsed.missing_field {
        return Err(anyhow!(
            "Cannot derive precedence orderings: '{}' has no '{}' field",
            instance.display(),
            field.prefix()
        ));
    }
    Ok(parsed.precedence)
}

pub fn parse_tour(tour: &str) -> Result<Vec<usize>> {
    serde_json::from_str::<Vec<usize>>(tour.trim())
        .with_context(|| format!("Tour must be a JSON array of vertex ids, got '{}'", tour.trim()))
}

/// Reads a tour given as a json string, a path to a json file, or '-' for stdin.
pub fn load_tour(tour: &str) -> Result<Vec<usize>> {
    let tour = if tour == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read tour from stdin")?;
        buffer
    } else if tour.ends_with(".json") {
        fs::read_to_string(tour).with_context(|| format!("Failed to read tour file: {}", tour))?
    } else {
        tour.to_string()
    };
    parse_tour(&tour)
}
