use std::collections::HashMap;

/// Header fields the extractor needs to find in an instance.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    Dimension,
    EdgeWeightSection,
    GtspSets,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Dimension, Field::EdgeWeightSection, Field::GtspSets];

    pub fn prefix(&self) -> &'static str {
        match self {
            Field::Dimension => "DIMENSION",
            Field::EdgeWeightSection => "EDGE_WEIGHT_SECTION",
            Field::GtspSets => "GTSP_SETS",
        }
    }
}

/// Line positions of header fields, computed in a single pass.
///
/// A line matches a field when it starts with the field's prefix. When several
/// lines match, each match overwrites the stored position with the index of the
/// first line carrying identical text. Distinct matching lines therefore report
/// the later one, while duplicated matching lines report their earliest copy.
#[derive(Debug, Clone, Default)]
pub struct FieldIndex {
    positions: HashMap<Field, usize>,
}

impl FieldIndex {
    pub fn build(lines: &[&str], fields: &[Field]) -> Self {
        let prefixes = fields.iter().map(|f| f.prefix()).collect::<Vec<_>>();
        let positions = scan(lines, &prefixes)
            .into_iter()
            .zip(fields)
            .filter_map(|(pos, &field)| pos.map(|p| (field, p)))
            .collect();
        Self { positions }
    }

    pub fn position(&self, field: Field) -> Option<usize> {
        self.positions.get(&field).copied()
    }
}

/// Position of a single prefix, following the same rule as [`FieldIndex`].
pub fn locate_field(lines: &[&str], prefix: &str) -> Option<usize> {
    scan(lines, &[prefix]).pop().flatten()
}

fn scan<'a>(lines: &[&'a str], prefixes: &[&str]) -> Vec<Option<usize>> {
    let mut first_seen: HashMap<&'a str, usize> = HashMap::with_capacity(lines.len());
    let mut positions = vec![None; prefixes.len()];
    for (idx, &line) in lines.iter().enumerate() {
        let first = *first_seen.entry(line).or_insert(idx);
        for (pos, &prefix) in positions.iter_mut().zip(prefixes) {
            if line.starts_with(prefix) {
                *pos = Some(first);
            }
        }
    }
    positions
}
