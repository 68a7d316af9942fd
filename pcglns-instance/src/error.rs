use crate::field::Field;

#[derive(Debug, PartialEq)]
pub enum CheckerError {
    CostOverflow,
    EmptyTour,
    FieldMissing {
        field: Field,
    },
    Format {
        path: String,
    },
    InfeasibleEdge {
        from: usize,
        to: usize,
    },
    InvalidDimension {
        line: String,
    },
    Io {
        path: String,
        message: String,
    },
    MalformedRow {
        line: usize,
        reason: String,
    },
    VertexOutOfRange {
        vertex: usize,
        dimension: usize,
    },
}

impl std::fmt::Display for CheckerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckerError::CostOverflow => write!(f, "Tour length overflows a 64-bit integer"),
            CheckerError::EmptyTour => write!(f, "Tour is empty"),
            CheckerError::FieldMissing { field } => {
                write!(f, "Instance has no '{}' field", field.prefix())
            }
            CheckerError::Format { path } => write!(
                f,
                "Wrong file format: '{}' (expected a {} file)",
                path,
                crate::tour::INSTANCE_EXTENSION
            ),
            CheckerError::InfeasibleEdge { from, to } => write!(
                f,
                "Found -1 dist: no direct connection from vertex {} to vertex {}",
                from, to
            ),
            CheckerError::InvalidDimension { line } => {
                write!(f, "Cannot read dimension from line '{}'", line)
            }
            CheckerError::Io { path, message } => {
                write!(f, "Failed to read instance file '{}': {}", path, message)
            }
            CheckerError::MalformedRow { line, reason } => {
                write!(f, "Malformed matrix row at line {}: {}", line, reason)
            }
            CheckerError::VertexOutOfRange { vertex, dimension } => write!(
                f,
                "Vertex {} is out of range (instance has {} vertices)",
                vertex, dimension
            ),
        }
    }
}

impl std::error::Error for CheckerError {}

pub type CheckerResult<T> = std::result::Result<T, CheckerError>;
