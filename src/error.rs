/// Which of the two representations of a `Dimension` a length check was made against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    Edges,
    Points,
}

impl std::fmt::Display for Representation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Representation::Edges => write!(f, "edges"),
            Representation::Points => write!(f, "points"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Incompatible length of {kind}: expected {expected}, got {got}")]
    LengthMismatch {
        kind: Representation,
        expected: usize,
        got: usize,
    },
    #[error("Edges must be at least length 2, got {got}")]
    InsufficientLength { got: usize },
    #[error("Cannot derive {0}")]
    Undefined(String),
    #[error("Cannot set the number of bins since bins are already defined")]
    BinsAlreadyDefined,
    #[error("Edges must be strictly monotonic")]
    NotMonotonic,
    #[error("Cannot add dimension from {0}")]
    UnsupportedSpec(String),
    #[error("Dimensions added to a grid must have a name")]
    UnnamedDimension,
    #[error("To set a grid dimension, specify if it is `points` or `edges`, e.g. grid.dim(\"{name}\").set_edges(...)")]
    DirectAssignmentNotSupported { name: String },
    #[error("Sample has {got} dimensions, but the grid has {expected}")]
    DimensionMismatch { expected: usize, got: usize },
    #[error("Sample for dimension {dimension} has {got} values, expected {expected}")]
    SampleLengthMismatch {
        dimension: usize,
        expected: usize,
        got: usize,
    },
    #[error("Dimension {name:?} has no edges or points")]
    UninitializedDimension { name: String },
    #[error("Number of bins in the grid exceeds usize::MAX")]
    SizeOverflow,
    #[error("Grid has no dimensions")]
    EmptyGrid,
    #[error("Position {position} is out of range for a grid with {ndim} dimensions")]
    PositionOutOfRange { position: usize, ndim: usize },
    #[error("Cannot get key from {0}")]
    UnknownSelector(String),
}

pub type Result<T> = std::result::Result<T, crate::Error>;
