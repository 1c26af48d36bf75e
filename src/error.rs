use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("graph has no nodes")]
    EmptyGraph,

    #[error("damping factor must lie in [0, 1], got {0}")]
    InvalidDamping(f64),

    #[error("sample count must be positive")]
    NoSamples,

    #[error("convergence threshold must be positive, got {0}")]
    InvalidEpsilon(f64),

    #[error("iteration cap must be positive")]
    NoIterations,

    #[error("{0} is not a node of the graph")]
    UnknownNode(String),

    #[error("{from} links to {to}, which is not a node of the graph")]
    UnknownTarget { from: String, to: String },

    #[error("node {0} is listed more than once")]
    DuplicateNode(String),

    #[error("node {0} links to itself")]
    SelfLink(String),

    #[error("no convergence after {iterations} iterations (last change {delta})")]
    NotConverged { iterations: usize, delta: f64 },

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("bad link pattern: {0}")]
    Pattern(#[from] regex::Error),
}
