//! Error types for fst-bench.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for fst-bench operations.
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur in fst-bench operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BenchError {
    /// The algorithm has no reference toolkit command wired up.
    #[error("algorithm `{algorithm}` has no OpenFST command")]
    NotSupported {
        /// Subcommand of the algorithm
        algorithm: String,
    },

    /// No algorithm registered under this subcommand.
    #[error("algorithm not found: {name}")]
    AlgorithmNotFound {
        /// Requested subcommand
        name: String,
    },

    /// An algorithm with this key is already registered.
    #[error("algorithm already registered: {name}")]
    AlgorithmExists {
        /// Duplicate key
        name: String,
    },

    /// Invalid configuration parameter.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Filesystem or serialization failure.
    #[error("i/o error: {0}")]
    Io(String),

    /// A result file could not be read as an FST.
    #[error("failed to read FST from {}: {message}", path.display())]
    FstRead {
        /// Offending file
        path: PathBuf,
        /// Underlying rustfst error, rendered
        message: String,
    },

    /// Two result files hold different FSTs.
    #[error("FSTs differ ({} vs {}): {reason}", left.display(), right.display())]
    FstMismatch {
        /// First result file
        left: PathBuf,
        /// Second result file
        right: PathBuf,
        /// First difference found
        reason: String,
    },
}
