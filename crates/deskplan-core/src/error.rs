//! Error handling for Deskplan.
//!
//! The editor core degrades to silent no-ops on missing
//! preconditions, so errors only surface at the serialization and
//! file-export boundary. All error types use `thiserror`.

use thiserror::Error;

/// Editor error type.
#[derive(Error, Debug)]
pub enum EditorError {
    /// A serialized object carried a shape kind the editor does not know.
    #[error("Unknown object kind: {kind}")]
    UnknownObjectKind {
        /// The unrecognized kind string from the wire data.
        kind: String,
    },

    /// Snapshot or export data could not be encoded or decoded.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Export file could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result alias for editor operations.
pub type Result<T> = std::result::Result<T, EditorError>;
