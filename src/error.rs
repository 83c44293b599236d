//! # Error Taxonomy
//!
//! Every fallible operation in this crate (the binary file codec, the
//! stream-codec hooks, and `Buffer::assign_bytes`) returns one of the
//! kinds below by value. The set is closed and each kind has a stable
//! snake_case tag that is also its `Display` output, so callers can log
//! or match on errors without string parsing.
//!
//! | Kind | Raised when |
//! |------|-------------|
//! | `OpenFailed` | the file could not be opened or created |
//! | `WriteFailed` | a write to an opened file failed |
//! | `ReadFailed` | the header (file or stream) could not be read in full |
//! | `InvalidHeader` | magic mismatch, or header fields are inconsistent |
//! | `SchemaMismatch` | fingerprint or stride does not match the target buffer |
//! | `PayloadSizeMismatch` | payload length is not a stride multiple, or exceeds the stream limit |
//! | `TruncatedPayload` | the payload ended before the declared byte count |

/// Error kind returned by the binary codec, the stream hooks, and
/// payload assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum IoError {
    #[error("open_failed")]
    OpenFailed,
    #[error("write_failed")]
    WriteFailed,
    #[error("read_failed")]
    ReadFailed,
    #[error("invalid_header")]
    InvalidHeader,
    #[error("schema_mismatch")]
    SchemaMismatch,
    #[error("payload_size_mismatch")]
    PayloadSizeMismatch,
    #[error("truncated_payload")]
    TruncatedPayload,
}

impl IoError {
    /// Stable tag for this kind, identical to its `Display` output.
    pub const fn as_str(self) -> &'static str {
        match self {
            IoError::OpenFailed => "open_failed",
            IoError::WriteFailed => "write_failed",
            IoError::ReadFailed => "read_failed",
            IoError::InvalidHeader => "invalid_header",
            IoError::SchemaMismatch => "schema_mismatch",
            IoError::PayloadSizeMismatch => "payload_size_mismatch",
            IoError::TruncatedPayload => "truncated_payload",
        }
    }
}
