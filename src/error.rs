//! Error types for telemetry decoding.
//!
//! All decode failures are local to a single datagram: the dispatch table
//! catches them, reports them, and carries on with the next datagram. The
//! only variant that is not a per-datagram decode failure is
//! [`Socket`](TelemetryError::Socket), which surfaces receive-loop I/O
//! problems.

use thiserror::Error;

/// Result type alias for telemetry operations.
pub type Result<T, E = TelemetryError> = std::result::Result<T, E>;

/// Main error type for telemetry operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TelemetryError {
    #[error(
        "buffer truncated: needed {needed} byte(s) at offset {offset}, buffer is {len} byte(s)"
    )]
    TruncatedBuffer { offset: usize, needed: usize, len: usize },

    #[error("unknown record kind {kind} in packet header")]
    UnknownRecordKind { kind: u8 },

    #[error("unknown event code {:?}", String::from_utf8_lossy(code))]
    UnknownEventCode { code: [u8; 4] },

    #[error("UDP socket error")]
    Socket {
        #[source]
        source: std::io::Error,
    },
}

impl TelemetryError {
    /// Returns whether this error is a per-datagram decode failure that the
    /// dispatch table absorbs without stopping the stream.
    pub fn is_decode_error(&self) -> bool {
        match self {
            TelemetryError::TruncatedBuffer { .. } => true,
            TelemetryError::UnknownRecordKind { .. } => true,
            TelemetryError::UnknownEventCode { .. } => true,
            TelemetryError::Socket { .. } => false,
        }
    }

    /// Helper constructor for truncation failures.
    pub fn truncated(offset: usize, needed: usize, len: usize) -> Self {
        TelemetryError::TruncatedBuffer { offset, needed, len }
    }
}

impl From<std::io::Error> for TelemetryError {
    fn from(err: std::io::Error) -> Self {
        TelemetryError::Socket { source: err }
    }
}
