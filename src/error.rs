use crate::{LineIndex, PageNumber, ProcessId};

/// Simulation error.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// Replay referenced a page the pre-scan never saw.
    ///
    /// The trace being replayed diverged from the pre-scanned one, the
    /// simulation cannot continue.
    #[error("No pre-scanned page record for page {page:#x} of process {process}")]
    MissingPageRecord {
        /// Process that referenced the page.
        process: ProcessId,
        /// Referenced page.
        page: PageNumber,
    },

    /// Replay referenced a page more often than the pre-scan recorded.
    #[error("Page {page:#x} of process {process} has no future access left for line {line}")]
    FutureAccessesExhausted {
        /// Process that referenced the page.
        process: ProcessId,
        /// Referenced page.
        page: PageNumber,
        /// Trace line being replayed.
        line: LineIndex,
    },

    /// Sequence generator arrived at maximum value.
    #[error("Sequence generator exhausted")]
    SequenceExhausted,

    /// Frame ratio is not of `a:b` form.
    #[error("Invalid frame ratio: {0:?} (expected a:b)")]
    InvalidRatio(String),

    /// Both ratio shares are zero.
    #[error("Frame ratio shares must not both be zero")]
    ZeroRatio,

    /// Page size is not a positive number of kilobytes.
    #[error("Invalid page size: {0} KB")]
    InvalidPageSize(u32),

    /// Trace line does not have the `<type> <address> <process>` shape.
    #[error("Malformed trace record at line {line}: {reason}")]
    MalformedRecord {
        /// Trace line.
        line: LineIndex,
        /// What is missing.
        reason: &'static str,
    },

    /// Address could not be decoded.
    #[error("Invalid address at line {line}: {value:?}")]
    InvalidAddress {
        /// Trace line.
        line: LineIndex,
        /// Raw address token.
        value: String,
    },

    /// Process id is neither 0 nor 1.
    #[error("Invalid process id at line {line}: {value:?}")]
    InvalidProcess {
        /// Trace line.
        line: LineIndex,
        /// Raw process token.
        value: String,
    },

    /// Unknown replacement algorithm name.
    #[error("Invalid algorithm: {0:?} (expected lru or opt)")]
    InvalidAlgorithm(String),

    /// Failed to read the trace.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Simulation result type.
pub type SimResult<T> = Result<T, SimError>;
