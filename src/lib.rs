#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![deny(elided_lifetimes_in_paths)]

mod config;
mod error;
mod page;
mod process;
mod replacer;
mod report;
mod sim;
mod trace;
mod util;

use std::fmt;

pub use {
    config::{FrameRatio, SimConfig},
    error::{SimError, SimResult},
    page::PageRecord,
    process::{ProcessMemory, ProcessPair},
    replacer::{LruPolicy, OptPolicy},
    report::Report,
    sim::{Algorithm, Policy, Simulation},
    trace::{Trace, page_number, parse_record},
};

/// Page identity within a process: an address with the in-page offset shifted
/// out.
pub type PageNumber = u64;

/// Zero-based position of a record within the whole (interleaved) trace.
pub type LineIndex = usize;

/// Memory access type.
///
/// Stores mark the referenced page dirty, so that evicting it later costs a
/// write to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessKind {
    /// Read access.
    Load,
    /// Write access.
    Store,
}

impl AccessKind {
    /// Decodes a trace access type: `s` is a store, anything else is a load.
    pub fn from_char(c: char) -> Self {
        if c == 's' { Self::Store } else { Self::Load }
    }

    /// Whether the access modifies the page.
    pub fn is_store(self) -> bool {
        self == Self::Store
    }
}

/// One of the two simulated processes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProcessId {
    /// Process `0`, receives the first share of the frame ratio.
    First,
    /// Process `1`, receives the second share of the frame ratio.
    Second,
}

impl ProcessId {
    /// Both processes, in index order.
    pub const ALL: [ProcessId; 2] = [ProcessId::First, ProcessId::Second];

    /// Returns the process with the given trace id (`0` or `1`).
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::First),
            1 => Some(Self::Second),
            _ => None,
        }
    }

    /// Trace id of the process.
    pub fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Decoded trace record, as handed over to a replacement policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Access {
    /// Load or store.
    pub kind: AccessKind,
    /// Referenced page.
    pub page: PageNumber,
    /// Process issuing the access.
    pub process: ProcessId,
    /// Position of the record within the trace.
    pub line: LineIndex,
}

impl Access {
    /// Creates a new access record.
    pub fn new(kind: AccessKind, page: PageNumber, process: ProcessId, line: LineIndex) -> Self {
        Self {
            kind,
            page,
            process,
            line,
        }
    }
}

/// Page replacement policy.
///
/// Defines an interface for replaying trace records against a pair of
/// processes. Each call accounts for one memory access in the report, and
/// on a page fault brings the page in, evicting a victim chosen by the
/// policy if the process has no free frame left.
pub trait ReplacementPolicy {
    /// Name of the algorithm, as printed in the report.
    fn name(&self) -> &'static str;

    /// Simulates one memory access.
    ///
    /// Always increments the number of memory accesses. Page faults and disk
    /// writes (evictions of dirty pages) are counted as they happen.
    fn simulate(&mut self, access: &Access, report: &mut Report) -> SimResult<()>;

    /// Returns the number of frames allocated to the process.
    fn capacity(&self, process: ProcessId) -> usize;

    /// Returns the number of pages currently resident in process' frames.
    fn resident(&self, process: ProcessId) -> usize;

    /// Whether the page currently occupies one of process' frames.
    fn is_resident(&self, process: ProcessId, page: PageNumber) -> bool;
}
