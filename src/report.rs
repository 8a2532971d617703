use std::fmt;

/// Aggregate counters of a simulation run.
///
/// Counters are global, i.e. not partitioned by process. The header fields
/// (algorithm, frame count, page size) are fixed at construction and only
/// used for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    algorithm: &'static str,
    total_frames: usize,
    page_size_kb: u32,
    mem_accesses: u64,
    page_faults: u64,
    disk_writes: u64,
}

impl Report {
    /// Creates a zeroed report.
    pub fn new(algorithm: &'static str, total_frames: usize, page_size_kb: u32) -> Self {
        Self {
            algorithm,
            total_frames,
            page_size_kb,
            mem_accesses: 0,
            page_faults: 0,
            disk_writes: 0,
        }
    }

    /// Name of the simulated algorithm.
    pub fn algorithm(&self) -> &'static str {
        self.algorithm
    }

    /// Total number of memory accesses.
    pub fn mem_accesses(&self) -> u64 {
        self.mem_accesses
    }

    /// Total number of page faults.
    pub fn page_faults(&self) -> u64 {
        self.page_faults
    }

    /// Total number of dirty pages written back to disk on eviction.
    pub fn disk_writes(&self) -> u64 {
        self.disk_writes
    }

    /// Counters as `(accesses, faults, writes)`.
    pub fn counters(&self) -> (u64, u64, u64) {
        (self.mem_accesses, self.page_faults, self.disk_writes)
    }

    pub(crate) fn record_access(&mut self) {
        self.mem_accesses += 1;
    }

    pub(crate) fn record_fault(&mut self) {
        self.page_faults += 1;
    }

    pub(crate) fn record_disk_write(&mut self) {
        self.disk_writes += 1;
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Algorithm: {}", self.algorithm)?;
        writeln!(f, "Number of frames: {}", self.total_frames)?;
        writeln!(f, "Page size: {} KB", self.page_size_kb)?;
        writeln!(f, "Total memory accesses: {}", self.mem_accesses)?;
        writeln!(f, "Total page faults: {}", self.page_faults)?;
        write!(f, "Total writes to disk: {}", self.disk_writes)
    }
}
