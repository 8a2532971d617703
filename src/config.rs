use {
    crate::{ProcessId, SimError, SimResult},
    std::{fmt, str::FromStr},
};

/// Split of the frame pool between the two processes, written `a:b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRatio {
    /// Share of process `0`.
    pub a: usize,
    /// Share of process `1`.
    pub b: usize,
}

impl FrameRatio {
    /// Creates a new ratio.
    pub const fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// Share of the given process.
    pub fn share(&self, process: ProcessId) -> usize {
        match process {
            ProcessId::First => self.a,
            ProcessId::Second => self.b,
        }
    }

    /// Sum of both shares, `None` if it does not fit a `usize`.
    fn total(&self) -> Option<usize> {
        self.a.checked_add(self.b)
    }

    fn check(&self) -> SimResult<()> {
        match self.total() {
            None => Err(SimError::InvalidRatio(self.to_string())),
            Some(0) => Err(SimError::ZeroRatio),
            Some(_) => Ok(()),
        }
    }
}

impl Default for FrameRatio {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl FromStr for FrameRatio {
    type Err = SimError;

    fn from_str(s: &str) -> SimResult<Self> {
        let invalid = || SimError::InvalidRatio(s.to_owned());
        let (a, b) = s.split_once(':').ok_or_else(invalid)?;
        let a = a.trim().parse().map_err(|_| invalid())?;
        let b = b.trim().parse().map_err(|_| invalid())?;

        let ratio = Self::new(a, b);
        ratio.check()?;
        Ok(ratio)
    }
}

impl fmt::Display for FrameRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.a, self.b)
    }
}

/// Configuration of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    /// Total number of physical frames shared by both processes.
    pub total_frames: usize,

    /// Page size in kilobytes.
    ///
    /// Only determines how addresses map to page numbers, and is echoed in
    /// the report.
    pub page_size_kb: u32,

    /// Split of the frames between the processes.
    pub ratio: FrameRatio,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_frames: 8,
            page_size_kb: 4,
            ratio: FrameRatio::default(),
        }
    }
}

impl SimConfig {
    /// Creates a new configuration.
    pub fn new(total_frames: usize, page_size_kb: u32, ratio: FrameRatio) -> Self {
        Self {
            total_frames,
            page_size_kb,
            ratio,
        }
    }

    /// Checks that the configuration describes a runnable simulation.
    pub fn validate(&self) -> SimResult<()> {
        if self.page_size_kb == 0 {
            return Err(SimError::InvalidPageSize(self.page_size_kb));
        }
        self.ratio.check()
    }

    /// Number of frames allocated to each process, indexed by process id.
    ///
    /// Each process gets `floor(total_frames / (a + b)) * share` frames. The
    /// division truncates, so some frames may be left unallocated. A zero or
    /// overflowing ratio allocates nothing.
    pub fn capacities(&self) -> [usize; 2] {
        let unit = self
            .ratio
            .total()
            .and_then(|total| self.total_frames.checked_div(total))
            .unwrap_or(0);
        ProcessId::ALL.map(|process| unit * self.ratio.share(process))
    }

    /// Number of low address bits holding the in-page offset:
    /// `ceil(log2(page_size_kb)) + 10`.
    pub fn page_number_offset(&self) -> u32 {
        let kb = self.page_size_kb.max(1);
        let log2 = if kb.is_power_of_two() {
            kb.ilog2()
        } else {
            kb.ilog2() + 1
        };
        log2 + 10
    }
}
