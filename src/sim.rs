use {
    crate::{
        Access,
        LruPolicy,
        OptPolicy,
        PageNumber,
        ProcessId,
        ReplacementPolicy,
        Report,
        SimConfig,
        SimError,
        SimResult,
        Trace,
    },
    std::{fmt, str::FromStr},
    tracing::info,
};

/// Page replacement algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Least recently used.
    Lru,
    /// Optimal (Belady).
    Opt,
}

impl Algorithm {
    /// Name of the algorithm, as printed in the report.
    pub fn name(self) -> &'static str {
        match self {
            Self::Lru => "LRU",
            Self::Opt => "OPT",
        }
    }
}

impl FromStr for Algorithm {
    type Err = SimError;

    fn from_str(s: &str) -> SimResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "lru" => Ok(Self::Lru),
            "opt" => Ok(Self::Opt),
            _ => Err(SimError::InvalidAlgorithm(s.to_owned())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Replacement policy selected for a run.
#[derive(Debug)]
pub enum Policy {
    /// See [`LruPolicy`].
    Lru(LruPolicy),
    /// See [`OptPolicy`].
    Opt(OptPolicy),
}

impl Policy {
    fn inner(&self) -> &dyn ReplacementPolicy {
        match self {
            Self::Lru(policy) => policy,
            Self::Opt(policy) => policy,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn ReplacementPolicy {
        match self {
            Self::Lru(policy) => policy,
            Self::Opt(policy) => policy,
        }
    }
}

impl ReplacementPolicy for Policy {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn simulate(&mut self, access: &Access, report: &mut Report) -> SimResult<()> {
        self.inner_mut().simulate(access, report)
    }

    fn capacity(&self, process: ProcessId) -> usize {
        self.inner().capacity(process)
    }

    fn resident(&self, process: ProcessId) -> usize {
        self.inner().resident(process)
    }

    fn is_resident(&self, process: ProcessId, page: PageNumber) -> bool {
        self.inner().is_resident(process, page)
    }
}

/// Simulation run: a replacement policy, fixed at construction, and the
/// report it accumulates into.
#[derive(Debug)]
pub struct Simulation {
    policy: Policy,
    report: Report,
}

impl Simulation {
    /// Creates a new simulation.
    ///
    /// `trace` is only looked at by [`Algorithm::Opt`], which pre-scans it
    /// for future accesses. The same trace must then be replayed.
    pub fn new(algorithm: Algorithm, config: SimConfig, trace: &Trace) -> Self {
        let policy = match algorithm {
            Algorithm::Lru => Policy::Lru(LruPolicy::with_config(&config)),
            Algorithm::Opt => Policy::Opt(OptPolicy::with_config(&config, trace)),
        };
        Self {
            policy,
            report: Report::new(algorithm.name(), config.total_frames, config.page_size_kb),
        }
    }

    /// Simulates one memory access.
    pub fn simulate(&mut self, access: &Access) -> SimResult<()> {
        self.policy.simulate(access, &mut self.report)
    }

    /// Replays every record of the trace, in order.
    pub fn run(&mut self, trace: &Trace) -> SimResult<&Report> {
        for access in trace {
            self.simulate(access)?;
        }

        let (accesses, faults, writes) = self.report.counters();
        info!(
            algorithm = self.policy.name(),
            accesses, faults, writes, "simulation finished"
        );
        Ok(&self.report)
    }

    /// Replacement policy of the run.
    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Counters accumulated so far.
    pub fn report(&self) -> &Report {
        &self.report
    }

    /// Consumes the simulation, returning its report.
    pub fn into_report(self) -> Report {
        self.report
    }
}
