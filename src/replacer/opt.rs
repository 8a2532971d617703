//! Optimal (OPT) page replacement.
//!
//! Belady's algorithm evicts the page whose next reference lies farthest in
//! the future. Knowing the future requires the whole trace up front: the
//! policy is built from a pre-scan that records, for every page of every
//! process, the trace lines at which the page is referenced.

use {
    crate::{
        Access,
        LineIndex,
        PageNumber,
        PageRecord,
        ProcessId,
        ProcessMemory,
        ProcessPair,
        ReplacementPolicy,
        Report,
        SimConfig,
        SimError,
        SimResult,
    },
    std::collections::BTreeSet,
    tracing::{debug, trace},
};

/// Optimal page replacement.
///
/// Page records are created by the pre-scan and live for the whole
/// simulation; eviction only takes a page out of the resident set.
#[derive(Debug)]
pub struct OptPolicy {
    processes: ProcessPair<BTreeSet<PageNumber>>,
}

impl OptPolicy {
    /// Creates a new OPT policy with the given per-process frame counts,
    /// pre-scanning `trace` for future accesses.
    ///
    /// The same trace, in the same order, must be replayed afterwards.
    pub fn new<'a, I>(capacities: [usize; 2], trace: I) -> Self
    where
        I: IntoIterator<Item = &'a Access>,
    {
        let mut processes = ProcessPair::<BTreeSet<PageNumber>>::new(capacities);

        let mut records = 0usize;
        for access in trace {
            processes[access.process]
                .page_table
                .entry(access.page)
                .or_insert_with(|| PageRecord::new(access.page, access.line))
                .future_accesses
                .push_back(access.line);
            records += 1;
        }

        debug!(
            ?capacities,
            records,
            pages = ?processes.iter().map(|(_, p)| p.page_table.len()).collect::<Vec<_>>(),
            "OPT policy pre-scanned trace"
        );
        Self { processes }
    }

    /// Creates a new OPT policy, splitting the frames as configured.
    pub fn with_config<'a, I>(config: &SimConfig, trace: I) -> Self
    where
        I: IntoIterator<Item = &'a Access>,
    {
        Self::new(config.capacities(), trace)
    }

    /// Returns the page record of any page referenced by the process.
    pub fn page_record(&self, process: ProcessId, page: PageNumber) -> Option<&PageRecord> {
        self.processes[process].page_table.get(&page)
    }

    /// Next page the process would evict, if any page is resident.
    pub fn peek_victim(&self, process: ProcessId) -> Option<PageNumber> {
        select_victim(&self.processes[process])
    }
}

/// Picks the resident page to evict.
///
/// Pages with no future access are evicted first, the one with the oldest
/// last access winning. Otherwise the page referenced farthest in the future
/// is chosen.
fn select_victim(memory: &ProcessMemory<BTreeSet<PageNumber>>) -> Option<PageNumber> {
    // (last access, page) of the best page never referenced again.
    let mut dead: Option<(LineIndex, PageNumber)> = None;
    // (next access, page) of the page referenced farthest in the future.
    let mut farthest: Option<(LineIndex, PageNumber)> = None;

    for &page in &memory.resident {
        let Some(record) = memory.page_table.get(&page) else {
            continue;
        };
        match record.next_access() {
            None => {
                if dead.is_none_or(|(last, _)| record.last_access < last) {
                    dead = Some((record.last_access, page));
                }
            }
            Some(next) => {
                if farthest.is_none_or(|(far, _)| next > far) {
                    farthest = Some((next, page));
                }
            }
        }
    }

    dead.or(farthest).map(|(_, page)| page)
}

impl ReplacementPolicy for OptPolicy {
    fn name(&self) -> &'static str {
        "OPT"
    }

    fn simulate(&mut self, access: &Access, report: &mut Report) -> SimResult<()> {
        report.record_access();

        let memory = &mut self.processes[access.process];
        let record = memory
            .page_table
            .get_mut(&access.page)
            .ok_or(SimError::MissingPageRecord {
                process: access.process,
                page: access.page,
            })?;

        // Consume the occurrence being replayed.
        record
            .future_accesses
            .pop_front()
            .ok_or(SimError::FutureAccessesExhausted {
                process: access.process,
                page: access.page,
                line: access.line,
            })?;
        record.dirty |= access.kind.is_store();
        record.last_access = access.line;

        if memory.resident.contains(&access.page) {
            return Ok(());
        }

        report.record_fault();
        trace!(process = %access.process, page = access.page, line = access.line, "page fault");

        // No frames, nothing can be cached.
        if memory.capacity == 0 {
            return Ok(());
        }

        if memory.resident.len() >= memory.capacity {
            if let Some(victim) = select_victim(memory) {
                memory.resident.remove(&victim);
                let dirty = memory
                    .page_table
                    .get_mut(&victim)
                    .is_some_and(PageRecord::take_dirty);
                if dirty {
                    report.record_disk_write();
                }
                trace!(process = %access.process, victim, dirty, "page evicted");
            }
        }

        memory.resident.insert(access.page);

        Ok(())
    }

    fn capacity(&self, process: ProcessId) -> usize {
        self.processes[process].capacity
    }

    fn resident(&self, process: ProcessId) -> usize {
        self.processes[process].resident.len()
    }

    fn is_resident(&self, process: ProcessId, page: PageNumber) -> bool {
        self.processes[process].resident.contains(&page)
    }
}
