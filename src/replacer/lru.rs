use {
    crate::{
        Access,
        PageNumber,
        PageRecord,
        ProcessId,
        ProcessPair,
        ReplacementPolicy,
        Report,
        SimConfig,
        SimError,
        SimResult,
        util::UniqueSequence,
    },
    priority_queue::PriorityQueue,
    std::cmp::Reverse,
    tracing::{debug, trace},
};

/// Resident pages ordered by recency: the least recently used page has the
/// highest priority.
type RecencyQueue = PriorityQueue<PageNumber, Reverse<u64>>;

/// Least Recently Used (LRU) page replacement.
///
/// Each process keeps its resident pages in a priority queue ordered by the
/// sequence number of their last access. The most recently accessed page is
/// pushed to the back of the queue, while the least recently accessed page is
/// the first to be evicted.
///
/// Only resident pages have a page record: an evicted record is dropped, and
/// a later reference to the same page starts over with a clean record.
#[derive(Debug)]
pub struct LruPolicy {
    processes: ProcessPair<RecencyQueue>,

    /// Monotonically increasing sequence of timestamps.
    /// Used to determine the order of page accesses.
    seq: UniqueSequence,
}

impl LruPolicy {
    /// Creates a new LRU policy with the given per-process frame counts.
    pub fn new(capacities: [usize; 2]) -> Self {
        debug!(?capacities, "LRU policy created");
        Self {
            processes: ProcessPair::new(capacities),
            seq: UniqueSequence::new(),
        }
    }

    /// Creates a new LRU policy, splitting the frames as configured.
    pub fn with_config(config: &SimConfig) -> Self {
        Self::new(config.capacities())
    }

    /// Returns the page record of a resident page.
    pub fn page_record(&self, process: ProcessId, page: PageNumber) -> Option<&PageRecord> {
        self.processes[process].page_table.get(&page)
    }

    /// Next page the process would evict, if any page is resident.
    pub fn peek_victim(&self, process: ProcessId) -> Option<PageNumber> {
        self.processes[process]
            .resident
            .peek()
            .map(|(page, _)| *page)
    }
}

impl ReplacementPolicy for LruPolicy {
    fn name(&self) -> &'static str {
        "LRU"
    }

    fn simulate(&mut self, access: &Access, report: &mut Report) -> SimResult<()> {
        report.record_access();

        let stamp = self.seq.next().ok_or(SimError::SequenceExhausted)?;
        let memory = &mut self.processes[access.process];

        // Hit: move the page to the most recently used end.
        if let Some(record) = memory.page_table.get_mut(&access.page) {
            record.dirty |= access.kind.is_store();
            record.last_access = access.line;
            memory.resident.change_priority(&access.page, Reverse(stamp));
            return Ok(());
        }

        report.record_fault();
        trace!(process = %access.process, page = access.page, line = access.line, "page fault");

        let mut record = PageRecord::new(access.page, access.line);
        record.dirty = access.kind.is_store();

        // No frames, nothing can be cached.
        if memory.capacity == 0 {
            return Ok(());
        }

        if memory.resident.len() >= memory.capacity {
            if let Some((victim, _)) = memory.resident.pop() {
                let dirty = memory
                    .page_table
                    .remove(&victim)
                    .is_some_and(|evicted| evicted.dirty);
                if dirty {
                    report.record_disk_write();
                }
                trace!(process = %access.process, victim, dirty, "page evicted");
            }
        }

        memory.resident.push(access.page, Reverse(stamp));
        memory.page_table.insert(access.page, record);

        Ok(())
    }

    fn capacity(&self, process: ProcessId) -> usize {
        self.processes[process].capacity
    }

    fn resident(&self, process: ProcessId) -> usize {
        self.processes[process].resident.len()
    }

    fn is_resident(&self, process: ProcessId, page: PageNumber) -> bool {
        self.processes[process].resident.get(&page).is_some()
    }
}
