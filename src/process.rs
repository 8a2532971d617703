use {
    crate::{PageNumber, PageRecord, ProcessId},
    std::{
        collections::HashMap,
        ops::{Index, IndexMut},
    },
};

/// Memory state of a single process.
///
/// The resident set type `R` is chosen by the replacement policy: the policy
/// decides which bookkeeping it needs to pick a victim.
#[derive(Debug)]
pub struct ProcessMemory<R> {
    /// Number of frames allocated to the process.
    pub capacity: usize,

    /// Pages currently occupying the process' frames.
    pub resident: R,

    /// Page table of the process, never shared with the other process.
    pub page_table: HashMap<PageNumber, PageRecord>,
}

impl<R: Default> ProcessMemory<R> {
    /// Creates an empty process with `capacity` frames.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            resident: R::default(),
            page_table: HashMap::new(),
        }
    }
}

/// The two simulated processes, indexable by [`ProcessId`].
#[derive(Debug)]
pub struct ProcessPair<R> {
    processes: [ProcessMemory<R>; 2],
}

impl<R: Default> ProcessPair<R> {
    /// Creates both processes with the given frame allocations.
    pub fn new(capacities: [usize; 2]) -> Self {
        Self {
            processes: capacities.map(ProcessMemory::<R>::new),
        }
    }
}

impl<R> ProcessPair<R> {
    /// Iterates over both processes in id order.
    pub fn iter(&self) -> impl Iterator<Item = (ProcessId, &ProcessMemory<R>)> {
        ProcessId::ALL.into_iter().zip(self.processes.iter())
    }
}

impl<R> Index<ProcessId> for ProcessPair<R> {
    type Output = ProcessMemory<R>;

    fn index(&self, process: ProcessId) -> &Self::Output {
        &self.processes[process.index()]
    }
}

impl<R> IndexMut<ProcessId> for ProcessPair<R> {
    fn index_mut(&mut self, process: ProcessId) -> &mut Self::Output {
        &mut self.processes[process.index()]
    }
}
