use {
    crate::{LineIndex, PageNumber},
    std::collections::VecDeque,
};

/// Page information kept in a process' page table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    /// Page identity within the owning process.
    pub page: PageNumber,

    /// Whether the page was stored to since it was last written back.
    ///
    /// Evicting a dirty page costs one write to disk.
    pub dirty: bool,

    /// Trace line of the most recent access.
    pub last_access: LineIndex,

    /// Trace lines at which the page will be referenced, earliest at the
    /// front. Only populated by policies with lookahead.
    ///
    /// The front entry is consumed when the occurrence it stands for is
    /// replayed.
    pub future_accesses: VecDeque<LineIndex>,
}

impl PageRecord {
    /// Creates a clean record for a page first referenced at `line`.
    pub fn new(page: PageNumber, line: LineIndex) -> Self {
        Self {
            page,
            dirty: false,
            last_access: line,
            future_accesses: VecDeque::new(),
        }
    }

    /// Next trace line at which the page is referenced, if any.
    pub fn next_access(&self) -> Option<LineIndex> {
        self.future_accesses.front().copied()
    }

    /// Whether the page is never referenced again.
    pub fn is_dead(&self) -> bool {
        self.future_accesses.is_empty()
    }

    /// Takes the dirty flag, returning whether a write back is due.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
