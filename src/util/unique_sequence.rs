/// Unique sequence number generator.
///
/// Whenever a replacer needs to order accesses by recency, it stamps them with
/// sequence numbers: a larger number means a more recent access.
#[derive(Debug, Default)]
pub struct UniqueSequence {
    val: u64,
}

impl UniqueSequence {
    /// Creates a new sequence starting at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { val: 0 }
    }

    /// Returns next sequence number.
    ///
    /// Whenever maximum value is reached, the function returns `None`.
    pub fn next(&mut self) -> Option<u64> {
        let val = self.val;
        self.val = val.checked_add(1)?;
        Some(val)
    }
}
