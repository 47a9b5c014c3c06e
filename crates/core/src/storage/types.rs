/// Consistency requested for a point read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadConsistency {
    /// The store's default read, which may briefly return stale data after a write.
    #[default]
    Eventual,
    /// A read that reflects every write completed before it was issued.
    Strong,
}

impl ReadConsistency {
    /// Returns true if this is a strongly consistent read.
    pub fn is_strong(self) -> bool {
        matches!(self, ReadConsistency::Strong)
    }
}
