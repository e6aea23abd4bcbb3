use crate::AllocationRecord;

/// Receives the records a chain emits during one traversal.
///
/// Implementations must not be shared between concurrent traversals: two
/// dispatches writing into the same sink would interleave their records and
/// lose chain order. `&mut self` makes that a compile-time error for safe
/// code.
pub trait ResultSink {
    /// Appends one record, in the order the chain emits it.
    fn record(&mut self, record: AllocationRecord);
}

impl<S: ResultSink + ?Sized> ResultSink for &mut S {
    fn record(&mut self, record: AllocationRecord) {
        (**self).record(record);
    }
}

/// An ordered, single-dispatch accumulator of [`AllocationRecord`]s.
///
/// The dispatcher creates one per call and drains it into the returned
/// [`crate::DispatchResult`].
///
/// # Example
///
/// ```
/// use tranche::{AllocationRecord, RecordSink, ResultSink, UnitSize};
///
/// let mut sink = RecordSink::new();
/// sink.record(AllocationRecord::new(UnitSize::new(500).unwrap(), 3));
///
/// let drained = sink.drain();
/// assert_eq!(drained.len(), 1);
/// assert!(sink.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct RecordSink {
    records: Vec<AllocationRecord>,
}

impl RecordSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes every record collected so far, leaving the sink empty.
    pub fn drain(&mut self) -> Vec<AllocationRecord> {
        core::mem::take(&mut self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ResultSink for RecordSink {
    fn record(&mut self, record: AllocationRecord) {
        self.records.push(record);
    }
}
