use crate::UnitSize;

/// One emitted allocation: `count` units of `unit`.
///
/// Records are only emitted for `count > 0`; a stage whose unit does not fit
/// the amount it receives stays silent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AllocationRecord {
    unit: UnitSize,
    count: u64,
}

impl AllocationRecord {
    pub const fn new(unit: UnitSize, count: u64) -> Self {
        Self { unit, count }
    }

    pub const fn unit(&self) -> UnitSize {
        self.unit
    }

    pub const fn count(&self) -> u64 {
        self.count
    }

    /// The quantity covered by this record, `unit * count`.
    pub const fn value(&self) -> u64 {
        self.unit.get() * self.count
    }

    /// `true` when exactly one unit was allocated. Reporters use this to pick
    /// singular or plural phrasing.
    pub const fn is_single(&self) -> bool {
        self.count == 1
    }
}

/// The outcome of one successful dispatch.
///
/// Holds the requested quantity and the emitted [`AllocationRecord`]s in chain
/// order. A `DispatchResult` is built fresh for every call and is never
/// mutated after it is returned.
///
/// With the `serde` feature, deserializing re-checks these guarantees: see
/// [`crate::SerdeError`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DispatchResult {
    requested: u64,
    records: Vec<AllocationRecord>,
}

impl DispatchResult {
    pub(crate) fn new(requested: u64, records: Vec<AllocationRecord>) -> Self {
        Self { requested, records }
    }

    /// The quantity that was dispatched.
    pub fn requested(&self) -> u64 {
        self.requested
    }

    pub fn records(&self) -> &[AllocationRecord] {
        &self.records
    }

    pub fn iter(&self) -> core::slice::Iter<'_, AllocationRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of `unit * count` over every record. Equal to [`Self::requested`]
    /// for every result the dispatcher hands out.
    pub fn total(&self) -> u64 {
        self.records.iter().map(AllocationRecord::value).sum()
    }

    /// The count allocated for `unit`, or 0 if that unit was not used.
    pub fn count_for(&self, unit: UnitSize) -> u64 {
        self.records
            .iter()
            .find(|r| r.unit == unit)
            .map_or(0, AllocationRecord::count)
    }
}

impl IntoIterator for DispatchResult {
    type Item = AllocationRecord;
    type IntoIter = std::vec::IntoIter<AllocationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a DispatchResult {
    type Item = &'a AllocationRecord;
    type IntoIter = core::slice::Iter<'a, AllocationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
