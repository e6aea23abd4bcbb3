mod builder;
#[cfg(test)]
mod tests;

pub use builder::*;

use crate::{Allocation, ResultSink, Stage, UnitSize};

/// An immutable, ordered sequence of [`Stage`]s, largest unit first.
///
/// Stages live in one boxed slice; the successor of stage `i` is stage
/// `i + 1` and the last stage is terminal. Nothing can rewire a built chain,
/// so cycles are impossible and a single chain can be shared across threads
/// (wrap it in an `Arc`, as [`crate::Dispatcher`] does).
///
/// Chains are created through [`ChainBuilder`] or [`Chain::from_units`],
/// which enforce a non-empty, positive, strictly decreasing unit sequence.
///
/// # Example
///
/// ```
/// use tranche::{Chain, RecordSink};
///
/// let chain = Chain::from_units([2000, 500, 200, 100]).unwrap();
/// assert_eq!(chain.head().unit().get(), 2000);
/// assert_eq!(chain.smallest_unit().get(), 100);
///
/// let mut sink = RecordSink::new();
/// let leftover = chain.allocate(1900, &mut sink);
/// assert_eq!(leftover, 0);
/// assert_eq!(sink.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chain {
    stages: Box<[Stage]>,
}

impl Chain {
    /// Shortcut for `ChainBuilder::new().units(units).build()`.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::ConfigurationError`] if the sequence is empty, holds
    /// a non-positive value or a duplicate, or is not strictly decreasing.
    pub fn from_units<I>(units: I) -> Result<Self, crate::ConfigurationError>
    where
        I: IntoIterator<Item = i64>,
    {
        ChainBuilder::new().units(units).build()
    }

    /// Only called by [`ChainBuilder::build`] once the sequence is validated.
    pub(crate) fn from_stages(stages: Box<[Stage]>) -> Self {
        debug_assert!(!stages.is_empty());
        debug_assert!(stages.windows(2).all(|w| w[0].unit() > w[1].unit()));
        Self { stages }
    }

    /// The first stage, holding the largest unit.
    pub fn head(&self) -> &Stage {
        &self.stages[0]
    }

    /// The last stage, holding the smallest unit.
    pub fn terminal(&self) -> &Stage {
        &self.stages[self.stages.len() - 1]
    }

    pub fn smallest_unit(&self) -> UnitSize {
        self.terminal().unit()
    }

    /// The stage after position `index`, or `None` past the terminal stage.
    pub fn successor(&self, index: usize) -> Option<&Stage> {
        self.stages.get(index.checked_add(1)?)
    }

    pub fn stage(&self, index: usize) -> Option<&Stage> {
        self.stages.get(index)
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Always `false`; a built chain holds at least one stage.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Stage> {
        self.stages.iter()
    }

    /// Unit sizes in chain order.
    pub fn units(&self) -> impl ExactSizeIterator<Item = UnitSize> + '_ {
        self.stages.iter().map(Stage::unit)
    }

    /// Walks the chain from its head, handing each stage the remainder left by
    /// its predecessor, and stops as soon as nothing is left.
    ///
    /// Records are written to `sink` in chain order. Returns the remainder
    /// left after the terminal stage: 0 when `amount` was fully resolved.
    /// This performs no validation of `amount`; use [`crate::Dispatcher`] for
    /// the guarded entry point.
    pub fn allocate<S: ResultSink + ?Sized>(&self, amount: u64, sink: &mut S) -> u64 {
        let mut remainder = amount;
        let mut current = Some((0, self.head()));
        while let Some((index, stage)) = current {
            if remainder == 0 {
                break;
            }
            let Allocation { remainder: left, .. } = stage.allocate(remainder, &mut *sink);
            remainder = left;
            current = self.successor(index).map(|next| (index + 1, next));
        }
        remainder
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Stage;
    type IntoIter = core::slice::Iter<'a, Stage>;

    fn into_iter(self) -> Self::IntoIter {
        self.stages.iter()
    }
}
