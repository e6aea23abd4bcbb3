#[cfg(feature = "tracing")]
use tracing::trace;

use crate::{AllocationRecord, ResultSink, UnitSize};

/// The pure outcome of one stage: how many units fit, and what is left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Allocation {
    pub count: u64,
    pub remainder: u64,
}

/// One link of a [`crate::Chain`], responsible for exactly one unit size.
///
/// A stage holds no state besides its unit size. It never knows its
/// successor; the chain resolves that by position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stage {
    unit: UnitSize,
}

impl Stage {
    pub const fn new(unit: UnitSize) -> Self {
        Self { unit }
    }

    pub const fn unit(&self) -> UnitSize {
        self.unit
    }

    /// Floor division of `amount` by this stage's unit.
    ///
    /// # Example
    ///
    /// ```
    /// use tranche::{Allocation, Stage, UnitSize};
    ///
    /// let stage = Stage::new(UnitSize::new(200).unwrap());
    /// assert_eq!(stage.split(700), Allocation { count: 3, remainder: 100 });
    /// assert_eq!(stage.split(150), Allocation { count: 0, remainder: 150 });
    /// ```
    pub const fn split(&self, amount: u64) -> Allocation {
        let unit = self.unit.get();
        Allocation {
            count: amount / unit,
            remainder: amount % unit,
        }
    }

    /// Splits `amount` and records the result into `sink` when at least one
    /// unit fits.
    pub fn allocate<S: ResultSink + ?Sized>(&self, amount: u64, sink: &mut S) -> Allocation {
        let allocation = self.split(amount);
        #[cfg(feature = "tracing")]
        trace!(
            unit = self.unit.get(),
            amount,
            count = allocation.count,
            remainder = allocation.remainder,
            "stage allocated"
        );
        if allocation.count > 0 {
            sink.record(AllocationRecord::new(self.unit, allocation.count));
        }
        allocation
    }
}
