use std::collections::HashSet;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{Chain, ConfigurationError, Stage, UnitSize};

/// Assembles an ordered sequence of unit sizes into a [`Chain`].
///
/// Values are collected as signed integers so that zero and negative
/// entries can be reported back precisely rather than lost in a conversion.
/// Validation happens once, in [`ChainBuilder::build`].
///
/// Rebuilding is the only way to change a chain: build a new one and hand it
/// to [`crate::Dispatcher::reconfigure`].
///
/// # Example
///
/// ```
/// use tranche::{ChainBuilder, ConfigurationError};
///
/// let chain = ChainBuilder::new().unit(500).units([200, 100]).build().unwrap();
/// assert_eq!(chain.len(), 3);
///
/// let err = ChainBuilder::new().units([50, 100]).build().unwrap_err();
/// assert!(matches!(err, ConfigurationError::NotDecreasing { index: 1, .. }));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ChainBuilder {
    units: Vec<i64>,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one unit size after the ones already added.
    #[must_use]
    pub fn unit(mut self, unit: i64) -> Self {
        self.units.push(unit);
        self
    }

    /// Appends unit sizes in iteration order.
    #[must_use]
    pub fn units<I>(mut self, units: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        self.units.extend(units);
        self
    }

    /// Validates the collected unit sizes and wires them into a chain.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::Empty`] when no unit was added.
    /// - [`ConfigurationError::NonPositive`] for a zero or negative entry.
    /// - [`ConfigurationError::Duplicate`] for a value seen earlier in the
    ///   sequence.
    /// - [`ConfigurationError::NotDecreasing`] for a value larger than its
    ///   predecessor.
    ///
    /// The first offending position is reported.
    #[cfg_attr(feature = "tracing", instrument(level = "debug", skip(self), fields(units = ?self.units), err))]
    pub fn build(self) -> Result<Chain, ConfigurationError> {
        if self.units.is_empty() {
            return Err(ConfigurationError::Empty);
        }

        let mut seen = HashSet::with_capacity(self.units.len());
        let mut stages = Vec::with_capacity(self.units.len());
        let mut previous: Option<i64> = None;

        for (index, &value) in self.units.iter().enumerate() {
            let unit = UnitSize::try_from(value)
                .map_err(|_| ConfigurationError::NonPositive { index, value })?;
            if !seen.insert(value) {
                return Err(ConfigurationError::Duplicate { index, value });
            }
            match previous {
                Some(previous) if value > previous => {
                    return Err(ConfigurationError::NotDecreasing {
                        index,
                        previous,
                        value,
                    });
                }
                _ => {}
            }
            previous = Some(value);
            stages.push(Stage::new(unit));
        }

        Ok(Chain::from_stages(stages.into_boxed_slice()))
    }
}
