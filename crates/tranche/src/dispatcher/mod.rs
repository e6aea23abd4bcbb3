mod guard;

pub use guard::*;

use std::sync::Arc;

#[cfg(feature = "tracing")]
use tracing::{instrument, warn};

use crate::{Chain, ConfigurationError, DispatchError, DispatchResult, RecordSink, UnitSize};

/// The entry point for decomposition requests.
///
/// A dispatcher owns a shared, immutable [`Chain`]. Every call to
/// [`Dispatcher::dispatch`] validates the request, allocates its own
/// [`RecordSink`], and walks the chain once. Calls never share mutable
/// state, so a dispatcher can be cloned (cheaply, the chain is behind an
/// `Arc`) or shared by reference across threads without locking.
///
/// ## Recommended When
/// - The unit set is fixed at startup and many quantities are decomposed
///   against it.
///
/// ## See Also
/// - [`Chain::allocate`] for the unguarded traversal.
///
/// # Example
///
/// ```
/// use tranche::Dispatcher;
///
/// let dispatcher = Dispatcher::from_units([2000, 500, 200, 100]).unwrap();
///
/// let result = dispatcher.dispatch(600).unwrap();
/// let pairs: Vec<_> = result.iter().map(|r| (r.unit().get(), r.count())).collect();
/// assert_eq!(pairs, [(500, 1), (100, 1)]);
/// ```
#[derive(Clone, Debug)]
pub struct Dispatcher {
    chain: Arc<Chain>,
}

impl Dispatcher {
    /// Creates a dispatcher over `chain`. Accepts an owned [`Chain`] or an
    /// `Arc<Chain>` already shared elsewhere.
    pub fn new(chain: impl Into<Arc<Chain>>) -> Self {
        Self {
            chain: chain.into(),
        }
    }

    /// Builds a chain from `units` and wraps it.
    ///
    /// # Errors
    ///
    /// Any [`ConfigurationError`] raised by [`crate::ChainBuilder::build`].
    pub fn from_units<I>(units: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = i64>,
    {
        Chain::from_units(units).map(Self::new)
    }

    pub fn chain(&self) -> &Arc<Chain> {
        &self.chain
    }

    /// Replaces the whole chain and returns the previous one.
    ///
    /// Requires `&mut self`, so it cannot run while a dispatch borrowed from
    /// this dispatcher is in flight. Clones made earlier keep the old chain.
    pub fn reconfigure(&mut self, chain: impl Into<Arc<Chain>>) -> Arc<Chain> {
        core::mem::replace(&mut self.chain, chain.into())
    }

    /// Decomposes `requested` into the chain's unit sizes.
    ///
    /// Returns the non-zero allocations in chain order. Their values always
    /// sum to `requested`.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::InvalidAmount`] when `requested` is not positive or
    ///   not a multiple of the smallest unit. No stage runs.
    /// - [`DispatchError::UnresolvedRemainder`] when the terminal stage is
    ///   left with a remainder, which only happens when a larger unit is not a
    ///   multiple of the smallest one. No partial result is returned.
    #[cfg_attr(feature = "tracing", instrument(level = "debug", skip(self)))]
    pub fn dispatch(&self, requested: i64) -> Result<DispatchResult, DispatchError> {
        let amount = validate_amount(requested, self.chain.smallest_unit()).inspect_err(|_e| {
            #[cfg(feature = "tracing")]
            warn!(error = %_e, "rejected amount");
        })?;

        let mut sink = RecordSink::new();
        let remainder = self.chain.allocate(amount, &mut sink);
        if remainder != 0 {
            return Err(Self::cold_unresolved(
                amount,
                remainder,
                self.chain.smallest_unit(),
            ));
        }

        Ok(DispatchResult::new(amount, sink.drain()))
    }

    #[cold]
    #[inline(never)]
    fn cold_unresolved(
        requested: u64,
        remainder: u64,
        terminal: UnitSize,
    ) -> DispatchError {
        #[cfg(feature = "tracing")]
        warn!(
            requested,
            remainder,
            terminal = terminal.get(),
            "terminal stage left an unresolved remainder"
        );
        DispatchError::UnresolvedRemainder {
            requested,
            remainder,
            terminal,
        }
    }
}
