//! Ordered greedy decomposition of a quantity into fixed unit sizes.
//!
//! A [`Chain`] is an immutable, arena-held sequence of [`Stage`]s, one per
//! unit size, largest first. A [`Dispatcher`] validates a requested quantity
//! against the smallest unit and walks the chain from its head: every stage
//! takes as many of its unit as fit, records the count in a fresh
//! [`RecordSink`], and forwards the remainder to its successor.
//!
//! ```
//! use tranche::Dispatcher;
//!
//! let dispatcher = Dispatcher::from_units([2000, 500, 200, 100]).unwrap();
//! let result = dispatcher.dispatch(4600).unwrap();
//!
//! let pairs: Vec<(u64, u64)> = result
//!     .iter()
//!     .map(|r| (r.unit().get(), r.count()))
//!     .collect();
//! assert_eq!(pairs, [(2000, 2), (500, 1), (100, 1)]);
//! assert_eq!(result.total(), 4600);
//!
//! assert!(dispatcher.dispatch(750).unwrap_err().is_invalid_amount());
//! ```
//!
//! The core assumes a canonical unit set, where taking the largest unit first
//! is already optimal. It is not a general coin-change solver.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`UnitSize`], [`AllocationRecord`]
//!   and [`DispatchResult`]. Deserialization rejects records and results the
//!   dispatcher could never have produced.
//! - `tracing`: spans around chain builds and dispatches, plus per-stage
//!   `trace!` events.

mod chain;
mod dispatcher;
mod error;
mod record;
#[cfg(feature = "serde")]
mod serde;
mod sink;
mod stage;
mod unit;

pub use crate::chain::*;
pub use crate::dispatcher::*;
pub use crate::error::*;
pub use crate::record::*;
#[cfg(feature = "serde")]
pub use crate::serde::*;
pub use crate::sink::*;
pub use crate::stage::*;
pub use crate::unit::*;
