use core::{fmt, num::NonZeroU64};

/// A single denomination: a positive, fixed unit size.
///
/// A `UnitSize` can never be zero, so dividing by it is always defined.
/// Negative and zero inputs are rejected at construction.
///
/// # Example
///
/// ```
/// use tranche::UnitSize;
///
/// let unit = UnitSize::new(500).unwrap();
/// assert_eq!(unit.get(), 500);
///
/// assert!(UnitSize::new(0).is_none());
/// assert!(UnitSize::try_from(-50_i64).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct UnitSize(NonZeroU64);

impl UnitSize {
    /// Creates a unit size, returning `None` for zero.
    pub const fn new(value: u64) -> Option<Self> {
        match NonZeroU64::new(value) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Returns the unit size as a plain integer.
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

/// Raised when converting a zero or negative integer into a [`UnitSize`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unit size must be positive, got {0}")]
pub struct NonPositiveUnit(pub i64);

impl TryFrom<u64> for UnitSize {
    type Error = NonPositiveUnit;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(NonPositiveUnit(0))
    }
}

impl TryFrom<i64> for UnitSize {
    type Error = NonPositiveUnit;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or(NonPositiveUnit(value))
    }
}

impl From<UnitSize> for u64 {
    fn from(unit: UnitSize) -> Self {
        unit.get()
    }
}

impl fmt::Display for UnitSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
