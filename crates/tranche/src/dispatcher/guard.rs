use crate::{AmountRejection, DispatchError, UnitSize};

/// The validation gate run before any stage sees a request.
///
/// Accepts `requested` only when it is positive and a whole multiple of
/// `smallest`, and returns it as an unsigned quantity.
///
/// # Errors
///
/// [`DispatchError::InvalidAmount`] with the matching [`AmountRejection`].
///
/// # Example
///
/// ```
/// use tranche::{AmountRejection, UnitSize, validate_amount};
///
/// let hundred = UnitSize::new(100).unwrap();
/// assert_eq!(validate_amount(600, hundred), Ok(600));
///
/// let err = validate_amount(750, hundred).unwrap_err();
/// assert_eq!(
///     err.rejection(),
///     Some(AmountRejection::NotMultiple { smallest: hundred })
/// );
/// ```
pub fn validate_amount(requested: i64, smallest: UnitSize) -> Result<u64, DispatchError> {
    let reject = |reason| DispatchError::InvalidAmount { requested, reason };

    let amount = match u64::try_from(requested) {
        Ok(amount) if amount > 0 => amount,
        _ => return Err(reject(AmountRejection::NonPositive)),
    };
    if amount % smallest.get() != 0 {
        return Err(reject(AmountRejection::NotMultiple { smallest }));
    }
    Ok(amount)
}
