//! Validating deserialization for dispatch output.
//!
//! Serialization is derived. Deserialization goes through a plain mirror of
//! each type and only succeeds for values the dispatcher could have produced.

use ::serde::{Deserialize, Deserializer, de::Error as _};

use crate::{AllocationRecord, DispatchResult, UnitSize};

/// Why serialized dispatch output was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SerdeError {
    /// A result carried no records; the dispatcher never hands one out.
    #[error("result has no records")]
    Empty,

    /// A record allocated zero units.
    #[error("record for unit {unit} has a zero count")]
    ZeroCount { unit: UnitSize },

    /// A record's unit was not smaller than the one before it.
    #[error("record for unit {unit} does not follow a larger unit")]
    OutOfOrder { unit: UnitSize },

    /// The records do not add up to the requested quantity, or overflow.
    #[error("records total {total:?} but {requested} was requested")]
    TotalMismatch { requested: u64, total: Option<u64> },
}

#[derive(Deserialize)]
struct RawRecord {
    unit: UnitSize,
    count: u64,
}

#[derive(Deserialize)]
struct RawResult {
    requested: u64,
    records: Vec<AllocationRecord>,
}

fn check_record(raw: RawRecord) -> Result<AllocationRecord, SerdeError> {
    if raw.count == 0 {
        return Err(SerdeError::ZeroCount { unit: raw.unit });
    }
    Ok(AllocationRecord::new(raw.unit, raw.count))
}

fn check_result(raw: RawResult) -> Result<DispatchResult, SerdeError> {
    if raw.records.is_empty() {
        return Err(SerdeError::Empty);
    }
    if let Some(w) = raw.records.windows(2).find(|w| w[0].unit() <= w[1].unit()) {
        return Err(SerdeError::OutOfOrder { unit: w[1].unit() });
    }
    let total = raw.records.iter().try_fold(0_u64, |acc, r| {
        r.unit()
            .get()
            .checked_mul(r.count())
            .and_then(|value| acc.checked_add(value))
    });
    if total != Some(raw.requested) {
        return Err(SerdeError::TotalMismatch {
            requested: raw.requested,
            total,
        });
    }
    Ok(DispatchResult::new(raw.requested, raw.records))
}

impl<'de> Deserialize<'de> for AllocationRecord {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        check_record(RawRecord::deserialize(d)?).map_err(D::Error::custom)
    }
}

impl<'de> Deserialize<'de> for DispatchResult {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        check_result(RawResult::deserialize(d)?).map_err(D::Error::custom)
    }
}
