use crate::{
    AllocationRecord, Chain, ChainBuilder, ConfigurationError, RecordSink, ResultSink, UnitSize,
};

fn unit(value: u64) -> UnitSize {
    UnitSize::new(value).unwrap()
}

fn pairs(records: &[AllocationRecord]) -> Vec<(u64, u64)> {
    records.iter().map(|r| (r.unit().get(), r.count())).collect()
}

/// Records every call, including the order stages were visited in.
#[derive(Default)]
struct Recorder {
    seen: Vec<AllocationRecord>,
}

impl ResultSink for Recorder {
    fn record(&mut self, record: AllocationRecord) {
        self.seen.push(record);
    }
}

#[test]
fn builds_stages_in_given_order() {
    let chain = Chain::from_units([2000, 500, 200, 100]).unwrap();
    let units: Vec<u64> = chain.units().map(UnitSize::get).collect();
    assert_eq!(units, [2000, 500, 200, 100]);
    assert_eq!(chain.len(), 4);
    assert!(!chain.is_empty());
    assert_eq!(chain.head().unit(), unit(2000));
    assert_eq!(chain.terminal().unit(), unit(100));
    assert_eq!(chain.smallest_unit(), unit(100));
}

#[test]
fn successor_is_next_position_and_terminal_has_none() {
    let chain = Chain::from_units([500, 200, 100]).unwrap();
    assert_eq!(chain.successor(0).map(|s| s.unit()), Some(unit(200)));
    assert_eq!(chain.successor(1).map(|s| s.unit()), Some(unit(100)));
    assert!(chain.successor(2).is_none());
    assert!(chain.successor(usize::MAX).is_none());
    assert_eq!(chain.stage(1).map(|s| s.unit()), Some(unit(200)));
    assert!(chain.stage(3).is_none());
}

#[test]
fn single_unit_chain_is_its_own_terminal() {
    let chain = Chain::from_units([25]).unwrap();
    assert_eq!(chain.head(), chain.terminal());
    assert!(chain.successor(0).is_none());

    let mut sink = RecordSink::new();
    assert_eq!(chain.allocate(100, &mut sink), 0);
    assert_eq!(pairs(&sink.drain()), [(25, 4)]);
}

#[test]
fn rejects_empty_sequence() {
    let err = ChainBuilder::new().build().unwrap_err();
    assert_eq!(err, ConfigurationError::Empty);
}

#[test]
fn rejects_non_positive_entries() {
    let err = Chain::from_units([500, 0, 100]).unwrap_err();
    assert_eq!(err, ConfigurationError::NonPositive { index: 1, value: 0 });

    let err = Chain::from_units([-5]).unwrap_err();
    assert_eq!(err, ConfigurationError::NonPositive { index: 0, value: -5 });
}

#[test]
fn rejects_duplicates() {
    let err = Chain::from_units([100, 100, 50]).unwrap_err();
    assert_eq!(err, ConfigurationError::Duplicate { index: 1, value: 100 });
}

#[test]
fn duplicate_is_reported_before_ordering() {
    let err = Chain::from_units([100, 50, 100]).unwrap_err();
    assert_eq!(err, ConfigurationError::Duplicate { index: 2, value: 100 });
}

#[test]
fn rejects_increasing_sequence() {
    let err = Chain::from_units([50, 100]).unwrap_err();
    assert_eq!(
        err,
        ConfigurationError::NotDecreasing {
            index: 1,
            previous: 50,
            value: 100,
        }
    );
}

#[test]
fn builder_appends_across_calls() {
    let chain = ChainBuilder::new()
        .unit(1000)
        .units([500, 100])
        .unit(10)
        .build()
        .unwrap();
    let units: Vec<u64> = chain.units().map(UnitSize::get).collect();
    assert_eq!(units, [1000, 500, 100, 10]);
}

#[test]
fn allocate_emits_only_non_zero_counts_in_chain_order() {
    let chain = Chain::from_units([2000, 500, 200, 100]).unwrap();
    let mut recorder = Recorder::default();
    assert_eq!(chain.allocate(1900, &mut recorder), 0);
    assert_eq!(pairs(&recorder.seen), [(500, 3), (200, 2)]);
}

#[test]
fn allocate_stops_once_remainder_is_zero() {
    let chain = Chain::from_units([2000, 500, 200, 100]).unwrap();
    let mut recorder = Recorder::default();
    assert_eq!(chain.allocate(4000, &mut recorder), 0);
    assert_eq!(pairs(&recorder.seen), [(2000, 2)]);
}

#[test]
fn allocate_of_zero_records_nothing() {
    let chain = Chain::from_units([2000, 500]).unwrap();
    let mut sink = RecordSink::new();
    assert_eq!(chain.allocate(0, &mut sink), 0);
    assert!(sink.is_empty());
}

#[test]
fn allocate_returns_what_the_terminal_could_not_resolve() {
    let chain = Chain::from_units([2000, 500, 200, 100]).unwrap();
    let mut sink = RecordSink::new();
    assert_eq!(chain.allocate(750, &mut sink), 50);
    assert_eq!(pairs(&sink.drain()), [(500, 1), (200, 1)]);
}

#[test]
fn allocate_through_mut_reference_sink() {
    let chain = Chain::from_units([10, 5, 1]).unwrap();
    let mut sink = RecordSink::new();
    {
        let mut by_ref = &mut sink;
        chain.allocate(17, &mut by_ref);
    }
    assert_eq!(pairs(&sink.drain()), [(10, 1), (5, 1), (1, 2)]);
}

#[test]
fn chain_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Chain>();
}
