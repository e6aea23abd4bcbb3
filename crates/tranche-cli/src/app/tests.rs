use clap::Parser;
use tranche::{AllocationRecord, UnitSize};

use crate::app::{
    RunSummary,
    config::{CliArgs, CliConfig, DEFAULT_AMOUNTS, Noun, OutputFormat},
    report::{JsonReporter, TextReporter},
    run,
};

fn parse(args: &[&str]) -> CliArgs {
    CliArgs::try_parse_from(std::iter::once("tranche").chain(args.iter().copied())).unwrap()
}

fn config(args: &[&str]) -> CliConfig {
    CliConfig::try_from(parse(args)).unwrap()
}

fn text_output(config: &CliConfig) -> (String, RunSummary) {
    let mut reporter = TextReporter::new(Vec::new(), config.noun.clone());
    let summary = run(config, &mut reporter).unwrap();
    (String::from_utf8(reporter.into_inner()).unwrap(), summary)
}

#[test]
fn defaults_reproduce_the_cash_machine_demo() {
    let args = parse(&[]);
    assert_eq!(args.units, [2000, 500, 200, 100]);
    assert_eq!(args.amounts, DEFAULT_AMOUNTS);
    assert_eq!(args.format, OutputFormat::Text);
    assert!(!args.fail_fast);
}

#[test]
fn parses_units_amounts_and_negative_values() {
    let args = parse(&["--units", "50,20,10", "--format", "json", "80", "-50"]);
    assert_eq!(args.units, [50, 20, 10]);
    assert_eq!(args.amounts, [80, -50]);
    assert_eq!(args.format, OutputFormat::Json);
}

#[test]
fn invalid_units_fail_configuration() {
    let err = CliConfig::try_from(parse(&["--units", "50,100"])).unwrap_err();
    assert!(err.to_string().contains("invalid unit sizes"));

    let cause = err.root_cause().to_string();
    assert!(cause.contains("does not decrease"), "{cause}");
}

#[test]
fn blank_noun_is_rejected() {
    assert!(CliConfig::try_from(parse(&["--noun", "  "])).is_err());
}

#[test]
fn noun_pluralises_by_default() {
    let one = AllocationRecord::new(UnitSize::new(50).unwrap(), 1);
    let two = AllocationRecord::new(UnitSize::new(50).unwrap(), 2);

    let noun = Noun::new("coin", None);
    assert_eq!(noun.for_record(&one), "coin");
    assert_eq!(noun.for_record(&two), "coins");

    let noun = Noun::new("penny", Some("pence".into()));
    assert_eq!(noun.for_record(&one), "penny");
    assert_eq!(noun.for_record(&two), "pence");
}

#[test]
fn text_report_for_the_demo_amounts() {
    let (out, summary) = text_output(&config(&[]));
    let expected = "\
Requested amount 4600
2 notes of 2000 dispatched
1 note of 500 dispatched
1 note of 100 dispatched

Requested amount 1900
3 notes of 500 dispatched
2 notes of 200 dispatched

Requested amount 600
1 note of 500 dispatched
1 note of 100 dispatched

Requested amount 750
Invalid amount 750: amount is not a multiple of the smallest unit 100

";
    assert_eq!(out, expected);
    assert_eq!(
        summary,
        RunSummary {
            dispatched: 3,
            rejected: 1,
            stopped_early: false,
        }
    );
    assert!(!summary.is_success());
}

#[test]
fn fail_fast_stops_at_first_rejection() {
    let (out, summary) = text_output(&config(&["--fail-fast", "0", "600"]));
    assert_eq!(
        out,
        "Requested amount 0\nInvalid amount 0: amount must be positive\n\n"
    );
    assert_eq!(summary.dispatched, 0);
    assert!(summary.stopped_early);
}

#[test]
fn unresolved_remainder_is_reported_as_failure() {
    let (out, summary) = text_output(&config(&["--units", "300,200", "400"]));
    assert!(out.contains("Dispatch failed: amount 400 left a remainder of 100"));
    assert_eq!(summary.rejected, 1);
}

#[test]
fn json_report_writes_one_object_per_amount() {
    let config = config(&["--format", "json", "600", "750"]);
    let mut reporter = JsonReporter::new(Vec::new());
    let summary = run(&config, &mut reporter).unwrap();
    let out = String::from_utf8(reporter.into_inner()).unwrap();

    let mut lines = out.lines();
    assert_eq!(
        lines.next(),
        Some(r#"{"requested":600,"records":[{"unit":500,"count":1},{"unit":100,"count":1}]}"#)
    );
    assert_eq!(
        lines.next(),
        Some(
            r#"{"requested":750,"error":"invalid amount 750: amount is not a multiple of the smallest unit 100"}"#
        )
    );
    assert!(lines.next().is_none());
    assert_eq!(summary.dispatched, 1);
    assert_eq!(summary.rejected, 1);
}

#[test]
fn all_valid_amounts_succeed() {
    let (_, summary) = text_output(&config(&["2000", "100"]));
    assert!(summary.is_success());
    assert_eq!(summary.dispatched, 2);
}
