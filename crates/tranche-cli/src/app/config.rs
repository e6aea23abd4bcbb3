//! Command-line and environment configuration.
//!
//! Values are read from flags first, then from `TRANCHE_*` environment
//! variables (a `.env` file is loaded before parsing), then from defaults
//! that reproduce the classic cash machine: notes of 2000, 500, 200 and 100
//! and the withdrawals 4600, 1900, 600 and 750.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tranche::{AllocationRecord, Dispatcher};

/// Default unit sizes, largest first.
pub const DEFAULT_UNITS: [i64; 4] = [2000, 500, 200, 100];

/// Amounts dispatched when none are given on the command line.
pub const DEFAULT_AMOUNTS: [i64; 4] = [4600, 1900, 600, 750];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per allocation.
    #[default]
    Text,
    /// One JSON object per requested amount.
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "tranche", version, about = "Decompose amounts into fixed unit sizes")]
pub struct CliArgs {
    /// Unit sizes, comma separated, strictly decreasing.
    #[arg(
        long,
        env = "TRANCHE_UNITS",
        value_delimiter = ',',
        default_values_t = DEFAULT_UNITS,
        allow_negative_numbers = true
    )]
    pub units: Vec<i64>,

    /// Name of a single unit, used in text output.
    #[arg(long, env = "TRANCHE_NOUN", default_value = "note")]
    pub noun: String,

    /// Plural name of a unit. Defaults to the noun with an `s` appended.
    #[arg(long, env = "TRANCHE_PLURAL")]
    pub plural: Option<String>,

    /// Output format.
    #[arg(long, env = "TRANCHE_FORMAT", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Stop at the first rejected amount.
    #[arg(long, env = "TRANCHE_FAIL_FAST")]
    pub fail_fast: bool,

    /// Amounts to dispatch, in order.
    #[arg(default_values_t = DEFAULT_AMOUNTS, allow_negative_numbers = true)]
    pub amounts: Vec<i64>,
}

/// Singular and plural names for one unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Noun {
    pub singular: String,
    pub plural: String,
}

impl Noun {
    pub fn new(singular: impl Into<String>, plural: Option<String>) -> Self {
        let singular = singular.into();
        let plural = plural.unwrap_or_else(|| format!("{singular}s"));
        Self { singular, plural }
    }

    /// The name to print next to `record`'s count.
    pub fn for_record(&self, record: &AllocationRecord) -> &str {
        if record.is_single() {
            &self.singular
        } else {
            &self.plural
        }
    }
}

/// Validated runtime configuration. The chain is built exactly once here and
/// shared by every dispatch of the run.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub dispatcher: Dispatcher,
    pub noun: Noun,
    pub format: OutputFormat,
    pub fail_fast: bool,
    pub amounts: Vec<i64>,
}

impl TryFrom<CliArgs> for CliConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let dispatcher = Dispatcher::from_units(args.units.iter().copied())
            .with_context(|| format!("invalid unit sizes {:?}", args.units))?;

        let noun = args.noun.trim();
        if noun.is_empty() {
            anyhow::bail!("noun must not be empty");
        }
        let plural = args
            .plural
            .map(|p| p.trim().to_owned())
            .filter(|p| !p.is_empty());

        Ok(Self {
            dispatcher,
            noun: Noun::new(noun, plural),
            format: args.format,
            fail_fast: args.fail_fast,
            amounts: args.amounts,
        })
    }
}
