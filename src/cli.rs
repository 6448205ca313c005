//! CLI argument definitions for the batch runner.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use textclean::catalog::{RULES, RuleId};

#[derive(Parser)]
#[command(
    name = "textclean",
    version,
    about = "Replace typographic Unicode (smart quotes, dashes, ligatures, special spaces) with plain ASCII",
    long_about = "Read a whole file (or standard input), replace typographic Unicode characters \
                  with plain-ASCII equivalents, and write the result to standard output.\n\n\
                  Every rule is enabled by default; see --list-rules."
)]
pub struct Cli {
    /// Input file. Reads standard input when absent or `-`.
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Write the result to a file instead of standard output.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// TOML file with a `[rules]` table overlaid on the defaults.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable a rule (repeatable). Applied after --config.
    #[arg(long, value_name = "RULE", value_parser = parse_rule)]
    pub disable: Vec<RuleId>,

    /// Enable a rule (repeatable). Applied after --disable.
    #[arg(long, value_name = "RULE", value_parser = parse_rule)]
    pub enable: Vec<RuleId>,

    /// Print every rule with its label and default, then exit.
    #[arg(long)]
    pub list_rules: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "compact")]
    pub log_format: LogFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Compact,
    Pretty,
    Json,
}

fn parse_rule(name: &str) -> Result<RuleId, String> {
    RuleId::from_name(name).ok_or_else(|| {
        let known: Vec<_> = RULES.iter().map(|d| d.name).collect();
        format!("unknown rule `{name}` (expected one of: {})", known.join(", "))
    })
}
