//! `textclean` batch runner.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, IsTerminal};
use std::path::Path;
use textclean::{
    Normalizer,
    batch::{resolve_config, write_rule_list, write_text},
    logging::{LogConfig, LogFormat, init_logging},
    source::{Origin, read_source},
};
use tracing::{debug, info, info_span};

mod cli;

use crate::cli::{Cli, LogFormatArg};

fn main() {
    let cli = Cli::parse();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn log_config_from_cli(cli: &Cli) -> LogConfig {
    LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !cli.verbosity.is_present(),
        format: match cli.log_format {
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        },
        with_ansi: io::stderr().is_terminal(),
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.list_rules {
        return write_rule_list(io::stdout().lock()).context("writing to standard output");
    }

    let config = resolve_config(cli.config.as_deref(), &cli.disable, &cli.enable)?;
    debug!(
        enabled = ?config.enabled().map(|id| id.name()).collect::<Vec<_>>(),
        "rule configuration"
    );

    let origin = Origin::from_arg(cli.path.as_deref());
    let input = {
        let _span = info_span!("read", %origin).entered();
        read_source(&origin)?
    };
    info!(%origin, bytes = input.len(), "read input");

    let normalizer = Normalizer::new(config);
    let output = {
        let _span = info_span!("normalize", bytes = input.len()).entered();
        normalizer.normalize(input.as_str())
    };
    info!(
        bytes = output.len(),
        changed = output != input.as_str(),
        "normalized"
    );

    match &cli.output {
        Some(path) => write_file(path, &output),
        None => write_stdout(&output),
    }
}

fn write_stdout(text: &str) -> Result<()> {
    write_text(io::stdout().lock(), text).context("writing to standard output")
}

fn write_file(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), "wrote output");
    Ok(())
}
