mod commands;
mod config;
mod error;
mod selection;
mod terminal;

use std::io::{self, Write};
use std::process::ExitCode;

use commands::CommandLine;
use config::Config;
use error::CliError;
use ipfuscator_core::{OctetModel, entropy, enumerate_variants};
use selection::Selector;
use terminal::{logging, print};
use tracing::{debug, error};

fn main() -> ExitCode {
    let cfg: Config = CommandLine::parse_args().into();

    if let Err(e) = logging::init_logging(cfg.verbose) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    print::banner(cfg.quiet);

    if cfg.help {
        print::usage();
        return ExitCode::SUCCESS;
    }

    match run(&cfg, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(target: logging::FATAL_TARGET, "{e}");
            ExitCode::FAILURE
        }
    }
}

/// Writes one line per selected variant (or per id with `--list`) to `out`.
fn run(cfg: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    if cfg.list {
        for variant in enumerate_variants() {
            writeln!(out, "{variant}")?;
        }
        return Ok(());
    }

    let addr: &str = cfg.addr.as_deref().ok_or(CliError::MissingInput)?;
    let selector: Selector = Selector::compile(&cfg.method)?;
    let model: OctetModel = addr.parse().map_err(CliError::from)?;
    debug!("obfuscating {model}");

    if let Some(seed) = cfg.seed {
        let applied: bool = entropy::seed_global(seed);
        debug!("seed {seed} applied: {applied}");
    }

    let selected = selector.select();
    if selected.is_empty() {
        print::no_results(&cfg.method);
    }

    for variant in selected {
        writeln!(out, "{}", model.render(variant))?;
    }
    out.flush()?;

    Ok(())
}
