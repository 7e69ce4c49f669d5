//! swfmt CLI - format and lint Swift-style source files.
//!
//! With no paths (or `--stdin`) the formatter reads stdin to end of input
//! and writes the formatted result to stdout. With paths it enumerates
//! `.swift` files, formats them in parallel, and rewrites changed files in
//! place; `--check` reports the files that would change instead and exits
//! nonzero when there are any.

mod cache;
mod config;
mod error;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use rayon::prelude::*;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use swfmt_engine::{apply_rules, default_rules, fingerprint, Rule};
use swfmt_lex::{offset_for_token, source_code, tokenize, Token};
use swfmt_util::{FormatOptions, Warning};

use cache::FingerprintCache;
use config::Config;
use error::CliError;

/// swfmt - a formatter and linter for Swift-style source files.
#[derive(Parser, Debug)]
#[command(name = "swfmt")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Format and lint Swift-style source files", long_about = None)]
struct Cli {
    /// Files or directories to format; omit to read from stdin
    paths: Vec<PathBuf>,

    /// Report files that would change without rewriting them
    #[arg(long)]
    check: bool,

    /// Read source from stdin and write the result to stdout
    #[arg(long)]
    stdin: bool,

    /// Path to configuration file
    #[arg(short, long, env = "SWFMT_CONFIG")]
    config: Option<PathBuf>,

    /// Treat the input as a code fragment
    #[arg(long)]
    fragment: bool,

    /// Disable the fingerprint cache
    #[arg(long)]
    no_cache: bool,

    /// Enable verbose output
    #[arg(short, long, env = "SWFMT_VERBOSE")]
    verbose: bool,
}

/// What happened to one file.
enum Outcome {
    Unchanged,
    Changed,
    WouldChange,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match run(cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("swfmt: {error:#}");
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let rules = default_rules();
    let config = load_config(&cli)?;
    let mut options = config.format_options()?;
    if cli.fragment {
        options.fragment = true;
    }

    if cli.stdin || cli.paths.is_empty() {
        return format_stdin(&rules, &options);
    }

    let mut files = Vec::new();
    for path in &cli.paths {
        collect_swift_files(path, &mut files)?;
    }
    files.sort();
    files.dedup();
    info!(count = files.len(), "formatting files");

    let cache = if cli.no_cache {
        None
    } else {
        FingerprintCache::default_path().map(FingerprintCache::open)
    };

    let results: Vec<(PathBuf, Result<Outcome, CliError>)> = files
        .par_iter()
        .map(|path| {
            let outcome = process_file(path, &rules, &options, cache.as_ref(), cli.check);
            (path.clone(), outcome)
        })
        .collect();

    let mut changed = 0usize;
    let mut failed = 0usize;
    for (path, result) in &results {
        match result {
            Ok(Outcome::Unchanged) => {}
            Ok(Outcome::Changed) => {
                changed += 1;
                info!(path = %path.display(), "reformatted");
            }
            Ok(Outcome::WouldChange) => {
                changed += 1;
                println!("would reformat: {}", path.display());
            }
            Err(error) => {
                failed += 1;
                eprintln!("swfmt: {}: {error}", path.display());
            }
        }
    }

    if let Some(cache) = &cache {
        if let Err(error) = cache.save() {
            warn!("could not persist fingerprint cache: {error}");
        }
    }

    Ok(if failed > 0 {
        ExitCode::from(2)
    } else if cli.check && changed > 0 {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    })
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    if let Some(path) = &cli.config {
        return Config::load(path)
            .with_context(|| format!("could not load {}", path.display()));
    }
    let start = cli
        .paths
        .first()
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."));
    match Config::discover(&start) {
        Some(path) => {
            debug!(path = %path.display(), "using configuration");
            Ok(Config::load(&path)?)
        }
        None => Ok(Config::default()),
    }
}

fn format_stdin(rules: &[Rule], options: &FormatOptions) -> anyhow::Result<ExitCode> {
    let mut source = String::new();
    std::io::stdin()
        .read_to_string(&mut source)
        .map_err(|e| swfmt_util::Error::Reading(format!("stdin: {e}")))?;
    let output = swfmt_engine::format(&source, rules, options)?;
    print!("{output}");
    Ok(ExitCode::SUCCESS)
}

/// Recursively collects `.swift` files; explicitly named files are taken
/// as-is.
fn collect_swift_files(path: &Path, files: &mut Vec<PathBuf>) -> Result<(), CliError> {
    if path.is_dir() {
        for entry in std::fs::read_dir(path)? {
            let child = entry?.path();
            if child.is_dir() {
                collect_swift_files(&child, files)?;
            } else if child.extension().and_then(|e| e.to_str()) == Some("swift") {
                files.push(child);
            }
        }
    } else {
        files.push(path.to_path_buf());
    }
    Ok(())
}

fn process_file(
    path: &Path,
    rules: &[Rule],
    options: &FormatOptions,
    cache: Option<&FingerprintCache>,
    check: bool,
) -> Result<Outcome, CliError> {
    let source = std::fs::read_to_string(path)
        .map_err(|e| swfmt_util::Error::Reading(format!("{}: {e}", path.display())))?;
    let print = fingerprint(&source, options);
    if let Some(cache) = cache {
        if cache.matches(path, print) {
            debug!(path = %path.display(), "fingerprint unchanged, skipping");
            return Ok(Outcome::Unchanged);
        }
    }

    let tab_width = options.tab_width;
    let mut report = |_rule: usize, tokens: &[Token], warnings: &[Warning]| {
        for warning in warnings {
            match warning.token_index {
                Some(index) => {
                    let location = offset_for_token(index, tokens, tab_width);
                    warn!(path = %path.display(), "{} at {location}", warning.message);
                }
                None => warn!(path = %path.display(), "{}", warning.message),
            }
        }
    };
    let formatted = apply_rules(rules, tokenize(&source), options, Some(&mut report))?;
    let output = source_code(&formatted);

    if output == source {
        if let Some(cache) = cache {
            cache.record(path, print);
        }
        return Ok(Outcome::Unchanged);
    }
    if check {
        return Ok(Outcome::WouldChange);
    }
    std::fs::write(path, &output)?;
    if let Some(cache) = cache {
        cache.record(path, fingerprint(&output, options));
    }
    Ok(Outcome::Changed)
}
