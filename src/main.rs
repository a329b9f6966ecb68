use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use objpluck::config::{Config, OutputFormat};
use objpluck::file::loader::{load_document, load_from_stdin};
use objpluck::file::writer::render_value;
use objpluck::{pluck, Key, KeyPath, PathArg};

/// objpluck - Pluck values out of JSON and YAML documents by path
#[derive(Parser)]
#[command(name = "objpluck")]
#[command(version)]
#[command(about = "Pluck values out of JSON and YAML documents by path", long_about = None)]
struct Cli {
    /// Path to pluck, e.g. `users[0].name` or `config["log.level"]`
    path: String,

    /// Document to read (omit to read from stdin)
    file: Option<PathBuf>,

    /// Treat PATH as a single index applied directly to the root
    #[arg(short, long)]
    index: bool,

    /// Print the keys PATH tokenizes to instead of plucking
    #[arg(long)]
    tokens: bool,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    output: Option<OutputFormat>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8, config: &Config) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = match verbose {
        0 => config.log_level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

fn print_tokens<W: Write>(path: &str, out: &mut W) -> Result<()> {
    for key in &KeyPath::parse(path) {
        match key {
            Key::Label(label) => writeln!(out, "label: {}", label)?,
            Key::Index(index) => writeln!(out, "index: {}", index)?,
        }
    }
    Ok(())
}

/// Runs one invocation and returns the process exit status.
fn run<W: Write>(cli: &Cli, config: &Config, out: &mut W) -> Result<u8> {
    if cli.tokens {
        print_tokens(&cli.path, out)?;
        return Ok(0);
    }

    let index = if cli.index {
        let index: usize = cli
            .path
            .parse()
            .with_context(|| format!("--index expects a non-negative integer, got '{}'", cli.path))?;
        Some(index)
    } else {
        None
    };

    let document = match &cli.file {
        Some(file) => load_document(file)?,
        None => load_from_stdin()?,
    };

    let path = match index {
        Some(index) => PathArg::Index(index),
        None => PathArg::Text(&cli.path),
    };
    let found = pluck(&document, path)?;

    let Some(value) = found else {
        debug!(path = %cli.path, "path did not resolve");
        return Ok(config.missing_exit_code);
    };

    let format = cli.output.unwrap_or(config.output);
    let rendered = render_value(value, format, config.pretty_json)?;
    writeln!(out, "{}", rendered)?;

    Ok(0)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::load();
    init_logging(cli.verbose, &config);

    let status = run(&cli, &config, &mut io::stdout().lock())?;
    Ok(ExitCode::from(status))
}
