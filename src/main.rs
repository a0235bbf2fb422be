use clap::Parser;
use dladm_facts::output::{render, OutputFormat};
use dladm_facts::{from_output, gather, load_config, Category, SystemRunner};
use miette::{Context, IntoDiagnostic};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Gather Solaris dladm datalink attributes as structured facts
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The dladm show attribute to gather
    #[arg(value_enum)]
    attribute: Category,

    /// Additional configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Parse this file ('-' for stdin) instead of running dladm
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let facts = match &cli.input {
        Some(path) => {
            let raw = read_input(path)?;
            debug!("parsing {} bytes of canned output", raw.len());
            from_output(cli.attribute, &raw)?
        }
        None => {
            let cfg = load_config(cli.config.as_deref())?;
            debug!(?cfg, "loaded configuration");
            gather(cli.attribute, &SystemRunner, &cfg)?
        }
    };

    println!("{}", render(&facts, cli.format)?.trim_end());
    Ok(())
}

fn read_input(path: &Path) -> miette::Result<String> {
    if path.as_os_str() == "-" {
        let mut raw = String::new();
        io::stdin()
            .read_to_string(&mut raw)
            .into_diagnostic()
            .wrap_err("reading dladm output from stdin")?;
        Ok(raw)
    } else {
        std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("reading dladm output from {}", path.display()))
    }
}
