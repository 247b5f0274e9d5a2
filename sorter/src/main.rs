//! Package sorter CLI.
//!
//! Classifies a package from its measurements and prints the stack it belongs
//! to. Exit codes are stable (see [`sorter::exit_codes`]) so scripts can react
//! to invalid input without parsing stderr.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use sorter::io::config::{
    BenchConfig, DEFAULT_CONFIG_FILE, OutputFormat, SorterConfig, load_config, write_config,
};
use sorter::report::ClassificationReport;
use sorter::{Package, bench, demo, exit_codes, logging};

#[derive(Parser)]
#[command(
    name = "sorter",
    version,
    about = "Sort packages into STANDARD, SPECIAL or REJECTED stacks"
)]
struct Cli {
    /// Config file; defaults apply when it does not exist.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify one package. Dimensions in cm, mass in kg.
    Classify {
        #[arg(allow_hyphen_values = true)]
        width: String,
        #[arg(allow_hyphen_values = true)]
        height: String,
        #[arg(allow_hyphen_values = true)]
        length: String,
        #[arg(allow_hyphen_values = true)]
        mass: String,
        /// Also print volume, mass and the thresholds that were crossed.
        #[arg(long)]
        explain: bool,
        /// Output format (overrides config).
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Print the built-in demonstration catalog.
    Demo,
    /// Measure classification throughput.
    Bench {
        /// Packages per scenario (overrides config).
        #[arg(long)]
        iterations: Option<usize>,
    },
    /// Write a default config file if missing.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::for_error(&err));
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut cfg = match cli.command {
        Command::Init { .. } => SorterConfig::default(),
        _ => load_config(&cli.config)?,
    };
    logging::init(&cfg.log_filter);
    debug!(config = %cli.config.display(), "config loaded");

    match cli.command {
        Command::Classify {
            width,
            height,
            length,
            mass,
            explain,
            format,
        } => {
            let explain = explain || cfg.output.explain;
            let format = format.unwrap_or(cfg.output.format);
            cmd_classify([width, height, length, mass], explain, format)
        }
        Command::Demo => cmd_demo(),
        Command::Bench { iterations } => {
            if let Some(iterations) = iterations {
                cfg.bench.iterations = iterations;
                cfg.validate()?;
            }
            cmd_bench(&cfg.bench)
        }
        Command::Init { force } => cmd_init(&cli.config, force),
    }
}

fn cmd_classify(inputs: [String; 4], explain: bool, format: OutputFormat) -> Result<()> {
    let [width, height, length, mass] = inputs;
    debug!(%width, %height, %length, %mass, "classifying package");
    let package = Package::new(width, height, length, mass)?;
    let report = ClassificationReport::new(package);
    info!(classification = %report.classification, volume = report.volume, "classified");

    let output = match format {
        OutputFormat::Text => report.render_text(explain),
        OutputFormat::Json => report.render_json()?,
    };
    print!("{output}");
    Ok(())
}

fn cmd_demo() -> Result<()> {
    print!("{}", demo::render_catalog()?);
    Ok(())
}

fn cmd_bench(cfg: &BenchConfig) -> Result<()> {
    let results = bench::run_all(cfg)?;
    print!("{}", bench::render(&results));
    Ok(())
}

fn cmd_init(path: &Path, force: bool) -> Result<()> {
    if !force && path.exists() {
        println!("init: config={} (kept existing)", path.display());
        return Ok(());
    }
    write_config(path, &SorterConfig::default())?;
    println!("init: config={} (written)", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_classify_accepts_negative_and_text_values() {
        let cli = Cli::parse_from(["sorter", "classify", "-1", "abc", "10", "5"]);
        match cli.command {
            Command::Classify { width, height, .. } => {
                assert_eq!(width, "-1");
                assert_eq!(height, "abc");
            }
            _ => panic!("expected classify"),
        }
    }

    #[test]
    fn parse_classify_flags() {
        let cli = Cli::parse_from([
            "sorter", "classify", "--explain", "--format", "json", "1", "2", "3", "4",
        ]);
        assert!(matches!(
            cli.command,
            Command::Classify {
                explain: true,
                format: Some(OutputFormat::Json),
                ..
            }
        ));
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn parse_init_force() {
        let cli = Cli::parse_from(["sorter", "init", "--force"]);
        assert!(matches!(cli.command, Command::Init { force: true }));
    }

    #[test]
    fn parse_bench_iterations() {
        let cli = Cli::parse_from(["sorter", "--config", "x.toml", "bench", "--iterations", "7"]);
        assert!(matches!(
            cli.command,
            Command::Bench {
                iterations: Some(7)
            }
        ));
        assert_eq!(cli.config, PathBuf::from("x.toml"));
    }
}
