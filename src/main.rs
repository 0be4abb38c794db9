// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use log::{error, info, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use serde::Serialize;
use serde_json::json;
use std::io::Write;
use std::path::{Path, PathBuf};
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use tgquery::app_config::{Config, LogLevel, OutputFormat};
use tgquery::file_utils::FileManager;
use tgquery::{RecordPolicy, TextGrid, TextGridParser};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the tiers of a TextGrid file (or of every TextGrid in a directory)
    Tiers {
        /// TextGrid file or directory
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },

    /// Print the labeled boundaries of a tier
    Entries {
        #[arg(value_name = "PATH")]
        path: PathBuf,
        /// Tier name
        tier: String,
    },

    /// Summarize the occurrences of a label in a tier, with durations
    Summary {
        #[arg(value_name = "PATH")]
        path: PathBuf,
        /// Tier name
        tier: String,
        /// Label to find (exact match)
        label: String,
    },

    /// Print the first label and boundary of a tier
    First {
        #[arg(value_name = "PATH")]
        path: PathBuf,
        tier: String,
    },

    /// Print the last label and boundary of a tier
    Last {
        #[arg(value_name = "PATH")]
        path: PathBuf,
        tier: String,
    },

    /// Generate shell completions for tgquery
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// tgquery - Praat TextGrid parser and query tool
#[derive(Parser, Debug)]
#[command(name = "tgquery")]
#[command(version)]
#[command(about = "Query tiers, labels and durations in Praat TextGrid files")]
#[command(long_about = "tgquery parses Praat TextGrid annotation files and answers questions about their tiers.

EXAMPLES:
    tgquery tiers speech.TextGrid                  # List tiers and their classes
    tgquery tiers corpus/                          # List tiers of every TextGrid in a folder
    tgquery entries speech.TextGrid phones         # Boundaries and labels of a tier
    tgquery summary speech.TextGrid phones a       # Occurrences and durations of a label
    tgquery last speech.TextGrid words             # Last label of a tier
    tgquery --json --strict entries speech.TextGrid phones

CONFIGURATION:
    Settings are read from tgquery.json when it exists. You can specify a different
    file with --config-path. Command line flags override file values.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "tgquery.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, global = true, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Abort on the first malformed interval or point instead of skipping it
    #[arg(short, long, global = true)]
    strict: bool,

    /// Print results as JSON
    #[arg(short, long, global = true)]
    json: bool,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour and tag for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("1;31", "ERROR"),
            Level::Warn => ("1;33", "WARN "),
            Level::Info => ("1;32", "INFO "),
            Level::Debug => ("1;36", "DEBUG"),
            Level::Trace => ("1;35", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (colour, tag) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                colour, now, tag, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

// @struct: Settings resolved from config file and CLI flags
struct Settings {
    policy: RecordPolicy,
    format: OutputFormat,
    precision: usize,
}

#[derive(Serialize)]
struct TierInfo<'a> {
    name: &'a str,
    kind: String,
    start: f64,
    end: f64,
    entries: usize,
}

fn main() -> Result<()> {
    // Install the logger with the most verbose filter; the effective level is
    // lowered with `log::set_max_level` once the configuration is known
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "tgquery", &mut std::io::stdout());
        return Ok(());
    }

    let settings = resolve_settings(&cli)?;
    let parser = TextGridParser::with_policy(settings.policy);

    match &cli.command {
        Commands::Tiers { path } => run_tiers(&parser, path, &settings),
        Commands::Entries { path, tier } => {
            let grid = load(&parser, path)?;
            let entries = grid.tier_entries(tier)?;
            if settings.format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(entries)?);
            } else {
                for entry in entries {
                    println!("{:.*}\t{}", settings.precision, entry.boundary, entry.label);
                }
            }
            Ok(())
        }
        Commands::Summary { path, tier, label } => {
            let grid = load(&parser, path)?;
            match grid.label_occurrences(label, tier)? {
                Some(found) => {
                    if settings.format == OutputFormat::Json {
                        println!("{}", serde_json::to_string_pretty(&found)?);
                    } else {
                        println!("\"{}\" occurs {} time(s) in tier \"{}\"", label, found.count(), tier);
                        for (boundary, duration) in found.iter() {
                            println!("{:.*}\t{:.*}", settings.precision, boundary, settings.precision, duration);
                        }
                    }
                }
                None => {
                    if settings.format == OutputFormat::Json {
                        println!("{}", json!({ "label": label, "tier": tier, "count": 0 }));
                    } else {
                        println!("Label \"{}\" not found in tier \"{}\"", label, tier);
                    }
                }
            }
            Ok(())
        }
        Commands::First { path, tier } => {
            let grid = load(&parser, path)?;
            let (label, boundary) = grid.first_entry(tier)?;
            print_edge(label, boundary, &settings);
            Ok(())
        }
        Commands::Last { path, tier } => {
            let grid = load(&parser, path)?;
            let (label, boundary) = grid.last_entry(tier)?;
            print_edge(label, boundary, &settings);
            Ok(())
        }
        Commands::Completions { .. } => Ok(()),
    }
}

fn resolve_settings(cli: &CommandLineOptions) -> Result<Settings> {
    // If log level is set via command line, apply it before loading anything
    if let Some(cmd_log_level) = &cli.log_level {
        let level: LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let mut config = Config::load_or_default(&cli.config_path)
        .context(format!("Failed to load config file: {}", cli.config_path))?;

    // Override config with CLI options if provided
    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }
    if cli.strict {
        config.parser.record_policy = RecordPolicy::Strict;
    }
    if cli.json {
        config.output.format = OutputFormat::Json;
    }

    config.validate().context("Configuration validation failed")?;
    log::set_max_level(config.log_level.to_level_filter());

    Ok(Settings {
        policy: config.parser.record_policy,
        format: config.output.format,
        precision: config.output.precision,
    })
}

fn load(parser: &TextGridParser, path: &Path) -> Result<TextGrid> {
    if !FileManager::file_exists(path) {
        return Err(anyhow!("Input file does not exist: {:?}", path));
    }
    parser
        .parse_path(path)
        .with_context(|| format!("Failed to parse TextGrid file: {:?}", path))
}

fn run_tiers(parser: &TextGridParser, path: &Path, settings: &Settings) -> Result<()> {
    if FileManager::dir_exists(path) {
        let files = FileManager::find_textgrid_files(path)?;
        info!("Found {} TextGrid file(s) in {:?}", files.len(), path);

        let mut processed_count = 0;
        for file in files {
            match load(parser, &file) {
                Ok(grid) => {
                    println!("== {}", file.display());
                    print_tiers(&grid, settings)?;
                    processed_count += 1;
                }
                Err(e) => error!("Error processing file {:?}: {:#}", file, e),
            }
        }

        info!("Finished processing {} files", processed_count);
        return Ok(());
    }

    if !FileManager::is_textgrid_file(path) {
        log::warn!("{:?} does not have a .TextGrid extension", path);
    }
    let grid = load(parser, path)?;
    print_tiers(&grid, settings)
}

fn print_tiers(grid: &TextGrid, settings: &Settings) -> Result<()> {
    let tiers: Vec<TierInfo> = grid
        .tiers()
        .iter()
        .map(|tier| TierInfo {
            name: tier.name(),
            kind: tier.kind().to_string(),
            start: tier.start(),
            end: tier.end(),
            entries: tier.len(),
        })
        .collect();

    if settings.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&tiers)?);
        return Ok(());
    }

    for tier in &tiers {
        println!(
            "{}: {} [{:.*} - {:.*}] {} entries",
            tier.name,
            tier.kind,
            settings.precision,
            tier.start,
            settings.precision,
            tier.end,
            tier.entries
        );
    }
    Ok(())
}

fn print_edge(label: &str, boundary: f64, settings: &Settings) {
    if settings.format == OutputFormat::Json {
        println!("{}", json!({ "label": label, "boundary": boundary }));
    } else {
        println!("{}\t{:.*}", label, settings.precision, boundary);
    }
}
