// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use subprose::app_config::{self, Config};
use subprose::app_controller::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for subprose
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// subprose - turn subtitle files into readable documents
///
/// Merges SRT captions into paragraphs and organizes files, folders and zip
/// archives into a single plain text or HTML document.
#[derive(Parser, Debug)]
#[command(name = "subprose")]
#[command(version)]
#[command(about = "Convert subtitle files and archives into prose documents")]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = "subprose reads .srt files, folders of them and .zip archives, strips cue
numbers and timings, merges caption lines into paragraphs and writes one
document with a heading per file, folder and archive.

EXAMPLES:
    subprose ./Season1                       # Writes Season1.txt next to the folder
    subprose show.zip --html                 # Writes show.html
    subprose a.srt b.srt -o talk.txt         # Merges two files under one document
    subprose show.zip --kindle -f            # Kindle HTML, overwriting existing output
    subprose completions bash > subprose.bash

CONFIGURATION:
    Options can be stored in conf.json (see --config-path). Command line
    flags override the file. A missing file means defaults.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Subtitle files, folders or zip archives to convert
    #[arg(value_name = "INPUT_PATH")]
    inputs: Vec<PathBuf>,

    /// Output file or directory (defaults to the input's name next to it)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Produce HTML instead of plain text
    #[arg(long)]
    html: bool,

    /// Produce Kindle-friendly HTML with page breaks (implies --html)
    #[arg(long)]
    kindle: bool,

    /// Title of the HTML document
    #[arg(long)]
    title: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: PathBuf,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
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

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level && metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());
            let _ = writeln!(
                std::io::stderr(),
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Accept everything here; the effective level is set once config is loaded
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "subprose", &mut std::io::stdout());
            Ok(())
        }
        None => run_convert(cli).await,
    }
}

async fn run_convert(options: CommandLineOptions) -> Result<()> {
    if options.inputs.is_empty() {
        return Err(anyhow!("INPUT_PATH is required when no subcommand is specified"));
    }

    // Apply the command line log level before loading config so loading is logged
    if let Some(cmd_log_level) = &options.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let mut config = Config::load_or_default(&options.config_path)?;

    // Override config with CLI options if provided
    if options.html {
        config.output.html = true;
    }
    if options.kindle {
        config.output.kindle = true;
    }
    if let Some(title) = &options.title {
        config.output.title = Some(title.clone());
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    log::set_max_level(config.log_level.to_level_filter());

    let controller = Controller::with_config(config)?;
    let written = controller
        .run(&options.inputs, options.output.clone(), options.force_overwrite)
        .await
        .context("Conversion failed")?;

    println!("{}", written.display());
    Ok(())
}
