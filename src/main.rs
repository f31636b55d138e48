// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::pipeline::{Generator, GeneratorConfig};
use crate::table::{JsonFileStore, MemoryStore, TableStore};

mod app_config;
mod errors;
mod file_utils;
mod pipeline;
mod region;
mod table;

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

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the header from an annotated markup file (default command)
    Generate(GenerateArgs),

    /// Generate shell completions for flashgen
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Annotated markup file to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Output header path (defaults to the input path with a .h extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Translation table path (overrides the configured path)
    #[arg(long)]
    table: Option<PathBuf>,

    /// Source language code (e.g. 'en')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Region marker name prefix (e.g. 'HTTP_')
    #[arg(short, long)]
    prefix: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Dry run: print the generated header to stdout, write nothing
    #[arg(long)]
    check: bool,
}

/// flashgen - PROGMEM string header generator
///
/// Turns an annotated HTML document into conditionally-compiled C/C++
/// PROGMEM string constants and macros, with per-language variants
/// resolved from a persisted translation table at build time.
#[derive(Parser, Debug)]
#[command(name = "flashgen")]
#[command(version = "1.0.0")]
#[command(about = "Multi-language PROGMEM string header generator")]
#[command(long_about = "flashgen extracts named regions from an annotated HTML document and emits
PROGMEM string constants and macros, one variant per language known to the
translation table, selected at compile time via LANG_XX defines.

EXAMPLES:
    flashgen web.html                       # Generate web.h next to the input
    flashgen -o strings.h web.html          # Explicit output path
    flashgen --table i18n.json web.html     # Explicit translation table
    flashgen --check web.html               # Print the output, write nothing
    flashgen completions bash > flashgen.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config-path. If the config file doesn't
    exist, a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Annotated markup file to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Output header path (defaults to the input path with a .h extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Translation table path (overrides the configured path)
    #[arg(long)]
    table: Option<PathBuf>,

    /// Source language code (e.g. 'en')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Region marker name prefix (e.g. 'HTTP_')
    #[arg(short, long)]
    prefix: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Dry run: print the generated header to stdout, write nothing
    #[arg(long)]
    check: bool,
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
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
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
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "flashgen", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Generate(args)) => run_generate(args),
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input_path = cli
                .input_path
                .ok_or_else(|| anyhow!("INPUT_PATH is required when no subcommand is specified"))?;

            let generate_args = GenerateArgs {
                input_path,
                output: cli.output,
                table: cli.table,
                source_language: cli.source_language,
                prefix: cli.prefix,
                config_path: cli.config_path,
                log_level: cli.log_level,
                check: cli.check,
            };
            run_generate(generate_args)
        }
    }
}

fn run_generate(options: GenerateArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        Config::from_file(config_path)
            .with_context(|| format!("Failed to load config file: {}", config_path))?
    } else {
        // Create default configuration if not exists
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );
        let config = Config::default();
        config
            .save_to(config_path)
            .with_context(|| format!("Failed to write default config to file: {}", config_path))?;
        config
    };

    // Override config with CLI options if provided
    if let Some(source_language) = &options.source_language {
        config.source_language = source_language.clone();
    }
    if let Some(prefix) = &options.prefix {
        config.marker_prefix = prefix.clone();
    }
    if let Some(table) = &options.table {
        config.table_path = table.clone();
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config
        .validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    if !options.input_path.is_file() {
        return Err(anyhow!(
            "Input path does not exist: {:?}",
            options.input_path
        ));
    }

    let markup = FileManager::read_to_string(&options.input_path)?;

    let generator_config = GeneratorConfig::new(&config.source_language, &config.marker_prefix);
    let file_store = JsonFileStore::new(&config.table_path);

    let output = if options.check {
        // Dry run resolves against an in-memory copy of the table so
        // neither the output file nor the table file is touched
        let store = MemoryStore::new(file_store.load()?);
        Generator::new(generator_config, &store).generate(&markup)
    } else {
        Generator::new(generator_config, &file_store).generate(&markup)
    }
    .map_err(|e| anyhow!("Generation failed for {:?}: {}", options.input_path, e))?;

    if options.check {
        print!("{}", output);
        return Ok(());
    }

    let output_path = options
        .output
        .clone()
        .unwrap_or_else(|| options.input_path.with_extension("h"));

    FileManager::write_to_file(&output_path, &output)?;
    info!("Generated header: {:?}", output_path);

    Ok(())
}
