// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info, warn};
use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};

use tagsplice::app_config::{self, Config};
use tagsplice::app_controller::Controller;
use tagsplice::batch::BatchReport;

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
    /// Extract translatable text into a tagged copy and a manifest
    #[command(alias = "x")]
    Extract {
        /// Process every matching file under INPUT instead of a single file
        #[arg(short, long)]
        recursive: bool,

        /// Source file, or directory with --recursive
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Directory receiving the .tagged and .out files
        #[arg(value_name = "OUTPUT_DIR")]
        output_dir: PathBuf,

        /// File types to extract from with --recursive (e.g. py rpy)
        #[arg(short = 't', long = "types", num_args = 1.., value_name = "EXT", requires = "recursive")]
        types: Vec<String>,
    },

    /// Insert translations into tagged files
    #[command(alias = "i")]
    Insert {
        /// Process every translation file under PATH instead of a single file
        #[arg(short, long)]
        recursive: bool,

        /// Base file (without .tagged), or directory with --recursive
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Language code used as translation file suffix (e.g. 'en')
        #[arg(value_name = "LANG")]
        lang: String,
    },

    /// Write the default configuration file
    InitConfig {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completions for tagsplice
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// tagsplice - extract translatable text and splice translations back
#[derive(Parser, Debug)]
#[command(name = "tagsplice")]
#[command(version)]
#[command(about = "Extracts and inserts translatable strings")]
#[command(long_about = "tagsplice pulls runs of non-ASCII text out of source files, replaces them
with <EXTRACTEDn> tags and writes the texts to a manifest for translation.
Translations are then spliced back into the tagged files.

EXAMPLES:
    tagsplice extract file.ext tempDir            # Single-file extraction
    tagsplice extract -r folder tempDir -t py rpy # Recursive extraction
    tagsplice insert tempDir/file.ext en          # Single-file insertion
    tagsplice insert -r tempDir en                # Recursive insertion
    tagsplice completions bash > tagsplice.bash   # Generate bash completions

CONFIGURATION:
    Configuration is read from tagsplice.json by default. You can specify a
    different file with --config. Defaults are used when the file does not
    exist; `tagsplice init-config` writes them out.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long = "config", global = true, default_value = "tagsplice.json")]
    config_path: PathBuf,

    /// Set logging level
    #[arg(short, long, global = true, value_enum)]
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

    // @returns: ANSI color for log level
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
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
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

fn main() -> Result<()> {
    // Everything is let through here; the effective level is set with
    // log::set_max_level once the configuration is known
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();
    if let Some(level) = &cli.log_level {
        log::set_max_level(level_filter(&level.clone().into()));
    }

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "tagsplice", &mut std::io::stdout());
            Ok(())
        }
        Commands::InitConfig { force } => init_config(&cli.config_path, force),
        command => {
            let config = load_config(&cli.config_path, cli.log_level)?;
            let controller = Controller::with_config(config)?.with_progress(std::io::stderr().is_terminal());
            run(&controller, command)
        }
    }
}

fn load_config(path: &Path, cli_level: Option<CliLogLevel>) -> Result<Config> {
    let mut config = Config::load_or_default(path)?;

    match cli_level {
        Some(level) => config.log_level = level.into(),
        None => log::set_max_level(level_filter(&config.log_level)),
    }

    Ok(config)
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        warn!("Config file already exists: {:?}. Use -f to force overwrite.", path);
        return Ok(());
    }
    Config::default().save(path)?;
    info!("Default configuration written to {:?}", path);
    Ok(())
}

fn run(controller: &Controller, command: Commands) -> Result<()> {
    match command {
        Commands::Extract {
            recursive: false,
            input,
            output_dir,
            ..
        } => {
            controller.extract_file(&input, &output_dir)?;
            Ok(())
        }
        Commands::Extract {
            recursive: true,
            input,
            output_dir,
            types,
        } => {
            info!("Recursive extraction.");
            let report = controller.extract_dir(&input, &output_dir, &types)?;
            finish_batch(&report)
        }
        Commands::Insert {
            recursive: false,
            path,
            lang,
        } => {
            controller.insert_file(&path, &lang)?;
            Ok(())
        }
        Commands::Insert {
            recursive: true,
            path,
            lang,
        } => {
            info!("Recursive insertion.");
            let report = controller.insert_dir(&path, &lang)?;
            finish_batch(&report)
        }
        Commands::InitConfig { .. } | Commands::Completions { .. } => Ok(()),
    }
}

fn finish_batch(report: &BatchReport) -> Result<()> {
    if report.is_success() {
        Ok(())
    } else {
        Err(anyhow!("{} file(s) could not be processed", report.failures.len()))
    }
}
