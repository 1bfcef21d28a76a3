use clap::{Parser, ValueEnum};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use sprint::core::config;
use sprint::tui;

/// Printed once the terminal is restored after the user quits.
const FAREWELL: &str = "See you soon.";

#[derive(Parser)]
#[command(name = "sprint", about = "Terminal countdown that mirrors the remaining time to a file")]
struct Args {
    /// File the remaining time is written to on every tick
    #[arg(long)]
    status_file: Option<PathBuf>,

    /// Verbosity of sprint.log
    #[arg(long, default_value_t, value_enum)]
    log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to sprint.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("sprint.log") {
        let _ = WriteLogger::init(args.log_level.into(), log_config, log_file);
    }

    log::info!("Sprint starting up");

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("sprint: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let resolved = config::resolve(&file_config, args.status_file.as_deref());

    match tui::run(resolved) {
        Ok(()) => {
            println!("{}", FAREWELL);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Terminal session failed: {}", e);
            eprintln!("could not start program: {}", e);
            ExitCode::FAILURE
        }
    }
}
