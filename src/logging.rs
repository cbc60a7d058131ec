use crate::config::AppConfig;
use std::fs::OpenOptions;
use std::io::{self, Write};

/// Where diagnostic output may go for the chosen front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    /// The terminal UI owns the screen: only a configured log file is safe.
    FileOnly,
    /// Headless runs may fall back to stderr.
    FileOrStderr,
}

pub fn level_for(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

/// Installs the global logger. `RUST_LOG` refines the level picked from `-v`.
pub fn init_logging(config: &AppConfig, verbosity: u8, sink: LogSink) -> io::Result<()> {
    if config.log_file.is_none() && sink == LogSink::FileOnly {
        return Ok(());
    }

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level_for(verbosity));
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    builder.format(|fmt, record| {
        let ts = fmt.timestamp_seconds();
        writeln!(
            fmt,
            "{} [{}] {}: {}",
            ts,
            record.level(),
            record.target(),
            record.args()
        )
    });

    match config.log_file {
        Some(ref path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        None => {
            builder.target(env_logger::Target::Stderr);
        }
    }

    // A second init (tests, embedding) keeps the first logger.
    let _ = builder.try_init();
    Ok(())
}
