//! Logging setup, shared by the `tourney-pairing` and `score-monitor` binaries.

use std::fs::File;

use time::{format_description, OffsetDateTime};
use tracing::{subscriber::set_global_default, Level};
use tracing_subscriber::{fmt::writer::BoxMakeWriter, FmtSubscriber};

use crate::config::Configuration;

/// Initialize the global tracing subscriber from a [`Configuration`].
///
/// Logs to the configured directory when one is set, otherwise to stderr. Verbose configs log
/// at `DEBUG`, others at `INFO`.
///
/// # Panics
///
/// Panics if a global subscriber has already been installed, or if the log file cannot be
/// created.
pub fn init_logger(config: &Configuration) {
    let level = if config.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let local_offset = time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC);
    let timer = tracing_subscriber::fmt::time::OffsetTime::new(
        local_offset,
        format_description::parse("[year]-[month]-[day] [hour]:[minute]:[second]").unwrap(),
    );

    let writer = if config.is_logging_enabled() {
        let path = log_file_path(config);
        let file = File::create(&path)
            .unwrap_or_else(|e| panic!("could not create log file {}: {e}", path.display()));
        BoxMakeWriter::new(file)
    } else {
        BoxMakeWriter::new(std::io::stderr)
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_ansi(!config.is_logging_enabled())
        .with_timer(timer)
        .with_writer(writer)
        .finish();

    set_global_default(subscriber).expect(
        "could not set global default tracing subscriber; is one already installed elsewhere?",
    );
}

fn log_file_path(config: &Configuration) -> std::path::PathBuf {
    let dir = config
        .log_dir
        .clone()
        .expect("log_file_path called without a log directory configured");
    let format = format_description::parse("[year]-[month]-[day]_[hour]-[minute]-[second]_log.txt")
        .unwrap();
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    dir.join(now.format(&format).unwrap())
}
