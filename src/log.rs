// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Opt-in file logging. A raw-mode TUI can't log to its own screen, so
//! `tracing` output goes to [`LOG_FILE_NAME`] instead; watch it with
//! `tail -f log.txt`.

use miette::miette;
use tracing_appender::non_blocking::WorkerGuard;

pub const LOG_FILE_NAME: &str = "log.txt";

/// Install a `tracing` subscriber writing to [`LOG_FILE_NAME`] in the
/// working directory. Returns the writer guard; hold it for the life of the
/// process or the tail of the log may be lost.
pub fn try_init_logging() -> miette::Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::never(".", LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(tracing_core::LevelFilter::DEBUG)
        .try_init()
        .map_err(|error| miette!("failed to install tracing subscriber: {error}"))?;
    Ok(guard)
}
