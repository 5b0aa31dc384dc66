// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A bridge to forward logs from the `log` crate to the default logger.
//!
//! Records are gated by verbosity: `Error`, `Warn` and `Info` map to level 0, `Debug` to 1 and
//! `Trace` to 2. The record's file and line are used for the file header flags.

use crate::Caller;
use crate::default_logger;

/// Return the verbosity level a `log` record of `level` is gated at.
pub fn verbosity_of(level: log::Level) -> u32 {
    match level {
        log::Level::Error | log::Level::Warn | log::Level::Info => 0,
        log::Level::Debug => 1,
        log::Level::Trace => 2,
    }
}

struct LogCrateLogger(());

impl log::Log for LogCrateLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        default_logger().v(verbosity_of(metadata.level()))
    }

    fn log(&self, record: &log::Record) {
        let logger = default_logger();
        if !logger.v(verbosity_of(record.level())) {
            return;
        }

        let caller = Caller::new(record.file(), record.line());
        let message = record.args().to_string();
        if let Err(err) = logger.output(caller, &message) {
            logger.trap_error(&err);
        }
    }

    fn flush(&self) {
        let logger = default_logger();
        if let Err(err) = logger.flush() {
            logger.trap_error(&err);
        }
    }
}

/// Set up the log crate global logger.
///
/// This function calls [`log::set_logger`] to set up a `LogCrateLogger` and all logs from the log
/// crate will be forwarded to the default logger.
///
/// This function will set the global maximum log level to `Trace`, leaving the decision to the
/// verbosity gate. To override this, call [`log::set_max_level`] after this function.
///
/// # Errors
///
/// Return an error if the log crate global logger has already been set.
///
/// # Examples
///
/// ```
/// if let Err(err) = vlog::bridge::try_setup_log_crate() {
///     eprintln!("failed to setup log crate: {err}");
/// }
/// ```
pub fn try_setup_log_crate() -> Result<(), log::SetLoggerError> {
    static LOGGER: LogCrateLogger = LogCrateLogger(());
    log::set_logger(&LOGGER)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

/// Set up the log crate global logger.
///
/// See [`try_setup_log_crate`].
///
/// # Panics
///
/// Panic if the log crate global logger has already been set.
///
/// # Examples
///
/// ```
/// vlog::bridge::setup_log_crate();
/// log::info!("forwarded to vlog");
/// ```
pub fn setup_log_crate() {
    try_setup_log_crate().expect(
        "vlog::bridge::setup_log_crate must be called before the log crate global logger initialized",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_of() {
        assert_eq!(verbosity_of(log::Level::Error), 0);
        assert_eq!(verbosity_of(log::Level::Warn), 0);
        assert_eq!(verbosity_of(log::Level::Info), 0);
        assert_eq!(verbosity_of(log::Level::Debug), 1);
        assert_eq!(verbosity_of(log::Level::Trace), 2);
    }
}
