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

//! Leveled V-style logging over a simple line logger.
//!
//! # Overview
//!
//! vlog writes plain text lines, each optionally headed by a prefix, a date and time, and the
//! source position of the call. On top of that it adds one concept: a numeric verbosity
//! threshold. A message logged at verbosity `v` is written iff `v <= threshold`. The threshold
//! defaults to 0 and can be set with [`set_log_level`] or from the `-v` command-line flag (see
//! [`flag::Verbosity`]).
//!
//! The free functions of this crate write to a process-wide [default logger][default_logger].
//! A standalone [`Logger`] has the same methods.
//!
//! # Examples
//!
//! ```
//! vlog::set_log_level(3);
//! assert_eq!(vlog::get_log_level(), 3);
//!
//! vlog::println(&[&"Prepare to repel boarders"]);
//!
//! if vlog::v(2) {
//!     vlog::print(&[&"Starting transaction..."]);
//! }
//!
//! let n_items = 42;
//! vlog::vprintln(2, &[&"Processed", &n_items, &"elements"]);
//! vlog::vprintf!(2, "Processed {n_items} elements");
//! ```
//!
//! Fatal-class and panic-class calls write first and then hand back a value that performs the
//! exit or the unwind, so the transfer of control is visible at the call site:
//!
//! ```no_run
//! # let err = "no such file";
//! vlog::fatalf(format_args!("Initialization failed: {err}")).exit();
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

use std::fmt;
use std::fmt::Display;
use std::io::Write;

pub mod abort;
pub mod append;
#[cfg(feature = "bridge-log")]
pub mod bridge;
#[cfg(feature = "flag")]
pub mod flag;
pub mod trap;

mod clock;
mod error;
mod flags;
mod header;
mod logger;
mod macros;
mod verbosity;

pub use self::abort::Fatal;
pub use self::abort::Panic;
pub use self::error::Error;
pub use self::flags::Flags;
pub use self::header::Caller;
pub use self::logger::*;
pub use self::trap::Trap;
pub use self::verbosity::Threshold;

/// Set the verbosity threshold of the default logger.
///
/// Meant to be called while configuring the program, before logging starts.
pub fn set_log_level(level: u32) {
    default_logger().set_log_level(level);
}

/// Return the verbosity threshold of the default logger.
pub fn get_log_level() -> u32 {
    default_logger().log_level()
}

/// Whether a message at verbosity `level` is written by the default logger.
///
/// ```
/// vlog::set_log_level(1);
/// assert!(vlog::v(0));
/// assert!(vlog::v(1));
/// assert!(!vlog::v(2));
/// ```
pub fn v(level: u32) -> bool {
    default_logger().v(level)
}

/// Like [`print`], but only if `level` passes the verbosity gate.
#[track_caller]
pub fn vprint(level: u32, values: &[&dyn Display]) {
    default_logger().vprint(level, values);
}

/// Like [`printf`], but only if `level` passes the verbosity gate.
#[track_caller]
pub fn vprintf(level: u32, args: fmt::Arguments<'_>) {
    default_logger().vprintf(level, args);
}

/// Like [`println`], but only if `level` passes the verbosity gate.
#[track_caller]
pub fn vprintln(level: u32, values: &[&dyn Display]) {
    default_logger().vprintln(level, values);
}

/// Write the values one after another to the default logger.
#[track_caller]
pub fn print(values: &[&dyn Display]) {
    default_logger().print(values);
}

/// Write formatted text to the default logger. See also [`printf!`].
#[track_caller]
pub fn printf(args: fmt::Arguments<'_>) {
    default_logger().printf(args);
}

/// Write the values separated by spaces to the default logger.
#[track_caller]
pub fn println(values: &[&dyn Display]) {
    default_logger().println(values);
}

/// Equivalent to [`print`], then hand back a [`Fatal`] to terminate the process.
#[track_caller]
pub fn fatal(values: &[&dyn Display]) -> Fatal {
    default_logger().fatal(values)
}

/// Equivalent to [`printf`], then hand back a [`Fatal`] to terminate the process.
///
/// See also [`fatalf!`], which exits right away.
#[track_caller]
pub fn fatalf(args: fmt::Arguments<'_>) -> Fatal {
    default_logger().fatalf(args)
}

/// Equivalent to [`println`], then hand back a [`Fatal`] to terminate the process.
#[track_caller]
pub fn fatalln(values: &[&dyn Display]) -> Fatal {
    default_logger().fatalln(values)
}

/// Equivalent to [`print`], then hand back a [`Panic`] carrying the message.
#[track_caller]
pub fn panic(values: &[&dyn Display]) -> Panic {
    default_logger().panic(values)
}

/// Equivalent to [`printf`], then hand back a [`Panic`] carrying the message.
///
/// See also [`panicf!`], which panics right away.
#[track_caller]
pub fn panicf(args: fmt::Arguments<'_>) -> Panic {
    default_logger().panicf(args)
}

/// Equivalent to [`println`], then hand back a [`Panic`] carrying the message.
#[track_caller]
pub fn panicln(values: &[&dyn Display]) -> Panic {
    default_logger().panicln(values)
}

/// Set the output destination of the default logger.
pub fn set_output(out: impl Write + Send + 'static) {
    default_logger().set_output(out);
}

/// Return the header flags of the default logger.
pub fn flags() -> Flags {
    default_logger().flags()
}

/// Set the header flags of the default logger.
pub fn set_flags(flags: Flags) {
    default_logger().set_flags(flags);
}

/// Return the prefix of the default logger.
pub fn prefix() -> String {
    default_logger().prefix()
}

/// Set the prefix of the default logger.
pub fn set_prefix(prefix: impl Into<String>) {
    default_logger().set_prefix(prefix);
}

/// Write one entry for `message` to the default logger, as if logged from `caller`.
///
/// # Errors
///
/// Return an error if writing to the sink fails. See [`Logger::output`].
pub fn output(caller: Caller<'_>, message: &str) -> Result<(), Error> {
    default_logger().output(caller, message)
}

/// Flush the output of the default logger.
///
/// # Errors
///
/// Return an error if flushing the sink fails.
pub fn flush() -> Result<(), Error> {
    default_logger().flush()
}
