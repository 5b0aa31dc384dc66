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

use std::fmt;
use std::fmt::Display;
use std::fmt::Write as _;
use std::io::Write;
use std::sync::LazyLock;
use std::sync::Mutex;
use std::sync::PoisonError;
use std::sync::RwLock;
use std::sync::atomic::AtomicU32;
use std::sync::atomic::Ordering;

use crate::Caller;
use crate::Error;
use crate::Fatal;
use crate::Flags;
use crate::LoggerBuilder;
use crate::Panic;
use crate::Threshold;
use crate::Trap;
use crate::append;
use crate::clock::Clock;
use crate::header::write_header;
use crate::trap::DefaultTrap;

static DEFAULT_LOGGER: LazyLock<Logger> = LazyLock::new(Logger::default);

/// Return the process-wide default logger that the free functions of this crate write to.
///
/// It starts out writing to stderr with [`Flags::STD`], an empty prefix and verbosity 0.
pub fn default_logger() -> &'static Logger {
    &DEFAULT_LOGGER
}

/// A line logger with a verbosity gate.
///
/// Each call to a print-style method writes one entry to the sink: a header selected by the
/// [`Flags`], then the message, then a newline unless the message already ends with one. A
/// single lock guards the sink, so entries from different threads never interleave.
///
/// The `v*` methods write only when their level passes the verbosity gate; see [`Logger::v`].
pub struct Logger {
    threshold: Threshold,
    flags: AtomicU32,
    sink: Mutex<Sink>,
    trap: RwLock<Box<dyn Trap>>,
    clock: Clock,
}

struct Sink {
    prefix: String,
    out: Box<dyn Write + Send>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.log_level())
            .field("flags", &self.flags())
            .field("prefix", &self.prefix())
            .finish_non_exhaustive()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Logger::new(append::Stderr::default(), "", Flags::STD)
    }
}

impl Logger {
    /// Create a new logger writing to `out`.
    ///
    /// The prefix appears at the beginning of each entry, or after the header if
    /// [`Flags::MSG_PREFIX`] is set. The verbosity threshold starts at 0.
    pub fn new(out: impl Write + Send + 'static, prefix: impl Into<String>, flags: Flags) -> Self {
        Self::from_parts(
            Box::new(out),
            prefix.into(),
            flags,
            0,
            Box::new(DefaultTrap::default()),
            Clock::DefaultClock,
        )
    }

    /// Create a new [`LoggerBuilder`]. Same as [`builder`](crate::builder).
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    pub(crate) fn from_parts(
        out: Box<dyn Write + Send>,
        prefix: String,
        flags: Flags,
        level: u32,
        trap: Box<dyn Trap>,
        clock: Clock,
    ) -> Self {
        Self {
            threshold: Threshold::new(level),
            flags: AtomicU32::new(flags.bits()),
            sink: Mutex::new(Sink { prefix, out }),
            trap: RwLock::new(trap),
            clock,
        }
    }

    /// Set the verbosity threshold. Any value is accepted.
    ///
    /// Intended to be called while configuring the program, before the logger is in heavy use.
    pub fn set_log_level(&self, level: u32) {
        self.threshold.set(level);
    }

    /// Return the verbosity threshold.
    pub fn log_level(&self) -> u32 {
        self.threshold.get()
    }

    /// Whether a message at verbosity `level` is written, i.e. `level <= threshold`.
    ///
    /// ```
    /// let logger = vlog::Logger::default();
    /// logger.set_log_level(2);
    /// if logger.v(2) {
    ///     logger.printf(format_args!("starting transaction..."));
    /// }
    /// ```
    pub fn v(&self, level: u32) -> bool {
        self.threshold.enabled(level)
    }

    /// Like [`Logger::print`], but only if `level` passes the verbosity gate.
    #[track_caller]
    pub fn vprint(&self, level: u32, values: &[&dyn Display]) {
        if self.v(level) {
            self.print(values);
        }
    }

    /// Like [`Logger::printf`], but only if `level` passes the verbosity gate.
    #[track_caller]
    pub fn vprintf(&self, level: u32, args: fmt::Arguments<'_>) {
        if self.v(level) {
            self.printf(args);
        }
    }

    /// Like [`Logger::println`], but only if `level` passes the verbosity gate.
    #[track_caller]
    pub fn vprintln(&self, level: u32, values: &[&dyn Display]) {
        if self.v(level) {
            self.println(values);
        }
    }

    /// Write the values one after another, with no separator.
    ///
    /// No space is added between operands of any type, so `print(&[&1, &2])` writes `12`. Use
    /// [`Logger::println`] for space-separated values.
    #[track_caller]
    pub fn print(&self, values: &[&dyn Display]) {
        self.write_entry(&concat(values));
    }

    /// Write formatted text.
    #[track_caller]
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        self.write_entry(&args.to_string());
    }

    /// Write the values separated by single spaces.
    #[track_caller]
    pub fn println(&self, values: &[&dyn Display]) {
        self.write_entry(&join(values));
    }

    /// Equivalent to [`Logger::print`], then hand back a [`Fatal`] to terminate the process.
    #[track_caller]
    pub fn fatal(&self, values: &[&dyn Display]) -> Fatal {
        self.print(values);
        Fatal::new()
    }

    /// Equivalent to [`Logger::printf`], then hand back a [`Fatal`] to terminate the process.
    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> Fatal {
        self.printf(args);
        Fatal::new()
    }

    /// Equivalent to [`Logger::println`], then hand back a [`Fatal`] to terminate the process.
    #[track_caller]
    pub fn fatalln(&self, values: &[&dyn Display]) -> Fatal {
        self.println(values);
        Fatal::new()
    }

    /// Equivalent to [`Logger::print`], then hand back a [`Panic`] carrying the message.
    #[track_caller]
    pub fn panic(&self, values: &[&dyn Display]) -> Panic {
        let message = concat(values);
        self.write_entry(&message);
        Panic::new(message)
    }

    /// Equivalent to [`Logger::printf`], then hand back a [`Panic`] carrying the message.
    #[track_caller]
    pub fn panicf(&self, args: fmt::Arguments<'_>) -> Panic {
        let message = args.to_string();
        self.write_entry(&message);
        Panic::new(message)
    }

    /// Equivalent to [`Logger::println`], then hand back a [`Panic`] carrying the message.
    #[track_caller]
    pub fn panicln(&self, values: &[&dyn Display]) -> Panic {
        let message = join(values);
        self.write_entry(&message);
        Panic::new(message)
    }

    /// Set the output destination. The previous sink is flushed and dropped.
    pub fn set_output(&self, out: impl Write + Send + 'static) {
        self.replace_output(Box::new(out));
    }

    pub(crate) fn replace_output(&self, out: Box<dyn Write + Send>) {
        let mut previous = {
            let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
            std::mem::replace(&mut sink.out, out)
        };
        if let Err(err) = previous.flush() {
            let err = Error::from_io_error(err).with_context("action", "flush previous output");
            self.trap_error(&err);
        }
    }

    /// Return the header flags.
    pub fn flags(&self) -> Flags {
        Flags::from_bits_truncate(self.flags.load(Ordering::Relaxed))
    }

    /// Set the header flags.
    pub fn set_flags(&self, flags: Flags) {
        self.flags.store(flags.bits(), Ordering::Relaxed);
    }

    /// Return the prefix.
    pub fn prefix(&self) -> String {
        let sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        sink.prefix.clone()
    }

    /// Set the prefix.
    pub fn set_prefix(&self, prefix: impl Into<String>) {
        let prefix = prefix.into();
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        sink.prefix = prefix;
    }

    /// Set the trap that receives write errors of the print-style methods.
    pub fn set_trap(&self, trap: impl Into<Box<dyn Trap>>) {
        let mut guard = self.trap.write().unwrap_or_else(PoisonError::into_inner);
        *guard = trap.into();
    }

    /// Write one log entry for `message`, as if logged from `caller`.
    ///
    /// The header is built from the current prefix and flags; a newline is appended if
    /// `message` does not already end with one. This is the only method that reports a
    /// failed write to its caller.
    ///
    /// # Errors
    ///
    /// Return an error if writing to the sink fails. The entry is not retried.
    pub fn output(&self, caller: Caller<'_>, message: &str) -> Result<(), Error> {
        let now = self.clock.now();
        let flags = self.flags();

        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entry = String::with_capacity(sink.prefix.len() + message.len() + 48);
        write_header(&mut entry, now, &sink.prefix, flags, &caller);
        entry.push_str(message);
        if !message.ends_with('\n') {
            entry.push('\n');
        }

        sink.out
            .write_all(entry.as_bytes())
            .map_err(|err| Error::from_io_error(err).with_context("caller", caller))
    }

    /// Flush the sink.
    ///
    /// # Errors
    ///
    /// Return an error if flushing the sink fails.
    pub fn flush(&self) -> Result<(), Error> {
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        sink.out.flush().map_err(Error::from_io_error)
    }

    pub(crate) fn trap_error(&self, err: &Error) {
        let trap = self.trap.read().unwrap_or_else(PoisonError::into_inner);
        trap.trap(err);
    }

    #[track_caller]
    fn write_entry(&self, message: &str) {
        if let Err(err) = self.output(Caller::here(), message) {
            self.trap_error(&err);
        }
    }
}

fn concat(values: &[&dyn Display]) -> String {
    let mut text = String::new();
    for value in values {
        // SAFETY: write to a string always succeeds
        write!(&mut text, "{value}").unwrap();
    }
    text
}

fn join(values: &[&dyn Display]) -> String {
    let mut text = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            text.push(' ');
        }
        // SAFETY: write to a string always succeeds
        write!(&mut text, "{value}").unwrap();
    }
    text
}
