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
use std::io::Write;

use crate::Flags;
use crate::Logger;
use crate::Trap;
use crate::append;
use crate::clock::Clock;
use crate::logger::log_impl::default_logger;
use crate::trap::DefaultTrap;

/// Create a new [`LoggerBuilder`] with the default configuration.
///
/// # Examples
///
/// ```
/// use vlog::Flags;
/// use vlog::append;
///
/// vlog::builder()
///     .level(2)
///     .prefix("server: ")
///     .flags(Flags::STD | Flags::SHORT_FILE)
///     .output(append::Stdout::default())
///     .apply();
///
/// vlog::vprintf!(2, "listening on {}", 8080);
/// ```
pub fn builder() -> LoggerBuilder {
    LoggerBuilder::default()
}

/// A builder for configuring a [`Logger`] or the process-wide default logger.
///
/// Defaults: verbosity 0, empty prefix, [`Flags::STD`], stderr output, [`DefaultTrap`].
#[must_use = "call `apply` to configure the default logger or `build` to construct a logger instance"]
pub struct LoggerBuilder {
    level: u32,
    prefix: String,
    flags: Flags,
    out: Box<dyn Write + Send>,
    trap: Box<dyn Trap>,
}

impl fmt::Debug for LoggerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerBuilder")
            .field("level", &self.level)
            .field("prefix", &self.prefix)
            .field("flags", &self.flags)
            .field("trap", &self.trap)
            .finish_non_exhaustive()
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self {
            level: 0,
            prefix: String::new(),
            flags: Flags::STD,
            out: Box::new(append::Stderr::default()),
            trap: Box::new(DefaultTrap::default()),
        }
    }
}

impl LoggerBuilder {
    /// Set the verbosity threshold.
    pub fn level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Set the prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the header flags.
    pub fn flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    /// Set the output destination.
    pub fn output(mut self, out: impl Write + Send + 'static) -> Self {
        self.out = Box::new(out);
        self
    }

    /// Set the trap that receives write errors of the print-style methods.
    pub fn trap(mut self, trap: impl Into<Box<dyn Trap>>) -> Self {
        self.trap = trap.into();
        self
    }

    /// Build a standalone [`Logger`].
    pub fn build(self) -> Logger {
        Logger::from_parts(
            self.out,
            self.prefix,
            self.flags,
            self.level,
            self.trap,
            Clock::DefaultClock,
        )
    }

    /// Configure the process-wide default logger.
    ///
    /// Every setting of the default logger is replaced, including the ones left at their
    /// defaults on this builder. The previous output is flushed and dropped.
    ///
    /// Settings are replaced one at a time, so an entry logged concurrently may mix old and new
    /// settings. Intended to be called while configuring the program, before logging starts.
    pub fn apply(self) {
        let logger = default_logger();
        logger.set_log_level(self.level);
        logger.set_flags(self.flags);
        logger.set_prefix(self.prefix);
        logger.set_trap(self.trap);
        logger.replace_output(self.out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::append::Buffer;

    #[test]
    fn test_build_applies_settings() {
        let buffer = Buffer::default();
        let logger = builder()
            .level(3)
            .prefix("[t] ")
            .flags(Flags::empty())
            .output(buffer.clone())
            .build();

        assert_eq!(logger.log_level(), 3);
        assert_eq!(logger.prefix(), "[t] ");
        assert_eq!(logger.flags(), Flags::empty());

        logger.vprintln(3, &[&"shown"]);
        logger.vprintln(4, &[&"hidden"]);
        assert_eq!(buffer.contents(), "[t] shown\n");
    }

    #[test]
    fn test_defaults() {
        let logger = builder().build();
        assert_eq!(logger.log_level(), 0);
        assert_eq!(logger.prefix(), "");
        assert_eq!(logger.flags(), Flags::STD);
    }
}
