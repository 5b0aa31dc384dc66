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

//! The `-v` command-line flag.
//!
//! This crate never parses process arguments itself. Flatten [`Verbosity`] into the
//! application's clap parser and call [`Verbosity::apply`] before the first gated call;
//! until then the threshold stays at its default of 0.
//!
//! ```
//! use clap::Parser;
//!
//! #[derive(Parser)]
//! struct Cli {
//!     #[command(flatten)]
//!     verbosity: vlog::flag::Verbosity,
//! }
//!
//! let cli = Cli::parse_from(["app", "-v", "3"]);
//! cli.verbosity.apply();
//! assert_eq!(vlog::get_log_level(), 3);
//! ```

use crate::Logger;

/// The environment variable read when `-v` is not given on the command line.
pub const LEVEL_ENV: &str = "VLOG_LEVEL";

/// The verbosity threshold as a command-line flag: `-v <LEVEL>` or `--v <LEVEL>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::Args)]
pub struct Verbosity {
    /// log level for V logs
    #[arg(
        short = 'v',
        long = "v",
        value_name = "LEVEL",
        default_value_t = 0,
        env = "VLOG_LEVEL"
    )]
    pub level: u32,
}

impl Verbosity {
    /// Set the threshold of the default logger.
    pub fn apply(&self) {
        crate::set_log_level(self.level);
    }

    /// Set the threshold of `logger`.
    pub fn apply_to(&self, logger: &Logger) {
        logger.set_log_level(self.level);
    }
}
