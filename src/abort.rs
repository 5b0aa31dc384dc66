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

//! Values returned by fatal-class and panic-class calls.
//!
//! Writing the entry and leaving the current control flow are two separate steps: the logging
//! call returns one of these values once the entry is written, and the caller decides when to
//! terminate or unwind.
//!
//! ```no_run
//! # fn load() -> Result<(), std::io::Error> { Ok(()) }
//! if let Err(err) = load() {
//!     vlog::fatalf(format_args!("initialization failed: {err}")).exit();
//! }
//! ```

/// The exit status used by [`Fatal::exit`].
pub const FATAL_EXIT_CODE: i32 = 1;

/// The outcome of a fatal-class call: the entry has been written and the process should exit.
#[must_use = "call `exit` to terminate the process"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct Fatal {}

impl Fatal {
    pub(crate) fn new() -> Self {
        Fatal {}
    }

    /// The exit status the process terminates with.
    pub fn code(&self) -> i32 {
        FATAL_EXIT_CODE
    }

    /// Terminate the process with a non-zero exit status.
    ///
    /// Destructors of the current stack and of other threads do not run.
    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }
}

/// The outcome of a panic-class call: the entry has been written and the caller should unwind.
#[must_use = "call `raise` to panic with the logged message"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panic {
    message: String,
}

impl Panic {
    pub(crate) fn new(message: String) -> Self {
        Panic { message }
    }

    /// The logged message, without header and without the trailing newline.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Take the logged message.
    pub fn into_message(self) -> String {
        self.message
    }

    /// Panic with the logged message as payload.
    ///
    /// The payload is a `String`, so it can be recovered with
    /// `payload.downcast_ref::<String>()` after [`std::panic::catch_unwind`].
    #[track_caller]
    pub fn raise(self) -> ! {
        std::panic::panic_any(self.message)
    }
}

#[cfg(test)]
mod tests {
    use std::panic;

    use super::*;

    #[test]
    fn test_fatal_code_is_one() {
        assert_eq!(Fatal::new().code(), 1);
    }

    #[test]
    fn test_panic_raise_carries_message() {
        let payload = panic::catch_unwind(|| Panic::new("boom".to_string()).raise()).unwrap_err();
        assert_eq!(payload.downcast_ref::<String>().map(String::as_str), Some("boom"));
    }
}
