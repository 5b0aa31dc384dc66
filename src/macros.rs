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

/// Write formatted text to the default logger, or to the logger given with `logger:`.
///
/// ```
/// let items = 3;
/// vlog::printf!("processed {items} elements");
///
/// let logger = vlog::Logger::default();
/// vlog::printf!(logger: logger, "processed {} elements", items);
/// ```
#[macro_export]
macro_rules! printf {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.printf(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::printf(::std::format_args!($($arg)+))
    };
}

/// Write formatted text if the verbosity level passes the gate.
///
/// The arguments are not evaluated when the level is too verbose.
///
/// ```
/// vlog::set_log_level(2);
/// vlog::vprintf!(2, "processed {} elements", 3);
/// vlog::vprintf!(3, "not written");
/// ```
#[macro_export]
macro_rules! vprintf {
    (logger: $logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        if logger.v($level) {
            logger.printf(::std::format_args!($($arg)+));
        }
    }};
    ($level:expr, $($arg:tt)+) => {{
        if $crate::v($level) {
            $crate::printf(::std::format_args!($($arg)+));
        }
    }};
}

/// Write formatted text, then terminate the process with exit status 1.
///
/// ```no_run
/// vlog::fatalf!("initialization failed: {}", "missing config");
/// ```
#[macro_export]
macro_rules! fatalf {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.fatalf(::std::format_args!($($arg)+)).exit()
    };
    ($($arg:tt)+) => {
        $crate::fatalf(::std::format_args!($($arg)+)).exit()
    };
}

/// Write formatted text, then panic with the same text.
///
/// ```should_panic
/// vlog::panicf!("unexpected state: {}", 42);
/// ```
#[macro_export]
macro_rules! panicf {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.panicf(::std::format_args!($($arg)+)).raise()
    };
    ($($arg:tt)+) => {
        $crate::panicf(::std::format_args!($($arg)+)).raise()
    };
}
