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
use std::fmt::Write;
use std::panic::Location;

use jiff::Timestamp;
use jiff::tz::TimeZone;

use crate::Flags;

/// The source location of a logging call.
///
/// Most callers never build one by hand: every logging function is `#[track_caller]` and captures
/// its own call site. Bridges that already know the location (such as records of the `log` crate)
/// construct it with [`Caller::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller<'a> {
    file: Option<&'a str>,
    line: u32,
}

impl<'a> Caller<'a> {
    /// Create a caller from a file path and line number.
    pub fn new(file: Option<&'a str>, line: Option<u32>) -> Self {
        Self {
            file,
            line: line.unwrap_or_default(),
        }
    }

    /// A caller whose location is unknown. Rendered as `???:0`.
    pub fn unknown() -> Self {
        Self {
            file: None,
            line: 0,
        }
    }

    /// Return the file path, if known.
    pub fn file(&self) -> Option<&'a str> {
        self.file
    }

    /// Return the line number; 0 when unknown.
    pub fn line(&self) -> u32 {
        self.line
    }
}

impl Caller<'static> {
    /// Capture the location of the caller of the function this is called from.
    #[track_caller]
    pub fn here() -> Self {
        Self::from(Location::caller())
    }
}

impl fmt::Display for Caller<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file.unwrap_or("???"), self.line)
    }
}

impl From<&'static Location<'static>> for Caller<'static> {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: Some(location.file()),
            line: location.line(),
        }
    }
}

/// Write the header of one entry: prefix, date, time, and file position as selected by `flags`.
pub(crate) fn write_header(
    buf: &mut String,
    now: Timestamp,
    prefix: &str,
    flags: Flags,
    caller: &Caller,
) {
    if !flags.contains(Flags::MSG_PREFIX) {
        buf.push_str(prefix);
    }

    if flags.intersects(Flags::DATE | Flags::TIME | Flags::MICROSECONDS) {
        let tz = if flags.contains(Flags::UTC) {
            TimeZone::UTC
        } else {
            TimeZone::system()
        };
        let t = now.to_zoned(tz);

        // SAFETY: write to a string always succeeds
        if flags.contains(Flags::DATE) {
            write!(buf, "{:04}/{:02}/{:02} ", t.year(), t.month(), t.day()).unwrap();
        }
        if flags.intersects(Flags::TIME | Flags::MICROSECONDS) {
            write!(buf, "{:02}:{:02}:{:02}", t.hour(), t.minute(), t.second()).unwrap();
            if flags.contains(Flags::MICROSECONDS) {
                write!(buf, ".{:06}", t.subsec_nanosecond() / 1000).unwrap();
            }
            buf.push(' ');
        }
    }

    if flags.intersects(Flags::SHORT_FILE | Flags::LONG_FILE) {
        let file = match caller.file() {
            Some(file) if flags.contains(Flags::SHORT_FILE) => short_file(file),
            Some(file) => file,
            None => "???",
        };
        write!(buf, "{file}:{}: ", caller.line()).unwrap();
    }

    if flags.contains(Flags::MSG_PREFIX) {
        buf.push_str(prefix);
    }
}

fn short_file(file: &str) -> &str {
    match file.rfind(['/', '\\']) {
        Some(pos) => &file[pos + 1..],
        None => file,
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn header(prefix: &str, flags: Flags, caller: Caller) -> String {
        let now = Timestamp::from_str("2009-01-23T01:23:23.123123456Z").unwrap();
        let mut buf = String::new();
        write_header(&mut buf, now, prefix, flags, &caller);
        buf
    }

    #[test]
    fn test_empty_flags_only_prefix() {
        let caller = Caller::new(Some("src/main.rs"), Some(7));
        assert_eq!(header("", Flags::empty(), caller), "");
        assert_eq!(header("app: ", Flags::empty(), caller), "app: ");
    }

    #[test]
    fn test_utc_date_time() {
        let caller = Caller::unknown();
        assert_eq!(header("", Flags::STD | Flags::UTC, caller), "2009/01/23 01:23:23 ");
        assert_eq!(
            header("", Flags::TIME | Flags::MICROSECONDS | Flags::UTC, caller),
            "01:23:23.123123 "
        );
        assert_eq!(
            header("", Flags::MICROSECONDS | Flags::UTC, caller),
            "01:23:23.123123 "
        );
        assert_eq!(header("", Flags::DATE | Flags::UTC, caller), "2009/01/23 ");
    }

    #[test]
    fn test_file_positions() {
        let caller = Caller::new(Some("/a/b/c/main.rs"), Some(23));
        assert_eq!(header("", Flags::LONG_FILE, caller), "/a/b/c/main.rs:23: ");
        assert_eq!(header("", Flags::SHORT_FILE, caller), "main.rs:23: ");
        assert_eq!(
            header("", Flags::SHORT_FILE | Flags::LONG_FILE, caller),
            "main.rs:23: "
        );
        assert_eq!(header("", Flags::SHORT_FILE, Caller::unknown()), "???:0: ");
        assert_eq!(
            header("", Flags::SHORT_FILE, Caller::new(Some(r"src\lib.rs"), Some(3))),
            "lib.rs:3: "
        );
    }

    #[test]
    fn test_msg_prefix_moves_prefix() {
        let caller = Caller::new(Some("src/main.rs"), Some(9));
        assert_eq!(
            header("[app] ", Flags::STD | Flags::UTC | Flags::SHORT_FILE, caller),
            "[app] 2009/01/23 01:23:23 main.rs:9: "
        );
        assert_eq!(
            header(
                "[app] ",
                Flags::STD | Flags::UTC | Flags::SHORT_FILE | Flags::MSG_PREFIX,
                caller
            ),
            "2009/01/23 01:23:23 main.rs:9: [app] "
        );
    }

    #[test]
    fn test_caller_here() {
        let caller = Caller::here();
        assert_eq!(caller.file(), Some(file!()));
        assert_eq!(caller.line(), line!() - 2);
    }
}
