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
use std::ops::BitAnd;
use std::ops::BitOr;
use std::ops::BitOrAssign;

/// Bits that control which header is written in front of each log entry.
///
/// Bits are or'ed together. There is no control over the order the fields appear in, nor over
/// their format. For example, `Flags::DATE | Flags::TIME` (or [`Flags::STD`]) produces:
///
/// ```text
/// 2009/01/23 01:23:23 message
/// ```
///
/// while `Flags::DATE | Flags::TIME | Flags::MICROSECONDS | Flags::LONG_FILE` produces:
///
/// ```text
/// 2009/01/23 01:23:23.123123 /a/b/c/main.rs:23: message
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flags(u32);

impl Flags {
    /// The date in the local time zone: `2009/01/23`.
    pub const DATE: Flags = Flags(1 << 0);
    /// The time in the local time zone: `01:23:23`.
    pub const TIME: Flags = Flags(1 << 1);
    /// Microsecond resolution: `01:23:23.123123`. Implies [`Flags::TIME`].
    pub const MICROSECONDS: Flags = Flags(1 << 2);
    /// Full file name and line number: `/a/b/c/main.rs:23`.
    pub const LONG_FILE: Flags = Flags(1 << 3);
    /// Final file name element and line number: `main.rs:23`. Overrides [`Flags::LONG_FILE`].
    pub const SHORT_FILE: Flags = Flags(1 << 4);
    /// If [`Flags::DATE`] or [`Flags::TIME`] is set, use UTC rather than the local time zone.
    pub const UTC: Flags = Flags(1 << 5);
    /// Move the prefix from the beginning of the line to before the message.
    pub const MSG_PREFIX: Flags = Flags(1 << 6);
    /// Initial values for a new logger.
    pub const STD: Flags = Flags(Self::DATE.0 | Self::TIME.0);

    const ALL: u32 = (1 << 7) - 1;

    /// No header at all.
    pub const fn empty() -> Flags {
        Flags(0)
    }

    /// Return the raw bits.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Build flags from raw bits, dropping bits that do not name a flag.
    pub const fn from_bits_truncate(bits: u32) -> Flags {
        Flags(bits & Self::ALL)
    }

    /// Whether all bits of `other` are set in `self`.
    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether any bit of `other` is set in `self`.
    pub const fn intersects(self, other: Flags) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Flags {
    type Output = Flags;

    fn bitand(self, rhs: Flags) -> Flags {
        Flags(self.0 & rhs.0)
    }
}

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(Flags, &str); 7] = [
            (Flags::DATE, "DATE"),
            (Flags::TIME, "TIME"),
            (Flags::MICROSECONDS, "MICROSECONDS"),
            (Flags::LONG_FILE, "LONG_FILE"),
            (Flags::SHORT_FILE, "SHORT_FILE"),
            (Flags::UTC, "UTC"),
            (Flags::MSG_PREFIX, "MSG_PREFIX"),
        ];

        if self.0 == 0 {
            return write!(f, "Flags(empty)");
        }

        write!(f, "Flags(")?;
        let mut first = true;
        for (flag, name) in NAMES {
            if self.contains(flag) {
                if !first {
                    write!(f, " | ")?;
                }
                write!(f, "{name}")?;
                first = false;
            }
        }
        write!(f, ")")
    }
}
