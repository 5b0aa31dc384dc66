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

use std::sync::atomic::AtomicU32;
use std::sync::atomic::Ordering;

/// A verbosity threshold that gates V-style logging.
///
/// A message at level `v` is enabled iff `v <= threshold`. The default threshold is 0, so only
/// level 0 is enabled until the threshold is raised.
///
/// The threshold is meant to be set once while configuring the program and read on every gated
/// call afterwards. Reads and writes are atomic, so changing it while other threads log is safe,
/// though those threads may observe the old value for calls already in flight.
#[derive(Debug, Default)]
pub struct Threshold(AtomicU32);

impl Threshold {
    /// Create a threshold with the given initial level.
    pub const fn new(level: u32) -> Self {
        Self(AtomicU32::new(level))
    }

    /// Replace the threshold. Any value is accepted.
    pub fn set(&self, level: u32) {
        self.0.store(level, Ordering::Relaxed);
    }

    /// Return the current threshold.
    pub fn get(&self) -> u32 {
        self.0.load(Ordering::Relaxed)
    }

    /// Whether a message at `level` should be emitted.
    pub fn enabled(&self, level: u32) -> bool {
        level <= self.get()
    }
}
