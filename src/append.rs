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

//! Ready-made sinks for [`Logger::set_output`](crate::Logger::set_output).
//!
//! Any `io::Write + Send + 'static` value is a valid sink, so a `std::fs::File` or a
//! `std::io::Sink` can be used directly. The types here cover the common cases.

use std::io;
use std::io::Write;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

/// A sink that writes log entries to stderr. This is the default sink.
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct Stderr {}

impl Write for Stderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        io::stderr().lock().write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

/// A sink that writes log entries to stdout.
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct Stdout {}

impl Write for Stdout {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        io::stdout().lock().write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}

/// A sink that writes log entries that can be captured by a test harness (like `cargo test`),
/// and thus the outputs are suppressed unless `--nocapture` or `--show-output` is specified.
///
/// # Examples
///
/// ```
/// vlog::set_output(vlog::append::Testing::default());
/// ```
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct Testing {}

impl Write for Testing {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        eprint!("{}", String::from_utf8_lossy(buf));
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// An in-memory sink whose clones share the same buffer.
///
/// Hand one clone to the logger and keep another to read what was written.
///
/// # Examples
///
/// ```
/// use vlog::Flags;
/// use vlog::Logger;
/// use vlog::append::Buffer;
///
/// let buffer = Buffer::default();
/// let logger = Logger::new(buffer.clone(), "", Flags::empty());
/// logger.println(&[&"a", &"b"]);
/// assert_eq!(buffer.contents(), "a b\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Buffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl Buffer {
    /// Return everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        let bytes = self.bytes.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Return everything written so far and empty the buffer.
    pub fn take(&self) -> String {
        let mut bytes = self.bytes.lock().unwrap_or_else(PoisonError::into_inner);
        let taken = std::mem::take(&mut *bytes);
        String::from_utf8_lossy(&taken).into_owned()
    }

    /// Whether nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut bytes = self.bytes.lock().unwrap_or_else(PoisonError::into_inner);
        bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
