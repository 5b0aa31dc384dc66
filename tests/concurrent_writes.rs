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

use std::io;
use std::io::Write;
use std::sync::Arc;
use std::sync::Mutex;
use std::thread;

use vlog::Flags;
use vlog::Logger;
use vlog::append::Buffer;

const THREADS: usize = 8;
const LINES: usize = 200;

// Hands the logger one byte per `write` call, so an entry spans many calls.
#[derive(Debug, Clone, Default)]
struct Trickle(Arc<Mutex<Vec<u8>>>);

impl Write for Trickle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match buf.first() {
            Some(byte) => {
                self.0.lock().unwrap().push(*byte);
                thread::yield_now();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_entries_do_not_interleave() {
    let sink = Trickle::default();
    let logger = Arc::new(Logger::new(sink.clone(), "", Flags::empty()));

    let handles = (0..THREADS)
        .map(|t| {
            let logger = logger.clone();
            thread::spawn(move || {
                for i in 0..LINES {
                    logger.println(&[&"thread", &t, &"line", &i, &"end"]);
                }
            })
        })
        .collect::<Vec<_>>();
    for handle in handles {
        handle.join().unwrap();
    }

    let bytes = sink.0.lock().unwrap().clone();
    let text = String::from_utf8(bytes).unwrap();
    let lines = text.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), THREADS * LINES);
    for line in lines {
        let words = line.split(' ').collect::<Vec<_>>();
        assert_eq!(words.len(), 5, "interleaved entry: {line:?}");
        assert_eq!(words[0], "thread");
        assert_eq!(words[2], "line");
        assert_eq!(words[4], "end");
    }
}

#[test]
fn test_threshold_changes_while_logging() {
    let buffer = Buffer::default();
    let logger = Arc::new(Logger::new(buffer.clone(), "", Flags::empty()));

    let writer = {
        let logger = logger.clone();
        thread::spawn(move || {
            for level in 0..1000 {
                logger.set_log_level(level % 4);
            }
            logger.set_log_level(3);
        })
    };
    let reader = {
        let logger = logger.clone();
        thread::spawn(move || {
            for _ in 0..1000 {
                logger.vprintln(1, &[&"maybe"]);
                assert!(logger.log_level() < 4);
            }
        })
    };
    writer.join().unwrap();
    reader.join().unwrap();

    assert_eq!(logger.log_level(), 3);
    assert!(buffer.contents().lines().all(|line| line == "maybe"));
}
