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

//! Run with `cargo run --example verbose -- -v 2`.

use clap::Parser;
use vlog::Flags;

#[derive(Debug, Parser)]
struct Cli {
    #[command(flatten)]
    verbosity: vlog::flag::Verbosity,

    /// Number of items to process
    #[arg(long, default_value_t = 3)]
    items: usize,
}

fn main() {
    let cli = Cli::parse();
    vlog::builder()
        .level(cli.verbosity.level)
        .prefix("verbose: ")
        .flags(Flags::STD | Flags::SHORT_FILE)
        .apply();
    vlog::bridge::setup_log_crate();

    vlog::println(&[&"Prepare to repel boarders"]);

    for item in 0..cli.items {
        vlog::vprintf!(1, "processing item {item}");
        log::trace!("item {item} done");
    }

    if vlog::v(2) {
        vlog::print(&[&"Starting transaction..."]);
    }
    vlog::vprintln(2, &[&"Processed", &cli.items, &"elements"]);

    if cli.items == 0 {
        vlog::fatalf!("nothing to process");
    }
}
