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

use vlog::Flags;
use vlog::append::Buffer;

#[test]
fn test_log_crate_records_are_gated() {
    let buffer = Buffer::default();
    vlog::builder()
        .flags(Flags::SHORT_FILE)
        .output(buffer.clone())
        .apply();
    vlog::bridge::setup_log_crate();

    log::info!("info {}", 1);
    let line = line!() - 1;
    log::debug!("debug hidden");
    log::trace!("trace hidden");
    assert_eq!(buffer.take(), format!("bridge_log.rs:{line}: info 1\n"));
    assert!(!log::log_enabled!(log::Level::Debug));

    vlog::set_flags(Flags::empty());
    vlog::set_log_level(1);
    log::debug!("debug shown");
    log::trace!("trace hidden");
    assert_eq!(buffer.take(), "debug shown\n");

    vlog::set_log_level(2);
    log::trace!("trace shown");
    log::error!("error shown");
    vlog::flush().unwrap();
    assert_eq!(buffer.take(), "trace shown\nerror shown\n");

    assert!(vlog::bridge::try_setup_log_crate().is_err());
}
