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

use std::env;
use std::process::Command;

use clap::Parser;
use vlog::Logger;
use vlog::flag::Verbosity;

const CHILD_ENV: &str = "VLOG_FLAG_ENV_CHILD";

#[derive(Debug, Parser)]
struct Cli {
    #[command(flatten)]
    verbosity: Verbosity,

    #[arg(long)]
    name: Option<String>,
}

#[test]
fn test_flag_defaults_to_zero() {
    if std::env::var_os(vlog::flag::LEVEL_ENV).is_some() {
        return;
    }
    let cli = Cli::try_parse_from(["app"]).unwrap();
    assert_eq!(cli.verbosity, Verbosity::default());
    assert_eq!(cli.verbosity.level, 0);
}

#[test]
fn test_flag_forms() {
    let cli = Cli::try_parse_from(["app", "-v", "3"]).unwrap();
    assert_eq!(cli.verbosity.level, 3);

    let cli = Cli::try_parse_from(["app", "-v5"]).unwrap();
    assert_eq!(cli.verbosity.level, 5);

    let cli = Cli::try_parse_from(["app", "--v=7", "--name", "x"]).unwrap();
    assert_eq!(cli.verbosity.level, 7);
    assert_eq!(cli.name.as_deref(), Some("x"));
}

#[test]
fn test_flag_rejects_negative_and_garbage() {
    assert!(Cli::try_parse_from(["app", "-v", "-1"]).is_err());
    assert!(Cli::try_parse_from(["app", "-v", "loud"]).is_err());
}

#[test]
fn test_apply_sets_threshold() {
    let logger = Logger::default();
    let cli = Cli::try_parse_from(["app", "--v", "2"]).unwrap();
    cli.verbosity.apply_to(&logger);
    assert_eq!(logger.log_level(), 2);
    assert!(logger.v(2));
    assert!(!logger.v(3));

    cli.verbosity.apply();
    assert_eq!(vlog::get_log_level(), 2);
}

// Re-runs this test in a child process with the level set in the environment, so the
// variable never leaks into the other tests of this binary.
#[test]
fn test_flag_falls_back_to_env() {
    if env::var_os(CHILD_ENV).is_some() {
        let cli = Cli::try_parse_from(["app"]).unwrap();
        assert_eq!(cli.verbosity.level, 4);

        let cli = Cli::try_parse_from(["app", "-v", "1"]).unwrap();
        assert_eq!(cli.verbosity.level, 1);

        let cli = Cli::try_parse_from(["app", "--v=0"]).unwrap();
        assert_eq!(cli.verbosity.level, 0);
        return;
    }

    let output = Command::new(env::current_exe().unwrap())
        .args(["--exact", "test_flag_falls_back_to_env", "--nocapture"])
        .env(CHILD_ENV, "1")
        .env(vlog::flag::LEVEL_ENV, "4")
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "child failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("1 passed"),
        "child did not run the test: {stdout}"
    );
}
