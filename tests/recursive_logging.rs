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

// ensure a message whose formatting logs again neither deadlocks nor drops an entry
#[test]
fn test_meta_logging_in_format_works() {
    let buffer = Buffer::default();
    vlog::builder()
        .level(1)
        .flags(Flags::empty())
        .output(buffer.clone())
        .apply();

    struct Thing<'a>(&'a str);

    impl std::fmt::Display for Thing<'_> {
        fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            vlog::vprintf!(1, "formatting wrapping ({})", self.0);
            f.write_str(self.0)
        }
    }

    vlog::printf!("I'm logging {}!", Thing("aha"));
    vlog::vprintln(1, &[&"and", &Thing("again")]);

    assert_eq!(
        buffer.contents(),
        "formatting wrapping (aha)\nI'm logging aha!\nformatting wrapping (again)\nand again\n"
    );
}
