//! # TreeForge License Texts
//!
//! File: cli/src/synth/licenses.rs
//!
//! LICENSE file content for each `License` choice. MIT and BSD-3-Clause are
//! short enough to include in full; Apache-2.0 and GPL-3.0 get the standard
//! notice pointing at the full text. `none` produces an all-rights-reserved
//! notice. The copyright line uses `settings.year` and the copyright holder
//! (author, or the project name when no author is set).
//!
use super::rule::{self, FileContext};
use crate::core::settings::{License, ProjectSettings};

const MIT: &str = r#"MIT License

Copyright (c) {{ year }} {{ copyright_holder }}

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
"#;

const APACHE2: &str = r#"Copyright {{ year }} {{ copyright_holder }}

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
"#;

const GPL3: &str = r#"{{ name }}
Copyright (C) {{ year }} {{ copyright_holder }}

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.
"#;

const BSD3: &str = r#"BSD 3-Clause License

Copyright (c) {{ year }}, {{ copyright_holder }}

Redistribution and use in source and binary forms, with or without
modification, are permitted provided that the following conditions are met:

1. Redistributions of source code must retain the above copyright notice, this
   list of conditions and the following disclaimer.

2. Redistributions in binary form must reproduce the above copyright notice,
   this list of conditions and the following disclaimer in the documentation
   and/or other materials provided with the distribution.

3. Neither the name of the copyright holder nor the names of its
   contributors may be used to endorse or promote products derived from
   this software without specific prior written permission.

THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
"#;

const ALL_RIGHTS_RESERVED: &str = r#"Copyright (c) {{ year }} {{ copyright_holder }}. All rights reserved.

This software is proprietary. No part of it may be copied, modified or
distributed without prior written permission from the copyright holder.
"#;

fn template_for(license: License) -> &'static str {
    match license {
        License::Mit => MIT,
        License::Apache2 => APACHE2,
        License::Gpl3 => GPL3,
        License::Bsd3Clause => BSD3,
        License::None => ALL_RIGHTS_RESERVED,
    }
}

/// Generator for `LICENSE`, `LICENSE.md` and `LICENSE.txt`.
pub fn license_file(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(file, settings, template_for(settings.license))
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn render_for(license: License, author: &str) -> String {
        let settings = ProjectSettings {
            license,
            author: author.into(),
            year: 2031,
            ..ProjectSettings::named("demo")
        };
        license_file(&FileContext::new("LICENSE"), &settings)
    }

    #[test]
    fn test_mit_uses_author_and_year() {
        let text = render_for(License::Mit, "Jane Roe");
        assert!(text.starts_with("MIT License"));
        assert!(text.contains("Copyright (c) 2031 Jane Roe"));
    }

    #[test]
    fn test_holder_falls_back_to_project_name() {
        let text = render_for(License::Bsd3Clause, "");
        assert!(text.contains("Copyright (c) 2031, demo"));
    }

    #[test]
    fn test_notice_licenses() {
        assert!(render_for(License::Apache2, "A").contains("http://www.apache.org/licenses/LICENSE-2.0"));
        let gpl = render_for(License::Gpl3, "A");
        assert!(gpl.starts_with("demo\n"));
        assert!(gpl.contains("GNU General Public License"));
        assert!(render_for(License::None, "A").contains("All rights reserved."));
    }
}
