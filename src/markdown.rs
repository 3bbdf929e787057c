// Copyright 2025 The mathbin authors
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

use pulldown_cmark::Parser;
use pulldown_cmark::html::push_html;

/// Renders Markdown to HTML for the preview tooling.
///
/// Math delimiters pass through as plain text so the client-side
/// typesetter can pick them up. Production rendering of posts happens on
/// the client; this is only used to fill `output_code` in the preview
/// server and the `render` command.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut html_output = String::new();
    push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph() {
        let html = markdown_to_html("hello *world*");
        assert_eq!(html, "<p>hello <em>world</em></p>\n");
    }

    #[test]
    fn test_math_passes_through() {
        let html = markdown_to_html("the identity $e^{i\\pi} + 1 = 0$");
        assert!(html.contains("$e^{i\\pi} + 1 = 0$"));
    }

    #[test]
    fn test_heading() {
        let html = markdown_to_html("# Proof");
        assert_eq!(html, "<h1>Proof</h1>\n");
    }
}
