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

use maud::Markup;
use maud::PreEscaped;
use maud::html;

use crate::error::Fallible;
use crate::error::fail;

/// Marker appended by the lambda theme after the base stylesheets, where
/// themed stylesheet links would go.
pub const LAMBDA_STYLES_MARKER: &str = "<!-- lambda theme styles -->";

/// One visual identity for the site.
///
/// Each method produces one fragment of the page; the sequencer in
/// [`crate::view`] decides where a fragment lands, the theme decides what
/// it contains. A theme that only wants to change a few fragments should
/// hold a [`DefaultTheme`] and delegate the rest to it.
pub trait Theme {
    /// Name of the site, linked from the header.
    fn site_name(&self) -> &str;

    /// Descriptive site title, the unconditional suffix of every document
    /// title.
    fn site_title(&self) -> &str;

    /// Link tags for the stylesheets. The no-script stylesheet is loaded
    /// iff static preview is on.
    fn styles(&self, static_preview: bool) -> Markup;

    fn header(&self) -> Markup;

    fn footer(&self) -> Markup;

    /// Explanation of what the secrecy checkbox does, shown next to its
    /// label.
    fn secrecy_tips(&self) -> Markup;
}

/// The stock identity.
#[derive(Clone, Copy, Default)]
pub struct DefaultTheme;

impl Theme for DefaultTheme {
    fn site_name(&self) -> &str {
        "MathB"
    }

    fn site_title(&self) -> &str {
        "share maths"
    }

    fn styles(&self, static_preview: bool) -> Markup {
        html! {
            link rel="stylesheet" type="text/css" href="styles/base.css";
            @if static_preview {
                noscript {
                    link rel="stylesheet" type="text/css" href="styles/noscript.css";
                }
            }
        }
    }

    fn header(&self) -> Markup {
        html! {
            div id="header" {
                h1 {
                    a href="/" { (self.site_name()) }
                }
            }
            div id="navigation" {
                span {
                    "[ " a href="/" { "New post" } " ]"
                }
                span {
                    "[ " a href="https://github.com/mathbin/mathbin" { "Source" } " ]"
                }
            }
        }
    }

    fn footer(&self) -> Markup {
        html! {
            div id="footer" {
                div id="navigation" {
                    a href="/" { "New post" }
                    a href="https://github.com/mathbin/mathbin" { "Source code" }
                    a href="https://github.com/mathbin/mathbin/issues" { "Report issues" }
                }
                div id="copyright" {
                    p { "© 2025 The mathbin authors" }
                    p { a href="/5" { "License" } }
                }
            }
        }
    }

    fn secrecy_tips(&self) -> Markup {
        html! {
            " (An URL with a secret component)"
        }
    }
}

/// The dark "λ. share maths" identity.
///
/// Overrides the branding fragments and delegates everything else to
/// [`DefaultTheme`]. The footer injects the animated-background widget
/// before its own footer landmark.
#[derive(Clone, Copy, Default)]
pub struct LambdaTheme {
    base: DefaultTheme,
}

impl LambdaTheme {
    fn extra_scripts(&self) -> Markup {
        html! {
            script src="https://cldup.com/S6Ptkwu_qA.js" {}
            script {
                (PreEscaped(PARTICLES_CONFIG))
            }
        }
    }
}

impl Theme for LambdaTheme {
    fn site_name(&self) -> &str {
        "share maths"
    }

    fn site_title(&self) -> &str {
        self.base.site_title()
    }

    fn styles(&self, static_preview: bool) -> Markup {
        html! {
            (self.base.styles(static_preview))
            (PreEscaped(LAMBDA_STYLES_MARKER))
        }
    }

    fn header(&self) -> Markup {
        html! {
            div id="header" {
                h1 {
                    a href="/" { "λ." }
                }
                h2 { "share maths." }
            }
        }
    }

    fn footer(&self) -> Markup {
        html! {
            (self.extra_scripts())
            div id="footer" {
                div id="copyright" {
                    p {
                        "Dark theme and contributions by "
                        a target="_blank" href="https://github.com/jahan-addison/mathb" { "jahan" }
                        "."
                    }
                    p { a href="/5" { "License" } }
                }
            }
        }
    }

    fn secrecy_tips(&self) -> Markup {
        html! {
            " ("
            a target="_blank" href="/4" { "Learn more" }
            ")"
        }
    }
}

/// Maps a theme name from the CLI to a theme.
pub fn select(name: &str) -> Fallible<Box<dyn Theme + Send + Sync>> {
    match name {
        "default" => Ok(Box::new(DefaultTheme)),
        "lambda" => Ok(Box::new(LambdaTheme::default())),
        _ => fail(&format!("unknown theme: {name}")),
    }
}

const PARTICLES_CONFIG: &str = r##"particlesJS("particles-js", {
  "particles": {
    "number": { "value": 160, "density": { "enable": true, "value_area": 800 } },
    "color": { "value": "#ffffff" },
    "shape": { "type": "circle", "stroke": { "width": 0, "color": "#000000" } },
    "opacity": {
      "value": 1,
      "random": true,
      "anim": { "enable": true, "speed": 1, "opacity_min": 0, "sync": false }
    },
    "size": { "value": 3, "random": true },
    "line_linked": { "enable": false },
    "move": {
      "enable": true,
      "speed": 1,
      "direction": "none",
      "random": true,
      "out_mode": "out"
    }
  },
  "interactivity": {
    "detect_on": "canvas",
    "events": {
      "onhover": { "enable": true, "mode": "bubble" },
      "onclick": { "enable": true, "mode": "repulse" },
      "resize": true
    },
    "modes": {
      "bubble": { "distance": 250, "size": 0, "duration": 2, "opacity": 0, "speed": 3 },
      "repulse": { "distance": 400, "duration": 0.4 }
    }
  },
  "retina_detect": true
});"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lambda_styles_delegate_to_base() {
        let base = DefaultTheme.styles(false).into_string();
        let themed = LambdaTheme::default().styles(false).into_string();
        assert!(themed.starts_with(&base));
        assert!(themed.ends_with(LAMBDA_STYLES_MARKER));
    }

    #[test]
    fn test_lambda_styles_static_preview() {
        let themed = LambdaTheme::default().styles(true).into_string();
        assert!(themed.contains("styles/noscript.css"));
    }

    #[test]
    fn test_lambda_site_title_delegates() {
        assert_eq!(
            LambdaTheme::default().site_title(),
            DefaultTheme.site_title()
        );
    }

    #[test]
    fn test_lambda_footer_injects_widget() {
        let footer = LambdaTheme::default().footer().into_string();
        let widget = footer.find("particlesJS").unwrap();
        let landmark = footer.find("id=\"footer\"").unwrap();
        assert!(widget < landmark);
    }

    #[test]
    fn test_select() {
        assert!(select("default").is_ok());
        assert!(select("lambda").is_ok());
        assert!(select("derpherp").is_err());
    }
}
