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

//! The page sequencer: builds one complete HTML document from a fixed
//! sequence of fragments. Themes replace the branding fragments through
//! the [`Theme`] trait; everything else is produced here. Rendering never
//! fails: every conditional fragment degrades to "omit".

use maud::DOCTYPE;
use maud::Markup;
use maud::PreEscaped;
use maud::html;

use crate::bag::PageBag;
use crate::theme::Theme;

/// Placeholder text for the code textarea.
const INPUT_TIPS: &str = "Enter LaTeX, Markdown and HTML code here. \
    Enclose inline math within $ and $, or \\( and \\). \
    Enclose displayed math within $$ and $$, or \\[ and \\]. \
    The following commands work outside math mode: \
    \\ref, \\eqref, \\begin, \\end and \\$. \
    Put spaces on both sides of less-than sign.";

/// Renders the input page: the composition form next to the output sheet.
pub fn input_page(
    theme: &dyn Theme,
    bag: &PageBag,
    errors: &[String],
    static_preview: bool,
) -> Markup {
    page(
        theme,
        bag,
        static_preview,
        html! {
            (input_form(theme, bag, errors))
            (output_sheet(bag, static_preview))
        },
    )
}

/// Renders an error page: one fatal message and a way back to the form.
pub fn error_page(theme: &dyn Theme, bag: &PageBag, error: &str) -> Markup {
    page(
        theme,
        bag,
        false,
        html! {
            div class="errors" {
                h2 { (PreEscaped(&bag.page_title)) }
                p { (PreEscaped(error)) }
                p { a href="/" { "Create new post" } }
            }
        },
    )
}

/// The document skeleton shared by every page. Fragment order is fixed;
/// themes change content, never position.
fn page(theme: &dyn Theme, bag: &PageBag, static_preview: bool, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                title { (PreEscaped(page_title(theme, bag))) }
                meta http-equiv="Content-Type" content="text/html; charset=utf-8";
                (theme.styles(static_preview))
                (mathjax_config())
                (scripts())
            }
            body {
                div id="particles-js" {}
                div id="headerPanel" {
                    (theme.header())
                }
                div class="clearfix" id="main" {
                    (noscript_notice(static_preview))
                    (content)
                }
                div id="footerPanel" {
                    (theme.footer())
                }
            }
        }
    }
}

/// Document title: the post title iff non-empty, then the site title as an
/// unconditional suffix. An empty post title leaves no stray separator.
fn page_title(theme: &dyn Theme, bag: &PageBag) -> String {
    if bag.page_title.is_empty() {
        theme.site_title().to_string()
    } else {
        format!("{} - {}", bag.page_title, theme.site_title())
    }
}

fn mathjax_config() -> Markup {
    html! {
        script type="text/x-mathjax-config" {
            (PreEscaped(MATHJAX_CONFIG))
        }
    }
}

const MATHJAX_CONFIG: &str = r#"MathJax.Hub.Config({
    tex2jax: {
        inlineMath: [['$', '$'], ['\\(', '\\)']],
        processEscapes: true
    },
    "HTML-CSS": {
        scale: 85,
        preferredFont: "STIX"
    },
    TeX: {
        equationNumbers: { autoNumber: "AMS" }
    },
    skipStartupTypeset: true
});"#;

fn scripts() -> Markup {
    html! {
        script src="thirdparty/MathJax/MathJax.js?config=TeX-AMS_HTML" {}
        script src="thirdparty/pagedown/Markdown.Converter.js" {}
        script src="scripts/mathbin.js" {}
        script { "window.onload = MathBin.init" }
    }
}

/// Warns that JavaScript is required. Omitted when static preview is on,
/// since that path works without scripts.
fn noscript_notice(static_preview: bool) -> Markup {
    if static_preview {
        return html! {};
    }
    html! {
        noscript {
            p id="noscript" { "JavaScript must be enabled to use this tool." }
        }
    }
}

fn input_form(theme: &dyn Theme, bag: &PageBag, errors: &[String]) -> Markup {
    html! {
        div class="input" {
            div id="form" {
                form class="box" method="post" action=(PreEscaped(&bag.action_url)) {
                    (errors_block(errors))

                    textarea id="code" name="code" required placeholder=(INPUT_TIPS) {
                        (PreEscaped(&bag.input_code))
                    }

                    input type="text" id="title" name="title"
                        placeholder="title of the post (optional)"
                        value=(PreEscaped(&bag.input_title));

                    input type="text" id="name" name="name"
                        placeholder="your name (optional)"
                        value=(PreEscaped(&bag.input_name));

                    div id="secretURL" {
                        input type="checkbox" id="secrecy" name="secrecy" value="yes"
                            checked[bag.secrecy];
                        label for="secrecy" {
                            "Private URL"
                            (theme.secrecy_tips())
                        }
                    }

                    input type="hidden" id="id" name="id" value=(PreEscaped(&bag.post_id));
                    input type="hidden" id="date" name="date" value=(PreEscaped(&bag.date));

                    noscript {
                        input type="submit" id="preview" name="preview" value=(preview_label());
                    }
                    input class="btn1" type="submit" id="submit" name="submit"
                        value=(submit_label(bag));
                }
            }
        }
    }
}

/// Inline list of submission errors, in the order the caller supplied
/// them. Singular heading for exactly one error.
fn errors_block(errors: &[String]) -> Markup {
    if errors.is_empty() {
        return html! {};
    }
    html! {
        div class="errors" {
            p {
                "Post failed due to the following "
                @if errors.len() > 1 { "errors:" } @else { "error:" }
            }
            ul {
                @for error in errors {
                    li { (PreEscaped(error)) }
                }
            }
        }
    }
}

fn preview_label() -> &'static str {
    "Preview"
}

fn submit_label(bag: &PageBag) -> &'static str {
    if bag.post_id.is_empty() {
        "Save"
    } else {
        "Update and get new URL"
    }
}

fn output_sheet(bag: &PageBag, static_preview: bool) -> Markup {
    html! {
        div class="output" {
            div id="sheet" {
                h1 id="outputTitle" class=(PreEscaped(&bag.output_title_class)) {
                    (PreEscaped(&bag.output_title))
                }
                h2 id="outputName" class=(PreEscaped(&bag.output_name_class)) {
                    (PreEscaped(&bag.output_name))
                }
                (static_preview_image(bag, static_preview))
                div id="outputCode" {
                    (PreEscaped(&bag.output_code))
                }
                div id="outputDate" { (PreEscaped(&bag.date)) }
            }
            (permanent_url(bag))
        }
    }
}

// The container is emitted whenever static preview is on, even with no
// image: it reserves a minimum height for the output sheet under
// noscript.
fn static_preview_image(bag: &PageBag, static_preview: bool) -> Markup {
    if !static_preview {
        return html! {};
    }
    html! {
        noscript {
            div id="outputImage" {
                @if !bag.preview_image_url.is_empty() {
                    img src=(PreEscaped(&bag.preview_image_url))
                        alt="Markdown, LaTeX and HTML rendered as image";
                }
            }
        }
    }
}

fn permanent_url(bag: &PageBag) -> Markup {
    if bag.post_url.is_empty() {
        return html! {};
    }
    html! {
        div id="permaurl" {
            label for="url" { "URL:" }
            input id="url" type="text" readonly value=(PreEscaped(&bag.post_url));
        }
    }
}
