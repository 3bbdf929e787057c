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

use clap::Parser;
use clap::ValueEnum;

use crate::bag::PageBag;
use crate::error::Fallible;
use crate::markdown::markdown_to_html;
use crate::preview::start_server;
use crate::theme;
use crate::view;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Serve a live preview of the site views.
    Preview {
        /// Port to bind.
        #[arg(long, default_value_t = 8000)]
        port: u16,
        /// Theme to render with.
        #[arg(long, default_value = "lambda")]
        theme: String,
        /// Render the no-script static-preview variant.
        #[arg(long)]
        static_preview: bool,
    },
    /// Render one page to standard output.
    Render {
        /// Which page to render.
        page: Page,
        /// Theme to render with.
        #[arg(long, default_value = "lambda")]
        theme: String,
        /// Render the no-script static-preview variant.
        #[arg(long)]
        static_preview: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum Page {
    Input,
    Error,
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Preview {
            port,
            theme,
            static_preview,
        } => {
            let theme = theme::select(&theme)?;
            println!("Previewing on http://127.0.0.1:{port}/.");
            start_server(theme, port, static_preview, true).await
        }
        Command::Render {
            page,
            theme,
            static_preview,
        } => {
            let theme = theme::select(&theme)?;
            let markup = match page {
                Page::Input => {
                    view::input_page(theme.as_ref(), &sample_bag(), &[], static_preview)
                }
                Page::Error => {
                    let bag = PageBag {
                        page_title: "Post not found".to_string(),
                        ..PageBag::default()
                    };
                    view::error_page(theme.as_ref(), &bag, "This post does not exist.")
                }
            };
            println!("{}", markup.into_string());
            Ok(())
        }
    }
}

/// A representative filled-in bag for the `render` command.
fn sample_bag() -> PageBag {
    let code = "The roots of $ax^2 + bx + c = 0$ are\n\n\
        $$x = \\frac{-b \\pm \\sqrt{b^2 - 4ac}}{2a}$$";
    PageBag {
        page_title: "Quadratic formula".to_string(),
        output_title: "Quadratic formula".to_string(),
        output_name: "Euclid".to_string(),
        input_code: code.to_string(),
        input_title: "Quadratic formula".to_string(),
        input_name: "Euclid".to_string(),
        post_id: "42".to_string(),
        date: "22 Aug 2025, 10:15".to_string(),
        output_code: markdown_to_html(code),
        post_url: "http://127.0.0.1:8000/42".to_string(),
        action_url: "/".to_string(),
        ..PageBag::default()
    }
}
