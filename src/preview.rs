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

//! A local preview server for working on the views. It keeps a single
//! draft submission in memory, re-renders it on every POST, and serves
//! the embedded stylesheets. It persists nothing: `post_url` stays empty,
//! so the permalink fragment never appears here.

use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use axum::Form;
use axum::Router;
use axum::extract::State;
use axum::http::HeaderName;
use axum::http::StatusCode;
use axum::http::header::CACHE_CONTROL;
use axum::http::header::CONTENT_TYPE;
use axum::response::Html;
use axum::routing::get;
use chrono::Local;
use html_escape::encode_double_quoted_attribute;
use html_escape::encode_text;
use serde::Deserialize;
use tokio::net::TcpListener;
use tokio::net::TcpStream;
use tokio::time::sleep;

use crate::bag::PageBag;
use crate::error::Fallible;
use crate::markdown::markdown_to_html;
use crate::theme::Theme;
use crate::view::error_page;
use crate::view::input_page;

const MAX_TITLE_LENGTH: usize = 120;
const MAX_NAME_LENGTH: usize = 120;

#[derive(Clone)]
struct PreviewState {
    theme: Arc<dyn Theme + Send + Sync>,
    static_preview: bool,
    mutable: Arc<Mutex<Draft>>,
}

/// The submission being edited in this preview session.
struct Draft {
    bag: PageBag,
    errors: Vec<String>,
}

pub async fn start_server(
    theme: Box<dyn Theme + Send + Sync>,
    port: u16,
    static_preview: bool,
    open_browser: bool,
) -> Fallible<()> {
    let state = PreviewState {
        theme: Arc::from(theme),
        static_preview,
        mutable: Arc::new(Mutex::new(Draft {
            bag: empty_draft_bag(),
            errors: Vec::new(),
        })),
    };
    let app = Router::new();
    let app = app.route("/", get(get_handler).post(post_handler));
    let app = app.route("/styles/base.css", get(base_stylesheet));
    let app = app.route("/styles/noscript.css", get(noscript_stylesheet));
    let app = app.fallback(not_found_handler);
    let app = app.with_state(state);
    let bind = format!("127.0.0.1:{port}");

    if open_browser {
        // Open the browser once the port accepts connections.
        let url = format!("http://{bind}/");
        let probe = bind.clone();
        tokio::spawn(async move {
            loop {
                if let Ok(stream) = TcpStream::connect(&probe).await {
                    drop(stream);
                    break;
                }
                sleep(Duration::from_millis(1)).await;
            }
            let _ = open::that(url);
        });
    }

    log::debug!("Starting preview server on {bind}");
    let listener = TcpListener::bind(&bind).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn empty_draft_bag() -> PageBag {
    PageBag {
        action_url: "/".to_string(),
        ..PageBag::default()
    }
}

async fn get_handler(State(state): State<PreviewState>) -> (StatusCode, Html<String>) {
    let draft = state.mutable.lock().unwrap();
    let page = input_page(
        state.theme.as_ref(),
        &draft.bag,
        &draft.errors,
        state.static_preview,
    );
    (StatusCode::OK, Html(page.into_string()))
}

#[derive(Deserialize)]
struct SubmissionForm {
    #[serde(default)]
    code: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    secrecy: Option<String>,
    #[serde(default)]
    id: String,
    #[serde(default)]
    date: String,
}

async fn post_handler(
    State(state): State<PreviewState>,
    Form(form): Form<SubmissionForm>,
) -> (StatusCode, Html<String>) {
    let mut errors = Vec::new();
    if form.code.trim().is_empty() {
        errors.push("The code field is empty.".to_string());
    }
    if form.title.chars().count() > MAX_TITLE_LENGTH {
        errors.push("The title is too long.".to_string());
    }
    if form.name.chars().count() > MAX_NAME_LENGTH {
        errors.push("The name is too long.".to_string());
    }
    log::debug!("Submission with {} error(s)", errors.len());

    let date = if form.date.is_empty() {
        Local::now().format("%d %b %Y, %H:%M").to_string()
    } else {
        form.date.clone()
    };
    let output_code = if errors.is_empty() {
        markdown_to_html(&form.code)
    } else {
        String::new()
    };

    // The bag contract wants pre-escaped values, so user input is escaped
    // here, at the controller boundary. The markdown output is trusted
    // markup and goes in as-is.
    let bag = PageBag {
        page_title: encode_text(&form.title).into_owned(),
        output_title: encode_text(&form.title).into_owned(),
        output_title_class: hidden_if_empty(&form.title),
        output_name: encode_text(&form.name).into_owned(),
        output_name_class: hidden_if_empty(&form.name),
        input_code: encode_text(&form.code).into_owned(),
        input_title: encode_double_quoted_attribute(&form.title).into_owned(),
        input_name: encode_double_quoted_attribute(&form.name).into_owned(),
        secrecy: form.secrecy.as_deref() == Some("yes"),
        post_id: encode_double_quoted_attribute(&form.id).into_owned(),
        date: encode_text(&date).into_owned(),
        output_code,
        ..empty_draft_bag()
    };
    {
        let mut draft = state.mutable.lock().unwrap();
        draft.bag = bag;
        draft.errors = errors;
    }
    get_handler(State(state)).await
}

fn hidden_if_empty(value: &str) -> String {
    if value.is_empty() {
        "hidden".to_string()
    } else {
        String::new()
    }
}

async fn base_stylesheet() -> (StatusCode, [(HeaderName, &'static str); 2], &'static [u8]) {
    css(include_bytes!("assets/base.css"))
}

async fn noscript_stylesheet() -> (StatusCode, [(HeaderName, &'static str); 2], &'static [u8]) {
    css(include_bytes!("assets/noscript.css"))
}

fn css(bytes: &'static [u8]) -> (StatusCode, [(HeaderName, &'static str); 2], &'static [u8]) {
    (
        StatusCode::OK,
        [
            (CONTENT_TYPE, "text/css"),
            (CACHE_CONTROL, "public, max-age=604800, immutable"),
        ],
        bytes,
    )
}

async fn not_found_handler(State(state): State<PreviewState>) -> (StatusCode, Html<String>) {
    let bag = PageBag {
        page_title: "Page not found".to_string(),
        ..PageBag::default()
    };
    let page = error_page(
        state.theme.as_ref(),
        &bag,
        "The page you requested does not exist.",
    );
    (StatusCode::NOT_FOUND, Html(page.into_string()))
}
