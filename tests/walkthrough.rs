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

//! Walkthrough of the preview server: load the form, submit an invalid
//! and then a valid post, and hit an unknown path.

use std::time::Duration;

use mathbin::preview::start_server;
use mathbin::theme;

async fn spawn_server() -> String {
    let port = portpicker::pick_unused_port().unwrap();
    let theme = theme::select("lambda").unwrap();
    tokio::spawn(async move {
        start_server(theme, port, false, false).await.unwrap();
    });
    let url = format!("http://127.0.0.1:{port}/");
    // Wait for the server to come up.
    let client = reqwest::Client::new();
    for _ in 0..200 {
        if client.get(&url).send().await.is_ok() {
            return url;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("server did not start");
}

#[tokio::test]
async fn test_walkthrough() {
    let url = spawn_server().await;
    let client = reqwest::Client::new();

    // The empty draft renders the form with no errors.
    let body = client
        .get(&url)
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("<textarea"));
    assert!(body.contains("name=\"code\""));
    assert!(body.contains("value=\"Save\""));
    assert!(!body.contains("Post failed"));

    // An empty submission shows an inline error.
    let body = client
        .post(&url)
        .form(&[("code", ""), ("title", ""), ("name", ""), ("id", ""), ("date", "")])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("Post failed due to the following error:"));
    assert!(body.contains("The code field is empty."));

    // A valid submission renders the output sheet, with the input
    // escaped back into the form.
    let body = client
        .post(&url)
        .form(&[
            ("code", "hello *world* & others"),
            ("title", "Greeting"),
            ("name", "Tester"),
            ("id", ""),
            ("date", ""),
        ])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(!body.contains("Post failed"));
    assert!(body.contains("<em>world</em>"));
    assert!(body.contains("hello *world* &amp; others"));
    assert!(body.contains("<title>Greeting - share maths</title>"));

    // Unknown paths get the error page.
    let response = client
        .get(format!("{url}derpherp"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
    let body = response.text().await.unwrap();
    assert!(body.contains("Page not found"));
    assert!(body.contains("Create new post"));
}

#[tokio::test]
async fn test_stylesheets_served() {
    let url = spawn_server().await;
    let client = reqwest::Client::new();
    for path in ["styles/base.css", "styles/noscript.css"] {
        let response = client.get(format!("{url}{path}")).send().await.unwrap();
        assert_eq!(response.status(), 200, "missing {path}");
        assert_eq!(
            response.headers()["content-type"].to_str().unwrap(),
            "text/css"
        );
    }
}
