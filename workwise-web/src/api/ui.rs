//! Registration page and location lookup
//!
//! The page is static HTML compiled into the binary; the barangay options
//! and the fixed city are filled in at request time.

use axum::{response::Html, Json};
use serde::Serialize;
use workwise_common::location::{BARANGAYS, CITY};

const REGISTER_HTML: &str = include_str!("../ui/register.html");

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn barangay_options() -> String {
    BARANGAYS
        .iter()
        .map(|name| {
            let name = escape_html(name);
            format!(r#"<option value="{}">{}</option>"#, name, name)
        })
        .collect::<Vec<_>>()
        .join("\n            ")
}

pub fn render_register_page() -> String {
    REGISTER_HTML
        .replace("{{CITY}}", &escape_html(CITY))
        .replace("{{BARANGAY_OPTIONS}}", &barangay_options())
}

/// GET /register
pub async fn serve_register_page() -> Html<String> {
    Html(render_register_page())
}

#[derive(Debug, Serialize)]
pub struct LocationOptions {
    pub city: &'static str,
    pub barangays: Vec<&'static str>,
}

/// GET /api/barangays
pub async fn list_barangays() -> Json<LocationOptions> {
    Json(LocationOptions {
        city: CITY,
        barangays: BARANGAYS.to_vec(),
    })
}
