//! Document renderer — pure functions from (analysis, payload, issue date) to
//! self-contained HTML. Styling is inlined and no external resource is
//! referenced, so the rendering service needs no asset resolution.
//!
//! Every piece of text coming from the payload or the model is escaped here.

pub mod collaborator;
pub mod manager;
mod styles;

use chrono::{Datelike, NaiveDate};

pub use collaborator::render_collaborator_html;
pub use manager::render_manager_html;

/// Product name shown in document footers.
pub(crate) const PRODUCT_NAME: &str = "Claovia REX";

const FRENCH_MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Escapes the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Escaped text with each newline closing the current `<p>` and opening a new one.
/// The caller supplies the outer `<p>…</p>`.
pub(crate) fn paragraphs(text: &str) -> String {
    escape_html(text).replace('\n', "</p><p>")
}

/// Escaped text with newlines turned into `<br>`.
pub(crate) fn line_breaks(text: &str) -> String {
    escape_html(text).replace('\n', "<br>")
}

/// `<li>` items for a list of strings, escaped.
pub(crate) fn list_items(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect()
}

/// `19 octobre 2026`
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        FRENCH_MONTHS[date.month0() as usize],
        date.year()
    )
}

/// `19/10/2026`
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
