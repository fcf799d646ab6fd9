//! Small HTML building blocks.
//!
//! Helpers taking `inner_html` expect markup that is already safe; helpers
//! taking `text` escape it themselves.

use url::form_urlencoded;

/// Replace the characters that are significant in HTML text and attribute
/// values with their entities.
pub fn escape(text: &str) -> String {
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

pub fn div(inner_html: &str) -> String {
    format!("<div>{inner_html}</div>")
}

pub fn div_class(inner_html: &str, class: &str) -> String {
    format!("<div class=\"{class}\">{inner_html}</div>")
}

pub fn anchor(url: &str, text: &str) -> String {
    format!("<a href=\"{}\">{}</a>", escape(url), escape(text))
}

/// Link that re-runs `query` through the answers page.
pub fn search_link(text: &str, query: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
    format!(
        "<a class=\"searchLink\" href=\"?query={}\">{}</a>",
        escape(&encoded),
        escape(text)
    )
}
