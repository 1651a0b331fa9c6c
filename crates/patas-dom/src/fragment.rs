//! Fragment parsing
//!
//! Each fragment is a full markup document; only the inner content of its
//! mount region is spliced into the live page.

use scraper::{Html, Selector};

/// Stable selector for the content mount region.
pub const MOUNT_SELECTOR: &str = "main .wrapper";

/// Extract the inner markup of the fragment's mount region, if present.
pub fn extract_mount(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);
    let sel = Selector::parse(MOUNT_SELECTOR).ok()?;

    doc.select(&sel).next().map(|el| el.inner_html())
}

/// Text of the first heading in a chunk of markup, for the post-swap focus
/// move. Returns a whitespace-normalized string.
pub fn first_heading(html: &str) -> Option<String> {
    let doc = Html::parse_fragment(html);
    let sel = Selector::parse("h1, h2, h3, h4, h5, h6").ok()?;

    for el in doc.select(&sel) {
        let text = el.text().collect::<Vec<_>>().join(" ");
        let cleaned = normalize_whitespace(&text);
        if !cleaned.is_empty() {
            return Some(cleaned);
        }
    }

    None
}

fn normalize_whitespace(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut last_space = false;
    for ch in input.chars() {
        if ch.is_whitespace() {
            if !last_space {
                out.push(' ');
                last_space = true;
            }
        } else {
            out.push(ch);
            last_space = false;
        }
    }
    out.trim().to_string()
}
