//! Read-only renderings: full page preview and list-card excerpt.

use std::sync::OnceLock;

use regex::Regex;

use super::encode::encode;
use super::entity::EntityKind;
use super::store::EntityStore;
use crate::constants::{EXCERPT_ELLIPSIS, EXCERPT_MAX_CHARS, EXCERPT_PLACEHOLDER};

/// Placeholder block standing in for product shortcodes in the preview;
/// full product rendering belongs to the public site.
const PRODUCT_PLACEHOLDER: &str = r#"<div style="background:#f1f5f9;padding:20px;text-align:center;border:1px dashed #ccc;margin:10px 0;">Produto inserido (Shortcode)</div>"#;

fn product_shortcode_any() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[\[PRODUCT:.*?\]\]").expect("product shortcode pattern"))
}

fn shortcode_any() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[\[.*?\]\]").expect("shortcode pattern"))
}

fn html_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>?").expect("html tag pattern"))
}

/// Full preview HTML: the encoder output with each product shortcode
/// swapped for a neutral placeholder block.
pub fn render_page(buffer: &str, store: &EntityStore) -> String {
    product_shortcode_any()
        .replace_all(&encode(buffer, store), PRODUCT_PLACEHOLDER)
        .into_owned()
}

/// Plain-text excerpt for list cards.
///
/// Strips shortcodes, entity tokens, marker delimiters (keeping the label
/// text), and HTML tags, then truncates to the fixed character limit
/// with an ellipsis. An empty buffer yields a placeholder instead of
/// failing.
pub fn excerpt(buffer: &str) -> String {
    if buffer.is_empty() {
        return EXCERPT_PLACEHOLDER.to_string();
    }

    let text = shortcode_any().replace_all(buffer, "");
    let text = EntityKind::Cta.token_pattern().replace_all(&text, "");
    let text = EntityKind::Product.token_pattern().replace_all(&text, "");
    let text = text.replace("/*", "").replace("*/", "");
    let text = html_tag().replace_all(&text, "");

    let visible: String = text.chars().take(EXCERPT_MAX_CHARS).collect();
    format!("{visible}{EXCERPT_ELLIPSIS}")
}
