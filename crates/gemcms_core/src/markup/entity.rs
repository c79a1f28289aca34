//! Managed entity records and the closed grammar registry.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LINK_COLOR;

/// Inline link configuration, keyed by the marker's visible text.
///
/// Two occurrences of identical marker text share one entry. This is the
/// documented collision rule of the editor, not an accident: retyping a
/// previously deleted marker restores its configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextLinkMarker {
    pub url: String,
    pub color: String,
}

impl Default for TextLinkMarker {
    fn default() -> Self {
        Self {
            url: String::new(),
            color: DEFAULT_LINK_COLOR.to_string(),
        }
    }
}

/// Call-to-action button anchored in the buffer by a generated id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaButton {
    pub id: String,
    pub text: String,
    pub url: String,
    /// Background color (hex).
    pub color: String,
    pub font_size_px: u32,
}

/// Single-field CTA mutation, mirroring the per-field form editors.
#[derive(Debug, Clone)]
pub enum CtaField {
    Text(String),
    Url(String),
    Color(String),
    FontSizePx(u32),
}

/// Single-field link mutation.
#[derive(Debug, Clone)]
pub enum LinkField {
    Url(String),
    Color(String),
}

/// Display toggles shared by a batch of product embeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductOptions {
    pub show_image: bool,
    pub show_name: bool,
    pub show_price: bool,
    pub show_button: bool,
}

impl Default for ProductOptions {
    fn default() -> Self {
        Self {
            show_image: true,
            show_name: true,
            show_price: true,
            show_button: true,
        }
    }
}

/// Product embed anchored in the buffer by a generated key.
///
/// The key is independent of `product_id`: one product may be embedded
/// several times with different options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductEmbed {
    pub key: String,
    pub product_id: u64,
    pub options: ProductOptions,
}

/// Closed set of entity kinds understood by the markup engine.
///
/// Each kind carries its full grammar: the buffer token form, the pattern
/// matching any token of the kind (resolvable or orphaned), and the
/// pattern matching its persisted fragment. Decode and orphan stripping
/// iterate [`EntityKind::ALL`], so adding a kind means extending this enum
/// rather than touching the engine loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    TextLink,
    Cta,
    Product,
}

impl EntityKind {
    /// Kinds in the order the decode and strip passes run.
    pub const ALL: [EntityKind; 3] = [Self::TextLink, Self::Cta, Self::Product];

    /// Buffer token for a keyed entity of this kind.
    ///
    /// Link markers are keyed by their visible text; CTA and product
    /// tokens carry a generated id. This is the single source of token
    /// strings: insertion, removal, and stripping all derive from here.
    pub fn token(self, key: &str) -> String {
        match self {
            Self::TextLink => format!("/*{key}*/"),
            Self::Cta => format!("(( CTA: {key} ))"),
            Self::Product => format!("(( PRODUCT: {key} ))"),
        }
    }

    /// Insertion form of the token. Block-level tokens sit on their own
    /// line; link markers flow inline with the prose.
    pub fn insertion(self, key: &str) -> String {
        match self {
            Self::TextLink => self.token(key),
            Self::Cta | Self::Product => format!("\n{}\n", self.token(key)),
        }
    }

    /// Pattern matching any token of this kind, resolvable or not.
    ///
    /// For link markers the first capture group is the visible label.
    pub fn token_pattern(self) -> &'static Regex {
        match self {
            Self::TextLink => {
                static RE: OnceLock<Regex> = OnceLock::new();
                RE.get_or_init(|| Regex::new(r"/\*(.*?)\*/").expect("marker token pattern"))
            }
            Self::Cta => {
                static RE: OnceLock<Regex> = OnceLock::new();
                RE.get_or_init(|| {
                    Regex::new(r"\(\( CTA: [0-9a-zA-Z]+ \)\)").expect("cta token pattern")
                })
            }
            Self::Product => {
                static RE: OnceLock<Regex> = OnceLock::new();
                RE.get_or_init(|| {
                    Regex::new(r"\(\( PRODUCT: [0-9a-zA-Z]+ \)\)").expect("product token pattern")
                })
            }
        }
    }

    /// Pattern matching the persisted fragment grammar of this kind.
    ///
    /// Capture groups, per kind:
    /// - `TextLink`: url, color, label
    /// - `Cta`: url, background color, font-size value, label
    /// - `Product`: product id, img, name, price, btn flags
    pub fn fragment_pattern(self) -> &'static Regex {
        match self {
            Self::TextLink => {
                static RE: OnceLock<Regex> = OnceLock::new();
                RE.get_or_init(|| {
                    Regex::new(
                        r#"<a href="([^"]+)" target="_blank" style="color: ([^;]+);[^>]*">([^<]+)</a>"#,
                    )
                    .expect("link fragment pattern")
                })
            }
            Self::Cta => {
                static RE: OnceLock<Regex> = OnceLock::new();
                RE.get_or_init(|| {
                    Regex::new(
                        r#"<div style="text-align:center;margin:35px 0;"><a href="([^"]+)" target="_blank" style="display:inline-block;background:([^;]+);[^>]*font-size:([^;]+);[^>]*">([^<]+)</a></div>"#,
                    )
                    .expect("cta fragment pattern")
                })
            }
            Self::Product => {
                static RE: OnceLock<Regex> = OnceLock::new();
                RE.get_or_init(|| {
                    Regex::new(
                        r"\[\[PRODUCT:id=(\d+)\|img=(true|false)\|name=(true|false)\|price=(true|false)\|btn=(true|false)\]\]",
                    )
                    .expect("product shortcode pattern")
                })
            }
        }
    }
}
