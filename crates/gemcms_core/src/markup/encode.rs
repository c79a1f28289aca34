//! Buffer plus registries → canonical persisted HTML.

use super::entity::{CtaButton, EntityKind, ProductEmbed};
use super::scanner;
use super::store::EntityStore;
use crate::constants::{
    DEFAULT_CTA_COLOR, DEFAULT_CTA_FONT_SIZE, FALLBACK_LINK_COLOR, FALLBACK_LINK_URL,
};
use crate::text::ensure_protocol;

/// Render the persisted HTML for the current editor state.
///
/// Steps run in a strict order: link markers, CTA expansion, CTA orphan
/// stripping, product expansion, product orphan stripping, and newline
/// conversion last so multi-line fragments produced by earlier steps
/// survive intact. Tokens without a registry entry are stripped silently;
/// entities without a token are left out of the output but stay in the
/// registries.
pub fn encode(buffer: &str, store: &EntityStore) -> String {
    let html = expand_links(buffer, store);
    let html = expand_ctas(&html, store);
    let html = EntityKind::Cta
        .token_pattern()
        .replace_all(&html, "")
        .into_owned();
    let html = expand_products(&html, store);
    let html = EntityKind::Product
        .token_pattern()
        .replace_all(&html, "")
        .into_owned();
    html.replace('\n', "<br/>")
}

/// Expand every distinct marker currently in the buffer.
///
/// A marker missing from the map still becomes a link with fallback
/// url/color; inserting a link must never delete the wrapped text.
fn expand_links(buffer: &str, store: &EntityStore) -> String {
    let mut out = buffer.to_string();
    for label in scanner::scan(buffer) {
        let (url, color) = store
            .links()
            .get(&label)
            .map(|link| (link.url.as_str(), link.color.as_str()))
            .unwrap_or((FALLBACK_LINK_URL, FALLBACK_LINK_COLOR));
        let token = EntityKind::TextLink.token(&label);
        out = out.replace(&token, &link_fragment(url, color, &label));
    }
    out
}

fn expand_ctas(input: &str, store: &EntityStore) -> String {
    let mut out = input.to_string();
    for cta in store.ctas().values() {
        let token = EntityKind::Cta.token(&cta.id);
        if out.contains(&token) {
            // First occurrence only; duplicates fall to the orphan strip.
            out = out.replacen(&token, &cta_fragment(cta), 1);
        }
    }
    out
}

fn expand_products(input: &str, store: &EntityStore) -> String {
    let mut out = input.to_string();
    for embed in store.products().values() {
        let token = EntityKind::Product.token(&embed.key);
        if out.contains(&token) {
            out = out.replacen(&token, &product_shortcode(embed), 1);
        }
    }
    out
}

/// Canonical link fragment.
pub(crate) fn link_fragment(url: &str, color: &str, label: &str) -> String {
    let href = ensure_protocol(url);
    format!(
        r#"<a href="{href}" target="_blank" style="color: {color}; font-weight: 600; text-decoration: underline;">{label}</a>"#
    )
}

/// Canonical CTA fragment with derived visual parameters.
///
/// Padding scales with the font size to keep the button proportions;
/// the label is uppercased on encode.
pub(crate) fn cta_fragment(cta: &CtaButton) -> String {
    let size = if cta.font_size_px == 0 {
        DEFAULT_CTA_FONT_SIZE
    } else {
        cta.font_size_px
    };
    let background = if cta.color.is_empty() {
        DEFAULT_CTA_COLOR
    } else {
        cta.color.as_str()
    };
    let pad_y = (size as f64 * 0.75).round() as u32;
    let pad_x = (size as f64 * 2.5).round() as u32;
    let href = ensure_protocol(&cta.url);
    let label = cta.text.to_uppercase();
    format!(
        r#"<div style="text-align:center;margin:35px 0;"><a href="{href}" target="_blank" style="display:inline-block;background:{background};color:#ffffff;padding:{pad_y}px {pad_x}px;border-radius:8px;text-decoration:none;font-weight:600;font-size:{size}px;box-shadow:0 4px 10px rgba(0,0,0,0.2);font-family:'Poppins',sans-serif;transition:transform 0.2s;">{label}</a></div>"#
    )
}

/// Literal product shortcode; rendering is deferred to the public site.
pub(crate) fn product_shortcode(embed: &ProductEmbed) -> String {
    format!(
        "[[PRODUCT:id={}|img={}|name={}|price={}|btn={}]]",
        embed.product_id,
        embed.options.show_image,
        embed.options.show_name,
        embed.options.show_price,
        embed.options.show_button
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::entity::{ProductOptions, TextLinkMarker};
    use super::super::store::CtaDraft;

    #[test]
    fn product_token_encodes_to_the_exact_shortcode() {
        let mut store = EntityStore::default();
        store.seed_product(ProductEmbed {
            key: "k1".to_string(),
            product_id: 42,
            options: ProductOptions {
                show_image: true,
                show_name: true,
                show_price: false,
                show_button: false,
            },
        });

        assert_eq!(
            encode("(( PRODUCT: k1 ))", &store),
            "[[PRODUCT:id=42|img=true|name=true|price=false|btn=false]]"
        );
    }

    #[test]
    fn every_occurrence_of_a_marker_shares_one_config() {
        let mut store = EntityStore::default();
        store.seed_link(
            "Clique aqui",
            TextLinkMarker {
                url: "https://promo.com".to_string(),
                color: "#3b82f6".to_string(),
            },
        );

        let html = encode("/*Clique aqui*/ e também /*Clique aqui*/", &store);
        assert_eq!(html.matches("https://promo.com").count(), 2);
        assert!(!html.contains("/*"));
    }

    #[test]
    fn unconfigured_marker_falls_back_without_losing_text() {
        let store = EntityStore::default();
        let html = encode("veja /*isto*/", &store);
        assert!(html.contains(">isto</a>"));
        assert!(html.contains("color: red;"));
        assert!(!html.contains("/*"));
    }

    #[test]
    fn cta_fragment_derives_padding_and_uppercases() {
        let mut store = EntityStore::default();
        let id = store.insert_cta(CtaDraft {
            text: "Saiba mais".to_string(),
            url: "loja.com/promo".to_string(),
            color: "#122C4F".to_string(),
            font_size_px: 20,
        });

        let html = encode(&format!("(( CTA: {id} ))"), &store);
        assert!(html.contains("padding:15px 50px;"));
        assert!(html.contains("font-size:20px;"));
        assert!(html.contains(">SAIBA MAIS</a>"));
        assert!(html.contains(r#"href="https://loja.com/promo""#));
    }

    #[test]
    fn orphan_tokens_are_stripped_silently() {
        let store = EntityStore::default();
        let html = encode(
            "antes\n(( CTA: deadbeef1 ))\nmeio\n(( PRODUCT: cafebabe2 ))\ndepois",
            &store,
        );
        assert!(!html.contains("(("));
        assert!(!html.contains("))"));
        assert_eq!(html, "antes<br/><br/>meio<br/><br/>depois");
    }

    #[test]
    fn duplicate_cta_token_expands_once_and_strips_the_rest() {
        let mut store = EntityStore::default();
        let id = store.insert_cta(CtaDraft::default());
        let buffer = format!("(( CTA: {id} )) x (( CTA: {id} ))");
        let html = encode(&buffer, &store);
        assert_eq!(html.matches("<div style=").count(), 1);
        assert!(!html.contains("(( CTA:"));
    }

    #[test]
    fn newline_conversion_runs_last() {
        let mut store = EntityStore::default();
        let id = store.insert_cta(CtaDraft {
            url: "https://x.com".to_string(),
            ..CtaDraft::default()
        });
        let html = encode(&format!("linha um\n(( CTA: {id} ))\nlinha dois"), &store);
        // The fragment itself contains no <br/>, only the prose newlines do.
        assert!(html.starts_with("linha um<br/><div style="));
        assert!(html.ends_with("</div><br/>linha dois"));
    }

    #[test]
    fn entities_without_tokens_are_left_out_but_retained() {
        let mut store = EntityStore::default();
        store.insert_cta(CtaDraft::default());
        let html = encode("sem botão nenhum", &store);
        assert_eq!(html, "sem botão nenhum");
        assert_eq!(store.ctas().len(), 1);
    }

    #[test]
    fn encoding_twice_is_byte_identical() {
        let mut store = EntityStore::default();
        store.seed_link("aqui", TextLinkMarker::default());
        let id = store.insert_cta(CtaDraft {
            url: "x.com".to_string(),
            ..CtaDraft::default()
        });
        let buffer = format!("um /*aqui*/ dois\n(( CTA: {id} ))\ntrês");
        assert_eq!(encode(&buffer, &store), encode(&buffer, &store));
    }
}
