//! Canonical HTML → editable buffer plus seeded registries.

use regex::Captures;

use super::entity::{CtaButton, EntityKind, ProductEmbed, ProductOptions, TextLinkMarker};
use super::store::EntityStore;
use crate::constants::DEFAULT_CTA_FONT_SIZE;
use crate::ident;

/// Decoded article body: the buffer and the registries seeded from it.
#[derive(Debug, Default)]
pub struct Decoded {
    pub buffer: String,
    pub store: EntityStore,
}

/// Rebuild editor state from persisted HTML.
///
/// Pure function of its input: recognized fragments collapse into tokens
/// and seed their registries; everything else passes through unchanged,
/// so the author's literal text is never lost to a parse failure.
/// Generated ids are fresh per call and unique only within the session.
pub fn decode(html: &str) -> Decoded {
    let mut store = EntityStore::default();
    if html.is_empty() {
        return Decoded {
            buffer: String::new(),
            store,
        };
    }

    let buffer = decode_links(html, &mut store);
    let buffer = decode_ctas(&buffer, &mut store);
    let buffer = decode_products(&buffer, &mut store);

    tracing::debug!(
        links = store.links().len(),
        ctas = store.ctas().len(),
        products = store.products().len(),
        "decoded article body"
    );

    Decoded { buffer, store }
}

fn decode_links(input: &str, store: &mut EntityStore) -> String {
    EntityKind::TextLink
        .fragment_pattern()
        .replace_all(input, |caps: &Captures<'_>| {
            let label = &caps[3];
            store.seed_link(
                label,
                TextLinkMarker {
                    url: caps[1].to_string(),
                    color: caps[2].to_string(),
                },
            );
            EntityKind::TextLink.token(label)
        })
        .into_owned()
}

fn decode_ctas(input: &str, store: &mut EntityStore) -> String {
    EntityKind::Cta
        .fragment_pattern()
        .replace_all(input, |caps: &Captures<'_>| {
            let id = ident::generate_unique_id(|candidate| store.ctas().contains_key(candidate));
            store.seed_cta(CtaButton {
                id: id.clone(),
                text: caps[4].to_string(),
                url: caps[1].to_string(),
                color: caps[2].trim().to_string(),
                font_size_px: parse_px(&caps[3]).unwrap_or(DEFAULT_CTA_FONT_SIZE),
            });
            // Bare token, not the newline-wrapped insertion form: decode
            // must emit exactly what encode consumes, or every load/save
            // cycle would grow <br/> padding around block entities.
            EntityKind::Cta.token(&id)
        })
        .into_owned()
}

fn decode_products(input: &str, store: &mut EntityStore) -> String {
    EntityKind::Product
        .fragment_pattern()
        .replace_all(input, |caps: &Captures<'_>| {
            let key = ident::generate_unique_id(|candidate| store.products().contains_key(candidate));
            // The shortcode grammar guarantees these parses.
            let product_id = caps[1].parse().unwrap_or_default();
            store.seed_product(ProductEmbed {
                key: key.clone(),
                product_id,
                options: ProductOptions {
                    show_image: &caps[2] == "true",
                    show_name: &caps[3] == "true",
                    show_price: &caps[4] == "true",
                    show_button: &caps[5] == "true",
                },
            });
            EntityKind::Product.token(&key)
        })
        .into_owned()
}

/// Parse a CSS font-size, accepting only pixel values.
///
/// # Returns
/// The pixel size, or `None` for non-pixel units or unparsable numbers
/// (the caller falls back to the default size rather than erroring).
fn parse_px(value: &str) -> Option<u32> {
    let number = value.trim().strip_suffix("px")?.trim();
    let parsed: f64 = number.parse().ok()?;
    if parsed.is_finite() && parsed >= 0.0 {
        Some(parsed as u32)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_fragment_becomes_marker_and_seeds_the_map() {
        let html = r#"<a href="https://x.com" target="_blank" style="color: #3b82f6; font-weight: 600; text-decoration: underline;">Saiba mais</a>"#;
        let decoded = decode(html);

        assert_eq!(decoded.buffer, "/*Saiba mais*/");
        let link = &decoded.store.links()["Saiba mais"];
        assert_eq!(link.url, "https://x.com");
        assert_eq!(link.color, "#3b82f6");
    }

    #[test]
    fn cta_fragment_round_trips_color_and_size() {
        let html = r#"antes<div style="text-align:center;margin:35px 0;"><a href="https://loja.com" target="_blank" style="display:inline-block;background:#122C4F;color:#ffffff;padding:12px 40px;border-radius:8px;text-decoration:none;font-weight:600;font-size:16px;box-shadow:0 4px 10px rgba(0,0,0,0.2);font-family:'Poppins',sans-serif;transition:transform 0.2s;">COMPRAR AGORA</a></div>depois"#;
        let decoded = decode(html);

        assert_eq!(decoded.store.ctas().len(), 1);
        let cta = decoded.store.ctas().values().next().unwrap();
        assert_eq!(cta.text, "COMPRAR AGORA");
        assert_eq!(cta.url, "https://loja.com");
        assert_eq!(cta.color, "#122C4F");
        assert_eq!(cta.font_size_px, 16);
        assert_eq!(decoded.buffer, format!("antes(( CTA: {} ))depois", cta.id));
    }

    #[test]
    fn non_pixel_font_size_falls_back_to_default() {
        let html = r#"<div style="text-align:center;margin:35px 0;"><a href="https://loja.com" target="_blank" style="display:inline-block;background:#122C4F;color:#ffffff;padding:12px 40px;border-radius:8px;text-decoration:none;font-weight:600;font-size:1rem;box-shadow:0 4px 10px rgba(0,0,0,0.2);font-family:'Poppins',sans-serif;transition:transform 0.2s;">VER</a></div>"#;
        let decoded = decode(html);
        let cta = decoded.store.ctas().values().next().unwrap();
        assert_eq!(cta.font_size_px, DEFAULT_CTA_FONT_SIZE);
    }

    #[test]
    fn shortcode_becomes_product_token_with_fresh_key() {
        let html = "[[PRODUCT:id=42|img=true|name=true|price=false|btn=false]]";
        let decoded = decode(html);

        let embed = decoded.store.products().values().next().unwrap();
        assert_eq!(embed.product_id, 42);
        assert!(embed.options.show_image);
        assert!(!embed.options.show_price);
        assert_eq!(decoded.buffer, format!("(( PRODUCT: {} ))", embed.key));
        // The key is session-generated, not the product id.
        assert_ne!(embed.key, "42");
    }

    #[test]
    fn repeated_product_gets_independent_keys() {
        let html = "[[PRODUCT:id=7|img=true|name=true|price=true|btn=true]]\
                    [[PRODUCT:id=7|img=false|name=true|price=true|btn=true]]";
        let decoded = decode(html);
        assert_eq!(decoded.store.products().len(), 2);
    }

    #[test]
    fn unrecognized_markup_passes_through() {
        let html = "<p>um parágrafo <b>qualquer</b></p><br/>solto";
        let decoded = decode(html);
        assert_eq!(decoded.buffer, html);
        assert!(decoded.store.links().is_empty());
        assert!(decoded.store.ctas().is_empty());
    }

    #[test]
    fn empty_input_decodes_to_empty_state() {
        let decoded = decode("");
        assert!(decoded.buffer.is_empty());
        assert!(decoded.store.links().is_empty());
    }

    #[test]
    fn parse_px_accepts_pixels_only() {
        assert_eq!(parse_px("16px"), Some(16));
        assert_eq!(parse_px(" 18.5px "), Some(18));
        assert_eq!(parse_px("1rem"), None);
        assert_eq!(parse_px("em"), None);
        assert_eq!(parse_px("px"), None);
        assert_eq!(parse_px("abcpx"), None);
    }
}
