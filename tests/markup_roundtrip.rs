//! End-to-end properties of the markup engine through the editor session.

use gemcms::ArticleEditor;
use gemcms_core::markup::{self, CtaDraft, LinkField, ProductOptions};

fn seeded_editor() -> ArticleEditor {
    let mut editor = ArticleEditor::new();
    editor.set_buffer("Primeiro parágrafo.\nVeja /*Saiba mais*/ antes de comprar.\n".to_string());
    editor.update_link("Saiba mais", LinkField::Url("https://x.com".to_string()));

    let end = editor.buffer().len();
    editor.set_selection(end, end);
    editor.insert_cta(CtaDraft {
        text: "Compre já".to_string(),
        url: "https://loja.com/oferta".to_string(),
        color: "#122C4F".to_string(),
        font_size_px: 18,
    });
    editor.insert_products(
        &[42],
        ProductOptions {
            show_image: true,
            show_name: true,
            show_price: false,
            show_button: false,
        },
    );
    editor
}

#[test]
fn round_trip_reproduces_entity_values_and_token_structure() {
    let editor = seeded_editor();
    let html = editor.encode();
    assert!(!html.contains("(("), "no residual token syntax: {html}");
    assert!(!html.contains("/*"), "no residual marker syntax: {html}");

    let decoded = markup::decode(&html);

    assert_eq!(decoded.store.links()["Saiba mais"].url, "https://x.com");
    assert!(decoded.buffer.contains("/*Saiba mais*/"));

    assert_eq!(decoded.store.ctas().len(), 1);
    let cta = decoded.store.ctas().values().next().unwrap();
    assert_eq!(cta.text, "COMPRE JÁ");
    assert_eq!(cta.url, "https://loja.com/oferta");
    assert_eq!(cta.color, "#122C4F");
    assert_eq!(cta.font_size_px, 18);
    assert!(decoded.buffer.contains(&format!("(( CTA: {} ))", cta.id)));

    assert_eq!(decoded.store.products().len(), 1);
    let embed = decoded.store.products().values().next().unwrap();
    assert_eq!(embed.product_id, 42);
    assert!(embed.options.show_image);
    assert!(!embed.options.show_price);
    assert!(decoded
        .buffer
        .contains(&format!("(( PRODUCT: {} ))", embed.key)));
}

#[test]
fn regenerated_markup_is_stable_across_generations() {
    let first = seeded_editor().encode();

    let decoded = markup::decode(&first);
    let second = markup::encode(&decoded.buffer, &decoded.store);
    assert_eq!(first, second);

    let decoded_again = markup::decode(&second);
    let third = markup::encode(&decoded_again.buffer, &decoded_again.store);
    assert_eq!(second, third);
}

#[test]
fn encoding_the_same_state_twice_is_byte_identical() {
    let editor = seeded_editor();
    assert_eq!(editor.encode(), editor.encode());
}

#[test]
fn orphan_tokens_leave_no_residue() {
    let mut editor = ArticleEditor::new();
    editor.set_buffer(
        "texto (( CTA: naoexiste1 )) mais texto (( PRODUCT: naoexiste2 )) fim".to_string(),
    );
    let html = editor.encode();
    assert!(!html.contains("(("));
    assert!(!html.contains("))"));
    assert_eq!(html, "texto  mais texto  fim");
}

#[test]
fn shared_marker_text_updates_every_occurrence() {
    let mut editor = ArticleEditor::new();
    editor.set_buffer("/*Clique aqui*/ no topo e /*Clique aqui*/ no rodapé".to_string());
    assert_eq!(editor.markers().len(), 1);

    editor.update_link("Clique aqui", LinkField::Url("https://nova.com".to_string()));
    let html = editor.encode();
    assert_eq!(html.matches("https://nova.com").count(), 2);
}

#[test]
fn hidden_entities_return_when_their_token_is_retyped() {
    let mut editor = ArticleEditor::new();
    editor.set_buffer(String::new());
    editor.insert_cta(CtaDraft {
        url: "https://loja.com".to_string(),
        ..CtaDraft::default()
    });
    let with_token = editor.buffer().to_string();

    // Deleting the token hides the button but keeps its record.
    editor.set_buffer("só prosa".to_string());
    assert!(editor.active_ctas().is_empty());
    assert!(!editor.encode().contains("<div"));

    // Retyping the token brings the same configuration back.
    editor.set_buffer(with_token);
    assert_eq!(editor.active_ctas().len(), 1);
    assert!(editor.encode().contains("https://loja.com"));
}

#[test]
fn excerpt_scenario_strips_markup_then_truncates() {
    let mut editor = ArticleEditor::new();
    let filler = "x".repeat(170);
    editor.set_buffer(format!("(( PRODUCT: chave9 )) /*link*/ {filler}"));

    let excerpt = editor.excerpt();
    assert_eq!(excerpt.chars().count(), 120 + "...".len());
    assert!(excerpt.starts_with(" link "));
    assert!(!excerpt.contains("(("));
    assert!(!excerpt.contains("/*"));
}

#[test]
fn decode_scenario_from_the_public_site_markup() {
    let html = r#"<a href="https://x.com" target="_blank" style="color: #3b82f6; font-weight: 600; text-decoration: underline;">Saiba mais</a>"#;
    let decoded = markup::decode(html);
    assert_eq!(decoded.buffer, "/*Saiba mais*/");
    assert_eq!(decoded.store.links()["Saiba mais"].url, "https://x.com");
    assert_eq!(decoded.store.links()["Saiba mais"].color, "#3b82f6");
}
