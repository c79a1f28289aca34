//! Structured content markup engine.
//!
//! Bidirectional transform between the plain-text editable buffer and the
//! canonical HTML persisted for the public site. Three entity kinds
//! (inline link markers, CTA buttons, and product embeds) ride the buffer
//! as short tokens and expand into fixed HTML/shortcode grammars on
//! encode. The encoded HTML is the only durable artifact: decoding it
//! reseeds the registries, so the decoder recognizes exactly what the
//! encoder emits.

/// HTML → buffer + registries.
pub mod decode;
/// Buffer + registries → HTML.
pub mod encode;
/// Entity records and the closed grammar registry.
pub mod entity;
/// Cursor-preserving insertion.
pub mod insert;
/// Page preview and excerpt rendering.
pub mod preview;
/// Link-marker scanning and lifecycle.
pub mod scanner;
/// Entity registries and CRUD.
pub mod store;

pub use decode::{decode, Decoded};
pub use encode::encode;
pub use entity::{
    CtaButton, CtaField, EntityKind, LinkField, ProductEmbed, ProductOptions, TextLinkMarker,
};
pub use insert::{insert_at_cursor, Insertion};
pub use scanner::LinkMap;
pub use store::{CtaDraft, EntityStore, ProductBatch};
