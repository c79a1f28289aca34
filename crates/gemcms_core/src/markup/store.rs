//! Registries for managed entities and their CRUD operations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::entity::{
    CtaButton, CtaField, EntityKind, LinkField, ProductEmbed, ProductOptions, TextLinkMarker,
};
use super::scanner::LinkMap;
use crate::constants::{DEFAULT_CTA_COLOR, DEFAULT_CTA_FONT_SIZE, DEFAULT_CTA_LABEL};
use crate::ident;

/// New-CTA form data; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct CtaDraft {
    pub text: String,
    pub url: String,
    pub color: String,
    pub font_size_px: u32,
}

impl Default for CtaDraft {
    fn default() -> Self {
        Self {
            text: DEFAULT_CTA_LABEL.to_string(),
            url: String::new(),
            color: DEFAULT_CTA_COLOR.to_string(),
            font_size_px: DEFAULT_CTA_FONT_SIZE,
        }
    }
}

/// Result of a batch product insertion.
#[derive(Debug, Clone)]
pub struct ProductBatch {
    pub keys: Vec<String>,
    /// Combined insertion string, one token per line.
    pub insertion: String,
}

/// The three entity registries behind one editing session.
///
/// Registries are in-memory only; the encoded HTML is the single durable
/// artifact and the registries are reseeded by decoding it. Operations on
/// unknown ids or keys are no-ops, tolerating stale UI references.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityStore {
    links: LinkMap,
    ctas: BTreeMap<String, CtaButton>,
    products: BTreeMap<String, ProductEmbed>,
}

impl EntityStore {
    pub fn links(&self) -> &LinkMap {
        &self.links
    }

    pub fn links_mut(&mut self) -> &mut LinkMap {
        &mut self.links
    }

    pub fn ctas(&self) -> &BTreeMap<String, CtaButton> {
        &self.ctas
    }

    pub fn products(&self) -> &BTreeMap<String, ProductEmbed> {
        &self.products
    }

    /// Set one field of a marker's link configuration.
    ///
    /// Creates the entry when absent; the scanner may not have reconciled
    /// yet when a field editor fires.
    pub fn update_link(&mut self, label: &str, change: LinkField) {
        let entry = self.links.entry(label.to_string()).or_default();
        match change {
            LinkField::Url(url) => entry.url = url,
            LinkField::Color(color) => entry.color = color,
        }
    }

    /// Register a CTA button.
    ///
    /// # Returns
    /// The generated id, also the key of its buffer token.
    pub fn insert_cta(&mut self, draft: CtaDraft) -> String {
        let id = ident::generate_unique_id(|candidate| self.ctas.contains_key(candidate));
        self.ctas.insert(
            id.clone(),
            CtaButton {
                id: id.clone(),
                text: draft.text,
                url: draft.url,
                color: draft.color,
                font_size_px: draft.font_size_px,
            },
        );
        id
    }

    /// Set one field of a CTA. Unknown ids are a no-op.
    pub fn update_cta(&mut self, id: &str, change: CtaField) {
        let Some(cta) = self.ctas.get_mut(id) else {
            return;
        };
        match change {
            CtaField::Text(text) => cta.text = text,
            CtaField::Url(url) => cta.url = url,
            CtaField::Color(color) => cta.color = color,
            CtaField::FontSizePx(size) => cta.font_size_px = size,
        }
    }

    /// Drop a CTA record.
    ///
    /// # Returns
    /// The buffer token of the removed CTA, for the caller to strip, or
    /// `None` when the id was unknown.
    pub fn remove_cta(&mut self, id: &str) -> Option<String> {
        self.ctas
            .remove(id)
            .map(|cta| EntityKind::Cta.token(&cta.id))
    }

    /// Register one embed per selected product, sharing one options value.
    ///
    /// # Returns
    /// The generated keys and the combined insertion string, one token
    /// per line, ready for a single cursor insertion.
    pub fn insert_products(&mut self, product_ids: &[u64], options: ProductOptions) -> ProductBatch {
        let mut keys = Vec::with_capacity(product_ids.len());
        let mut insertion = String::new();
        for &product_id in product_ids {
            let key = ident::generate_unique_id(|candidate| self.products.contains_key(candidate));
            insertion.push_str(&EntityKind::Product.insertion(&key));
            self.products.insert(
                key.clone(),
                ProductEmbed {
                    key: key.clone(),
                    product_id,
                    options,
                },
            );
            keys.push(key);
        }
        ProductBatch { keys, insertion }
    }

    /// Drop a product embed.
    ///
    /// # Returns
    /// The buffer token of the removed embed, or `None` when unknown.
    pub fn remove_product(&mut self, key: &str) -> Option<String> {
        self.products
            .remove(key)
            .map(|embed| EntityKind::Product.token(&embed.key))
    }

    pub(crate) fn seed_link(&mut self, label: &str, marker: TextLinkMarker) {
        self.links.insert(label.to_string(), marker);
    }

    pub(crate) fn seed_cta(&mut self, cta: CtaButton) {
        self.ctas.insert(cta.id.clone(), cta);
    }

    pub(crate) fn seed_product(&mut self, embed: ProductEmbed) {
        self.products.insert(embed.key.clone(), embed);
    }
}
