//! Editor session tying the buffer, selection, and registries together.

use crate::constants::LINK_WRAP_FALLBACK_TEXT;
use crate::error::DraftError;
use crate::markup::{
    self, scanner, CtaButton, CtaDraft, CtaField, Decoded, EntityKind, EntityStore, LinkField,
    ProductEmbed, ProductOptions,
};
use crate::models::{Article, ArticleDraft, ArticlePayload, ArticleStatus, Product};
use crate::text::normalize_redirect;

/// Staged product selection for batch insertion.
///
/// Search results are toggled in and out; confirming the insertion drains
/// the staging list into one token batch.
#[derive(Debug, Default)]
pub struct ProductPicker {
    selected: Vec<Product>,
}

impl ProductPicker {
    /// Toggle a product in or out of the staged selection.
    pub fn toggle(&mut self, product: Product) {
        if let Some(at) = self.selected.iter().position(|p| p.id == product.id) {
            self.selected.remove(at);
        } else {
            self.selected.push(product);
        }
    }

    pub fn is_selected(&self, product_id: u64) -> bool {
        self.selected.iter().any(|p| p.id == product_id)
    }

    pub fn selected(&self) -> &[Product] {
        &self.selected
    }

    /// Drain the staged selection into the id list for insertion.
    pub fn take_ids(&mut self) -> Vec<u64> {
        self.selected.drain(..).map(|p| p.id).collect()
    }
}

/// Byte range of the author's selection; collapsed when `start == end`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

/// Single-article editing session.
///
/// All mutations run synchronously to completion inside one UI event; the
/// scanner reconciles the link registry on every buffer change, and
/// removing an entity strips its token from the buffer. Nothing here
/// performs I/O; persistence goes through the workflow layer.
#[derive(Debug, Default)]
pub struct ArticleEditor {
    draft: ArticleDraft,
    store: EntityStore,
    markers: Vec<String>,
    selection: Selection,
}

impl ArticleEditor {
    /// Start a session for a brand-new article.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an existing article, decoding its HTML into editor state.
    pub fn open(article: &Article) -> Self {
        let Decoded { buffer, store } = markup::decode(&article.body_html);
        let draft = ArticleDraft {
            title: article.title.clone(),
            buffer,
            cover_image_urls: article.cover_image_urls.clone(),
            category_id: article.category_id,
            redirect_url: article.redirect_url.clone(),
            status: article.status,
        };
        let mut editor = Self {
            draft,
            store,
            markers: Vec::new(),
            selection: Selection::default(),
        };
        editor.refresh_markers();
        editor
    }

    pub fn draft(&self) -> &ArticleDraft {
        &self.draft
    }

    pub fn buffer(&self) -> &str {
        &self.draft.buffer
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Distinct link markers currently in the buffer, in order.
    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Buffer length in characters, for the editor's counter.
    pub fn char_count(&self) -> usize {
        self.draft.buffer.chars().count()
    }

    /// Replace the whole buffer (the author typed); rescans markers.
    pub fn set_buffer(&mut self, text: String) {
        self.draft.buffer = text;
        self.refresh_markers();
    }

    pub fn set_selection(&mut self, start: usize, end: usize) {
        self.selection = Selection { start, end };
    }

    pub fn set_title(&mut self, title: String) {
        self.draft.title = title;
    }

    pub fn set_category_id(&mut self, category_id: Option<u64>) {
        self.draft.category_id = category_id;
    }

    pub fn set_redirect_url(&mut self, redirect_url: Option<String>) {
        self.draft.redirect_url = redirect_url;
    }

    pub fn set_status(&mut self, status: ArticleStatus) {
        self.draft.status = status;
    }

    /// Set the cover image; a new upload replaces the previous one.
    pub fn set_cover_image(&mut self, url: String) {
        self.draft.cover_image_urls = vec![url];
    }

    pub fn clear_cover_image(&mut self) {
        self.draft.cover_image_urls.clear();
    }

    /// Wrap the selection (or the fallback literal) as a link marker.
    pub fn wrap_selection_as_link(&mut self) {
        let insertion = scanner::wrap_selection(
            &self.draft.buffer,
            self.selection.start,
            self.selection.end,
            LINK_WRAP_FALLBACK_TEXT,
        );
        self.draft.buffer = insertion.buffer;
        self.selection = Selection {
            start: insertion.cursor,
            end: insertion.cursor,
        };
        self.refresh_markers();
    }

    /// Set one field of a marker's link configuration.
    pub fn update_link(&mut self, label: &str, change: LinkField) {
        self.store.update_link(label, change);
    }

    /// Register a CTA and insert its token at the cursor.
    ///
    /// # Returns
    /// The generated CTA id.
    pub fn insert_cta(&mut self, draft: CtaDraft) -> String {
        let id = self.store.insert_cta(draft);
        self.apply_insertion(&EntityKind::Cta.insertion(&id));
        id
    }

    /// Set one field of a CTA. Unknown ids are a no-op.
    pub fn update_cta(&mut self, id: &str, change: CtaField) {
        self.store.update_cta(id, change);
    }

    /// Remove a CTA and strip its token from the buffer, trying the
    /// newline-wrapped form first, then the bare form.
    pub fn remove_cta(&mut self, id: &str) {
        let Some(token) = self.store.remove_cta(id) else {
            return;
        };
        let wrapped = format!("\n{token}\n");
        let buffer = self.draft.buffer.replacen(&wrapped, "", 1);
        self.draft.buffer = buffer.replacen(&token, "", 1);
        self.refresh_markers();
    }

    /// Register one embed per product and insert the token batch at the
    /// cursor, one token per line.
    ///
    /// # Returns
    /// The generated keys, one per selected product.
    pub fn insert_products(
        &mut self,
        product_ids: &[u64],
        options: ProductOptions,
    ) -> Vec<String> {
        if product_ids.is_empty() {
            return Vec::new();
        }
        let batch = self.store.insert_products(product_ids, options);
        self.apply_insertion(&batch.insertion);
        batch.keys
    }

    /// Remove a product embed and strip its single token occurrence.
    pub fn remove_product(&mut self, key: &str) {
        let Some(token) = self.store.remove_product(key) else {
            return;
        };
        self.draft.buffer = self.draft.buffer.replacen(&token, "", 1);
        self.refresh_markers();
    }

    /// CTAs whose token is still anchored in the buffer.
    pub fn active_ctas(&self) -> Vec<&CtaButton> {
        self.store
            .ctas()
            .values()
            .filter(|cta| self.draft.buffer.contains(&EntityKind::Cta.token(&cta.id)))
            .collect()
    }

    /// Product embeds whose token is still anchored in the buffer.
    pub fn active_products(&self) -> Vec<&ProductEmbed> {
        self.store
            .products()
            .values()
            .filter(|embed| {
                self.draft
                    .buffer
                    .contains(&EntityKind::Product.token(&embed.key))
            })
            .collect()
    }

    /// Encode the current state into persisted HTML.
    pub fn encode(&self) -> String {
        markup::encode(&self.draft.buffer, &self.store)
    }

    /// Validate the draft and build the create/update payload.
    ///
    /// # Returns
    /// The payload with encoded body and normalized fields, or the
    /// validation error that blocks the save.
    pub fn to_payload(&self) -> Result<ArticlePayload, DraftError> {
        self.draft.validate()?;
        Ok(ArticlePayload {
            title: self.draft.title.trim().to_string(),
            body_html: self.encode(),
            category_id: self.draft.category_id,
            cover_image_urls: self
                .draft
                .cover_image_urls
                .iter()
                .filter(|url| !url.trim().is_empty())
                .cloned()
                .collect(),
            redirect_url: normalize_redirect(self.draft.redirect_url.clone()),
            status: self.draft.status,
        })
    }

    /// Plain-text excerpt of the buffer for list cards.
    pub fn excerpt(&self) -> String {
        markup::preview::excerpt(&self.draft.buffer)
    }

    /// Full page preview HTML.
    pub fn page_preview(&self) -> String {
        markup::preview::render_page(&self.draft.buffer, &self.store)
    }

    fn apply_insertion(&mut self, content: &str) {
        let insertion = markup::insert_at_cursor(
            &self.draft.buffer,
            self.selection.start,
            self.selection.end,
            content,
        );
        self.draft.buffer = insertion.buffer;
        self.selection = Selection {
            start: insertion.cursor,
            end: insertion.cursor,
        };
        self.refresh_markers();
    }

    fn refresh_markers(&mut self) {
        self.markers = scanner::scan(&self.draft.buffer);
        scanner::reconcile(self.store.links_mut(), &self.markers);
    }
}
