//! Recipe modal: product image plus recipe text, with copy and share actions.

use tracing::{debug, warn};

use crate::capability::{
    copy_with_fallback, share_or_fallback, Capability, ClipboardWriter, CopyOutcome, LegacyCopy,
    ShareOutcome, SharePayload, ShareTarget,
};
use crate::config::SiteConfig;
use crate::dialog::{DialogSurface, FocusScope, KeyAction};
use crate::focus::FocusHost;
use crate::markup::{escape_html, render_recipe_html, strip_html_to_text};
use crate::recipe::{self, RecipeSource};

/// Which product card asked for the modal.
#[derive(Debug, Clone, Copy)]
pub struct OpenRequest<'a> {
    pub recipe_id: &'a str,
    /// Visible product name, used when the record has no title
    pub card_title: &'a str,
    pub image_src: &'a str,
}

/// Everything the modal displays.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalView {
    pub title: String,
    pub image_src: String,
    pub image_alt: String,
    pub recipe_html: String,
    /// False when the placeholder is shown instead of a recipe
    pub has_recipe: bool,
}

#[derive(Debug, Clone)]
struct ModalState<H> {
    view: ModalView,
    scope: FocusScope<H>,
}

/// Owns the single recipe modal. Closed when `state` is `None`.
#[derive(Debug, Clone)]
pub struct ModalController<H> {
    config: SiteConfig,
    state: Option<ModalState<H>>,
}

impl<H: Clone + PartialEq> ModalController<H> {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            state: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.is_some()
    }

    pub fn view(&self) -> Option<&ModalView> {
        self.state.as_ref().map(|s| &s.view)
    }

    /// Build what the modal shows for `request`. A missing or malformed
    /// record yields the placeholder.
    pub fn build_view(&self, request: OpenRequest<'_>, source: &impl RecipeSource) -> ModalView {
        let (title, recipe_html, has_recipe) = match recipe::resolve(source, request.recipe_id) {
            Ok(record) => (
                record.display_title(request.card_title).to_string(),
                render_recipe_html(&record.recipe, &self.config),
                true,
            ),
            Err(_) => (
                request.card_title.trim().to_string(),
                format!("<em>{}</em>", escape_html(&self.config.labels.recipe_unavailable)),
                false,
            ),
        };
        let image_alt = if title.is_empty() {
            self.config.labels.image_alt.clone()
        } else {
            title.clone()
        };
        ModalView {
            title,
            image_src: request.image_src.to_string(),
            image_alt,
            recipe_html,
            has_recipe,
        }
    }

    /// Show the modal for a product card and trap focus inside it.
    ///
    /// Reopening while open swaps the content but keeps the element focus
    /// returns to on close.
    pub fn open<R, S, F>(
        &mut self,
        request: OpenRequest<'_>,
        source: &R,
        surface: &S,
        focus: &F,
    ) -> &ModalView
    where
        R: RecipeSource,
        S: DialogSurface<Handle = H, Content = ModalView>,
        F: FocusHost<Handle = H>,
    {
        let view = self.build_view(request, source);
        let previously_focused = match self.state.take() {
            Some(state) => state.scope.previously_focused().cloned(),
            None => focus.active_element(),
        };

        surface.show(&view);
        let scope = FocusScope::enter(previously_focused, surface, focus);
        debug!("Opened recipe modal for '{}'", request.recipe_id);

        &self.state.insert(ModalState { view, scope }).view
    }

    /// Hide the modal and give focus back. Returns false if it was already closed.
    pub fn close<S, F>(&mut self, surface: &S, focus: &F) -> bool
    where
        S: DialogSurface<Handle = H, Content = ModalView>,
        F: FocusHost<Handle = H>,
    {
        let Some(state) = self.state.take() else {
            return false;
        };
        surface.hide();
        state.scope.exit(focus);
        true
    }

    /// Escape closes, Tab is kept inside the panel. Ignored while closed.
    pub fn on_key(&self, key: &str, shift: bool, active: Option<&H>) -> KeyAction<H> {
        match &self.state {
            Some(state) => state.scope.on_key(key, shift, active),
            None => KeyAction::Ignore,
        }
    }

    /// Where to pull focus back to when it lands outside an open modal.
    pub fn reclaim_focus<S>(&self, target_inside: bool, surface: &S) -> Option<H>
    where
        S: DialogSurface<Handle = H, Content = ModalView>,
    {
        (self.is_open() && !target_inside).then(|| surface.initial_focus())
    }

    /// Plain text of the displayed recipe; empty when closed or showing the placeholder.
    pub fn recipe_text(&self) -> String {
        match self.view() {
            Some(view) if view.has_recipe => strip_html_to_text(&view.recipe_html),
            _ => String::new(),
        }
    }

    pub fn share_payload(&self) -> Option<SharePayload> {
        let view = self.view()?;
        Some(SharePayload::new(&view.title, &self.recipe_text()))
    }

    /// Copy the displayed recipe as plain text.
    pub async fn copy_recipe<C, L>(&self, clipboard: &Capability<C>, legacy: &L) -> CopyOutcome
    where
        C: ClipboardWriter,
        L: LegacyCopy,
    {
        copy_with_fallback(clipboard, legacy, &self.recipe_text()).await
    }

    /// Share title and recipe. `None` when the modal is closed.
    pub async fn share<S: ShareTarget>(&self, target: &Capability<S>) -> Option<ShareOutcome> {
        let Some(payload) = self.share_payload() else {
            warn!("Share requested with no recipe open");
            return None;
        };
        Some(share_or_fallback(target, &payload).await)
    }
}
