//! Named event handlers. Components register these against their elements;
//! each one is a single intent (open, close, copy, share, ...).

use leptos::prelude::*;
use leptos::task::spawn_local;
use receita::{
    DeferredFocus, DialogSurface, Feedback, FocusHost, KeyAction, ModalController, ModalView,
    OpenRequest, RecipeSource, ShareFallbackPanel, ShareOutcome, TransientNotice,
};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent, Node};

use crate::app::PageState;
use crate::catalog::{self, Product};
use crate::components::toast::show_toast;
use crate::dom::{self, DocumentFocus, EmbeddedRecipes};
use crate::platform::{self, ExecCommandCopy};

type Stored<T> = StoredValue<T, LocalStorage>;

fn now_millis() -> f64 {
    js_sys::Date::now()
}

// Focus moves dispatch `focusin` synchronously into `on_focusin`, which reads
// the controllers. Every open/close below runs against a `DeferredFocus` and
// only moves focus after the controller is released.

fn open_modal<R, S, F>(
    modal: Stored<ModalController<F::Handle>>,
    request: OpenRequest<'_>,
    source: &R,
    surface: &S,
    focus: &F,
) where
    R: RecipeSource,
    S: DialogSurface<Handle = F::Handle, Content = ModalView>,
    F: FocusHost,
    F::Handle: 'static,
{
    let deferred = DeferredFocus::new(focus);
    modal.update_value(|m| {
        m.open(request, source, surface, &deferred);
    });
    deferred.apply();
}

fn close_modal<S, F>(modal: Stored<ModalController<F::Handle>>, surface: &S, focus: &F) -> bool
where
    S: DialogSurface<Handle = F::Handle, Content = ModalView>,
    F: FocusHost,
    F::Handle: 'static,
{
    let deferred = DeferredFocus::new(focus);
    let closed = modal.try_update_value(|m| m.close(surface, &deferred)).unwrap_or(false);
    deferred.apply();
    closed
}

fn open_panel<S, F>(
    panel: Stored<ShareFallbackPanel<F::Handle>>,
    text: String,
    surface: &S,
    focus: &F,
) where
    S: DialogSurface<Handle = F::Handle, Content = str>,
    F: FocusHost,
    F::Handle: 'static,
{
    let deferred = DeferredFocus::new(focus);
    panel.update_value(|p| p.open(text, surface, &deferred));
    deferred.apply();
}

fn close_panel<S, F>(panel: Stored<ShareFallbackPanel<F::Handle>>, surface: &S, focus: &F) -> bool
where
    S: DialogSurface<Handle = F::Handle, Content = str>,
    F: FocusHost,
    F::Handle: 'static,
{
    let deferred = DeferredFocus::new(focus);
    let closed = panel.try_update_value(|p| p.close(surface, &deferred)).unwrap_or(false);
    deferred.apply();
    closed
}

/// Element to pull focus back to after a `focusin` landed `inside` or outside
/// the modal. `None` while the share panel is open or either controller is busy.
fn reclaim_target<S>(
    modal: Stored<ModalController<S::Handle>>,
    panel: Stored<ShareFallbackPanel<S::Handle>>,
    inside: bool,
    surface: &S,
) -> Option<S::Handle>
where
    S: DialogSurface<Content = ModalView>,
    S::Handle: 'static,
{
    if panel.try_with_value(|p| p.is_open()).unwrap_or(true) {
        return None;
    }
    modal
        .try_with_value(|m| m.reclaim_focus(inside, surface))
        .flatten()
}

fn focus_element(target: &HtmlElement) {
    if let Err(e) = DocumentFocus.focus(target) {
        debug!("Focus move dropped: {}", e);
    }
}

/// Open the recipe modal for a product card.
pub fn open_recipe(page: PageState, product: &Product) {
    let Some(surface) = page.modal_refs.surface() else {
        warn!("Recipe modal is not mounted");
        return;
    };
    let request = OpenRequest {
        recipe_id: product.recipe_id,
        card_title: product.name,
        image_src: product.image,
    };
    page.copy_notice.set(None);
    open_modal(page.modal, request, &EmbeddedRecipes, &surface, &DocumentFocus);
}

pub fn close_recipe(page: PageState) {
    close_share_panel(page);
    let Some(surface) = page.modal_refs.surface() else {
        return;
    };
    close_modal(page.modal, &surface, &DocumentFocus);
}

/// Copy the open recipe, flashing the button label on success.
pub fn copy_recipe(page: PageState) {
    let modal = page.modal.get_value();
    let config = page.config.get_value();
    spawn_local(async move {
        let outcome = modal
            .copy_recipe(&platform::clipboard(), &ExecCommandCopy)
            .await;
        match Feedback::for_recipe_copy(outcome, &config) {
            Feedback::Transient { message, duration_ms } => {
                flash_copy_label(page, message, duration_ms).await
            }
            Feedback::Blocking(message) => platform::alert(&message),
            Feedback::Silent => {}
        }
    });
}

async fn flash_copy_label(page: PageState, message: String, duration_ms: u32) {
    let notice = TransientNotice::new(message, now_millis(), duration_ms);
    page.copy_notice.set(Some(notice.clone()));
    gloo_timers::future::TimeoutFuture::new(duration_ms).await;
    // A later copy may have replaced the notice with one that is still live
    page.copy_notice.update(|current| {
        if current
            .as_ref()
            .is_some_and(|n| *n == notice || !n.is_visible(now_millis()))
        {
            *current = None;
        }
    });
}

/// Share the open recipe, falling back to the share panel.
pub fn share_recipe(page: PageState) {
    let modal = page.modal.get_value();
    spawn_local(async move {
        if let Some(ShareOutcome::Fallback(text)) = modal.share(&platform::share_target()).await {
            open_share_panel(page, text);
        }
    });
}

fn open_share_panel(page: PageState, text: String) {
    let Some(surface) = page.panel_refs.surface() else {
        warn!("Share panel is not mounted");
        return;
    };
    open_panel(page.share_panel, text, &surface, &DocumentFocus);
}

pub fn close_share_panel(page: PageState) {
    let Some(surface) = page.panel_refs.surface() else {
        return;
    };
    close_panel(page.share_panel, &surface, &DocumentFocus);
}

/// The share panel's own copy button.
pub fn copy_share_text(page: PageState) {
    let panel = page.share_panel.get_value();
    let config = page.config.get_value();
    spawn_local(async move {
        let outcome = panel.copy(&platform::clipboard(), &ExecCommandCopy).await;
        match Feedback::for_panel_copy(outcome, &config) {
            Feedback::Transient { message, duration_ms } => {
                show_toast(page.toasts, &message, duration_ms)
            }
            Feedback::Blocking(message) => platform::alert(&message),
            Feedback::Silent => {}
        }
    });
}

/// Window keydown: the share panel, when open, gets the key before the modal.
pub fn on_keydown(page: PageState, ev: &KeyboardEvent) {
    let key = ev.key();
    let active = DocumentFocus.active_element();

    let panel_open = page.share_panel.with_value(|p| p.is_open());
    let action = if panel_open {
        page.share_panel
            .with_value(|p| p.on_key(&key, ev.shift_key(), active.as_ref()))
    } else {
        page.modal
            .with_value(|m| m.on_key(&key, ev.shift_key(), active.as_ref()))
    };

    match action {
        KeyAction::Ignore => {}
        KeyAction::Close => {
            ev.prevent_default();
            if panel_open {
                close_share_panel(page);
            } else {
                close_recipe(page);
            }
        }
        KeyAction::Focus(target) => {
            ev.prevent_default();
            focus_element(&target);
        }
    }
}

/// Window focusin: focus that escapes the open modal is pulled back to its
/// close button. The share panel handles its own focus.
pub fn on_focusin(page: PageState, ev: &web_sys::FocusEvent) {
    let Some(surface) = page.modal_refs.surface() else {
        return;
    };
    let inside = ev
        .target()
        .and_then(|t| t.dyn_into::<Node>().ok())
        .is_some_and(|node| surface.root.contains(Some(&node)));
    if let Some(target) = reclaim_target(page.modal, page.share_panel, inside, &surface) {
        focus_element(&target);
    }
}

pub fn toggle_nav(page: PageState) {
    page.nav.update(|nav| {
        nav.toggle();
    });
}

/// Fragment link click: close the menu, then scroll below the header.
pub fn follow_anchor(page: PageState, ev: &web_sys::MouseEvent, href: &str) {
    page.nav.update(|nav| {
        nav.close();
    });
    let Some(id) = receita::nav::fragment_target(href) else {
        return;
    };
    let offset = page.config.with_value(|c| c.header_offset_px);
    if dom::smooth_scroll_to(id, offset) {
        ev.prevent_default();
    }
}

pub fn refresh_scroll_spy(page: PageState) {
    let sections = dom::section_offsets(&catalog::nav_section_ids());
    let scroll_y = dom::scroll_y();
    page.scroll_spy
        .maybe_update(|spy| spy.update(scroll_y, &sections));
}

#[cfg(test)]
mod tests {
    use super::*;
    use receita::{FocusCandidate, RecipeCatalog, Result, SiteConfig};
    use std::cell::{Cell, RefCell};

    const CLOSE: u32 = 10;
    const COPY: u32 = 11;
    const PANEL_TEXT: u32 = 20;
    const PANEL_CLOSE: u32 = 21;
    const CARD: u32 = 1;

    struct Modal;

    impl DialogSurface for Modal {
        type Handle = u32;
        type Content = ModalView;

        fn show(&self, _view: &ModalView) {}
        fn hide(&self) {}

        fn initial_focus(&self) -> u32 {
            CLOSE
        }

        fn focusable_descendants(&self) -> Vec<(u32, FocusCandidate)> {
            vec![
                (CLOSE, FocusCandidate::new("button")),
                (COPY, FocusCandidate::new("button")),
            ]
        }
    }

    struct Panel;

    impl DialogSurface for Panel {
        type Handle = u32;
        type Content = str;

        fn show(&self, _text: &str) {}
        fn hide(&self) {}

        fn initial_focus(&self) -> u32 {
            PANEL_TEXT
        }

        fn focusable_descendants(&self) -> Vec<(u32, FocusCandidate)> {
            vec![
                (PANEL_TEXT, FocusCandidate::new("textarea")),
                (PANEL_CLOSE, FocusCandidate::new("button")),
            ]
        }
    }

    /// Focus host that, like the browser, runs the `focusin` handler
    /// synchronously inside every focus move.
    struct BrowserFocus {
        modal: Stored<ModalController<u32>>,
        panel: Stored<ShareFallbackPanel<u32>>,
        active: Cell<Option<u32>>,
        focusin: RefCell<Vec<(u32, Option<u32>)>>,
    }

    impl FocusHost for BrowserFocus {
        type Handle = u32;

        fn active_element(&self) -> Option<u32> {
            self.active.get()
        }

        fn focus(&self, target: &u32) -> Result<()> {
            self.active.set(Some(*target));
            let inside = (CLOSE..PANEL_TEXT).contains(target);
            let reclaim = reclaim_target(self.modal, self.panel, inside, &Modal);
            self.focusin.borrow_mut().push((*target, reclaim));
            Ok(())
        }
    }

    fn setup() -> BrowserFocus {
        BrowserFocus {
            modal: StoredValue::new_local(ModalController::new(SiteConfig::default())),
            panel: StoredValue::new_local(ShareFallbackPanel::new()),
            active: Cell::new(Some(CARD)),
            focusin: RefCell::new(Vec::new()),
        }
    }

    fn catalog() -> RecipeCatalog {
        let mut catalog = RecipeCatalog::new();
        catalog.insert_raw(
            "bolo-chocolate",
            r#"{"title":"Bolo de Chocolate","recipe":"Materiais:\n2 ovos"}"#,
        );
        catalog
    }

    fn request() -> OpenRequest<'static> {
        OpenRequest {
            recipe_id: "bolo-chocolate",
            card_title: "Bolo de Chocolate",
            image_src: "img/bolo.jpg",
        }
    }

    #[test]
    fn test_modal_open_and_close_survive_focusin() {
        let focus = setup();

        open_modal(focus.modal, request(), &catalog(), &Modal, &focus);
        assert!(focus.modal.with_value(|m| m.is_open()));
        assert_eq!(focus.active.get(), Some(CLOSE));

        assert!(close_modal(focus.modal, &Modal, &focus));
        assert!(!focus.modal.with_value(|m| m.is_open()));
        assert_eq!(focus.active.get(), Some(CARD));

        // Focus on the close button stays put; the restored card is outside
        // a modal that is already closed
        assert_eq!(*focus.focusin.borrow(), vec![(CLOSE, None), (CARD, None)]);
        assert!(!close_modal(focus.modal, &Modal, &focus));
    }

    #[test]
    fn test_focus_escaping_open_modal_is_reclaimed() {
        let focus = setup();
        open_modal(focus.modal, request(), &catalog(), &Modal, &focus);

        focus.focus(&CARD).unwrap();
        assert_eq!(focus.focusin.borrow().last(), Some(&(CARD, Some(CLOSE))));
    }

    #[test]
    fn test_share_panel_open_and_close_survive_focusin() {
        let focus = setup();
        open_modal(focus.modal, request(), &catalog(), &Modal, &focus);

        open_panel(focus.panel, "Bolo de Chocolate".to_string(), &Panel, &focus);
        assert!(focus.panel.with_value(|p| p.is_open()));
        assert_eq!(focus.active.get(), Some(PANEL_TEXT));
        // The panel owns focus while open
        assert_eq!(focus.focusin.borrow().last(), Some(&(PANEL_TEXT, None)));

        assert!(close_panel(focus.panel, &Panel, &focus));
        assert_eq!(focus.active.get(), Some(CLOSE));
        assert!(focus.modal.with_value(|m| m.is_open()));
    }

    #[test]
    fn test_reclaim_skipped_while_controller_busy() {
        let focus = setup();
        open_modal(focus.modal, request(), &catalog(), &Modal, &focus);

        let mut during_update = Some(CLOSE);
        focus.modal.update_value(|_| {
            during_update = reclaim_target(focus.modal, focus.panel, false, &Modal);
        });
        assert_eq!(during_update, None);
        assert_eq!(reclaim_target(focus.modal, focus.panel, false, &Modal), Some(CLOSE));
    }
}
