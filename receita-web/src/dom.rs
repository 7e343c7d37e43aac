//! DOM adapters for the core controllers.

use receita::recipe::recipe_element_id;
use receita::{
    DialogSurface, FocusCandidate, FocusHost, ModalView, ReceitaError, RecipeSource, Result,
    SectionOffset, SiteConfig, FOCUSABLE_SELECTOR,
};
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, HtmlTextAreaElement};

/// Element id of the optional JSON site configuration block.
pub const SITE_CONFIG_ID: &str = "site-config";

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Read `#site-config`, falling back to defaults when absent or invalid.
pub fn load_site_config() -> SiteConfig {
    let Some(raw) = document()
        .and_then(|d| d.get_element_by_id(SITE_CONFIG_ID))
        .and_then(|el| el.text_content())
    else {
        return SiteConfig::default();
    };
    SiteConfig::from_json(&raw).unwrap_or_else(|e| {
        warn!("Ignoring site config: {}", e);
        SiteConfig::default()
    })
}

/// Recipe records embedded as `<script type="application/json" id="recipe-…">`.
pub struct EmbeddedRecipes;

impl RecipeSource for EmbeddedRecipes {
    fn raw_record(&self, id: &str) -> Option<String> {
        document()?
            .get_element_by_id(&recipe_element_id(id))?
            .text_content()
    }
}

/// `document.activeElement` and `HTMLElement.focus()`.
pub struct DocumentFocus;

impl FocusHost for DocumentFocus {
    type Handle = HtmlElement;

    fn active_element(&self) -> Option<HtmlElement> {
        document()?.active_element()?.dyn_into::<HtmlElement>().ok()
    }

    fn focus(&self, target: &HtmlElement) -> Result<()> {
        if !target.is_connected() {
            return Err(ReceitaError::FocusLost);
        }
        target.focus().map_err(|_| ReceitaError::FocusLost)
    }
}

/// Focusable-looking descendants of `container`, in document order.
pub fn focusable_descendants(container: &Element) -> Vec<(HtmlElement, FocusCandidate)> {
    let Ok(nodes) = container.query_selector_all(FOCUSABLE_SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|el| {
            let candidate = FocusCandidate {
                tag: el.tag_name().to_ascii_lowercase(),
                has_href: el.has_attribute("href"),
                disabled: el.has_attribute("disabled"),
                tab_index: el
                    .get_attribute("tabindex")
                    .and_then(|v| v.trim().parse().ok()),
                rendered: el.offset_parent().is_some(),
            };
            (el, candidate)
        })
        .collect()
}

fn set_hidden(root: &Element, hidden: bool) {
    let _ = root.set_attribute("aria-hidden", if hidden { "true" } else { "false" });
}

/// Stop the page behind an open dialog from scrolling.
fn lock_page_scroll(locked: bool) {
    let Some(root) = document()
        .and_then(|d| d.document_element())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let style = root.style();
    if locked {
        let _ = style.set_property("overflow", "hidden");
    } else {
        let _ = style.remove_property("overflow");
    }
}

/// The recipe modal's elements.
pub struct ModalSurface {
    pub root: HtmlElement,
    pub panel: HtmlElement,
    pub close: HtmlElement,
    pub image: HtmlImageElement,
    pub title: HtmlElement,
    pub recipe: HtmlElement,
}

impl DialogSurface for ModalSurface {
    type Handle = HtmlElement;
    type Content = ModalView;

    fn show(&self, view: &ModalView) {
        self.image.set_src(&view.image_src);
        self.image.set_alt(&view.image_alt);
        self.title.set_text_content(Some(&view.title));
        self.recipe.set_inner_html(&view.recipe_html);
        set_hidden(&self.root, false);
        lock_page_scroll(true);
    }

    fn hide(&self) {
        set_hidden(&self.root, true);
        self.image.set_src("");
        self.title.set_text_content(None);
        self.recipe.set_inner_html("");
        lock_page_scroll(false);
    }

    fn initial_focus(&self) -> HtmlElement {
        self.close.clone()
    }

    fn focusable_descendants(&self) -> Vec<(HtmlElement, FocusCandidate)> {
        focusable_descendants(&self.panel)
    }
}

/// The fallback share panel's elements.
pub struct SharePanelSurface {
    pub root: HtmlElement,
    pub panel: HtmlElement,
    pub text: HtmlTextAreaElement,
}

impl DialogSurface for SharePanelSurface {
    type Handle = HtmlElement;
    type Content = str;

    fn show(&self, text: &str) {
        self.text.set_value(text);
        set_hidden(&self.root, false);
    }

    fn hide(&self) {
        set_hidden(&self.root, true);
        self.text.set_value("");
    }

    fn initial_focus(&self) -> HtmlElement {
        self.text.clone().into()
    }

    fn focusable_descendants(&self) -> Vec<(HtmlElement, FocusCandidate)> {
        focusable_descendants(&self.panel)
    }
}

/// Document-relative top of each section that exists on the page.
pub fn section_offsets(ids: &[&str]) -> Vec<SectionOffset> {
    let Some(document) = document() else {
        return Vec::new();
    };
    let scroll_y = scroll_y();
    ids.iter()
        .filter_map(|id| {
            let el = document.get_element_by_id(id)?;
            Some(SectionOffset {
                id: id.to_string(),
                top: el.get_bounding_client_rect().top() + scroll_y,
            })
        })
        .collect()
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Smoothly scroll so that element `id` sits below the fixed header.
/// Returns false when there is no such element.
pub fn smooth_scroll_to(id: &str, header_offset: f64) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(target) = window.document().and_then(|d| d.get_element_by_id(id)) else {
        return false;
    };
    let top = receita::nav::anchor_scroll_top(
        target.get_bounding_client_rect().top(),
        scroll_y(),
        header_offset,
    );
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}
