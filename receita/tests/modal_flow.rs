//! End-to-end flows through the modal and fallback panel against a fake page.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;

use async_trait::async_trait;
use futures::executor::block_on;
use receita::*;

const PRODUCT_IMG: u32 = 1;
const OTHER_BUTTON: u32 = 2;
const MODAL_CLOSE: u32 = 10;
const MODAL_COPY: u32 = 11;
const MODAL_SHARE: u32 = 12;
const PANEL_TEXT: u32 = 20;
const PANEL_COPY: u32 = 21;
const PANEL_CLOSE: u32 = 22;

#[derive(Default)]
struct FakeFocus {
    active: Cell<Option<u32>>,
    removed: RefCell<HashSet<u32>>,
}

impl FocusHost for FakeFocus {
    type Handle = u32;

    fn active_element(&self) -> Option<u32> {
        self.active.get()
    }

    fn focus(&self, target: &u32) -> Result<()> {
        if self.removed.borrow().contains(target) {
            return Err(ReceitaError::FocusLost);
        }
        self.active.set(Some(*target));
        Ok(())
    }
}

#[derive(Default)]
struct FakeModal {
    visible: Cell<bool>,
    content: RefCell<Option<ModalView>>,
}

impl DialogSurface for FakeModal {
    type Handle = u32;
    type Content = ModalView;

    fn show(&self, content: &ModalView) {
        *self.content.borrow_mut() = Some(content.clone());
        self.visible.set(true);
    }

    fn hide(&self) {
        *self.content.borrow_mut() = None;
        self.visible.set(false);
    }

    fn initial_focus(&self) -> u32 {
        MODAL_CLOSE
    }

    fn focusable_descendants(&self) -> Vec<(u32, FocusCandidate)> {
        let mut image = FocusCandidate::new("img");
        image.rendered = self.visible.get();
        [MODAL_CLOSE, MODAL_COPY, MODAL_SHARE]
            .into_iter()
            .map(|id| {
                let mut button = FocusCandidate::new("button");
                button.rendered = self.visible.get();
                (id, button)
            })
            .chain(std::iter::once((99, image)))
            .collect()
    }
}

#[derive(Default)]
struct FakePanel {
    text: RefCell<Option<String>>,
}

impl DialogSurface for FakePanel {
    type Handle = u32;
    type Content = str;

    fn show(&self, content: &str) {
        *self.text.borrow_mut() = Some(content.to_string());
    }

    fn hide(&self) {
        *self.text.borrow_mut() = None;
    }

    fn initial_focus(&self) -> u32 {
        PANEL_TEXT
    }

    fn focusable_descendants(&self) -> Vec<(u32, FocusCandidate)> {
        vec![
            (PANEL_TEXT, FocusCandidate::new("textarea")),
            (PANEL_COPY, FocusCandidate::new("button")),
            (PANEL_CLOSE, FocusCandidate::new("button")),
        ]
    }
}

struct FakeClipboard {
    works: bool,
    written: RefCell<Vec<String>>,
}

#[async_trait(?Send)]
impl ClipboardWriter for FakeClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        if !self.works {
            return Err(ReceitaError::CapabilityRejected("NotAllowedError".to_string()));
        }
        self.written.borrow_mut().push(text.to_string());
        Ok(())
    }
}

struct FakeLegacy {
    works: bool,
    copied: RefCell<Vec<String>>,
}

impl LegacyCopy for FakeLegacy {
    fn copy(&self, text: &str) -> Result<()> {
        self.copied.borrow_mut().push(text.to_string());
        if self.works {
            Ok(())
        } else {
            Err(ReceitaError::CapabilityUnavailable("execCommand"))
        }
    }
}

struct FakeShare {
    accept: bool,
    shared: RefCell<Vec<SharePayload>>,
}

#[async_trait(?Send)]
impl ShareTarget for FakeShare {
    async fn share(&self, payload: &SharePayload) -> Result<()> {
        if !self.accept {
            return Err(ReceitaError::CapabilityRejected("AbortError".to_string()));
        }
        self.shared.borrow_mut().push(payload.clone());
        Ok(())
    }
}

fn clipboard(works: bool) -> Capability<FakeClipboard> {
    Capability::Native(FakeClipboard {
        works,
        written: RefCell::new(Vec::new()),
    })
}

fn legacy(works: bool) -> FakeLegacy {
    FakeLegacy {
        works,
        copied: RefCell::new(Vec::new()),
    }
}

fn catalog() -> RecipeCatalog {
    let mut catalog = RecipeCatalog::new();
    catalog
        .insert(
            "bolo-chocolate",
            &RecipeRecord {
                title: "Bolo de Chocolate".to_string(),
                recipe: "Materiais:\n2 ovos\n1 xícara de farinha".to_string(),
            },
        )
        .unwrap();
    catalog.insert_raw("quebrado", "{ nope");
    catalog
}

fn bolo() -> OpenRequest<'static> {
    OpenRequest {
        recipe_id: "bolo-chocolate",
        card_title: "Bolo",
        image_src: "img/bolo.jpg",
    }
}

struct Page {
    modal: ModalController<u32>,
    panel: ShareFallbackPanel<u32>,
    modal_surface: FakeModal,
    panel_surface: FakePanel,
    focus: FakeFocus,
    catalog: RecipeCatalog,
}

impl Page {
    fn new() -> Self {
        let focus = FakeFocus::default();
        focus.active.set(Some(PRODUCT_IMG));
        Self {
            modal: ModalController::new(SiteConfig::default()),
            panel: ShareFallbackPanel::new(),
            modal_surface: FakeModal::default(),
            panel_surface: FakePanel::default(),
            focus,
            catalog: catalog(),
        }
    }

    fn open(&mut self, request: OpenRequest<'_>) -> ModalView {
        self.modal
            .open(request, &self.catalog, &self.modal_surface, &self.focus)
            .clone()
    }

    fn close(&mut self) -> bool {
        self.modal.close(&self.modal_surface, &self.focus)
    }
}

#[test]
fn test_open_renders_record_and_focuses_close() {
    let mut page = Page::new();
    let view = page.open(bolo());

    assert_eq!(view.title, "Bolo de Chocolate");
    assert_eq!(view.image_alt, "Bolo de Chocolate");
    assert!(view.recipe_html.contains("<strong>Materiais:</strong><br>"));
    assert_eq!(view.recipe_html.matches("<br>").count(), 2);
    assert!(page.modal.is_open());
    assert!(page.modal_surface.visible.get());
    assert_eq!(page.focus.active_element(), Some(MODAL_CLOSE));
}

#[test]
fn test_close_restores_focus_and_is_idempotent() {
    let mut page = Page::new();
    page.open(bolo());
    assert!(page.close());
    assert_eq!(page.focus.active_element(), Some(PRODUCT_IMG));
    assert!(!page.modal_surface.visible.get());
    assert!(page.modal_surface.content.borrow().is_none());

    page.focus.active.set(Some(OTHER_BUTTON));
    assert!(!page.close());
    assert_eq!(page.focus.active_element(), Some(OTHER_BUTTON));
}

#[test]
fn test_close_ignores_vanished_focus_target() {
    let mut page = Page::new();
    page.open(bolo());
    page.focus.removed.borrow_mut().insert(PRODUCT_IMG);
    assert!(page.close());
    assert_eq!(page.focus.active_element(), Some(MODAL_CLOSE));
}

#[test]
fn test_tab_is_trapped_inside_modal() {
    let mut page = Page::new();
    page.open(bolo());

    assert_eq!(page.modal.on_key("Tab", false, Some(&MODAL_SHARE)), KeyAction::Focus(MODAL_CLOSE));
    assert_eq!(page.modal.on_key("Tab", true, Some(&MODAL_CLOSE)), KeyAction::Focus(MODAL_SHARE));
    assert_eq!(page.modal.on_key("Tab", false, Some(&MODAL_COPY)), KeyAction::Ignore);
    assert_eq!(page.modal.on_key("Escape", false, None), KeyAction::Close);

    page.close();
    assert_eq!(page.modal.on_key("Tab", false, Some(&MODAL_SHARE)), KeyAction::Ignore);
    assert_eq!(page.modal.on_key("Escape", false, None), KeyAction::Ignore);
}

#[test]
fn test_focus_outside_open_modal_is_reclaimed() {
    let mut page = Page::new();
    assert_eq!(page.modal.reclaim_focus(false, &page.modal_surface), None);
    page.open(bolo());
    assert_eq!(page.modal.reclaim_focus(false, &page.modal_surface), Some(MODAL_CLOSE));
    assert_eq!(page.modal.reclaim_focus(true, &page.modal_surface), None);
}

#[test]
fn test_missing_record_shows_placeholder() {
    let mut page = Page::new();
    for id in ["nao-existe", "quebrado"] {
        let view = page.open(OpenRequest {
            recipe_id: id,
            card_title: " Pão de Mel ",
            image_src: "img/pao.jpg",
        });
        assert!(!view.has_recipe);
        assert_eq!(view.title, "Pão de Mel");
        assert_eq!(view.recipe_html, "<em>Receita não disponível para este item.</em>");
        assert_eq!(
            block_on(page.modal.copy_recipe(&clipboard(true), &legacy(true))),
            CopyOutcome::Empty
        );
    }
}

#[test]
fn test_reopen_keeps_original_focus_origin() {
    let mut page = Page::new();
    page.open(bolo());
    page.open(OpenRequest {
        recipe_id: "quebrado",
        card_title: "Outro",
        image_src: "",
    });
    page.close();
    assert_eq!(page.focus.active_element(), Some(PRODUCT_IMG));
}

#[test]
fn test_copy_writes_plain_text() {
    let mut page = Page::new();
    page.open(bolo());
    let clip = clipboard(true);
    let fallback = legacy(true);

    let outcome = block_on(page.modal.copy_recipe(&clip, &fallback));
    assert_eq!(outcome, CopyOutcome::Copied);
    let Capability::Native(writer) = &clip else { unreachable!() };
    assert_eq!(
        writer.written.borrow().as_slice(),
        ["Materiais:\n2 ovos\n1 xícara de farinha".to_string()]
    );
    assert!(fallback.copied.borrow().is_empty());

    let config = SiteConfig::default();
    let Feedback::Transient { message, duration_ms } = Feedback::for_recipe_copy(outcome, &config)
    else {
        panic!("copy success should be transient");
    };
    let notice = TransientNotice::new(message, 0.0, duration_ms);
    assert!(notice.is_visible(1000.0));
    assert!(!notice.is_visible(f64::from(duration_ms)));
}

#[test]
fn test_copy_rejection_tries_legacy_before_failing() {
    let mut page = Page::new();
    page.open(bolo());

    let fallback = legacy(true);
    assert_eq!(
        block_on(page.modal.copy_recipe(&clipboard(false), &fallback)),
        CopyOutcome::CopiedLegacy
    );
    assert_eq!(fallback.copied.borrow().len(), 1);

    let broken = legacy(false);
    let outcome = block_on(page.modal.copy_recipe(&clipboard(false), &broken));
    assert_eq!(outcome, CopyOutcome::Failed);
    assert_eq!(broken.copied.borrow().len(), 1);
    assert!(matches!(
        Feedback::for_recipe_copy(outcome, &SiteConfig::default()),
        Feedback::Blocking(_)
    ));
}

#[test]
fn test_native_share_receives_title_and_text() {
    let mut page = Page::new();
    page.open(bolo());
    let target = Capability::Native(FakeShare {
        accept: true,
        shared: RefCell::new(Vec::new()),
    });

    assert_eq!(block_on(page.modal.share(&target)), Some(ShareOutcome::Shared));
    let Capability::Native(share) = &target else { unreachable!() };
    let shared = share.shared.borrow();
    assert_eq!(shared[0].title, "Bolo de Chocolate");
    assert_eq!(
        shared[0].text,
        "Bolo de Chocolate\n\nMateriais:\n2 ovos\n1 xícara de farinha"
    );
}

#[test]
fn test_share_falls_back_to_panel() {
    let mut page = Page::new();
    page.open(bolo());
    page.focus.focus(&MODAL_SHARE).unwrap();

    let rejected = Capability::Native(FakeShare {
        accept: false,
        shared: RefCell::new(Vec::new()),
    });
    let missing: Capability<FakeShare> = Capability::Unavailable;

    for target in [rejected, missing] {
        let Some(ShareOutcome::Fallback(text)) = block_on(page.modal.share(&target)) else {
            panic!("expected fallback");
        };
        assert!(text.starts_with("Bolo de Chocolate\n\n"));

        page.panel
            .open(text.clone(), &page.panel_surface, &page.focus);
        assert!(page.panel.is_open());
        assert_eq!(page.panel.text(), Some(text.as_str()));
        assert_eq!(page.panel_surface.text.borrow().as_deref(), Some(text.as_str()));
        assert_eq!(page.focus.active_element(), Some(PANEL_TEXT));
        assert_eq!(
            page.panel.on_key("Tab", false, Some(&PANEL_CLOSE)),
            KeyAction::Focus(PANEL_TEXT)
        );

        let outcome = block_on(page.panel.copy(&clipboard(true), &legacy(true)));
        assert_eq!(outcome, CopyOutcome::Copied);

        assert_eq!(page.panel.on_key("Escape", false, None), KeyAction::Close);
        assert!(page.panel.close(&page.panel_surface, &page.focus));
        assert!(!page.panel.close(&page.panel_surface, &page.focus));
        assert_eq!(page.focus.active_element(), Some(MODAL_SHARE));
        assert!(page.modal.is_open());
    }
}

#[test]
fn test_share_with_closed_modal_does_nothing() {
    let page = Page::new();
    let missing: Capability<FakeShare> = Capability::Unavailable;
    assert_eq!(block_on(page.modal.share(&missing)), None);
}
