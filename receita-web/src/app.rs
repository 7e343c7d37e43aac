use leptos::prelude::*;
use receita::{ModalController, NavMenu, ScrollSpy, ShareFallbackPanel, SiteConfig};
use web_sys::HtmlElement;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::product_grid::ProductGrid;
use crate::components::recipe_modal::{ModalRefs, RecipeModal};
use crate::components::share_panel::{SharePanel, SharePanelRefs};
use crate::components::toast::{ToastContainer, ToastMessage};
use crate::dom;
use crate::handlers;

/// Handles to every piece of page state. Copy, so handlers can capture it freely.
#[derive(Clone, Copy)]
pub struct PageState {
    pub config: StoredValue<SiteConfig>,
    pub modal: StoredValue<ModalController<HtmlElement>, LocalStorage>,
    pub share_panel: StoredValue<ShareFallbackPanel<HtmlElement>, LocalStorage>,
    pub modal_refs: ModalRefs,
    pub panel_refs: SharePanelRefs,
    pub nav: RwSignal<NavMenu>,
    pub scroll_spy: RwSignal<ScrollSpy>,
    pub toasts: RwSignal<Vec<ToastMessage>>,
    /// Label-swap notice on the modal's copy button
    pub copy_notice: RwSignal<Option<receita::TransientNotice>>,
}

impl PageState {
    fn new(config: SiteConfig) -> Self {
        Self {
            modal: StoredValue::new_local(ModalController::new(config.clone())),
            share_panel: StoredValue::new_local(ShareFallbackPanel::new()),
            modal_refs: ModalRefs::default(),
            panel_refs: SharePanelRefs::default(),
            nav: RwSignal::new(NavMenu::default()),
            scroll_spy: RwSignal::new(ScrollSpy::new(config.header_offset_px)),
            toasts: RwSignal::new(Vec::new()),
            copy_notice: RwSignal::new(None),
            config: StoredValue::new(config),
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let page = PageState::new(dom::load_site_config());
    let toasts = page.toasts;

    // Keyboard and focus policing for whichever dialog is open
    let _ = window_event_listener(leptos::ev::keydown, move |ev| handlers::on_keydown(page, &ev));
    let _ = window_event_listener(leptos::ev::focusin, move |ev| handlers::on_focusin(page, &ev));

    // Scroll spy
    let _ = window_event_listener(leptos::ev::scroll, move |_| handlers::refresh_scroll_spy(page));
    let _ = window_event_listener(leptos::ev::resize, move |_| handlers::refresh_scroll_spy(page));
    let _ = window_event_listener(leptos::ev::load, move |_| handlers::refresh_scroll_spy(page));
    Effect::new(move |_| handlers::refresh_scroll_spy(page));

    view! {
        <Header page=page />

        <main>
            <Hero page=page />
            <ProductGrid page=page />

            <section id="sobre" class="section about">
                <h2>"Sobre"</h2>
                <p>
                    "Receitas caseiras feitas com ingredientes frescos. "
                    "Clique em um produto para ver a receita completa, copiar ou compartilhar."
                </p>
            </section>

            <section id="contato" class="section contact">
                <h2>"Contato"</h2>
                <p>"Encomendas pelo e-mail "<a href="mailto:contato@receita.example">"contato@receita.example"</a></p>
            </section>
        </main>

        <RecipeModal page=page />
        <SharePanel page=page />

        <ToastContainer
            toasts=toasts.into()
            on_dismiss=Callback::new(move |id: usize| {
                toasts.update(|t| t.retain(|m| m.id != id));
            })
        />

        <Footer />
    }
}
