//! Fallback share panel, shown when the browser cannot share natively.

use leptos::html;
use leptos::prelude::*;

use crate::app::PageState;
use crate::dom::SharePanelSurface;
use crate::handlers;

#[derive(Clone, Copy, Default)]
pub struct SharePanelRefs {
    pub root: NodeRef<html::Div>,
    pub panel: NodeRef<html::Div>,
    pub text: NodeRef<html::Textarea>,
}

impl SharePanelRefs {
    pub fn surface(&self) -> Option<SharePanelSurface> {
        Some(SharePanelSurface {
            root: self.root.get_untracked()?.into(),
            panel: self.panel.get_untracked()?.into(),
            text: self.text.get_untracked()?,
        })
    }
}

#[component]
pub fn SharePanel(page: PageState) -> impl IntoView {
    let refs = page.panel_refs;

    view! {
        <div
            id="share-fallback"
            class="share-fallback"
            aria-hidden="true"
            node_ref=refs.root
            on:click=move |ev| {
                if ev.target() == ev.current_target() {
                    handlers::close_share_panel(page);
                }
            }
        >
            <div
                class="share-fallback-panel"
                role="dialog"
                aria-modal="true"
                aria-labelledby="share-fallback-title"
                node_ref=refs.panel
            >
                <h3 id="share-fallback-title">"Compartilhar receita"</h3>
                <p>"Copie o texto abaixo e cole onde quiser."</p>
                <textarea id="share-fallback-text" rows="10" readonly=true node_ref=refs.text></textarea>
                <div class="share-fallback-actions">
                    <button class="btn" on:click=move |_| handlers::copy_share_text(page)>
                        "Copiar texto"
                    </button>
                    <button class="btn btn-outline" on:click=move |_| handlers::close_share_panel(page)>
                        "Fechar"
                    </button>
                </div>
            </div>
        </div>
    }
}
