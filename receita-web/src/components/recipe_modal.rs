//! Recipe modal: product image on the left, recipe on the right.
//!
//! The markup is static; [`crate::dom::ModalSurface`] fills it in and toggles
//! `aria-hidden` when the controller opens or closes it.

use leptos::html;
use leptos::prelude::*;

use crate::app::PageState;
use crate::dom::ModalSurface;
use crate::handlers;

#[derive(Clone, Copy, Default)]
pub struct ModalRefs {
    pub root: NodeRef<html::Div>,
    pub panel: NodeRef<html::Div>,
    pub close: NodeRef<html::Button>,
    pub image: NodeRef<html::Img>,
    pub title: NodeRef<html::H2>,
    pub recipe: NodeRef<html::Div>,
}

impl ModalRefs {
    /// The mounted modal, or `None` before the first render.
    pub fn surface(&self) -> Option<ModalSurface> {
        Some(ModalSurface {
            root: self.root.get_untracked()?.into(),
            panel: self.panel.get_untracked()?.into(),
            close: self.close.get_untracked()?.into(),
            image: self.image.get_untracked()?,
            title: self.title.get_untracked()?.into(),
            recipe: self.recipe.get_untracked()?.into(),
        })
    }
}

#[component]
pub fn RecipeModal(page: PageState) -> impl IntoView {
    let refs = page.modal_refs;
    let copy_idle = page.config.with_value(|c| c.labels.copy_idle.clone());
    let copy_label = move || {
        page.copy_notice
            .get()
            .map(|notice| notice.message)
            .unwrap_or_else(|| copy_idle.clone())
    };

    view! {
        <div
            id="image-modal"
            class="modal"
            aria-hidden="true"
            node_ref=refs.root
            on:click=move |ev| {
                // Backdrop only, not clicks bubbling up from the panel
                if ev.target() == ev.current_target() {
                    handlers::close_recipe(page);
                }
            }
        >
            <div
                class="modal-panel"
                role="dialog"
                aria-modal="true"
                aria-labelledby="modal-title"
                node_ref=refs.panel
            >
                <button
                    class="modal-close"
                    aria-label="Fechar"
                    node_ref=refs.close
                    on:click=move |_| handlers::close_recipe(page)
                >
                    "×"
                </button>
                <div class="modal-media">
                    <img id="modal-img" alt="" node_ref=refs.image />
                </div>
                <div class="modal-content">
                    <h2 id="modal-title" node_ref=refs.title></h2>
                    <div id="modal-recipe" class="modal-recipe" node_ref=refs.recipe></div>
                    <div class="modal-actions">
                        <button
                            id="btn-copy-recipe"
                            class="btn"
                            class:copied=move || page.copy_notice.with(|n| n.is_some())
                            on:click=move |_| handlers::copy_recipe(page)
                        >
                            {copy_label}
                        </button>
                        <button
                            id="btn-share"
                            class="btn btn-outline"
                            on:click=move |_| handlers::share_recipe(page)
                        >
                            "Compartilhar"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
