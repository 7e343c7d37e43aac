//! Fixed header with the hamburger menu and the section links.

use leptos::prelude::*;

use crate::app::PageState;
use crate::catalog::NAV_SECTIONS;
use crate::handlers;

#[component]
pub fn Header(page: PageState) -> impl IntoView {
    let nav = page.nav;
    let is_open = move || nav.with(|n| n.is_open());

    let links = NAV_SECTIONS
        .iter()
        .map(|(id, label)| {
            let href = format!("#{}", id);
            let active_href = href.clone();
            let click_href = href.clone();
            view! {
                <li>
                    <a
                        href=href
                        class="nav-link"
                        class:active=move || {
                            page.scroll_spy.with(|spy| spy.is_link_active(&active_href))
                        }
                        on:click=move |ev| handlers::follow_anchor(page, &ev, &click_href)
                    >
                        {*label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <header class="site-header">
            <a href="#inicio" class="logo" on:click=move |ev| handlers::follow_anchor(page, &ev, "#inicio")>
                "Receita"
            </a>
            <button
                class="hamburger"
                class:open=is_open
                aria-label="Abrir menu"
                aria-controls="nav-menu"
                aria-expanded=move || nav.with(|n| n.aria_expanded())
                on:click=move |_| handlers::toggle_nav(page)
            >
                <span></span>
                <span></span>
                <span></span>
            </button>
            <nav id="nav-menu" class="nav-menu" class:open=is_open>
                <ul>{links}</ul>
            </nav>
        </header>
    }
}
