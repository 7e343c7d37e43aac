//! Hero banner with a rotating background and slide indicators.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use receita::HeroSlider;
use tracing::debug;

use crate::app::PageState;
use crate::handlers;

#[component]
pub fn Hero(page: PageState) -> impl IntoView {
    let slider = RwSignal::new(page.config.with_value(|c| {
        HeroSlider::new(c.hero_images.clone(), c.hero_interval_ms)
    }));

    let (len, period) = slider.with_untracked(|s| (s.len(), s.period_ms()));
    if len > 1 {
        debug!("Hero rotating {} images every {}ms", len, period);
        // The hero is part of the root view and never unmounts
        Interval::new(period, move || {
            slider.update(|s| {
                s.tick();
            });
        })
        .forget();
    }

    let background = move || {
        slider.with(|s| {
            s.current()
                .map(|src| format!("url(\"{}\")", src))
                .unwrap_or_default()
        })
    };

    let indicators = (0..len)
        .map(|i| {
            view! {
                <button
                    class="hero-indicator"
                    class:active=move || slider.with(|s| s.index() == i)
                    aria-label=format!("Imagem {}", i + 1)
                    on:click=move |_| {
                        slider.update(|s| {
                            s.jump_to(i);
                        });
                    }
                ></button>
            }
        })
        .collect_view();

    view! {
        <section id="inicio" class="hero" style:background-image=background>
            <div class="hero-overlay">
                <h1>"Feito em casa, com carinho"</h1>
                <p>"Bolos, pães e doces artesanais. Veja a receita de cada um."</p>
                <a
                    href="#produtos"
                    class="btn"
                    on:click=move |ev| handlers::follow_anchor(page, &ev, "#produtos")
                >
                    "Ver produtos"
                </a>
            </div>
            <div class="hero-indicators">{indicators}</div>
        </section>
    }
}
