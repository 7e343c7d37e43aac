//! Toast notifications.

use leptos::prelude::*;
use leptos::task::spawn_local;
use receita::TransientNotice;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A single toast message.
#[derive(Debug, Clone)]
pub struct ToastMessage {
    pub id: usize,
    pub notice: TransientNotice,
}

static TOAST_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn next_toast_id() -> usize {
    TOAST_COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Show a toast that dismisses itself after `duration_ms`.
pub fn show_toast(
    toasts: RwSignal<Vec<ToastMessage>>,
    message: &str,
    duration_ms: u32,
) {
    let id = next_toast_id();

    toasts.update(|t| {
        t.push(ToastMessage {
            id,
            notice: TransientNotice::new(message, js_sys::Date::now(), duration_ms),
        });
    });

    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(duration_ms).await;
        let now = js_sys::Date::now();
        toasts.update(|t| t.retain(|m| m.id != id && m.notice.is_visible(now)));
    });
}

#[component]
pub fn ToastContainer(
    toasts: Signal<Vec<ToastMessage>>,
    #[prop(into)] on_dismiss: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="toast-container" role="status" aria-live="polite">
            {move || toasts.get().into_iter().map(|toast| {
                let id = toast.id;
                view! {
                    <div class="toast">
                        <span class="toast-message">{toast.notice.message}</span>
                        <button
                            class="toast-dismiss"
                            aria-label="Fechar aviso"
                            on:click=move |_| on_dismiss.run(id)
                        >
                            "×"
                        </button>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
