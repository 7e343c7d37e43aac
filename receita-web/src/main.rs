mod app;
mod catalog;
mod components;
mod dom;
mod handlers;
mod platform;

use tracing::info;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    info!("Starting receita-web");
    leptos::mount::mount_to_body(app::App);
}
