//! Browser clipboard and Web Share bindings.
//!
//! Both APIs are looked up at call time. When the browser lacks one, the
//! matching constructor returns `Capability::Unavailable` and the core falls
//! back (select-and-copy, or the fallback share panel).

use async_trait::async_trait;
use receita::{
    Capability, ClipboardWriter, LegacyCopy, ReceitaError, Result, SharePayload, ShareTarget,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    /// `navigator`, seen through the members web-sys keeps behind unstable flags.
    #[wasm_bindgen(extends = js_sys::Object)]
    type SharingNavigator;

    #[wasm_bindgen(method, getter)]
    fn clipboard(this: &SharingNavigator) -> Option<AsyncClipboard>;

    #[wasm_bindgen(method, catch)]
    fn share(this: &SharingNavigator, data: &JsValue) -> std::result::Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(extends = js_sys::Object)]
    type AsyncClipboard;

    #[wasm_bindgen(method, catch, js_name = writeText)]
    fn write_text(this: &AsyncClipboard, text: &str) -> std::result::Result<js_sys::Promise, JsValue>;
}

fn navigator() -> Option<SharingNavigator> {
    web_sys::window().map(|w| w.navigator().unchecked_into())
}

fn rejected(e: JsValue) -> ReceitaError {
    ReceitaError::CapabilityRejected(format!("{:?}", e))
}

/// `navigator.clipboard`.
pub struct WebClipboard(AsyncClipboard);

/// The async clipboard, if this browser (and context) exposes one.
pub fn clipboard() -> Capability<WebClipboard> {
    Capability::from_option(navigator().and_then(|n| n.clipboard()).map(WebClipboard))
}

#[async_trait(?Send)]
impl ClipboardWriter for WebClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        let promise = self.0.write_text(text).map_err(rejected)?;
        JsFuture::from(promise).await.map_err(rejected)?;
        Ok(())
    }
}

/// Hidden-textarea `document.execCommand("copy")`.
pub struct ExecCommandCopy;

impl LegacyCopy for ExecCommandCopy {
    fn copy(&self, text: &str) -> Result<()> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(ReceitaError::CapabilityUnavailable("document"))?;
        let body = document
            .body()
            .ok_or(ReceitaError::CapabilityUnavailable("document.body"))?;

        let textarea: web_sys::HtmlTextAreaElement = document
            .create_element("textarea")
            .map_err(rejected)?
            .unchecked_into();
        textarea.set_value(text);
        let _ = textarea.set_attribute("readonly", "");
        let style = textarea.style();
        let _ = style.set_property("position", "fixed");
        let _ = style.set_property("opacity", "0");
        body.append_child(&textarea).map_err(rejected)?;
        textarea.select();

        let copied = document.unchecked_ref::<web_sys::HtmlDocument>().exec_command("copy");
        textarea.remove();

        match copied {
            Ok(true) => Ok(()),
            Ok(false) => Err(ReceitaError::CapabilityRejected(
                "execCommand(\"copy\") returned false".to_string(),
            )),
            Err(e) => Err(rejected(e)),
        }
    }
}

/// `navigator.share`.
pub struct WebShare(SharingNavigator);

/// Check if the browser has a Web Share implementation.
pub fn is_share_supported() -> bool {
    web_sys::window()
        .and_then(|w| js_sys::Reflect::get(&w.navigator(), &"share".into()).ok())
        .map(|v| v.is_function())
        .unwrap_or(false)
}

/// The native share sheet, if this browser has one.
pub fn share_target() -> Capability<WebShare> {
    if !is_share_supported() {
        return Capability::Unavailable;
    }
    Capability::from_option(navigator().map(WebShare))
}

#[async_trait(?Send)]
impl ShareTarget for WebShare {
    async fn share(&self, payload: &SharePayload) -> Result<()> {
        let data = js_sys::Object::new();
        js_sys::Reflect::set(&data, &"title".into(), &payload.title.as_str().into())
            .map_err(rejected)?;
        js_sys::Reflect::set(&data, &"text".into(), &payload.text.as_str().into())
            .map_err(rejected)?;

        let promise = self.0.share(&data).map_err(rejected)?;
        JsFuture::from(promise).await.map_err(rejected)?;
        Ok(())
    }
}

/// Blocking notice.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
