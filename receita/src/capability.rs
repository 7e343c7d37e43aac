//! Browser capabilities the sharing flows depend on.
//!
//! Clipboard and Web Share may be missing from a browser, so each is injected
//! as a [`Capability`]: either a native implementation or `Unavailable`.
//! Both flows fall back rather than fail.

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};

use crate::Result;

/// A browser capability that may not exist on this platform.
#[derive(Debug, Clone)]
pub enum Capability<T> {
    Native(T),
    Unavailable,
}

impl<T> Capability<T> {
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Capability::Native(v),
            None => Capability::Unavailable,
        }
    }
}

/// Asynchronous clipboard write (`navigator.clipboard.writeText`).
#[async_trait(?Send)]
pub trait ClipboardWriter {
    async fn write_text(&self, text: &str) -> Result<()>;
}

/// Synchronous select-and-copy fallback (`document.execCommand("copy")`).
pub trait LegacyCopy {
    fn copy(&self, text: &str) -> Result<()>;
}

/// Native share sheet (`navigator.share`). Rejects when the user cancels.
#[async_trait(?Send)]
pub trait ShareTarget {
    async fn share(&self, payload: &SharePayload) -> Result<()>;
}

/// What gets handed to the share sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
}

impl SharePayload {
    /// Title, blank line, recipe text. Just the title when there is no text.
    pub fn new(title: &str, plain_text: &str) -> Self {
        let text = if plain_text.is_empty() {
            title.to_string()
        } else {
            format!("{}\n\n{}", title, plain_text)
        };
        Self {
            title: title.to_string(),
            text,
        }
    }
}

/// How a copy request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Written through the async clipboard
    Copied,
    /// Async clipboard failed or was missing; select-and-copy worked
    CopiedLegacy,
    /// Nothing worked; the user has to copy by hand
    Failed,
    /// There was nothing to copy
    Empty,
}

impl CopyOutcome {
    pub fn succeeded(self) -> bool {
        matches!(self, CopyOutcome::Copied | CopyOutcome::CopiedLegacy)
    }
}

/// How a share request ended.
#[derive(Debug, Clone, PartialEq)]
pub enum ShareOutcome {
    Shared,
    /// Native share missing or rejected; show the fallback panel with this text
    Fallback(String),
}

/// Copy `text`, trying the async clipboard first and select-and-copy second.
pub async fn copy_with_fallback<C, L>(
    clipboard: &Capability<C>,
    legacy: &L,
    text: &str,
) -> CopyOutcome
where
    C: ClipboardWriter,
    L: LegacyCopy,
{
    if text.is_empty() {
        return CopyOutcome::Empty;
    }

    if let Capability::Native(writer) = clipboard {
        match writer.write_text(text).await {
            Ok(()) => return CopyOutcome::Copied,
            Err(e) => warn!("Clipboard write failed, trying legacy copy: {}", e),
        }
    } else {
        debug!("Clipboard API unavailable, using legacy copy");
    }

    match legacy.copy(text) {
        Ok(()) => CopyOutcome::CopiedLegacy,
        Err(e) => {
            warn!("Legacy copy failed: {}", e);
            CopyOutcome::Failed
        }
    }
}

/// Offer `payload` to the native share sheet, or route it to the fallback panel.
pub async fn share_or_fallback<S: ShareTarget>(
    target: &Capability<S>,
    payload: &SharePayload,
) -> ShareOutcome {
    let Capability::Native(target) = target else {
        debug!("Web Share unavailable, opening fallback panel");
        return ShareOutcome::Fallback(payload.text.clone());
    };

    match target.share(payload).await {
        Ok(()) => ShareOutcome::Shared,
        Err(e) => {
            debug!("Share cancelled or failed, opening fallback panel: {}", e);
            ShareOutcome::Fallback(payload.text.clone())
        }
    }
}
