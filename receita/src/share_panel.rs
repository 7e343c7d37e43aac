//! Fallback share panel, shown when the native share sheet is missing or
//! the user dismissed it. Displays the share text in a selectable field.

use crate::capability::{copy_with_fallback, Capability, ClipboardWriter, CopyOutcome, LegacyCopy};
use crate::dialog::{DialogSurface, FocusScope, KeyAction};
use crate::focus::FocusHost;

/// Text shown by an open fallback panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareFallbackState {
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct ShareFallbackPanel<H> {
    state: Option<(ShareFallbackState, FocusScope<H>)>,
}

impl<H: Clone + PartialEq> Default for ShareFallbackPanel<H> {
    fn default() -> Self {
        Self { state: None }
    }
}

impl<H: Clone + PartialEq> ShareFallbackPanel<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.state.is_some()
    }

    pub fn text(&self) -> Option<&str> {
        self.state.as_ref().map(|(s, _)| s.text.as_str())
    }

    pub fn open<S, F>(&mut self, text: String, surface: &S, focus: &F)
    where
        S: DialogSurface<Handle = H, Content = str>,
        F: FocusHost<Handle = H>,
    {
        let previously_focused = match self.state.take() {
            Some((_, scope)) => scope.previously_focused().cloned(),
            None => focus.active_element(),
        };
        surface.show(text.as_str());
        let scope = FocusScope::enter(previously_focused, surface, focus);
        self.state = Some((ShareFallbackState { text }, scope));
    }

    /// Returns false if the panel was already closed.
    pub fn close<S, F>(&mut self, surface: &S, focus: &F) -> bool
    where
        S: DialogSurface<Handle = H, Content = str>,
        F: FocusHost<Handle = H>,
    {
        let Some((_, scope)) = self.state.take() else {
            return false;
        };
        surface.hide();
        scope.exit(focus);
        true
    }

    pub fn on_key(&self, key: &str, shift: bool, active: Option<&H>) -> KeyAction<H> {
        match &self.state {
            Some((_, scope)) => scope.on_key(key, shift, active),
            None => KeyAction::Ignore,
        }
    }

    pub async fn copy<C, L>(&self, clipboard: &Capability<C>, legacy: &L) -> CopyOutcome
    where
        C: ClipboardWriter,
        L: LegacyCopy,
    {
        copy_with_fallback(clipboard, legacy, self.text().unwrap_or_default()).await
    }
}
