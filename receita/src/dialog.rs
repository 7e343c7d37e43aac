//! Shared plumbing for the recipe modal and the fallback share panel.

use tracing::debug;

use crate::focus::{FocusCandidate, FocusHost, FocusTrap, TabMove};

/// The DOM side of a dialog: something that can be filled, revealed and hidden.
pub trait DialogSurface {
    type Handle: Clone + PartialEq;
    type Content: ?Sized;

    /// Write `content` into the dialog and make it visible.
    fn show(&self, content: &Self::Content);

    /// Hide the dialog and clear what it displays.
    fn hide(&self);

    /// Element that receives focus when the dialog opens.
    fn initial_focus(&self) -> Self::Handle;

    /// Descendants of the dialog panel in document order.
    fn focusable_descendants(&self) -> Vec<(Self::Handle, FocusCandidate)>;
}

/// What a dialog wants done with a key press.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyAction<H> {
    Ignore,
    Close,
    /// Suppress the default and focus this element
    Focus(H),
}

/// Focus bookkeeping for one open dialog: where focus came from and the
/// trap keeping it inside.
#[derive(Debug, Clone)]
pub(crate) struct FocusScope<H> {
    previously_focused: Option<H>,
    trap: Option<FocusTrap<H>>,
}

impl<H: Clone + PartialEq> FocusScope<H> {
    /// Remember the current focus, move it into the dialog and install the trap.
    /// `surface` must already be visible so rendered-ness is accurate.
    pub(crate) fn enter<S, F>(previously_focused: Option<H>, surface: &S, focus: &F) -> Self
    where
        S: DialogSurface<Handle = H> + ?Sized,
        F: FocusHost<Handle = H>,
    {
        if let Err(e) = focus.focus(&surface.initial_focus()) {
            debug!("Could not focus dialog control: {}", e);
        }
        let trap = FocusTrap::from_candidates(surface.focusable_descendants());
        if trap.is_none() {
            debug!("Dialog has no focusable elements, focus trap not installed");
        }
        Self {
            previously_focused,
            trap,
        }
    }

    pub(crate) fn previously_focused(&self) -> Option<&H> {
        self.previously_focused.as_ref()
    }

    /// Drop the trap and hand focus back. A vanished element is ignored.
    pub(crate) fn exit<F: FocusHost<Handle = H>>(self, focus: &F) {
        if let Some(prev) = self.previously_focused {
            if let Err(e) = focus.focus(&prev) {
                debug!("Focus not restored: {}", e);
            }
        }
    }

    pub(crate) fn on_key(&self, key: &str, shift: bool, active: Option<&H>) -> KeyAction<H> {
        match key {
            "Escape" | "Esc" => KeyAction::Close,
            "Tab" => match self.trap.as_ref().map(|t| t.on_tab(shift, active)) {
                Some(TabMove::Wrap(target)) => KeyAction::Focus(target),
                _ => KeyAction::Ignore,
            },
            _ => KeyAction::Ignore,
        }
    }
}
