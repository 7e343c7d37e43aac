//! Keyboard focus containment for open dialogs.

use std::cell::RefCell;

use tracing::debug;

use crate::Result;

/// CSS selector for elements that can take part in a focus trap.
pub const FOCUSABLE_SELECTOR: &str =
    "a[href], button, textarea, input, select, [tabindex]:not([tabindex=\"-1\"])";

/// What the page knows about one element when deciding whether it can hold focus.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FocusCandidate {
    /// Lower-case tag name
    pub tag: String,
    pub has_href: bool,
    pub disabled: bool,
    /// Parsed `tabindex` attribute, if any
    pub tab_index: Option<i32>,
    /// Whether the element currently takes up layout space
    pub rendered: bool,
}

impl FocusCandidate {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            rendered: true,
            ..Self::default()
        }
    }

    pub fn is_focusable(&self) -> bool {
        if self.disabled || !self.rendered {
            return false;
        }
        if let Some(index) = self.tab_index {
            return index >= 0;
        }
        match self.tag.as_str() {
            "a" => self.has_href,
            "button" | "textarea" | "input" | "select" => true,
            _ => false,
        }
    }
}

/// Abstracts document focus so controllers can save and restore it.
pub trait FocusHost {
    type Handle: Clone + PartialEq;

    /// Element that currently has focus, if any.
    fn active_element(&self) -> Option<Self::Handle>;

    /// Move focus to `target`. Fails with `FocusLost` when the element is
    /// gone from the document.
    fn focus(&self, target: &Self::Handle) -> Result<()>;
}

/// Queues focus moves instead of performing them.
///
/// Moving focus in a browser dispatches `focusin` synchronously, and those
/// listeners read controller state. Controllers therefore open and close
/// against a `DeferredFocus`, and the caller calls [`DeferredFocus::apply`]
/// once it no longer holds the controller.
pub struct DeferredFocus<'a, F: FocusHost> {
    host: &'a F,
    pending: RefCell<Option<F::Handle>>,
}

impl<'a, F: FocusHost> DeferredFocus<'a, F> {
    pub fn new(host: &'a F) -> Self {
        Self {
            host,
            pending: RefCell::new(None),
        }
    }

    /// The element the next `apply` will focus.
    pub fn pending(&self) -> Option<F::Handle> {
        self.pending.borrow().clone()
    }

    /// Perform the last queued move. Returns the element that now has focus.
    pub fn apply(self) -> Option<F::Handle> {
        let target = self.pending.into_inner()?;
        match self.host.focus(&target) {
            Ok(()) => Some(target),
            Err(e) => {
                debug!("Deferred focus dropped: {}", e);
                None
            }
        }
    }
}

impl<F: FocusHost> FocusHost for DeferredFocus<'_, F> {
    type Handle = F::Handle;

    fn active_element(&self) -> Option<F::Handle> {
        self.host.active_element()
    }

    fn focus(&self, target: &F::Handle) -> Result<()> {
        *self.pending.borrow_mut() = Some(target.clone());
        Ok(())
    }
}

/// Where focus should go in response to a Tab press.
#[derive(Debug, Clone, PartialEq)]
pub enum TabMove<H> {
    /// Leave the browser's default behaviour alone
    Default,
    /// Suppress the default and focus this element instead
    Wrap(H),
}

/// First and last focusable elements of a dialog panel.
#[derive(Debug, Clone, PartialEq)]
pub struct FocusTrap<H> {
    first: H,
    last: H,
}

impl<H: Clone + PartialEq> FocusTrap<H> {
    /// Build a trap over the panel's descendants in document order.
    /// Returns `None` when nothing in the panel can take focus.
    pub fn from_candidates(candidates: Vec<(H, FocusCandidate)>) -> Option<Self> {
        let mut focusable = candidates
            .into_iter()
            .filter(|(_, c)| c.is_focusable())
            .map(|(h, _)| h);
        let first = focusable.next()?;
        let last = focusable.last().unwrap_or_else(|| first.clone());
        Some(Self { first, last })
    }

    pub fn first(&self) -> &H {
        &self.first
    }

    pub fn last(&self) -> &H {
        &self.last
    }

    /// Tab on the last element wraps to the first, Shift+Tab on the first
    /// wraps to the last. Anything else moves normally.
    pub fn on_tab(&self, shift: bool, active: Option<&H>) -> TabMove<H> {
        match (shift, active) {
            (true, Some(a)) if *a == self.first => TabMove::Wrap(self.last.clone()),
            (false, Some(a)) if *a == self.last => TabMove::Wrap(self.first.clone()),
            _ => TabMove::Default,
        }
    }
}
