//! Hamburger navigation state and in-page anchor scrolling.

/// Open/closed state shared by the hamburger trigger and the nav container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu. Returns whether anything changed.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Value for the trigger's `aria-expanded` attribute.
    pub fn aria_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}

/// Section id a fragment link points at, e.g. `#receitas` -> `receitas`.
/// Bare `#` and non-fragment links yield `None`.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document scroll position that puts an element just below the fixed header.
///
/// `rect_top` is the element's viewport-relative top, `scroll_y` the current
/// document scroll.
pub fn anchor_scroll_top(rect_top: f64, scroll_y: f64, header_offset: f64) -> f64 {
    rect_top + scroll_y - header_offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_mirrors_aria_expanded() {
        let mut nav = NavMenu::default();
        assert_eq!(nav.aria_expanded(), "false");
        assert!(nav.toggle());
        assert_eq!(nav.aria_expanded(), "true");
        assert!(!nav.toggle());
        assert_eq!(nav.aria_expanded(), "false");
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut nav = NavMenu::default();
        nav.toggle();
        assert!(nav.close());
        assert!(!nav.close());
        assert!(!nav.is_open());
    }

    #[test]
    fn test_fragment_target() {
        assert_eq!(fragment_target("#receitas"), Some("receitas"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target("https://example.com"), None);
    }

    #[test]
    fn test_anchor_scroll_top() {
        assert_eq!(anchor_scroll_top(400.0, 1000.0, 70.0), 1330.0);
    }
}
