//! Highlights the nav link of the section currently under the header.

/// A page section and its top offset in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub top: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollSpy {
    header_offset: f64,
    active: Option<String>,
}

impl ScrollSpy {
    pub fn new(header_offset: f64) -> Self {
        Self {
            header_offset,
            active: None,
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Recompute the active section for `scroll_y`: the last section in
    /// document order whose top, less the header offset, is at or above the
    /// scroll position. Returns true when the active section changed.
    pub fn update(&mut self, scroll_y: f64, sections: &[SectionOffset]) -> bool {
        let next = sections
            .iter()
            .rev()
            .find(|s| s.top - self.header_offset <= scroll_y)
            .map(|s| s.id.clone());
        if next == self.active {
            return false;
        }
        self.active = next;
        true
    }

    /// Whether a nav link (`#id`) matches the active section.
    pub fn is_link_active(&self, href: &str) -> bool {
        match (self.active(), crate::nav::fragment_target(href)) {
            (Some(active), Some(target)) => active == target,
            _ => false,
        }
    }
}
