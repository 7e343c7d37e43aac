//! Auto-rotating hero background.
//!
//! The slider only tracks the index; the page drives [`HeroSlider::tick`]
//! from a fixed-period interval. Jumping through an indicator changes the
//! index and leaves the interval alone.

#[derive(Debug, Clone, PartialEq)]
pub struct HeroSlider {
    images: Vec<String>,
    index: usize,
    period_ms: u32,
}

impl HeroSlider {
    pub fn new(images: Vec<String>, period_ms: u32) -> Self {
        Self {
            images,
            index: 0,
            period_ms,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    pub fn current(&self) -> Option<&str> {
        self.images.get(self.index).map(String::as_str)
    }

    /// Advance one slide, wrapping after the last.
    pub fn tick(&mut self) -> usize {
        if !self.images.is_empty() {
            self.index = (self.index + 1) % self.images.len();
        }
        self.index
    }

    /// Jump straight to `index`. Out-of-range indices are ignored.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            return false;
        }
        self.index = index;
        true
    }
}
