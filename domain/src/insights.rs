//! Rotating insight tips on the main screen.
//!
//! The frontend advances the carousel from an interval timer. The carousel
//! shares nothing with the ledger or the navigator.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InsightCarousel {
    insights: Vec<String>,
    index: usize,
}

impl InsightCarousel {
    pub fn new(insights: Vec<String>) -> Self {
        Self { insights, index: 0 }
    }

    pub fn current(&self) -> Option<&str> {
        self.insights.get(self.index).map(String::as_str)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.insights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.insights.is_empty()
    }

    /// Step to the next insight, wrapping at the end
    pub fn advance(&mut self) {
        if !self.insights.is_empty() {
            self.index = (self.index + 1) % self.insights.len();
        }
    }

    /// Jump to a specific insight, e.g. from a dot indicator. Out of range is ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.insights.len() {
            self.index = index;
        }
    }
}
