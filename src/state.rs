use crate::errors::{DeckError, Result};

/// Position inside a fixed-length deck.
///
/// `current` is 1-based and always satisfies `1 <= current <= total`.
/// `total` never changes after construction.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct DeckState {
    current: usize,
    total: usize,
}

impl DeckState {
    pub fn new(total: usize) -> Result<Self> {
        if total == 0 {
            return Err(DeckError::EmptyDeck);
        }
        Ok(Self { current: 1, total })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn at_first(&self) -> bool {
        self.current == 1
    }

    pub fn at_last(&self) -> bool {
        self.current == self.total
    }

    pub fn contains(&self, slide: usize) -> bool {
        (1..=self.total).contains(&slide)
    }

    pub(crate) fn advance(&mut self) -> bool {
        if self.current < self.total {
            self.current += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn retreat(&mut self) -> bool {
        if self.current > 1 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn jump(&mut self, slide: usize) -> bool {
        if self.contains(slide) {
            self.current = slide;
            true
        } else {
            false
        }
    }
}

/// Everything the host needs to draw the deck, derived from a [`DeckState`].
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Frame {
    pub slides: Vec<bool>,
    pub indicators: Vec<bool>,
    pub counter: usize,
    pub total: usize,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl Frame {
    pub fn from_state(state: &DeckState) -> Self {
        let active: Vec<bool> = (1..=state.total()).map(|n| n == state.current()).collect();
        Self {
            indicators: active.clone(),
            slides: active,
            counter: state.current(),
            total: state.total(),
            prev_disabled: state.at_first(),
            next_disabled: state.at_last(),
        }
    }

    /// Zero-based index of the active slide.
    pub fn active_slide(&self) -> usize {
        self.counter - 1
    }

    pub fn counter_text(&self) -> String {
        format!("{} / {}", self.counter, self.total)
    }
}
