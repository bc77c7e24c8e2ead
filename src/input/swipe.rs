use crate::input::gesture::{Direction, classify};
use crate::navigation::Navigate;

/// Turns a touch start/end pair into a slide change.
///
/// A touch end without a matching start measures from the last recorded
/// start (0 before any touch).
#[derive(Debug, Default)]
pub struct SwipeAdapter {
    start_x: f32,
}

impl SwipeAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn touch_start(&mut self, x: f32) {
        self.start_x = x;
    }

    pub fn touch_end(&mut self, x: f32, nav: &mut impl Navigate) {
        match classify(self.start_x, x) {
            Some(Direction::Forward) => {
                nav.next();
            }
            Some(Direction::Backward) => {
                nav.previous();
            }
            None => {}
        }
    }
}
