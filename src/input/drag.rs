use crate::input::gesture::{Direction, classify};
use crate::navigation::Navigate;

/// Turns a mouse drag across a slide into a slide change.
///
/// The drag is only armed when the button goes down inside a slide panel.
/// Every button release disarms it.
#[derive(Debug, Default)]
pub struct DragAdapter {
    start_x: f32,
    armed: bool,
}

impl DragAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn mouse_down(&mut self, x: f32, inside_slide: bool) {
        if inside_slide {
            self.start_x = x;
            self.armed = true;
        }
    }

    pub fn mouse_up(&mut self, x: f32, nav: &mut impl Navigate) {
        if self.armed {
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
        self.armed = false;
    }
}
