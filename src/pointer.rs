use raylib::prelude::Vector2;
use crate::input::{Control, InputEvent};
use crate::layout::Layout;
use crate::state::Frame;

/// Mouse and touch readings for one tick.
#[derive(Debug, Clone, Copy)]
pub struct PointerSample {
    pub mouse: Vector2,
    pub pressed: bool,
    pub released: bool,
    pub touch_count: u32,
    pub touch_x: f32,
}

fn control_enabled(control: Control, frame: &Frame) -> bool {
    match control {
        Control::Previous => !frame.prev_disabled,
        Control::Next => !frame.next_disabled,
        _ => true,
    }
}

/// Turns per-tick pointer readings into deck events.
///
/// A press on a control only becomes a `Click` when released over the same
/// enabled control. Any other press is a drag start, and its release a drag end.
#[derive(Debug, Default)]
pub struct PointerTracker {
    touch_enabled: bool,
    touching: bool,
    last_touch_x: f32,
    pressed_control: Option<Control>,
}

impl PointerTracker {
    pub fn new(touch_enabled: bool) -> Self {
        Self { touch_enabled, ..Self::default() }
    }

    pub fn update(&mut self, sample: PointerSample, layout: &Layout, frame: &Frame) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let mouse = sample.mouse;

        if sample.pressed {
            match layout.hit_test(mouse) {
                Some(control) => self.pressed_control = Some(control),
                None => events.push(InputEvent::MouseDown { x: mouse.x, inside_slide: layout.in_slide_panel(mouse) }),
            }
        }
        if sample.released {
            match self.pressed_control.take() {
                Some(control) => {
                    if layout.hit_test(mouse) == Some(control) && control_enabled(control, frame) {
                        events.push(InputEvent::Click(control));
                    }
                }
                None => events.push(InputEvent::MouseUp { x: mouse.x }),
            }
        }

        if self.touch_enabled {
            if sample.touch_count > 0 {
                self.last_touch_x = sample.touch_x;
                if !self.touching {
                    self.touching = true;
                    events.push(InputEvent::TouchStart { x: self.last_touch_x });
                }
            } else if self.touching {
                self.touching = false;
                events.push(InputEvent::TouchEnd { x: self.last_touch_x });
            }
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DeckState;

    fn center(rect: &raylib::prelude::Rectangle) -> Vector2 {
        Vector2::new(rect.x + rect.width * 0.5, rect.y + rect.height * 0.5)
    }

    fn mouse(at: Vector2, pressed: bool, released: bool) -> PointerSample {
        PointerSample { mouse: at, pressed, released, touch_count: 0, touch_x: 0.0 }
    }

    fn touch(count: u32, x: f32) -> PointerSample {
        PointerSample { mouse: Vector2::new(0.0, 0.0), pressed: false, released: false, touch_count: count, touch_x: x }
    }

    fn setup() -> (Layout, Frame) {
        let mut state = DeckState::new(8).unwrap();
        state.jump(4);
        (Layout::new(1280.0, 720.0, 8), Frame::from_state(&state))
    }

    #[test]
    fn press_in_slide_starts_a_drag() {
        let (layout, frame) = setup();
        let mut tracker = PointerTracker::new(false);
        let events = tracker.update(mouse(Vector2::new(640.0, 300.0), true, false), &layout, &frame);
        assert_eq!(events, vec![InputEvent::MouseDown { x: 640.0, inside_slide: true }]);
    }

    #[test]
    fn drag_released_over_button_ends_the_drag() {
        let (layout, frame) = setup();
        let mut tracker = PointerTracker::new(false);
        tracker.update(mouse(Vector2::new(640.0, 300.0), true, false), &layout, &frame);
        let over_next = center(&layout.next_button);
        let events = tracker.update(mouse(over_next, false, true), &layout, &frame);
        assert_eq!(events, vec![InputEvent::MouseUp { x: over_next.x }]);
    }

    #[test]
    fn click_needs_release_on_same_control() {
        let (layout, frame) = setup();
        let mut tracker = PointerTracker::new(false);
        let on_next = center(&layout.next_button);

        assert!(tracker.update(mouse(on_next, true, false), &layout, &frame).is_empty());
        assert_eq!(tracker.update(mouse(on_next, false, true), &layout, &frame), vec![InputEvent::Click(Control::Next)]);

        tracker.update(mouse(on_next, true, false), &layout, &frame);
        let events = tracker.update(mouse(Vector2::new(640.0, 300.0), false, true), &layout, &frame);
        assert!(events.is_empty());
    }

    #[test]
    fn press_and_release_in_one_tick_clicks_a_dot() {
        let (layout, frame) = setup();
        let mut tracker = PointerTracker::new(false);
        let dot = layout.indicators[6];
        assert_eq!(tracker.update(mouse(dot, true, true), &layout, &frame), vec![InputEvent::Click(Control::Indicator(7))]);
    }

    #[test]
    fn disabled_button_does_not_click() {
        let layout = Layout::new(1280.0, 720.0, 8);
        let frame = Frame::from_state(&DeckState::new(8).unwrap());
        let mut tracker = PointerTracker::new(false);
        let on_prev = center(&layout.prev_button);
        tracker.update(mouse(on_prev, true, false), &layout, &frame);
        assert!(tracker.update(mouse(on_prev, false, true), &layout, &frame).is_empty());

        let on_print = center(&layout.print_button);
        tracker.update(mouse(on_print, true, false), &layout, &frame);
        assert_eq!(tracker.update(mouse(on_print, false, true), &layout, &frame), vec![InputEvent::Click(Control::Print)]);
    }

    #[test]
    fn touch_edges_use_last_seen_x() {
        let (layout, frame) = setup();
        let mut tracker = PointerTracker::new(true);
        assert_eq!(tracker.update(touch(1, 300.0), &layout, &frame), vec![InputEvent::TouchStart { x: 300.0 }]);
        assert!(tracker.update(touch(1, 250.0), &layout, &frame).is_empty());
        assert!(tracker.update(touch(2, 180.0), &layout, &frame).is_empty());
        assert_eq!(tracker.update(touch(0, 0.0), &layout, &frame), vec![InputEvent::TouchEnd { x: 180.0 }]);
        assert!(tracker.update(touch(0, 0.0), &layout, &frame).is_empty());
    }

    #[test]
    fn touch_is_ignored_unless_enabled() {
        let (layout, frame) = setup();
        let mut tracker = PointerTracker::new(false);
        assert!(tracker.update(touch(1, 300.0), &layout, &frame).is_empty());
        assert!(tracker.update(touch(0, 0.0), &layout, &frame).is_empty());
    }
}
