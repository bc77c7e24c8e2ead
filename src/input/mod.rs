pub mod drag;
pub mod gesture;
pub mod keys;
pub mod swipe;

pub use drag::DragAdapter;
pub use keys::{Key, KeyAdapter, KeyDisposition};
pub use swipe::SwipeAdapter;

/// On-screen affordances that can be clicked.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Control {
    Previous,
    Next,
    Print,
    Indicator(usize), // 1-based slide number
}

/// Host-agnostic input, already translated from the windowing layer.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum InputEvent {
    Key(Key),
    TouchStart { x: f32 },
    TouchEnd { x: f32 },
    MouseDown { x: f32, inside_slide: bool },
    MouseUp { x: f32 },
    Click(Control),
}
