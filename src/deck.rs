use crate::errors::Result;
use crate::host::HostControls;
use crate::input::{Control, DragAdapter, InputEvent, KeyAdapter, KeyDisposition, SwipeAdapter};
use crate::navigation::{Navigate, NavigationController, Presenter, RetainedView};

/// One deck: the navigation controller plus the adapters feeding it.
pub struct Deck<P: Presenter = RetainedView> {
    controller: NavigationController<P>,
    keys: KeyAdapter,
    swipe: SwipeAdapter,
    drag: DragAdapter,
}

impl<P: Presenter> Deck<P> {
    pub fn new(total: usize, presenter: P) -> Result<Self> {
        Ok(Self {
            controller: NavigationController::new(total, presenter)?,
            keys: KeyAdapter::new(),
            swipe: SwipeAdapter::new(),
            drag: DragAdapter::new(),
        })
    }

    pub fn controller(&self) -> &NavigationController<P> {
        &self.controller
    }

    /// Direct access for manual `next`/`previous`/`go_to` calls.
    pub fn controller_mut(&mut self) -> &mut NavigationController<P> {
        &mut self.controller
    }

    pub fn dispatch(&mut self, event: InputEvent, host: &mut impl HostControls) -> KeyDisposition {
        match event {
            InputEvent::Key(key) => return self.keys.handle(key, &mut self.controller, host),
            InputEvent::TouchStart { x } => self.swipe.touch_start(x),
            InputEvent::TouchEnd { x } => self.swipe.touch_end(x, &mut self.controller),
            InputEvent::MouseDown { x, inside_slide } => self.drag.mouse_down(x, inside_slide),
            InputEvent::MouseUp { x } => self.drag.mouse_up(x, &mut self.controller),
            InputEvent::Click(Control::Previous) => {
                self.controller.previous();
            }
            InputEvent::Click(Control::Next) => {
                self.controller.next();
            }
            InputEvent::Click(Control::Indicator(slide)) => {
                self.controller.go_to(slide);
            }
            InputEvent::Click(Control::Print) => host.print(),
        }
        KeyDisposition::Propagate
    }
}
