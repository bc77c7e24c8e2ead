use tracing::debug;
use crate::errors::Result;
use crate::state::{DeckState, Frame};

/// Navigation calls available to input adapters.
///
/// Every method returns whether the deck actually moved. Out-of-range
/// requests are silently ignored.
pub trait Navigate {
    fn next(&mut self) -> bool;
    fn previous(&mut self) -> bool;
    fn go_to(&mut self, slide: usize) -> bool;
    fn total(&self) -> usize;
}

/// Receives the derived view after every change of position.
pub trait Presenter {
    fn present(&mut self, frame: &Frame);
}

/// Keeps the most recent frame so the host can draw it every tick.
#[derive(Debug, Default)]
pub struct RetainedView {
    frame: Option<Frame>,
}

impl RetainedView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }
}

impl Presenter for RetainedView {
    fn present(&mut self, frame: &Frame) {
        self.frame = Some(frame.clone());
    }
}

pub struct NavigationController<P: Presenter = RetainedView> {
    state: DeckState,
    presenter: P,
}

impl<P: Presenter> NavigationController<P> {
    /// Creates a controller on slide 1 and renders the initial frame.
    pub fn new(total: usize, presenter: P) -> Result<Self> {
        let mut controller = Self {
            state: DeckState::new(total)?,
            presenter,
        };
        controller.render();
        Ok(controller)
    }

    pub fn current(&self) -> usize {
        self.state.current()
    }

    pub fn state(&self) -> &DeckState {
        &self.state
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    fn render(&mut self) {
        let frame = Frame::from_state(&self.state);
        self.presenter.present(&frame);
    }

    fn settle(&mut self, moved: bool) -> bool {
        if moved {
            debug!(current = self.state.current(), total = self.state.total(), "slide changed");
            self.render();
        }
        moved
    }
}

impl<P: Presenter> Navigate for NavigationController<P> {
    fn next(&mut self) -> bool {
        let moved = self.state.advance();
        self.settle(moved)
    }

    fn previous(&mut self) -> bool {
        let moved = self.state.retreat();
        self.settle(moved)
    }

    fn go_to(&mut self, slide: usize) -> bool {
        let moved = self.state.jump(slide);
        self.settle(moved)
    }

    fn total(&self) -> usize {
        self.state.total()
    }
}
