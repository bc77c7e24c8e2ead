use tracing::debug;

/// Capabilities the deck delegates to whatever is hosting it.
///
/// Calls are fire-and-forget: the deck never waits for them to complete.
pub trait HostControls {
    fn enter_fullscreen(&mut self);
    fn exit_fullscreen(&mut self);
    fn is_fullscreen(&self) -> bool;
    fn print(&mut self);

    fn toggle_fullscreen(&mut self) {
        if self.is_fullscreen() {
            debug!("leaving fullscreen");
            self.exit_fullscreen();
        } else {
            debug!("entering fullscreen");
            self.enter_fullscreen();
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::HostControls;

    #[derive(Debug, Default)]
    pub struct FakeHost {
        pub fullscreen: bool,
        pub prints: usize,
    }

    impl HostControls for FakeHost {
        fn enter_fullscreen(&mut self) {
            self.fullscreen = true;
        }

        fn exit_fullscreen(&mut self) {
            self.fullscreen = false;
        }

        fn is_fullscreen(&self) -> bool {
            self.fullscreen
        }

        fn print(&mut self) {
            self.prints += 1;
        }
    }
}
