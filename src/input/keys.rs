use crate::host::HostControls;
use crate::navigation::Navigate;

/// Keys the deck reacts to. Everything else arrives as `Other`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Key {
    ArrowRight,
    ArrowLeft,
    Space,
    Home,
    End,
    Escape,
    Other,
}

/// Whether the host should still run its own default handling for an event.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum KeyDisposition {
    PreventDefault,
    Propagate,
}

#[derive(Debug, Default)]
pub struct KeyAdapter;

impl KeyAdapter {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, key: Key, nav: &mut impl Navigate, host: &mut impl HostControls) -> KeyDisposition {
        match key {
            Key::ArrowRight | Key::Space => {
                nav.next();
                KeyDisposition::PreventDefault
            }
            Key::ArrowLeft => {
                nav.previous();
                KeyDisposition::PreventDefault
            }
            Key::Home => {
                nav.go_to(1);
                KeyDisposition::PreventDefault
            }
            Key::End => {
                let last = nav.total();
                nav.go_to(last);
                KeyDisposition::PreventDefault
            }
            Key::Escape => {
                host.toggle_fullscreen();
                KeyDisposition::Propagate
            }
            Key::Other => KeyDisposition::Propagate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::testing::FakeHost;
    use crate::navigation::testing::{NavCall, RecordingNavigator};

    fn press(key: Key) -> (Vec<NavCall>, FakeHost, KeyDisposition) {
        let mut nav = RecordingNavigator::new(8);
        let mut host = FakeHost::default();
        let disposition = KeyAdapter::new().handle(key, &mut nav, &mut host);
        (nav.calls, host, disposition)
    }

    #[test]
    fn right_arrow_and_space_advance() {
        for key in [Key::ArrowRight, Key::Space] {
            let (calls, _, disposition) = press(key);
            assert_eq!(calls, vec![NavCall::Next]);
            assert_eq!(disposition, KeyDisposition::PreventDefault);
        }
    }

    #[test]
    fn left_arrow_goes_back() {
        let (calls, _, disposition) = press(Key::ArrowLeft);
        assert_eq!(calls, vec![NavCall::Previous]);
        assert_eq!(disposition, KeyDisposition::PreventDefault);
    }

    #[test]
    fn home_and_end_jump_to_bounds() {
        assert_eq!(press(Key::Home).0, vec![NavCall::GoTo(1)]);
        assert_eq!(press(Key::End).0, vec![NavCall::GoTo(8)]);
    }

    #[test]
    fn escape_toggles_fullscreen_only() {
        let (calls, host, disposition) = press(Key::Escape);
        assert!(calls.is_empty());
        assert!(host.fullscreen);
        assert_eq!(disposition, KeyDisposition::Propagate);
    }

    #[test]
    fn unknown_key_is_ignored() {
        let (calls, host, disposition) = press(Key::Other);
        assert!(calls.is_empty());
        assert!(!host.fullscreen);
        assert_eq!(host.prints, 0);
        assert_eq!(disposition, KeyDisposition::Propagate);
    }
}
