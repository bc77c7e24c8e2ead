//! Keyboard, touch and mouse driven slide deck.
//!
//! The navigation core (`state`, `navigation`, `input`, `deck`, `host`) has no
//! windowing dependency. `layout`, `pointer`, `slide`, `texture_loader`, `window` and
//! `printer` host it in a raylib window.

pub mod config;
pub mod constants;
pub mod deck;
pub mod errors;
pub mod host;
pub mod input;
pub mod layout;
pub mod navigation;
pub mod pointer;
pub mod printer;
pub mod slide;
pub mod state;
pub mod texture_loader;
pub mod window;

pub use config::Config;
pub use deck::Deck;
pub use errors::{DeckError, Result};
pub use host::HostControls;
pub use input::{Control, InputEvent, Key, KeyDisposition};
pub use navigation::{Navigate, NavigationController, Presenter, RetainedView};
pub use state::{DeckState, Frame};
