pub mod chat;
pub mod guide;
pub mod home;
pub mod week1;

pub use chat::ChatScreen;
pub use guide::GuideScreen;
pub use home::HomeScreen;
pub use week1::Week1Screen;

use crate::chat::AskTicket;
use crate::tui::components::KeyHint;
use crate::tui::routes::Route;

/// What a screen asks the app to do after handling an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenAction {
    None,
    Navigate(Route),
    /// Run the call for an accepted chat submission.
    Ask(AskTicket),
}

pub const GLOBAL_HINTS: &[KeyHint] = &[KeyHint::new("F1", "Help"), KeyHint::new("Ctrl+Q", "Quit")];
