pub mod help_popup;
pub mod input_box;
pub mod response_view;
pub mod status_bar;

use ratatui::{layout::Rect, Frame};
use crate::tui::{Event, Theme};

pub use help_popup::HelpPopup;
pub use input_box::InputBox;
pub use response_view::ResponseView;
pub use status_bar::{KeyHint, StatusBar};

/// Base trait for all TUI components
pub trait Component {
    /// Render the component
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme);

    /// Handle input events
    fn handle_event(&mut self, event: &Event) -> bool;

    /// Advance animations by one tick
    fn tick(&mut self) {}
}

/// Whether the cell at (`column`, `row`) lies inside `area`.
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
