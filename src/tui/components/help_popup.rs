use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

use crate::tui::{components::Component, Event, Theme};

pub struct HelpPopup {
    is_visible: bool,
}

impl HelpPopup {
    pub fn new() -> Self {
        Self { is_visible: false }
    }

    pub fn hide(&mut self) {
        self.is_visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    pub fn toggle(&mut self) {
        self.is_visible = !self.is_visible;
    }

    fn get_help_content() -> Vec<(&'static str, &'static str)> {
        vec![
            ("Navigation", ""),
            ("  Ctrl/Alt+1", "Course overview"),
            ("  Ctrl/Alt+2", "Week 1"),
            ("  Ctrl/Alt+3", "Setup guide"),
            ("  Ctrl/Alt+4", "API integration guide"),
            ("  Ctrl/Alt+5", "Ollama chat"),
            ("  Escape", "Back to the previous screen"),
            ("", ""),
            ("Course", ""),
            ("  Up/Down", "Select a lesson"),
            ("  Enter", "Open the selected lesson"),
            ("", ""),
            ("Week 1", ""),
            ("  Left/Right, Enter", "Pick and open a page"),
            ("  s / a / c", "Setup, API integration, chat"),
            ("  Up/Down, PgUp/PgDn", "Scroll a guide"),
            ("", ""),
            ("Chat", ""),
            ("  Enter", "Ask"),
            ("  Shift/Alt+Enter", "New line in prompt"),
            ("  Ctrl+S / click Ask", "Ask"),
            ("  PgUp/PgDn", "Scroll the response"),
            ("", ""),
            ("General", ""),
            ("  F1 / Ctrl+H", "Show/hide this help"),
            ("  Ctrl+C / Ctrl+Q", "Quit application"),
        ]
    }

    fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}

impl Default for HelpPopup {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for HelpPopup {
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if !self.is_visible {
            return;
        }

        let popup_area = Self::centered_rect(60, 70, area);
        frame.render_widget(Clear, popup_area);

        let items: Vec<ListItem> = Self::get_help_content()
            .into_iter()
            .map(|(key, description)| {
                if key.is_empty() {
                    ListItem::new(Line::from(""))
                } else if description.is_empty() {
                    // Section header
                    ListItem::new(Line::from(Span::styled(
                        key,
                        theme.accent().add_modifier(Modifier::BOLD),
                    )))
                } else {
                    ListItem::new(Line::from(vec![
                        Span::styled(key, theme.highlight()),
                        Span::raw(": "),
                        Span::styled(description, theme.normal()),
                    ]))
                }
            })
            .collect();

        let help_list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.accent())
                    .title(" Help - Press F1 or Esc to close "),
            )
            .style(theme.normal());

        frame.render_widget(help_list, popup_area);
    }

    fn handle_event(&mut self, event: &Event) -> bool {
        if !self.is_visible {
            return false;
        }

        match event {
            Event::Key(key) => match (key.code, key.modifiers) {
                // Quit still works with the popup open
                (KeyCode::Char('c'), KeyModifiers::CONTROL)
                | (KeyCode::Char('q'), KeyModifiers::CONTROL) => false,
                (KeyCode::Esc, _) | (KeyCode::F(1), _) | (KeyCode::Char('q'), _) => {
                    self.hide();
                    true
                }
                (KeyCode::Char('h'), KeyModifiers::CONTROL) => {
                    self.hide();
                    true
                }
                _ => true, // Consume all events when visible
            },
            _ => false,
        }
    }
}
