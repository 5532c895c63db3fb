use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_input::{backend::crossterm::EventHandler, Input, InputRequest};

use crate::chat::keys::{self, KeyAction};
use crate::tui::{components::Component, Event, Theme};

/// Multi-line prompt editor.
///
/// Line breaks live in the value itself; the box scrolls so the cursor stays
/// in view.
#[derive(Debug, Clone)]
pub struct InputBox {
    input: Input,
    is_focused: bool,
    is_enabled: bool,
    placeholder: String,
}

impl InputBox {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            input: Input::default(),
            is_focused: false,
            is_enabled: true,
            placeholder: placeholder.into(),
        }
    }

    pub fn focus(&mut self) {
        self.is_focused = true;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.is_enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.input = Input::new(value.into());
    }

    pub fn clear(&mut self) {
        self.input.reset();
    }

    pub fn insert_newline(&mut self) -> bool {
        if !self.is_enabled {
            return false;
        }
        self.input.handle(InputRequest::InsertChar('\n'));
        true
    }

    /// Applies an editing key. Returns `false` when the box is disabled.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if !self.is_enabled {
            return false;
        }
        self.input.handle_event(&crossterm::event::Event::Key(key));
        true
    }

    /// Cursor as (line, column), both in characters.
    pub fn cursor_position(&self) -> (usize, usize) {
        let before: String = self.input.value().chars().take(self.input.cursor()).collect();
        let line = before.matches('\n').count();
        let column = before
            .rsplit('\n')
            .next()
            .map(|tail| tail.chars().count())
            .unwrap_or(0);
        (line, column)
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let border_style = if !self.is_enabled {
            theme.disabled()
        } else if self.is_focused {
            theme.accent()
        } else {
            theme.border()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Prompt ");

        let text_style = if self.is_enabled {
            theme.normal()
        } else {
            theme.disabled()
        };

        if self.input.value().is_empty() {
            let paragraph = Paragraph::new(Line::from(Span::styled(
                self.placeholder.as_str(),
                theme.secondary(),
            )))
            .block(block)
            .style(text_style);
            frame.render_widget(paragraph, area);
        } else {
            let inner_width = area.width.saturating_sub(2) as usize;
            let inner_height = area.height.saturating_sub(2) as usize;
            let (line, column) = self.cursor_position();

            let scroll_x = if column >= inner_width {
                column.saturating_sub(inner_width) + 1
            } else {
                0
            };
            let scroll_y = if line >= inner_height {
                line.saturating_sub(inner_height) + 1
            } else {
                0
            };

            let lines: Vec<Line> = self
                .input
                .value()
                .split('\n')
                .map(|l| Line::from(l.to_string()))
                .collect();

            let paragraph = Paragraph::new(lines)
                .block(block)
                .style(text_style)
                .scroll((scroll_y as u16, scroll_x as u16));
            frame.render_widget(paragraph, area);

            if self.is_focused && self.is_enabled {
                let cursor_x = area.x + 1 + (column - scroll_x) as u16;
                let cursor_y = area.y + 1 + (line - scroll_y) as u16;
                if cursor_x < area.x + area.width.saturating_sub(1)
                    && cursor_y < area.y + area.height.saturating_sub(1)
                {
                    frame.set_cursor(cursor_x, cursor_y);
                }
            }
        }
    }

    fn handle_event(&mut self, event: &Event) -> bool {
        if !self.is_focused {
            return false;
        }

        match event {
            Event::Key(key) => match keys::classify(key) {
                KeyAction::Edit => self.handle_key(*key),
                KeyAction::InsertNewline => self.insert_newline(),
                KeyAction::Submit | KeyAction::Ignore => false,
            },
            _ => false,
        }
    }
}
