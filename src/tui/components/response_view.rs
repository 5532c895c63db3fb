use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::chat::{ChatExchange, ExchangeStatus};
use crate::tui::{components::Component, Event, Theme};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Shows the outcome of the current exchange.
pub struct ResponseView {
    status: ExchangeStatus,
    response: Option<String>,
    error: Option<String>,
    spinner_frame: usize,
    scroll_offset: u16,
}

impl ResponseView {
    pub fn new() -> Self {
        Self {
            status: ExchangeStatus::Idle,
            response: None,
            error: None,
            spinner_frame: 0,
            scroll_offset: 0,
        }
    }

    /// Takes a snapshot of `exchange` for the next render.
    pub fn sync(&mut self, exchange: &ChatExchange) {
        if exchange.status != self.status {
            self.scroll_offset = 0;
        }
        self.status = exchange.status;
        self.response = exchange.response_text.clone();
        self.error = exchange.error_message.clone();
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    fn body(&self, theme: &Theme) -> Vec<Line<'_>> {
        match self.status {
            ExchangeStatus::Idle => vec![Line::from(Span::styled(
                "Type a prompt and press Enter to ask the local model.",
                theme.secondary(),
            ))],
            ExchangeStatus::Pending => vec![Line::from(vec![
                Span::styled(SPINNER_FRAMES[self.spinner_frame], theme.accent()),
                Span::raw(" "),
                Span::styled("Generating response...", theme.secondary()),
            ])],
            ExchangeStatus::Succeeded => self
                .response
                .as_deref()
                .unwrap_or_default()
                .lines()
                .map(|line| Line::from(Span::styled(line, theme.normal())))
                .collect(),
            ExchangeStatus::Failed => vec![Line::from(Span::styled(
                self.error.as_deref().unwrap_or_default(),
                theme.error(),
            ))],
        }
    }
}

impl Default for ResponseView {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ResponseView {
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let title_style = match self.status {
            ExchangeStatus::Failed => theme.error(),
            ExchangeStatus::Succeeded => theme.success(),
            _ => theme.border(),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(title_style)
            .title(" Response ");

        let alignment = if self.status.is_terminal() {
            Alignment::Left
        } else {
            Alignment::Center
        };

        let paragraph = Paragraph::new(self.body(theme))
            .block(block)
            .alignment(alignment)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset, 0));

        frame.render_widget(paragraph, area);
    }

    fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Key(key) => match key.code {
                KeyCode::PageUp => {
                    self.scroll_up();
                    true
                }
                KeyCode::PageDown => {
                    self.scroll_down();
                    true
                }
                _ => false,
            },
            _ => false,
        }
    }

    fn tick(&mut self) {
        if self.status.is_pending() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::FailureKind;

    #[test]
    fn test_sync_takes_snapshot() {
        let mut view = ResponseView::new();
        let exchange = ChatExchange {
            input_text: "hi".to_string(),
            status: ExchangeStatus::Failed,
            response_text: None,
            error_message: Some("Error: model not found".to_string()),
            failure_kind: Some(FailureKind::Remote),
        };

        view.sync(&exchange);
        let lines = view.body(&Theme::dark());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans[0].content, "Error: model not found");
    }

    #[test]
    fn test_spinner_only_moves_while_pending() {
        let mut view = ResponseView::new();
        view.tick();
        assert_eq!(view.spinner_frame, 0);

        view.sync(&ChatExchange {
            status: ExchangeStatus::Pending,
            ..ChatExchange::default()
        });
        view.tick();
        view.tick();
        assert_eq!(view.spinner_frame, 2);
    }

    #[test]
    fn test_scroll_resets_on_new_status() {
        let mut view = ResponseView::new();
        view.scroll_down();
        view.scroll_down();
        view.sync(&ChatExchange {
            status: ExchangeStatus::Pending,
            ..ChatExchange::default()
        });
        assert_eq!(view.scroll_offset, 0);
    }
}
