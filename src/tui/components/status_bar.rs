use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::chat::ExchangeStatus;
use crate::tui::{components::Component, Event, Theme};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

pub struct StatusBar {
    status_message: String,
    endpoint: String,
    exchange_status: Option<ExchangeStatus>,
    key_hints: Vec<KeyHint>,
}

impl StatusBar {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            status_message: "Ready".to_string(),
            endpoint: endpoint.into(),
            exchange_status: None,
            key_hints: Vec::new(),
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    pub fn status(&self) -> &str {
        &self.status_message
    }

    /// Shows the chat indicator; `None` hides it outside the chat screen.
    pub fn set_exchange_status(&mut self, status: Option<ExchangeStatus>) {
        self.exchange_status = status;
    }

    pub fn set_key_hints(&mut self, hints: Vec<KeyHint>) {
        self.key_hints = hints;
    }

    fn exchange_indicator(&self, theme: &Theme) -> Option<(&'static str, Style, &'static str)> {
        let status = self.exchange_status?;
        let (symbol, style) = match status {
            ExchangeStatus::Idle => ("○", theme.secondary()),
            ExchangeStatus::Pending => ("◐", theme.warning()),
            ExchangeStatus::Succeeded => ("●", theme.success()),
            ExchangeStatus::Failed => ("●", theme.error()),
        };
        Some((symbol, style, status.label()))
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let mut spans = vec![Span::styled(self.status_message.as_str(), theme.normal())];

        if let Some((symbol, style, label)) = self.exchange_indicator(theme) {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(self.endpoint.as_str(), theme.accent()));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(symbol, style));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(label, theme.secondary()));
        }

        for hint in &self.key_hints {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(hint.key, theme.highlight()));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(hint.action, theme.secondary()));
        }

        let paragraph = Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::TOP).border_style(theme.border()))
            .alignment(Alignment::Left);

        frame.render_widget(paragraph, area);
    }

    fn handle_event(&mut self, _event: &Event) -> bool {
        false // Status bar doesn't handle events
    }
}
