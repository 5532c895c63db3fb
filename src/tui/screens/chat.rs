use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::chat::keys::{self, KeyAction};
use crate::chat::{AskOutcome, AskTicket, ChatController, ExchangeStatus};
use crate::tui::components::{self, Component, InputBox, KeyHint, ResponseView};
use crate::tui::screens::ScreenAction;
use crate::tui::{Event, Theme};

/// The interactive chat page: one prompt box, one ask control, one response.
pub struct ChatScreen {
    controller: ChatController,
    input_box: InputBox,
    response_view: ResponseView,
    endpoint: String,
    /// Where the ask control was last drawn, for mouse clicks.
    ask_button: Rect,
}

impl ChatScreen {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let mut input_box = InputBox::new("Ask me anything...");
        input_box.focus();

        Self {
            controller: ChatController::new(),
            input_box,
            response_view: ResponseView::new(),
            endpoint: endpoint.into(),
            ask_button: Rect::default(),
        }
    }

    pub fn controller(&self) -> &ChatController {
        &self.controller
    }

    pub fn status(&self) -> ExchangeStatus {
        self.controller.status()
    }

    pub fn input_text(&self) -> &str {
        self.input_box.value()
    }

    /// Starts a fresh page view with an empty prompt.
    pub fn mount(&mut self) {
        self.controller.mount();
        self.input_box.clear();
        self.sync();
    }

    /// Leaves the page. A call still in flight will be ignored on arrival.
    pub fn unmount(&mut self) {
        self.controller.unmount();
    }

    /// The ask control: same path for Enter, Ctrl+S and mouse clicks.
    pub fn ask(&mut self) -> ScreenAction {
        let action = match self.controller.begin_submit() {
            Some(ticket) => ScreenAction::Ask(ticket),
            None => ScreenAction::None,
        };
        self.sync();
        action
    }

    /// Applies the outcome of a call. Returns `false` if it was stale.
    pub fn complete(&mut self, ticket: &AskTicket, outcome: AskOutcome) -> bool {
        let applied = self.controller.complete(ticket, outcome);
        self.sync();
        applied
    }

    pub fn tick(&mut self) {
        self.response_view.tick();
    }

    pub fn key_hints(&self) -> Vec<KeyHint> {
        if self.controller.status().is_pending() {
            vec![KeyHint::new("", "Waiting for the model...")]
        } else {
            vec![
                KeyHint::new("Enter", "Ask"),
                KeyHint::new("Shift/Alt+Enter", "New line"),
                KeyHint::new("PgUp/PgDn", "Scroll"),
            ]
        }
    }

    pub fn handle_event(&mut self, event: &Event) -> ScreenAction {
        match event {
            Event::Key(key) => {
                if key.code == KeyCode::Char('s') && key.modifiers == KeyModifiers::CONTROL {
                    return self.ask();
                }
                if self.response_view.handle_event(event) {
                    return ScreenAction::None;
                }

                match keys::classify(key) {
                    KeyAction::Submit => self.ask(),
                    KeyAction::InsertNewline | KeyAction::Edit => {
                        if self.input_box.handle_event(event) {
                            self.controller.set_input(self.input_box.value());
                        }
                        ScreenAction::None
                    }
                    KeyAction::Ignore => ScreenAction::None,
                }
            }
            Event::Mouse(mouse) => {
                let clicked = matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
                    && components::contains(self.ask_button, mouse.column, mouse.row);
                if clicked {
                    self.ask()
                } else {
                    ScreenAction::None
                }
            }
            _ => ScreenAction::None,
        }
    }

    fn sync(&mut self) {
        let pending = self.controller.status().is_pending();
        self.input_box.set_enabled(!pending);
        self.response_view.sync(self.controller.exchange());
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(6),
                Constraint::Min(3),
            ])
            .split(area);

        let header = Paragraph::new(vec![
            Line::from(Span::styled("Ollama Chat Interface", theme.highlight())),
            Line::from(Span::styled(
                format!("Test your local Llama 3 model through {}", self.endpoint),
                theme.secondary(),
            )),
        ])
        .block(Block::default().borders(Borders::BOTTOM).border_style(theme.border()));
        frame.render_widget(header, chunks[0]);

        let input_row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(14)])
            .split(chunks[1]);

        self.input_box.render(frame, input_row[0], theme);
        self.render_ask_button(frame, input_row[1], theme);
        self.response_view.render(frame, chunks[2], theme);
    }

    fn render_ask_button(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let button_area = Rect {
            height: area.height.min(3),
            ..area
        };
        self.ask_button = button_area;

        let pending = self.controller.status().is_pending();
        let (label, style) = if pending {
            ("Thinking...", theme.disabled())
        } else if self.controller.can_submit() {
            ("Ask", theme.accent())
        } else {
            ("Ask", theme.disabled())
        };

        let button = Paragraph::new(Line::from(Span::styled(label, style)))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(style));
        frame.render_widget(button, button_area);
    }
}
