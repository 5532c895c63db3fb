use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::course::{Guide, GuideBlock};
use crate::tui::components::KeyHint;
use crate::tui::routes::Route;
use crate::tui::screens::ScreenAction;
use crate::tui::{Event, Theme};

const PAGE: u16 = 10;

/// A read-only Week 1 page: setup steps or integration notes.
pub struct GuideScreen {
    guide: &'static Guide,
    scroll: u16,
}

impl GuideScreen {
    pub fn new(guide: &'static Guide) -> Self {
        Self { guide, scroll: 0 }
    }

    pub fn title(&self) -> &'static str {
        self.guide.title
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Back to the top, as when the page is opened again.
    pub fn show(&mut self) {
        self.scroll = 0;
    }

    pub fn key_hints(&self) -> Vec<KeyHint> {
        vec![
            KeyHint::new("↑/↓ PgUp/PgDn", "Scroll"),
            KeyHint::new("c", "Open chat"),
            KeyHint::new("Esc", "Back"),
        ]
    }

    pub fn handle_event(&mut self, event: &Event) -> ScreenAction {
        let Event::Key(key) = event else {
            return ScreenAction::None;
        };

        let last = self.line_count().saturating_sub(1);
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll = (self.scroll + 1).min(last),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(PAGE),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(PAGE).min(last),
            KeyCode::Home => self.scroll = 0,
            KeyCode::Char('c') => return ScreenAction::Navigate(Route::Chat),
            _ => {}
        }
        ScreenAction::None
    }

    fn line_count(&self) -> u16 {
        let count: usize = self
            .guide
            .sections
            .iter()
            .map(|section| section.blocks.len() + 2)
            .sum();
        u16::try_from(count).unwrap_or(u16::MAX)
    }

    fn lines(&self, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for section in self.guide.sections {
            lines.push(Line::from(Span::styled(section.heading, theme.accent())));
            for block in section.blocks {
                lines.push(match *block {
                    GuideBlock::Text(text) => Line::from(Span::styled(text, theme.normal())),
                    GuideBlock::Bullet(text) => Line::from(vec![
                        Span::styled("  • ", theme.highlight()),
                        Span::styled(text, theme.normal()),
                    ]),
                    GuideBlock::Step(text) => Line::from(Span::styled(text, theme.highlight())),
                    GuideBlock::Code(code) => Line::from(vec![
                        Span::styled("    ", theme.normal()),
                        Span::styled(code, theme.success()),
                    ]),
                });
            }
            lines.push(Line::from(""));
        }
        lines
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(1)])
            .split(area);

        let header = Paragraph::new(Line::from(Span::styled(self.guide.title, theme.highlight())))
            .block(Block::default().borders(Borders::BOTTOM).border_style(theme.border()));
        frame.render_widget(header, chunks[0]);

        let body = Paragraph::new(self.lines(theme))
            .block(Block::default().borders(Borders::ALL).border_style(theme.border()))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        frame.render_widget(body, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::{API_INTEGRATION_GUIDE, SETUP_GUIDE};
    use crossterm::event::{KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut screen = GuideScreen::new(&SETUP_GUIDE);
        screen.handle_event(&press(KeyCode::Up));
        assert_eq!(screen.scroll(), 0);

        screen.handle_event(&press(KeyCode::Down));
        screen.handle_event(&press(KeyCode::PageDown));
        assert_eq!(screen.scroll(), 1 + PAGE);

        for _ in 0..50 {
            screen.handle_event(&press(KeyCode::PageDown));
        }
        assert_eq!(screen.scroll(), screen.line_count() - 1);

        screen.show();
        assert_eq!(screen.scroll(), 0);
    }

    #[test]
    fn test_c_opens_chat() {
        let mut screen = GuideScreen::new(&API_INTEGRATION_GUIDE);
        assert_eq!(
            screen.handle_event(&press(KeyCode::Char('c'))),
            ScreenAction::Navigate(Route::Chat)
        );
    }

    #[test]
    fn test_line_count_matches_rendered_lines() {
        let screen = GuideScreen::new(&API_INTEGRATION_GUIDE);
        assert_eq!(screen.lines(&Theme::dark()).len(), screen.line_count() as usize);
    }

    #[test]
    fn test_render_shows_setup_commands() {
        let mut screen = GuideScreen::new(&SETUP_GUIDE);
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal
            .draw(|f| {
                let area = f.size();
                screen.render(f, area, &Theme::dark());
            })
            .unwrap();

        let rendered: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(rendered.contains("Week 1 Setup Guide"));
        assert!(rendered.contains("Prerequisites"));
        assert!(rendered.contains("cd backend"));
    }
}
