use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs},
    Frame,
};

use crate::course::{WEEK1_CARDS, WEEK1_PAGES, WEEK1_SUBTITLE, WEEK1_TITLE};
use crate::tui::components::KeyHint;
use crate::tui::routes::Route;
use crate::tui::screens::ScreenAction;
use crate::tui::{Event, Theme};

/// Week 1 overview with links to its sub-pages.
pub struct Week1Screen {
    /// Index into `WEEK1_PAGES`.
    selected: usize,
}

impl Week1Screen {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    pub fn selected_page(&self) -> Route {
        WEEK1_PAGES[self.selected]
    }

    pub fn key_hints(&self) -> Vec<KeyHint> {
        vec![
            KeyHint::new("←/→", "Select page"),
            KeyHint::new("Enter", "Open"),
            KeyHint::new("s/a/c", "Setup/API/Chat"),
            KeyHint::new("Esc", "Back"),
        ]
    }

    pub fn handle_event(&mut self, event: &Event) -> ScreenAction {
        let Event::Key(key) = event else {
            return ScreenAction::None;
        };

        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected = self.selected.saturating_sub(1);
                ScreenAction::None
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => {
                self.selected = (self.selected + 1).min(WEEK1_PAGES.len() - 1);
                ScreenAction::None
            }
            KeyCode::Enter => ScreenAction::Navigate(self.selected_page()),
            KeyCode::Char('s') => ScreenAction::Navigate(Route::Setup),
            KeyCode::Char('a') => ScreenAction::Navigate(Route::ApiIntegration),
            KeyCode::Char('c') => ScreenAction::Navigate(Route::Chat),
            _ => ScreenAction::None,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(6),
                Constraint::Length(3),
            ])
            .split(area);

        let header = Paragraph::new(vec![
            Line::from(Span::styled(WEEK1_TITLE, theme.highlight())),
            Line::from(Span::styled(WEEK1_SUBTITLE, theme.secondary())),
        ])
        .block(Block::default().borders(Borders::BOTTOM).border_style(theme.border()));
        frame.render_widget(header, chunks[0]);

        let card_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(
                WEEK1_CARDS
                    .iter()
                    .map(|_| Constraint::Ratio(1, WEEK1_CARDS.len() as u32))
                    .collect::<Vec<_>>(),
            )
            .split(chunks[1]);

        for (card, card_area) in WEEK1_CARDS.iter().zip(card_areas.iter()) {
            let items: Vec<ListItem> = card
                .items
                .iter()
                .map(|item| ListItem::new(Line::from(format!("• {}", item))))
                .collect();
            let list = List::new(items)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(theme.border())
                        .title(Span::styled(format!(" {} ", card.title), theme.accent())),
                )
                .style(theme.normal());
            frame.render_widget(list, *card_area);
        }

        let pages: Vec<Line> = WEEK1_PAGES
            .iter()
            .map(|page| Line::from(page.title()))
            .collect();
        let nav = Tabs::new(pages)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border())
                    .title(" Continue "),
            )
            .select(self.selected)
            .style(theme.secondary())
            .highlight_style(theme.selected());
        frame.render_widget(nav, chunks[2]);
    }
}

impl Default for Week1Screen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_enter_opens_selected_page() {
        let mut screen = Week1Screen::new();
        assert_eq!(
            screen.handle_event(&press(KeyCode::Enter)),
            ScreenAction::Navigate(Route::Setup)
        );

        screen.handle_event(&press(KeyCode::Right));
        assert_eq!(screen.selected_page(), Route::ApiIntegration);

        for _ in 0..5 {
            screen.handle_event(&press(KeyCode::Right));
        }
        assert_eq!(
            screen.handle_event(&press(KeyCode::Enter)),
            ScreenAction::Navigate(Route::Chat)
        );

        screen.handle_event(&press(KeyCode::Left));
        assert_eq!(screen.selected_page(), Route::ApiIntegration);
    }

    #[test]
    fn test_page_shortcuts() {
        let mut screen = Week1Screen::new();
        for (key, route) in [('s', Route::Setup), ('a', Route::ApiIntegration), ('c', Route::Chat)] {
            assert_eq!(
                screen.handle_event(&press(KeyCode::Char(key))),
                ScreenAction::Navigate(route)
            );
        }
    }
}
