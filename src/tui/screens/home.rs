use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::time::{Duration, Instant};

use crate::course::{Lesson, COURSE_TAGLINE, COURSE_TITLE, FOOTER_LINKS, FOOTER_OWNER, LESSONS};
use crate::tui::components::KeyHint;
use crate::tui::reveal::RevealSchedule;
use crate::tui::screens::ScreenAction;
use crate::tui::{Event, Theme};

/// Course overview with lesson cards that appear one after another.
pub struct HomeScreen {
    lessons: &'static [Lesson],
    schedule: RevealSchedule,
    shown_at: Instant,
    /// Elapsed time used for the current frame.
    elapsed: Duration,
    selected: usize,
}

impl HomeScreen {
    pub fn new(schedule: RevealSchedule) -> Self {
        Self {
            lessons: LESSONS,
            schedule,
            shown_at: Instant::now(),
            elapsed: Duration::ZERO,
            selected: 0,
        }
    }

    /// Restarts the reveal, as when the screen is opened again.
    pub fn show(&mut self) {
        self.shown_at = Instant::now();
        self.elapsed = Duration::ZERO;
    }

    pub fn tick(&mut self) {
        self.advance_to(self.shown_at.elapsed());
    }

    pub fn advance_to(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
    }

    pub fn visible_count(&self) -> usize {
        self.schedule.visible_count(self.elapsed, self.lessons.len())
    }

    pub fn selected_lesson(&self) -> Option<&Lesson> {
        (self.selected < self.visible_count()).then(|| &self.lessons[self.selected])
    }

    pub fn key_hints(&self) -> Vec<KeyHint> {
        vec![KeyHint::new("↑/↓", "Select"), KeyHint::new("Enter", "Open")]
    }

    pub fn handle_event(&mut self, event: &Event) -> ScreenAction {
        let Event::Key(key) = event else {
            return ScreenAction::None;
        };

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                ScreenAction::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let last = self.visible_count().saturating_sub(1);
                self.selected = (self.selected + 1).min(last);
                ScreenAction::None
            }
            KeyCode::Enter => self
                .selected_lesson()
                .and_then(|lesson| lesson.link)
                .map_or(ScreenAction::None, ScreenAction::Navigate),
            _ => ScreenAction::None,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

        let header = Paragraph::new(vec![
            Line::from(Span::styled(COURSE_TITLE, theme.highlight())),
            Line::from(Span::styled(COURSE_TAGLINE, theme.secondary())),
        ])
        .block(Block::default().borders(Borders::BOTTOM).border_style(theme.border()));
        frame.render_widget(header, chunks[0]);

        let visible = self.schedule.visible(self.elapsed, self.lessons.len());
        let mut lines: Vec<Line> = Vec::new();
        for index in visible {
            let lesson = &self.lessons[index];
            let is_selected = index == self.selected;

            let marker = if is_selected { "▶ " } else { "  " };
            let title_style = if is_selected {
                theme.selected()
            } else if lesson.link.is_some() {
                theme.accent()
            } else {
                theme.normal()
            };

            let mut title = vec![
                Span::styled(marker, theme.highlight()),
                Span::styled(lesson.title, title_style),
            ];
            if lesson.link.is_none() {
                title.push(Span::styled("  (coming soon)", theme.secondary()));
            }
            lines.push(Line::from(title));
            lines.push(Line::from(Span::styled(
                format!("    {}", lesson.description),
                theme.secondary(),
            )));
            lines.push(Line::from(""));
        }

        let lessons = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border())
                    .title(" Lessons "),
            )
            .wrap(Wrap { trim: false })
            .style(theme.normal());
        frame.render_widget(lessons, chunks[1]);

        let mut footer = vec![Span::styled(FOOTER_OWNER, theme.secondary())];
        for link in FOOTER_LINKS {
            footer.push(Span::styled(" • ", theme.secondary()));
            footer.push(Span::styled(format!("{} {}", link.label, link.url), theme.accent()));
        }
        frame.render_widget(Paragraph::new(Line::from(footer)), chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::routes::Route;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_cards_appear_over_time() {
        let mut home = HomeScreen::new(RevealSchedule::default());
        assert_eq!(home.visible_count(), 0);
        assert!(home.selected_lesson().is_none());

        home.advance_to(Duration::from_millis(200));
        assert_eq!(home.visible_count(), 1);

        home.advance_to(Duration::from_secs(5));
        assert_eq!(home.visible_count(), LESSONS.len());
    }

    #[test]
    fn test_selection_stays_within_visible_cards() {
        let mut home = HomeScreen::new(RevealSchedule::default());
        home.advance_to(Duration::from_millis(380));
        assert_eq!(home.visible_count(), 2);

        for _ in 0..5 {
            home.handle_event(&press(KeyCode::Down));
        }
        assert_eq!(home.selected_lesson().map(|l| l.id), Some("week2"));
    }

    #[test]
    fn test_enter_opens_linked_lesson_only() {
        let mut home = HomeScreen::new(RevealSchedule::default());
        home.advance_to(Duration::from_secs(5));

        assert_eq!(
            home.handle_event(&press(KeyCode::Enter)),
            ScreenAction::Navigate(Route::Week1)
        );

        home.handle_event(&press(KeyCode::Down));
        assert_eq!(home.handle_event(&press(KeyCode::Enter)), ScreenAction::None);
    }

    #[test]
    fn test_render_shows_lessons_and_footer() {
        let mut home = HomeScreen::new(RevealSchedule::default());
        home.advance_to(Duration::from_millis(200));

        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal
            .draw(|f| {
                let area = f.size();
                home.render(f, area, &Theme::dark());
            })
            .unwrap();

        let rendered: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(rendered.contains("Week 1: Foundations"));
        assert!(!rendered.contains("Week 2:"));
        assert!(rendered.contains("Foysal Mahmud"));
        assert!(rendered.contains("GitHub"));
    }
}
