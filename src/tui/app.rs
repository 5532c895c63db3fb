use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};
use std::sync::Arc;
use tokio::{sync::mpsc, task::JoinHandle};
use tracing::{debug, info, warn};

use crate::app::AppConfig;
use crate::chat::{AskBackend, AskTicket};
use crate::course::{API_INTEGRATION_GUIDE, SETUP_GUIDE};
use crate::tui::{
    components::{Component, HelpPopup, KeyHint, StatusBar},
    reveal::RevealSchedule,
    routes::Route,
    screens::{ChatScreen, GuideScreen, HomeScreen, ScreenAction, Week1Screen, GLOBAL_HINTS},
    Event, Theme,
};

pub struct App {
    // Screens
    home: HomeScreen,
    week1: Week1Screen,
    setup: GuideScreen,
    api_integration: GuideScreen,
    chat: ChatScreen,

    // Components
    status_bar: StatusBar,
    help_popup: HelpPopup,

    // State
    route: Route,
    theme: Theme,
    should_quit: bool,

    // Backend integration
    ask_backend: Arc<dyn AskBackend>,
    event_sender: mpsc::UnboundedSender<Event>,
    /// The one outstanding ask call, if any.
    in_flight: Option<JoinHandle<()>>,
}

impl App {
    pub fn new(
        config: &AppConfig,
        ask_backend: Arc<dyn AskBackend>,
        event_sender: mpsc::UnboundedSender<Event>,
        initial_route: Route,
    ) -> Self {
        let schedule = RevealSchedule::new(config.ui.reveal_delay(), config.ui.reveal_step());
        let endpoint = ask_backend.endpoint().to_string();

        let mut app = Self {
            home: HomeScreen::new(schedule),
            week1: Week1Screen::new(),
            setup: GuideScreen::new(&SETUP_GUIDE),
            api_integration: GuideScreen::new(&API_INTEGRATION_GUIDE),
            chat: ChatScreen::new(endpoint.clone()),
            status_bar: StatusBar::new(endpoint),
            help_popup: HelpPopup::new(),
            route: initial_route,
            theme: Theme::from_name(&config.ui.theme),
            should_quit: false,
            ask_backend,
            event_sender,
            in_flight: None,
        };

        app.enter_route(initial_route);
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn chat(&self) -> &ChatScreen {
        &self.chat
    }

    pub fn handle_event(&mut self, event: Event) {
        // Help popup takes priority
        if self.help_popup.is_visible() && self.help_popup.handle_event(&event) {
            return;
        }

        match event {
            Event::Tick => {
                self.home.tick();
                self.chat.tick();
            }
            Event::Key(key) => {
                if key.kind == KeyEventKind::Release {
                    return;
                }
                if self.handle_global_keys(key) {
                    return;
                }
                let action = match self.route {
                    Route::Home => self.home.handle_event(&event),
                    Route::Week1 => self.week1.handle_event(&event),
                    Route::Setup => self.setup.handle_event(&event),
                    Route::ApiIntegration => self.api_integration.handle_event(&event),
                    Route::Chat => self.chat.handle_event(&event),
                };
                self.apply(action);
            }
            Event::Mouse(_) => {
                if self.route == Route::Chat {
                    let action = self.chat.handle_event(&event);
                    self.apply(action);
                }
            }
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
            }
            Event::AskCompleted(ticket, outcome) => {
                if self.chat.complete(&ticket, outcome) {
                    self.refresh_chat_status();
                }
            }
        }
    }

    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) |
            (KeyCode::Char('q'), KeyModifiers::CONTROL) => {
                self.should_quit = true;
                true
            }
            (KeyCode::F(1), _) | (KeyCode::Char('h'), KeyModifiers::CONTROL) => {
                self.help_popup.toggle();
                true
            }
            (KeyCode::Char(digit), modifiers)
                if modifiers == KeyModifiers::CONTROL || modifiers == KeyModifiers::ALT =>
            {
                match Route::from_digit(digit) {
                    Some(route) => {
                        self.navigate(route);
                        true
                    }
                    None => false,
                }
            }
            (KeyCode::Esc, KeyModifiers::NONE) => {
                if let Some(parent) = self.route.parent() {
                    self.navigate(parent);
                }
                true
            }
            _ => false,
        }
    }

    fn apply(&mut self, action: ScreenAction) {
        match action {
            ScreenAction::None => {}
            ScreenAction::Navigate(route) => self.navigate(route),
            ScreenAction::Ask(ticket) => self.dispatch(ticket),
        }
        if self.route == Route::Chat {
            self.refresh_chat_status();
        }
    }

    /// Runs the call off the UI loop and reports back through the event channel.
    fn dispatch(&mut self, ticket: AskTicket) {
        self.cancel_in_flight();
        info!(chars = ticket.prompt.len(), "Submitting prompt");
        self.status_bar.set_status("Waiting for response...");

        let backend = Arc::clone(&self.ask_backend);
        let sender = self.event_sender.clone();
        self.in_flight = Some(tokio::spawn(async move {
            let outcome = backend.ask(ticket.request()).await;
            // The UI may already be gone
            let _ = sender.send(Event::AskCompleted(ticket, outcome));
        }));
    }

    /// Aborts the outstanding call. Its outcome would be discarded anyway.
    fn cancel_in_flight(&mut self) {
        if let Some(call) = self.in_flight.take() {
            if !call.is_finished() {
                warn!("Cancelling outstanding ask call");
                call.abort();
            }
        }
    }

    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        debug!(from = self.route.path(), to = route.path(), "Navigating");

        if self.route == Route::Chat {
            self.cancel_in_flight();
            self.chat.unmount();
        }
        self.route = route;
        self.enter_route(route);
    }

    fn enter_route(&mut self, route: Route) {
        let (status, hints) = match route {
            Route::Home => {
                self.home.show();
                ("Welcome to the course", self.home.key_hints())
            }
            Route::Week1 => ("Week 1 overview", self.week1.key_hints()),
            Route::Setup => {
                self.setup.show();
                ("Week 1 setup guide", self.setup.key_hints())
            }
            Route::ApiIntegration => {
                self.api_integration.show();
                ("Week 1 API integration guide", self.api_integration.key_hints())
            }
            Route::Chat => {
                self.chat.mount();
                ("Type your prompt (Enter to ask)", self.chat.key_hints())
            }
        };
        self.status_bar.set_status(status);
        self.status_bar.set_key_hints(with_global_hints(hints));
        let exchange_status = (route == Route::Chat).then(|| self.chat.status());
        self.status_bar.set_exchange_status(exchange_status);
    }

    fn refresh_chat_status(&mut self) {
        if self.route != Route::Chat {
            return;
        }
        let status = self.chat.status();
        self.status_bar.set_exchange_status(Some(status));
        self.status_bar.set_key_hints(with_global_hints(self.chat.key_hints()));

        let exchange = self.chat.controller().exchange();
        match (&exchange.error_message, status.is_pending()) {
            (_, true) => self.status_bar.set_status("Waiting for response..."),
            (Some(_), false) => self.status_bar.set_status("Request failed"),
            (None, false) if status.is_terminal() => self.status_bar.set_status("Response received"),
            _ => {}
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Navigation
                Constraint::Min(1),    // Screen
                Constraint::Length(2), // Status bar
            ])
            .split(frame.size());

        self.render_navigation(frame, chunks[0]);

        match self.route {
            Route::Home => self.home.render(frame, chunks[1], &self.theme),
            Route::Week1 => self.week1.render(frame, chunks[1], &self.theme),
            Route::Setup => self.setup.render(frame, chunks[1], &self.theme),
            Route::ApiIntegration => self.api_integration.render(frame, chunks[1], &self.theme),
            Route::Chat => self.chat.render(frame, chunks[1], &self.theme),
        }

        self.status_bar.render(frame, chunks[2], &self.theme);

        // Render help popup last (on top)
        let area = frame.size();
        self.help_popup.render(frame, area, &self.theme);
    }

    fn render_navigation(&self, frame: &mut Frame, area: Rect) {
        let titles: Vec<Line> = Route::ALL
            .iter()
            .enumerate()
            .map(|(i, route)| Line::from(format!("{} {}", i + 1, route.title())))
            .collect();

        let tabs = Tabs::new(titles)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.border())
                    .title(" AI/ML Course "),
            )
            .select(self.route.index())
            .style(self.theme.secondary())
            .highlight_style(self.theme.highlight());

        frame.render_widget(tabs, area);
    }
}

fn with_global_hints(mut hints: Vec<KeyHint>) -> Vec<KeyHint> {
    hints.extend_from_slice(GLOBAL_HINTS);
    hints
}
