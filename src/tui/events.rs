use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, MouseEvent};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::time::timeout;

use crate::chat::{AskOutcome, AskTicket};

#[derive(Debug)]
pub enum Event {
    /// Terminal tick event
    Tick,
    /// Key press event
    Key(KeyEvent),
    /// Mouse event
    Mouse(MouseEvent),
    /// Terminal resize event
    Resize(u16, u16),
    /// An outbound ask call finished
    AskCompleted(AskTicket, AskOutcome),
}

pub struct EventHandler {
    sender: mpsc::UnboundedSender<Event>,
    receiver: mpsc::UnboundedReceiver<Event>,
    last_tick: Instant,
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            sender,
            receiver,
            last_tick: Instant::now(),
            tick_rate,
        }
    }

    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.sender.clone()
    }

    pub async fn next(&mut self) -> Option<Event> {
        // Application events first
        if let Ok(event) = timeout(Duration::from_millis(10), self.receiver.recv()).await {
            return event;
        }

        if event::poll(Duration::from_millis(0)).unwrap_or(false) {
            match event::read() {
                Ok(CrosstermEvent::Key(key)) => return Some(Event::Key(key)),
                Ok(CrosstermEvent::Mouse(mouse)) => return Some(Event::Mouse(mouse)),
                Ok(CrosstermEvent::Resize(w, h)) => return Some(Event::Resize(w, h)),
                _ => {}
            }
        }

        if self.last_tick.elapsed() >= self.tick_rate {
            self.last_tick = Instant::now();
            return Some(Event::Tick);
        }

        // Small delay to prevent busy waiting
        tokio::time::sleep(Duration::from_millis(10)).await;
        None
    }
}
