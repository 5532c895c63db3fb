pub mod client;
pub mod controller;
pub mod keys;
pub mod types;

pub use client::{AskBackend, HttpAskClient};
pub use controller::{AskOutcome, AskTicket, ChatController};
pub use keys::KeyAction;
pub use types::{AskReply, AskRequest, ChatExchange, ExchangeStatus, FailureKind};
