//! Chat interaction controller.
//!
//! Owns the single [`ChatExchange`] of a chat screen and enforces its
//! lifecycle: a submission is accepted only for non-blank input while no call
//! is in flight, and every completion lands in exactly one terminal state.

use tracing::{debug, info, warn};

use crate::chat::client::AskBackend;
use crate::chat::types::{AskReply, AskRequest, ChatExchange, ExchangeStatus, FailureKind};
use crate::error::Error;

/// Result of one outbound call, as handed back to [`ChatController::complete`].
pub type AskOutcome = std::result::Result<AskReply, Error>;

/// Token for one accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskTicket {
    pub session: u64,
    pub prompt: String,
}

impl AskTicket {
    pub fn request(&self) -> AskRequest {
        AskRequest::new(self.prompt.clone())
    }
}

#[derive(Debug, Default)]
pub struct ChatController {
    exchange: ChatExchange,
    session: u64,
    mounted: bool,
}

impl ChatController {
    /// A controller for a freshly mounted chat screen.
    pub fn new() -> Self {
        Self {
            exchange: ChatExchange::new(),
            session: 0,
            mounted: true,
        }
    }

    pub fn exchange(&self) -> &ChatExchange {
        &self.exchange
    }

    pub fn status(&self) -> ExchangeStatus {
        self.exchange.status
    }

    pub fn input(&self) -> &str {
        &self.exchange.input_text
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.exchange.input_text = text.into();
    }

    /// Whether a submission would currently be accepted.
    pub fn can_submit(&self) -> bool {
        self.mounted
            && !self.exchange.status.is_pending()
            && !self.exchange.input_text.trim().is_empty()
    }

    /// Accepts the current input for submission and moves to `Pending`.
    ///
    /// Returns `None` without touching any state when the input is blank or a
    /// call is already in flight.
    pub fn begin_submit(&mut self) -> Option<AskTicket> {
        if !self.can_submit() {
            debug!(status = ?self.exchange.status, "Submission ignored");
            return None;
        }

        self.exchange.start();
        Some(AskTicket {
            session: self.session,
            prompt: self.exchange.input_text.clone(),
        })
    }

    /// Records the outcome of the call identified by `ticket`.
    ///
    /// Returns `false` when the outcome was discarded because the screen was
    /// unmounted (or remounted) since the ticket was issued.
    pub fn complete(&mut self, ticket: &AskTicket, outcome: AskOutcome) -> bool {
        if !self.mounted || ticket.session != self.session || !self.exchange.status.is_pending() {
            warn!(
                ticket_session = ticket.session,
                current_session = self.session,
                "Discarding completion for an inactive chat session"
            );
            return false;
        }

        match outcome {
            Ok(AskReply {
                error: Some(error), ..
            }) => {
                info!("Ask endpoint reported an error");
                self.exchange.fail(FailureKind::Remote, error);
            }
            Ok(AskReply { response, .. }) => {
                self.exchange.succeed(response.unwrap_or_default());
            }
            Err(err) => {
                info!(error = %err, "Ask request failed");
                self.exchange.fail(FailureKind::Transport, err);
            }
        }
        true
    }

    /// Submits the current input and waits for the outcome.
    ///
    /// A rejected submission is a silent no-op and issues no request.
    pub async fn submit(&mut self, backend: &dyn AskBackend) {
        let Some(ticket) = self.begin_submit() else {
            return;
        };
        let outcome = backend.ask(ticket.request()).await;
        self.complete(&ticket, outcome);
    }

    /// Ends the current session. Completions issued before this call are
    /// ignored from now on.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.session = self.session.wrapping_add(1);
    }

    /// Starts a fresh session with an `Idle` exchange.
    pub fn mount(&mut self) {
        self.exchange = ChatExchange::new();
        self.mounted = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::client::tests::closed_port_url;
    use crate::chat::client::HttpAskClient;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Backend double that replays one scripted reply and counts calls.
    struct ScriptedBackend {
        reply: Mutex<Option<AskOutcome>>,
        calls: AtomicUsize,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedBackend {
        fn replying(outcome: AskOutcome) -> Self {
            Self {
                reply: Mutex::new(Some(outcome)),
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AskBackend for ScriptedBackend {
        async fn ask(&self, request: AskRequest) -> crate::error::Result<AskReply> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(request.prompt);
            self.reply
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(AskReply::response("again")))
        }

        fn endpoint(&self) -> &str {
            "scripted://"
        }
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let backend = ScriptedBackend::replying(Ok(AskReply::response("hello")));
        let mut controller = ChatController::new();

        controller.submit(&backend).await;
        controller.set_input("   \n\t ");
        controller.submit(&backend).await;

        assert_eq!(controller.status(), ExchangeStatus::Idle);
        assert_eq!(backend.calls(), 0);
    }

    #[test]
    fn test_no_second_submission_while_pending() {
        let mut controller = ChatController::new();
        controller.set_input("first");

        let ticket = controller.begin_submit().expect("first submission accepted");
        assert_eq!(ticket.prompt, "first");
        assert_eq!(controller.status(), ExchangeStatus::Pending);

        controller.set_input("second");
        assert!(controller.begin_submit().is_none());
        assert_eq!(controller.status(), ExchangeStatus::Pending);
    }

    #[tokio::test]
    async fn test_success_sets_response() {
        let backend = ScriptedBackend::replying(Ok(AskReply::response("hello")));
        let mut controller = ChatController::new();
        controller.set_input("say hello");

        controller.submit(&backend).await;

        let exchange = controller.exchange();
        assert_eq!(exchange.status, ExchangeStatus::Succeeded);
        assert_eq!(exchange.response_text.as_deref(), Some("hello"));
        assert!(exchange.error_message.is_none());
        assert_eq!(backend.calls(), 1);
        assert_eq!(*backend.prompts.lock().unwrap(), vec!["say hello".to_string()]);
    }

    #[tokio::test]
    async fn test_remote_error_fails() {
        let backend = ScriptedBackend::replying(Ok(AskReply::error("model not found")));
        let mut controller = ChatController::new();
        controller.set_input("hi");

        controller.submit(&backend).await;

        let exchange = controller.exchange();
        assert_eq!(exchange.status, ExchangeStatus::Failed);
        assert_eq!(exchange.failure_kind, Some(FailureKind::Remote));
        let message = exchange.error_message.as_deref().unwrap();
        assert!(message.contains("model not found"));
        assert!(message.starts_with("Error: "));
        assert!(exchange.response_text.is_none());
    }

    #[tokio::test]
    async fn test_error_field_wins_over_response() {
        let reply = AskReply {
            response: Some("partial".to_string()),
            error: Some("upstream failed".to_string()),
        };
        let backend = ScriptedBackend::replying(Ok(reply));
        let mut controller = ChatController::new();
        controller.set_input("hi");

        controller.submit(&backend).await;
        assert_eq!(controller.status(), ExchangeStatus::Failed);
    }

    #[tokio::test]
    async fn test_missing_response_field_is_empty_success() {
        let backend = ScriptedBackend::replying(Ok(AskReply::default()));
        let mut controller = ChatController::new();
        controller.set_input("hi");

        controller.submit(&backend).await;
        assert_eq!(controller.status(), ExchangeStatus::Succeeded);
        assert_eq!(controller.exchange().response_text.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn test_connection_refused_fails() {
        let client = HttpAskClient::new(&closed_port_url().await, "/ask-ollama/").unwrap();
        let mut controller = ChatController::new();
        controller.set_input("anyone there?");

        controller.submit(&client).await;

        let exchange = controller.exchange();
        assert_eq!(exchange.status, ExchangeStatus::Failed);
        assert_eq!(exchange.failure_kind, Some(FailureKind::Transport));
        assert!(!exchange.error_message.as_deref().unwrap_or_default().is_empty());
    }

    #[tokio::test]
    async fn test_resubmit_after_terminal_state_clears_previous_result() {
        let backend = ScriptedBackend::replying(Ok(AskReply::error("model not found")));
        let mut controller = ChatController::new();
        controller.set_input("hi");
        controller.submit(&backend).await;
        assert_eq!(controller.status(), ExchangeStatus::Failed);

        controller.set_input("hi again");
        let ticket = controller.begin_submit().expect("accepted after failure");
        assert_eq!(controller.status(), ExchangeStatus::Pending);
        assert!(controller.exchange().error_message.is_none());
        assert!(controller.exchange().response_text.is_none());

        assert!(controller.complete(&ticket, Ok(AskReply::response("hello"))));
        assert_eq!(controller.status(), ExchangeStatus::Succeeded);

        let ticket = controller.begin_submit().expect("accepted after success");
        assert!(controller.exchange().response_text.is_none());
        controller.complete(&ticket, Err(Error::validation("simulated")));
        assert_eq!(controller.status(), ExchangeStatus::Failed);
        assert!(controller.exchange().response_text.is_none());
    }

    #[test]
    fn test_completion_after_unmount_is_discarded() {
        let mut controller = ChatController::new();
        controller.set_input("slow question");
        let ticket = controller.begin_submit().unwrap();

        controller.unmount();
        assert!(!controller.complete(&ticket, Ok(AskReply::response("late"))));
        assert!(controller.exchange().response_text.is_none());

        controller.mount();
        assert_eq!(controller.status(), ExchangeStatus::Idle);
        assert!(!controller.complete(&ticket, Ok(AskReply::response("late"))));
        assert_eq!(controller.status(), ExchangeStatus::Idle);
    }

    #[test]
    fn test_input_survives_submission() {
        let mut controller = ChatController::new();
        controller.set_input("keep me");
        let ticket = controller.begin_submit().unwrap();
        controller.complete(&ticket, Ok(AskReply::response("ok")));
        assert_eq!(controller.input(), "keep me");
    }
}
