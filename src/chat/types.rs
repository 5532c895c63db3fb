use serde::{Deserialize, Serialize};

/// Prefix shown in front of every failure message.
pub const ERROR_PREFIX: &str = "Error: ";

/// Body of the outbound `POST` to the ask endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub prompt: String,
}

impl AskRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

/// Body returned by the ask endpoint. A present `error` wins over `response`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AskReply {
    pub fn response(text: impl Into<String>) -> Self {
        Self {
            response: Some(text.into()),
            error: None,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            response: None,
            error: Some(text.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExchangeStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

impl ExchangeStatus {
    pub fn is_pending(self) -> bool {
        self == ExchangeStatus::Pending
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, ExchangeStatus::Succeeded | ExchangeStatus::Failed)
    }

    pub fn label(self) -> &'static str {
        match self {
            ExchangeStatus::Idle => "Idle",
            ExchangeStatus::Pending => "Thinking...",
            ExchangeStatus::Succeeded => "Done",
            ExchangeStatus::Failed => "Failed",
        }
    }
}

/// The two recognized failure kinds at the chat boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request never produced a parsable reply.
    Transport,
    /// The endpoint replied with an `error` field.
    Remote,
}

/// The single in-memory record of one prompt/response round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatExchange {
    pub input_text: String,
    pub status: ExchangeStatus,
    pub response_text: Option<String>,
    pub error_message: Option<String>,
    pub failure_kind: Option<FailureKind>,
}

impl ChatExchange {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn start(&mut self) {
        self.status = ExchangeStatus::Pending;
        self.response_text = None;
        self.error_message = None;
        self.failure_kind = None;
    }

    pub(crate) fn succeed(&mut self, text: String) {
        self.status = ExchangeStatus::Succeeded;
        self.response_text = Some(text);
        self.error_message = None;
        self.failure_kind = None;
    }

    pub(crate) fn fail(&mut self, kind: FailureKind, detail: impl std::fmt::Display) {
        self.status = ExchangeStatus::Failed;
        self.response_text = None;
        self.error_message = Some(format!("{ERROR_PREFIX}{detail}"));
        self.failure_kind = Some(kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let body = serde_json::to_value(AskRequest::new("why is the sky blue?")).unwrap();
        assert_eq!(body, serde_json::json!({ "prompt": "why is the sky blue?" }));
    }

    #[test]
    fn test_reply_accepts_either_field() {
        let ok: AskReply = serde_json::from_str(r#"{"response":"hello"}"#).unwrap();
        assert_eq!(ok, AskReply::response("hello"));

        let err: AskReply = serde_json::from_str(r#"{"error":"model not found"}"#).unwrap();
        assert_eq!(err, AskReply::error("model not found"));

        let empty: AskReply = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, AskReply::default());
    }

    #[test]
    fn test_exchange_transitions_keep_one_field() {
        let mut exchange = ChatExchange::new();
        assert_eq!(exchange.status, ExchangeStatus::Idle);

        exchange.start();
        assert!(exchange.status.is_pending());

        exchange.fail(FailureKind::Remote, "boom");
        assert_eq!(exchange.error_message.as_deref(), Some("Error: boom"));
        assert!(exchange.response_text.is_none());

        exchange.start();
        exchange.succeed("ok".to_string());
        assert_eq!(exchange.response_text.as_deref(), Some("ok"));
        assert!(exchange.error_message.is_none());
        assert!(exchange.failure_kind.is_none());
    }
}
