use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Platform error: {0}")]
    Platform(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl Error {
    pub fn platform(msg: impl Into<String>) -> Self {
        Error::Platform(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    pub fn terminal(msg: impl Into<String>) -> Self {
        Error::Terminal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helper_constructors() {
        let err = Error::validation("ask_path must start with '/'");
        assert_eq!(
            err.to_string(),
            "Validation error: ask_path must start with '/'"
        );
        assert!(matches!(err, Error::Validation(_)));

        let err = Error::platform("no home directory");
        assert!(matches!(err, Error::Platform(_)));
    }

    #[test]
    fn test_json_errors_convert() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().starts_with("JSON serialization error"));
    }
}
