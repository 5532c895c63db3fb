use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "aiml-course")]
#[command(about = "AI/ML course companion with a chat client for a local Ollama bridge")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Base URL of the ask service, overriding the configuration
    #[arg(short, long)]
    pub endpoint: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the terminal UI
    Tui {
        /// Screen to start on (/, /week-1, /week-1/setup, /week-1/api-integration, /week-1/chat)
        #[arg(short, long, default_value = "/")]
        route: String,
    },

    /// Submit one prompt and print the response
    Ask {
        /// Prompt text; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        prompt: Vec<String>,
    },

    /// Print the resolved configuration as TOML
    Config,
}

impl Cli {
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Tui {
            route: "/".to_string(),
        })
    }
}

impl Commands {
    /// The prompt for `ask`, as a single string.
    pub fn prompt(&self) -> Option<String> {
        match self {
            Commands::Ask { prompt } => Some(prompt.join(" ")),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_tui_on_home() {
        let cli = Cli::try_parse_from(["aiml-course"]).unwrap();
        assert_eq!(cli.command(), Commands::Tui { route: "/".to_string() });
        assert!(!cli.debug);
        assert!(cli.endpoint.is_none());
    }

    #[test]
    fn test_ask_joins_words() {
        let cli = Cli::try_parse_from([
            "aiml-course",
            "--endpoint",
            "http://10.0.0.2:8000",
            "ask",
            "why",
            "is the sky blue?",
        ])
        .unwrap();
        assert_eq!(cli.endpoint.as_deref(), Some("http://10.0.0.2:8000"));
        assert_eq!(cli.command().prompt().as_deref(), Some("why is the sky blue?"));
    }

    #[test]
    fn test_tui_route_and_global_flags() {
        let cli = Cli::try_parse_from(["aiml-course", "tui", "--route", "/week-1/chat", "--debug"])
            .unwrap();
        assert!(cli.debug);
        assert_eq!(
            cli.command(),
            Commands::Tui {
                route: "/week-1/chat".to_string()
            }
        );
    }

    #[test]
    fn test_ask_requires_prompt() {
        assert!(Cli::try_parse_from(["aiml-course", "ask"]).is_err());
    }
}
