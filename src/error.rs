use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BurndownError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("GraphQL errors: {}", messages.join(", "))]
    GraphQL { messages: Vec<String> },

    #[error("Empty response from API")]
    EmptyResponse,

    #[error("Failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error(
        "No API token found. Set GITHUB_TOKEN env var or add api_token to ~/.config/burndown/config.toml"
    )]
    MissingToken,

    #[error(
        "No project specified. Pass --project, set PROJECT_ID env var, or add default_project to the config file"
    )]
    NoProject,

    #[error("Item {item_id} has no Status field value")]
    MissingStatus { item_id: String },

    #[error("Item {item_id} has an unparsable status timestamp: {value}")]
    InvalidTimestamp { item_id: String, value: String },

    #[error("Item {item_id} has an unparsable iteration start date: {value}")]
    InvalidStartDate { item_id: String, value: String },

    #[error("Card {card_id} has an unparsable estimate: {value}")]
    InvalidEstimate { card_id: String, value: String },

    #[error("Chart rendering failed: {0}")]
    Chart(String),
}

pub type Result<T> = std::result::Result<T, BurndownError>;
