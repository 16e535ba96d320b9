//! Error types for the Sleeper league exporter

use thiserror::Error;

use crate::cli::types::RosterId;


pub type Result<T> = std::result::Result<T, SleeperError>;

#[derive(Error, Debug)]
pub enum SleeperError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("League ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("User ID not provided and {env_var} environment variable not set")]
    MissingUserId { env_var: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid season '{value}': {reason}")]
    InvalidSeason { value: String, reason: String },

    #[error("No roster in the league is owned by user {user_id}")]
    OwnerNotFound { user_id: String },

    #[error("Traded pick references roster {roster_id}, which is not in the league")]
    UnknownRoster { roster_id: RosterId },
}
