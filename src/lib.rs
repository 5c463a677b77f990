//! Hybrid Leaderboard Library
//!
//! Ingestion and ranking engine for multi-segment fitness competition results that
//! are published as a fixed-layout spreadsheet.
//!
//! This library provides tools for:
//! - Parsing segment ("MM:SS") and total ("HH:MM:SS") time strings leniently
//! - Ingesting category row ranges of the raw sheet into participant records
//! - Standard competition ranking with a sentinel for missing results
//! - Per-participant ranked views (overall, category and per-segment scopes)
//! - Filtering, sorting and per-segment statistics for display surfaces
//! - Fetching the raw sheet and atomically swapping refreshed datasets

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod category_registry;
        pub mod display;
        pub mod leaderboard_query;
        pub mod rank_engine;
        pub mod ranked_view;
        pub mod refresh;
        pub mod row_ingestor;
        pub mod segment_stats;
        pub mod time_codec;
    }
    pub mod adapters {
        pub mod sheets;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{
    Category, LeaderboardDataset, Level, Participant, RankedView, SegmentRank, SegmentResult, Sex,
};
pub use app::services::rank_engine::compute_ranks;
pub use app::services::ranked_view::build_ranked_view;
pub use app::services::row_ingestor::RowIngestor;
pub use config::Config;

/// Result type alias for leaderboard operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for leaderboard operations
///
/// Data-quality problems inside the sheet are never reported through this type;
/// they degrade to defaults and are collected as ingestion diagnostics.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Network or HTTP failure while fetching the raw table
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// The data source rejected the credentials
    #[error("Authentication rejected by data source (HTTP {status})")]
    Authentication { status: u16 },

    /// The data source answered with a body that is not a value table
    #[error("Malformed data source response: {message}")]
    SourceFormat { message: String },

    /// JSON serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Participant id not present in the dataset
    #[error("Participant not found: {id}")]
    ParticipantNotFound { id: String },

    /// Category id not present in the registry
    #[error("Unknown category: {id}")]
    UnknownCategory { id: String },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>, source: Option<reqwest::Error>) -> Self {
        Self::Transport {
            message: message.into(),
            source,
        }
    }

    /// Create an authentication error
    pub fn authentication(status: u16) -> Self {
        Self::Authentication { status }
    }

    /// Create a source format error
    pub fn source_format(message: impl Into<String>) -> Self {
        Self::SourceFormat {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a participant not found error
    pub fn participant_not_found(id: impl Into<String>) -> Self {
        Self::ParticipantNotFound { id: id.into() }
    }

    /// Create an unknown category error
    pub fn unknown_category(id: impl Into<String>) -> Self {
        Self::UnknownCategory { id: id.into() }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }

    /// True for failures that happen before or while talking to the data source,
    /// as opposed to problems with the table content
    pub fn is_source_failure(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Authentication { .. } | Self::Configuration { .. }
        )
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport {
            message: "HTTP request failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
