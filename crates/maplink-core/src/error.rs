use thiserror::Error;

use crate::apps::MapApp;

/// Caller input rejected before any URL is built.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("`{field}` is required")]
    MissingCoordinate { field: &'static str },

    #[error("`{field}` is not a number: {value:?}")]
    InvalidCoordinate { field: &'static str, value: String },

    /// Only one half of the source coordinate pair was supplied.
    #[error("`{missing}` is required when `{present}` is set")]
    PartialSource {
        present: &'static str,
        missing: &'static str,
    },

    #[error("unsupported app \"{0}\"; expected one of: {supported}", supported = supported_ids())]
    UnsupportedApp(String),

    #[error("app \"{0}\" is not in the apps white list")]
    AppNotWhitelisted(MapApp),
}

/// Failure reported by a URL opener. Surfaced to the caller unchanged.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("no application can handle {url}")]
    NoHandler { url: String },

    #[error("failed to spawn opener for {url}: {source}")]
    Spawn {
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error("opening {url} failed: {reason}")]
    Failed { url: String, reason: String },
}

#[derive(Debug, Error)]
pub enum MapLinkError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Launch(#[from] LaunchError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

fn supported_ids() -> String {
    MapApp::ALL
        .iter()
        .map(|app| app.id())
        .collect::<Vec<_>>()
        .join(", ")
}
