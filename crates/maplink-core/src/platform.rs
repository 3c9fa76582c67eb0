use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Host platform the deep link is opened on. Decides which scheme root an
/// app gets when it has both a native scheme and a web fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Native app schemes (`maps://`, `comgooglemaps://`, ...).
    Ios,
    /// Universal/web roots for apps that have one.
    #[default]
    Android,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Ios => write!(f, "ios"),
            Platform::Android => write!(f, "android"),
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            other => Err(format!("expected \"ios\" or \"android\", got \"{other}\"")),
        }
    }
}
