//! Platform
//!
//! The project-management tool a generated task is phrased for.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParsePlatformError;

/// Target platform; serialized as lowercase strings on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Trello,
    Jira,
    ClickUp,
    #[default]
    Other,
}

impl Platform {
    /// Display order of the radio group
    pub const ALL: [Platform; 4] = [Platform::Trello, Platform::Jira, Platform::ClickUp, Platform::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Trello => "trello",
            Platform::Jira => "jira",
            Platform::ClickUp => "clickup",
            Platform::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Platform::Trello => "Trello",
            Platform::Jira => "Jira",
            Platform::ClickUp => "ClickUp",
            Platform::Other => "Other",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ParsePlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trello" => Ok(Platform::Trello),
            "jira" => Ok(Platform::Jira),
            "clickup" => Ok(Platform::ClickUp),
            "other" => Ok(Platform::Other),
            _ => Err(ParsePlatformError(s.to_string())),
        }
    }
}
