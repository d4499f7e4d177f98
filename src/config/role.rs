//! Standard stream roles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three process-wide standard streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamRole {
    /// Standard input
    #[serde(alias = "stdin")]
    Input,
    /// Standard output
    #[serde(alias = "stdout")]
    Output,
    /// Standard error
    #[serde(alias = "stderr")]
    Error,
}

impl StreamRole {
    /// All roles, in slot order.
    pub const ALL: [StreamRole; 3] = [StreamRole::Input, StreamRole::Output, StreamRole::Error];

    /// Parse a role from a string.
    ///
    /// Accepts both the role names and the conventional stream names.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "input" | "stdin" => Some(StreamRole::Input),
            "output" | "stdout" => Some(StreamRole::Output),
            "error" | "stderr" => Some(StreamRole::Error),
            _ => None,
        }
    }

    /// Slot index of this role in the process-wide tables.
    pub fn index(self) -> usize {
        match self {
            StreamRole::Input => 0,
            StreamRole::Output => 1,
            StreamRole::Error => 2,
        }
    }

    /// Conventional name of the underlying standard stream.
    pub fn stream_name(self) -> &'static str {
        match self {
            StreamRole::Input => "stdin",
            StreamRole::Output => "stdout",
            StreamRole::Error => "stderr",
        }
    }
}

impl fmt::Display for StreamRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamRole::Input => write!(f, "input"),
            StreamRole::Output => write!(f, "output"),
            StreamRole::Error => write!(f, "error"),
        }
    }
}
