//! Participant identity and credit roles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of a contributor (artist or user).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
pub struct ParticipantId(pub String);

impl ParticipantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ParticipantId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// How a participant is credited on the work. Informational only; the
/// allocation math never looks at it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Main,
    Featured,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Main => f.write_str("main"),
            Role::Featured => f.write_str("featured"),
        }
    }
}

/// Which of the two parallel splits an entry belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SplitCategory {
    /// Songwriting split.
    Work,
    /// Performance split.
    Recording,
}

impl SplitCategory {
    /// The parallel category.
    pub fn other(self) -> Self {
        match self {
            SplitCategory::Work => SplitCategory::Recording,
            SplitCategory::Recording => SplitCategory::Work,
        }
    }
}

impl fmt::Display for SplitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitCategory::Work => f.write_str("work"),
            SplitCategory::Recording => f.write_str("recording"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_id_serializes_as_plain_string() {
        let id = ParticipantId::from("artist-7");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"artist-7\"");
        assert_eq!(id.to_string(), "artist-7");
    }

    #[test]
    fn test_role_wire_names() {
        assert_eq!(serde_json::to_string(&Role::Main).expect("serialize"), "\"main\"");
        let role: Role = serde_json::from_str("\"featured\"").expect("deserialize");
        assert_eq!(role, Role::Featured);
    }

    #[test]
    fn test_category_other() {
        assert_eq!(SplitCategory::Work.other(), SplitCategory::Recording);
        assert_eq!(SplitCategory::Recording.other(), SplitCategory::Work);
        assert_eq!(SplitCategory::Recording.to_string(), "recording");
    }
}
