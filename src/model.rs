use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do entry. Identity is by `id`, not by value or position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub title: String,
    pub is_done: bool,
    pub created_at: DateTime<Utc>,
}

impl Item {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            is_done: false,
            created_at: Utc::now(),
        }
    }
}

/// Which items are currently visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterMode {
    #[default]
    All,
    Done,
    NotDone,
}

impl FilterMode {
    /// Maps a UI segmented-control ordinal to a mode. Anything outside 1/2
    /// silently falls back to `All` (default-branch semantics).
    pub fn from_ordinal(ordinal: u8) -> Self {
        match ordinal {
            1 => FilterMode::Done,
            2 => FilterMode::NotDone,
            _ => FilterMode::All,
        }
    }

    pub fn ordinal(&self) -> u8 {
        match self {
            FilterMode::All => 0,
            FilterMode::Done => 1,
            FilterMode::NotDone => 2,
        }
    }
}
