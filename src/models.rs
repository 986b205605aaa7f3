// Data models for TodoStore

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single user-entered todo item
///
/// Serializes with camelCase keys (`createdAt`) to match the shape the
/// presentation layer exchanges; `category` is omitted when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Input shape for creating a todo
///
/// The store assigns `id` and `created_at` itself. A `completed` flag supplied
/// by the caller is ignored: new todos always start out open.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub text: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl NewTodo {
    /// Input with the given text, default priority, and no category
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            priority: Priority::default(),
            category: None,
            completed: false,
        }
    }
}

/// Priority level of a todo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Severity rank used by the priority sort: high outranks medium outranks low
    pub fn rank(self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!("unknown priority: {other}")),
        }
    }
}

/// A named category with display metadata
///
/// Part of the model vocabulary only. The store never manages categories;
/// todos carry a free-form category string instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoCategory {
    pub id: String,
    pub name: String,
    pub color: String,
    pub icon: String,
}

/// Aggregate counts over the unfiltered collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TodoStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}
