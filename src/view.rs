// View preferences and read-side projection helpers

use crate::models::{Priority, Todo};
use serde::{Deserialize, Serialize};

/// View-only predicate selecting which todos to display
///
/// Never deletes or mutates data; a filtered-out todo stays in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoFilter {
    All,
    Active,
    Completed,
}

impl Default for TodoFilter {
    fn default() -> Self {
        TodoFilter::All
    }
}

impl std::fmt::Display for TodoFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TodoFilter::All => write!(f, "all"),
            TodoFilter::Active => write!(f, "active"),
            TodoFilter::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for TodoFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(TodoFilter::All),
            "active" => Ok(TodoFilter::Active),
            "completed" => Ok(TodoFilter::Completed),
            other => Err(format!("unknown filter: {other}")),
        }
    }
}

/// View-only ordering applied to the filtered subset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoSort {
    Created,
    Priority,
    Alphabetical,
}

impl Default for TodoSort {
    fn default() -> Self {
        TodoSort::Created
    }
}

impl std::fmt::Display for TodoSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TodoSort::Created => write!(f, "created"),
            TodoSort::Priority => write!(f, "priority"),
            TodoSort::Alphabetical => write!(f, "alphabetical"),
        }
    }
}

impl std::str::FromStr for TodoSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created" => Ok(TodoSort::Created),
            "priority" => Ok(TodoSort::Priority),
            "alphabetical" => Ok(TodoSort::Alphabetical),
            other => Err(format!("unknown sort: {other}")),
        }
    }
}

/// Copy the todos visible under `filter`, preserving input order
pub fn filter_todos(todos: &[Todo], filter: TodoFilter) -> Vec<Todo> {
    todos
        .iter()
        .filter(|todo| match filter {
            TodoFilter::All => true,
            TodoFilter::Active => !todo.completed,
            TodoFilter::Completed => todo.completed,
        })
        .cloned()
        .collect()
}

/// Order `todos` for display
///
/// All three orderings use a stable sort: ties keep their input order.
/// `Created` sorts newest first by timestamp, `Priority` by descending severity
/// rank, `Alphabetical` ascending and case-insensitive on the text.
pub fn sort_todos(mut todos: Vec<Todo>, sort: TodoSort) -> Vec<Todo> {
    match sort {
        TodoSort::Created => todos.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        TodoSort::Priority => todos.sort_by(|a, b| b.priority.rank().cmp(&a.priority.rank())),
        TodoSort::Alphabetical => {
            todos.sort_by(|a, b| a.text.to_lowercase().cmp(&b.text.to_lowercase()));
        }
    }
    todos
}
