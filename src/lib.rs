// TodoStore - In-memory todo state management with filtered, sorted views

pub mod models;
pub mod store;
pub mod view;

// Re-export main types for convenience
pub use models::{NewTodo, Priority, Todo, TodoCategory, TodoStats};
pub use store::TodoStore;
pub use view::{TodoFilter, TodoSort, filter_todos, sort_todos};
