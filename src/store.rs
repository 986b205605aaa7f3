// In-memory todo store with view preferences and derived projections

use crate::models::{NewTodo, Todo, TodoStats};
use crate::view::{self, TodoFilter, TodoSort};
use chrono::Utc;
use eyre::{Result, eyre};
use tracing::{debug, info};
use uuid::Uuid;

/// In-memory store owning the todo collection and the two view preferences
///
/// All mutations go through `&mut self` methods, so the borrow checker enforces
/// the single-writer discipline. Read-side projections are fresh copies of the
/// stored data; callers can never corrupt store state through a returned value.
pub struct TodoStore {
    todos: Vec<Todo>,
    filter: TodoFilter,
    sort: TodoSort,
}

impl TodoStore {
    /// Create an empty store with default view preferences
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            filter: TodoFilter::default(),
            sort: TodoSort::default(),
        }
    }

    /// Add a new todo at the head of the collection
    ///
    /// The store assigns a fresh UUIDv7 id and the creation timestamp. Text is
    /// trimmed and must be non-empty; the category is trimmed and dropped when
    /// empty. A `completed` flag on the input is ignored: new todos start open.
    ///
    /// Returns a copy of the stored todo.
    pub fn add(&mut self, new: NewTodo) -> Result<Todo> {
        let text = new.text.trim();
        if text.is_empty() {
            return Err(eyre!("Todo text cannot be empty"));
        }

        let category = new
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        let todo = Todo {
            id: Uuid::now_v7().to_string(),
            text: text.to_string(),
            completed: false,
            created_at: Utc::now(),
            priority: new.priority,
            category,
        };

        debug!(id = %todo.id, priority = %todo.priority, "adding todo");
        self.todos.insert(0, todo.clone());
        Ok(todo)
    }

    /// Flip the completion state of the todo with the given id
    ///
    /// No-op when the id is absent; the UI may race a toggle against a delete.
    pub fn toggle(&mut self, id: &str) {
        if let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) {
            todo.completed = !todo.completed;
            debug!(id, completed = todo.completed, "toggled todo");
        }
    }

    /// Replace the text of the todo with the given id
    ///
    /// The new text is trimmed and must be non-empty; a blank edit leaves the
    /// store unchanged. No-op when the id is absent.
    pub fn edit(&mut self, id: &str, new_text: &str) -> Result<()> {
        let text = new_text.trim();
        if text.is_empty() {
            return Err(eyre!("Todo text cannot be empty"));
        }

        if let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) {
            todo.text = text.to_string();
            debug!(id, "edited todo");
        }
        Ok(())
    }

    /// Remove the todo with the given id, if present
    pub fn delete(&mut self, id: &str) {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        if self.todos.len() < before {
            debug!(id, "deleted todo");
        }
    }

    /// Remove every completed todo
    ///
    /// Confirming the bulk delete with the user belongs to the caller; clearing
    /// when nothing is completed is a harmless no-op.
    pub fn clear_completed(&mut self) {
        let before = self.todos.len();
        self.todos.retain(|t| !t.completed);
        info!(removed = before - self.todos.len(), "cleared completed todos");
    }

    /// Active display filter
    pub fn filter(&self) -> TodoFilter {
        self.filter
    }

    /// Set the display filter; takes effect on the next projection
    pub fn set_filter(&mut self, filter: TodoFilter) {
        self.filter = filter;
    }

    /// Active display sort
    pub fn sort(&self) -> TodoSort {
        self.sort
    }

    /// Set the display sort; takes effect on the next projection
    pub fn set_sort(&mut self, sort: TodoSort) {
        self.sort = sort;
    }

    /// Borrow the todo with the given id
    pub fn get(&self, id: &str) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Borrow the full collection in storage order (newest first)
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Aggregate counts over the unfiltered collection
    ///
    /// Computed on every call; never cached.
    pub fn stats(&self) -> TodoStats {
        let total = self.todos.len();
        let completed = self.todos.iter().filter(|t| t.completed).count();

        TodoStats {
            total,
            active: total - completed,
            completed,
        }
    }

    /// Compute the display projection: filter, then stable sort
    ///
    /// Returns a fresh copy on every call; mutating the result has no effect on
    /// the stored collection.
    pub fn project(&self) -> Vec<Todo> {
        let filtered = view::filter_todos(&self.todos, self.filter);
        view::sort_todos(filtered, self.sort)
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;
    use std::collections::HashSet;

    fn add(store: &mut TodoStore, text: &str) -> Todo {
        store.add(NewTodo::new(text)).unwrap()
    }

    fn add_with_priority(store: &mut TodoStore, text: &str, priority: Priority) -> Todo {
        store
            .add(NewTodo {
                priority,
                ..NewTodo::new(text)
            })
            .unwrap()
    }

    #[test]
    fn test_add_assigns_unique_ids() {
        let mut store = TodoStore::new();

        let ids: HashSet<String> = (0..50).map(|i| add(&mut store, &format!("todo {}", i)).id).collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_add_rejects_blank_text() {
        let mut store = TodoStore::new();

        assert!(store.add(NewTodo::new("   ")).is_err());
        assert!(store.add(NewTodo::new("")).is_err());
        assert!(store.todos().is_empty());
    }

    #[test]
    fn test_add_trims_text() {
        let mut store = TodoStore::new();

        let todo = add(&mut store, "  buy milk  ");
        assert_eq!(todo.text, "buy milk");
        assert_eq!(store.get(&todo.id).unwrap().text, "buy milk");
    }

    #[test]
    fn test_add_trims_category_and_drops_empty() {
        let mut store = TodoStore::new();

        let todo = store
            .add(NewTodo {
                category: Some("  Work  ".to_string()),
                ..NewTodo::new("send report")
            })
            .unwrap();
        assert_eq!(todo.category.as_deref(), Some("Work"));

        let todo = store
            .add(NewTodo {
                category: Some("   ".to_string()),
                ..NewTodo::new("no category")
            })
            .unwrap();
        assert_eq!(todo.category, None);
    }

    #[test]
    fn test_add_ignores_completed_flag() {
        let mut store = TodoStore::new();

        let todo = store
            .add(NewTodo {
                completed: true,
                ..NewTodo::new("still open")
            })
            .unwrap();
        assert!(!todo.completed);
        assert!(!store.get(&todo.id).unwrap().completed);
    }

    #[test]
    fn test_add_prepends_newest_first() {
        let mut store = TodoStore::new();

        add(&mut store, "first");
        add(&mut store, "second");

        assert_eq!(store.todos()[0].text, "second");
        assert_eq!(store.todos()[1].text, "first");
    }

    #[test]
    fn test_toggle_flips_only_completion() {
        let mut store = TodoStore::new();
        let todo = add_with_priority(&mut store, "walk dog", Priority::High);

        store.toggle(&todo.id);

        let toggled = store.get(&todo.id).unwrap();
        assert!(toggled.completed);
        assert_eq!(toggled.text, todo.text);
        assert_eq!(toggled.priority, todo.priority);
        assert_eq!(toggled.created_at, todo.created_at);
        assert_eq!(toggled.category, todo.category);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut store = TodoStore::new();
        let todo = add(&mut store, "walk dog");

        store.toggle(&todo.id);
        store.toggle(&todo.id);

        assert!(!store.get(&todo.id).unwrap().completed);
    }

    #[test]
    fn test_toggle_missing_id_is_noop() {
        let mut store = TodoStore::new();
        add(&mut store, "only todo");

        store.toggle("nonexistent");

        assert_eq!(store.todos().len(), 1);
        assert!(!store.todos()[0].completed);
    }

    #[test]
    fn test_edit_replaces_text() {
        let mut store = TodoStore::new();
        let todo = add(&mut store, "original");

        store.edit(&todo.id, "  updated  ").unwrap();

        let edited = store.get(&todo.id).unwrap();
        assert_eq!(edited.text, "updated");
        assert_eq!(edited.created_at, todo.created_at);
    }

    #[test]
    fn test_edit_rejects_blank_text() {
        let mut store = TodoStore::new();
        let todo = add(&mut store, "original");

        assert!(store.edit(&todo.id, "   ").is_err());
        assert_eq!(store.get(&todo.id).unwrap().text, "original");
    }

    #[test]
    fn test_edit_missing_id_is_noop() {
        let mut store = TodoStore::new();
        add(&mut store, "only todo");

        store.edit("nonexistent", "new text").unwrap();

        assert_eq!(store.todos().len(), 1);
        assert_eq!(store.todos()[0].text, "only todo");
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut store = TodoStore::new();
        let first = add(&mut store, "first");
        let second = add(&mut store, "second");

        store.delete(&first.id);

        assert_eq!(store.todos().len(), 1);
        assert_eq!(store.todos()[0].id, second.id);
        assert_eq!(store.todos()[0].text, "second");
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let mut store = TodoStore::new();
        add(&mut store, "only todo");

        store.delete("nonexistent");

        assert_eq!(store.todos().len(), 1);
    }

    #[test]
    fn test_clear_completed_keeps_active() {
        let mut store = TodoStore::new();
        let a = add(&mut store, "a");
        let b = add(&mut store, "b");
        let c = add(&mut store, "c");

        store.toggle(&a.id);
        store.toggle(&c.id);
        store.clear_completed();

        assert_eq!(store.todos().len(), 1);
        assert_eq!(store.todos()[0].id, b.id);
    }

    #[test]
    fn test_clear_completed_with_none_completed_is_noop() {
        let mut store = TodoStore::new();
        add(&mut store, "a");
        add(&mut store, "b");

        store.clear_completed();

        assert_eq!(store.todos().len(), 2);
    }

    #[test]
    fn test_stats() {
        let mut store = TodoStore::new();
        assert_eq!(store.stats(), TodoStats { total: 0, active: 0, completed: 0 });

        let a = add(&mut store, "a");
        add(&mut store, "b");
        add(&mut store, "c");
        store.toggle(&a.id);

        let stats = store.stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.active, 2);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.total, stats.active + stats.completed);

        let completed = store.todos().iter().filter(|t| t.completed).count();
        assert_eq!(stats.completed, completed);
    }

    #[test]
    fn test_default_view_preferences() {
        let store = TodoStore::new();
        assert_eq!(store.filter(), TodoFilter::All);
        assert_eq!(store.sort(), TodoSort::Created);
    }

    #[test]
    fn test_project_created_sort_newest_first() {
        let mut store = TodoStore::new();
        add(&mut store, "first");
        add(&mut store, "second");
        add(&mut store, "third");

        let projected = store.project();
        let texts: Vec<&str> = projected.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["third", "second", "first"]);
    }

    #[test]
    fn test_project_priority_sort() {
        let mut store = TodoStore::new();
        add_with_priority(&mut store, "low one", Priority::Low);
        add_with_priority(&mut store, "high one", Priority::High);
        add_with_priority(&mut store, "medium one", Priority::Medium);

        store.set_sort(TodoSort::Priority);

        let projected = store.project();
        let texts: Vec<&str> = projected.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["high one", "medium one", "low one"]);
    }

    #[test]
    fn test_project_active_filter_excludes_completed() {
        let mut store = TodoStore::new();
        add_with_priority(&mut store, "low one", Priority::Low);
        let high = add_with_priority(&mut store, "high one", Priority::High);
        add_with_priority(&mut store, "medium one", Priority::Medium);

        store.toggle(&high.id);
        store.set_filter(TodoFilter::Active);
        store.set_sort(TodoSort::Priority);

        let projected = store.project();
        let texts: Vec<&str> = projected.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["medium one", "low one"]);
    }

    #[test]
    fn test_project_does_not_alias_store_state() {
        let mut store = TodoStore::new();
        add(&mut store, "a");
        add(&mut store, "b");

        let mut projected = store.project();
        projected.clear();
        projected.push(Todo {
            id: "injected".to_string(),
            text: "injected".to_string(),
            completed: false,
            created_at: Utc::now(),
            priority: Priority::Medium,
            category: None,
        });

        assert_eq!(store.todos().len(), 2);
        assert_eq!(store.project().len(), 2);
        assert!(store.get("injected").is_none());
    }

    #[test]
    fn test_project_does_not_mutate_storage_order() {
        let mut store = TodoStore::new();
        add(&mut store, "Apple");
        add(&mut store, "banana");

        store.set_sort(TodoSort::Alphabetical);
        let projected = store.project();
        assert_eq!(projected[0].text, "Apple");

        // Storage order (newest first) is untouched by the sorted view
        assert_eq!(store.todos()[0].text, "banana");
        assert_eq!(store.todos()[1].text, "Apple");
    }
}
