//! Example 01: Basic CRUD Operations
//!
//! This example demonstrates the fundamental create, read, update, and delete
//! operations with TodoStore.
//!
//! Run with: cargo run --example 01_basic_crud

use eyre::Result;
use todostore::{NewTodo, Priority, TodoStore};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("TodoStore Basic CRUD Example");
    println!("============================\n");

    // The store lives for the session; all state is in memory
    let mut store = TodoStore::new();

    // CREATE: Add a new todo
    println!("1. CREATE - Adding a new todo...");
    let todo = store.add(NewTodo {
        priority: Priority::High,
        category: Some("Shopping".to_string()),
        ..NewTodo::new("Buy milk")
    })?;
    println!("   Created todo with ID: {}\n", todo.id);

    // READ: Retrieve the todo
    println!("2. READ - Retrieving the todo...");
    match store.get(&todo.id) {
        Some(found) => {
            println!("   Found todo:");
            println!("   - ID: {}", found.id);
            println!("   - Text: {}", found.text);
            println!("   - Priority: {}", found.priority);
            println!("   - Category: {}", found.category.as_deref().unwrap_or("(none)"));
        }
        None => println!("   Todo not found!"),
    }
    println!();

    // UPDATE: Edit the text
    println!("3. UPDATE - Editing the todo text...");
    store.edit(&todo.id, "Buy oat milk")?;
    println!("   New text: {}\n", store.get(&todo.id).map(|t| t.text.as_str()).unwrap_or(""));

    // A blank edit is rejected and leaves the store unchanged
    println!("4. VALIDATION - Blank text is rejected...");
    match store.edit(&todo.id, "   ") {
        Ok(()) => println!("   Unexpectedly accepted!"),
        Err(e) => println!("   Rejected as expected: {}", e),
    }
    println!("   Text is still: {}\n", store.get(&todo.id).map(|t| t.text.as_str()).unwrap_or(""));

    // TOGGLE: Mark it done
    println!("5. TOGGLE - Completing the todo...");
    store.toggle(&todo.id);
    println!("   Completed = {}\n", store.get(&todo.id).map(|t| t.completed).unwrap_or(false));

    // LIST: Show the collection
    println!("6. LIST - Showing all todos...");
    for todo in store.todos() {
        let mark = if todo.completed { "x" } else { " " };
        println!("   [{}] {} ({})", mark, todo.text, todo.priority);
    }
    println!();

    // DELETE: Remove the todo
    println!("7. DELETE - Removing the todo...");
    store.delete(&todo.id);
    println!("   Verification: todo exists = {}\n", store.get(&todo.id).is_some());

    println!("Example complete!");
    Ok(())
}
