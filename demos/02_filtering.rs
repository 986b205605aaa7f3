//! Example 02: Filtered Views
//!
//! This example demonstrates the three display filters. Filters only select
//! which todos a projection shows; the store keeps everything.
//!
//! Run with: cargo run --example 02_filtering

use eyre::Result;
use todostore::{NewTodo, TodoFilter, TodoStore};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("TodoStore Filtering Example");
    println!("===========================\n");

    let mut store = TodoStore::new();

    // Create sample todos and complete a couple of them
    println!("Creating sample todos...\n");
    let texts = ["Write documentation", "Fix login bug", "Review pull request", "Update tests", "Deploy to staging"];
    let mut ids = Vec::new();
    for text in texts {
        let todo = store.add(NewTodo::new(text))?;
        println!("  Created: {}", todo.text);
        ids.push(todo.id);
    }
    store.toggle(&ids[1]);
    store.toggle(&ids[3]);
    println!("\nCompleted: {} and {}\n", texts[1], texts[3]);

    // Filter 1: All (the default)
    println!("1. Filter 'all':");
    store.set_filter(TodoFilter::All);
    for todo in store.project() {
        let mark = if todo.completed { "x" } else { " " };
        println!("   [{}] {}", mark, todo.text);
    }
    println!();

    // Filter 2: Active only
    println!("2. Filter 'active':");
    store.set_filter(TodoFilter::Active);
    let active = store.project();
    for todo in &active {
        println!("   [ ] {}", todo.text);
    }
    println!("   Found: {} todos\n", active.len());

    // Filter 3: Completed only
    println!("3. Filter 'completed':");
    store.set_filter(TodoFilter::Completed);
    let completed = store.project();
    for todo in &completed {
        println!("   [x] {}", todo.text);
    }
    println!("   Found: {} todos\n", completed.len());

    // The store itself is untouched by filtering
    println!("4. The store still holds all {} todos.\n", store.todos().len());

    println!("Example complete!");
    Ok(())
}
