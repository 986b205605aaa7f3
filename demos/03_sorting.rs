//! Example 03: Sorted Views
//!
//! This example demonstrates the three display sorts. Sorting orders the
//! projection only; the stored collection keeps its insertion order.
//!
//! Run with: cargo run --example 03_sorting

use eyre::Result;
use todostore::{NewTodo, Priority, TodoSort, TodoStore};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("TodoStore Sorting Example");
    println!("=========================\n");

    let mut store = TodoStore::new();

    // Create sample todos with mixed priorities
    println!("Creating sample todos...\n");
    let samples = [
        ("water the plants", Priority::Low),
        ("Fix critical bug", Priority::High),
        ("answer emails", Priority::Medium),
        ("Book dentist appointment", Priority::Medium),
    ];
    for (text, priority) in samples {
        let todo = store.add(NewTodo {
            priority,
            ..NewTodo::new(text)
        })?;
        println!("  Created: {} (priority={})", todo.text, todo.priority);
    }
    println!();

    // Sort 1: Created (the default) - newest first
    println!("1. Sort 'created' (newest first):");
    store.set_sort(TodoSort::Created);
    for todo in store.project() {
        println!("   - {}", todo.text);
    }
    println!();

    // Sort 2: Priority - high before medium before low, ties stay put
    println!("2. Sort 'priority' (high to low):");
    store.set_sort(TodoSort::Priority);
    for todo in store.project() {
        println!("   - {} ({})", todo.text, todo.priority);
    }
    println!();

    // Sort 3: Alphabetical - case-insensitive
    println!("3. Sort 'alphabetical' (A-Z, case-insensitive):");
    store.set_sort(TodoSort::Alphabetical);
    for todo in store.project() {
        println!("   - {}", todo.text);
    }
    println!();

    println!("Example complete!");
    Ok(())
}
