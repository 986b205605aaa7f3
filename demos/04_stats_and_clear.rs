//! Example 04: Stats and Clearing Completed Todos
//!
//! This example demonstrates the stats summary and the bulk clear operation.
//! Asking the user for confirmation before clearing belongs to the caller;
//! the store clears unconditionally.
//!
//! Run with: cargo run --example 04_stats_and_clear

use eyre::Result;
use todostore::{NewTodo, TodoStore};

fn print_stats(store: &TodoStore) {
    let stats = store.stats();
    println!("   total={} active={} completed={}", stats.total, stats.active, stats.completed);
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("TodoStore Stats Example");
    println!("=======================\n");

    let mut store = TodoStore::new();

    // Create sample todos
    println!("Creating sample todos...");
    let mut ids = Vec::new();
    for text in ["Pack for trip", "Renew passport", "Check in online", "Buy sunscreen"] {
        ids.push(store.add(NewTodo::new(text))?.id);
    }
    print_stats(&store);
    println!();

    // Complete a couple of them
    println!("1. Completing two todos...");
    store.toggle(&ids[0]);
    store.toggle(&ids[3]);
    print_stats(&store);
    println!();

    // Clear completed - the caller-side courtesy check first
    println!("2. Clearing completed todos...");
    if store.stats().completed > 0 {
        store.clear_completed();
        println!("   Cleared.");
    } else {
        println!("   There are no completed todos to clear.");
    }
    print_stats(&store);
    println!();

    // Clearing again finds nothing to do
    println!("3. Clearing again...");
    if store.stats().completed > 0 {
        store.clear_completed();
    } else {
        println!("   There are no completed todos to clear.");
    }
    print_stats(&store);
    println!();

    println!("Example complete!");
    Ok(())
}
