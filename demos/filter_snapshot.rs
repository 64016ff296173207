//! Filter a preference snapshot by search text
//!
//! This example demonstrates how to open a `Session` over a snapshot written
//! by `uepv dump` and list the entries matching a case-insensitive search.

use std::env;
use uepv::{DelimiterTruncation, Session, SnapshotStore};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <snapshot.json> [search]", args[0]);
        eprintln!("\nExamples:");
        eprintln!("  {} prefs.json", args[0]);
        eprintln!("  {} prefs.json volume", args[0]);
        return Ok(());
    }

    let search = args.get(2).map(String::as_str).unwrap_or("");

    let session = Session::open(SnapshotStore::new(&args[1]), DelimiterTruncation::default())?;
    println!("Reading preferences from: {}", session.location());
    println!("Search: {:?}\n", search);

    println!("{:-<80}", "");
    let mut match_count = 0;
    for entry in session.filter(search) {
        match_count += 1;
        println!("{:<50} = {:?}", entry.key, entry.value);
    }
    println!("{:-<80}", "");

    println!(
        "\nTotal matches: {} out of {} preferences",
        match_count,
        session.model().len()
    );

    Ok(())
}
