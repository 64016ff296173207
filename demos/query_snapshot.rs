//! Query preferences example using glob patterns
//!
//! This example demonstrates how to select snapshot entries whose key
//! matches any of several glob patterns.

use std::env;
use uepv::{query_entries, DelimiterTruncation, Session, SnapshotStore};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!(
            "Usage: {} <snapshot.json> <pattern1> [pattern2...]",
            args[0]
        );
        eprintln!("\nExamples:");
        eprintln!("  {} prefs.json 'Scene*'", args[0]);
        eprintln!("  {} prefs.json 'UnityEditor.*' 'k*'", args[0]);
        return Ok(());
    }

    let patterns: Vec<&str> = args[2..].iter().map(|s| s.as_str()).collect();
    let session = Session::open(SnapshotStore::new(&args[1]), DelimiterTruncation::default())?;

    println!("Query patterns: {:?}\n", patterns);
    let matches = query_entries(session.filter(""), &patterns)?;

    println!("Matching preferences:");
    println!("{:-<80}", "");
    for entry in &matches {
        println!("{:<50} = {:?}", entry.key, entry.value);
    }
    println!("{:-<80}", "");
    println!(
        "\nTotal matches: {} out of {} preferences",
        matches.len(),
        session.model().len()
    );

    println!("\nPattern breakdown:");
    for pattern in &patterns {
        let count = query_entries(&matches, &[*pattern])?.len();
        println!("  {} - {} matches", pattern, count);
    }

    Ok(())
}
