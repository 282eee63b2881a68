//! Basic usage example for synckit
//!
//! This example walks through the three components: the concurrent map
//! shared across threads, the single-owner set, and the slice membership
//! helpers.

use std::sync::Arc;
use std::thread;
use synckit::{slices, Set, SyncMap};

fn main() {
    println!("synckit Usage Example");
    println!("=====================");

    // Concurrent map shared across threads
    println!("\n1. SyncMap:");
    let map: Arc<SyncMap<String, usize>> = Arc::new(SyncMap::new());

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let map = Arc::clone(&map);
            thread::spawn(move || {
                for i in 0..25 {
                    map.insert(format!("worker_{}_item_{}", worker, i), worker);
                }
                // First thread to claim the marker key wins
                let (owner, loaded) = map.get_or_insert("marker".to_string(), worker);
                if !loaded {
                    println!("   Worker {} claimed the marker", owner);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    println!("   Map holds {} entries", map.len());

    // Conditional updates
    let marker = map.get(&"marker".to_string()).unwrap();
    if map.compare_and_swap(&"marker".to_string(), &marker, 99) {
        println!("   Swapped marker {} -> 99", marker);
    }
    map.remove(&"marker".to_string());

    // Single-owner set
    println!("\n2. Set:");
    let mut writers: Set<usize> = map.iter().map(|(_, writer)| writer).collect();
    println!("   Distinct writers: {}", writers.len());
    writers.insert(42);
    writers.remove(&42);

    // Slice membership helpers
    println!("\n3. slices:");
    let roster: Vec<usize> = (0..4).collect();
    for writer in &writers {
        println!(
            "   writer {} on roster: {}",
            writer,
            slices::contains(&roster, writer)
        );
    }

    println!("\nDone.");
}
