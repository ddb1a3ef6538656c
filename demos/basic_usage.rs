// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Basic zk-map usage example.
//!
//! Demonstrates:
//! 1. Connecting to a ZooKeeper server
//! 2. Writing one entry
//! 3. Reading it back and printing it
//!
//! # Prerequisites
//!
//! A ZooKeeper server on localhost:2181, e.g.:
//! ```bash
//! docker run --rm -p 2181:2181 zookeeper:3.9
//! ```
//!
//! # Run
//!
//! ```bash
//! cargo run --example basic_usage
//! ```

use zk_map::{ZkMap, ZkMapConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Simple logging (no filter for simplicity)
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    let config = ZkMapConfig {
        // Replace with the address of your ZooKeeper server
        connect_string: "localhost:2181".into(),
        session_timeout_ms: 3_000,
    };

    println!("📦 Connecting to {}...", config.connect_string);
    let map = ZkMap::connect(&config)?;

    // Keys must begin with a / character
    let previous = map.insert("/node2", "node 2 data")?;
    println!("   └─ insert(/node2) → previous: {previous:?}");

    let value = map.get("/node2")?;
    println!("   └─ get(/node2) → {value:?}");

    println!("   └─ tracked entries: {}", map.len());

    map.close()?;
    println!("✅ Session closed");
    Ok(())
}
