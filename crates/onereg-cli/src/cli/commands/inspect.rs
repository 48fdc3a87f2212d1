//! `onereg inspect` – fetch and parse an index without registering anything.

use anyhow::Result;
use onereg_core::index;

pub async fn run_inspect(index_url: &str) -> Result<()> {
    let records = index::load_index(index_url).await?;
    if records.is_empty() {
        println!("Index is empty.");
        return Ok(());
    }

    println!("{:<12} {:<12} {}", "SIZE", "CHECKSUM", "PATH");
    for r in &records {
        println!("{:<12} {:<12} {}", r.size, r.checksum, r.path);
    }
    println!("{} record(s).", records.len());
    Ok(())
}
