//! `urlscope params <url>` – parsed query snapshot.

use anyhow::Result;
use urlscope_core::config::Overrides;

use super::scope_for;

pub fn run_params(url: &str, overrides: &Overrides) -> Result<()> {
    let scope = scope_for(url, overrides)?;
    let snap = scope.params();

    println!("search:       {}", snap.search);
    println!("query string: {}", snap.query_string);

    if snap.params.is_empty() {
        println!("(no parameters)");
        return Ok(());
    }

    println!("pairs:");
    for (key, value) in &snap.params {
        println!("  {key} = {value}");
    }
    println!("collection (last occurrence wins):");
    for (key, value) in &snap.collection {
        println!("  {key} = {value}");
    }
    Ok(())
}
