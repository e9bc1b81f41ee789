//! `urlscope page <url>` – just the derived page identifier.

use anyhow::Result;
use urlscope_core::config::Overrides;

use super::scope_for;

pub fn run_page(url: &str, overrides: &Overrides) -> Result<()> {
    let scope = scope_for(url, overrides)?;
    println!("{}", scope.page());
    Ok(())
}
