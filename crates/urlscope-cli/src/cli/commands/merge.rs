//! `urlscope merge <url> <key=value>...` – merge pairs into the URL's query.

use anyhow::{bail, Result};
use urlscope_core::config::Overrides;

use super::scope_for;

pub fn run_merge(url: &str, pairs: &[String], overrides: &Overrides) -> Result<()> {
    let entries = pairs
        .iter()
        .map(|raw| parse_pair(raw))
        .collect::<Result<Vec<_>>>()?;

    let scope = scope_for(url, overrides)?;
    let merged = scope.add_to_query(entries);

    println!("query string: {}", merged.query_string);
    println!("collection:");
    for (key, value) in &merged.collection {
        println!("  {key} = {value}");
    }
    Ok(())
}

/// Splits `key=value` at the first `=`; the value may itself contain `=`.
pub(crate) fn parse_pair(raw: &str) -> Result<(String, String)> {
    match raw.split_once('=') {
        Some((key, _)) if key.is_empty() => bail!("empty key in pair: {raw}"),
        Some((key, value)) => Ok((key.to_string(), value.to_string())),
        None => bail!("expected key=value, got: {raw}"),
    }
}
