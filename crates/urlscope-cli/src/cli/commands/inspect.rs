//! `urlscope inspect <url>` – everything derived from a URL.

use anyhow::Result;
use urlscope_core::config::Overrides;

use super::scope_for;

pub fn run_inspect(url: &str, overrides: &Overrides) -> Result<()> {
    let scope = scope_for(url, overrides)?;
    let id = scope.identity();

    println!("{:<10} {}", "PAGE", scope.page());
    println!("{:<10} {}", "PROTOCOL", id.protocol);
    println!("{:<10} {}", "HOST", id.host);
    println!("{:<10} {}", "PATH", id.path);
    println!("{:<10} {}", "TEMPLATE", id.template);
    println!("{:<10} {}", "SITE_URL", id.site_url);
    println!("{:<10} {}", "FULL_URL", id.full_url);
    println!("{:<10} {}", "READ_URL", id.read_url);
    println!("{:<10} {}", "HASH", scope.hash());
    Ok(())
}
