use crate::core::platform::{self, Platform};
use crate::core::release::DUCKDB_VERSION;
use crate::error::Result;
use std::path::Path;

pub fn check_environment() -> Result<()> {
    println!("🔍 duckfetch - Environment Check");
    println!();

    let mut issues_found = 0;

    println!("🌐 Download Tool:");
    match which::which("curl") {
        Ok(path) => println!("  ✅ curl found: {path:?}"),
        Err(_) => {
            println!("  ❌ curl not found on PATH");
            println!("     Downloads shell out to curl; install it first.");
            issues_found += 1;
        }
    }

    println!();
    println!("💻 Host Platform:");
    match Platform::host() {
        Some(host) => {
            println!("  ✅ detected: {host}");
            println!("     files: {}", host.expected_files().join(", "));
        }
        None => {
            println!(
                "  ❌ no prebuilt libduckdb archive for {}",
                platform::host_suffix()
            );
            println!("     Pass an explicit platform to fetch for another machine.");
            issues_found += 1;
        }
    }

    println!();
    println!("📌 Pinned Release:");
    println!("  {DUCKDB_VERSION}");

    println!();
    println!("📁 Default Output Directory:");
    let default_dir = Path::new("libduckdb");
    if default_dir.exists() {
        println!("  ✅ ./libduckdb exists");
        if default_dir.join("libduckdb.zip").exists() {
            println!("     previous archive present; the next fetch overwrites it");
        }
    } else {
        println!("  ℹ️  ./libduckdb will be created on first fetch");
    }

    println!();
    if issues_found == 0 {
        println!("✅ No issues found");
    } else {
        println!("⚠️  {issues_found} issue(s) found");
    }

    Ok(())
}
