use crate::core::platform::Platform;
use crate::core::release::{self, DUCKDB_VERSION};
use crate::error::Result;

pub fn list_platforms() -> Result<()> {
    println!("Supported platforms (pinned to duckdb {DUCKDB_VERSION}):");

    for platform in Platform::all() {
        println!("  {platform}");
        println!("    url:   {}", release::archive_url(*platform, DUCKDB_VERSION));
        println!("    files: {}", platform.expected_files().join(", "));
    }

    println!();
    println!("Fetch: duckfetch fetch <platform> [output-dir]");
    Ok(())
}
