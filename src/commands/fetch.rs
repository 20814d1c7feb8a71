use crate::core::fetcher;
use crate::core::github::GitHubClient;
use crate::core::platform::{self, Platform};
use crate::core::release::{self, FetchSpec, DUCKDB_VERSION};
use crate::error::{DuckfetchError, Result};
use std::path::PathBuf;

pub fn fetch_platform(
    platform: Option<&str>,
    output_dir: &str,
    release_tag: Option<&str>,
) -> Result<()> {
    let platform = match platform {
        Some(name) => name.parse::<Platform>()?,
        None => Platform::host().ok_or_else(|| DuckfetchError::UnknownPlatform {
            name: platform::host_suffix(),
        })?,
    };

    let tag = match release_tag {
        Some("latest") => {
            println!("Resolving latest duckdb release...");
            let release = GitHubClient::new().get_latest_release("duckdb", "duckdb")?;
            println!("Latest release: {}", release.tag_name);
            release.tag_name
        }
        Some(tag) => release::normalize::to_release_tag(tag),
        None => DUCKDB_VERSION.to_string(),
    };

    let spec = FetchSpec::for_platform(platform, &tag, PathBuf::from(output_dir))?;
    fetcher::fetch(&spec)?;

    println!("✅ Fetched libduckdb {tag} for {platform} into {output_dir}");
    Ok(())
}
