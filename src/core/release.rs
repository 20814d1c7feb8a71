use crate::core::platform::Platform;
use crate::error::{DuckfetchError, Result};
use std::path::PathBuf;

/// Release tag of duckdb that the platform table is pinned to.
pub const DUCKDB_VERSION: &str = "v1.4.0";

/// Release tag normalization utilities
pub mod normalize {
    /// Normalize a tag by removing the 'v' prefix if present
    /// Examples: "v1.4.0" -> "1.4.0", "1.4.0" -> "1.4.0", "latest" -> "latest"
    pub fn to_plain_version(tag: &str) -> String {
        if tag == "latest" {
            tag.to_string()
        } else if let Some(stripped) = tag.strip_prefix('v') {
            stripped.to_string()
        } else {
            tag.to_string()
        }
    }

    /// Convert a version to GitHub release-tag format by adding the 'v'
    /// prefix if needed
    /// Examples: "1.4.0" -> "v1.4.0", "v1.4.0" -> "v1.4.0", "latest" -> "latest"
    pub fn to_release_tag(version: &str) -> String {
        if version == "latest" || version.starts_with('v') {
            version.to_string()
        } else {
            format!("v{version}")
        }
    }
}

/// Reject tags that are empty or could walk out of the download URL path.
pub fn validate_tag(tag: &str) -> Result<()> {
    if tag.is_empty() || tag.contains("..") || tag.contains('/') || tag.contains('\\') {
        return Err(DuckfetchError::InvalidRelease {
            tag: tag.to_string(),
        });
    }
    Ok(())
}

/// Download URL of the libduckdb archive for a platform at a release tag.
pub fn archive_url(platform: Platform, tag: &str) -> String {
    format!(
        "https://github.com/duckdb/duckdb/releases/download/{tag}/libduckdb-{}.zip",
        platform.slug()
    )
}

/// Everything one fetch invocation needs: where to download from, where to
/// put it, and which entries must come out of the archive.
#[derive(Debug, Clone)]
pub struct FetchSpec {
    pub archive_url: String,
    pub destination_dir: PathBuf,
    pub expected_files: Vec<String>,
}

impl FetchSpec {
    pub fn for_platform(platform: Platform, tag: &str, destination_dir: PathBuf) -> Result<Self> {
        validate_tag(tag)?;

        Ok(FetchSpec {
            archive_url: archive_url(platform, tag),
            destination_dir,
            expected_files: platform
                .expected_files()
                .iter()
                .map(|name| name.to_string())
                .collect(),
        })
    }
}
