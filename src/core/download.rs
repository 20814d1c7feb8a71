use crate::error::{DuckfetchError, Result};
use std::path::Path;
use std::process::Command;

pub struct Downloader;

impl Default for Downloader {
    fn default() -> Self {
        Self
    }
}

impl Downloader {
    pub fn new() -> Self {
        Self
    }

    /// Download a URL to a destination path, overwriting any prior file
    /// there. The parent directory must already exist. Blocks until the
    /// transfer finishes or the transport gives up.
    pub fn download_file(&self, url: &str, destination: &Path) -> Result<()> {
        let output = Command::new("curl")
            .arg("-f") // non-2xx responses must fail, not save the error body
            .arg("-s") // Silent
            .arg("-L") // Follow redirects
            .arg("-H")
            .arg("User-Agent: duckfetch/0.1.0")
            .arg("-o")
            .arg(destination)
            .arg(url)
            .output()?;

        if !output.status.success() {
            return Err(DuckfetchError::Download {
                url: url.to_string(),
            });
        }

        Ok(())
    }
}
