use crate::error::{DuckfetchError, Result};
use serde::{Deserialize, Serialize};
use std::process::Command;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Release {
    pub tag_name: String,
    #[serde(default)]
    pub name: String,
    pub prerelease: bool,
    pub draft: bool,
}

pub struct GitHubClient;

impl Default for GitHubClient {
    fn default() -> Self {
        Self
    }
}

impl GitHubClient {
    pub fn new() -> Self {
        Self
    }

    pub fn get_releases(&self, repo_owner: &str, repo_name: &str) -> Result<Vec<Release>> {
        let url = format!("https://api.github.com/repos/{repo_owner}/{repo_name}/releases");

        let response_text = self.get(&url)?;
        let releases: Vec<Release> = serde_json::from_str(&response_text)?;
        Ok(releases)
    }

    pub fn get_latest_release(&self, repo_owner: &str, repo_name: &str) -> Result<Release> {
        let url = format!("https://api.github.com/repos/{repo_owner}/{repo_name}/releases/latest");

        let response_text = self.get(&url)?;
        let release: Release = serde_json::from_str(&response_text)?;
        Ok(release)
    }

    fn get(&self, url: &str) -> Result<String> {
        let output = Command::new("curl")
            .arg("-f")
            .arg("-s")
            .arg("-H")
            .arg("User-Agent: duckfetch/0.1.0")
            .arg(url)
            .output()?;

        if !output.status.success() {
            return Err(DuckfetchError::github_error(format!(
                "curl exited with status {:?} for {url}",
                output.status.code()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
