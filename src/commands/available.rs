use crate::core::github::GitHubClient;
use crate::core::release::DUCKDB_VERSION;
use crate::error::Result;

pub fn list_available_releases() -> Result<()> {
    let github_client = GitHubClient::new();

    match github_client.get_releases("duckdb", "duckdb") {
        Ok(releases) => {
            if releases.is_empty() {
                println!("No releases available.");
                println!("Check: https://github.com/duckdb/duckdb/releases");
            } else {
                println!("Available duckdb releases:");

                for (i, release) in releases.iter().enumerate() {
                    if release.draft {
                        continue;
                    }

                    let latest = if i == 0 { " (latest)" } else { "" };
                    let pinned = if release.tag_name == DUCKDB_VERSION {
                        " [pinned]"
                    } else {
                        ""
                    };
                    let prerelease = if release.prerelease {
                        " [prerelease]"
                    } else {
                        ""
                    };

                    println!("  {}{latest}{pinned}{prerelease}", release.tag_name);
                }

                println!();
                println!("Fetch one: duckfetch fetch --release <tag>");
            }
        }
        Err(e) => {
            println!("Unable to fetch releases: {e}");
            println!("Check: https://github.com/duckdb/duckdb/releases");
        }
    }

    Ok(())
}
