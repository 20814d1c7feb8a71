use crate::core::download::Downloader;
use crate::core::extract;
use crate::core::release::FetchSpec;
use crate::error::Result;
use crate::utils::fs;

/// Name the downloaded archive is stored under inside the destination
/// directory. The file is overwritten on every fetch and retained afterwards.
pub const ARCHIVE_FILE_NAME: &str = "libduckdb.zip";

/// Download the archive named by `spec` and extract its expected entries
/// into the destination directory. Creates the destination first if absent.
pub fn fetch(spec: &FetchSpec) -> Result<()> {
    fs::ensure_dir_exists(&spec.destination_dir)?;

    let archive_path = spec.destination_dir.join(ARCHIVE_FILE_NAME);
    println!("fetching: {}", spec.archive_url);
    Downloader::new().download_file(&spec.archive_url, &archive_path)?;

    extract::unpack_expected(&archive_path, &spec.destination_dir, &spec.expected_files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DuckfetchError;

    #[test]
    fn download_failure_leaves_nothing_extracted() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("libduckdb");
        let spec = FetchSpec {
            // unresolvable host, so curl fails before any HTTP exchange
            archive_url: "https://localhost.invalid/libduckdb-linux-amd64.zip".to_string(),
            destination_dir: dest.clone(),
            expected_files: vec!["duckdb.h".to_string()],
        };

        let err = fetch(&spec).unwrap_err();

        match err {
            // curl missing from PATH surfaces as Io; either way nothing
            // was extracted and the destination was still created
            DuckfetchError::Download { url } => assert_eq!(url, spec.archive_url),
            DuckfetchError::Io(_) => {}
            other => panic!("unexpected error: {other}"),
        }
        assert!(dest.exists());
        assert!(!dest.join("duckdb.h").exists());
    }
}
