use crate::error::{DuckfetchError, Result};
use std::fs::File;
use std::path::Path;
use zip::result::ZipError;
use zip::ZipArchive;

/// Extract the named entries from a zip archive into `destination`, in
/// order, preserving each entry's relative path. Entries extracted before a
/// missing name stay on disk; names after it are not processed.
pub fn unpack_expected(archive_path: &Path, destination: &Path, names: &[String]) -> Result<()> {
    let file = File::open(archive_path)?;
    let mut archive =
        ZipArchive::new(file).map_err(|_| DuckfetchError::ArchiveFormat {
            path: archive_path.to_path_buf(),
        })?;

    for name in names {
        println!("extracting: {name}");
        extract_entry(&mut archive, archive_path, name, destination)?;
    }

    Ok(())
}

fn extract_entry(
    archive: &mut ZipArchive<File>,
    archive_path: &Path,
    name: &str,
    destination: &Path,
) -> Result<()> {
    let mut entry = match archive.by_name(name) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => {
            return Err(DuckfetchError::MissingEntry {
                name: name.to_string(),
            })
        }
        Err(ZipError::Io(e)) => return Err(e.into()),
        Err(_) => {
            return Err(DuckfetchError::ArchiveFormat {
                path: archive_path.to_path_buf(),
            })
        }
    };

    // Entry names that would escape the destination are treated as archive
    // corruption rather than written outside it.
    let outpath = match entry.enclosed_name() {
        Some(path) => destination.join(path),
        None => {
            return Err(DuckfetchError::ArchiveFormat {
                path: archive_path.to_path_buf(),
            })
        }
    };

    if entry.name().ends_with('/') {
        std::fs::create_dir_all(&outpath)?;
        return Ok(());
    }

    if let Some(parent) = outpath.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut outfile = File::create(&outpath)?;
    std::io::copy(&mut entry, &mut outfile)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Some(mode) = entry.unix_mode() {
            std::fs::set_permissions(&outpath, std::fs::Permissions::from_mode(mode))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn write_fixture_zip(path: &Path, entries: &[(&str, &[u8])]) {
        let file = File::create(path).unwrap();
        let mut writer = ZipWriter::new(file);
        for (name, bytes) in entries {
            writer
                .start_file(*name, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(bytes).unwrap();
        }
        writer.finish().unwrap();
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn extracts_named_entries_with_contents() {
        let dir = tempfile::tempdir().unwrap();
        let zip_path = dir.path().join("libduckdb.zip");
        write_fixture_zip(
            &zip_path,
            &[("duckdb.h", b"header"), ("libduckdb.so", b"library")],
        );

        unpack_expected(&zip_path, dir.path(), &names(&["duckdb.h", "libduckdb.so"])).unwrap();

        assert_eq!(
            std::fs::read(dir.path().join("duckdb.h")).unwrap(),
            b"header"
        );
        assert_eq!(
            std::fs::read(dir.path().join("libduckdb.so")).unwrap(),
            b"library"
        );
    }

    #[test]
    fn extracts_only_the_named_subset() {
        let dir = tempfile::tempdir().unwrap();
        let zip_path = dir.path().join("libduckdb.zip");
        write_fixture_zip(
            &zip_path,
            &[("duckdb.h", b"header"), ("CHANGELOG", b"notes")],
        );

        unpack_expected(&zip_path, dir.path(), &names(&["duckdb.h"])).unwrap();

        assert!(dir.path().join("duckdb.h").exists());
        assert!(!dir.path().join("CHANGELOG").exists());
    }

    #[test]
    fn missing_entry_keeps_earlier_extractions() {
        let dir = tempfile::tempdir().unwrap();
        let zip_path = dir.path().join("libduckdb.zip");
        write_fixture_zip(&zip_path, &[("duckdb.h", b"header")]);

        let err = unpack_expected(&zip_path, dir.path(), &names(&["duckdb.h", "libduckdb.so"]))
            .unwrap_err();

        assert!(matches!(err, DuckfetchError::MissingEntry { name } if name == "libduckdb.so"));
        assert!(dir.path().join("duckdb.h").exists());
    }

    #[test]
    fn rejects_non_zip_payload() {
        let dir = tempfile::tempdir().unwrap();
        let zip_path = dir.path().join("libduckdb.zip");
        std::fs::write(&zip_path, b"<html>404 not an archive</html>").unwrap();

        let err = unpack_expected(&zip_path, dir.path(), &names(&["duckdb.h"])).unwrap_err();

        assert!(matches!(err, DuckfetchError::ArchiveFormat { path } if path == zip_path));
    }

    #[test]
    fn preserves_nested_entry_paths() {
        let dir = tempfile::tempdir().unwrap();
        let zip_path = dir.path().join("libduckdb.zip");
        write_fixture_zip(&zip_path, &[("include/duckdb.h", b"header")]);

        unpack_expected(&zip_path, dir.path(), &names(&["include/duckdb.h"])).unwrap();

        assert_eq!(
            std::fs::read(dir.path().join("include").join("duckdb.h")).unwrap(),
            b"header"
        );
    }

    #[test]
    fn repeat_extraction_overwrites_prior_files() {
        let dir = tempfile::tempdir().unwrap();
        let zip_path = dir.path().join("libduckdb.zip");

        write_fixture_zip(&zip_path, &[("duckdb.h", b"old")]);
        unpack_expected(&zip_path, dir.path(), &names(&["duckdb.h"])).unwrap();

        write_fixture_zip(&zip_path, &[("duckdb.h", b"new")]);
        unpack_expected(&zip_path, dir.path(), &names(&["duckdb.h"])).unwrap();

        assert_eq!(std::fs::read(dir.path().join("duckdb.h")).unwrap(), b"new");
    }

    #[cfg(unix)]
    #[test]
    fn restores_unix_mode_bits() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let zip_path = dir.path().join("libduckdb.zip");
        let file = File::create(&zip_path).unwrap();
        let mut writer = ZipWriter::new(file);
        writer
            .start_file(
                "libduckdb.so",
                SimpleFileOptions::default().unix_permissions(0o755),
            )
            .unwrap();
        writer.write_all(b"library").unwrap();
        writer.finish().unwrap();

        unpack_expected(&zip_path, dir.path(), &names(&["libduckdb.so"])).unwrap();

        let mode = std::fs::metadata(dir.path().join("libduckdb.so"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o755);
    }
}
