use crate::error::DuckfetchError;
use std::fmt;
use std::str::FromStr;

/// An operating system / CPU architecture combination that duckdb publishes
/// prebuilt library archives for. The slug is the asset-name component of the
/// release download URL (e.g. `libduckdb-linux-amd64.zip`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    LinuxAmd64,
    LinuxArm64,
    OsxUniversal,
    WindowsAmd64,
}

impl Platform {
    /// All platforms with a published prebuilt archive.
    pub fn all() -> &'static [Platform] {
        &[
            Platform::LinuxAmd64,
            Platform::LinuxArm64,
            Platform::OsxUniversal,
            Platform::WindowsAmd64,
        ]
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Platform::LinuxAmd64 => "linux-amd64",
            Platform::LinuxArm64 => "linux-arm64",
            Platform::OsxUniversal => "osx-universal",
            Platform::WindowsAmd64 => "windows-amd64",
        }
    }

    /// Entries that must come out of this platform's release archive.
    pub fn expected_files(&self) -> &'static [&'static str] {
        match self {
            Platform::LinuxAmd64 => &["duckdb.h", "libduckdb.so"],
            Platform::LinuxArm64 => &["duckdb.h", "libduckdb.so.1.4"],
            Platform::OsxUniversal => &["duckdb.h", "libduckdb.1.4.dylib"],
            Platform::WindowsAmd64 => &["duckdb.h", "duckdb.lib", "duckdb.dll"],
        }
    }

    /// Detect the platform of the machine we are running on, if duckdb
    /// publishes an archive for it. The osx archive is a universal binary,
    /// so macOS maps to one platform regardless of architecture.
    pub fn host() -> Option<Platform> {
        if cfg!(target_os = "macos") {
            Some(Platform::OsxUniversal)
        } else if cfg!(target_os = "linux") {
            if cfg!(target_arch = "x86_64") {
                Some(Platform::LinuxAmd64)
            } else if cfg!(target_arch = "aarch64") {
                Some(Platform::LinuxArm64)
            } else {
                None
            }
        } else if cfg!(target_os = "windows") && cfg!(target_arch = "x86_64") {
            Some(Platform::WindowsAmd64)
        } else {
            None
        }
    }
}

/// "os-arch" description of the running machine, for error messages when
/// no prebuilt archive exists for it.
pub fn host_suffix() -> String {
    let os = if cfg!(target_os = "macos") {
        "osx"
    } else if cfg!(target_os = "linux") {
        "linux"
    } else if cfg!(target_os = "windows") {
        "windows"
    } else {
        "unknown"
    };

    let arch = if cfg!(target_arch = "x86_64") {
        "amd64"
    } else if cfg!(target_arch = "aarch64") {
        "arm64"
    } else {
        "unknown"
    };

    format!("{os}-{arch}")
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Platform {
    type Err = DuckfetchError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "linux-amd64" => Ok(Platform::LinuxAmd64),
            // older build scripts named the same architecture aarch64
            "linux-arm64" | "linux-aarch64" => Ok(Platform::LinuxArm64),
            "osx-universal" => Ok(Platform::OsxUniversal),
            "windows-amd64" => Ok(Platform::WindowsAmd64),
            _ => Err(DuckfetchError::UnknownPlatform {
                name: s.to_string(),
            }),
        }
    }
}
