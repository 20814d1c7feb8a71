use anyhow::Result;
use clap::{Parser, Subcommand};

// Use the library modules
use duckfetch::commands;

#[derive(Parser)]
#[clap(name = "duckfetch")]
#[clap(about = "Fetches prebuilt libduckdb release archives")]
#[clap(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download a libduckdb archive and extract the platform's files
    Fetch {
        /// Platform to fetch for (e.g. linux-amd64); defaults to the host platform
        platform: Option<String>,
        /// Directory to download and extract into
        #[clap(default_value = "libduckdb")]
        output_dir: String,
        /// Release tag to fetch (e.g. 1.4.0, latest)
        #[clap(long)]
        release: Option<String>,
    },
    /// List supported platforms and their archive contents
    Platforms,
    /// List duckdb releases available on GitHub
    Available,
    /// Check that the environment can run a fetch
    Doctor,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Fetch {
            platform,
            output_dir,
            release,
        } => commands::fetch::fetch_platform(platform.as_deref(), &output_dir, release.as_deref())
            .map_err(|e| anyhow::anyhow!(e)),
        Commands::Platforms => {
            commands::platforms::list_platforms().map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Available => {
            commands::available::list_available_releases().map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Doctor => commands::doctor::check_environment().map_err(|e| anyhow::anyhow!(e)),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}
