//! Post-export entry point rewriting asset paths in the static export.

use std::path::{Path, PathBuf};

use clap::Parser;
use env_logger::Env;

use pages_export_fixer::{ProjectConfig, normalize_export};

#[derive(Parser)]
#[command(name = "fix-asset-paths")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output directory of the static export, overriding the configuration.
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Explicit configuration file instead of `export.config.json` discovery.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ProjectConfig::from_path(path).unwrap_or_else(|| {
            log::warn!(
                "could not load {}, falling back to defaults",
                path.display()
            );
            ProjectConfig::default()
        }),
        None => ProjectConfig::discover(Path::new(".")),
    };

    let mut layout = config.into_layout();
    if let Some(out_dir) = &cli.out_dir {
        layout.out_dir = out_dir.to_string_lossy().into_owned();
    }

    let report = normalize_export(&layout);
    if !report.failed.is_empty() {
        log::warn!("{} files could not be processed", report.failed.len());
    }
}
