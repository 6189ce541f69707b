//! CLI entry point for the emblem wallpaper generator

use clap::Parser;
use wallweave::io::cli::{Cli, WallpaperJob};

fn main() -> wallweave::Result<()> {
    let cli = Cli::parse();
    let job = WallpaperJob::new(cli);
    job.run()
}
