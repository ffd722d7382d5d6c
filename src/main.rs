// Copyright (C) 2026 Michael Wilson <mike@mdwn.dev>
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, version 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//
use std::error::Error;
use std::path::PathBuf;

use clap::{crate_version, Parser};
use samplemap::config::{Settings, SettingsLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(
    author = "Michael Wilson",
    version = crate_version!(),
    about = "Generates a Strudel samples JSON map."
)]
struct Cli {
    /// Root directory to scan (default: current directory).
    #[arg(long)]
    root: Option<String>,
    /// Base URL for samples (stored under _base).
    #[arg(long)]
    base: Option<String>,
    /// Output JSON file (default: strudel.json).
    #[arg(long)]
    output: Option<String>,
    /// Optional settings file providing root, base and output. Command line values win.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::load(
        SettingsLayer {
            root: cli.root,
            base: cli.base,
            output: cli.output,
        },
        cli.config.as_deref(),
    )?;

    let summary = samplemap::run(&settings)?;
    info!(
        banks = summary.banks,
        samples = summary.samples,
        output = %summary.output.display(),
        "Done"
    );

    Ok(())
}
