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

//! Builds a Strudel samples map from a directory of audio samples.
//!
//! Every immediate, non-hidden subdirectory of the root becomes a bank whose
//! value is the sorted list of root-relative audio files found beneath it.

pub mod config;
pub mod error;
pub mod output;
pub mod samplemap;
pub mod scan;
#[cfg(test)]
mod testutil;
mod util;

use std::path::PathBuf;

use tracing::info;

pub use error::Error;
pub use samplemap::SampleMap;

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// The number of banks written.
    pub banks: usize,
    /// The total number of samples across all banks.
    pub samples: usize,
    /// Where the map was written.
    pub output: PathBuf,
}

/// Scans the configured root and writes the resulting map to the configured output.
pub fn run(settings: &config::Settings) -> Result<Summary, Error> {
    let root = settings.resolved_root()?;
    info!(root = %root.display(), "Scanning for samples");

    let map = samplemap::build_map(&root, settings.base())?;
    output::write_map(settings.output(), &map)?;

    Ok(Summary {
        banks: map.len(),
        samples: map.sample_count(),
        output: settings.output().to_path_buf(),
    })
}
