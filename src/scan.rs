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

//! Discovery of sample banks and the audio files inside them.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::util;

/// File extensions recognized as audio samples. Matched case-insensitively.
pub const AUDIO_EXTENSIONS: &[&str] = &["wav", "aif", "aiff", "mp3", "ogg", "flac"];

/// Top level entries starting with this are hidden and never become banks.
const HIDDEN_PREFIX: &str = ".";

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Unable to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Error while walking {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Returns true if the path has one of the recognized audio extensions.
pub fn has_audio_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| {
            AUDIO_EXTENSIONS
                .iter()
                .any(|audio| audio.eq_ignore_ascii_case(extension))
        })
}

/// Returns true if the entry is a regular file with an audio extension. Symlinks are
/// never followed, so a link to an audio file is rejected.
pub fn is_audio_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() && has_audio_extension(entry.path())
}

/// Lists the immediate, non-hidden subdirectories of root, sorted by name. Symlinks to
/// directories are followed at this level, so a linked sample folder is a bank.
pub fn top_level_dirs(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let read_dir_error = |source: io::Error| ScanError::ReadDir {
        path: root.to_path_buf(),
        source,
    };

    let mut dirs = Vec::new();
    for entry in fs::read_dir(root).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        let name = entry.file_name();
        if name.to_string_lossy().starts_with(HIDDEN_PREFIX) {
            debug!(name = ?name, "Skipping hidden entry");
            continue;
        }
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        dirs.push(path);
    }

    // Path ordering is by component, which for siblings is a byte-wise name sort.
    dirs.sort();
    Ok(dirs)
}

/// Recursively collects the audio files beneath dir, as paths relative to root joined
/// with forward slashes. Entries are visited sorted by name at every level, so the
/// result is in a stable order. Hidden entries below the top level are included. If dir
/// is itself a symlink it is walked, but links beneath it are not followed.
pub fn collect_samples(root: &Path, dir: &Path) -> Result<Vec<String>, ScanError> {
    let mut samples = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| ScanError::Walk {
            path: source.path().unwrap_or(dir).to_path_buf(),
            source,
        })?;
        if !is_audio_file(&entry) {
            continue;
        }

        match util::relative_posix(root, entry.path()) {
            Some(relative) => samples.push(relative),
            None => {
                debug!(path = ?entry.path(), "Sample is not under the scan root, skipping");
            }
        }
    }

    Ok(samples)
}
