// Copyright (C) 2025 Michael Wilson <mike@mdwn.dev>
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
use std::{
    error::Error,
    fs::{self, File},
    path::{Path, PathBuf},
};

use hound::{SampleFormat, WavSpec, WavWriter};

/// Creates the parent directories of the given path if they don't already exist.
fn create_parent(path: &Path) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Creates an empty file, along with any missing parent directories.
pub fn touch(path: PathBuf) -> Result<(), Box<dyn Error>> {
    create_parent(&path)?;
    File::create(path)?;
    Ok(())
}

/// Writes a short mono WAV file, along with any missing parent directories.
pub fn write_wav(path: PathBuf) -> Result<(), Box<dyn Error>> {
    create_parent(&path)?;
    let mut writer = WavWriter::create(
        path,
        WavSpec {
            channels: 1,
            sample_rate: 44100,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        },
    )?;

    // Write a simple ramp so the file has some content.
    for sample in 0..64_i16 {
        writer.write_sample(sample * 256)?;
    }
    writer.finalize()?;

    Ok(())
}

/// Creates every given root-relative path beneath root. Paths ending in a slash are
/// created as directories, paths ending in .wav are written as WAV files and
/// everything else is created empty.
pub fn create_tree(root: &Path, paths: &[&str]) -> Result<(), Box<dyn Error>> {
    for path in paths {
        if let Some(dir) = path.strip_suffix('/') {
            fs::create_dir_all(root.join(dir))?;
        } else if path.ends_with(".wav") {
            write_wav(root.join(path))?;
        } else {
            touch(root.join(path))?;
        }
    }
    Ok(())
}
