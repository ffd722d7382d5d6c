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
use std::fmt;
use std::path::Path;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::{debug, warn};

use crate::scan::{self, ScanError};
use crate::util;

/// The key the base URL is stored under. Always the first key in the map.
pub const BASE_KEY: &str = "_base";

/// A named group of samples. Each top level directory of the scan root becomes one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bank {
    /// The name of the bank, which is the name of its directory.
    name: String,
    /// Root-relative sample paths, in walk order.
    samples: Vec<String>,
}

impl Bank {
    /// The name of the bank.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The samples in this bank.
    pub fn samples(&self) -> &[String] {
        &self.samples
    }
}

/// An ordered map of the base URL followed by each bank and its samples.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SampleMap {
    base: String,
    banks: Vec<Bank>,
}

impl SampleMap {
    /// Creates an empty sample map with the given base.
    pub fn new(base: &str) -> SampleMap {
        SampleMap {
            base: base.to_string(),
            banks: Vec::new(),
        }
    }

    /// Appends a bank. Banks without samples and names that would collide with the base
    /// key or an existing bank are dropped. Returns true if the bank was added.
    pub fn insert(&mut self, name: &str, samples: Vec<String>) -> bool {
        if samples.is_empty() {
            debug!(bank = name, "No samples found, omitting bank");
            return false;
        }
        if name == BASE_KEY || self.get(name).is_some() {
            warn!(bank = name, "Bank name collides with an existing key, skipping");
            return false;
        }

        self.banks.push(Bank {
            name: name.to_string(),
            samples,
        });
        true
    }

    /// The base URL.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Gets a bank's samples by name.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.banks
            .iter()
            .find(|bank| bank.name == name)
            .map(|bank| bank.samples())
    }

    /// The banks in insertion order.
    pub fn banks(&self) -> &[Bank] {
        &self.banks
    }

    /// Returns the number of banks, not counting the base.
    pub fn len(&self) -> usize {
        self.banks.len()
    }

    /// Returns true if there are no banks.
    pub fn is_empty(&self) -> bool {
        self.banks.is_empty()
    }

    /// Returns the total number of samples across all banks.
    pub fn sample_count(&self) -> usize {
        self.banks.iter().map(|bank| bank.samples.len()).sum()
    }
}

impl Serialize for SampleMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.banks.len() + 1))?;
        map.serialize_entry(BASE_KEY, &self.base)?;
        for bank in self.banks.iter() {
            map.serialize_entry(&bank.name, &bank.samples)?;
        }
        map.end()
    }
}

impl fmt::Display for SampleMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} banks, {} samples (base: '{}')",
            self.len(),
            self.sample_count(),
            self.base
        )
    }
}

/// Scans root and builds the sample map. Every non-hidden top level directory with
/// at least one audio file beneath it becomes a bank, in name order.
pub fn build_map(root: &Path, base: &str) -> Result<SampleMap, ScanError> {
    let mut map = SampleMap::new(base);

    for dir in scan::top_level_dirs(root)? {
        let name = util::filename_display(&dir);
        debug!(bank = %name, "Collecting samples");
        let samples = scan::collect_samples(root, &dir)?;
        map.insert(&name, samples);
    }

    debug!(%map, "Built sample map");
    Ok(map)
}
