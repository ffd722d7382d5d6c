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
use std::fs;
use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::Deserialize;

use self::error::ConfigError;

pub mod error;

/// The directory scanned when no root is given.
pub const DEFAULT_ROOT: &str = ".";

/// The file written when no output is given.
pub const DEFAULT_OUTPUT: &str = "strudel.json";

/// A partial set of settings. Used both for the optional settings file and for
/// the values given on the command line, which are layered over each other.
#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsLayer {
    /// The root directory to scan.
    #[serde(default)]
    pub root: Option<String>,
    /// The base URL stored under `_base`.
    #[serde(default)]
    pub base: Option<String>,
    /// The output file.
    #[serde(default)]
    pub output: Option<String>,
}

impl SettingsLayer {
    /// Parse a settings layer from a file. The format is inferred from the file extension.
    pub fn deserialize(path: &Path) -> Result<SettingsLayer, ConfigError> {
        Ok(Config::builder()
            .add_source(File::from(path))
            .build()?
            .try_deserialize::<SettingsLayer>()?)
    }

    /// Returns a layer where values set in self win over those set in lower.
    pub fn over(self, lower: SettingsLayer) -> SettingsLayer {
        SettingsLayer {
            root: self.root.or(lower.root),
            base: self.base.or(lower.base),
            output: self.output.or(lower.output),
        }
    }
}

/// Fully resolved settings for a single run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    root: PathBuf,
    base: String,
    output: PathBuf,
}

impl Settings {
    /// Creates new settings.
    pub fn new(root: impl Into<PathBuf>, base: &str, output: impl Into<PathBuf>) -> Settings {
        Settings {
            root: root.into(),
            base: base.to_string(),
            output: output.into(),
        }
    }

    /// Builds settings from command line values, falling back to the given settings
    /// file and then to the defaults.
    pub fn load(cli: SettingsLayer, config_path: Option<&Path>) -> Result<Settings, ConfigError> {
        let file = match config_path {
            Some(config_path) => SettingsLayer::deserialize(config_path)?,
            None => SettingsLayer::default(),
        };
        Ok(Settings::from(cli.over(file)))
    }

    /// The root directory as given, possibly relative.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The root directory as an absolute path with symlinks resolved.
    pub fn resolved_root(&self) -> Result<PathBuf, ConfigError> {
        fs::canonicalize(&self.root).map_err(|source| ConfigError::Root {
            path: self.root.clone(),
            source,
        })
    }

    /// The base URL, stored verbatim.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The output file.
    pub fn output(&self) -> &Path {
        &self.output
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::from(SettingsLayer::default())
    }
}

impl From<SettingsLayer> for Settings {
    fn from(layer: SettingsLayer) -> Self {
        Settings {
            root: PathBuf::from(layer.root.unwrap_or_else(|| DEFAULT_ROOT.to_string())),
            base: layer.base.unwrap_or_default(),
            output: PathBuf::from(
                layer
                    .output
                    .unwrap_or_else(|| DEFAULT_OUTPUT.to_string()),
            ),
        }
    }
}

#[cfg(test)]
mod test {
    use std::{error::Error, fs, path::Path};

    use super::{Settings, SettingsLayer};

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.root(), Path::new("."));
        assert_eq!(settings.base(), "");
        assert_eq!(settings.output(), Path::new("strudel.json"));
    }

    #[test]
    fn cli_only() -> Result<(), Box<dyn Error>> {
        let settings = Settings::load(
            SettingsLayer {
                root: Some("samples".into()),
                base: Some("https://cdn.example.com/samples/".into()),
                output: None,
            },
            None,
        )?;
        assert_eq!(settings.root(), Path::new("samples"));
        assert_eq!(settings.base(), "https://cdn.example.com/samples/");
        assert_eq!(settings.output(), Path::new("strudel.json"));
        Ok(())
    }

    #[test]
    fn settings_file_yaml() -> Result<(), Box<dyn Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("samplemap.yaml");
        fs::write(
            &path,
            "root: /srv/samples\nbase: https://cdn.example.com/\noutput: out.json\n",
        )?;

        let settings = Settings::load(SettingsLayer::default(), Some(&path))?;
        assert_eq!(settings.root(), Path::new("/srv/samples"));
        assert_eq!(settings.base(), "https://cdn.example.com/");
        assert_eq!(settings.output(), Path::new("out.json"));
        Ok(())
    }

    #[test]
    fn cli_wins_over_settings_file() -> Result<(), Box<dyn Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("samplemap.toml");
        fs::write(&path, "root = \"/srv/samples\"\nbase = \"from-file\"\n")?;

        let settings = Settings::load(
            SettingsLayer {
                root: None,
                base: Some("from-cli".into()),
                output: None,
            },
            Some(&path),
        )?;
        assert_eq!(settings.root(), Path::new("/srv/samples"));
        assert_eq!(settings.base(), "from-cli");
        assert_eq!(settings.output(), Path::new("strudel.json"));
        Ok(())
    }

    #[test]
    fn empty_base_on_cli_is_kept() -> Result<(), Box<dyn Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("samplemap.yaml");
        fs::write(&path, "base: from-file\n")?;

        let settings = Settings::load(
            SettingsLayer {
                base: Some(String::new()),
                ..Default::default()
            },
            Some(&path),
        )?;
        assert_eq!(settings.base(), "");
        Ok(())
    }

    #[test]
    fn missing_settings_file() -> Result<(), Box<dyn Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nope.yaml");
        assert!(Settings::load(SettingsLayer::default(), Some(&path)).is_err());
        Ok(())
    }

    #[test]
    fn resolved_root_is_absolute() -> Result<(), Box<dyn Error>> {
        let dir = tempfile::tempdir()?;
        let settings = Settings::new(dir.path(), "", "strudel.json");
        let root = settings.resolved_root()?;
        assert!(root.is_absolute());
        assert_eq!(root, fs::canonicalize(dir.path())?);

        let missing = Settings::new(dir.path().join("missing"), "", "strudel.json");
        assert!(missing.resolved_root().is_err());
        Ok(())
    }
}
