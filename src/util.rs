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

use std::ffi::OsStr;
use std::path::{Component, Path};

use tracing::warn;

/// Extracts a displayable file name from a path. Names that aren't valid UTF-8 are
/// converted lossily.
pub fn filename_display(path: &Path) -> String {
    path.file_name().map(lossy).unwrap_or_default()
}

/// Returns path relative to root, joined with forward slashes regardless of the host
/// separator. Returns None if path is not under root.
pub fn relative_posix(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(lossy(part)),
            _ => None,
        })
        .collect::<Vec<String>>();
    Some(parts.join("/"))
}

fn lossy(name: &OsStr) -> String {
    match name.to_str() {
        Some(name) => name.to_string(),
        None => {
            let converted = name.to_string_lossy().to_string();
            warn!(name = %converted, "Name is not valid UTF-8, replacing invalid bytes");
            converted
        }
    }
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use crate::util::{filename_display, relative_posix};

    #[test]
    fn test_relative_posix() {
        let root = Path::new("/srv/samples");
        assert_eq!(
            Some("drums/kick.wav".to_string()),
            relative_posix(root, &root.join("drums").join("kick.wav"))
        );
        assert_eq!(
            Some("keys/rhodes/soft/c4.ogg".to_string()),
            relative_posix(
                root,
                &root.join("keys").join("rhodes").join("soft").join("c4.ogg")
            )
        );
        assert_eq!(None, relative_posix(root, Path::new("/srv/other/kick.wav")));
    }

    #[test]
    fn test_filename_display() {
        assert_eq!("kick.wav", filename_display(Path::new("drums/kick.wav")));
        assert_eq!("drums", filename_display(Path::new("/srv/samples/drums")));
        assert_eq!("", filename_display(Path::new("/")));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_is_lossy() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let root = Path::new("/srv/samples");
        let path = root.join("drums").join(OsStr::from_bytes(b"k\xffck.wav"));
        assert_eq!(
            Some("drums/k\u{fffd}ck.wav".to_string()),
            relative_posix(root, &path)
        );
    }
}
