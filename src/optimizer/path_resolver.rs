//! # Path Resolution Module
//!
//! Centralizza tutta la logica di calcolo dei path di output.
//!
//! | estensione input | path output |
//! |------------------|-------------|
//! | `.png`           | stem + `.jpg` |
//! | `.jpg`, `.jpeg`  | invariato |
//! | altro            | stem + `_jpeg` + ext |
//!
//! Il confronto delle estensioni è case-insensitive, ma la ricostruzione
//! usa sempre l'estensione originale così com'è.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Stem/extension split of a zip entry name.
///
/// `stem` is everything before the final `.` of the last path component,
/// `ext` is the rest including the dot. `stem + ext` is always the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StemExt<'a> {
    pub stem: &'a str,
    pub ext: &'a str,
}

impl<'a> StemExt<'a> {
    /// Splits `name` at the last `.` of its final component
    pub fn split(name: &'a str) -> Self {
        let component_start = name
            .char_indices()
            .rev()
            .find(|&(_, c)| c == '/' || std::path::is_separator(c))
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);

        match name[component_start..].rfind('.') {
            Some(dot) => {
                let at = component_start + dot;
                Self {
                    stem: &name[..at],
                    ext: &name[at..],
                }
            }
            None => Self { stem: name, ext: "" },
        }
    }

    /// Lower-cased extension, for comparisons only
    pub fn ext_lower(&self) -> String {
        self.ext.to_lowercase()
    }
}

/// Stem/extension split of a file name, kept as raw OS strings so that
/// non-UTF-8 names survive unchanged. `stem + ext` is always the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNameSplit {
    pub stem: OsString,
    /// Extension including the leading dot, or empty
    pub ext: OsString,
}

impl FileNameSplit {
    /// Splits a single path component at its last `.`
    pub fn split(name: &OsStr) -> Self {
        let as_path = Path::new(name);
        match as_path.extension() {
            Some(ext) => {
                let mut dotted = OsString::from(".");
                dotted.push(ext);
                Self {
                    stem: as_path.file_stem().unwrap_or_default().to_os_string(),
                    ext: dotted,
                }
            }
            // ".hidden": the whole name is the extension
            None if name.to_string_lossy().starts_with('.') => Self {
                stem: OsString::new(),
                ext: name.to_os_string(),
            },
            None => Self {
                stem: name.to_os_string(),
                ext: OsString::new(),
            },
        }
    }

    /// Lower-cased extension, for comparisons only
    pub fn ext_lower(&self) -> String {
        self.ext.to_string_lossy().to_lowercase()
    }
}

/// Utility per calcolare i path di output in modo centralizzato
pub struct PathResolver;

impl PathResolver {
    /// Resolves the destination for a source path (full path or bare file name).
    ///
    /// Only the final component changes; the directory part is kept byte for
    /// byte, and a trailing separator on the source is dropped.
    pub fn resolve_destination(path: &Path) -> PathBuf {
        let Some(name) = path.file_name() else {
            let mut resolved = path.as_os_str().to_os_string();
            resolved.push("_jpeg");
            return PathBuf::from(resolved);
        };

        let split = FileNameSplit::split(name);
        let mut new_name = split.stem.clone();
        match split.ext_lower().as_str() {
            ".png" => new_name.push(".jpg"),
            ".jpg" | ".jpeg" => new_name.push(&split.ext),
            _ => {
                new_name.push("_jpeg");
                new_name.push(&split.ext);
            }
        }

        let resolved = path.with_file_name(new_name);
        debug!("Resolved destination: {} -> {}", path.display(), resolved.display());
        resolved
    }

    /// Name of a transcoded archive entry: always `.jpg`, whatever the source format
    pub fn archive_entry_name(entry_name: &str) -> String {
        format!("{}.jpg", StemExt::split(entry_name).stem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keeps_bytes() {
        for name in ["a/b.c/d.png", "photo.JPEG", "noext", "dir.d/noext", ".hidden", "a.tar.zip", ""] {
            let split = StemExt::split(name);
            assert_eq!(format!("{}{}", split.stem, split.ext), name);
        }
    }

    #[test]
    fn test_split_only_last_component() {
        let split = StemExt::split("albums.2023/cover");
        assert_eq!(split.stem, "albums.2023/cover");
        assert_eq!(split.ext, "");

        let split = StemExt::split("albums/cover.Png");
        assert_eq!(split.stem, "albums/cover");
        assert_eq!(split.ext, ".Png");
        assert_eq!(split.ext_lower(), ".png");
    }

    fn resolve(path: &str) -> PathBuf {
        PathResolver::resolve_destination(Path::new(path))
    }

    #[test]
    fn test_resolve_png() {
        assert_eq!(resolve("dir/image.png"), PathBuf::from("dir/image.jpg"));
        assert_eq!(resolve("image.PNG"), PathBuf::from("image.jpg"));
    }

    #[test]
    fn test_resolve_jpeg_unchanged() {
        assert_eq!(resolve("dir/a.jpg"), PathBuf::from("dir/a.jpg"));
        assert_eq!(resolve("a.JPEG"), PathBuf::from("a.JPEG"));
    }

    #[test]
    fn test_resolve_other_gets_suffix() {
        assert_eq!(resolve("photos.zip"), PathBuf::from("photos_jpeg.zip"));
        assert_eq!(resolve("in/photos"), PathBuf::from("in/photos_jpeg"));
        assert_eq!(resolve("notes.txt"), PathBuf::from("notes_jpeg.txt"));
        assert_eq!(resolve("a.tar.zip"), PathBuf::from("a.tar_jpeg.zip"));
        assert_eq!(resolve(".hidden"), PathBuf::from("_jpeg.hidden"));
    }

    #[test]
    fn test_resolve_trailing_separator_stays_beside_source() {
        assert_eq!(resolve("album/"), PathBuf::from("album_jpeg"));
        assert_eq!(resolve("shots/album/"), PathBuf::from("shots/album_jpeg"));
    }

    #[test]
    fn test_file_name_split_keeps_bytes() {
        for name in ["d.png", "photo.JPEG", "noext", ".hidden", "a.tar.zip", "end."] {
            let split = FileNameSplit::split(OsStr::new(name));
            let mut joined = split.stem.clone();
            joined.push(&split.ext);
            assert_eq!(joined.as_os_str(), OsStr::new(name));
        }
        assert_eq!(FileNameSplit::split(OsStr::new("x.Png")).ext_lower(), ".png");
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_keeps_non_utf8_names() {
        use std::os::unix::ffi::OsStrExt;

        let source = Path::new(OsStr::from_bytes(b"dir/caf\xe9.png"));
        let resolved = PathResolver::resolve_destination(source);
        assert_eq!(resolved.as_os_str().as_bytes(), b"dir/caf\xe9.jpg");

        let source = Path::new(OsStr::from_bytes(b"r\xe9sum\xe9.zip"));
        let resolved = PathResolver::resolve_destination(source);
        assert_eq!(resolved.as_os_str().as_bytes(), b"r\xe9sum\xe9_jpeg.zip");
    }

    #[test]
    fn test_resolve_ignores_extension_case() {
        let lower = PathResolver::resolve_destination(Path::new("shots/x.png"));
        let upper = PathResolver::resolve_destination(Path::new("shots/x.PNG"));
        assert_eq!(lower, upper);
        assert_eq!(lower, PathBuf::from("shots/x.jpg"));
    }

    #[test]
    fn test_resolve_bare_file_name_matches_full_path() {
        let full = PathResolver::resolve_destination(Path::new("root/sub/pic.png"));
        let bare = PathResolver::resolve_destination(Path::new("pic.png"));
        assert_eq!(full, Path::new("root/sub").join(bare));
    }

    #[test]
    fn test_archive_entry_name_forces_jpg() {
        assert_eq!(PathResolver::archive_entry_name("a.png"), "a.jpg");
        assert_eq!(PathResolver::archive_entry_name("scans/c.jpeg"), "scans/c.jpg");
        assert_eq!(PathResolver::archive_entry_name("pages.v2/page"), "pages.v2/page.jpg");
    }
}
