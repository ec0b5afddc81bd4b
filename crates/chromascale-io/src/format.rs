//! File-kind detection
//!
//! The tool decides between its two containers by file extension,
//! falling back to a BMP header probe for extensionless paths and to
//! raw YUV when even that fails (raw YUV files have no signature to
//! probe for).

use crate::IoResult;
use crate::bmp::bmp_dimensions;
use std::fs::File;
use std::path::Path;

/// Supported container kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// 24-bit Windows bitmap (.bmp)
    Bmp,
    /// Headerless raw YUV 4:2:0 (.yuv)
    Yuv,
}

impl FileKind {
    /// The canonical file extension for this kind.
    pub fn extension(self) -> &'static str {
        match self {
            FileKind::Bmp => "bmp",
            FileKind::Yuv => "yuv",
        }
    }
}

/// Determine the file kind from the path's extension alone.
///
/// Returns `None` for a missing or unrecognized extension.
pub fn detect_file_kind(path: &Path) -> Option<FileKind> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "bmp" => Some(FileKind::Bmp),
        "yuv" => Some(FileKind::Yuv),
        _ => None,
    }
}

/// Determine the file kind of an existing input file.
///
/// Tries the extension first; otherwise probes the file header for a
/// readable BMP and defaults to raw YUV when that fails.
pub fn sniff_file_kind(path: &Path) -> IoResult<FileKind> {
    if let Some(kind) = detect_file_kind(path) {
        return Ok(kind);
    }

    let file = File::open(path)?;
    match bmp_dimensions(file) {
        Ok(_) => Ok(FileKind::Bmp),
        Err(_) => Ok(FileKind::Yuv),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_extension() {
        assert_eq!(detect_file_kind(Path::new("a.bmp")), Some(FileKind::Bmp));
        assert_eq!(detect_file_kind(Path::new("a.BMP")), Some(FileKind::Bmp));
        assert_eq!(
            detect_file_kind(Path::new("dir/clip.yuv")),
            Some(FileKind::Yuv)
        );
        assert_eq!(detect_file_kind(Path::new("a.png")), None);
        assert_eq!(detect_file_kind(Path::new("noext")), None);
    }

    #[test]
    fn test_extension_names() {
        assert_eq!(FileKind::Bmp.extension(), "bmp");
        assert_eq!(FileKind::Yuv.extension(), "yuv");
    }
}
