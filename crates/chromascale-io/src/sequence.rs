//! Frame-sequence enumeration on disk
//!
//! Two sequence shapes exist:
//!
//! - **Numbered files**: `<base>NNNNN.<ext>` with five digits, counted
//!   upward from the number in the supplied path until a file is
//!   missing.
//! - **Multi-frame YUV**: one headerless file holding several frames
//!   back to back, counted by dividing the file size by the frame
//!   size. A size that does not divide evenly is rejected rather than
//!   silently truncated.

use crate::format::FileKind;
use crate::yuv::frame_size;
use crate::{IoError, IoResult};
use std::path::{Path, PathBuf};

/// Frame digits in numbered sequence filenames
const SEQUENCE_DIGITS: usize = 5;

/// Description of the frames reachable from one input path
#[derive(Debug, Clone)]
pub struct SequenceInfo {
    /// The path as supplied (used directly for single-file sequences)
    path: PathBuf,
    /// Path prefix before the frame number
    base: String,
    /// File extension without the dot
    extension: String,
    /// First frame number in the sequence
    start_frame: u32,
    /// Number of files in the sequence
    num_files: u32,
    /// Frames stored inside each file
    frames_per_file: u32,
    /// Whether filenames carry a frame number
    numbered: bool,
}

/// Split a file stem into its base and any trailing digits.
fn split_trailing_digits(stem: &str) -> (&str, Option<u32>) {
    let digits = stem
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .count();
    if digits == 0 {
        return (stem, None);
    }
    let (base, number) = stem.split_at(stem.len() - digits);
    (base, number.parse().ok())
}

/// Enumerate the frames reachable from `path`.
///
/// `dimensions` must be given for YUV inputs so multi-frame files can
/// be sized; BMP files ignore it.
///
/// # Errors
///
/// Fails if a numbered sequence has no existing first file, if a YUV
/// file's size is not a whole number of frames, or if YUV dimensions
/// are missing.
pub fn detect_sequence(
    path: &Path,
    kind: FileKind,
    dimensions: Option<(u32, u32)>,
) -> IoResult<SequenceInfo> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| IoError::InvalidData(format!("unusable path: {}", path.display())))?;
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or(kind.extension())
        .to_string();
    let parent = path.parent().unwrap_or(Path::new(""));

    let (base_stem, number) = split_trailing_digits(stem);
    let base = parent.join(base_stem).to_string_lossy().into_owned();

    if let Some(start_frame) = number {
        // Numbered sequence: count consecutive existing files
        let mut info = SequenceInfo {
            path: path.to_path_buf(),
            base,
            extension,
            start_frame,
            num_files: 0,
            frames_per_file: 1,
            numbered: true,
        };
        while info.nth_file(info.num_files).exists() {
            info.num_files += 1;
        }
        if info.num_files == 0 {
            return Err(IoError::InvalidData(format!(
                "sequence start not found: {}",
                info.nth_file(0).display()
            )));
        }
        return Ok(info);
    }

    // Single file; raw YUV may still hold several frames
    let frames_per_file = match kind {
        FileKind::Bmp => 1,
        FileKind::Yuv => {
            let (width, height) = dimensions.ok_or_else(|| {
                IoError::InvalidData(
                    "width and height must be supplied for YUV input".to_string(),
                )
            })?;
            let frame = frame_size(width, height)?;
            let total = std::fs::metadata(path)?.len();
            if total == 0 || total % frame != 0 {
                return Err(IoError::InvalidData(format!(
                    "YUV file size {} is not a whole number of {}-byte frames",
                    total, frame
                )));
            }
            (total / frame) as u32
        }
    };

    Ok(SequenceInfo {
        path: path.to_path_buf(),
        base,
        extension,
        start_frame: 0,
        num_files: 1,
        frames_per_file,
        numbered: false,
    })
}

impl SequenceInfo {
    /// First frame number of the sequence.
    pub fn start_frame(&self) -> u32 {
        self.start_frame
    }

    /// Number of files in the sequence.
    pub fn num_files(&self) -> u32 {
        self.num_files
    }

    /// Frames stored inside each file.
    pub fn frames_per_file(&self) -> u32 {
        self.frames_per_file
    }

    /// Total frames across the sequence.
    pub fn total_frames(&self) -> u32 {
        self.num_files * self.frames_per_file
    }

    /// Whether the sequence spans more than one file on disk.
    pub fn is_multi_file(&self) -> bool {
        self.num_files > 1
    }

    /// Path of the `i`-th file of the sequence.
    pub fn nth_file(&self, i: u32) -> PathBuf {
        if self.numbered {
            PathBuf::from(format!(
                "{}{:0digits$}.{}",
                self.base,
                self.start_frame + i,
                self.extension,
                digits = SEQUENCE_DIGITS
            ))
        } else {
            self.path.clone()
        }
    }
}

/// Build a numbered output path for one frame of a multiframe result.
///
/// `template` supplies the directory, base name, and extension; the
/// frame number is spliced in before the extension.
pub fn numbered_output(template: &Path, frame: u32) -> PathBuf {
    let stem = template
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("frame");
    let ext = template.extension().and_then(|s| s.to_str()).unwrap_or("");
    let name = if ext.is_empty() {
        format!("{stem}{frame:0digits$}", digits = SEQUENCE_DIGITS)
    } else {
        format!("{stem}{frame:0digits$}.{ext}", digits = SEQUENCE_DIGITS)
    };
    template.parent().unwrap_or(Path::new("")).join(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_split_trailing_digits() {
        assert_eq!(split_trailing_digits("clip00010"), ("clip", Some(10)));
        assert_eq!(split_trailing_digits("clip"), ("clip", None));
        assert_eq!(split_trailing_digits("a1b2"), ("a1b", Some(2)));
        assert_eq!(split_trailing_digits("007"), ("", Some(7)));
    }

    #[test]
    fn test_single_bmp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.bmp");
        fs::write(&path, b"x").unwrap();
        let info = detect_sequence(&path, FileKind::Bmp, None).unwrap();
        assert_eq!(info.total_frames(), 1);
        assert!(!info.is_multi_file());
        assert_eq!(info.nth_file(0), path);
    }

    #[test]
    fn test_numbered_bmp_sequence() {
        let dir = tempfile::tempdir().unwrap();
        for i in 3..6 {
            fs::write(dir.path().join(format!("shot{:05}.bmp", i)), b"x").unwrap();
        }
        let first = dir.path().join("shot00003.bmp");
        let info = detect_sequence(&first, FileKind::Bmp, None).unwrap();
        assert_eq!(info.start_frame(), 3);
        assert_eq!(info.num_files(), 3);
        assert_eq!(info.total_frames(), 3);
        assert_eq!(info.nth_file(1), dir.path().join("shot00004.bmp"));
    }

    #[test]
    fn test_numbered_sequence_missing_start() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("shot00000.bmp");
        assert!(detect_sequence(&first, FileKind::Bmp, None).is_err());
    }

    #[test]
    fn test_multiframe_yuv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.yuv");
        // 4x4 frames are 24 bytes; three of them
        fs::write(&path, vec![0u8; 72]).unwrap();
        let info = detect_sequence(&path, FileKind::Yuv, Some((4, 4))).unwrap();
        assert_eq!(info.num_files(), 1);
        assert_eq!(info.frames_per_file(), 3);
        assert_eq!(info.total_frames(), 3);
    }

    #[test]
    fn test_yuv_odd_size_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.yuv");
        fs::write(&path, vec![0u8; 70]).unwrap();
        assert!(detect_sequence(&path, FileKind::Yuv, Some((4, 4))).is_err());
    }

    #[test]
    fn test_yuv_requires_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.yuv");
        fs::write(&path, vec![0u8; 72]).unwrap();
        assert!(detect_sequence(&path, FileKind::Yuv, None).is_err());
    }

    #[test]
    fn test_numbered_output() {
        assert_eq!(
            numbered_output(Path::new("out/res.yuv"), 7),
            Path::new("out/res00007.yuv")
        );
        assert_eq!(
            numbered_output(Path::new("res.bmp"), 0),
            Path::new("res00000.bmp")
        );
    }
}
