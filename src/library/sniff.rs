//! Content-type sniffing for imported files.
//!
//! Types are guessed from file content (magic bytes), never from the
//! extension a source happened to arrive with.

use std::path::Path;

use lofty::file::FileType;
use lofty::probe::Probe;

/// Best-guess content type of the file at `path`.
///
/// Returns `None` when the file cannot be read or its format is not
/// recognized.
pub fn content_type(path: &Path) -> Option<&'static str> {
    let probe = Probe::open(path).ok()?.guess_file_type().ok()?;
    match probe.file_type()? {
        FileType::Mpeg => Some("audio/mpeg"),
        FileType::Flac => Some("audio/flac"),
        FileType::Wav => Some("audio/wav"),
        FileType::Vorbis | FileType::Opus | FileType::Speex => Some("audio/ogg"),
        FileType::Aac | FileType::Mp4 => Some("audio/aac"),
        _ => None,
    }
}

/// Whether the file at `path` sniffs as MPEG audio.
pub fn is_mpeg_audio(path: &Path) -> bool {
    content_type(path).is_some_and(|t| t.starts_with("audio/mpeg"))
}

/// An MPEG-1 Layer III frame header (128 kbps, 44.1 kHz) plus padding,
/// enough for the sniffer to recognize MPEG audio.
#[cfg(test)]
pub(crate) fn mp3_bytes() -> Vec<u8> {
    let mut bytes = vec![0xFF, 0xFB, 0x90, 0x44];
    bytes.extend(std::iter::repeat_n(0u8, 417));
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn sniffs_mpeg_frames_as_mpeg_audio() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("song.mp3");
        fs::write(&path, mp3_bytes()).unwrap();

        assert_eq!(content_type(&path), Some("audio/mpeg"));
        assert!(is_mpeg_audio(&path));
    }

    #[test]
    fn plain_text_is_not_audio() {
        let dir = tempdir().unwrap();
        // The extension must not fool the sniffer.
        let path = dir.path().join("notes.mp3");
        fs::write(&path, b"just some plain text, no frames here").unwrap();

        assert_eq!(content_type(&path), None);
        assert!(!is_mpeg_audio(&path));
    }

    #[test]
    fn missing_file_is_not_audio() {
        assert!(!is_mpeg_audio(Path::new("/nonexistent/whatever.mp3")));
    }
}
