use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A file that has been copied into the library directory.
#[derive(Debug, Clone)]
pub struct ImportedTrack {
    /// Name shown in the library list; also the file name on disk.
    pub name: String,
    /// Path of the copy inside the library directory.
    pub path: PathBuf,
    /// Whether post-copy sniffing recognized the file as MPEG audio.
    pub validated: bool,
}

/// Why an import did not produce a playable track.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The picked source could not be opened for reading.
    #[error("source is unreadable: {0}")]
    Unreadable(#[source] io::Error),

    /// Copying into the library directory failed partway through.
    #[error("copy failed: {0}")]
    Copy(#[from] io::Error),

    /// The copied file does not sniff as MPEG audio. The copy is left
    /// on disk and will show up in later listings.
    #[error("{name:?} is not an MP3 file")]
    NotMp3 { name: String },
}
