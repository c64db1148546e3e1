use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

use super::model::{ImportError, ImportedTrack};
use super::sniff;

/// How many bytes the copy loop moves per read.
const COPY_CHUNK_BYTES: usize = 4 * 1024;

/// An opaque handle to a file the user picked, plus whatever name the
/// picking side knew it by.
#[derive(Debug, Clone)]
pub struct PickedFile {
    pub source: PathBuf,
    pub name_hint: Option<String>,
}

impl PickedFile {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            name_hint: None,
        }
    }

    pub fn with_name_hint(source: impl Into<PathBuf>, hint: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            name_hint: Some(hint.into()),
        }
    }

    /// Resolve the name the copy will be stored under: a non-blank hint,
    /// then the source file name, then `fallback`.
    fn display_name(&self, fallback: &str) -> String {
        if let Some(hint) = self.name_hint.as_deref() {
            let hint = hint.trim();
            if !hint.is_empty() {
                return hint.to_string();
            }
        }
        self.source
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Copy `picked` into `library_dir`, then verify the copy is MPEG audio.
///
/// An existing file with the same name is overwritten. Validation runs
/// after the copy completes, so a file that fails it stays on disk and
/// will show up in later listings.
pub fn import(
    picked: &PickedFile,
    library_dir: &Path,
    fallback_name: &str,
) -> Result<ImportedTrack, ImportError> {
    let name = picked.display_name(fallback_name);
    let mut reader = File::open(&picked.source).map_err(ImportError::Unreadable)?;

    fs::create_dir_all(library_dir)?;
    let dest = library_dir.join(&name);
    let mut writer = File::create(&dest)?;

    let mut buf = [0u8; COPY_CHUNK_BYTES];
    loop {
        let read = reader.read(&mut buf)?;
        if read == 0 {
            break;
        }
        writer.write_all(&buf[..read])?;
    }
    writer.flush()?;
    drop(writer);

    if !sniff::is_mpeg_audio(&dest) {
        warn!(name = %name, "imported file is not MPEG audio, leaving the copy in place");
        return Err(ImportError::NotMp3 { name });
    }

    debug!(name = %name, dest = %dest.display(), "imported track");
    Ok(ImportedTrack {
        name,
        path: dest,
        validated: true,
    })
}

/// Outcome of a background import, delivered to the event loop.
pub type ImportOutcome = Result<ImportedTrack, ImportError>;

/// Run `import` on a short-lived background thread and deliver the
/// outcome through `tx`. The caller refreshes its listing only once the
/// outcome arrives, so a partial copy is never listed.
pub fn spawn_import(
    picked: PickedFile,
    library_dir: PathBuf,
    fallback_name: String,
    tx: Sender<ImportOutcome>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let outcome = import(&picked, &library_dir, &fallback_name);
        let _ = tx.send(outcome);
    })
}
