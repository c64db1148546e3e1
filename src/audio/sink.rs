//! Source preparation and `rodio` sink wiring for the playback thread.
//!
//! The helpers here encapsulate opening/decoding a file and connecting
//! the decoded source to the mixer as a paused `Sink`.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use lofty::file::AudioFile;
use rodio::{Decoder, OutputStream, Sink, Source};
use thiserror::Error;

/// Why a picked source could not be prepared for playback.
#[derive(Debug, Error)]
pub enum PrepareError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: rodio::decoder::DecoderError,
    },
}

/// A decoded source plus the duration the progress bar is bounded by.
pub(super) type PreparedSource = (Decoder<BufReader<File>>, Option<Duration>);

/// Open and decode `path`. Runs on a short-lived prepare thread, never
/// on the UI thread.
pub(super) fn prepare_source(path: &Path) -> Result<PreparedSource, PrepareError> {
    let file = File::open(path).map_err(|e| PrepareError::Open {
        path: path.display().to_string(),
        source: e,
    })?;
    let source = Decoder::new(BufReader::new(file)).map_err(|e| PrepareError::Decode {
        path: path.display().to_string(),
        source: e,
    })?;

    // Tag probing knows the duration more reliably than the decoder.
    let duration = lofty::read_from_path(path)
        .ok()
        .map(|tagged| tagged.properties().duration())
        .or_else(|| source.total_duration());

    Ok((source, duration))
}

/// Connect a prepared source to the mixer as a paused `Sink`.
pub(super) fn connect_sink(handle: &OutputStream, source: Decoder<BufReader<File>>) -> Sink {
    let sink = Sink::connect_new(handle.mixer());
    sink.append(source);
    sink.pause();
    sink
}
