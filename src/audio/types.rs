//! Audio-related small types and handles.
//!
//! This module defines the command enum, the session phase machine and
//! the playback snapshot shared between the UI and the audio thread.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug)]
pub enum AudioCmd {
    /// Reset the session and begin preparing the file at the given path.
    Load(PathBuf),
    /// Pause when playing, start otherwise. Ignored while nothing is loaded.
    TogglePause,
    /// Stop playback and clear the current session.
    Stop,
    /// Shut the audio thread down.
    Quit,
}

/// Where the single playback session currently stands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionPhase {
    /// Nothing playable: no load yet, a load still preparing, a failed
    /// load, or a track that ran to its end.
    Idle,
    /// A source is decoded and ready to start.
    Prepared,
    Playing,
    Paused,
}

impl Default for SessionPhase {
    fn default() -> Self {
        Self::Idle
    }
}

#[derive(Debug, Clone)]
/// Runtime playback information shared with the UI.
pub struct PlaybackInfo {
    /// Path of the current source, if any.
    pub path: Option<PathBuf>,
    /// Current phase of the session.
    pub phase: SessionPhase,
    /// Duration of the prepared source; the progress bar's upper bound.
    pub duration: Option<Duration>,
    /// Last sampled playback position.
    pub position: Duration,
    /// Load generation the other fields belong to.
    pub generation: u64,
}

impl Default for PlaybackInfo {
    fn default() -> Self {
        Self {
            path: None,
            phase: SessionPhase::Idle,
            duration: None,
            position: Duration::ZERO,
            generation: 0,
        }
    }
}

impl PlaybackInfo {
    /// Reset the session ahead of a new load.
    pub(crate) fn begin_load(&mut self, generation: u64, path: PathBuf) {
        self.path = Some(path);
        self.phase = SessionPhase::Idle;
        self.duration = None;
        self.position = Duration::ZERO;
        self.generation = generation;
    }

    /// Apply a finished preparation. Returns `false` (and changes
    /// nothing) when `generation` is stale, i.e. a newer load already
    /// superseded the one that produced this result.
    pub(crate) fn apply_prepared(&mut self, generation: u64, duration: Option<Duration>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.phase = SessionPhase::Prepared;
        self.duration = duration;
        self.position = Duration::ZERO;
        true
    }

    /// The phase a play/pause toggle would move to, if any.
    pub(crate) fn toggled_phase(&self) -> Option<SessionPhase> {
        match self.phase {
            SessionPhase::Playing => Some(SessionPhase::Paused),
            SessionPhase::Prepared | SessionPhase::Paused => Some(SessionPhase::Playing),
            SessionPhase::Idle => None,
        }
    }

    /// The track ran out: back to idle with the position rewound. The
    /// duration stays so the progress bar keeps its bounds.
    pub(crate) fn apply_completion(&mut self) {
        self.phase = SessionPhase::Idle;
        self.position = Duration::ZERO;
    }

    /// Advance the sampled position by `step` while playing, clamped to
    /// the known duration.
    pub(crate) fn tick(&mut self, step: Duration) {
        if self.phase != SessionPhase::Playing {
            return;
        }
        let mut next = self.position + step;
        if let Some(total) = self.duration {
            next = next.min(total);
        }
        self.position = next;
    }

    /// Clear the whole session (explicit stop). The stop takes over
    /// `generation`, so a load still preparing for the stopped session
    /// cannot resurrect it.
    pub(crate) fn clear(&mut self, generation: u64) {
        *self = Self::default();
        self.generation = generation;
    }
}

pub type PlaybackHandle = Arc<Mutex<PlaybackInfo>>;
