//! Application model types: `App` and `PlaybackState`.
//!
//! The `App` struct holds the current library listing, the cursor, the
//! observed playback state and the import-prompt editing state.

use std::path::PathBuf;

use crate::audio::PlaybackHandle;

/// The playback state of the application, as the screen sees it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
    Paused,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::Stopped
    }
}

/// The main application model.
pub struct App {
    /// File names currently in the library directory.
    pub track_names: Vec<String>,
    pub selected: usize,
    pub playback: PlaybackState,
    pub playback_handle: Option<PlaybackHandle>,

    /// Name of the track the engine currently has loaded, derived from
    /// the playback snapshot.
    pub now_playing: Option<String>,

    /// Directory imported tracks are copied into.
    pub library_dir: PathBuf,

    /// Whether the import prompt is open.
    pub input_mode: bool,
    /// Path being typed into the import prompt.
    pub input_buffer: String,
}

impl App {
    /// Create a new `App` showing `track_names` from `library_dir`.
    pub fn new(track_names: Vec<String>, library_dir: PathBuf) -> Self {
        Self {
            track_names,
            selected: 0,
            playback: PlaybackState::Stopped,
            playback_handle: None,
            now_playing: None,
            library_dir,
            input_mode: false,
            input_buffer: String::new(),
        }
    }

    pub fn has_tracks(&self) -> bool {
        !self.track_names.is_empty()
    }

    /// Name under the cursor, if the listing is non-empty.
    pub fn selected_name(&self) -> Option<&str> {
        self.track_names.get(self.selected).map(String::as_str)
    }

    /// Full path of the track under the cursor.
    pub fn selected_path(&self) -> Option<PathBuf> {
        self.selected_name().map(|name| self.library_dir.join(name))
    }

    /// Move the cursor down, stopping at the last entry.
    pub fn next(&mut self) {
        if self.selected + 1 < self.track_names.len() {
            self.selected += 1;
        }
    }

    /// Move the cursor up, stopping at the first entry.
    pub fn prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Replace the listing with a fresh one, keeping the cursor in range.
    pub fn refresh_tracks(&mut self, track_names: Vec<String>) {
        self.track_names = track_names;
        if self.selected >= self.track_names.len() {
            self.selected = self.track_names.len().saturating_sub(1);
        }
    }

    /// Attach a `PlaybackHandle` used to observe playback progress.
    pub fn set_playback_handle(&mut self, h: PlaybackHandle) {
        self.playback_handle = Some(h);
    }

    /// Open the import prompt with an empty buffer.
    pub fn enter_input_mode(&mut self) {
        self.input_mode = true;
        self.input_buffer.clear();
    }

    /// Close the import prompt, discarding the buffer.
    pub fn exit_input_mode(&mut self) {
        self.input_mode = false;
        self.input_buffer.clear();
    }

    pub fn push_input_char(&mut self, c: char) {
        self.input_buffer.push(c);
    }

    pub fn pop_input_char(&mut self) {
        self.input_buffer.pop();
    }

    /// Take the typed path and close the prompt.
    pub fn take_input(&mut self) -> String {
        self.input_mode = false;
        std::mem::take(&mut self.input_buffer)
    }
}
