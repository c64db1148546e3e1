use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::{App, PlaybackState};
use crate::audio::{AudioCmd, AudioPlayer, SessionPhase};
use crate::config;
use crate::library::{self, ImportOutcome, PickedFile};
use crate::ui;

/// Main terminal event loop: handles input, UI drawing and sync with the
/// audio and import threads. Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    audio_player: &AudioPlayer,
    import_tx: &mpsc::Sender<ImportOutcome>,
    import_rx: &mpsc::Receiver<ImportOutcome>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        // Sync playback state from the audio thread.
        if let Some(handle) = app.playback_handle.as_ref().cloned() {
            if let Ok(info) = handle.lock() {
                app.playback = match info.phase {
                    SessionPhase::Playing => PlaybackState::Playing,
                    SessionPhase::Prepared | SessionPhase::Paused => PlaybackState::Paused,
                    SessionPhase::Idle => PlaybackState::Stopped,
                };
                // The engine's session is the source of truth for the
                // now-playing line.
                app.now_playing = info
                    .path
                    .as_ref()
                    .and_then(|p| p.file_name().and_then(|n| n.to_str()))
                    .map(str::to_string);
            }
        }

        // A finished import triggers the listing refresh; failures stay
        // out of the UI and only reach the log.
        while let Ok(outcome) = import_rx.try_recv() {
            match outcome {
                Ok(track) => {
                    info!(name = %track.name, path = %track.path.display(), "import finished");
                    app.refresh_tracks(library::list_tracks(&app.library_dir));
                }
                Err(e) => warn!(error = %e, "import failed"),
            }
        }

        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app, audio_player, import_tx) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Handle one key press. Returns `true` when the app should quit.
fn handle_key_event(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    audio_player: &AudioPlayer,
    import_tx: &mpsc::Sender<ImportOutcome>,
) -> bool {
    if app.input_mode {
        match key.code {
            KeyCode::Esc => app.exit_input_mode(),
            KeyCode::Backspace => app.pop_input_char(),
            KeyCode::Enter => {
                let typed = app.take_input();
                let typed = typed.trim();
                if !typed.is_empty() {
                    let _ = library::spawn_import(
                        PickedFile::new(typed),
                        app.library_dir.clone(),
                        settings.storage.fallback_track_name.clone(),
                        import_tx.clone(),
                    );
                }
            }
            KeyCode::Char(c) if !c.is_control() => app.push_input_char(c),
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('a') => app.enter_input_mode(),
        KeyCode::Char('j') | KeyCode::Down => app.next(),
        KeyCode::Char('k') | KeyCode::Up => app.prev(),
        KeyCode::Enter => {
            // Selecting a track loads it; the transport key starts it
            // once preparation finishes.
            if let Some(path) = app.selected_path() {
                let _ = audio_player.send(AudioCmd::Load(path));
            }
        }
        KeyCode::Char(' ') | KeyCode::Char('p') => {
            let _ = audio_player.send(AudioCmd::TogglePause);
        }
        KeyCode::Char('s') => {
            let _ = audio_player.send(AudioCmd::Stop);
        }
        KeyCode::Char('r') => {
            app.refresh_tracks(library::list_tracks(&app.library_dir));
        }
        _ => {}
    }

    false
}
