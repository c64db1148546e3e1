use std::path::PathBuf;
use std::sync::mpsc;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::app::App;
use crate::audio::AudioPlayer;
use crate::config;
use crate::library::{self, ImportOutcome};
use crate::logging;

mod event_loop;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();

    let log_dir = config::default_data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("logs");
    let _log_guard = logging::init(&log_dir)?;

    let library_dir = config::resolve_library_dir(&settings);
    info!(library_dir = %library_dir.display(), "starting");

    let track_names = library::list_tracks(&library_dir);
    let audio_player = AudioPlayer::new();
    let mut app = App::new(track_names, library_dir);
    app.set_playback_handle(audio_player.playback_handle());

    let (import_tx, import_rx) = mpsc::channel::<ImportOutcome>();

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(
        &mut terminal,
        &settings,
        &mut app,
        &audio_player,
        &import_tx,
        &import_rx,
    );

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Release the engine exactly once on the way out.
    audio_player.shutdown();

    run_result
}
