//! Screen rendering: the single `draw` entry point lays out the header,
//! status line, track list, progress bar, key help and, when open, the
//! import prompt.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Padding, Paragraph, Wrap},
};
use std::time::Duration;

use crate::app::{App, PlaybackState};
use crate::audio::PlaybackInfo;
use crate::config::UiSettings;

const CONTROLS_TEXT: &str = "[j/k] up/down | [enter] load selected | [space/p] play/pause | [s] stop | [a] add file | [r] re-list | [q] quit";

/// Clock-style `M:SS` text for positions and durations.
fn clock_text(d: Duration) -> String {
    format!("{}:{:02}", d.as_secs() / 60, d.as_secs() % 60)
}

/// Progress through the current track as a `0.0..=1.0` gauge ratio.
fn progress_ratio(info: &PlaybackInfo) -> f64 {
    match info.duration {
        Some(total) if !total.is_zero() => {
            (info.position.as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0)
        }
        _ => 0.0,
    }
}

/// A centered box for the import prompt: three rows tall, roughly
/// two-thirds of `area` wide.
fn prompt_rect(area: Rect) -> Rect {
    let width = (area.width.saturating_mul(2) / 3).max(20.min(area.width));
    let height = 3.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw(frame: &mut Frame, app: &App, ui_settings: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" vivace ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Status box
    let status = {
        let mut parts: Vec<String> = Vec::new();

        let state_text = match app.playback {
            PlaybackState::Stopped => "Stopped",
            PlaybackState::Playing => "Playing",
            PlaybackState::Paused => "Paused",
        };
        parts.push(state_text.to_string());

        if let Some(name) = &app.now_playing {
            parts.push(format!("Song: {}", name));
        }

        parts.push(format!("Library: {}", app.library_dir.display()));

        parts.join(" • ")
    };

    let status_par = Paragraph::new(status)
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" status "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(status_par, chunks[1]);

    // Library list
    let items: Vec<ListItem> = app
        .track_names
        .iter()
        .map(|name| ListItem::new(name.as_str()))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" tracks "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ratatui::widgets::ListState::default();
    if app.has_tracks() {
        state.select(Some(app.selected));
    }
    frame.render_stateful_widget(list, chunks[2], &mut state);

    // Progress bar, bounded by the prepared track's duration.
    let (ratio, label) = if let Some(info) = app
        .playback_handle
        .as_ref()
        .and_then(|h| h.lock().ok().map(|i| i.clone()))
    {
        let label = match info.duration {
            Some(total) => format!("{} / {}", clock_text(info.position), clock_text(total)),
            None => clock_text(info.position),
        };
        (progress_ratio(&info), label)
    } else {
        (0.0, clock_text(Duration::ZERO))
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" progress "))
        .ratio(ratio)
        .label(label);
    frame.render_widget(gauge, chunks[3]);

    // Footer
    let footer = Paragraph::new(CONTROLS_TEXT)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[4]);

    // Import prompt overlay (keeps the list visible under it)
    if app.input_mode {
        let popup_area = prompt_rect(chunks[2]);
        frame.render_widget(Clear, popup_area);

        let prompt = Paragraph::new(format!("> {}", app.input_buffer))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" add file: type a path (enter imports, esc closes) ")
                    .padding(Padding {
                        left: 1,
                        right: 0,
                        top: 0,
                        bottom: 0,
                    }),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(prompt, popup_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn clock_text_pads_seconds_only() {
        assert_eq!(clock_text(Duration::ZERO), "0:00");
        assert_eq!(clock_text(Duration::from_secs(65)), "1:05");
        assert_eq!(clock_text(Duration::from_secs(600)), "10:00");
    }

    #[test]
    fn prompt_rect_stays_inside_the_area() {
        let area = Rect {
            x: 2,
            y: 1,
            width: 90,
            height: 30,
        };
        let r = prompt_rect(area);
        assert!(r.x >= area.x && r.y >= area.y);
        assert!(r.right() <= area.right() && r.bottom() <= area.bottom());
        assert_eq!(r.height, 3);

        // Tiny areas must not underflow.
        let tiny = Rect {
            x: 0,
            y: 0,
            width: 8,
            height: 2,
        };
        let r = prompt_rect(tiny);
        assert!(r.width <= tiny.width && r.height <= tiny.height);
    }

    #[test]
    fn progress_ratio_is_clamped_and_safe_without_bounds() {
        let mut info = PlaybackInfo::default();
        assert_eq!(progress_ratio(&info), 0.0);

        info.begin_load(1, PathBuf::from("/tmp/a.mp3"));
        assert!(info.apply_prepared(1, Some(Duration::from_secs(100))));
        info.position = Duration::from_secs(25);
        assert!((progress_ratio(&info) - 0.25).abs() < 1e-9);

        // A zero-length track must not divide by zero.
        let mut zero = PlaybackInfo::default();
        zero.begin_load(1, PathBuf::from("/tmp/z.mp3"));
        assert!(zero.apply_prepared(1, Some(Duration::ZERO)));
        assert_eq!(progress_ratio(&zero), 0.0);
    }
}
