//! The audio thread: owns the output stream and the single sink.
//!
//! Commands arrive over a channel; source preparation happens on
//! short-lived helper threads so neither the UI nor the command loop
//! blocks on decoding.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use rodio::{OutputStreamBuilder, Sink};
use tracing::{debug, error};

use super::sink::{PreparedSource, connect_sink, prepare_source};
use super::types::{AudioCmd, PlaybackHandle, SessionPhase};

/// Progress sampling interval for the shared position.
const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Outcome of one background preparation, tagged with the load
/// generation that requested it.
enum PrepMsg {
    Ready {
        generation: u64,
        prepared: Box<PreparedSource>,
    },
    Failed {
        generation: u64,
    },
}

pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    playback_info: PlaybackHandle,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut stream =
            OutputStreamBuilder::open_default_stream().expect("ERR: No audio output device");
        // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
        // but noisy for a TUI app.
        stream.log_on_drop(false);

        let (prep_tx, prep_rx) = mpsc::channel::<PrepMsg>();

        let mut sink: Option<Sink> = None;
        let mut generation: u64 = 0;

        // The ticker samples the position once per second for the life
        // of the thread. It keeps ticking while paused (the position
        // just stops moving) and exits on teardown via the stop flag.
        let ticker_stop = Arc::new(AtomicBool::new(false));
        let ticker = spawn_ticker(playback_info.clone(), ticker_stop.clone());

        loop {
            // Drain prepare outcomes first so a ready session becomes
            // visible before the next command lands.
            while let Ok(msg) = prep_rx.try_recv() {
                match msg {
                    PrepMsg::Ready {
                        generation: gen,
                        prepared,
                    } => {
                        if gen != generation {
                            debug!(gen, "discarding superseded prepared source");
                            continue;
                        }
                        let (source, duration) = *prepared;
                        sink = Some(connect_sink(&stream, source));
                        if let Ok(mut info) = playback_info.lock() {
                            info.apply_prepared(gen, duration);
                        }
                    }
                    PrepMsg::Failed { generation: gen } => {
                        // Already logged by the prepare thread; the
                        // session stays idle either way.
                        if gen != generation {
                            debug!(gen, "discarding superseded prepare failure");
                        }
                    }
                }
            }

            match rx.recv_timeout(Duration::from_millis(200)) {
                Ok(AudioCmd::Load(path)) => {
                    // A new load supersedes whatever was in flight.
                    generation += 1;
                    if let Some(s) = sink.take() {
                        s.stop();
                    }
                    if let Ok(mut info) = playback_info.lock() {
                        info.begin_load(generation, path.clone());
                    }
                    spawn_prepare(path, generation, prep_tx.clone());
                }

                Ok(AudioCmd::TogglePause) => {
                    if let Some(ref s) = sink {
                        if let Ok(mut info) = playback_info.lock() {
                            if let Some(next) = info.toggled_phase() {
                                if next == SessionPhase::Playing {
                                    s.play();
                                } else {
                                    s.pause();
                                }
                                info.phase = next;
                            }
                        }
                    }
                }

                Ok(AudioCmd::Stop) => {
                    // Stopping supersedes a load still preparing, exactly
                    // like a newer load would.
                    generation += 1;
                    if let Some(s) = sink.take() {
                        s.stop();
                    }
                    if let Ok(mut info) = playback_info.lock() {
                        info.clear(generation);
                    }
                }

                Ok(AudioCmd::Quit) => {
                    if let Some(ref s) = sink {
                        s.stop();
                    }
                    break;
                }

                Err(RecvTimeoutError::Timeout) => {
                    // A drained sink while playing means the track ended:
                    // rewind the reported position, keep the engine.
                    if let Some(ref s) = sink {
                        if let Ok(mut info) = playback_info.lock() {
                            if info.phase == SessionPhase::Playing && s.empty() {
                                info.apply_completion();
                            }
                        }
                    }
                }

                Err(RecvTimeoutError::Disconnected) => break,
            }
        }

        ticker_stop.store(true, Ordering::Relaxed);
        let _ = ticker.join();
    })
}

fn spawn_ticker(playback_info: PlaybackHandle, stop: Arc<AtomicBool>) -> JoinHandle<()> {
    thread::spawn(move || {
        while !stop.load(Ordering::Relaxed) {
            thread::sleep(POLL_INTERVAL);
            if let Ok(mut info) = playback_info.lock() {
                info.tick(POLL_INTERVAL);
            }
        }
    })
}

/// Fire-and-forget: preparation cannot be cancelled once started; a
/// later load outruns it through the generation check instead.
fn spawn_prepare(path: PathBuf, generation: u64, tx: Sender<PrepMsg>) {
    thread::spawn(move || match prepare_source(&path) {
        Ok(prepared) => {
            let _ = tx.send(PrepMsg::Ready {
                generation,
                prepared: Box::new(prepared),
            });
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "failed to prepare source");
            let _ = tx.send(PrepMsg::Failed { generation });
        }
    });
}
