//! Desktop engine: one decode thread per loaded track feeding a cpal stream

use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use cpal::Stream;
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, unbounded};
use tokio::sync::mpsc::UnboundedSender;

use super::decoder::TrackDecoder;
use super::output::{SharedOutput, open_stream};
use super::{EngineError, EngineEvent, LoadedTrack, SoundEngine, has_supported_extension};
use crate::model::Track;

/// Decode ahead until this many seconds of audio are queued
const QUEUE_AHEAD_SECS: usize = 2;
const IDLE_WAIT: Duration = Duration::from_millis(5);

enum DecodeCommand {
    Seek(Duration),
    Halt,
}

struct ActiveTrack {
    id: u64,
    duration: Duration,
    started: bool,
    shared: Arc<SharedOutput>,
    commands: Sender<DecodeCommand>,
    _stream: Stream,
}

pub struct DesktopEngine {
    events: UnboundedSender<EngineEvent>,
    active: Option<ActiveTrack>,
    next_id: u64,
    volume: f32,
}

impl DesktopEngine {
    pub fn new(events: UnboundedSender<EngineEvent>) -> Self {
        Self {
            events,
            active: None,
            next_id: 1,
            volume: 1.0,
        }
    }

    fn halt_active(&mut self) {
        if let Some(active) = self.active.take() {
            active.shared.set_playing(false);
            let _ = active.commands.send(DecodeCommand::Halt);
            tracing::debug!(id = active.id, "Engine track halted");
        }
    }
}

impl SoundEngine for DesktopEngine {
    fn can_play(&self, path: &Path) -> bool {
        path.is_file() && has_supported_extension(path)
    }

    fn load(&mut self, track: &Track) -> Result<LoadedTrack, EngineError> {
        self.halt_active();

        let path = track.path();
        let decoder = TrackDecoder::open(&path)?;
        let info = decoder.info;

        let shared = Arc::new(SharedOutput::new(info.sample_rate, info.channels));
        shared.set_volume(self.volume);
        let stream = open_stream(shared.clone())?;

        let id = self.next_id;
        self.next_id += 1;

        let (commands, command_rx) = unbounded();
        let events = self.events.clone();
        let thread_shared = shared.clone();
        thread::Builder::new()
            .name(format!("decode-{}", id))
            .spawn(move || run_decoder(id, decoder, thread_shared, command_rx, events))
            .map_err(|e| EngineError::Stream(e.to_string()))?;

        tracing::info!(
            id,
            path = %path.display(),
            sample_rate = info.sample_rate,
            channels = info.channels,
            duration_ms = info.duration.as_millis() as u64,
            "Engine track loaded"
        );

        self.active = Some(ActiveTrack {
            id,
            duration: info.duration,
            started: false,
            shared,
            commands,
            _stream: stream,
        });

        Ok(LoadedTrack {
            id,
            duration: info.duration,
        })
    }

    fn play(&mut self) -> bool {
        match self.active.as_mut() {
            Some(active) if !active.started => {
                active.started = true;
                active.shared.set_playing(true);
                true
            }
            _ => false,
        }
    }

    fn pause(&mut self) {
        if let Some(active) = &self.active {
            active.shared.set_playing(false);
        }
    }

    fn resume(&mut self) {
        if let Some(active) = self.active.as_mut() {
            active.started = true;
            active.shared.set_playing(true);
        }
    }

    fn stop(&mut self) {
        self.halt_active();
    }

    fn elapsed(&self) -> Duration {
        match &self.active {
            Some(active) => {
                let rate = active.shared.sample_rate.max(1) as f64;
                let secs = active.shared.frames_played() as f64 / rate;
                let elapsed = Duration::from_secs_f64(secs);
                if active.duration.is_zero() {
                    elapsed
                } else {
                    elapsed.min(active.duration)
                }
            }
            None => Duration::ZERO,
        }
    }

    fn set_elapsed(&mut self, position: Duration) {
        if let Some(active) = &self.active {
            let frames = (position.as_secs_f64() * active.shared.sample_rate as f64) as u64;
            active.shared.clear();
            active.shared.set_frames_played(frames);
            let _ = active.commands.send(DecodeCommand::Seek(position));
        }
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        if let Some(active) = &self.active {
            active.shared.set_volume(self.volume);
        }
    }
}

impl Drop for DesktopEngine {
    fn drop(&mut self) {
        self.halt_active();
    }
}

fn run_decoder(
    id: u64,
    mut decoder: TrackDecoder,
    shared: Arc<SharedOutput>,
    commands: Receiver<DecodeCommand>,
    events: UnboundedSender<EngineEvent>,
) {
    let queue_limit =
        QUEUE_AHEAD_SECS * shared.sample_rate as usize * shared.channels.max(1) as usize;
    let mut exhausted = false;

    loop {
        let wait = if !exhausted && shared.queued() < queue_limit {
            Duration::ZERO
        } else {
            IDLE_WAIT
        };

        match commands.recv_timeout(wait) {
            Ok(DecodeCommand::Seek(position)) => {
                if let Err(e) = decoder.seek(position) {
                    tracing::warn!(id, error = %e, "Seek failed");
                }
                shared.clear();
                shared.set_frames_played(
                    (position.as_secs_f64() * shared.sample_rate as f64) as u64,
                );
                exhausted = false;
                continue;
            }
            Ok(DecodeCommand::Halt) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {}
        }

        if !exhausted && shared.queued() < queue_limit {
            match decoder.decode_next() {
                Ok(Some(samples)) => shared.push(&samples),
                Ok(None) => exhausted = true,
                Err(e) => {
                    tracing::error!(id, error = %e, "Decoding failed");
                    let _ = events.send(EngineEvent::Failed {
                        id,
                        message: e.to_string(),
                    });
                    break;
                }
            }
            continue;
        }

        if exhausted && shared.is_playing() && shared.queued() == 0 {
            tracing::debug!(id, "Track drained");
            let _ = events.send(EngineEvent::Finished { id });
            break;
        }
    }
}
