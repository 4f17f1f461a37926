#![allow(dead_code)]

use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use cadence::config::Config;
use cadence::controller::AppController;
use cadence::engine::{EngineError, LoadedTrack, SoundEngine};
use cadence::event::AppEvent;
use cadence::media_controls::Notifier;
use cadence::model::Track;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::mpsc::{self, UnboundedReceiver};

pub const TRACK_LENGTH: Duration = Duration::from_secs(180);

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Load(String),
    Play,
    Pause,
    Resume,
    Stop,
    SetElapsed(Duration),
    SetVolume(f32),
}

/// In-memory engine that records every call it receives
pub struct FakeEngine {
    pub calls: Vec<Call>,
    pub failing: HashSet<String>,
    pub position: Duration,
    pub duration: Duration,
    started: bool,
    next_id: u64,
}

impl FakeEngine {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            failing: HashSet::new(),
            position: Duration::ZERO,
            duration: TRACK_LENGTH,
            started: false,
            next_id: 1,
        }
    }

    pub fn failing_on(mut self, location: &str) -> Self {
        self.failing.insert(location.to_string());
        self
    }

    /// Reports every track with an unknown length, like raw ADTS streams.
    pub fn unknown_length(mut self) -> Self {
        self.duration = Duration::ZERO;
        self
    }

    pub fn loads(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Load(location) => Some(location.clone()),
                _ => None,
            })
            .collect()
    }
}

impl SoundEngine for FakeEngine {
    fn can_play(&self, path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == "mp3")
    }

    fn load(&mut self, track: &Track) -> Result<LoadedTrack, EngineError> {
        self.calls.push(Call::Load(track.location().to_string()));
        if self.failing.contains(track.location()) {
            return Err(EngineError::UnsupportedCodec);
        }

        let id = self.next_id;
        self.next_id += 1;
        self.started = false;
        self.position = Duration::ZERO;
        Ok(LoadedTrack {
            id,
            duration: self.duration,
        })
    }

    fn play(&mut self) -> bool {
        self.calls.push(Call::Play);
        if self.started {
            return false;
        }
        self.started = true;
        true
    }

    fn pause(&mut self) {
        self.calls.push(Call::Pause);
    }

    fn resume(&mut self) {
        self.calls.push(Call::Resume);
    }

    fn stop(&mut self) {
        self.calls.push(Call::Stop);
        self.started = false;
    }

    fn elapsed(&self) -> Duration {
        self.position
    }

    fn set_elapsed(&mut self, position: Duration) {
        self.calls.push(Call::SetElapsed(position));
        self.position = position;
    }

    fn set_volume(&mut self, volume: f32) {
        self.calls.push(Call::SetVolume(volume));
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    NowPlaying(String, Duration),
    PlaybackChanged(bool),
    Stopped,
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    pub notices: Arc<Mutex<Vec<Notice>>>,
}

impl Notifier for RecordingNotifier {
    fn now_playing(&mut self, title: &str, duration: Duration) {
        self.notices
            .lock()
            .unwrap()
            .push(Notice::NowPlaying(title.to_string(), duration));
    }

    fn playback_changed(&mut self, is_playing: bool, _elapsed: Duration) {
        self.notices
            .lock()
            .unwrap()
            .push(Notice::PlaybackChanged(is_playing));
    }

    fn stopped(&mut self) {
        self.notices.lock().unwrap().push(Notice::Stopped);
    }
}

pub struct Harness {
    pub controller: AppController<FakeEngine>,
    pub events: UnboundedReceiver<AppEvent>,
    pub notices: Arc<Mutex<Vec<Notice>>>,
}

pub fn harness(engine: FakeEngine) -> Harness {
    let (tx, events) = mpsc::unbounded_channel();
    let notifier = RecordingNotifier::default();
    let notices = notifier.notices.clone();
    let controller = AppController::new(engine, Box::new(notifier), tx, &Config::default())
        .with_rng(StdRng::seed_from_u64(7));

    Harness {
        controller,
        events,
        notices,
    }
}

pub fn track(name: &str) -> Track {
    Track::new(format!("file:///music/{}", name))
}

pub fn tracks(names: &[&str]) -> Vec<Track> {
    names.iter().map(|name| track(name)).collect()
}

/// Controller holding `names`, nothing loaded yet.
pub fn with_tracks(names: &[&str]) -> Harness {
    let mut h = harness(FakeEngine::new());
    h.controller.load_tracks(tracks(names));
    h
}

pub fn finish_current(controller: &mut AppController<FakeEngine>) {
    if let Some(loaded) = controller.loaded_track() {
        controller.on_track_finished(loaded.id);
    }
}
