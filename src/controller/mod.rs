//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input,
//! owns the model, and drives the sound engine.
//! It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `playback`: Transport operations and track sequencing
//! - `library`: Adding, loading, saving and clearing tracks
//! - `events`: Timer ticks, media keys and engine messages

mod input;
mod playback;
mod library;
mod events;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::mpsc::UnboundedSender;

use crate::config::Config;
use crate::engine::{LoadedTrack, SoundEngine};
use crate::event::AppEvent;
use crate::media_controls::Notifier;
use crate::model::AppModel;
use crate::timer::ProgressTimer;

pub struct AppController<E: SoundEngine> {
    pub(crate) model: AppModel,
    pub(crate) engine: E,
    pub(crate) notifier: Box<dyn Notifier>,
    pub(crate) timer: ProgressTimer,
    pub(crate) rng: StdRng,
    pub(crate) loaded: Option<LoadedTrack>,
    pub(crate) short_skip_secs: i64,
    pub(crate) long_skip_secs: i64,
    pub(crate) volume_step: f32,
}

impl<E: SoundEngine> AppController<E> {
    pub fn new(
        engine: E,
        notifier: Box<dyn Notifier>,
        events: UnboundedSender<AppEvent>,
        config: &Config,
    ) -> Self {
        let mut model = AppModel::new();
        model.playback.volume = config.volume;
        model.ui.show_full_path = config.show_full_path;

        Self {
            model,
            engine,
            notifier,
            timer: ProgressTimer::new(config.poll_interval(), events),
            rng: StdRng::from_entropy(),
            loaded: None,
            short_skip_secs: config.short_skip_secs as i64,
            long_skip_secs: config.long_skip_secs as i64,
            volume_step: config.volume_step,
        }
    }

    /// Replaces the shuffle randomness, for reproducible sequences.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn loaded_track(&self) -> Option<LoadedTrack> {
        self.loaded
    }

    pub fn is_timer_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn should_quit(&self) -> bool {
        self.model.should_quit()
    }
}
