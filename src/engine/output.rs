//! Device output through cpal

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{SampleFormat, Stream, StreamConfig};

use super::EngineError;

/// State shared between the engine, its decode thread and the output callback
pub struct SharedOutput {
    queue: Mutex<VecDeque<f32>>,
    playing: AtomicBool,
    volume_bits: AtomicU32,
    frames_played: AtomicU64,
    pub sample_rate: u32,
    pub channels: u16,
}

impl SharedOutput {
    pub fn new(sample_rate: u32, channels: u16) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            playing: AtomicBool::new(false),
            volume_bits: AtomicU32::new(1.0f32.to_bits()),
            frames_played: AtomicU64::new(0),
            sample_rate,
            channels,
        }
    }

    fn queue(&self) -> MutexGuard<'_, VecDeque<f32>> {
        match self.queue.lock() {
            Ok(queue) => queue,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    pub fn push(&self, samples: &[f32]) {
        self.queue().extend(samples.iter().copied());
    }

    pub fn queued(&self) -> usize {
        self.queue().len()
    }

    pub fn clear(&self) {
        self.queue().clear();
    }

    pub fn set_playing(&self, playing: bool) {
        self.playing.store(playing, Ordering::Relaxed);
    }

    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::Relaxed)
    }

    pub fn set_volume(&self, volume: f32) {
        self.volume_bits
            .store(volume.clamp(0.0, 1.0).to_bits(), Ordering::Relaxed);
    }

    fn volume(&self) -> f32 {
        f32::from_bits(self.volume_bits.load(Ordering::Relaxed))
    }

    pub fn frames_played(&self) -> u64 {
        self.frames_played.load(Ordering::Relaxed)
    }

    pub fn set_frames_played(&self, frames: u64) {
        self.frames_played.store(frames, Ordering::Relaxed);
    }

    /// Fills `data` from the queue; silence when paused or starved.
    fn fill(&self, data: &mut [f32]) {
        if !self.is_playing() {
            data.fill(0.0);
            return;
        }

        let volume = self.volume();
        let mut queue = self.queue();
        let read = data.len().min(queue.len());
        for (out, sample) in data.iter_mut().zip(queue.drain(..read)) {
            *out = sample * volume;
        }
        drop(queue);

        data[read..].fill(0.0);
        self.frames_played
            .fetch_add((read / self.channels.max(1) as usize) as u64, Ordering::Relaxed);
    }
}

/// Opens a stream on the default output device matching the track's format.
pub fn open_stream(shared: Arc<SharedOutput>) -> Result<Stream, EngineError> {
    let host = cpal::default_host();
    let device = host.default_output_device().ok_or(EngineError::NoDevice)?;

    let sample_rate = shared.sample_rate;
    let channels = shared.channels;

    let supported = device
        .supported_output_configs()
        .map_err(|e| EngineError::Stream(e.to_string()))?
        .find(|c| {
            c.channels() == channels
                && c.min_sample_rate().0 <= sample_rate
                && c.max_sample_rate().0 >= sample_rate
                && c.sample_format() == SampleFormat::F32
        })
        .ok_or(EngineError::NoConfig {
            sample_rate,
            channels,
        })?;

    let config: StreamConfig = supported
        .with_sample_rate(cpal::SampleRate(sample_rate))
        .into();

    let stream = device
        .build_output_stream(
            &config,
            move |data: &mut [f32], _: &cpal::OutputCallbackInfo| shared.fill(data),
            |err| tracing::error!(error = %err, "Audio output stream error"),
            None,
        )
        .map_err(|e| EngineError::Stream(e.to_string()))?;

    stream
        .play()
        .map_err(|e| EngineError::Stream(e.to_string()))?;

    Ok(stream)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_applies_volume_and_counts_frames() {
        let shared = SharedOutput::new(48_000, 2);
        shared.push(&[1.0, 1.0, 0.5, 0.5]);
        shared.set_volume(0.5);
        shared.set_playing(true);

        let mut data = [9.0f32; 6];
        shared.fill(&mut data);

        assert_eq!(data, [0.5, 0.5, 0.25, 0.25, 0.0, 0.0]);
        assert_eq!(shared.frames_played(), 2);
        assert_eq!(shared.queued(), 0);
    }

    #[test]
    fn paused_output_is_silent_and_keeps_samples() {
        let shared = SharedOutput::new(44_100, 2);
        shared.push(&[1.0, 1.0]);

        let mut data = [9.0f32; 2];
        shared.fill(&mut data);

        assert_eq!(data, [0.0, 0.0]);
        assert_eq!(shared.queued(), 2);
        assert_eq!(shared.frames_played(), 0);
    }
}
