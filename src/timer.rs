//! Recurring progress tick
//!
//! At most one tick task is alive: `start` aborts the previous task before
//! spawning a new one, and dropping the timer aborts whatever is running.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

use crate::event::AppEvent;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(250);

pub struct ProgressTimer {
    period: Duration,
    events: UnboundedSender<AppEvent>,
    task: Option<JoinHandle<()>>,
}

impl ProgressTimer {
    pub fn new(period: Duration, events: UnboundedSender<AppEvent>) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            events,
            task: None,
        }
    }

    pub fn start(&mut self) {
        self.cancel();

        let period = self.period;
        let events = self.events.clone();
        self.task = Some(tokio::spawn(async move {
            let mut ticks = interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticks.tick().await;
                if events.send(AppEvent::Tick).is_err() {
                    break;
                }
            }
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }
}

impl Drop for ProgressTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
