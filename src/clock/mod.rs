//! Hour sources for the scene.
//!
//! The hour driving the palette comes from one of two places: the wall
//! clock, re-sampled on a periodic timer, or a user-held override that can
//! be scrubbed and auto-advanced for previewing the full cycle.

use std::time::Duration;

use chrono::Timelike;
use tokio::task::JoinHandle;

use crate::event::{ControlEvent, ControlSender};

/// How often live mode re-samples the wall clock
pub const LIVE_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Hours moved per arrow-key scrub
pub const SCRUB_STEP: f32 = 0.25;

/// Scene hours that pass per real second at 1x preview speed
pub const BASE_HOURS_PER_SECOND: f32 = 0.5;

/// Selectable preview speeds
pub const PLAYBACK_SPEEDS: [f32; 5] = [0.5, 1.0, 2.0, 4.0, 8.0];

/// Current wall-clock time as a fractional hour of day.
pub fn wall_clock_hour() -> f32 {
    let now = chrono::Local::now();
    now.hour() as f32 + now.minute() as f32 / 60.0
}

/// Where the scene's hour comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClockMode {
    /// Follow the wall clock
    Live,
    /// Hold a user-chosen hour
    Override(f32),
}

impl ClockMode {
    pub fn is_live(&self) -> bool {
        matches!(self, ClockMode::Live)
    }
}

/// Owns the live-mode poll task.
///
/// Exactly one timer runs at a time: `apply_mode` tears the previous task
/// down before spawning a replacement, so a mode toggle can never leave
/// two tickers feeding the channel.
pub struct ClockTicker {
    tx: ControlSender,
    handle: Option<JoinHandle<()>>,
}

impl ClockTicker {
    pub fn new(tx: ControlSender) -> Self {
        Self { tx, handle: None }
    }

    /// Reconfigure the timer for the given mode. Live mode gets a fresh
    /// poll task (which ticks once immediately); override mode runs none.
    pub fn apply_mode(&mut self, mode: ClockMode) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }

        if mode.is_live() {
            let tx = self.tx.clone();
            self.handle = Some(tokio::spawn(async move {
                let mut interval = tokio::time::interval(LIVE_POLL_INTERVAL);
                loop {
                    interval.tick().await;
                    if tx.send(ControlEvent::ClockTick).await.is_err() {
                        return;
                    }
                }
            }));
        }
    }
}

impl Drop for ClockTicker {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

/// Preview playback: auto-advance the override hour through the cycle.
#[derive(Debug, Clone)]
pub struct Playback {
    pub playing: bool,
    speed_index: usize,
}

impl Playback {
    pub fn new() -> Self {
        Self {
            playing: false,
            // 1x
            speed_index: 1,
        }
    }

    pub fn speed(&self) -> f32 {
        PLAYBACK_SPEEDS[self.speed_index]
    }

    pub fn speed_up(&mut self) {
        self.speed_index = (self.speed_index + 1).min(PLAYBACK_SPEEDS.len() - 1);
    }

    pub fn speed_down(&mut self) {
        self.speed_index = self.speed_index.saturating_sub(1);
    }

    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    /// Advance `hour` by a frame's worth of preview time, restarting the
    /// cycle at midnight once 24 is crossed.
    pub fn advance(&self, hour: f32, dt: f32) -> f32 {
        let next = hour + dt * BASE_HOURS_PER_SECOND * self.speed();
        if next >= 24.0 {
            0.0
        } else {
            next
        }
    }
}

impl Default for Playback {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a fractional hour as "h:mm AM/PM".
pub fn format_hour(hour: f32) -> String {
    let hour = hour.rem_euclid(24.0);
    let mut h = hour.floor() as u32;
    let mut m = ((hour - h as f32) * 60.0).round() as u32;
    if m == 60 {
        m = 0;
        h = (h + 1) % 24;
    }

    let period = if h >= 12 { "PM" } else { "AM" };
    let display = match h {
        0 => 12,
        1..=12 => h,
        _ => h - 12,
    };
    format!("{}:{:02} {}", display, m, period)
}

/// Terse badge form, e.g. "7pm".
pub fn format_hour_short(hour: f32) -> String {
    let h = hour.rem_euclid(24.0).floor() as u32;
    let period = if h >= 12 { "pm" } else { "am" };
    let display = match h {
        0 => 12,
        1..=12 => h,
        _ => h - 12,
    };
    format!("{}{}", display, period)
}
