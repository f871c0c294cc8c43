//! Pointer-reactive margin zones.

use ratatui::layout::{Position, Rect};

/// Seconds for a zone to fade fully in or out
pub const ZONE_FADE_SECONDS: f32 = 0.3;

/// One margin zone with its hover activation fade.
#[derive(Debug, Clone)]
pub struct ZoneState {
    pub rect: Rect,
    hovered: bool,
    activation: f32,
}

impl ZoneState {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            hovered: false,
            activation: 0.0,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.rect.contains(Position { x, y })
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Replace the rect after a resize, keeping the fade state.
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    /// Current highlight strength in [0, 1].
    pub fn activation(&self) -> f32 {
        self.activation
    }

    /// Move activation toward the hover target.
    pub fn tick(&mut self, dt: f32) {
        let step = dt / ZONE_FADE_SECONDS;
        self.activation = if self.hovered {
            (self.activation + step).min(1.0)
        } else {
            (self.activation - step).max(0.0)
        };
    }
}
