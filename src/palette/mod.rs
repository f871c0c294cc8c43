//! Time-of-day palette engine.
//!
//! This module provides:
//! - Named anchor palettes and the 24-hour anchor schedule
//! - Smoothstep-blended interpolation between anchors
//! - A time-of-day label for the current schedule segment

pub mod anchors;
pub mod interpolate;

pub use anchors::{AnchorEntry, AnchorPalette, SCHEDULE};
pub use interpolate::{mix, resolve, smoothstep, time_of_day};

use palette::Srgb;

/// Full set of scene colors for one moment of the day.
///
/// Produced fresh on every interpolation; never mutated in place.
/// The seven colors are named by the role they play in the background
/// gradient, plus one scalar overlay opacity in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenePalette {
    /// Darker pole of the central glow
    pub primary: Srgb<u8>,
    /// Lighter pole of the central glow
    pub secondary: Srgb<u8>,
    /// Dominant mid-screen color
    pub base: Srgb<u8>,
    /// Tint toward the top edge
    pub up: Srgb<u8>,
    /// Tint toward the bottom edge
    pub down: Srgb<u8>,
    /// Tint toward the left flank
    pub left: Srgb<u8>,
    /// Tint toward the right flank
    pub right: Srgb<u8>,
    /// Darkening overlay strength
    pub overlay_opacity: f32,
}
