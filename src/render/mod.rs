//! Rendering for the ambient scene.
//!
//! This module provides:
//! - The z-ordered layer system and display mode presets
//! - Widgets for the background gradient, grain, guides, zones, and card
//! - UI chrome: status bar, scrub bar, time badge, tuner panel, help

pub mod background;
pub mod card;
pub mod grain;
pub mod guides;
pub mod layers;
pub mod panel;
pub mod ui;
pub mod zones;

pub use background::BackgroundWidget;
pub use card::ProfileCardWidget;
pub use grain::GrainWidget;
pub use guides::GuideLinesWidget;
pub use layers::{DisplayMode, LayerRenderer, LayerVisibility, RenderLayer, RenderState};
pub use panel::TunerPanel;
pub use ui::{HelpOverlay, ScrubBar, StatusBar, TimeBadge};
pub use zones::ZonesWidget;

use palette::Srgb;
use ratatui::style::Color;

use crate::palette::mix;

/// Convert an engine color to a terminal color.
pub fn tui_color(color: Srgb<u8>) -> Color {
    Color::Rgb(color.red, color.green, color.blue)
}

/// Composite `over` onto `under` with the given alpha.
///
/// Non-RGB underlays can't be blended; they take the overlay color as-is.
pub fn blend_over(under: Color, over: Srgb<u8>, alpha: f32) -> Color {
    match under {
        Color::Rgb(r, g, b) => tui_color(mix(Srgb::new(r, g, b), over, alpha.clamp(0.0, 1.0))),
        _ => tui_color(over),
    }
}

/// Push a color toward white by `amount` (0.0 = unchanged).
///
/// For non-RGB colors, returns the original color unchanged.
pub fn lighten(color: Color, amount: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => tui_color(mix(
            Srgb::new(r, g, b),
            Srgb::new(255, 255, 255),
            amount.clamp(0.0, 1.0),
        )),
        other => other,
    }
}
