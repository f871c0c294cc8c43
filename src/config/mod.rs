//! Settings: the profile card content and the manual tuner knobs.
//!
//! Settings live in one JSON file. Loading is forgiving: a missing or
//! malformed file yields defaults, and missing fields fill in
//! individually. The file is hot-reloaded while the app runs (see
//! `watcher`).

pub mod watcher;

pub use watcher::SettingsWatcher;

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Knob adjustment step per keypress
const KNOB_STEP: f32 = 0.05;

/// Guide color choices the tuner cycles through
pub const GUIDE_COLOR_PRESETS: [&str; 5] =
    ["#e5e4e7", "#888888", "#c9b458", "#7aa2f7", "#b48ead"];

/// Manual visual overrides layered on top of the palette engine.
///
/// These bypass the engine for the parameters they cover; they never feed
/// back into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TunerConfig {
    /// Strength of the central gradient glow
    pub intensity: f32,
    /// When set, replaces the palette's overlay opacity
    pub overlay_opacity: Option<f32>,
    /// Guide line color (hex)
    pub guide_color: String,
    /// Guide line opacity
    pub guide_opacity: f32,
    /// Corner dot opacity
    pub dot_opacity: f32,
}

impl Default for TunerConfig {
    fn default() -> Self {
        Self {
            intensity: 0.6,
            overlay_opacity: None,
            guide_color: GUIDE_COLOR_PRESETS[0].to_string(),
            guide_opacity: 0.35,
            dot_opacity: 0.45,
        }
    }
}

/// The tuner panel's adjustable knobs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TunerKnob {
    Intensity,
    OverlayOpacity,
    GuideColor,
    GuideOpacity,
    DotOpacity,
}

impl TunerKnob {
    pub const ALL: [TunerKnob; 5] = [
        TunerKnob::Intensity,
        TunerKnob::OverlayOpacity,
        TunerKnob::GuideColor,
        TunerKnob::GuideOpacity,
        TunerKnob::DotOpacity,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TunerKnob::Intensity => "Intensity",
            TunerKnob::OverlayOpacity => "Overlay",
            TunerKnob::GuideColor => "Line color",
            TunerKnob::GuideOpacity => "Line opacity",
            TunerKnob::DotOpacity => "Dot opacity",
        }
    }

    pub fn next(&self) -> TunerKnob {
        let index = Self::ALL.iter().position(|k| k == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> TunerKnob {
        let index = Self::ALL.iter().position(|k| k == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl TunerConfig {
    /// Nudge a knob up (+1) or down (-1).
    pub fn adjust(&mut self, knob: TunerKnob, direction: i8) {
        let step = KNOB_STEP * direction as f32;
        match knob {
            TunerKnob::Intensity => {
                self.intensity = (self.intensity + step).clamp(0.0, 1.0);
            }
            TunerKnob::OverlayOpacity => {
                let current = self.overlay_opacity.unwrap_or(0.25);
                self.overlay_opacity = Some((current + step).clamp(0.0, 0.5));
            }
            TunerKnob::GuideColor => {
                self.guide_color = cycle_preset(&self.guide_color, direction).to_string();
            }
            TunerKnob::GuideOpacity => {
                self.guide_opacity = (self.guide_opacity + step).clamp(0.0, 1.0);
            }
            TunerKnob::DotOpacity => {
                self.dot_opacity = (self.dot_opacity + step).clamp(0.0, 1.0);
            }
        }
    }

    /// Current value of a knob as panel text.
    pub fn value_text(&self, knob: TunerKnob) -> String {
        match knob {
            TunerKnob::Intensity => format!("{:.2}", self.intensity),
            TunerKnob::OverlayOpacity => match self.overlay_opacity {
                Some(opacity) => format!("{:.2}", opacity),
                None => "auto".to_string(),
            },
            TunerKnob::GuideColor => self.guide_color.clone(),
            TunerKnob::GuideOpacity => format!("{:.2}", self.guide_opacity),
            TunerKnob::DotOpacity => format!("{:.2}", self.dot_opacity),
        }
    }
}

fn cycle_preset(current: &str, direction: i8) -> &'static str {
    let len = GUIDE_COLOR_PRESETS.len();
    let index = GUIDE_COLOR_PRESETS
        .iter()
        .position(|preset| preset.eq_ignore_ascii_case(current))
        .unwrap_or(0);
    let next = (index + len).wrapping_add_signed(direction as isize) % len;
    GUIDE_COLOR_PRESETS[next]
}

/// A single profile link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// The content of the centered profile card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub links: Vec<Link>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Cris".to_string(),
            tagline: "Software engineer building data-intensive applications".to_string(),
            links: vec![
                Link {
                    label: "GitHub".to_string(),
                    url: "https://github.com/example".to_string(),
                },
                Link {
                    label: "LinkedIn".to_string(),
                    url: "https://linkedin.com/in/example".to_string(),
                },
                Link {
                    label: "X".to_string(),
                    url: "https://x.com/example".to_string(),
                },
            ],
        }
    }
}

/// Everything the settings file holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppSettings {
    pub profile: Profile,
    pub tuner: TunerConfig,
}

impl AppSettings {
    /// Load settings from a file, degrading to defaults when the file is
    /// missing or malformed.
    pub fn load(path: impl AsRef<Path>) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Write settings as pretty JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let text = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        std::fs::write(path, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let tuner = TunerConfig::default();
        assert_eq!(tuner.intensity, 0.6);
        assert_eq!(tuner.overlay_opacity, None);
        assert_eq!(tuner.guide_color, "#e5e4e7");
    }

    #[test]
    fn test_adjust_clamps() {
        let mut tuner = TunerConfig::default();
        for _ in 0..40 {
            tuner.adjust(TunerKnob::Intensity, 1);
        }
        assert_eq!(tuner.intensity, 1.0);

        for _ in 0..40 {
            tuner.adjust(TunerKnob::Intensity, -1);
        }
        assert_eq!(tuner.intensity, 0.0);
    }

    #[test]
    fn test_overlay_override_starts_from_midpoint() {
        let mut tuner = TunerConfig::default();
        assert_eq!(tuner.value_text(TunerKnob::OverlayOpacity), "auto");

        tuner.adjust(TunerKnob::OverlayOpacity, 1);
        assert_eq!(tuner.overlay_opacity, Some(0.3));
    }

    #[test]
    fn test_guide_color_cycles_presets() {
        let mut tuner = TunerConfig::default();
        tuner.adjust(TunerKnob::GuideColor, 1);
        assert_eq!(tuner.guide_color, GUIDE_COLOR_PRESETS[1]);

        tuner.adjust(TunerKnob::GuideColor, -1);
        assert_eq!(tuner.guide_color, GUIDE_COLOR_PRESETS[0]);

        tuner.adjust(TunerKnob::GuideColor, -1);
        assert_eq!(
            tuner.guide_color,
            GUIDE_COLOR_PRESETS[GUIDE_COLOR_PRESETS.len() - 1]
        );
    }

    #[test]
    fn test_knob_order_cycles() {
        let mut knob = TunerKnob::Intensity;
        for _ in 0..TunerKnob::ALL.len() {
            knob = knob.next();
        }
        assert_eq!(knob, TunerKnob::Intensity);
        assert_eq!(TunerKnob::Intensity.previous(), TunerKnob::DotOpacity);
    }

    #[test]
    fn test_settings_round_trip() {
        let mut settings = AppSettings::default();
        settings.tuner.intensity = 0.85;
        settings.profile.name = "Tester".to_string();

        let json = serde_json::to_string(&settings).unwrap();
        let parsed: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let parsed: AppSettings =
            serde_json::from_str(r#"{"tuner": {"intensity": 0.9}}"#).unwrap();
        assert_eq!(parsed.tuner.intensity, 0.9);
        assert_eq!(parsed.tuner.guide_opacity, 0.35);
        assert_eq!(parsed.profile, Profile::default());
    }

    #[test]
    fn test_camel_case_keys() {
        let json = serde_json::to_string(&AppSettings::default()).unwrap();
        assert!(json.contains("guideColor"));
        assert!(json.contains("overlayOpacity"));
        assert!(!json.contains("guide_color"));
    }

    #[test]
    fn test_load_missing_file_defaults() {
        let settings = AppSettings::load("/definitely/not/a/real/path.json");
        assert_eq!(settings, AppSettings::default());
    }
}
