//! Layer-based rendering for the ambient scene.
//!
//! Layers render in strict z-order: lower enum values render first
//! (background), higher values render last (chrome and overlays). The
//! glitch distortion sits above the card so startup distortion warps the
//! scene content but never the UI chrome.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::clock::Playback;
use crate::config::{Profile, TunerConfig, TunerKnob};
use crate::scene::Scene;

use super::{
    BackgroundWidget, GrainWidget, GuideLinesWidget, HelpOverlay, ProfileCardWidget, ScrubBar,
    StatusBar, TimeBadge, TunerPanel, ZonesWidget,
};

/// Render layers in strict z-order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum RenderLayer {
    /// Gradient background fill
    Background = 0,
    /// Film grain speckle
    Grain = 1,
    /// Guide lines and corner dots
    Guides = 2,
    /// Hover zone highlights
    Zones = 3,
    /// Profile card content
    Card = 4,
    /// Startup glitch distortion (warps everything below)
    Glitch = 5,
    /// Status bar, scrub bar, tuner panel
    Ui = 6,
    /// Help overlay
    Overlays = 7,
}

impl RenderLayer {
    /// Get all layers in render order (background to foreground).
    pub const fn all() -> [RenderLayer; 8] {
        [
            RenderLayer::Background,
            RenderLayer::Grain,
            RenderLayer::Guides,
            RenderLayer::Zones,
            RenderLayer::Card,
            RenderLayer::Glitch,
            RenderLayer::Ui,
            RenderLayer::Overlays,
        ]
    }

    /// Get the layer's z-index value.
    pub const fn z_index(self) -> u8 {
        self as u8
    }

    /// Check if this layer should render above another.
    pub fn renders_above(self, other: RenderLayer) -> bool {
        self.z_index() > other.z_index()
    }
}

/// Configuration for which layers are enabled.
#[derive(Debug, Clone)]
pub struct LayerVisibility {
    enabled: [bool; 8],
}

impl Default for LayerVisibility {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerVisibility {
    /// Create new visibility config with all layers enabled by default.
    pub fn new() -> Self {
        Self { enabled: [true; 8] }
    }

    /// Check if a layer is visible.
    pub fn is_visible(&self, layer: RenderLayer) -> bool {
        self.enabled[layer.z_index() as usize]
    }

    /// Enable or disable a layer.
    pub fn set_visible(&mut self, layer: RenderLayer, visible: bool) {
        self.enabled[layer.z_index() as usize] = visible;
    }

    /// Toggle a layer's visibility.
    pub fn toggle(&mut self, layer: RenderLayer) {
        let index = layer.z_index() as usize;
        self.enabled[index] = !self.enabled[index];
    }
}

/// Display mode presets for the scene chrome.
///
/// - Ambient: scene and card only, with a faint time badge
/// - Studio: adds the status/scrub bars and the tuner panel
/// - Debug: Studio plus fps and raw palette readouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Just the scene: the "production" view.
    Ambient,

    /// Working view with playback and tuner controls.
    #[default]
    Studio,

    /// Studio plus diagnostic readouts.
    Debug,
}

impl DisplayMode {
    /// Cycle to the next display mode.
    ///
    /// Order: Ambient -> Studio -> Debug -> Ambient
    pub fn cycle(&self) -> DisplayMode {
        match self {
            DisplayMode::Ambient => DisplayMode::Studio,
            DisplayMode::Studio => DisplayMode::Debug,
            DisplayMode::Debug => DisplayMode::Ambient,
        }
    }

    /// Get the display name for this mode.
    pub fn name(&self) -> &'static str {
        match self {
            DisplayMode::Ambient => "ambient",
            DisplayMode::Studio => "studio",
            DisplayMode::Debug => "debug",
        }
    }

    /// Whether the full chrome (bars, panel) is shown.
    pub fn shows_chrome(&self) -> bool {
        !matches!(self, DisplayMode::Ambient)
    }
}

/// State needed for rendering all layers.
pub struct RenderState<'a> {
    pub scene: &'a Scene,
    pub profile: &'a Profile,
    pub tuner: &'a TunerConfig,
    /// Whether the hour follows the wall clock
    pub live: bool,
    pub playback: &'a Playback,
    pub display_mode: DisplayMode,
    pub tuner_open: bool,
    pub tuner_selected: TunerKnob,
    pub show_help: bool,
    pub fps: u32,
}

/// Manages ordered layer rendering for the scene.
pub struct LayerRenderer<'a> {
    area: Rect,
    visibility: &'a LayerVisibility,
}

impl<'a> LayerRenderer<'a> {
    pub fn new(area: Rect, visibility: &'a LayerVisibility) -> Self {
        Self { area, visibility }
    }

    /// Render all enabled layers in z-order.
    pub fn render_all(&self, buf: &mut Buffer, state: &RenderState<'_>) {
        for layer in RenderLayer::all() {
            if self.visibility.is_visible(layer) {
                self.render_layer(layer, buf, state);
            }
        }
    }

    fn render_layer(&self, layer: RenderLayer, buf: &mut Buffer, state: &RenderState<'_>) {
        match layer {
            RenderLayer::Background => {
                BackgroundWidget::new(state.scene.palette(), state.tuner).render(self.area, buf);
            }
            RenderLayer::Grain => {
                GrainWidget::new(state.scene.palette(), state.scene.elapsed())
                    .render(self.area, buf);
            }
            RenderLayer::Guides => {
                GuideLinesWidget::new(state.scene.spacing(), state.tuner).render(self.area, buf);
            }
            RenderLayer::Zones => {
                ZonesWidget::new(state.scene.zones()).render(self.area, buf);
            }
            RenderLayer::Card => {
                ProfileCardWidget::new(state.profile, state.scene.is_compact())
                    .render(self.area, buf);
            }
            RenderLayer::Glitch => self.render_glitch(buf, state),
            RenderLayer::Ui => self.render_ui(buf, state),
            RenderLayer::Overlays => self.render_overlays(buf, state),
        }
    }

    /// Shift glitch slices of the frame sideways, wrapping at the edges.
    fn render_glitch(&self, buf: &mut Buffer, state: &RenderState<'_>) {
        let burst = &state.scene.glitch;
        if !burst.active() || self.area.width == 0 {
            return;
        }

        let intensity = burst.intensity();
        for slice in burst.slices() {
            let shift = (slice.shift as f32 * intensity).round() as i32;
            if shift == 0 {
                continue;
            }

            let row = self.area.y
                + (slice.row_frac * self.area.height.saturating_sub(1) as f32) as u16;
            let end = (row + slice.height).min(self.area.y + self.area.height);
            for y in row..end {
                shift_row(buf, self.area, y, shift);
            }
        }
    }

    fn render_ui(&self, buf: &mut Buffer, state: &RenderState<'_>) {
        if !state.display_mode.shows_chrome() {
            TimeBadge::new(state.scene.hour(), state.scene.time_of_day(), state.live)
                .render(self.area, buf);
            return;
        }

        if self.area.height < 3 {
            return;
        }

        // Status bar on the bottom row
        let status_area = Rect::new(
            self.area.x,
            self.area.y + self.area.height - 1,
            self.area.width,
            1,
        );
        StatusBar::new(state.scene.hour(), state.scene.time_of_day())
            .live(state.live)
            .playback(state.playback.playing, state.playback.speed())
            .display_mode(state.display_mode)
            .fps(state.fps)
            .palette(state.scene.palette())
            .render(status_area, buf);

        // Scrub track above it while the hour is overridden
        if !state.live {
            let scrub_area = Rect::new(
                self.area.x,
                self.area.y + self.area.height - 2,
                self.area.width,
                1,
            );
            ScrubBar::new(state.scene.hour()).render(scrub_area, buf);
        }

        if state.tuner_open {
            let (x, y) = TunerPanel::calculate_position(self.area);
            let (width, height) = TunerPanel::dimensions();
            let panel_area = Rect::new(x, y, width, height).intersection(self.area);
            TunerPanel::new(state.tuner, state.tuner_selected).render(panel_area, buf);
        }
    }

    fn render_overlays(&self, buf: &mut Buffer, state: &RenderState<'_>) {
        if state.show_help {
            HelpOverlay.render(self.area, buf);
        }
    }
}

fn shift_row(buf: &mut Buffer, area: Rect, y: u16, shift: i32) {
    let width = area.width as i32;
    let cells: Vec<_> = (0..width)
        .map(|i| buf[(area.x + i as u16, y)].clone())
        .collect();

    for i in 0..width {
        let src = (i - shift).rem_euclid(width) as usize;
        buf[(area.x + i as u16, y)] = cells[src].clone();
    }
}
