//! Scene state: everything the renderer reads, advanced once per frame.

pub mod zones;

pub use zones::ZoneState;

use ratatui::layout::Rect;

use crate::animation::GlitchBurst;
use crate::layout::{margin_zones, zone_at, GuideSpacing};
use crate::palette::{self, ScenePalette};

/// Aggregate state of the ambient scene.
pub struct Scene {
    hour: f32,
    palette: ScenePalette,
    time_of_day: &'static str,
    area: Rect,
    spacing: GuideSpacing,
    compact: bool,
    force_compact: bool,
    zones: Vec<ZoneState>,
    pub glitch: GlitchBurst,
    elapsed: f32,
}

impl Scene {
    pub fn new(hour: f32, width: u16, height: u16, force_compact: bool) -> Self {
        let area = Rect::new(0, 0, width, height);
        let (spacing, compact) = spacing_for(width, height, force_compact);
        let zones = margin_zones(area, spacing)
            .into_iter()
            .map(ZoneState::new)
            .collect();

        Self {
            hour,
            palette: palette::resolve(hour),
            time_of_day: palette::time_of_day(hour),
            area,
            spacing,
            compact,
            force_compact,
            zones,
            glitch: GlitchBurst::new(),
            elapsed: 0.0,
        }
    }

    /// Re-resolve the palette for a new hour.
    pub fn set_hour(&mut self, hour: f32) {
        self.hour = hour;
        self.palette = palette::resolve(hour);
        self.time_of_day = palette::time_of_day(hour);
    }

    pub fn hour(&self) -> f32 {
        self.hour
    }

    pub fn palette(&self) -> &ScenePalette {
        &self.palette
    }

    pub fn time_of_day(&self) -> &'static str {
        self.time_of_day
    }

    pub fn spacing(&self) -> GuideSpacing {
        self.spacing
    }

    pub fn is_compact(&self) -> bool {
        self.compact
    }

    pub fn zones(&self) -> &[ZoneState] {
        &self.zones
    }

    /// Total seconds the scene has been running (noise input).
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Recompute spacing and zone rects for a new terminal size,
    /// preserving each zone's fade state.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.area = Rect::new(0, 0, width, height);
        let (spacing, compact) = spacing_for(width, height, self.force_compact);
        self.spacing = spacing;
        self.compact = compact;

        let rects = margin_zones(self.area, spacing);
        for (zone, rect) in self.zones.iter_mut().zip(rects) {
            zone.set_rect(rect);
        }
    }

    /// Mark the zone under the pointer as hovered, clearing the rest.
    pub fn hover(&mut self, x: u16, y: u16) {
        let rects: Vec<Rect> = self.zones.iter().map(|zone| zone.rect).collect();
        let active = zone_at(&rects, x, y);
        for (index, zone) in self.zones.iter_mut().enumerate() {
            zone.set_hovered(Some(index) == active);
        }
    }

    /// Advance per-frame state.
    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt;
        self.glitch.tick(dt);
        for zone in &mut self.zones {
            zone.tick(dt);
        }
    }
}

fn spacing_for(width: u16, height: u16, force_compact: bool) -> (GuideSpacing, bool) {
    if force_compact {
        let narrow = width.min(crate::layout::COMPACT_WIDTH - 1);
        let (spacing, _) = GuideSpacing::for_size(narrow, height);
        (spacing, true)
    } else {
        GuideSpacing::for_size(width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_tracks_hour() {
        let mut scene = Scene::new(12.0, 120, 40, false);
        assert_eq!(scene.time_of_day(), "midday");

        scene.set_hour(17.5);
        assert_eq!(scene.time_of_day(), "goldenHour");
        assert_eq!(*scene.palette(), crate::palette::resolve(17.5));
    }

    #[test]
    fn test_resize_recomputes_spacing() {
        let mut scene = Scene::new(12.0, 120, 40, false);
        assert!(!scene.is_compact());

        scene.resize(80, 24);
        assert!(scene.is_compact());
        assert_eq!(scene.zones().len(), 8);
    }

    #[test]
    fn test_forced_compact() {
        let scene = Scene::new(12.0, 200, 50, true);
        assert!(scene.is_compact());
    }

    #[test]
    fn test_hover_activates_single_zone() {
        let mut scene = Scene::new(12.0, 120, 40, false);
        scene.hover(0, 0);
        scene.tick(1.0);

        let active: Vec<f32> = scene.zones().iter().map(|z| z.activation()).collect();
        assert_eq!(active[0], 1.0);
        assert!(active[1..].iter().all(|&a| a == 0.0));

        // Moving to the center releases the corner.
        scene.hover(60, 20);
        scene.tick(1.0);
        assert_eq!(scene.zones()[0].activation(), 0.0);
    }

    #[test]
    fn test_tick_accumulates_elapsed() {
        let mut scene = Scene::new(12.0, 120, 40, false);
        scene.tick(0.5);
        scene.tick(0.25);
        assert!((scene.elapsed() - 0.75).abs() < 1e-6);
    }
}
