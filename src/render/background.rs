//! Full-screen gradient background.
//!
//! A terminal rendition of the original shader: a vertical spine from the
//! palette's `up` color through `base` to `down`, tinted toward `left` and
//! `right` on the flanks, with a vignette pulling the edges toward
//! `primary`/`secondary` scaled by the tuner intensity. The overlay
//! opacity darkens the whole field toward black.

use palette::Srgb;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::config::TunerConfig;
use crate::palette::{mix, smoothstep, ScenePalette};

use super::tui_color;

/// Fraction of the width tinted toward the flank colors
const FLANK: f32 = 0.25;

/// Maximum flank tint strength
const FLANK_STRENGTH: f32 = 0.5;

/// Vignette strength at full intensity
const VIGNETTE_STRENGTH: f32 = 0.8;

pub struct BackgroundWidget<'a> {
    palette: &'a ScenePalette,
    intensity: f32,
    overlay_opacity: f32,
}

impl<'a> BackgroundWidget<'a> {
    pub fn new(palette: &'a ScenePalette, tuner: &TunerConfig) -> Self {
        Self {
            palette,
            intensity: tuner.intensity,
            // The tuner override wins over the palette's own value
            overlay_opacity: tuner.overlay_opacity.unwrap_or(palette.overlay_opacity),
        }
    }
}

impl Widget for BackgroundWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let p = self.palette;
        let black = Srgb::new(0, 0, 0);
        let max_x = (area.width - 1).max(1) as f32;
        let max_y = (area.height - 1).max(1) as f32;

        for y in area.y..area.y + area.height {
            let v = (y - area.y) as f32 / max_y;

            // Vertical spine: up -> base -> down
            let spine = if v < 0.5 {
                mix(p.up, p.base, smoothstep(v * 2.0))
            } else {
                mix(p.base, p.down, smoothstep((v - 0.5) * 2.0))
            };

            for x in area.x..area.x + area.width {
                let u = (x - area.x) as f32 / max_x;
                let mut color = spine;

                // Flank tint
                if u < FLANK {
                    color = mix(color, p.left, (1.0 - u / FLANK) * FLANK_STRENGTH);
                } else if u > 1.0 - FLANK {
                    color = mix(color, p.right, (u - (1.0 - FLANK)) / FLANK * FLANK_STRENGTH);
                }

                // Vignette toward the glow pair
                let dx = u * 2.0 - 1.0;
                let dy = v * 2.0 - 1.0;
                let dist = (dx * dx + dy * dy).sqrt().min(1.0);
                let target = mix(p.primary, p.secondary, 1.0 - dist);
                color = mix(
                    color,
                    target,
                    smoothstep(dist) * self.intensity * VIGNETTE_STRENGTH,
                );

                // Overlay darkening
                color = mix(color, black, self.overlay_opacity);

                buf[(x, y)].set_char(' ').set_bg(tui_color(color));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::resolve;
    use ratatui::style::Color;

    fn filled(hour: f32, tuner: &TunerConfig, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        let palette = resolve(hour);
        BackgroundWidget::new(&palette, tuner).render(area, &mut buf);
        buf
    }

    fn bg_rgb(buf: &Buffer, x: u16, y: u16) -> (u8, u8, u8) {
        match buf[(x, y)].bg {
            Color::Rgb(r, g, b) => (r, g, b),
            other => panic!("expected RGB background, got {:?}", other),
        }
    }

    #[test]
    fn test_every_cell_painted() {
        let buf = filled(12.0, &TunerConfig::default(), 40, 12);
        for y in 0..12 {
            for x in 0..40 {
                assert!(matches!(buf[(x, y)].bg, Color::Rgb(..)));
            }
        }
    }

    #[test]
    fn test_bottom_darker_than_center() {
        // `down` is the darkest role, so the last row reads darker than
        // the vertical center.
        let buf = filled(12.0, &TunerConfig::default(), 40, 13);
        let (r1, g1, b1) = bg_rgb(&buf, 20, 6);
        let (r2, g2, b2) = bg_rgb(&buf, 20, 12);
        let center = r1 as u16 + g1 as u16 + b1 as u16;
        let bottom = r2 as u16 + g2 as u16 + b2 as u16;
        assert!(bottom < center);
    }

    #[test]
    fn test_overlay_override_darkens() {
        let default_buf = filled(12.0, &TunerConfig::default(), 20, 8);

        let mut dark = TunerConfig::default();
        dark.overlay_opacity = Some(0.5);
        let dark_buf = filled(12.0, &dark, 20, 8);

        let (r1, g1, b1) = bg_rgb(&default_buf, 10, 4);
        let (r2, g2, b2) = bg_rgb(&dark_buf, 10, 4);
        let light = r1 as u16 + g1 as u16 + b1 as u16;
        let darker = r2 as u16 + g2 as u16 + b2 as u16;
        assert!(darker < light);
    }

    #[test]
    fn test_zero_area_is_noop() {
        let area = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(area);
        let palette = resolve(0.0);
        BackgroundWidget::new(&palette, &TunerConfig::default()).render(area, &mut buf);
    }
}
