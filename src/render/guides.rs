//! Decorative guide lines and corner dots at the margin spacing.
//!
//! Lines brighten toward their middle and fade to nothing at the screen
//! edges; dots mark the four crossings. Color and opacities come from the
//! tuner, composited over whatever background is already in the buffer.

use palette::Srgb;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::config::TunerConfig;
use crate::layout::GuideSpacing;
use crate::palette::interpolate::parse_hex;

use super::blend_over;

pub struct GuideLinesWidget {
    spacing: GuideSpacing,
    color: Srgb<u8>,
    line_opacity: f32,
    dot_opacity: f32,
}

impl GuideLinesWidget {
    pub fn new(spacing: GuideSpacing, tuner: &TunerConfig) -> Self {
        Self {
            spacing,
            color: parse_hex(&tuner.guide_color),
            line_opacity: tuner.guide_opacity,
            dot_opacity: tuner.dot_opacity,
        }
    }
}

/// Brightness along a line: full in the middle, zero at the ends.
fn end_fade(index: u16, length: u16) -> f32 {
    if length <= 1 {
        return 1.0;
    }
    let frac = index as f32 / (length - 1) as f32;
    1.0 - (2.0 * frac - 1.0).abs()
}

impl Widget for GuideLinesWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height <= self.spacing.horizontal * 2 || area.width <= self.spacing.vertical * 2 {
            return;
        }

        let top = area.y + self.spacing.horizontal;
        let bottom = area.y + area.height - 1 - self.spacing.horizontal;
        let left = area.x + self.spacing.vertical;
        let right = area.x + area.width - 1 - self.spacing.vertical;

        // Horizontal guides
        for x in area.x..area.x + area.width {
            let alpha = self.line_opacity * end_fade(x - area.x, area.width);
            for y in [top, bottom] {
                let fg = blend_over(buf[(x, y)].bg, self.color, alpha);
                buf[(x, y)].set_char('─').set_fg(fg);
            }
        }

        // Vertical guides
        for y in area.y..area.y + area.height {
            let alpha = self.line_opacity * end_fade(y - area.y, area.height);
            for x in [left, right] {
                let fg = blend_over(buf[(x, y)].bg, self.color, alpha);
                buf[(x, y)].set_char('│').set_fg(fg);
            }
        }

        // Corner dots at the crossings
        for (x, y) in [(left, top), (right, top), (left, bottom), (right, bottom)] {
            let fg = blend_over(buf[(x, y)].bg, self.color, self.dot_opacity);
            buf[(x, y)].set_char('●').set_fg(fg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn rendered(width: u16, height: u16) -> (Buffer, GuideSpacing) {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        // Flat dark background so composited colors are predictable
        for y in 0..height {
            for x in 0..width {
                buf[(x, y)].set_bg(Color::Rgb(10, 10, 10));
            }
        }
        let (spacing, _) = GuideSpacing::for_size(width, height);
        GuideLinesWidget::new(spacing, &TunerConfig::default()).render(area, &mut buf);
        (buf, spacing)
    }

    #[test]
    fn test_lines_drawn_at_spacing() {
        let (buf, spacing) = rendered(120, 40);
        let mid_x = 60;
        assert_eq!(buf[(mid_x, spacing.horizontal)].symbol(), "─");
        assert_eq!(buf[(mid_x, 40 - 1 - spacing.horizontal)].symbol(), "─");
        assert_eq!(buf[(spacing.vertical, 20)].symbol(), "│");
    }

    #[test]
    fn test_corner_dots() {
        let (buf, spacing) = rendered(120, 40);
        assert_eq!(
            buf[(spacing.vertical, spacing.horizontal)].symbol(),
            "●"
        );
    }

    #[test]
    fn test_line_fades_at_ends() {
        let (buf, spacing) = rendered(120, 40);
        let y = spacing.horizontal;

        let brightness = |x: u16| match buf[(x, y)].fg {
            Color::Rgb(r, g, b) => r as u16 + g as u16 + b as u16,
            _ => 0,
        };

        // Edge cells carry no line color beyond the background.
        assert!(brightness(0) < brightness(60));
    }

    #[test]
    fn test_end_fade_shape() {
        assert_eq!(end_fade(0, 100), 0.0);
        assert!((end_fade(99, 100) - 0.0).abs() < 1e-6);
        assert!((end_fade(50, 101) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_too_small_area_skipped() {
        let area = Rect::new(0, 0, 8, 4);
        let mut buf = Buffer::empty(area);
        let (spacing, _) = GuideSpacing::for_size(8, 4);
        GuideLinesWidget::new(spacing, &TunerConfig::default()).render(area, &mut buf);
        // Nothing drawn; spacing would leave no interior.
        for y in 0..4 {
            for x in 0..8 {
                assert_eq!(buf[(x, y)].symbol(), " ");
            }
        }
    }
}
