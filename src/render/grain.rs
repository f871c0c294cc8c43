//! Film-grain overlay.
//!
//! Sparse speckles from hash noise, re-seeded a few times a second so the
//! grain crawls without any per-frame allocation or RNG state.

use palette::Srgb;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::animation::noise::{flicker, pseudo_noise};
use crate::palette::{mix, ScenePalette};

use super::tui_color;

/// Noise threshold above which a bright speck appears
const BRIGHT_THRESHOLD: f32 = 0.982;

/// Noise threshold below which a dark speck appears
const DARK_THRESHOLD: f32 = 0.012;

/// Grain reseeds per second
const RESEED_HZ: f32 = 8.0;

pub struct GrainWidget<'a> {
    palette: &'a ScenePalette,
    elapsed: f32,
}

impl<'a> GrainWidget<'a> {
    pub fn new(palette: &'a ScenePalette, elapsed: f32) -> Self {
        Self { palette, elapsed }
    }
}

impl Widget for GrainWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let seed = (self.elapsed * RESEED_HZ) as u32;
        let level = flicker(self.elapsed, 0.4);

        let bright = mix(self.palette.base, Srgb::new(255, 255, 255), 0.10 * level);
        let dark = mix(self.palette.base, Srgb::new(0, 0, 0), 0.6);

        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                let n = pseudo_noise(x as f32, y as f32, seed);
                if n > BRIGHT_THRESHOLD {
                    buf[(x, y)].set_char('·').set_fg(tui_color(bright));
                } else if n < DARK_THRESHOLD {
                    buf[(x, y)].set_char('·').set_fg(tui_color(dark));
                }
            }
        }
    }
}
