//! Hover highlight for the margin zones.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::scene::ZoneState;

use super::lighten;

/// Background lift at full activation
const HIGHLIGHT: f32 = 0.06;

pub struct ZonesWidget<'a> {
    zones: &'a [ZoneState],
}

impl<'a> ZonesWidget<'a> {
    pub fn new(zones: &'a [ZoneState]) -> Self {
        Self { zones }
    }
}

impl Widget for ZonesWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for zone in self.zones {
            let activation = zone.activation();
            if activation <= 0.0 {
                continue;
            }

            let amount = HIGHLIGHT * activation;
            let rect = zone.rect.intersection(area);
            for y in rect.y..rect.y + rect.height {
                for x in rect.x..rect.x + rect.width {
                    let lifted = lighten(buf[(x, y)].bg, amount);
                    buf[(x, y)].set_bg(lifted);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn test_active_zone_lifts_background() {
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        for y in 0..10 {
            for x in 0..20 {
                buf[(x, y)].set_bg(Color::Rgb(20, 20, 20));
            }
        }

        let mut zone = ZoneState::new(Rect::new(0, 0, 5, 3));
        zone.set_hovered(true);
        zone.tick(10.0); // fully faded in
        ZonesWidget::new(std::slice::from_ref(&zone)).render(area, &mut buf);

        assert_ne!(buf[(2, 1)].bg, Color::Rgb(20, 20, 20));
        // Cells outside the zone untouched.
        assert_eq!(buf[(10, 5)].bg, Color::Rgb(20, 20, 20));
    }

    #[test]
    fn test_inactive_zone_is_noop() {
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        let zone = ZoneState::new(Rect::new(0, 0, 5, 3));
        ZonesWidget::new(std::slice::from_ref(&zone)).render(area, &mut buf);
        assert_eq!(buf[(2, 1)].bg, Color::Reset);
    }
}
