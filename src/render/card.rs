//! Centered profile card: name, tagline, links.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use crate::config::Profile;

/// Card width caps
const MAX_WIDTH: u16 = 48;
const MAX_WIDTH_COMPACT: u16 = 28;

pub struct ProfileCardWidget<'a> {
    profile: &'a Profile,
    compact: bool,
}

impl<'a> ProfileCardWidget<'a> {
    pub fn new(profile: &'a Profile, compact: bool) -> Self {
        Self { profile, compact }
    }

    fn max_width(&self) -> u16 {
        if self.compact {
            MAX_WIDTH_COMPACT
        } else {
            MAX_WIDTH
        }
    }
}

fn draw_text(buf: &mut Buffer, x: u16, y: u16, limit: u16, text: &str, style: Style) {
    let mut cx = x;
    for ch in text.chars() {
        if cx >= x + limit || cx >= buf.area.width || y >= buf.area.height {
            break;
        }
        buf[(cx, y)].set_char(ch).set_style(style);
        cx += 1;
    }
}

fn truncated(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(limit.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}

impl Widget for ProfileCardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = self.max_width().min(area.width.saturating_sub(4));
        if width < 8 || area.height < 4 {
            return;
        }

        let name_style = Style::default()
            .fg(Color::Rgb(235, 233, 228))
            .add_modifier(Modifier::BOLD);
        let tagline_style = Style::default().fg(Color::Rgb(158, 158, 170));
        let label_style = Style::default().fg(Color::Rgb(130, 130, 145));
        let url_style = Style::default().fg(Color::Rgb(96, 96, 110));

        // name, gap, tagline, gap, links
        let link_count = self.profile.links.len() as u16;
        let height = 2 + 1 + if link_count > 0 { 1 + link_count } else { 0 };
        let x = area.x + (area.width - width) / 2;
        let mut y = area.y + area.height.saturating_sub(height) / 2;

        draw_text(
            buf,
            x,
            y,
            width,
            &truncated(&self.profile.name, width as usize),
            name_style,
        );
        y += 2;

        draw_text(
            buf,
            x,
            y,
            width,
            &truncated(&self.profile.tagline, width as usize),
            tagline_style,
        );
        y += 2;

        for link in &self.profile.links {
            if y >= area.y + area.height {
                break;
            }
            let label = truncated(&link.label, 10);
            draw_text(buf, x, y, width, &label, label_style);

            let used = label.chars().count() as u16 + 2;
            if used < width {
                let url = truncated(&link.url, (width - used) as usize);
                draw_text(buf, x + used, y, width - used, &url, url_style);
            }
            y += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell_text(buf: &Buffer, y: u16, width: u16) -> String {
        (0..width).map(|x| buf[(x, y)].symbol().to_string()).collect()
    }

    #[test]
    fn test_card_contains_profile_text() {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        let profile = Profile::default();
        ProfileCardWidget::new(&profile, false).render(area, &mut buf);

        let screen: String = (0..24).map(|y| cell_text(&buf, y, 80)).collect();
        assert!(screen.contains(&profile.name));
        assert!(screen.contains("GitHub"));
    }

    #[test]
    fn test_long_tagline_truncates() {
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        let mut profile = Profile::default();
        profile.tagline = "x".repeat(200);
        ProfileCardWidget::new(&profile, false).render(area, &mut buf);

        let screen: String = (0..12).map(|y| cell_text(&buf, y, 40)).collect();
        assert!(screen.contains('…'));
    }

    #[test]
    fn test_tiny_area_is_noop() {
        let area = Rect::new(0, 0, 6, 3);
        let mut buf = Buffer::empty(area);
        ProfileCardWidget::new(&Profile::default(), true).render(area, &mut buf);
        assert_eq!(cell_text(&buf, 1, 6).trim(), "");
    }
}
