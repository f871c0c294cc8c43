//! UI chrome: status bar, scrub bar, ambient time badge, help overlay.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use crate::clock::{format_hour, format_hour_short};
use crate::palette::ScenePalette;

use super::DisplayMode;

/// Status bar at the bottom of the screen
pub struct StatusBar<'a> {
    hour: f32,
    time_of_day: &'a str,
    live: bool,
    playing: bool,
    speed: f32,
    display_mode: DisplayMode,
    fps: u32,
    palette: Option<&'a ScenePalette>,
}

impl<'a> StatusBar<'a> {
    pub fn new(hour: f32, time_of_day: &'a str) -> Self {
        Self {
            hour,
            time_of_day,
            live: true,
            playing: false,
            speed: 1.0,
            display_mode: DisplayMode::default(),
            fps: 30,
            palette: None,
        }
    }

    pub fn live(mut self, live: bool) -> Self {
        self.live = live;
        self
    }

    pub fn playback(mut self, playing: bool, speed: f32) -> Self {
        self.playing = playing;
        self.speed = speed;
        self
    }

    pub fn display_mode(mut self, mode: DisplayMode) -> Self {
        self.display_mode = mode;
        self
    }

    pub fn fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    /// Include raw palette values (Debug mode readout).
    pub fn palette(mut self, palette: &'a ScenePalette) -> Self {
        self.palette = Some(palette);
        self
    }
}

fn draw_text(buf: &mut Buffer, x: u16, y: u16, text: &str, style: Style) -> u16 {
    let mut cx = x;
    for ch in text.chars() {
        if cx >= buf.area.width || y >= buf.area.height {
            break;
        }
        buf[(cx, y)].set_char(ch).set_style(style);
        cx += 1;
    }
    cx
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        // Background
        let bg_style = Style::default().bg(Color::Rgb(12, 14, 18));
        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_char(' ').set_style(bg_style);
        }

        let time_style = Style::default()
            .fg(Color::Rgb(220, 218, 214))
            .add_modifier(Modifier::BOLD);
        let label_style = Style::default().fg(Color::Rgb(120, 120, 135));
        let live_style = Style::default().fg(Color::Rgb(120, 200, 140));
        let preview_style = Style::default().fg(Color::Rgb(230, 180, 100));
        let hint_style = Style::default().fg(Color::Rgb(80, 82, 95));

        let mut x = area.x + 1;
        x = draw_text(buf, x, area.y, &format_hour(self.hour), time_style);
        x = draw_text(buf, x + 2, area.y, self.time_of_day, label_style);

        if self.live {
            x = draw_text(buf, x + 2, area.y, "LIVE", live_style);
        } else {
            let marker = if self.playing { "▶" } else { "⏸" };
            let text = format!("{} {}x", marker, self.speed);
            x = draw_text(buf, x + 2, area.y, &text, preview_style);
        }

        if self.display_mode == DisplayMode::Debug {
            let mut debug = format!("fps:{}", self.fps);
            if let Some(palette) = self.palette {
                debug.push_str(&format!(
                    "  base:#{:x} overlay:{:.2}",
                    palette.base, palette.overlay_opacity
                ));
            }
            x = draw_text(buf, x + 2, area.y, &debug, hint_style);
        }

        // Right-aligned mode and hints
        let right_text = format!(
            "{}  space:play ←→:scrub l:live c:tuner ?:help",
            self.display_mode.name()
        );
        let right_len = right_text.chars().count() as u16;
        if area.width > right_len + 1 && area.x + area.width - right_len - 1 > x {
            draw_text(
                buf,
                area.x + area.width - right_len - 1,
                area.y,
                &right_text,
                hint_style,
            );
        }
    }
}

/// One-row scrub track shown while the hour is overridden.
pub struct ScrubBar {
    hour: f32,
}

impl ScrubBar {
    pub fn new(hour: f32) -> Self {
        Self { hour }
    }
}

impl Widget for ScrubBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width < 10 {
            return;
        }

        let bg_style = Style::default().bg(Color::Rgb(10, 12, 15));
        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_char(' ').set_style(bg_style);
        }

        let track_style = Style::default().fg(Color::Rgb(60, 62, 75));
        let tick_style = Style::default().fg(Color::Rgb(90, 92, 105));
        let marker_style = Style::default()
            .fg(Color::Rgb(230, 180, 100))
            .add_modifier(Modifier::BOLD);

        let track_x = area.x + 1;
        let track_width = area.width - 2;

        for i in 0..track_width {
            buf[(track_x + i, area.y)].set_char('─').set_style(track_style);
        }

        // Quarter-day ticks at 0, 6, 12, 18
        for quarter in 0..4u16 {
            let i = (quarter as u32 * (track_width as u32 - 1) / 4) as u16;
            buf[(track_x + i, area.y)].set_char('┼').set_style(tick_style);
        }

        let frac = (self.hour.rem_euclid(24.0)) / 24.0;
        let marker = (frac * (track_width - 1) as f32).round() as u16;
        buf[(track_x + marker, area.y)]
            .set_char('◆')
            .set_style(marker_style);
    }
}

/// Minimal readout for Ambient mode, tucked into the bottom-left corner.
pub struct TimeBadge<'a> {
    hour: f32,
    time_of_day: &'a str,
    live: bool,
}

impl<'a> TimeBadge<'a> {
    pub fn new(hour: f32, time_of_day: &'a str, live: bool) -> Self {
        Self {
            hour,
            time_of_day,
            live,
        }
    }
}

impl Widget for TimeBadge<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 2 || area.width < 20 {
            return;
        }

        let y = area.y + area.height - 2;
        let dim = Style::default().fg(Color::Rgb(110, 110, 122));
        let dimmer = Style::default().fg(Color::Rgb(78, 78, 90));
        let live_style = Style::default().fg(Color::Rgb(100, 170, 120));

        let mut x = area.x + 2;
        x = draw_text(buf, x, y, &format_hour_short(self.hour), dim);
        x = draw_text(buf, x + 1, y, self.time_of_day, dimmer);
        if self.live {
            draw_text(buf, x + 1, y, "live", live_style);
        }
    }
}

/// Centered keybinding reference.
pub struct HelpOverlay;

const HELP_LINES: [&str; 14] = [
    "skyshift",
    "",
    "space      play / pause the preview",
    "← →        scrub the hour by 15 min",
    "[ ]        preview speed down / up",
    "l          follow the live clock",
    "m, 1-3     display mode (ambient/studio/debug)",
    "g n z      toggle guides / grain / zones",
    "c          open the tuner panel",
    ", .        adjust the selected knob",
    "r          reset tuner knobs",
    "w          write settings to file",
    "q          quit",
    "any key to close",
];

impl Widget for HelpOverlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width: u16 = 52;
        let height = HELP_LINES.len() as u16 + 2;
        if area.width < width + 2 || area.height < height {
            return;
        }

        let x0 = area.x + (area.width - width) / 2;
        let y0 = area.y + (area.height - height) / 2;

        let bg_style = Style::default().bg(Color::Rgb(16, 18, 24));
        let border_style = Style::default().fg(Color::Rgb(90, 92, 105));
        let title_style = Style::default()
            .fg(Color::Rgb(220, 218, 214))
            .add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(Color::Rgb(160, 160, 172));

        for y in y0..y0 + height {
            for x in x0..x0 + width {
                buf[(x, y)].set_char(' ').set_style(bg_style);
            }
        }

        // Border
        for x in x0..x0 + width {
            buf[(x, y0)].set_char('─').set_style(border_style);
            buf[(x, y0 + height - 1)].set_char('─').set_style(border_style);
        }
        for y in y0..y0 + height {
            buf[(x0, y)].set_char('│').set_style(border_style);
            buf[(x0 + width - 1, y)].set_char('│').set_style(border_style);
        }
        buf[(x0, y0)].set_char('┌').set_style(border_style);
        buf[(x0 + width - 1, y0)].set_char('┐').set_style(border_style);
        buf[(x0, y0 + height - 1)].set_char('└').set_style(border_style);
        buf[(x0 + width - 1, y0 + height - 1)]
            .set_char('┘')
            .set_style(border_style);

        for (i, line) in HELP_LINES.iter().enumerate() {
            let style = if i == 0 { title_style } else { text_style };
            draw_text(buf, x0 + 2, y0 + 1 + i as u16, line, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_status_bar_live() {
        let area = Rect::new(0, 0, 100, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::new(9.0, "morning").live(true).render(area, &mut buf);

        let row = row_text(&buf, 0);
        assert!(row.contains("9:00 AM"));
        assert!(row.contains("morning"));
        assert!(row.contains("LIVE"));
    }

    #[test]
    fn test_status_bar_preview() {
        let area = Rect::new(0, 0, 100, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::new(18.5, "sunset")
            .live(false)
            .playback(true, 2.0)
            .render(area, &mut buf);

        let row = row_text(&buf, 0);
        assert!(row.contains("6:30 PM"));
        assert!(row.contains("2x"));
        assert!(!row.contains("LIVE"));
    }

    #[test]
    fn test_status_bar_debug_readout() {
        let area = Rect::new(0, 0, 120, 1);
        let mut buf = Buffer::empty(area);
        let palette = crate::palette::resolve(11.0);
        StatusBar::new(11.0, "midday")
            .display_mode(DisplayMode::Debug)
            .fps(30)
            .palette(&palette)
            .render(area, &mut buf);

        let row = row_text(&buf, 0);
        assert!(row.contains("fps:30"));
        assert!(row.contains("base:#263040"));
    }

    #[test]
    fn test_scrub_bar_marker_position() {
        let area = Rect::new(0, 0, 50, 1);
        let mut buf = Buffer::empty(area);
        ScrubBar::new(0.0).render(area, &mut buf);
        assert_eq!(buf[(1, 0)].symbol(), "◆");

        let mut buf = Buffer::empty(area);
        ScrubBar::new(23.99).render(area, &mut buf);
        assert_eq!(buf[(48, 0)].symbol(), "◆");
    }

    #[test]
    fn test_time_badge() {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        TimeBadge::new(19.3, "dusk", true).render(area, &mut buf);

        let row = row_text(&buf, 22);
        assert!(row.contains("7pm"));
        assert!(row.contains("dusk"));
        assert!(row.contains("live"));
    }

    #[test]
    fn test_help_overlay_centers() {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        HelpOverlay.render(area, &mut buf);

        let screen: String = (0..24).map(|y| row_text(&buf, y)).collect();
        assert!(screen.contains("skyshift"));
        assert!(screen.contains("any key to close"));
    }

    #[test]
    fn test_help_overlay_skips_small_screens() {
        let area = Rect::new(0, 0, 30, 8);
        let mut buf = Buffer::empty(area);
        HelpOverlay.render(area, &mut buf);
        let screen: String = (0..8).map(|y| row_text(&buf, y)).collect();
        assert!(!screen.contains("skyshift"));
    }
}
