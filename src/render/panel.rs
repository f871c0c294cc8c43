//! Tuner panel: manual visual knobs, bypassing the palette engine.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use crate::config::{TunerConfig, TunerKnob};
use crate::palette::interpolate::parse_hex;

use super::tui_color;

/// Panel dimensions
const PANEL_WIDTH: u16 = 32;
const PANEL_HEIGHT: u16 = 9;

/// Slider bar width in cells
const BAR_WIDTH: u16 = 8;

pub struct TunerPanel<'a> {
    tuner: &'a TunerConfig,
    selected: TunerKnob,
}

impl<'a> TunerPanel<'a> {
    pub fn new(tuner: &'a TunerConfig, selected: TunerKnob) -> Self {
        Self { tuner, selected }
    }

    /// Get the preferred panel dimensions.
    pub fn dimensions() -> (u16, u16) {
        (PANEL_WIDTH, PANEL_HEIGHT)
    }

    /// Anchor the panel to the top-right corner, clamped on-screen.
    pub fn calculate_position(area: Rect) -> (u16, u16) {
        let x = (area.x + area.width)
            .saturating_sub(PANEL_WIDTH + 2)
            .max(area.x);
        let y = area.y + 1;
        (x, y)
    }
}

/// Normalized bar fill for a knob, if it has a numeric range.
fn bar_fill(tuner: &TunerConfig, knob: TunerKnob) -> Option<f32> {
    match knob {
        TunerKnob::Intensity => Some(tuner.intensity),
        TunerKnob::OverlayOpacity => tuner.overlay_opacity.map(|o| o / 0.5),
        TunerKnob::GuideOpacity => Some(tuner.guide_opacity),
        TunerKnob::DotOpacity => Some(tuner.dot_opacity),
        TunerKnob::GuideColor => None,
    }
}

impl Widget for TunerPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = area.width.min(PANEL_WIDTH);
        let height = area.height.min(PANEL_HEIGHT);

        if width < 16 || height < 5 {
            return; // Too small to render
        }

        // Background
        let bg_style = Style::default().bg(Color::Rgb(18, 18, 24));
        for y in area.y..area.y + height {
            for x in area.x..area.x + width {
                if x < buf.area.width && y < buf.area.height {
                    buf[(x, y)].set_char(' ').set_style(bg_style);
                }
            }
        }

        // Border
        let border_style = Style::default().fg(Color::Rgb(90, 92, 105));
        for x in area.x..area.x + width {
            buf[(x, area.y)].set_char('─').set_style(border_style);
            buf[(x, area.y + height - 1)].set_char('─').set_style(border_style);
        }
        for y in area.y..area.y + height {
            buf[(area.x, y)].set_char('│').set_style(border_style);
            buf[(area.x + width - 1, y)].set_char('│').set_style(border_style);
        }
        buf[(area.x, area.y)].set_char('┌').set_style(border_style);
        buf[(area.x + width - 1, area.y)].set_char('┐').set_style(border_style);
        buf[(area.x, area.y + height - 1)].set_char('└').set_style(border_style);
        buf[(area.x + width - 1, area.y + height - 1)]
            .set_char('┘')
            .set_style(border_style);

        // Title
        let title_style = Style::default()
            .fg(Color::Rgb(200, 198, 194))
            .add_modifier(Modifier::BOLD);
        draw_text(buf, area.x + 2, area.y, " tuner ", title_style);

        // Knob rows
        let label_style = Style::default().fg(Color::Rgb(150, 150, 162));
        let selected_style = Style::default()
            .fg(Color::Rgb(230, 180, 100))
            .add_modifier(Modifier::BOLD);
        let value_style = Style::default().fg(Color::Rgb(190, 188, 184));
        let bar_on = Style::default().fg(Color::Rgb(190, 188, 184));
        let bar_off = Style::default().fg(Color::Rgb(70, 72, 85));

        for (i, knob) in TunerKnob::ALL.iter().enumerate() {
            let y = area.y + 1 + i as u16;
            if y >= area.y + height - 1 {
                break;
            }

            let is_selected = *knob == self.selected;
            let style = if is_selected { selected_style } else { label_style };
            let marker = if is_selected { "▸ " } else { "  " };

            let mut x = draw_text(buf, area.x + 1, y, marker, style);
            x = draw_text(buf, x, y, knob.label(), style);

            // Slider bar for numeric knobs, color swatch otherwise
            let bar_x = area.x + width - BAR_WIDTH - 8;
            if bar_x > x {
                if let Some(fill) = bar_fill(self.tuner, *knob) {
                    let filled = (fill.clamp(0.0, 1.0) * BAR_WIDTH as f32).round() as u16;
                    for i in 0..BAR_WIDTH {
                        let style = if i < filled { bar_on } else { bar_off };
                        buf[(bar_x + i, y)].set_char('▪').set_style(style);
                    }
                } else if *knob == TunerKnob::GuideColor {
                    let swatch = tui_color(parse_hex(&self.tuner.guide_color));
                    for i in 0..2 {
                        buf[(bar_x + i, y)]
                            .set_char('█')
                            .set_style(Style::default().fg(swatch));
                    }
                }
            }

            // Value text, right-aligned
            let value = self.tuner.value_text(*knob);
            let value_len = value.chars().count() as u16;
            if width > value_len + 2 {
                draw_text(
                    buf,
                    area.x + width - value_len - 2,
                    y,
                    &value,
                    value_style,
                );
            }
        }

        // Footer hints
        let hint_style = Style::default().fg(Color::Rgb(80, 82, 95));
        draw_text(
            buf,
            area.x + 2,
            area.y + height - 2,
            ", . adjust   r reset   w save",
            hint_style,
        );
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
