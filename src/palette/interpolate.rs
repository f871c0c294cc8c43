//! Smoothstep interpolation over the anchor schedule.

use palette::Srgb;

use super::anchors::{AnchorEntry, AnchorPalette, SCHEDULE};
use super::ScenePalette;

/// Smoothstep ease: zero first derivative at t = 0 and t = 1, so
/// consecutive schedule segments join with continuous perceived velocity.
pub fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Parse a hex color string, degrading to black on malformed input.
///
/// Rendering must never stop over a bad color table entry, so there is
/// no error path here.
pub(crate) fn parse_hex(hex: &str) -> Srgb<u8> {
    hex.parse().unwrap_or(Srgb::new(0, 0, 0))
}

/// Blend two colors channel-wise, rounding to the nearest 8-bit value.
pub fn mix(a: Srgb<u8>, b: Srgb<u8>, t: f32) -> Srgb<u8> {
    Srgb::new(
        lerp(a.red as f32, b.red as f32, t).round() as u8,
        lerp(a.green as f32, b.green as f32, t).round() as u8,
        lerp(a.blue as f32, b.blue as f32, t).round() as u8,
    )
}

fn mix_hex(a: &str, b: &str, t: f32) -> Srgb<u8> {
    mix(parse_hex(a), parse_hex(b), t)
}

fn blend(a: &AnchorPalette, b: &AnchorPalette, t: f32) -> ScenePalette {
    ScenePalette {
        primary: mix_hex(a.primary, b.primary, t),
        secondary: mix_hex(a.secondary, b.secondary, t),
        base: mix_hex(a.base, b.base, t),
        up: mix_hex(a.up, b.up, t),
        down: mix_hex(a.down, b.down, t),
        left: mix_hex(a.left, b.left, t),
        right: mix_hex(a.right, b.right, t),
        overlay_opacity: lerp(a.overlay_opacity, b.overlay_opacity, t),
    }
}

/// Find the schedule segment containing `hour`: the last entry whose hour
/// is <= `hour` and its successor, wrapping across midnight.
///
/// Expects `hour` already normalized into [0, 24).
fn segment(hour: f32) -> (&'static AnchorEntry, &'static AnchorEntry) {
    let mut current = &SCHEDULE[SCHEDULE.len() - 1];
    let mut next = &SCHEDULE[0];

    for (i, entry) in SCHEDULE.iter().enumerate() {
        if hour >= entry.hour {
            current = entry;
            next = &SCHEDULE[(i + 1) % SCHEDULE.len()];
        }
    }

    (current, next)
}

fn normalize_hour(hour: f32) -> f32 {
    hour.rem_euclid(24.0)
}

/// Resolve an hour of day to a fully blended palette.
///
/// Input may be any finite value; it is interpreted cyclically, so
/// `resolve(25.0)` equals `resolve(1.0)` and `resolve(-1.0)` equals
/// `resolve(23.0)`. Pure function of the fixed schedule.
pub fn resolve(hour: f32) -> ScenePalette {
    let hour = normalize_hour(hour);
    let (current, next) = segment(hour);

    let mut duration = next.hour - current.hour;
    if duration <= 0.0 {
        duration += 24.0;
    }

    let mut elapsed = hour - current.hour;
    if elapsed < 0.0 {
        elapsed += 24.0;
    }

    let t = smoothstep(elapsed / duration);
    blend(current.palette, next.palette, t)
}

/// Name of the schedule anchor governing `hour`, for display.
pub fn time_of_day(hour: f32) -> &'static str {
    segment(normalize_hour(hour)).0.name
}

#[cfg(test)]
mod tests {
    use super::super::anchors;
    use super::*;

    fn parsed(anchor: &AnchorPalette) -> ScenePalette {
        blend(anchor, anchor, 0.0)
    }

    #[test]
    fn test_smoothstep_endpoints() {
        assert_eq!(smoothstep(0.0), 0.0);
        assert_eq!(smoothstep(1.0), 1.0);
        assert!((smoothstep(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_anchor_exact_at_segment_start() {
        // At an anchor hour t = 0, so the output is the anchor itself.
        assert_eq!(resolve(11.0), parsed(&anchors::MIDDAY));
        assert_eq!(resolve(0.0), parsed(&anchors::DEEP_NIGHT));
        assert_eq!(resolve(17.0), parsed(&anchors::GOLDEN_HOUR));
    }

    #[test]
    fn test_approaches_next_anchor() {
        // Just before the morning anchor the blend has nearly reached it.
        let near = resolve(8.0 - 0.001);
        let morning = parsed(&anchors::MORNING);
        assert!((near.base.red as i16 - morning.base.red as i16).abs() <= 1);
        assert!((near.base.green as i16 - morning.base.green as i16).abs() <= 1);
        assert!((near.base.blue as i16 - morning.base.blue as i16).abs() <= 1);
    }

    #[test]
    fn test_cyclic_closure() {
        assert_eq!(resolve(0.0), resolve(24.0));
    }

    #[test]
    fn test_boundary_continuity() {
        // Sampling either side of every anchor must not jump: smoothstep
        // has zero slope at segment ends.
        let channels = |p: ScenePalette| {
            [
                p.primary, p.secondary, p.base, p.up, p.down, p.left, p.right,
            ]
        };

        for entry in &SCHEDULE {
            let before = channels(resolve(entry.hour - 0.001));
            let after = channels(resolve(entry.hour + 0.001));
            for (a, b) in before.iter().zip(after.iter()) {
                assert!((a.red as i16 - b.red as i16).abs() <= 1);
                assert!((a.green as i16 - b.green as i16).abs() <= 1);
                assert!((a.blue as i16 - b.blue as i16).abs() <= 1);
            }
        }
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(resolve(9.37), resolve(9.37));
        assert_eq!(resolve(21.9), resolve(21.9));
    }

    #[test]
    fn test_overlay_opacity_between_dawn_and_sunrise() {
        // Partway through the dawn segment (5.5 - 6.5) the overlay sits
        // strictly between the dawn and sunrise anchor values.
        let opacity = resolve(5.75).overlay_opacity;
        assert!(opacity > 0.12 && opacity < 0.18);

        // Midpoint of the segment blends halfway.
        assert!((resolve(6.0).overlay_opacity - 0.15).abs() < 1e-4);
    }

    #[test]
    fn test_overlay_opacity_extremes_differ() {
        let midday = resolve(11.0).overlay_opacity;
        let night = resolve(0.0).overlay_opacity;
        assert!((midday - 0.32).abs() < 1e-6);
        assert!((night - 0.03).abs() < 1e-6);
    }

    #[test]
    fn test_time_of_day_labels() {
        assert_eq!(time_of_day(9.0), "morning");
        assert_eq!(time_of_day(0.5), "deepNight");
        assert_eq!(time_of_day(17.2), "goldenHour");
        assert_eq!(time_of_day(23.5), "deepNight");
        assert_eq!(time_of_day(4.0), "blueHour");
    }

    #[test]
    fn test_out_of_range_hours_normalize() {
        assert_eq!(resolve(25.0), resolve(1.0));
        assert_eq!(resolve(-1.0), resolve(23.0));
        assert_eq!(resolve(100.0), resolve(4.0));
        assert_eq!(time_of_day(-50.0), time_of_day(22.0));
    }

    #[test]
    fn test_midnight_wrap_is_flat() {
        // Both ends of the wrap segment are deepNight, so every point in
        // 23..24 resolves to deepNight exactly.
        let night = parsed(&anchors::DEEP_NIGHT);
        assert_eq!(resolve(23.2), night);
        assert_eq!(resolve(23.9), night);
    }

    #[test]
    fn test_malformed_hex_degrades_to_black() {
        assert_eq!(parse_hex("not-a-color"), Srgb::new(0, 0, 0));
        assert_eq!(parse_hex("#zzzzzz"), Srgb::new(0, 0, 0));
        assert_eq!(parse_hex(""), Srgb::new(0, 0, 0));
        // Well-formed input still parses.
        assert_eq!(parse_hex("#263040"), Srgb::new(0x26, 0x30, 0x40));
    }

    #[test]
    fn test_mix_rounds_channels() {
        let a = Srgb::new(0, 0, 0);
        let b = Srgb::new(255, 10, 1);
        assert_eq!(mix(a, b, 0.5), Srgb::new(128, 5, 1));
        assert_eq!(mix(a, b, 0.0), a);
        assert_eq!(mix(a, b, 1.0), b);
    }
}
