//! Anchor palettes and the daily schedule.
//!
//! Eleven named palettes cover the lighting moods of a day. The schedule
//! places them on the 24-hour cycle; "deepNight" anchors both ends so the
//! cycle is continuous across midnight.

/// One named palette, stored as hex color strings.
///
/// Channels are parsed at interpolation time; a malformed string degrades
/// to black rather than failing (see `interpolate`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorPalette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub base: &'static str,
    pub up: &'static str,
    pub down: &'static str,
    pub left: &'static str,
    pub right: &'static str,
    pub overlay_opacity: f32,
}

/// A point on the daily cycle: an hour in [0, 24) and the palette that
/// anchors it.
#[derive(Debug, Clone, Copy)]
pub struct AnchorEntry {
    pub hour: f32,
    pub name: &'static str,
    pub palette: &'static AnchorPalette,
}

pub const DEEP_NIGHT: AnchorPalette = AnchorPalette {
    primary: "#020306",
    secondary: "#06090f",
    base: "#080c14",
    up: "#050810",
    down: "#010203",
    left: "#04060a",
    right: "#030408",
    overlay_opacity: 0.03,
};

pub const BLUE_HOUR: AnchorPalette = AnchorPalette {
    primary: "#04050c",
    secondary: "#0a0c1a",
    base: "#101428",
    up: "#0c1020",
    down: "#020308",
    left: "#080a14",
    right: "#06080e",
    overlay_opacity: 0.06,
};

pub const DAWN: AnchorPalette = AnchorPalette {
    primary: "#0c0608",
    secondary: "#1a0e12",
    base: "#2a161c",
    up: "#201018",
    down: "#060306",
    left: "#140a0e",
    right: "#0e060a",
    overlay_opacity: 0.12,
};

pub const SUNRISE: AnchorPalette = AnchorPalette {
    primary: "#140a06",
    secondary: "#2a180e",
    base: "#3a2214",
    up: "#2e1a10",
    down: "#0a0604",
    left: "#1e100a",
    right: "#140c08",
    overlay_opacity: 0.18,
};

pub const MORNING: AnchorPalette = AnchorPalette {
    primary: "#0a0c10",
    secondary: "#161c24",
    base: "#202a38",
    up: "#1a222e",
    down: "#060708",
    left: "#101418",
    right: "#0c0e12",
    overlay_opacity: 0.25,
};

pub const MIDDAY: AnchorPalette = AnchorPalette {
    primary: "#0c1014",
    secondary: "#1a2028",
    base: "#263040",
    up: "#202838",
    down: "#06080a",
    left: "#14181e",
    right: "#0e1216",
    overlay_opacity: 0.32,
};

pub const AFTERNOON: AnchorPalette = AnchorPalette {
    primary: "#100e0c",
    secondary: "#221e1a",
    base: "#302a24",
    up: "#28221e",
    down: "#080706",
    left: "#181614",
    right: "#100e0c",
    overlay_opacity: 0.28,
};

pub const GOLDEN_HOUR: AnchorPalette = AnchorPalette {
    primary: "#140a04",
    secondary: "#2c1608",
    base: "#3e200c",
    up: "#321a0a",
    down: "#0a0602",
    left: "#1e0e06",
    right: "#140a04",
    overlay_opacity: 0.22,
};

pub const SUNSET: AnchorPalette = AnchorPalette {
    primary: "#120408",
    secondary: "#280a12",
    base: "#3a0e18",
    up: "#2e0c14",
    down: "#080206",
    left: "#1a060c",
    right: "#100408",
    overlay_opacity: 0.16,
};

pub const DUSK: AnchorPalette = AnchorPalette {
    primary: "#0a0610",
    secondary: "#160e22",
    base: "#201432",
    up: "#1a1028",
    down: "#04030a",
    left: "#0e0a18",
    right: "#080610",
    overlay_opacity: 0.10,
};

pub const EVENING: AnchorPalette = AnchorPalette {
    primary: "#060508",
    secondary: "#0c0a14",
    base: "#12101e",
    up: "#0e0c18",
    down: "#030306",
    left: "#08080e",
    right: "#06060a",
    overlay_opacity: 0.05,
};

/// The daily anchor schedule, strictly increasing in hour.
///
/// The entry after the last wraps to the first; both reference
/// "deepNight" so the midnight seam blends into itself.
pub const SCHEDULE: [AnchorEntry; 12] = [
    AnchorEntry { hour: 0.0, name: "deepNight", palette: &DEEP_NIGHT },
    AnchorEntry { hour: 4.0, name: "blueHour", palette: &BLUE_HOUR },
    AnchorEntry { hour: 5.5, name: "dawn", palette: &DAWN },
    AnchorEntry { hour: 6.5, name: "sunrise", palette: &SUNRISE },
    AnchorEntry { hour: 8.0, name: "morning", palette: &MORNING },
    AnchorEntry { hour: 11.0, name: "midday", palette: &MIDDAY },
    AnchorEntry { hour: 14.0, name: "afternoon", palette: &AFTERNOON },
    AnchorEntry { hour: 17.0, name: "goldenHour", palette: &GOLDEN_HOUR },
    AnchorEntry { hour: 18.5, name: "sunset", palette: &SUNSET },
    AnchorEntry { hour: 20.0, name: "dusk", palette: &DUSK },
    AnchorEntry { hour: 21.5, name: "evening", palette: &EVENING },
    AnchorEntry { hour: 23.0, name: "deepNight", palette: &DEEP_NIGHT },
];
