//! Responsive layout for the decorative margins.
//!
//! Guide spacing is a pure function of the terminal size, recomputed on
//! every resize. Narrow terminals get a compact treatment that keeps the
//! margins from swallowing the content area.

use ratatui::layout::{Position, Rect};

/// Below this many columns the compact spacing rules apply
pub const COMPACT_WIDTH: u16 = 90;

/// Margins between the screen edge and the guide lines, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GuideSpacing {
    /// Rows from the top and bottom edges
    pub horizontal: u16,
    /// Columns from the left and right edges
    pub vertical: u16,
}

impl GuideSpacing {
    /// Compute spacing for a terminal of the given size. Returns the
    /// spacing and whether the compact rules were used.
    pub fn for_size(width: u16, height: u16) -> (GuideSpacing, bool) {
        let compact = width < COMPACT_WIDTH;

        let (horizontal, vertical) = if compact {
            (
                clamp_cells(height as f32 * 0.15, 2, 5),
                clamp_cells(width as f32 * 0.10, 4, 10),
            )
        } else {
            (
                clamp_cells(height as f32 * 0.25, 4, 9),
                clamp_cells(width as f32 * 0.15, 10, 36),
            )
        };

        (GuideSpacing { horizontal, vertical }, compact)
    }
}

fn clamp_cells(value: f32, min: u16, max: u16) -> u16 {
    (value.round() as u16).clamp(min, max)
}

/// The eight pointer-reactive regions between the guides and the screen
/// edge: four corners, the top/bottom strips, and the left/right strips.
pub fn margin_zones(area: Rect, spacing: GuideSpacing) -> [Rect; 8] {
    let h = spacing.horizontal.min(area.height / 2);
    let v = spacing.vertical.min(area.width / 2);

    let mid_width = area.width.saturating_sub(v * 2);
    let mid_height = area.height.saturating_sub(h * 2);
    let right_x = area.x + area.width.saturating_sub(v);
    let bottom_y = area.y + area.height.saturating_sub(h);

    [
        Rect::new(area.x, area.y, v, h),
        Rect::new(area.x + v, area.y, mid_width, h),
        Rect::new(right_x, area.y, v, h),
        Rect::new(area.x, area.y + h, v, mid_height),
        Rect::new(right_x, area.y + h, v, mid_height),
        Rect::new(area.x, bottom_y, v, h),
        Rect::new(area.x + v, bottom_y, mid_width, h),
        Rect::new(right_x, bottom_y, v, h),
    ]
}

/// Index of the zone containing the given cell, if any.
pub fn zone_at(zones: &[Rect], x: u16, y: u16) -> Option<usize> {
    zones
        .iter()
        .position(|zone| zone.contains(Position { x, y }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_spacing() {
        let (spacing, compact) = GuideSpacing::for_size(120, 40);
        assert!(!compact);
        // 25% of 40 rows clamps to the 9-row cap.
        assert_eq!(spacing.horizontal, 9);
        // 15% of 120 columns.
        assert_eq!(spacing.vertical, 18);
    }

    #[test]
    fn test_compact_spacing() {
        let (spacing, compact) = GuideSpacing::for_size(80, 24);
        assert!(compact);
        assert_eq!(spacing.horizontal, 4);
        assert_eq!(spacing.vertical, 8);
    }

    #[test]
    fn test_spacing_clamps_on_extremes() {
        let (tiny, _) = GuideSpacing::for_size(20, 6);
        assert_eq!(tiny.horizontal, 2);
        assert_eq!(tiny.vertical, 4);

        let (huge, _) = GuideSpacing::for_size(500, 200);
        assert_eq!(huge.horizontal, 9);
        assert_eq!(huge.vertical, 36);
    }

    #[test]
    fn test_spacing_grows_with_size() {
        let (small, _) = GuideSpacing::for_size(100, 28);
        let (large, _) = GuideSpacing::for_size(160, 34);
        assert!(large.horizontal >= small.horizontal);
        assert!(large.vertical >= small.vertical);
    }

    #[test]
    fn test_zones_tile_the_margins() {
        let area = Rect::new(0, 0, 120, 40);
        let (spacing, _) = GuideSpacing::for_size(120, 40);
        let zones = margin_zones(area, spacing);

        // Zones cover exactly the area minus the central content rect.
        let zone_area: u32 = zones.iter().map(|z| z.area()).sum();
        let content = (120 - 2 * spacing.vertical) as u32 * (40 - 2 * spacing.horizontal) as u32;
        assert_eq!(zone_area, 120 * 40 - content);

        // No two zones overlap.
        for (i, a) in zones.iter().enumerate() {
            for b in zones.iter().skip(i + 1) {
                assert!(!a.intersects(*b));
            }
        }
    }

    #[test]
    fn test_zone_hit_testing() {
        let area = Rect::new(0, 0, 120, 40);
        let (spacing, _) = GuideSpacing::for_size(120, 40);
        let zones = margin_zones(area, spacing);

        // Top-left corner.
        assert_eq!(zone_at(&zones, 0, 0), Some(0));
        // Center of the screen belongs to no zone.
        assert_eq!(zone_at(&zones, 60, 20), None);
        // Bottom edge strip.
        assert_eq!(zone_at(&zones, 60, 39), Some(6));
    }

    #[test]
    fn test_zones_survive_tiny_area() {
        let area = Rect::new(0, 0, 4, 2);
        let (spacing, _) = GuideSpacing::for_size(4, 2);
        // Must not panic or underflow.
        let zones = margin_zones(area, spacing);
        assert_eq!(zones.len(), 8);
    }
}
