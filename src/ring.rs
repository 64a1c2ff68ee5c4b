use std::collections::HashMap;

use ratatui::{
    prelude::{Line, Span},
    style::{Color, Stylize},
};

use crate::{
    constants::RING_SETTINGS,
    domain::Activity,
    geometry::{start_angle, sweep_angle},
};

const EMPTY_RING_RGB: (u8, u8, u8) = (75, 85, 99);

/// Parses a `#RRGGBB` category color; anything else renders white.
pub fn hex_to_color(hex: &str) -> Color {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return Color::White;
    }

    let parse = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    match (parse(0..2), parse(2..4), parse(4..6)) {
        (Some(r), Some(g), Some(b)) => Color::Rgb(r, g, b),
        _ => Color::White,
    }
}

/// True when `angle_deg` lies inside the wedge starting at `start_deg`
/// spanning `sweep_deg` clockwise. Handles wedges that wrap past
/// midnight.
fn covers(start_deg: f64, sweep_deg: f64, angle_deg: f64) -> bool {
    if sweep_deg <= 0.0 {
        return false;
    }
    if sweep_deg >= 360.0 {
        return true;
    }
    (angle_deg - start_deg).rem_euclid(360.0) < sweep_deg
}

/// Color of the day ring at one angle: the last activity in the list
/// covering it wins, matching wedge paint order in the SVG chart.
fn color_at(activities: &[Activity], angle_deg: f64) -> Option<(u8, u8, u8)> {
    activities
        .iter()
        .rev()
        .find(|a| {
            covers(
                start_angle(a.start_hour, a.start_minute),
                sweep_angle(a.duration_minutes),
                angle_deg,
            )
        })
        .map(|a| match hex_to_color(&a.color) {
            Color::Rgb(r, g, b) => (r, g, b),
            _ => (255, 255, 255),
        })
}

/// Renders the 24-hour ring into braille cells, midnight at the top,
/// time advancing clockwise. One braille cell holds a 2x4 dot patch;
/// a cell's color blends the activities its lit dots belong to.
pub fn render_ring(activities: &[Activity], cell_width: u16, cell_height: u16) -> Vec<Line<'static>> {
    let grid_w = cell_width as usize * RING_SETTINGS.dot_width;
    let grid_h = cell_height as usize * RING_SETTINGS.dot_height;
    let cx = grid_w as f64 / 2.0;
    let cy = grid_h as f64 / 2.0;
    let outer = (grid_w.min(grid_h) as f64 / 2.0) - 1.0;
    let inner = outer * RING_SETTINGS.inner_radius_ratio;

    let mut lines: Vec<Line<'static>> = Vec::with_capacity(cell_height as usize);

    for cell_y in 0..cell_height as usize {
        let mut spans: Vec<Span<'static>> = Vec::with_capacity(cell_width as usize);

        for cell_x in 0..cell_width as usize {
            let mut dots = 0u8;
            let mut counts: HashMap<(u8, u8, u8), usize> = HashMap::new();

            for dy in 0..RING_SETTINGS.dot_height {
                for dx in 0..RING_SETTINGS.dot_width {
                    let gx = cell_x * RING_SETTINGS.dot_width + dx;
                    let gy = cell_y * RING_SETTINGS.dot_height + dy;

                    let off_x = gx as f64 + 0.5 - cx;
                    let off_y = gy as f64 + 0.5 - cy;
                    let dist = (off_x * off_x + off_y * off_y).sqrt();
                    if dist < inner || dist > outer {
                        continue;
                    }

                    let mut angle = off_y.atan2(off_x).to_degrees();
                    if angle < -90.0 {
                        angle += 360.0;
                    }

                    let dot_index = match (dx, dy) {
                        (0, 0) => 0,
                        (0, 1) => 1,
                        (0, 2) => 2,
                        (0, 3) => 6,
                        (1, 0) => 3,
                        (1, 1) => 4,
                        (1, 2) => 5,
                        (1, 3) => 7,
                        _ => 0,
                    };
                    dots |= 1 << dot_index;

                    let rgb = color_at(activities, angle).unwrap_or(EMPTY_RING_RGB);
                    *counts.entry(rgb).or_insert(0) += 1;
                }
            }

            let total_dots: usize = counts.values().sum();
            let color = if total_dots > 0 {
                let mut blended_r = 0f32;
                let mut blended_g = 0f32;
                let mut blended_b = 0f32;

                for ((r, g, b), count) in &counts {
                    let weight = *count as f32 / total_dots as f32;
                    blended_r += *r as f32 * weight;
                    blended_g += *g as f32 * weight;
                    blended_b += *b as f32 * weight;
                }

                Color::Rgb(blended_r as u8, blended_g as u8, blended_b as u8)
            } else {
                Color::Reset
            };

            let ch = char::from_u32(RING_SETTINGS.braille_base + dots as u32).unwrap_or(' ');
            spans.push(Span::raw(ch.to_string()).fg(color));
        }

        lines.push(Line::from(spans));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(color: &str, start_hour: u32, duration_minutes: u32) -> Activity {
        Activity {
            id: format!("id-{}", start_hour),
            name: "Work".to_string(),
            start_hour,
            start_minute: 0,
            duration_minutes,
            color: color.to_string(),
            date: "2026-08-29".to_string(),
        }
    }

    #[test]
    fn test_hex_to_color() {
        assert_eq!(hex_to_color("#EF4444"), Color::Rgb(0xEF, 0x44, 0x44));
        assert_eq!(hex_to_color("#000000"), Color::Rgb(0, 0, 0));
        assert_eq!(hex_to_color("red"), Color::White);
        assert_eq!(hex_to_color("#12"), Color::White);
        assert_eq!(hex_to_color("#GGGGGG"), Color::White);
    }

    #[test]
    fn test_covers_simple_wedge() {
        // 06:00 for seven hours: 0 deg through 105 deg.
        assert!(covers(0.0, 105.0, 0.0));
        assert!(covers(0.0, 105.0, 104.9));
        assert!(!covers(0.0, 105.0, 105.0));
        assert!(!covers(0.0, 105.0, -1.0));
    }

    #[test]
    fn test_covers_wraps_past_midnight() {
        // 23:00 for two hours crosses the top of the ring.
        let start = start_angle(23, 0);
        let sweep = sweep_angle(120);
        assert!(covers(start, sweep, 260.0));
        assert!(covers(start, sweep, -90.0));
        assert!(covers(start, sweep, -75.1));
        assert!(!covers(start, sweep, -74.0));
    }

    #[test]
    fn test_covers_degenerate_sweeps() {
        assert!(!covers(0.0, 0.0, 0.0));
        assert!(covers(0.0, 360.0, 123.4));
    }

    #[test]
    fn test_color_at_last_overlap_wins() {
        let activities = vec![activity("#3B82F6", 0, 1440), activity("#EF4444", 6, 360)];
        // 06:00..12:00 is covered by both; the later activity wins.
        assert_eq!(color_at(&activities, 10.0), Some((0xEF, 0x44, 0x44)));
        // 03:00 only by the first.
        assert_eq!(color_at(&activities, -45.0), Some((0x3B, 0x82, 0xF6)));
    }

    #[test]
    fn test_render_ring_dimensions() {
        let lines = render_ring(&[], 20, 10);
        assert_eq!(lines.len(), 10);
        assert!(lines.iter().all(|line| line.spans.len() == 20));
    }

    #[test]
    fn test_render_ring_full_day_uses_activity_color() {
        let activities = vec![activity("#EF4444", 0, 1440)];
        let lines = render_ring(&activities, 20, 10);

        let has_activity_color = lines.iter().any(|line| {
            line.spans
                .iter()
                .any(|span| span.style.fg == Some(Color::Rgb(0xEF, 0x44, 0x44)))
        });
        assert!(has_activity_color);
    }

    #[test]
    fn test_render_ring_empty_day_is_gray() {
        let lines = render_ring(&[], 20, 10);
        let (r, g, b) = EMPTY_RING_RGB;

        let has_ring = lines.iter().any(|line| {
            line.spans
                .iter()
                .any(|span| span.style.fg == Some(Color::Rgb(r, g, b)))
        });
        assert!(has_ring);
    }
}
