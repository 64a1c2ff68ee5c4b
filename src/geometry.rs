use crate::constants::DAY_MINUTES;

pub fn to_minutes(hour: u32, minute: u32) -> u32 {
    hour * 60 + minute
}

/// Degrees for a time of day, with midnight at the 12-o'clock position.
pub fn start_angle(hour: u32, minute: u32) -> f64 {
    (to_minutes(hour, minute) as f64 / DAY_MINUTES as f64) * 360.0 - 90.0
}

pub fn sweep_angle(duration_minutes: u32) -> f64 {
    (duration_minutes as f64 / DAY_MINUTES as f64) * 360.0
}

/// SVG path for a filled circular sector.
///
/// A sweep of at least a full turn is drawn as two complementary 180°
/// arcs; a single 360° arc has coincident endpoints and renders as
/// nothing in SVG.
pub fn wedge_path(cx: f64, cy: f64, radius: f64, start_angle: f64, sweep_angle: f64) -> String {
    if sweep_angle <= 0.0 {
        return String::new();
    }

    if sweep_angle >= 360.0 {
        return format!(
            "M {} {} A {} {} 0 1 1 {} {} A {} {} 0 1 1 {} {} Z",
            cx,
            cy - radius,
            radius,
            radius,
            cx,
            cy + radius,
            radius,
            radius,
            cx,
            cy - radius,
        );
    }

    let start_rad = start_angle.to_radians();
    let end_rad = (start_angle + sweep_angle).to_radians();

    let x1 = cx + radius * start_rad.cos();
    let y1 = cy + radius * start_rad.sin();
    let x2 = cx + radius * end_rad.cos();
    let y2 = cy + radius * end_rad.sin();

    let large_arc_flag = if sweep_angle > 180.0 { 1 } else { 0 };

    format!(
        "M {} {} L {:.2} {:.2} A {} {} 0 {} 1 {:.2} {:.2} Z",
        cx, cy, x1, y1, radius, radius, large_arc_flag, x2, y2,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_minutes() {
        assert_eq!(to_minutes(0, 0), 0);
        assert_eq!(to_minutes(13, 30), 810);
        assert_eq!(to_minutes(23, 59), 1439);
    }

    #[test]
    fn test_start_angle_midnight_is_top() {
        assert_eq!(start_angle(0, 0), -90.0);
    }

    #[test]
    fn test_start_angle_afternoon() {
        assert_eq!(start_angle(13, 30), 112.5);
        assert_eq!(start_angle(6, 0), 0.0);
        assert_eq!(start_angle(12, 0), 90.0);
    }

    #[test]
    fn test_sweep_angle_is_proportional() {
        assert_eq!(sweep_angle(420), 105.0);
        assert_eq!(sweep_angle(60), 15.0);
        assert_eq!(sweep_angle(1440), 360.0);
    }

    #[test]
    fn test_wedge_path_zero_sweep_is_empty() {
        assert_eq!(wedge_path(100.0, 100.0, 90.0, -90.0, 0.0), "");
        assert_eq!(wedge_path(100.0, 100.0, 90.0, -90.0, -5.0), "");
    }

    #[test]
    fn test_wedge_path_full_circle_uses_two_arcs() {
        let path = wedge_path(100.0, 100.0, 90.0, -90.0, 360.0);
        assert_eq!(path.matches("A ").count(), 2);
        assert!(path.starts_with("M 100 10"));
        assert!(path.ends_with('Z'));
    }

    #[test]
    fn test_wedge_path_small_sector_shape() {
        let path = wedge_path(100.0, 100.0, 90.0, -90.0, 90.0);
        assert!(path.starts_with("M 100 100 L "));
        assert!(path.contains(" A 90 90 0 0 1 "));
        assert!(path.ends_with('Z'));
    }

    #[test]
    fn test_wedge_path_large_arc_flag() {
        let over_half = wedge_path(100.0, 100.0, 90.0, -90.0, 200.0);
        assert!(over_half.contains(" A 90 90 0 1 1 "));

        let exactly_half = wedge_path(100.0, 100.0, 90.0, -90.0, 180.0);
        assert!(exactly_half.contains(" A 90 90 0 0 1 "));
    }

    #[test]
    fn test_wedge_path_endpoints_on_circle() {
        // Quarter wedge from midnight: arc start at the top of the circle,
        // arc end at 3 o'clock on the right.
        let path = wedge_path(100.0, 100.0, 90.0, -90.0, 90.0);
        assert!(path.contains("L 100.00 10.00"));
        assert!(path.contains("1 190.00 100.00"));
    }
}
