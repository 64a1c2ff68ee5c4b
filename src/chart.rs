use crate::{
    domain::{Activity, summarize_by_category},
    format::{format_date_label, format_duration},
    geometry::{start_angle, sweep_angle, wedge_path},
};

const CHART_SIZE: f64 = 240.0;
const CHART_RADIUS: f64 = 100.0;
const LEGEND_ROW_HEIGHT: f64 = 18.0;
const BACKGROUND_FILL: &str = "#E5E7EB";

/// Renders one day's activities as a standalone SVG document: the day
/// circle with one wedge per activity, a date caption and a legend of
/// per-category totals. Wedges are painted in list order, so overlapping
/// activities layer exactly like they do in the TUI ring.
pub fn render_day_svg(date_iso: &str, activities: &[Activity]) -> String {
    let summary = summarize_by_category(activities);
    let legend_height = 30.0 + summary.len() as f64 * LEGEND_ROW_HEIGHT;
    let width = CHART_SIZE;
    let height = CHART_SIZE + legend_height;
    let cx = CHART_SIZE / 2.0;
    let cy = CHART_SIZE / 2.0;

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\">\n",
        width, height,
    ));

    svg.push_str(&format!(
        "  <path d=\"{}\" fill=\"{}\"/>\n",
        wedge_path(cx, cy, CHART_RADIUS, -90.0, 360.0),
        BACKGROUND_FILL,
    ));

    for activity in activities {
        let path = wedge_path(
            cx,
            cy,
            CHART_RADIUS,
            start_angle(activity.start_hour, activity.start_minute),
            sweep_angle(activity.duration_minutes),
        );
        if path.is_empty() {
            continue;
        }
        svg.push_str(&format!(
            "  <path d=\"{}\" fill=\"{}\" stroke=\"white\" stroke-width=\"1\"/>\n",
            path, activity.color,
        ));
    }

    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-family=\"sans-serif\" font-size=\"12\">{}</text>\n",
        cx,
        CHART_SIZE + 16.0,
        format_date_label(date_iso),
    ));

    for (i, entry) in summary.iter().enumerate() {
        let y = CHART_SIZE + 30.0 + i as f64 * LEGEND_ROW_HEIGHT;
        let color = activities
            .iter()
            .find(|a| a.name == entry.name)
            .map(|a| a.color.as_str())
            .unwrap_or(BACKGROUND_FILL);

        svg.push_str(&format!(
            "  <rect x=\"20\" y=\"{}\" width=\"12\" height=\"12\" fill=\"{}\"/>\n",
            y, color,
        ));
        svg.push_str(&format!(
            "  <text x=\"40\" y=\"{}\" font-family=\"sans-serif\" font-size=\"11\">{} {} ({}%)</text>\n",
            y + 10.0,
            entry.name,
            format_duration(entry.duration_minutes),
            entry.percent,
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(name: &str, color: &str, start_hour: u32, duration_minutes: u32) -> Activity {
        Activity {
            id: format!("id-{}", name),
            name: name.to_string(),
            start_hour,
            start_minute: 0,
            duration_minutes,
            color: color.to_string(),
            date: "2026-08-29".to_string(),
        }
    }

    #[test]
    fn test_empty_day_has_only_background() {
        let svg = render_day_svg("2026-08-29", &[]);
        assert_eq!(svg.matches("<path").count(), 1);
        assert!(svg.contains(BACKGROUND_FILL));
        assert!(svg.contains("2026/08/29"));
    }

    #[test]
    fn test_one_wedge_per_activity() {
        let activities = vec![
            activity("Sleep", "#3B82F6", 0, 420),
            activity("Work", "#EF4444", 9, 480),
        ];
        let svg = render_day_svg("2026-08-29", &activities);

        // Background plus two wedges.
        assert_eq!(svg.matches("<path").count(), 3);
        assert!(svg.contains("fill=\"#3B82F6\""));
        assert!(svg.contains("fill=\"#EF4444\""));
    }

    #[test]
    fn test_legend_lists_summary_rows() {
        let activities = vec![
            activity("Sleep", "#3B82F6", 0, 420),
            activity("Work", "#EF4444", 9, 480),
        ];
        let svg = render_day_svg("2026-08-29", &activities);

        assert!(svg.contains("Work 8:00 (33.3%)"));
        assert!(svg.contains("Sleep 7:00 (29.2%)"));
        assert_eq!(svg.matches("<rect").count(), 2);
    }

    #[test]
    fn test_full_day_activity_renders_two_arc_wedge() {
        let activities = vec![activity("Sleep", "#3B82F6", 0, 1440)];
        let svg = render_day_svg("2026-08-29", &activities);
        // Background and the full-day wedge both use the two-arc form.
        assert_eq!(svg.matches("A 100 100 0 1 1").count(), 4);
    }
}
