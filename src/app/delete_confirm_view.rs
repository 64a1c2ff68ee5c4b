use ratatui::prelude::{Line, Span};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::format::{format_duration, format_start_time};

use super::{App, view_style};

impl App {
    pub(super) fn render_delete_confirm(&self, f: &mut Frame, terminal_size: Rect) {
        let modal_rect = self.modal_rect(terminal_size, 40, 6);

        let target_line = match self.delete_target() {
            Some(activity) => Line::from(vec![
                Span::raw("● ").fg(view_style::category_color(&activity.color)),
                Span::raw(format!(
                    "{} {} ({})",
                    format_start_time(activity.start_hour, activity.start_minute),
                    activity.name,
                    format_duration(activity.duration_minutes),
                )),
            ]),
            None => Line::from(Span::raw("(activity no longer exists)").fg(Color::DarkGray)),
        };

        let lines = vec![
            target_line,
            Line::from(""),
            Line::from(Span::styled(
                "y: delete   n: keep",
                Style::default().fg(Color::Red),
            )),
        ];

        let dialog = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(Line::from(Span::styled(
                    "Delete activity?",
                    Style::default().fg(Color::White),
                )))
                .title_alignment(ratatui::layout::Alignment::Center),
        );

        f.render_widget(Clear, modal_rect);
        f.render_widget(dialog, modal_rect);
    }
}
