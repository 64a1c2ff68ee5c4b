use ratatui::prelude::{Line, Span};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::{domain::validate_draft, reducer::DraftField};

use super::{App, view_style};

impl App {
    pub(super) fn render_add_dialog(&self, f: &mut Frame, terminal_size: Rect) {
        let modal_rect = self.modal_rect(terminal_size, 44, 10);
        let draft = &self.state.add_draft;

        let category_label = self
            .categories
            .iter()
            .find(|c| c.id == draft.category_id)
            .map(|c| c.name.as_str())
            .unwrap_or("(choose with ←/→)");
        let category_color = self
            .categories
            .iter()
            .find(|c| c.id == draft.category_id)
            .map(|c| view_style::category_color(&c.color))
            .unwrap_or(Color::DarkGray);

        let field_line = |label: &str, value: String, field: DraftField| {
            let cursor = if self.draft_focus == field { "_" } else { "" };
            Line::from(vec![
                Span::styled(
                    format!("{:14}", label),
                    view_style::field_style(self.draft_focus == field),
                ),
                Span::raw(format!("{}{}", value, cursor)),
            ])
        };

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("{:14}", "Category"),
                    view_style::field_style(self.draft_focus == DraftField::Category),
                ),
                Span::raw("● ").fg(category_color),
                Span::raw(category_label.to_string()),
            ]),
            field_line("Start hour", draft.start_hour.clone(), DraftField::StartHour),
            field_line(
                "Start minute",
                draft.start_minute.clone(),
                DraftField::StartMinute,
            ),
            field_line(
                "Duration (min)",
                draft.duration_minutes.clone(),
                DraftField::DurationMinutes,
            ),
            Line::from(""),
            if validate_draft(draft) {
                Line::from(Span::styled(
                    "Enter: save   Esc: cancel",
                    Style::default().fg(Color::Green),
                ))
            } else {
                Line::from(Span::styled(
                    "fill all fields to save   Esc: cancel",
                    Style::default().fg(Color::DarkGray),
                ))
            },
        ];

        let dialog = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(Line::from(Span::styled(
                    "New Activity",
                    Style::default().fg(Color::White),
                )))
                .title_alignment(ratatui::layout::Alignment::Center),
        );

        f.render_widget(Clear, modal_rect);
        f.render_widget(dialog, modal_rect);
    }
}
