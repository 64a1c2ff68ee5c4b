use ratatui::prelude::{Line, Span};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style, Stylize},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};

use crate::{
    domain::summarize_by_category,
    format::{format_date_label, format_duration, format_start_time},
    ring,
};

use super::{App, view_style};

impl App {
    pub(super) fn draw_frame(&mut self, f: &mut Frame) {
        let size = f.size();

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(size);

        self.draw_ring_panel(f, columns[0]);
        self.draw_day_panel(f, columns[1]);

        if self.state.add_dialog_open {
            self.render_add_dialog(f, size);
        } else if self.state.delete_target_id.is_some() {
            self.render_delete_confirm(f, size);
        }
    }

    fn draw_ring_panel(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(
                Line::from(Span::styled(
                    format_date_label(&self.state.selected_date),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Center),
            );

        let inner_width = area.width.saturating_sub(2);
        let inner_height = area.height.saturating_sub(2);
        let lines = ring::render_ring(&self.selected_day_activities(), inner_width, inner_height);

        f.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn draw_day_panel(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let activities = self.selected_day_activities();
        let summary = summarize_by_category(&activities);
        let summary_height = summary.len() as u16 + 2;

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(4),
                Constraint::Length(summary_height),
                Constraint::Length(1),
            ])
            .split(area);

        let items: Vec<ListItem> = if activities.is_empty() {
            vec![ListItem::new(Line::from(
                Span::raw("(no activities)").fg(Color::DarkGray),
            ))]
        } else {
            activities
                .iter()
                .enumerate()
                .map(|(i, activity)| {
                    let color = view_style::category_color(&activity.color);
                    let line = Line::from(vec![
                        Span::raw("● ").fg(color),
                        Span::raw(format_start_time(activity.start_hour, activity.start_minute)),
                        Span::raw(format!(
                            "  {:>6}  ",
                            format_duration(activity.duration_minutes)
                        )),
                        Span::raw(activity.name.clone()),
                    ]);

                    if i == self.list_index {
                        let text_color = view_style::text_color_for_bg(color);
                        ListItem::new(line).style(Style::default().fg(text_color).bg(color))
                    } else {
                        ListItem::new(line)
                    }
                })
                .collect()
        };

        let mut list_state = ListState::default();
        list_state.select(Some(self.list_index));

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title("Activities"),
        );
        f.render_stateful_widget(list, rows[0], &mut list_state);

        let summary_lines: Vec<Line> = summary
            .iter()
            .map(|entry| {
                let color = activities
                    .iter()
                    .find(|a| a.name == entry.name)
                    .map(|a| view_style::category_color(&a.color))
                    .unwrap_or(Color::Gray);
                Line::from(vec![
                    Span::raw("● ").fg(color),
                    Span::raw(format!(
                        "{:12} {:>6}  {:>5.1}%",
                        entry.name,
                        format_duration(entry.duration_minutes),
                        entry.percent,
                    )),
                ])
            })
            .collect();

        let summary_widget = Paragraph::new(summary_lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title("Totals"),
        );
        f.render_widget(summary_widget, rows[1]);

        let footer = Line::from(Span::styled(
            "←/→ day  t today  a add  1-6 quick add  ↑/↓ select  x delete  q quit",
            Style::default().fg(Color::DarkGray),
        ));
        f.render_widget(Paragraph::new(footer), rows[2]);
    }
}
