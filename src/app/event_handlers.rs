use crossterm::event::{KeyCode, KeyEvent};

use chrono::Local;

use crate::{
    domain,
    format::{format_date_iso, shift_date},
    reducer::{Action, DraftField},
};

use super::{App, ui_helpers};

impl App {
    /// Routes a key press; returns true when the app should quit.
    pub(super) fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.state.add_dialog_open {
            self.handle_dialog_key(key);
            false
        } else if self.state.delete_target_id.is_some() {
            self.handle_confirm_key(key);
            false
        } else {
            self.handle_normal_key(key)
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Left | KeyCode::Char('h') => {
                let date = shift_date(&self.state.selected_date, -1);
                self.dispatch(Action::SetDate { date });
                self.list_index = 0;
            }
            KeyCode::Right | KeyCode::Char('l') => {
                let date = shift_date(&self.state.selected_date, 1);
                self.dispatch(Action::SetDate { date });
                self.list_index = 0;
            }
            KeyCode::Char('t') => {
                let date = format_date_iso(Local::now().date_naive());
                self.dispatch(Action::SetDate { date });
                self.list_index = 0;
            }
            KeyCode::Char('a') => {
                self.open_add_dialog(None);
            }
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                let category_id = self.categories.get(index).map(|cat| cat.id.clone());
                self.category_index = index;
                self.open_add_dialog(category_id);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                let count = self.selected_day_activities().len();
                self.list_index = ui_helpers::wrap_prev_index(self.list_index, count);
                self.render_needed = true;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let count = self.selected_day_activities().len();
                self.list_index = ui_helpers::wrap_next_index(self.list_index, count);
                self.render_needed = true;
            }
            KeyCode::Char('x') => {
                if let Some(activity) = self.selected_activity() {
                    self.dispatch(Action::RequestDelete { id: activity.id });
                }
            }
            _ => {}
        }
        false
    }

    fn open_add_dialog(&mut self, category_id: Option<String>) {
        // Quick-add starts the cursor on the first time field; a blank
        // dialog starts on the category selector.
        self.draft_focus = if category_id.is_some() {
            DraftField::StartHour
        } else {
            self.category_index = 0;
            DraftField::Category
        };
        self.dispatch(Action::OpenAddDialog { category_id });
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.dispatch(Action::CloseAddDialog),
            KeyCode::Up | KeyCode::BackTab => {
                self.draft_focus = ui_helpers::focus_prev(self.draft_focus);
                self.render_needed = true;
            }
            KeyCode::Down | KeyCode::Tab => {
                self.draft_focus = ui_helpers::focus_next(self.draft_focus);
                self.render_needed = true;
            }
            KeyCode::Left => self.cycle_category(-1),
            KeyCode::Right => self.cycle_category(1),
            KeyCode::Char(c @ '0'..='9') => {
                if let Some(field) = self.focused_text_field() {
                    let mut value = self.draft_field_value(field);
                    value.push(c);
                    self.dispatch(Action::UpdateDraft { field, value });
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.focused_text_field() {
                    let mut value = self.draft_field_value(field);
                    value.pop();
                    self.dispatch(Action::UpdateDraft { field, value });
                }
            }
            KeyCode::Enter => {
                if let Some(activity) = domain::create_activity_from_draft(
                    &self.state.add_draft,
                    &self.categories,
                    &self.state.selected_date,
                ) {
                    self.dispatch(Action::AddActivity(activity));
                }
            }
            _ => {}
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => self.dispatch(Action::ConfirmDelete),
            KeyCode::Char('n') | KeyCode::Esc => self.dispatch(Action::CancelDelete),
            _ => {}
        }
        self.clamp_list_index();
    }

    fn cycle_category(&mut self, step: isize) {
        if self.draft_focus != DraftField::Category {
            return;
        }

        let count = self.categories.len();
        self.category_index = if step < 0 {
            ui_helpers::wrap_prev_index(self.category_index, count)
        } else {
            ui_helpers::wrap_next_index(self.category_index, count)
        };

        if let Some(category) = self.categories.get(self.category_index) {
            self.dispatch(Action::UpdateDraft {
                field: DraftField::Category,
                value: category.id.clone(),
            });
        }
    }

    fn focused_text_field(&self) -> Option<DraftField> {
        match self.draft_focus {
            DraftField::Category => None,
            field => Some(field),
        }
    }

    pub(super) fn draft_field_value(&self, field: DraftField) -> String {
        let draft = &self.state.add_draft;
        match field {
            DraftField::Category => draft.category_id.clone(),
            DraftField::StartHour => draft.start_hour.clone(),
            DraftField::StartMinute => draft.start_minute.clone(),
            DraftField::DurationMinutes => draft.duration_minutes.clone(),
        }
    }
}
