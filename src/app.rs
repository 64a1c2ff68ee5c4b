use std::{io, time::Duration};

use chrono::Local;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};

use crate::{
    constants::TIME_SETTINGS,
    domain::{self, Activity, Category},
    format::format_date_iso,
    reducer::{Action, DraftField, State, reduce},
    storage::{self, ActivityStore},
};

mod add_dialog_view;
mod delete_confirm_view;
mod event_handlers;
mod render_views;
mod ui_helpers;
mod view_style;

struct App {
    state: State,
    categories: Vec<Category>,
    store: Option<ActivityStore>,
    list_index: usize,
    draft_focus: DraftField,
    category_index: usize,
    render_needed: bool,
}

impl App {
    fn new() -> Self {
        let store = ActivityStore::open_default();
        let activities = storage::load_activities(store.as_ref());
        let today = format_date_iso(Local::now().date_naive());

        Self {
            state: State::initial(today, activities),
            categories: domain::default_categories(),
            store,
            list_index: 0,
            draft_focus: DraftField::Category,
            category_index: 0,
            render_needed: true,
        }
    }

    /// Runs one action through the reducer and commits the result. The
    /// persistence hook fires here, outside the pure transition: the log
    /// is written only when a transition actually changed it.
    fn dispatch(&mut self, action: Action) {
        let next = reduce(&self.state, action);
        let log_changed = next.activities != self.state.activities;
        self.state = next;

        if log_changed {
            storage::save_activities(self.store.as_ref(), &self.state.activities);
        }
        self.render_needed = true;
    }

    fn selected_day_activities(&self) -> Vec<Activity> {
        domain::activities_for_date(&self.state.activities, &self.state.selected_date)
    }

    fn selected_activity(&self) -> Option<Activity> {
        self.selected_day_activities().into_iter().nth(self.list_index)
    }

    fn delete_target(&self) -> Option<Activity> {
        let target_id = self.state.delete_target_id.as_ref()?;
        self.state
            .activities
            .iter()
            .find(|a| a.id == *target_id)
            .cloned()
    }

    fn clamp_list_index(&mut self) {
        let count = self.selected_day_activities().len();
        if count == 0 {
            self.list_index = 0;
        } else if self.list_index >= count {
            self.list_index = count - 1;
        }
    }

    fn modal_rect(&self, terminal_size: Rect, width: u16, height: u16) -> Rect {
        let max_width = terminal_size.width.saturating_sub(2).max(1);
        let max_height = terminal_size.height.saturating_sub(2).max(1);

        let modal_width = width.clamp(1, max_width);
        let modal_height = height.clamp(1, max_height);

        let modal_x = (terminal_size.width.saturating_sub(modal_width)) / 2;
        let modal_y = (terminal_size.height.saturating_sub(modal_height)) / 2;

        Rect::new(modal_x, modal_y, modal_width, modal_height)
    }
}

pub fn run_ui() -> Result<(), io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let poll_rate = Duration::from_millis(TIME_SETTINGS.poll_ms);

    loop {
        if app.render_needed {
            terminal.draw(|f| {
                app.draw_frame(f);
            })?;
            app.render_needed = false;
        }

        if event::poll(poll_rate)?
            && let Event::Key(key) = event::read()?
            && app.handle_key(key)
        {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
