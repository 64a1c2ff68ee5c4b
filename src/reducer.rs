use crate::domain::{Activity, ActivityDraft};

/// The whole application state. Owned by the reducer alone; every other
/// component receives it by reference and returns derived views.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub activities: Vec<Activity>,
    pub selected_date: String,
    pub add_dialog_open: bool,
    pub add_draft: ActivityDraft,
    pub delete_target_id: Option<String>,
}

impl State {
    pub fn initial(today_iso: impl Into<String>, activities: Vec<Activity>) -> Self {
        Self {
            activities,
            selected_date: today_iso.into(),
            add_dialog_open: false,
            add_draft: ActivityDraft::default(),
            delete_target_id: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Category,
    StartHour,
    StartMinute,
    DurationMinutes,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    OpenAddDialog { category_id: Option<String> },
    CloseAddDialog,
    UpdateDraft { field: DraftField, value: String },
    AddActivity(Activity),
    RequestDelete { id: String },
    CancelDelete,
    ConfirmDelete,
    SetDate { date: String },
    ReplaceActivities(Vec<Activity>),
}

/// Pure state transition. No I/O happens here; persistence reacts to
/// committed states elsewhere.
pub fn reduce(state: &State, action: Action) -> State {
    match action {
        Action::OpenAddDialog { category_id } => State {
            add_dialog_open: true,
            add_draft: ActivityDraft::empty_with_category(category_id.unwrap_or_default()),
            ..state.clone()
        },
        Action::CloseAddDialog => State {
            add_dialog_open: false,
            add_draft: ActivityDraft::default(),
            ..state.clone()
        },
        Action::UpdateDraft { field, value } => {
            let mut add_draft = state.add_draft.clone();
            match field {
                DraftField::Category => add_draft.category_id = value,
                DraftField::StartHour => add_draft.start_hour = value,
                DraftField::StartMinute => add_draft.start_minute = value,
                DraftField::DurationMinutes => add_draft.duration_minutes = value,
            }
            State {
                add_draft,
                ..state.clone()
            }
        }
        Action::AddActivity(activity) => {
            let mut activities = state.activities.clone();
            activities.push(activity);
            State {
                activities,
                add_dialog_open: false,
                add_draft: ActivityDraft::default(),
                ..state.clone()
            }
        }
        Action::RequestDelete { id } => State {
            delete_target_id: Some(id),
            ..state.clone()
        },
        Action::CancelDelete => State {
            delete_target_id: None,
            ..state.clone()
        },
        Action::ConfirmDelete => {
            let Some(target_id) = &state.delete_target_id else {
                return state.clone();
            };
            State {
                activities: state
                    .activities
                    .iter()
                    .filter(|a| a.id != *target_id)
                    .cloned()
                    .collect(),
                delete_target_id: None,
                ..state.clone()
            }
        }
        Action::SetDate { date } => State {
            selected_date: date,
            ..state.clone()
        },
        Action::ReplaceActivities(activities) => State {
            activities,
            ..state.clone()
        },
    }
}
