use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{DAY_MINUTES, DEFAULT_CATEGORIES},
    geometry::to_minutes,
};

/// One logged time block. `name` and `color` are denormalized from the
/// category at creation time; later catalog changes never rewrite
/// history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub name: String,
    pub start_hour: u32,
    pub start_minute: u32,
    pub duration_minutes: u32,
    pub color: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub color: String,
}

/// Unvalidated, string-typed input for a not-yet-created activity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityDraft {
    pub category_id: String,
    pub start_hour: String,
    pub start_minute: String,
    pub duration_minutes: String,
}

impl ActivityDraft {
    pub fn empty_with_category(category_id: impl Into<String>) -> Self {
        Self {
            category_id: category_id.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub name: String,
    pub duration_minutes: u32,
    pub percent: f64,
}

pub fn default_categories() -> Vec<Category> {
    DEFAULT_CATEGORIES
        .iter()
        .map(|def| Category {
            id: def.id.to_string(),
            name: def.name.to_string(),
            color: def.color.to_string(),
        })
        .collect()
}

pub fn category_by_id<'a>(categories: &'a [Category], id: &str) -> Option<&'a Category> {
    categories.iter().find(|c| c.id == id)
}

fn is_digit_string(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

/// True when every draft field can form a valid activity: category set,
/// numeric fields digit-only, hour 0-23, minute 0-59, duration 1-1440.
pub fn validate_draft(draft: &ActivityDraft) -> bool {
    if draft.category_id.is_empty() {
        return false;
    }

    if !is_digit_string(&draft.start_hour)
        || !is_digit_string(&draft.start_minute)
        || !is_digit_string(&draft.duration_minutes)
    {
        return false;
    }

    let (Ok(start_hour), Ok(start_minute), Ok(duration_minutes)) = (
        draft.start_hour.parse::<u32>(),
        draft.start_minute.parse::<u32>(),
        draft.duration_minutes.parse::<u32>(),
    ) else {
        return false;
    };

    start_hour <= 23
        && start_minute <= 59
        && (1..=DAY_MINUTES).contains(&duration_minutes)
}

/// Activities on one date, ascending by start time. The sort is stable,
/// so activities sharing a start time keep their log order.
pub fn activities_for_date(activities: &[Activity], selected_date: &str) -> Vec<Activity> {
    activities
        .iter()
        .filter(|a| a.date == selected_date)
        .cloned()
        .sorted_by_key(|a| to_minutes(a.start_hour, a.start_minute))
        .collect()
}

/// Per-category totals for one day's activities, largest first.
///
/// Grouping is by denormalized name in first-encounter order; the
/// descending sort is stable so equal totals keep that order. Percent is
/// of the whole day, rounded half away from zero to one decimal.
pub fn summarize_by_category(activities: &[Activity]) -> Vec<CategorySummary> {
    let mut totals: Vec<(String, u32)> = Vec::new();

    for activity in activities {
        match totals.iter_mut().find(|(name, _)| *name == activity.name) {
            Some((_, total)) => *total += activity.duration_minutes,
            None => totals.push((activity.name.clone(), activity.duration_minutes)),
        }
    }

    totals
        .into_iter()
        .filter(|(_, total)| *total > 0)
        .map(|(name, duration_minutes)| CategorySummary {
            name,
            duration_minutes,
            percent: ((duration_minutes as f64 / DAY_MINUTES as f64) * 1000.0).round() / 10.0,
        })
        .sorted_by(|a, b| b.duration_minutes.cmp(&a.duration_minutes))
        .collect()
}

/// Builds an activity from a validated draft, or None when the draft is
/// invalid or names an unknown category. Ids are fresh v4 UUIDs.
pub fn create_activity_from_draft(
    draft: &ActivityDraft,
    categories: &[Category],
    date: &str,
) -> Option<Activity> {
    if !validate_draft(draft) {
        return None;
    }

    let category = category_by_id(categories, &draft.category_id)?;

    Some(Activity {
        id: uuid::Uuid::new_v4().to_string(),
        name: category.name.clone(),
        color: category.color.clone(),
        start_hour: draft.start_hour.parse().ok()?,
        start_minute: draft.start_minute.parse().ok()?,
        duration_minutes: draft.duration_minutes.parse().ok()?,
        date: date.to_string(),
    })
}
