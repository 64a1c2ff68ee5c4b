use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use thiserror::Error;

use crate::{constants::ACTIVITIES_KEY, domain::Activity};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not access store: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not serialize payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// On-disk key-value store: one JSON file per logical key inside a data
/// directory. The whole adapter is failure-tolerant; a broken or absent
/// store degrades the app to memory-only operation, never to a crash.
pub struct ActivityStore {
    dir: PathBuf,
}

impl ActivityStore {
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store in the platform data directory, or next to the binary when a
    /// local slot file already exists. None when no usable directory can
    /// be resolved; callers then run memory-only.
    pub fn open_default() -> Option<Self> {
        let local_slot = Path::new("./activities.json");
        if local_slot.exists() {
            return Some(Self::at("."));
        }

        let proj_dirs = ProjectDirs::from("com", "dayring", "dayring")?;
        let data_dir = proj_dirs.data_dir().to_path_buf();
        fs::create_dir_all(&data_dir).ok()?;
        Some(Self::at(data_dir))
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    pub fn read_slot(&self, key: &str) -> Option<String> {
        let path = self.slot_path(key);
        match fs::read_to_string(&path) {
            Ok(raw) => Some(raw),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                eprintln!("Warning: Could not read {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn write_slot(&self, key: &str, payload: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key);
        let tmp_path = path.with_extension("tmp");
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(payload.as_bytes())?;
        tmp_file.sync_all()?;
        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}

/// Loads the activity log. Any top-level problem (no store, missing
/// slot, unparseable payload, non-array payload) yields an empty log;
/// malformed elements are dropped individually.
pub fn load_activities(store: Option<&ActivityStore>) -> Vec<Activity> {
    let Some(store) = store else {
        return Vec::new();
    };
    let Some(raw) = store.read_slot(ACTIVITIES_KEY) else {
        return Vec::new();
    };
    parse_activities(&raw)
}

fn parse_activities(raw: &str) -> Vec<Activity> {
    let parsed: serde_json::Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Warning: Stored activities are not valid JSON: {}", e);
            return Vec::new();
        }
    };

    let Some(items) = parsed.as_array() else {
        eprintln!("Warning: Stored activities are not an array, ignoring");
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| serde_json::from_value(item.clone()).ok())
        .collect()
}

/// Saves the activity log. Failures are swallowed after a warning; the
/// session keeps running on the in-memory state.
pub fn save_activities(store: Option<&ActivityStore>, activities: &[Activity]) {
    let Some(store) = store else {
        return;
    };

    if let Err(e) = try_save(store, activities) {
        eprintln!("Warning: Could not save activities: {}", e);
    }
}

fn try_save(store: &ActivityStore, activities: &[Activity]) -> Result<(), StorageError> {
    let payload = serde_json::to_string_pretty(activities)?;
    store.write_slot(ACTIVITIES_KEY, &payload)
}

#[cfg(test)]
mod tests {
    use std::time::SystemTime;

    use super::*;

    fn unique_store(prefix: &str) -> ActivityStore {
        let now = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let dir = PathBuf::from(format!("/tmp/dayring_{}_{}", prefix, now));
        fs::create_dir_all(&dir).unwrap();
        ActivityStore::at(dir)
    }

    fn sample_activity(id: &str) -> Activity {
        Activity {
            id: id.to_string(),
            name: "Work".to_string(),
            start_hour: 9,
            start_minute: 30,
            duration_minutes: 420,
            color: "#EF4444".to_string(),
            date: "2026-08-29".to_string(),
        }
    }

    #[test]
    fn test_load_without_store_is_empty() {
        assert!(load_activities(None).is_empty());
    }

    #[test]
    fn test_load_missing_slot_is_empty() {
        let store = unique_store("missing");
        assert!(load_activities(Some(&store)).is_empty());
        fs::remove_dir_all(&store.dir).ok();
    }

    #[test]
    fn test_save_load_round_trip() {
        let store = unique_store("roundtrip");
        let activities = vec![sample_activity("a1"), sample_activity("a2")];

        save_activities(Some(&store), &activities);
        let loaded = load_activities(Some(&store));

        assert_eq!(loaded, activities);
        fs::remove_dir_all(&store.dir).ok();
    }

    #[test]
    fn test_save_without_store_is_noop() {
        save_activities(None, &[sample_activity("a1")]);
    }

    #[test]
    fn test_save_to_unwritable_store_is_silent() {
        let store = ActivityStore::at("/tmp/dayring_no_such_dir/nested/missing");
        save_activities(Some(&store), &[sample_activity("a1")]);
    }

    #[test]
    fn test_load_malformed_json_is_empty() {
        let store = unique_store("malformed");
        store.write_slot(ACTIVITIES_KEY, "{not json").unwrap();
        assert!(load_activities(Some(&store)).is_empty());
        fs::remove_dir_all(&store.dir).ok();
    }

    #[test]
    fn test_load_non_array_payload_is_empty() {
        let store = unique_store("nonarray");
        store.write_slot(ACTIVITIES_KEY, "{\"days\": 3}").unwrap();
        assert!(load_activities(Some(&store)).is_empty());
        fs::remove_dir_all(&store.dir).ok();
    }

    #[test]
    fn test_load_filters_malformed_elements() {
        let store = unique_store("elements");
        let payload = serde_json::json!([
            {
                "id": "good",
                "name": "Work",
                "start_hour": 9,
                "start_minute": 0,
                "duration_minutes": 60,
                "color": "#EF4444",
                "date": "2026-08-29"
            },
            { "id": "missing-fields" },
            { "id": "wrong-types", "name": "Work", "start_hour": "nine",
              "start_minute": 0, "duration_minutes": 60,
              "color": "#EF4444", "date": "2026-08-29" },
            42,
            null
        ]);
        store
            .write_slot(ACTIVITIES_KEY, &payload.to_string())
            .unwrap();

        let loaded = load_activities(Some(&store));
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "good");
        fs::remove_dir_all(&store.dir).ok();
    }

    #[test]
    fn test_write_slot_replaces_previous_payload() {
        let store = unique_store("replace");
        save_activities(Some(&store), &[sample_activity("a1")]);
        save_activities(Some(&store), &[sample_activity("a2")]);

        let loaded = load_activities(Some(&store));
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "a2");
        fs::remove_dir_all(&store.dir).ok();
    }
}
