pub const DAY_MINUTES: u32 = 1440;

/// Logical key of the single persisted slot holding the activity log.
pub const ACTIVITIES_KEY: &str = "activities";

pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub struct CategoryDef {
    pub id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
}

pub const DEFAULT_CATEGORIES: [CategoryDef; 6] = [
    CategoryDef {
        id: "sleep",
        name: "Sleep",
        color: "#3B82F6",
    },
    CategoryDef {
        id: "work",
        name: "Work",
        color: "#EF4444",
    },
    CategoryDef {
        id: "meals",
        name: "Meals",
        color: "#F59E0B",
    },
    CategoryDef {
        id: "break",
        name: "Break",
        color: "#10B981",
    },
    CategoryDef {
        id: "exercise",
        name: "Exercise",
        color: "#8B5CF6",
    },
    CategoryDef {
        id: "commute",
        name: "Commute",
        color: "#6B7280",
    },
];

pub const TIME_SETTINGS: TimeSettings = TimeSettings { poll_ms: 100 };

pub const RING_SETTINGS: RingSettings = RingSettings {
    braille_base: 0x2800,
    dot_width: 2,
    dot_height: 4,
    inner_radius_ratio: 0.55,
};

pub struct TimeSettings {
    pub poll_ms: u64,
}

pub struct RingSettings {
    pub braille_base: u32,
    pub dot_width: usize,
    pub dot_height: usize,
    pub inner_radius_ratio: f64,
}
