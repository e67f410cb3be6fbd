use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeOfDay {
    #[default]
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 3] = [TimeOfDay::Morning, TimeOfDay::Afternoon, TimeOfDay::Evening];

    pub fn as_str(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Evening => "Evening",
        }
    }
}

/// Anything outside the three known slots falls back to `Morning`.
impl From<&str> for TimeOfDay {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "afternoon" => TimeOfDay::Afternoon,
            "evening" => TimeOfDay::Evening,
            _ => TimeOfDay::Morning,
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub time: TimeOfDay,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: u32,
    pub activities: Arc<[Activity]>,
}

impl DayPlan {
    pub fn empty(day: u32) -> Self {
        Self {
            day,
            activities: Arc::from(Vec::new()),
        }
    }

    pub fn activity(&self, id: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == id)
    }
}

/// What the add form hands to the store: a new activity without an id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityPayload {
    pub time: TimeOfDay,
    pub location: String,
    pub description: Option<String>,
}

/// What the edit form hands to the store: every field, id included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditedActivity {
    pub id: String,
    pub time: TimeOfDay,
    pub location: String,
    pub description: Option<String>,
}

impl From<&Activity> for EditedActivity {
    fn from(activity: &Activity) -> Self {
        Self {
            id: activity.id.clone(),
            time: activity.time,
            location: activity.location.clone(),
            description: activity.description.clone(),
        }
    }
}

/// Why a mutation left planner state untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Skipped {
    DayNotFound(u32),
    ActivityNotFound(String),
    RecordNotFound(String),
    EmptyLocation,
    Declined,
    NoTarget,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MutationOutcome {
    Applied,
    Unchanged(Skipped),
}

impl MutationOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, MutationOutcome::Applied)
    }
}

/// Empty (after trimming) means "no description".
pub fn normalize_description(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
