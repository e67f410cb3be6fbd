use std::collections::HashSet;
use std::sync::Arc;

use ulid::Ulid;

use crate::error::{PlannerError, PlannerResult};
use crate::prompt::Prompter;
use crate::types::{
    Activity, ActivityPayload, DayPlan, EditedActivity, MutationOutcome, Skipped, TimeOfDay,
    normalize_description,
};

/// Owner of the day-by-day itinerary.
///
/// Every applied mutation swaps in a fresh day list and a fresh activity list
/// for the touched day; untouched days keep their allocation. Holders of an
/// older [`ItineraryStore::days`] snapshot can detect change with
/// `Arc::ptr_eq` or by comparing [`ItineraryStore::revision`].
#[derive(Clone, Debug)]
pub struct ItineraryStore {
    days: Arc<[DayPlan]>,
    revision: u64,
}

impl ItineraryStore {
    pub fn new() -> Self {
        Self {
            days: Arc::from(Vec::new()),
            revision: 0,
        }
    }

    /// Build a store from existing day plans, rejecting duplicate days,
    /// day 0, duplicate activity ids within a day and empty locations.
    pub fn with_days(days: Vec<DayPlan>) -> PlannerResult<Self> {
        let mut seen_days = HashSet::new();
        for plan in &days {
            if plan.day == 0 {
                return Err(PlannerError::Invalid("day numbers start at 1".into()));
            }
            if !seen_days.insert(plan.day) {
                return Err(PlannerError::Invalid(format!("day {} appears twice", plan.day)));
            }
            let mut seen_ids = HashSet::new();
            for activity in plan.activities.iter() {
                if !seen_ids.insert(activity.id.as_str()) {
                    return Err(PlannerError::Invalid(format!(
                        "activity id {} appears twice in day {}",
                        activity.id, plan.day
                    )));
                }
                if activity.location.trim().is_empty() {
                    return Err(PlannerError::Invalid(format!(
                        "activity {} in day {} has no location",
                        activity.id, plan.day
                    )));
                }
            }
        }
        Ok(Self {
            days: Arc::from(days),
            revision: 0,
        })
    }

    /// Three days around Bali.
    pub fn sample() -> Self {
        let seed: [(u32, [(&str, TimeOfDay, &str, &str); 3]); 3] = [
            (
                1,
                [
                    ("act1-1", TimeOfDay::Morning, "Tanah Lot Temple", "Sunrise view and temple visit."),
                    ("act1-2", TimeOfDay::Afternoon, "Ubud Monkey Forest", "Interact with monkeys."),
                    ("act1-3", TimeOfDay::Evening, "Jimbaran Bay Seafood", "Dinner on the beach."),
                ],
            ),
            (
                2,
                [
                    ("act2-1", TimeOfDay::Morning, "Tegalalang Rice Terrace", "Walk through the scenic rice paddies."),
                    ("act2-2", TimeOfDay::Afternoon, "Campuhan Ridge Walk", "Easy trek with beautiful views."),
                    ("act2-3", TimeOfDay::Evening, "Kecak Dance Performance", "Traditional Balinese dance."),
                ],
            ),
            (
                3,
                [
                    ("act3-1", TimeOfDay::Morning, "Mount Batur Sunrise Trek", "Early morning hike (optional)."),
                    ("act3-2", TimeOfDay::Afternoon, "Tirta Empul Temple", "Holy water temple purification."),
                    ("act3-3", TimeOfDay::Evening, "Local Warung Dinner", "Try authentic Balinese food."),
                ],
            ),
        ];

        let days: Vec<DayPlan> = seed
            .into_iter()
            .map(|(day, activities)| DayPlan {
                day,
                activities: activities
                    .into_iter()
                    .map(|(id, time, location, description)| Activity {
                        id: id.to_string(),
                        time,
                        location: location.to_string(),
                        description: Some(description.to_string()),
                    })
                    .collect(),
            })
            .collect();

        Self {
            days: Arc::from(days),
            revision: 0,
        }
    }

    pub fn days(&self) -> Arc<[DayPlan]> {
        Arc::clone(&self.days)
    }

    pub fn day(&self, day: u32) -> Option<&DayPlan> {
        self.days.iter().find(|d| d.day == day)
    }

    pub fn day_numbers(&self) -> Vec<u32> {
        self.days.iter().map(|d| d.day).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn activity_count(&self) -> usize {
        self.days.iter().map(|d| d.activities.len()).sum()
    }

    /// Append the day after the current highest one (day 1 when empty).
    pub fn add_day(&mut self) -> Option<u32> {
        let next = self.days.iter().map(|d| d.day).max().map_or(1, |max| max + 1);
        if self.day(next).is_some() {
            tracing::warn!("day {next} already exists");
            return None;
        }

        let mut days = self.days.to_vec();
        days.push(DayPlan::empty(next));
        self.commit(days);
        tracing::debug!(day = next, "added day");
        Some(next)
    }

    /// Append a new activity to `day` and return it. The location is
    /// re-checked here even though the add form already refuses blanks.
    pub fn add_activity(&mut self, day: u32, payload: ActivityPayload) -> Option<Activity> {
        let location = payload.location.trim();
        if location.is_empty() {
            tracing::warn!(day, "refusing activity without a location");
            return None;
        }
        let Some(index) = self.index_of(day) else {
            tracing::warn!(day, "cannot add activity: day not found");
            return None;
        };

        let activity = Activity {
            id: Ulid::new().to_string(),
            time: payload.time,
            location: location.to_string(),
            description: normalize_description(payload.description.as_deref()),
        };

        let mut activities = self.days[index].activities.to_vec();
        activities.push(activity.clone());
        self.replace_activities(index, activities);
        tracing::debug!(day, id = %activity.id, "added activity");
        Some(activity)
    }

    /// Overwrite time, location and description of an existing activity,
    /// keeping its id and position.
    pub fn update_activity(&mut self, day: u32, edited: EditedActivity) -> MutationOutcome {
        let location = edited.location.trim();
        if location.is_empty() {
            tracing::warn!(day, id = %edited.id, "refusing to blank an activity location");
            return MutationOutcome::Unchanged(Skipped::EmptyLocation);
        }
        let Some(index) = self.index_of(day) else {
            tracing::error!(day, "cannot save edit: day not found");
            return MutationOutcome::Unchanged(Skipped::DayNotFound(day));
        };
        let Some(position) = self.days[index]
            .activities
            .iter()
            .position(|a| a.id == edited.id)
        else {
            tracing::error!(day, id = %edited.id, "cannot save edit: activity not found");
            return MutationOutcome::Unchanged(Skipped::ActivityNotFound(edited.id));
        };

        let mut activities = self.days[index].activities.to_vec();
        let target = &mut activities[position];
        target.time = edited.time;
        target.location = location.to_string();
        target.description = normalize_description(edited.description.as_deref());
        self.replace_activities(index, activities);
        tracing::debug!(day, id = %edited.id, "updated activity");
        MutationOutcome::Applied
    }

    /// Remove an activity after the user confirms it by name.
    pub fn delete_activity(
        &mut self,
        day: u32,
        activity_id: &str,
        prompter: &dyn Prompter,
    ) -> MutationOutcome {
        let Some(index) = self.index_of(day) else {
            tracing::error!(day, "day not found for deletion");
            return MutationOutcome::Unchanged(Skipped::DayNotFound(day));
        };
        let Some(location) = self.days[index]
            .activity(activity_id)
            .map(|a| a.location.clone())
        else {
            tracing::error!(day, id = activity_id, "activity id not found for deletion within the day");
            return MutationOutcome::Unchanged(Skipped::ActivityNotFound(activity_id.to_string()));
        };

        if !prompter.confirm(&format!(
            "Are you sure you want to delete the activity \"{location}\"?"
        )) {
            tracing::info!(day, id = activity_id, "deletion cancelled");
            return MutationOutcome::Unchanged(Skipped::Declined);
        }

        let activities: Vec<Activity> = self.days[index]
            .activities
            .iter()
            .filter(|a| a.id != activity_id)
            .cloned()
            .collect();
        self.replace_activities(index, activities);
        prompter.notify(&format!("Activity \"{location}\" deleted successfully!"));
        MutationOutcome::Applied
    }

    fn index_of(&self, day: u32) -> Option<usize> {
        self.days.iter().position(|d| d.day == day)
    }

    fn replace_activities(&mut self, index: usize, activities: Vec<Activity>) {
        let mut days = self.days.to_vec();
        days[index] = DayPlan {
            day: days[index].day,
            activities: Arc::from(activities),
        };
        self.commit(days);
    }

    fn commit(&mut self, days: Vec<DayPlan>) {
        self.days = Arc::from(days);
        self.revision += 1;
    }
}

impl Default for ItineraryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::testing::ScriptedPrompter;
    use pretty_assertions::assert_eq;

    fn payload(time: TimeOfDay, location: &str, description: &str) -> ActivityPayload {
        ActivityPayload {
            time,
            location: location.to_string(),
            description: Some(description.to_string()),
        }
    }

    fn store_with_one_day() -> ItineraryStore {
        let mut store = ItineraryStore::new();
        store.add_day();
        store
    }

    #[test]
    fn add_day_on_empty_then_again() {
        let mut store = ItineraryStore::new();
        assert_eq!(store.add_day(), Some(1));
        assert_eq!(store.days().to_vec(), vec![DayPlan::empty(1)]);

        let day_one = store.days();
        assert_eq!(store.add_day(), Some(2));
        assert_eq!(store.day_numbers(), vec![1, 2]);
        assert!(Arc::ptr_eq(&day_one[0].activities, &store.days()[0].activities));
    }

    #[test]
    fn add_day_numbers_strictly_increase() {
        let gapped = ItineraryStore::with_days(vec![DayPlan::empty(2), DayPlan::empty(7)]);
        let mut store = gapped.unwrap();
        for _ in 0..5 {
            store.add_day();
        }
        let numbers = store.day_numbers();
        assert_eq!(numbers, vec![2, 7, 8, 9, 10, 11, 12]);
        assert!(numbers.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn add_activity_scenario() {
        let mut store = store_with_one_day();
        let created = store
            .add_activity(1, payload(TimeOfDay::Morning, "Tanah Lot Temple", "Sunrise"))
            .expect("day 1 exists");

        let day = store.day(1).unwrap();
        assert_eq!(day.activities.len(), 1);
        let activity = &day.activities[0];
        assert_eq!(activity, &created);
        assert_eq!(activity.location, "Tanah Lot Temple");
        assert_eq!(activity.time, TimeOfDay::Morning);
        assert_eq!(activity.description.as_deref(), Some("Sunrise"));
        assert!(!activity.id.is_empty());
    }

    #[test]
    fn add_activity_touches_only_its_day() {
        let mut store = ItineraryStore::sample();
        let before = store.days();
        store.add_activity(2, payload(TimeOfDay::Evening, "Seminyak Beach", ""));

        let after = store.days();
        assert_eq!(after[1].activities.len(), before[1].activities.len() + 1);
        assert!(Arc::ptr_eq(&before[0].activities, &after[0].activities));
        assert!(Arc::ptr_eq(&before[2].activities, &after[2].activities));
        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(after[1].activities.last().unwrap().description, None);
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn add_activity_to_missing_day_is_a_no_op() {
        let mut store = ItineraryStore::sample();
        let before = store.days();
        assert_eq!(store.add_activity(5, payload(TimeOfDay::Morning, "Nusa Penida", "")), None);
        assert!(Arc::ptr_eq(&before, &store.days()));
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn add_activity_refuses_blank_location() {
        let mut store = store_with_one_day();
        assert_eq!(store.add_activity(1, payload(TimeOfDay::Morning, "  ", "")), None);
        assert!(store.day(1).unwrap().activities.is_empty());
    }

    #[test]
    fn generated_ids_are_unique() {
        let mut store = store_with_one_day();
        let ids: HashSet<String> = (0..50)
            .filter_map(|i| store.add_activity(1, payload(TimeOfDay::Morning, &format!("Spot {i}"), "")))
            .map(|a| a.id)
            .collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn update_keeps_id_and_position() {
        let mut store = ItineraryStore::sample();
        let outcome = store.update_activity(
            1,
            EditedActivity {
                id: "act1-2".into(),
                time: TimeOfDay::Evening,
                location: "Sacred Monkey Forest".into(),
                description: Some(String::new()),
            },
        );
        assert!(outcome.is_applied());

        let day = store.day(1).unwrap();
        let ids: Vec<&str> = day.activities.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["act1-1", "act1-2", "act1-3"]);
        assert_eq!(
            day.activities[1],
            Activity {
                id: "act1-2".into(),
                time: TimeOfDay::Evening,
                location: "Sacred Monkey Forest".into(),
                description: None,
            }
        );
    }

    #[test]
    fn update_with_unknown_targets_is_ignored() {
        let mut store = ItineraryStore::sample();
        let before = store.days();
        let edit = |id: &str| EditedActivity {
            id: id.to_string(),
            time: TimeOfDay::Morning,
            location: "Somewhere".into(),
            description: None,
        };

        assert_eq!(
            store.update_activity(9, edit("act1-1")),
            MutationOutcome::Unchanged(Skipped::DayNotFound(9))
        );
        assert_eq!(
            store.update_activity(1, edit("act2-1")),
            MutationOutcome::Unchanged(Skipped::ActivityNotFound("act2-1".into()))
        );
        assert!(Arc::ptr_eq(&before, &store.days()));
    }

    #[test]
    fn add_then_edit_with_same_values_round_trips() {
        let mut store = store_with_one_day();
        let created = store
            .add_activity(1, payload(TimeOfDay::Afternoon, "Tirta Empul", "Purification"))
            .unwrap();
        store.update_activity(1, EditedActivity::from(&created));
        assert_eq!(store.day(1).unwrap().activities[0], created);
    }

    #[test]
    fn declined_delete_changes_nothing() {
        let mut store = ItineraryStore::sample();
        let before = store.days();
        let prompter = ScriptedPrompter::answering([false]);

        let outcome = store.delete_activity(2, "act2-2", &prompter);
        assert_eq!(outcome, MutationOutcome::Unchanged(Skipped::Declined));
        assert_eq!(before.to_vec(), store.days().to_vec());
        assert_eq!(
            prompter.questions(),
            vec!["Are you sure you want to delete the activity \"Campuhan Ridge Walk\"?"]
        );
        assert!(prompter.notices().is_empty());
    }

    #[test]
    fn confirmed_delete_removes_only_the_target() {
        let mut store = ItineraryStore::sample();
        let before = store.days();
        let prompter = ScriptedPrompter::answering([true]);

        assert!(store.delete_activity(2, "act2-2", &prompter).is_applied());
        let ids: Vec<String> = store
            .day(2)
            .unwrap()
            .activities
            .iter()
            .map(|a| a.id.clone())
            .collect();
        assert_eq!(ids, vec!["act2-1".to_string(), "act2-3".to_string()]);
        assert_eq!(store.activity_count(), 8);
        assert_eq!(before[0], store.days()[0]);
        assert_eq!(
            prompter.notices(),
            vec!["Activity \"Campuhan Ridge Walk\" deleted successfully!"]
        );
    }

    #[test]
    fn delete_of_unknown_activity_does_not_prompt() {
        let mut store = ItineraryStore::sample();
        let prompter = ScriptedPrompter::answering([true]);
        assert_eq!(
            store.delete_activity(1, "nope", &prompter),
            MutationOutcome::Unchanged(Skipped::ActivityNotFound("nope".into()))
        );
        assert!(prompter.questions().is_empty());
        assert_eq!(store.activity_count(), 9);
    }

    #[test]
    fn with_days_rejects_duplicates() {
        assert!(ItineraryStore::with_days(vec![DayPlan::empty(1), DayPlan::empty(1)]).is_err());
        assert!(ItineraryStore::with_days(vec![DayPlan::empty(0)]).is_err());

        let twin = Activity {
            id: "x".into(),
            time: TimeOfDay::Morning,
            location: "Ubud".into(),
            description: None,
        };
        let day = DayPlan {
            day: 1,
            activities: Arc::from(vec![twin.clone(), twin]),
        };
        assert!(ItineraryStore::with_days(vec![day]).is_err());
    }
}
