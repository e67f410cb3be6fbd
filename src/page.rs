//! The itinerary page: one owner for the store, the day selector, both
//! activity forms and the (display-only) trip start date.

use chrono::{Days, NaiveDate};

use crate::day_selector::DaySelector;
use crate::error::ValidationError;
use crate::forms::{AddActivityForm, EditActivityForm};
use crate::itinerary::ItineraryStore;
use crate::prompt::Prompter;
use crate::types::{Activity, MutationOutcome, Skipped};

#[derive(Debug, Default)]
pub struct ItineraryPage {
    store: ItineraryStore,
    selector: DaySelector,
    add_form: AddActivityForm,
    edit_form: EditActivityForm,
    trip_start: Option<NaiveDate>,
}

impl ItineraryPage {
    pub fn new(store: ItineraryStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }

    pub fn store(&self) -> &ItineraryStore {
        &self.store
    }

    pub fn selector(&self) -> &DaySelector {
        &self.selector
    }

    pub fn add_form(&self) -> &AddActivityForm {
        &self.add_form
    }

    pub fn add_form_mut(&mut self) -> &mut AddActivityForm {
        &mut self.add_form
    }

    pub fn edit_form(&self) -> &EditActivityForm {
        &self.edit_form
    }

    pub fn edit_form_mut(&mut self) -> &mut EditActivityForm {
        &mut self.edit_form
    }

    pub fn trip_start(&self) -> Option<NaiveDate> {
        self.trip_start
    }

    pub fn set_trip_start(&mut self, date: Option<NaiveDate>) {
        self.trip_start = date;
    }

    /// Calendar date of `day` counted from the trip start, if one is set.
    pub fn date_of_day(&self, day: u32) -> Option<NaiveDate> {
        let start = self.trip_start?;
        start.checked_add_days(Days::new(u64::from(day.saturating_sub(1))))
    }

    pub fn add_day(&mut self) -> Option<u32> {
        self.store.add_day()
    }

    /// The "Add Activity" button. Opening the popover also drops any add
    /// form that was still open.
    pub fn toggle_day_selector(&mut self, prompter: &dyn Prompter) -> bool {
        let was_open = self.selector.is_open();
        let opened = self.selector.toggle(&self.store.day_numbers(), prompter);
        if !was_open && opened {
            self.add_form.close();
        }
        opened
    }

    /// Pick a day in the popover and open the add form on it.
    pub fn choose_day(&mut self, day: u32) -> bool {
        match self.selector.select(day) {
            Some(day) => {
                self.add_form.open_for(day);
                true
            }
            None => false,
        }
    }

    pub fn dismiss_day_selector(&mut self) {
        self.selector.dismiss();
    }

    /// Submit the add form. Validation errors leave the form open and the
    /// store untouched.
    pub fn save_add_form(&mut self) -> Result<Option<Activity>, ValidationError> {
        let Some((day, payload)) = self.add_form.submit()? else {
            return Ok(None);
        };
        Ok(self.store.add_activity(day, payload))
    }

    pub fn cancel_add_form(&mut self) {
        self.add_form.close();
    }

    /// Open the edit form on an existing activity.
    pub fn begin_edit(&mut self, day: u32, activity_id: &str) -> bool {
        let Some(activity) = self.store.day(day).and_then(|d| d.activity(activity_id)) else {
            tracing::error!(day, id = activity_id, "cannot edit: activity not found");
            return false;
        };
        self.edit_form.open(day, activity);
        true
    }

    pub fn save_edit_form(&mut self) -> Result<MutationOutcome, ValidationError> {
        let Some((day, edited)) = self.edit_form.submit()? else {
            tracing::error!("cannot save edit: no activity is being edited");
            return Ok(MutationOutcome::Unchanged(Skipped::NoTarget));
        };
        Ok(self.store.update_activity(day, edited))
    }

    pub fn cancel_edit(&mut self) {
        self.edit_form.close();
    }

    pub fn delete_activity(
        &mut self,
        day: u32,
        activity_id: &str,
        prompter: &dyn Prompter,
    ) -> MutationOutcome {
        self.store.delete_activity(day, activity_id, prompter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::testing::ScriptedPrompter;
    use crate::types::TimeOfDay;
    use pretty_assertions::assert_eq;

    #[test]
    fn full_add_flow_through_the_popover() {
        let prompter = ScriptedPrompter::default();
        let mut page = ItineraryPage::default();

        assert!(!page.toggle_day_selector(&prompter));
        assert_eq!(prompter.notices().len(), 1);

        page.add_day();
        assert!(page.toggle_day_selector(&prompter));
        assert!(page.choose_day(1));
        assert!(!page.selector().is_open());
        assert_eq!(page.add_form().target_day(), Some(1));

        let form = page.add_form_mut();
        form.fields.set_time("Morning");
        form.fields.place_name = "Tanah Lot Temple".into();
        form.fields.description = "Sunrise".into();
        let created = page.save_add_form().unwrap().unwrap();

        let day = page.store().day(1).unwrap();
        assert_eq!(day.activities.len(), 1);
        assert_eq!(day.activities[0], created);
        assert_eq!(created.time, TimeOfDay::Morning);
        assert_eq!(created.description.as_deref(), Some("Sunrise"));
        assert!(!page.add_form().is_open());
    }

    #[test]
    fn empty_place_never_reaches_the_store() {
        let prompter = ScriptedPrompter::default();
        let mut page = ItineraryPage::new(ItineraryStore::sample());
        page.toggle_day_selector(&prompter);
        page.choose_day(2);

        let before = page.store().revision();
        assert!(page.save_add_form().is_err());
        assert_eq!(page.store().revision(), before);
        assert_eq!(page.store().day(2).unwrap().activities.len(), 3);
        assert!(page.add_form().is_open());
    }

    #[test]
    fn dismissing_the_popover_opens_nothing() {
        let prompter = ScriptedPrompter::default();
        let mut page = ItineraryPage::new(ItineraryStore::sample());
        page.toggle_day_selector(&prompter);
        page.dismiss_day_selector();

        assert!(!page.add_form().is_open());
        assert!(!page.choose_day(1));
    }

    #[test]
    fn edit_flow_updates_in_place() {
        let mut page = ItineraryPage::new(ItineraryStore::sample());
        assert!(page.begin_edit(3, "act3-1"));
        page.edit_form_mut().fields.place_name = "Mount Agung".into();

        assert!(page.save_edit_form().unwrap().is_applied());
        let day = page.store().day(3).unwrap();
        assert_eq!(day.activities[0].id, "act3-1");
        assert_eq!(day.activities[0].location, "Mount Agung");
        assert!(!page.edit_form().is_open());
    }

    #[test]
    fn edit_of_missing_activity_does_not_open() {
        let mut page = ItineraryPage::new(ItineraryStore::sample());
        assert!(!page.begin_edit(1, "missing"));
        assert!(!page.edit_form().is_open());
    }

    #[test]
    fn trip_dates_follow_day_numbers() {
        let mut page = ItineraryPage::default();
        assert_eq!(page.date_of_day(1), None);

        page.set_trip_start(NaiveDate::from_ymd_opt(2026, 12, 30));
        assert_eq!(page.date_of_day(1), NaiveDate::from_ymd_opt(2026, 12, 30));
        assert_eq!(page.date_of_day(3), NaiveDate::from_ymd_opt(2027, 1, 1));
    }
}
