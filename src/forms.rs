//! Add/edit forms for a single activity. Forms never touch the store: they
//! validate their fields and hand back a payload for the caller to apply.

use crate::error::ValidationError;
use crate::types::{Activity, ActivityPayload, EditedActivity, TimeOfDay, normalize_description};

const ADD_EMPTY_PLACE: &str = "Please enter the name of the place.";
const EDIT_EMPTY_PLACE: &str = "Location cannot be empty.";

/// Raw field values as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityFields {
    pub time: TimeOfDay,
    pub place_name: String,
    pub description: String,
}

impl ActivityFields {
    /// Free-text time input; anything unknown lands on `Morning`.
    pub fn set_time(&mut self, raw: &str) {
        self.time = TimeOfDay::from(raw);
    }

    fn validated(&self, empty_place: &'static str) -> Result<(String, Option<String>), ValidationError> {
        let place = self.place_name.trim();
        if place.is_empty() {
            return Err(ValidationError::EmptyField(empty_place));
        }
        Ok((place.to_string(), normalize_description(Some(self.description.as_str()))))
    }
}

impl From<&Activity> for ActivityFields {
    fn from(activity: &Activity) -> Self {
        Self {
            time: activity.time,
            place_name: activity.location.clone(),
            description: activity.description.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default)]
pub struct AddActivityForm {
    target_day: Option<u32>,
    pub fields: ActivityFields,
}

impl AddActivityForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open for `day`. Fields reset whenever the form was closed or pointed
    /// at another day.
    pub fn open_for(&mut self, day: u32) {
        if self.target_day != Some(day) {
            self.fields = ActivityFields::default();
        }
        self.target_day = Some(day);
    }

    pub fn close(&mut self) {
        self.target_day = None;
    }

    pub fn is_open(&self) -> bool {
        self.target_day.is_some()
    }

    pub fn target_day(&self) -> Option<u32> {
        self.target_day
    }

    pub fn title(&self) -> String {
        match self.target_day {
            Some(day) => format!("Add Activity to Day {day}"),
            None => "Add New Activity".to_string(),
        }
    }

    /// Validate and, on success, close the form and return the target day
    /// with the payload. A closed form has nothing to submit.
    pub fn submit(&mut self) -> Result<Option<(u32, ActivityPayload)>, ValidationError> {
        let Some(day) = self.target_day else {
            return Ok(None);
        };
        let (location, description) = self.fields.validated(ADD_EMPTY_PLACE)?;
        let payload = ActivityPayload {
            time: self.fields.time,
            location,
            description,
        };
        self.close();
        Ok(Some((day, payload)))
    }
}

#[derive(Debug, Default)]
pub struct EditActivityForm {
    target: Option<(u32, Activity)>,
    pub fields: ActivityFields,
}

impl EditActivityForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open on `activity`. Fields are reloaded whenever the target differs
    /// from the one the form last showed, so a reopened form never shows
    /// stale values from an earlier session.
    pub fn open(&mut self, day: u32, activity: &Activity) {
        let same = matches!(&self.target, Some((d, a)) if *d == day && a == activity);
        if !same {
            self.fields = ActivityFields::from(activity);
            self.target = Some((day, activity.clone()));
        }
    }

    pub fn close(&mut self) {
        self.target = None;
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<(u32, &Activity)> {
        self.target.as_ref().map(|(day, activity)| (*day, activity))
    }

    pub fn submit(&mut self) -> Result<Option<(u32, EditedActivity)>, ValidationError> {
        let Some((day, original)) = &self.target else {
            return Ok(None);
        };
        let (location, description) = self.fields.validated(EDIT_EMPTY_PLACE)?;
        let edited = EditedActivity {
            id: original.id.clone(),
            time: self.fields.time,
            location,
            description,
        };
        let day = *day;
        self.close();
        Ok(Some((day, edited)))
    }
}
