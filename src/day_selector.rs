//! Popover asking which day a new activity goes to.

use crate::prompt::Prompter;

pub const NO_DAYS_NOTICE: &str = "Please add a day column first before adding activities.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DaySelector {
    #[default]
    Closed,
    Open {
        days: Vec<u32>,
    },
}

impl DaySelector {
    pub fn is_open(&self) -> bool {
        matches!(self, DaySelector::Open { .. })
    }

    /// Days currently on offer; empty while closed.
    pub fn choices(&self) -> &[u32] {
        match self {
            DaySelector::Open { days } => days,
            DaySelector::Closed => &[],
        }
    }

    /// Open over `days`. With no days there is nothing to pick, so the user
    /// is told to add one and the popover stays closed.
    pub fn open(&mut self, days: &[u32], prompter: &dyn Prompter) -> bool {
        if days.is_empty() {
            prompter.notify(NO_DAYS_NOTICE);
            return false;
        }
        *self = DaySelector::Open {
            days: days.to_vec(),
        };
        true
    }

    /// The add-activity button: closes an open popover, opens a closed one.
    pub fn toggle(&mut self, days: &[u32], prompter: &dyn Prompter) -> bool {
        if self.is_open() {
            self.dismiss();
            false
        } else {
            self.open(days, prompter)
        }
    }

    /// Pick a day. Closes the popover and returns the day for the add form.
    /// A day that is not on offer is ignored.
    pub fn select(&mut self, day: u32) -> Option<u32> {
        if !self.choices().contains(&day) {
            tracing::debug!(day, "ignoring selection of a day that is not offered");
            return None;
        }
        *self = DaySelector::Closed;
        Some(day)
    }

    /// Interaction outside the popover: close without a selection.
    pub fn dismiss(&mut self) {
        *self = DaySelector::Closed;
    }
}
