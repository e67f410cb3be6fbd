//! The home page: every travel plan at a glance, narrowed by a location
//! search.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const NO_PLANS: &str =
    "You haven't created any travel plans yet. Start by creating a travel plan.";
pub const NO_MATCHES: &str = "No travel plans found matching your search.";

const CARD_DATE: &str = "%b %-d, %Y";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelPlan {
    pub id: u32,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl TravelPlan {
    /// "May 5, 2025 - May 9, 2025"
    pub fn date_range(&self) -> String {
        format!(
            "{} - {}",
            self.start_date.format(CARD_DATE),
            self.end_date.format(CARD_DATE)
        )
    }

    fn matches(&self, needle: &str) -> bool {
        self.location.to_lowercase().contains(needle)
    }
}

#[derive(Clone, Debug, Default)]
pub struct HomePage {
    plans: Vec<TravelPlan>,
    search: String,
}

impl HomePage {
    pub fn new(plans: Vec<TravelPlan>) -> Self {
        Self {
            plans,
            search: String::new(),
        }
    }

    pub fn sample() -> Self {
        let seeds = [
            (1, "Bali, Indonesia", (2025, 5, 5), (2025, 5, 9)),
            (2, "Lake Como, Italy", (2025, 6, 10), (2025, 6, 17)),
            (3, "Kyoto, Japan", (2025, 9, 20), (2025, 9, 28)),
        ];
        let plans = seeds
            .into_iter()
            .filter_map(|(id, location, (sy, sm, sd), (ey, em, ed))| {
                Some(TravelPlan {
                    id,
                    location: location.to_string(),
                    start_date: NaiveDate::from_ymd_opt(sy, sm, sd)?,
                    end_date: NaiveDate::from_ymd_opt(ey, em, ed)?,
                })
            })
            .collect();
        Self::new(plans)
    }

    pub fn plans(&self) -> &[TravelPlan] {
        &self.plans
    }

    pub fn search_term(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = term.trim().to_string();
        tracing::debug!(term = %self.search, "travel plan search");
    }

    /// Plans whose location contains `term`, ignoring case. A blank term
    /// keeps every plan.
    pub fn filter(&self, term: &str) -> Vec<&TravelPlan> {
        let needle = term.trim().to_lowercase();
        self.plans.iter().filter(|plan| plan.matches(&needle)).collect()
    }

    /// The plans matching the current search.
    pub fn visible(&self) -> Vec<&TravelPlan> {
        self.filter(&self.search)
    }

    /// What to show instead of the plan list, if anything.
    pub fn empty_message(&self) -> Option<&'static str> {
        if self.plans.is_empty() {
            Some(NO_PLANS)
        } else if self.visible().is_empty() {
            Some(NO_MATCHES)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn locations<'a>(plans: &[&'a TravelPlan]) -> Vec<&'a str> {
        plans.iter().map(|plan| plan.location.as_str()).collect()
    }

    #[test]
    fn search_ignores_case() {
        let home = HomePage::sample();
        assert_eq!(locations(&home.filter("BALI")), vec!["Bali, Indonesia"]);
        assert_eq!(locations(&home.filter("ja")), vec!["Kyoto, Japan"]);
        assert_eq!(
            locations(&home.filter(", i")),
            vec!["Bali, Indonesia", "Lake Como, Italy"]
        );
    }

    #[test]
    fn blank_search_keeps_everything() {
        let home = HomePage::sample();
        assert_eq!(home.filter("").len(), 3);
        assert_eq!(home.filter("   ").len(), 3);
        assert_eq!(home.empty_message(), None);
    }

    #[test]
    fn unmatched_search_explains_itself() {
        let mut home = HomePage::sample();
        home.set_search("  Reykjavik ");
        assert_eq!(home.search_term(), "Reykjavik");
        assert!(home.visible().is_empty());
        assert_eq!(home.empty_message(), Some(NO_MATCHES));

        home.set_search("");
        assert_eq!(home.visible().len(), 3);
    }

    #[test]
    fn no_plans_at_all() {
        let home = HomePage::default();
        assert_eq!(home.empty_message(), Some(NO_PLANS));
    }

    #[test]
    fn card_dates() {
        let home = HomePage::sample();
        assert_eq!(home.plans()[0].date_range(), "May 5, 2025 - May 9, 2025");
        assert_eq!(home.plans()[2].date_range(), "Sep 20, 2025 - Sep 28, 2025");
    }
}
