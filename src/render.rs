//! Plain-text views of each page. Everything returns a `String` so the
//! shell prints it and tests can look inside.

use std::fmt::Write;

use colored::Colorize;

use crate::budget::{BudgetPage, format_currency};
use crate::culinary::{CulinaryPage, DishKind};
use crate::packing::PackingPage;
use crate::page::ItineraryPage;
use crate::plans::HomePage;

pub fn home(page: &HomePage) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Travel Plans".bold().underline());
    if !page.search_term().is_empty() {
        let _ = writeln!(out, "Search: {}", page.search_term().cyan());
    }
    if let Some(message) = page.empty_message() {
        let _ = writeln!(out, "\n{}", message.dimmed());
        return out;
    }
    for plan in page.visible() {
        let _ = writeln!(out, "\n{} {}", "●".bright_black(), plan.location.bold());
        let _ = writeln!(out, "    {}", plan.date_range().dimmed());
    }
    out
}

pub fn itinerary(page: &ItineraryPage) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Itinerary".bold().underline());
    if let Some(start) = page.trip_start() {
        let _ = writeln!(out, "Trip starts {}", start.format("%A, %d %B %Y"));
    }

    let days = page.store().days();
    if days.is_empty() {
        let _ = writeln!(out, "{}", "No days yet. Add a day to get started.".dimmed());
        return out;
    }

    for plan in days.iter() {
        let heading = match page.date_of_day(plan.day) {
            Some(date) => format!("Day {} · {}", plan.day, date.format("%a %d %b")),
            None => format!("Day {}", plan.day),
        };
        let _ = writeln!(out, "\n{} {}", "●".bright_black(), heading.bold());
        if plan.activities.is_empty() {
            let _ = writeln!(out, "    {}", "No activities added yet.".italic().dimmed());
            continue;
        }
        for activity in plan.activities.iter() {
            let _ = writeln!(
                out,
                "    {} {:<9} {}",
                "○".bright_black(),
                activity.time.as_str().to_uppercase().cyan(),
                activity.location
            );
            if let Some(description) = &activity.description {
                let _ = writeln!(out, "              {}", description.italic().dimmed());
            }
        }
    }
    out
}

pub fn culinary(page: &CulinaryPage) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Culinary & Local Cuisine".bold().underline());
    for kind in DishKind::ALL {
        let _ = writeln!(out, "\n{}", kind.to_string().bold());
        let dishes = page.of_kind(kind);
        if dishes.is_empty() {
            let _ = writeln!(out, "  {}", "Nothing here yet.".dimmed());
        }
        for (i, dish) in dishes.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", i + 1, dish.name);
        }
    }
    out
}

pub fn packing(page: &PackingPage) -> String {
    let (packed, total) = page.progress();
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({packed}/{total} packed)",
        "Packing Checklist".bold().underline()
    );
    for item in page.ledger().iter() {
        if item.packed {
            let _ = writeln!(out, "  [x] {}", item.name.strikethrough().dimmed());
        } else {
            let _ = writeln!(out, "  [ ] {}", item.name.red());
        }
    }
    out
}

pub fn budget(page: &BudgetPage, currency: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Budget Trip".bold().underline());
    let _ = writeln!(
        out,
        "{:<24} {:<16} {:>4} {:>16} {:>16}",
        "Description", "Category", "Qty", "Unit Cost", "Amount"
    );
    for item in page.ledger().iter() {
        let _ = writeln!(
            out,
            "{:<24} {:<16} {:>4} {:>16} {:>16}",
            item.description,
            item.category,
            item.quantity,
            format_currency(currency, item.unit_cost),
            format_currency(currency, item.amount)
        );
    }
    let _ = writeln!(
        out,
        "{:>80}",
        format!("Total {}", format_currency(currency, page.total()))
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itinerary::ItineraryStore;
    use chrono::NaiveDate;

    #[test]
    fn home_lists_matching_plans() {
        let mut page = HomePage::sample();
        let text = home(&page);
        assert!(text.contains("Lake Como, Italy"));
        assert!(text.contains("Jun 10, 2025 - Jun 17, 2025"));

        page.set_search("kyoto");
        let text = home(&page);
        assert!(text.contains("Kyoto, Japan"));
        assert!(!text.contains("Bali"));

        page.set_search("Paris");
        assert!(home(&page).contains("No travel plans found matching your search."));
    }

    #[test]
    fn itinerary_lists_days_and_activities() {
        let mut page = ItineraryPage::new(ItineraryStore::sample());
        page.set_trip_start(NaiveDate::from_ymd_opt(2026, 11, 2));
        page.add_day();

        let text = itinerary(&page);
        assert!(text.contains("Day 1 · Mon 02 Nov"));
        assert!(text.contains("Tanah Lot Temple"));
        assert!(text.contains("Day 4 · Thu 05 Nov"));
        assert!(text.contains("No activities added yet."));
    }

    #[test]
    fn empty_itinerary_hint() {
        let text = itinerary(&ItineraryPage::default());
        assert!(text.contains("No days yet"));
    }

    #[test]
    fn budget_shows_total() {
        let text = budget(&BudgetPage::sample(), "Rp");
        assert!(text.contains("Banana Inn"));
        assert!(text.contains("Rp 1.650.000"));
        assert!(text.contains("Total Rp 2.850.000"));
    }

    #[test]
    fn packing_and_culinary_headers() {
        assert!(packing(&PackingPage::sample()).contains("(0/6 packed)"));
        let text = culinary(&CulinaryPage::sample());
        assert!(text.contains("1. Ayam Betutu"));
        assert!(text.contains("4. Pisang Rai"));
    }
}
