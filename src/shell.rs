//! Interactive terminal session: a page menu plus one menu per page.
//! Every form here only gathers text; validation and mutation go through
//! the page types.

use dialoguer::{Input, Select};

use crate::budget::{BudgetFields, BudgetPage};
use crate::config::{SessionOptions, parse_start_date};
use crate::culinary::{CulinaryPage, DishKind};
use crate::error::PlannerResult;
use crate::forms::ActivityFields;
use crate::itinerary::ItineraryStore;
use crate::packing::PackingPage;
use crate::page::ItineraryPage;
use crate::plans::HomePage;
use crate::prompt::{Prompter, TerminalPrompter};
use crate::render;
use crate::types::TimeOfDay;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Nav {
    Home,
    Itinerary,
    Culinary,
    Packing,
    Budget,
    Quit,
}

impl Nav {
    const ALL: [Nav; 6] = [
        Nav::Home,
        Nav::Itinerary,
        Nav::Culinary,
        Nav::Packing,
        Nav::Budget,
        Nav::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            Nav::Home => "Home",
            Nav::Itinerary => "Itinerary Management",
            Nav::Culinary => "Culinary",
            Nav::Packing => "Packing Checklist",
            Nav::Budget => "Budget",
            Nav::Quit => "Quit",
        }
    }
}

pub struct Session {
    home: HomePage,
    itinerary: ItineraryPage,
    culinary: CulinaryPage,
    packing: PackingPage,
    budget: BudgetPage,
    currency: String,
    prompter: TerminalPrompter,
}

impl Session {
    pub fn new(options: &SessionOptions) -> Self {
        let (home, store, culinary, packing, budget) = if options.seed_sample_data {
            (
                HomePage::sample(),
                ItineraryStore::sample(),
                CulinaryPage::sample(),
                PackingPage::sample(),
                BudgetPage::sample(),
            )
        } else {
            Default::default()
        };
        let mut itinerary = ItineraryPage::new(store);
        itinerary.set_trip_start(options.trip_start);
        Self {
            home,
            itinerary,
            culinary,
            packing,
            budget,
            currency: options.currency_symbol.clone(),
            prompter: TerminalPrompter::new(),
        }
    }

    pub fn run(&mut self) -> PlannerResult<()> {
        loop {
            let labels: Vec<&str> = Nav::ALL.iter().map(|n| n.label()).collect();
            let choice = Select::with_theme(self.prompter.theme())
                .with_prompt("Where to?")
                .items(&labels)
                .default(0)
                .interact_opt()?;
            let nav = choice.map_or(Nav::Quit, |i| Nav::ALL[i]);
            tracing::debug!(page = nav.label(), "navigate");
            match nav {
                Nav::Home => self.home_page()?,
                Nav::Itinerary => self.itinerary_page()?,
                Nav::Culinary => self.culinary_page()?,
                Nav::Packing => self.packing_page()?,
                Nav::Budget => self.budget_page()?,
                Nav::Quit => return Ok(()),
            }
        }
    }

    fn menu(&self, prompt: &str, items: &[&str]) -> PlannerResult<Option<usize>> {
        Ok(Select::with_theme(self.prompter.theme())
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()?)
    }

    fn text(&self, prompt: &str, initial: &str, allow_empty: bool) -> PlannerResult<String> {
        Ok(Input::<String>::with_theme(self.prompter.theme())
            .with_prompt(prompt)
            .with_initial_text(initial)
            .allow_empty(allow_empty)
            .interact_text()?)
    }

    // Home

    fn home_page(&mut self) -> PlannerResult<()> {
        loop {
            println!("\n{}", render::home(&self.home));
            match self.menu("Home", &["Search travel plans", "Clear search", "Back"])? {
                Some(0) => {
                    let current = self.home.search_term().to_string();
                    let term = self.text("Search Travel Plan...", &current, true)?;
                    self.home.set_search(&term);
                }
                Some(1) => self.home.set_search(""),
                _ => return Ok(()),
            }
        }
    }

    // Itinerary

    fn itinerary_page(&mut self) -> PlannerResult<()> {
        loop {
            println!("\n{}", render::itinerary(&self.itinerary));
            let actions = [
                "Add Activity",
                "Add New Day",
                "Edit activity",
                "Delete activity",
                "Change trip start date",
                "Back",
            ];
            match self.menu("Itinerary", &actions)? {
                Some(0) => self.add_activity()?,
                Some(1) => {
                    if let Some(day) = self.itinerary.add_day() {
                        self.prompter.notify(&format!("Day {day} added."));
                    }
                }
                Some(2) => self.edit_activity()?,
                Some(3) => self.delete_activity()?,
                Some(4) => self.change_trip_start()?,
                _ => return Ok(()),
            }
        }
    }

    fn add_activity(&mut self) -> PlannerResult<()> {
        if !self.itinerary.toggle_day_selector(&self.prompter) {
            return Ok(());
        }
        let days = self.itinerary.selector().choices().to_vec();
        let labels: Vec<String> = days.iter().map(|d| format!("Day {d}")).collect();
        let picked = Select::with_theme(self.prompter.theme())
            .with_prompt("Select Day")
            .items(&labels)
            .default(0)
            .interact_opt()?;
        // Escape is the terminal's "click outside".
        let Some(index) = picked else {
            self.itinerary.dismiss_day_selector();
            return Ok(());
        };
        self.itinerary.choose_day(days[index]);

        loop {
            println!("{}", self.itinerary.add_form().title());
            let current = self.itinerary.add_form().fields.clone();
            let Some(fields) = self.activity_fields(&current)? else {
                self.itinerary.cancel_add_form();
                return Ok(());
            };
            self.itinerary.add_form_mut().fields = fields;
            match self.itinerary.save_add_form() {
                Ok(_) => return Ok(()),
                Err(e) => self.prompter.notify(&e.to_string()),
            }
        }
    }

    /// Collect one activity's fields. `None` when the user backs out.
    fn activity_fields(&self, current: &ActivityFields) -> PlannerResult<Option<ActivityFields>> {
        let times: Vec<&str> = TimeOfDay::ALL.iter().map(|t| t.as_str()).collect();
        let default_time = TimeOfDay::ALL
            .iter()
            .position(|t| *t == current.time)
            .unwrap_or(0);
        let Some(time_index) = Select::with_theme(self.prompter.theme())
            .with_prompt("Time of day")
            .items(&times)
            .default(default_time)
            .interact_opt()?
        else {
            return Ok(None);
        };

        let mut fields = ActivityFields::default();
        fields.set_time(times[time_index]);
        fields.place_name = self.text("Name of the place", &current.place_name, true)?;
        fields.description = self.text("Description (optional)", &current.description, true)?;
        Ok(Some(fields))
    }

    /// Pick an activity across all days; returns (day, activity id).
    fn pick_activity(&self, prompt: &str) -> PlannerResult<Option<(u32, String)>> {
        let days = self.itinerary.store().days();
        let entries: Vec<(u32, String, String)> = days
            .iter()
            .flat_map(|plan| {
                plan.activities.iter().map(move |a| {
                    (
                        plan.day,
                        a.id.clone(),
                        format!("Day {} · {} · {}", plan.day, a.time, a.location),
                    )
                })
            })
            .collect();
        if entries.is_empty() {
            self.prompter.notify("There are no activities yet.");
            return Ok(None);
        }
        let labels: Vec<&str> = entries.iter().map(|(_, _, label)| label.as_str()).collect();
        Ok(self
            .menu(prompt, &labels)?
            .map(|i| (entries[i].0, entries[i].1.clone())))
    }

    fn edit_activity(&mut self) -> PlannerResult<()> {
        let Some((day, id)) = self.pick_activity("Edit which activity?")? else {
            return Ok(());
        };
        if !self.itinerary.begin_edit(day, &id) {
            return Ok(());
        }
        loop {
            if let Some((day, activity)) = self.itinerary.edit_form().target() {
                println!("Edit \"{}\" (Day {day})", activity.location);
            }
            let current = self.itinerary.edit_form().fields.clone();
            let Some(fields) = self.activity_fields(&current)? else {
                self.itinerary.cancel_edit();
                return Ok(());
            };
            self.itinerary.edit_form_mut().fields = fields;
            match self.itinerary.save_edit_form() {
                Ok(_) => return Ok(()),
                Err(e) => self.prompter.notify(&e.to_string()),
            }
        }
    }

    fn delete_activity(&mut self) -> PlannerResult<()> {
        if let Some((day, id)) = self.pick_activity("Delete which activity?")? {
            self.itinerary.delete_activity(day, &id, &self.prompter);
        }
        Ok(())
    }

    fn change_trip_start(&mut self) -> PlannerResult<()> {
        let current = self
            .itinerary
            .trip_start()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        let raw = self.text("Trip start (YYYY-MM-DD, empty to clear)", &current, true)?;
        match parse_start_date(Some(&raw)) {
            Ok(date) => self.itinerary.set_trip_start(date),
            Err(e) => self.prompter.notify(&e.to_string()),
        }
        Ok(())
    }

    // Culinary

    fn culinary_page(&mut self) -> PlannerResult<()> {
        loop {
            println!("\n{}", render::culinary(&self.culinary));
            match self.menu("Culinary", &["Add dish", "Edit dish", "Delete dish", "Back"])? {
                Some(0) => {
                    if let Some((name, kind)) = self.dish_fields("", DishKind::default())? {
                        if let Err(e) = self.culinary.add(&name, kind) {
                            self.prompter.notify(&e.to_string());
                        }
                    }
                }
                Some(1) => {
                    let Some(id) = self.pick_dish("Edit which dish?")? else {
                        continue;
                    };
                    let Some(dish) = self.culinary.ledger().get(&id).cloned() else {
                        continue;
                    };
                    if let Some((name, kind)) = self.dish_fields(&dish.name, dish.kind)? {
                        if let Err(e) = self.culinary.update(&id, &name, kind) {
                            self.prompter.notify(&e.to_string());
                        }
                    }
                }
                Some(2) => {
                    if let Some(id) = self.pick_dish("Delete which dish?")? {
                        self.culinary.delete(&id, &self.prompter);
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn dish_fields(&self, name: &str, kind: DishKind) -> PlannerResult<Option<(String, DishKind)>> {
        let name = self.text("Name of the dish", name, true)?;
        let kinds: Vec<String> = DishKind::ALL.iter().map(|k| k.to_string()).collect();
        let default = DishKind::ALL.iter().position(|k| *k == kind).unwrap_or(0);
        let Some(index) = Select::with_theme(self.prompter.theme())
            .with_prompt("Type")
            .items(&kinds)
            .default(default)
            .interact_opt()?
        else {
            return Ok(None);
        };
        Ok(Some((name, DishKind::from(kinds[index].as_str()))))
    }

    fn pick_dish(&self, prompt: &str) -> PlannerResult<Option<String>> {
        let dishes = self.culinary.ledger().items();
        if dishes.is_empty() {
            return Ok(None);
        }
        let labels: Vec<String> = dishes.iter().map(|d| format!("{} ({})", d.name, d.kind)).collect();
        let labels: Vec<&str> = labels.iter().map(String::as_str).collect();
        Ok(self.menu(prompt, &labels)?.map(|i| dishes[i].id.clone()))
    }

    // Packing

    fn packing_page(&mut self) -> PlannerResult<()> {
        loop {
            println!("\n{}", render::packing(&self.packing));
            let actions = ["Add item", "Check / uncheck item", "Rename item", "Delete item", "Back"];
            match self.menu("Packing", &actions)? {
                Some(0) => {
                    let name = self.text("Name of the packing item", "", true)?;
                    if let Err(e) = self.packing.add(&name) {
                        self.prompter.notify(&e.to_string());
                    }
                }
                Some(1) => {
                    if let Some(id) = self.pick_packing_item("Toggle which item?")? {
                        self.packing.toggle(&id);
                    }
                }
                Some(2) => {
                    let Some(id) = self.pick_packing_item("Rename which item?")? else {
                        continue;
                    };
                    let current = self
                        .packing
                        .ledger()
                        .get(&id)
                        .map(|item| item.name.clone())
                        .unwrap_or_default();
                    let name = self.text("Item name", &current, true)?;
                    if let Err(e) = self.packing.rename(&id, &name) {
                        self.prompter.notify(&e.to_string());
                    }
                }
                Some(3) => {
                    if let Some(id) = self.pick_packing_item("Delete which item?")? {
                        self.packing.delete(&id, &self.prompter);
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn pick_packing_item(&self, prompt: &str) -> PlannerResult<Option<String>> {
        let items = self.packing.ledger().items();
        if items.is_empty() {
            return Ok(None);
        }
        let labels: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();
        Ok(self.menu(prompt, &labels)?.map(|i| items[i].id.clone()))
    }

    // Budget

    fn budget_page(&mut self) -> PlannerResult<()> {
        loop {
            println!("\n{}", render::budget(&self.budget, &self.currency));
            match self.menu("Budget", &["+ Add Budget Item", "Edit item", "Delete item", "Back"])? {
                Some(0) => {
                    let fields = self.budget_fields(BudgetFields::default())?;
                    match fields.validate() {
                        Ok(entry) => {
                            self.budget.add(entry);
                        }
                        Err(e) => self.prompter.notify(&e.to_string()),
                    }
                }
                Some(1) => {
                    let Some(id) = self.pick_budget_item("Edit which item?")? else {
                        continue;
                    };
                    let Some(current) = self.budget.ledger().get(&id).map(BudgetFields::from) else {
                        continue;
                    };
                    let fields = self.budget_fields(current)?;
                    match fields.validate() {
                        Ok(entry) => {
                            self.budget.update(&id, entry);
                        }
                        Err(e) => self.prompter.notify(&e.to_string()),
                    }
                }
                Some(2) => {
                    if let Some(id) = self.pick_budget_item("Delete which item?")? {
                        self.budget.delete(&id, &self.prompter);
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn budget_fields(&self, current: BudgetFields) -> PlannerResult<BudgetFields> {
        Ok(BudgetFields {
            description: self.text("Description", &current.description, true)?,
            category: self.text("Category", &current.category, true)?,
            quantity: self.text("Quantity", &current.quantity, true)?,
            unit_cost: self.text("Unit cost", &current.unit_cost, true)?,
        })
    }

    fn pick_budget_item(&self, prompt: &str) -> PlannerResult<Option<String>> {
        let items = self.budget.ledger().items();
        if items.is_empty() {
            return Ok(None);
        }
        let labels: Vec<&str> = items.iter().map(|item| item.description.as_str()).collect();
        Ok(self.menu(prompt, &labels)?.map(|i| items[i].id.clone()))
    }
}
