use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::ledger::{Ledger, Record, new_record_id, required};
use crate::prompt::Prompter;
use crate::types::MutationOutcome;

static NON_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9.\-]+").expect("static regex"));
static LEADING_INT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?\d+").expect("static regex"));

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BudgetItem {
    pub id: String,
    pub description: String,
    pub category: String,
    pub quantity: u32,
    pub unit_cost: f64,
    pub amount: f64,
}

impl Record for BudgetItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.description
    }
}

/// A validated budget line, before it gets an id and an amount.
#[derive(Clone, Debug, PartialEq)]
pub struct BudgetEntry {
    pub description: String,
    pub category: String,
    pub quantity: u32,
    pub unit_cost: f64,
}

impl BudgetEntry {
    pub fn amount(&self) -> f64 {
        f64::from(self.quantity) * self.unit_cost
    }
}

/// Budget form fields as typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BudgetFields {
    pub description: String,
    pub category: String,
    pub quantity: String,
    pub unit_cost: String,
}

impl Default for BudgetFields {
    fn default() -> Self {
        Self {
            description: String::new(),
            category: String::new(),
            quantity: "1".to_string(),
            unit_cost: String::new(),
        }
    }
}

impl From<&BudgetItem> for BudgetFields {
    fn from(item: &BudgetItem) -> Self {
        Self {
            description: item.description.clone(),
            category: item.category.clone(),
            quantity: item.quantity.to_string(),
            unit_cost: item.unit_cost.to_string(),
        }
    }
}

impl BudgetFields {
    pub fn validate(&self) -> Result<BudgetEntry, ValidationError> {
        let description = required(&self.description, "Please enter a description.")?;
        let category = required(&self.category, "Please enter a category.")?;
        let quantity = parse_quantity(&self.quantity)?;
        let unit_cost = parse_unit_cost(&self.unit_cost)?;
        Ok(BudgetEntry {
            description,
            category,
            quantity,
            unit_cost,
        })
    }
}

/// Only the leading integer counts, so "2.5" is 2 and "3 nights" is 3.
fn parse_quantity(raw: &str) -> Result<u32, ValidationError> {
    let digits = LEADING_INT
        .find(raw.trim())
        .map(|m| m.as_str())
        .ok_or(ValidationError::Quantity)?;
    digits
        .parse::<i64>()
        .ok()
        .filter(|quantity| *quantity >= 1)
        .and_then(|quantity| u32::try_from(quantity).ok())
        .ok_or(ValidationError::Quantity)
}

/// Formatting such as "Rp 550.000" is tolerated: everything but digits,
/// dots and minus signs is stripped before parsing.
fn parse_unit_cost(raw: &str) -> Result<f64, ValidationError> {
    let cleaned = NON_NUMERIC.replace_all(raw, "");
    let cleaned = strip_thousands_dots(&cleaned);
    match cleaned.parse::<f64>() {
        Ok(cost) if cost.is_finite() && cost >= 0.0 => Ok(cost),
        _ => Err(ValidationError::UnitCost),
    }
}

// "550.000" and "1.650.000" are rupiah with dot grouping, not decimals.
fn strip_thousands_dots(raw: &str) -> String {
    let groups: Vec<&str> = raw.split('.').collect();
    let grouped = groups.len() > 1
        && !groups[0].is_empty()
        && groups[1..].iter().all(|g| g.len() == 3 && g.bytes().all(|b| b.is_ascii_digit()));
    if grouped {
        groups.concat()
    } else {
        raw.to_string()
    }
}

/// Whole-unit currency with dot grouping, e.g. `Rp 1.650.000`.
pub fn format_currency(symbol: &str, amount: f64) -> String {
    if !amount.is_finite() {
        return "Invalid Number".to_string();
    }
    let rounded = amount.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let sign = if negative { "-" } else { "" };
    format!("{sign}{symbol} {grouped}")
}

#[derive(Clone, Debug, Default)]
pub struct BudgetPage {
    ledger: Ledger<BudgetItem>,
}

impl BudgetPage {
    pub fn new(items: Vec<BudgetItem>) -> Self {
        Self {
            ledger: Ledger::from_items(items),
        }
    }

    pub fn sample() -> Self {
        Self::new(vec![
            BudgetItem {
                id: "budget-1".into(),
                description: "Banana Inn".into(),
                category: "Accommodation".into(),
                quantity: 3,
                unit_cost: 550_000.0,
                amount: 1_650_000.0,
            },
            BudgetItem {
                id: "budget-2".into(),
                description: "Rental Mobil".into(),
                category: "Transportation".into(),
                quantity: 4,
                unit_cost: 300_000.0,
                amount: 1_200_000.0,
            },
        ])
    }

    pub fn ledger(&self) -> &Ledger<BudgetItem> {
        &self.ledger
    }

    pub fn add(&mut self, entry: BudgetEntry) -> BudgetItem {
        let item = BudgetItem {
            id: new_record_id(),
            amount: entry.amount(),
            description: entry.description,
            category: entry.category,
            quantity: entry.quantity,
            unit_cost: entry.unit_cost,
        };
        self.ledger.push(item.clone());
        item
    }

    /// Replace every field but the id; the amount is recomputed.
    pub fn update(&mut self, id: &str, entry: BudgetEntry) -> MutationOutcome {
        let amount = entry.amount();
        self.ledger.update(id, move |item| {
            item.description = entry.description;
            item.category = entry.category;
            item.quantity = entry.quantity;
            item.unit_cost = entry.unit_cost;
            item.amount = amount;
        })
    }

    pub fn delete(&mut self, id: &str, prompter: &dyn Prompter) -> MutationOutcome {
        self.ledger.delete(id, prompter)
    }

    pub fn total(&self) -> f64 {
        self.ledger.iter().map(|item| item.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fields(description: &str, category: &str, quantity: &str, unit_cost: &str) -> BudgetFields {
        BudgetFields {
            description: description.into(),
            category: category.into(),
            quantity: quantity.into(),
            unit_cost: unit_cost.into(),
        }
    }

    #[test]
    fn validation_messages() {
        let cases = [
            (fields(" ", "Food", "1", "10"), "Please enter a description."),
            (fields("Snorkel", "", "1", "10"), "Please enter a category."),
            (fields("Snorkel", "Fun", "0", "10"), "Please enter a valid quantity (at least 1)."),
            (fields("Snorkel", "Fun", "two", "10"), "Please enter a valid quantity (at least 1)."),
            (fields("Snorkel", "Fun", "2", "-5"), "Please enter a valid unit cost (0 or positive)."),
            (fields("Snorkel", "Fun", "2", "free"), "Please enter a valid unit cost (0 or positive)."),
        ];
        for (input, message) in cases {
            assert_eq!(input.validate().unwrap_err().to_string(), message);
        }
    }

    #[test]
    fn quantity_reads_the_leading_integer() {
        assert_eq!(parse_quantity("2.5"), Ok(2));
        assert_eq!(parse_quantity(" 3 nights"), Ok(3));
        assert_eq!(parse_quantity("+4"), Ok(4));
        assert_eq!(parse_quantity("-1"), Err(ValidationError::Quantity));
        assert_eq!(parse_quantity("x3"), Err(ValidationError::Quantity));
        assert_eq!(parse_quantity(""), Err(ValidationError::Quantity));

        let entry = fields("Banana Inn", "Accommodation", "2.5", "550000").validate().unwrap();
        assert_eq!(entry.quantity, 2);
    }

    #[test]
    fn unit_cost_accepts_formatted_input() {
        let entry = fields("Banana Inn", "Accommodation", "3", "Rp 550.000").validate().unwrap();
        assert_eq!(entry.unit_cost, 550_000.0);
        assert_eq!(entry.amount(), 1_650_000.0);

        let decimal = fields("Coffee", "Food", "2", "2.5").validate().unwrap();
        assert_eq!(decimal.unit_cost, 2.5);
    }

    #[test]
    fn amounts_follow_edits() {
        let mut page = BudgetPage::sample();
        assert_eq!(page.total(), 2_850_000.0);

        let entry = fields("Banana Inn", "Accommodation", "4", "550000").validate().unwrap();
        assert!(page.update("budget-1", entry).is_applied());
        assert_eq!(page.ledger().get("budget-1").unwrap().amount, 2_200_000.0);
        assert_eq!(page.total(), 3_400_000.0);

        let added = page.add(fields("Snorkel", "Activity", "2", "150000").validate().unwrap());
        assert_eq!(added.amount, 300_000.0);
        assert_eq!(page.ledger().len(), 3);
    }

    #[test]
    fn rupiah_formatting() {
        assert_eq!(format_currency("Rp", 1_650_000.0), "Rp 1.650.000");
        assert_eq!(format_currency("Rp", 0.0), "Rp 0");
        assert_eq!(format_currency("Rp", 999.4), "Rp 999");
        assert_eq!(format_currency("Rp", 1000.0), "Rp 1.000");
        assert_eq!(format_currency("Rp", f64::NAN), "Invalid Number");
    }

    #[test]
    fn edit_fields_start_from_item() {
        let page = BudgetPage::sample();
        let item = page.ledger().get("budget-2").unwrap();
        assert_eq!(BudgetFields::from(item), fields("Rental Mobil", "Transportation", "4", "300000"));
    }
}
