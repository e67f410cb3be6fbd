use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::ledger::{Ledger, Record, new_record_id, required};
use crate::prompt::Prompter;
use crate::types::MutationOutcome;

const EMPTY_DISH: &str = "Please enter the name of the dish.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DishKind {
    #[default]
    Savory,
    Sweet,
}

impl DishKind {
    pub const ALL: [DishKind; 2] = [DishKind::Savory, DishKind::Sweet];
}

impl From<&str> for DishKind {
    fn from(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("sweet") {
            DishKind::Sweet
        } else {
            DishKind::Savory
        }
    }
}

impl fmt::Display for DishKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DishKind::Savory => f.write_str("Savory"),
            DishKind::Sweet => f.write_str("Sweet"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub kind: DishKind,
}

impl Record for Dish {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

#[derive(Clone, Debug, Default)]
pub struct CulinaryPage {
    ledger: Ledger<Dish>,
}

impl CulinaryPage {
    pub fn sample() -> Self {
        let savory = ["Ayam Betutu", "Sate Lilit", "Nasi Campur"];
        let sweet = ["Smoothies", "Pie Susu", "Pia Legong", "Pisang Rai"];
        let dishes = savory
            .iter()
            .map(|name| (name, DishKind::Savory))
            .chain(sweet.iter().map(|name| (name, DishKind::Sweet)))
            .enumerate()
            .map(|(i, (name, kind))| Dish {
                id: format!("dish-{}", i + 1),
                name: name.to_string(),
                kind,
            })
            .collect();
        Self {
            ledger: Ledger::from_items(dishes),
        }
    }

    pub fn ledger(&self) -> &Ledger<Dish> {
        &self.ledger
    }

    pub fn add(&mut self, name: &str, kind: DishKind) -> Result<Dish, ValidationError> {
        let dish = Dish {
            id: new_record_id(),
            name: required(name, EMPTY_DISH)?,
            kind,
        };
        self.ledger.push(dish.clone());
        Ok(dish)
    }

    pub fn update(
        &mut self,
        id: &str,
        name: &str,
        kind: DishKind,
    ) -> Result<MutationOutcome, ValidationError> {
        let name = required(name, EMPTY_DISH)?;
        Ok(self.ledger.update(id, move |dish| {
            dish.name = name;
            dish.kind = kind;
        }))
    }

    pub fn delete(&mut self, id: &str, prompter: &dyn Prompter) -> MutationOutcome {
        self.ledger.delete(id, prompter)
    }

    /// Dishes of one kind, in list order.
    pub fn of_kind(&self, kind: DishKind) -> Vec<&Dish> {
        self.ledger.iter().filter(|dish| dish.kind == kind).collect()
    }
}
