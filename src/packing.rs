use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::ledger::{Ledger, Record, new_record_id, required};
use crate::prompt::Prompter;
use crate::types::MutationOutcome;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub packed: bool,
}

impl Record for PackingItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

#[derive(Clone, Debug, Default)]
pub struct PackingPage {
    ledger: Ledger<PackingItem>,
}

impl PackingPage {
    pub fn sample() -> Self {
        let names = ["paspor", "tiket pesawat", "topi pantai", "oleh-oleh", "handuk", "obat-obatan"];
        let items = names
            .iter()
            .enumerate()
            .map(|(i, name)| PackingItem {
                id: format!("pack-{}", i + 1),
                name: name.to_string(),
                packed: false,
            })
            .collect();
        Self {
            ledger: Ledger::from_items(items),
        }
    }

    pub fn ledger(&self) -> &Ledger<PackingItem> {
        &self.ledger
    }

    pub fn add(&mut self, name: &str) -> Result<PackingItem, ValidationError> {
        let name = required(name, "Please enter the name of the packing item.")?;
        let item = PackingItem {
            id: new_record_id(),
            name,
            packed: false,
        };
        self.ledger.push(item.clone());
        Ok(item)
    }

    pub fn rename(&mut self, id: &str, name: &str) -> Result<MutationOutcome, ValidationError> {
        let name = required(name, "Item name cannot be empty.")?;
        Ok(self.ledger.update(id, move |item| item.name = name))
    }

    pub fn toggle(&mut self, id: &str) -> MutationOutcome {
        self.ledger.update(id, |item| item.packed = !item.packed)
    }

    pub fn delete(&mut self, id: &str, prompter: &dyn Prompter) -> MutationOutcome {
        self.ledger.delete(id, prompter)
    }

    /// (packed, total)
    pub fn progress(&self) -> (usize, usize) {
        let packed = self.ledger.iter().filter(|item| item.packed).count();
        (packed, self.ledger.len())
    }
}
