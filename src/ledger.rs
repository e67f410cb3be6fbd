//! Ordered record list behind the culinary, packing and budget pages.

use std::sync::Arc;

use ulid::Ulid;

use crate::error::ValidationError;
use crate::prompt::Prompter;
use crate::types::{MutationOutcome, Skipped};

pub trait Record: Clone {
    fn id(&self) -> &str;

    /// Name shown to the user when asking about this record.
    fn label(&self) -> &str;
}

pub fn new_record_id() -> String {
    Ulid::new().to_string()
}

/// Trimmed `raw`, or `message` when nothing is left.
pub fn required(raw: &str, message: &'static str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(message));
    }
    Ok(trimmed.to_string())
}

/// Same replace-on-write contract as the itinerary store: every applied
/// change installs a new list and bumps the revision.
#[derive(Clone, Debug)]
pub struct Ledger<T> {
    items: Arc<[T]>,
    revision: u64,
}

impl<T: Record> Ledger<T> {
    pub fn new() -> Self {
        Self::from_items(Vec::new())
    }

    pub fn from_items(items: Vec<T>) -> Self {
        Self {
            items: Arc::from(items),
            revision: 0,
        }
    }

    pub fn items(&self) -> Arc<[T]> {
        Arc::clone(&self.items)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn push(&mut self, item: T) {
        let mut items = self.items.to_vec();
        items.push(item);
        self.commit(items);
    }

    /// Apply `edit` to the record with `id`, in place.
    pub fn update(&mut self, id: &str, edit: impl FnOnce(&mut T)) -> MutationOutcome {
        let Some(position) = self.position(id) else {
            tracing::error!(id, "cannot update: record not found");
            return MutationOutcome::Unchanged(Skipped::RecordNotFound(id.to_string()));
        };
        let mut items = self.items.to_vec();
        edit(&mut items[position]);
        self.commit(items);
        MutationOutcome::Applied
    }

    pub fn delete(&mut self, id: &str, prompter: &dyn Prompter) -> MutationOutcome {
        let Some(position) = self.position(id) else {
            tracing::error!(id, "cannot delete: record not found");
            return MutationOutcome::Unchanged(Skipped::RecordNotFound(id.to_string()));
        };
        let label = self.items[position].label().to_string();
        if !prompter.confirm(&format!("Are you sure you want to delete \"{label}\"?")) {
            tracing::info!(id, "deletion cancelled");
            return MutationOutcome::Unchanged(Skipped::Declined);
        }

        let mut items = self.items.to_vec();
        items.remove(position);
        self.commit(items);
        prompter.notify(&format!("\"{label}\" deleted successfully!"));
        MutationOutcome::Applied
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    fn commit(&mut self, items: Vec<T>) {
        self.items = Arc::from(items);
        self.revision += 1;
    }
}

impl<T: Record> Default for Ledger<T> {
    fn default() -> Self {
        Self::new()
    }
}
