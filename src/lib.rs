//! Terminal travel planner: a home page of travel plans, a day-by-day
//! itinerary, and a culinary wish-list, packing checklist and budget
//! ledger alongside it.
//!
//! All planner state lives in memory for the length of a session.

pub mod budget;
pub mod cli;
pub mod config;
pub mod culinary;
pub mod day_selector;
pub mod error;
pub mod forms;
pub mod itinerary;
pub mod ledger;
pub mod metadata;
pub mod packing;
pub mod page;
pub mod plans;
pub mod prompt;
pub mod render;
pub mod shell;
pub mod types;
