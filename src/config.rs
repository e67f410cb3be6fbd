//! `settings.json`: presentation settings only. Planner data is never
//! written here.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};
use serde::{Deserialize, Serialize};

use crate::cli::StartArgs;
use crate::error::{PlannerError, PlannerResult};
use crate::metadata::APP_DIR_NAME;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub seed_sample_data: bool,
    pub color: bool,
    pub log_filter: String,
    pub currency_symbol: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed_sample_data: true,
            color: true,
            log_filter: "warn".to_string(),
            currency_symbol: "Rp".to_string(),
        }
    }
}

impl Settings {
    pub fn default_path() -> PlannerResult<PathBuf> {
        let dir = dirs::config_dir().ok_or(PlannerError::NoConfigDir)?;
        Ok(dir.join(APP_DIR_NAME).join("settings.json"))
    }

    /// Read settings from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> PlannerResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Write through a temporary file and rename it into place so a crash
    /// never leaves a half-written file behind.
    pub fn save_to(&self, path: &Path) -> PlannerResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let temp = path.with_extension("tmp");
        let mut f = File::create(&temp)?;
        let content = serde_json::to_string_pretty(self)?;
        f.write_all(content.as_bytes())?;
        f.sync_all()?;
        fs::rename(temp, path)?;
        Ok(())
    }

    /// Walk through every field with the current value as default.
    pub fn edit_interactively(&self, theme: &ColorfulTheme) -> PlannerResult<Self> {
        let seed_sample_data = Confirm::with_theme(theme)
            .with_prompt("Start with the sample trip?")
            .default(self.seed_sample_data)
            .interact()?;
        let color = Confirm::with_theme(theme)
            .with_prompt("Use colors?")
            .default(self.color)
            .interact()?;
        let log_filter: String = Input::with_theme(theme)
            .with_prompt("Log filter (e.g. warn, info, trip_planner=debug)")
            .with_initial_text(self.log_filter.clone())
            .interact_text()?;
        let currency_symbol: String = Input::with_theme(theme)
            .with_prompt("Currency symbol")
            .with_initial_text(self.currency_symbol.clone())
            .interact_text()?;
        Ok(Self {
            seed_sample_data,
            color,
            log_filter: log_filter.trim().to_string(),
            currency_symbol: currency_symbol.trim().to_string(),
        })
    }
}

/// What an interactive session starts with, after command-line flags have
/// been laid over the settings file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionOptions {
    pub seed_sample_data: bool,
    pub color: bool,
    pub currency_symbol: String,
    pub trip_start: Option<NaiveDate>,
}

impl SessionOptions {
    /// The trip starts today unless `--start-date` says otherwise.
    pub fn resolve(settings: &Settings, args: &StartArgs) -> PlannerResult<Self> {
        let trip_start = parse_start_date(args.start_date.as_deref())?.unwrap_or_else(today);
        Ok(Self {
            seed_sample_data: settings.seed_sample_data && !args.no_sample,
            color: settings.color && !args.no_color,
            currency_symbol: settings.currency_symbol.clone(),
            trip_start: Some(trip_start),
        })
    }
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// `None` for blank input, which is how the date picker gets cleared.
pub fn parse_start_date(raw: Option<&str>) -> PlannerResult<Option<NaiveDate>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some("today") => Ok(Some(today())),
        Some(input) => NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .map(Some)
            .map_err(|source| PlannerError::Date {
                input: input.to_string(),
                source,
            }),
    }
}
