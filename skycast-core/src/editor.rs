//! Interactive editing of the persisted default settings.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{
    error::Result,
    prompt::Prompter,
    resolver::ensure_default_store,
    settings::{
        DAYS_KEY, ForecastDays, LOCATION_KEY, MAX_FORECAST_DAYS, QUERY_MODE_KEY, QueryModeSetting,
    },
    store::{OpenMode, SettingsStore},
};

const CANCEL: &str = "cancel";

/// Walks the user through changing stored defaults one field at a time.
///
/// The store stays open for the whole session and is written back once when
/// the session ends.
pub struct SettingsEditor<'a> {
    store_path: PathBuf,
    prompter: &'a dyn Prompter,
}

impl<'a> SettingsEditor<'a> {
    pub fn new(store_path: impl Into<PathBuf>, prompter: &'a dyn Prompter) -> Self {
        Self {
            store_path: store_path.into(),
            prompter,
        }
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    /// Run one editing session and return the keys that changed.
    pub fn run(&self) -> Result<Vec<String>> {
        ensure_default_store(&self.store_path)?;
        let mut store = SettingsStore::open(&self.store_path, OpenMode::ReadWrite)?;

        let options: Vec<String> = store.keys().map(str::to_string).collect();

        self.prompter.say("Enter the number(s) of the setting(s) you want to change");
        for (i, option) in options.iter().enumerate() {
            self.prompter.say(&format!("{i}) {option}"));
        }

        let selection = self.prompter.ask("")?;
        let mut changed = Vec::new();

        for token in selection.split_whitespace() {
            let Some(key) = token.parse::<usize>().ok().and_then(|i| options.get(i)) else {
                self.prompter.say(&format!("'{token}' is not one of the listed settings"));
                continue;
            };

            let edited = match key.as_str() {
                DAYS_KEY => self.edit_days(&mut store)?,
                LOCATION_KEY => self.edit_location(&mut store)?,
                QUERY_MODE_KEY => self.edit_query_mode(&mut store)?,
                other => {
                    self.prompter.say(&format!("'{other}' can't be edited here"));
                    false
                }
            };

            if edited && !changed.contains(key) {
                changed.push(key.clone());
            }
        }

        store.close()?;
        debug!(?changed, "settings editor finished");
        Ok(changed)
    }

    fn edit_days(&self, store: &mut SettingsStore) -> Result<bool> {
        let answer = self.prompter.ask(&format!(
            "Enter the number of days to forecast\nThere is a {MAX_FORECAST_DAYS} day limit"
        ))?;

        match answer.parse::<ForecastDays>() {
            Ok(days) => {
                store.set(DAYS_KEY, i64::from(days.get()))?;
                Ok(true)
            }
            Err(_) => {
                self.prompter.say("Please enter a valid number");
                Ok(false)
            }
        }
    }

    fn edit_location(&self, store: &mut SettingsStore) -> Result<bool> {
        let location = self
            .prompter
            .ask("Enter a zip, an OpenWeather city ID, or a (city, state)")?;
        store.set(LOCATION_KEY, location)?;
        Ok(true)
    }

    fn edit_query_mode(&self, store: &mut SettingsStore) -> Result<bool> {
        let mut setting: QueryModeSetting = store.get_as(QUERY_MODE_KEY)?;

        self.prompter.say("Enter a query mode\nAvailable options:");
        self.list_options(&setting);

        loop {
            let answer = self.prompter.ask("")?;

            if answer.eq_ignore_ascii_case(CANCEL) {
                self.prompter.say(&format!("Query mode left as: {}", setting.value));
                return Ok(false);
            }

            if setting.accepts(&answer) {
                self.prompter.say(&format!("New query mode: {answer}"));
                setting.value = answer;
                store.set(QUERY_MODE_KEY, setting)?;
                return Ok(true);
            }

            self.prompter.say("ERROR: Please enter a valid option or type 'cancel'");
            self.list_options(&setting);
        }
    }

    fn list_options(&self, setting: &QueryModeSetting) {
        for option in &setting.options {
            self.prompter.say(option);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        prompt::scripted::ScriptedPrompter,
        resolver::load_defaults,
        settings::{QueryMode, Settings},
    };

    // Menu order is sorted: 0) daysInForecast 1) location 2) queryMode

    #[test]
    fn empty_selection_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let prompter = ScriptedPrompter::new(&[""]);

        let changed = SettingsEditor::new(&path, &prompter).run().unwrap();

        assert!(changed.is_empty());
        assert_eq!(load_defaults(&path).unwrap(), Settings::default());
        assert!(prompter.transcript().contains("0) daysInForecast"));
        assert!(prompter.transcript().contains("2) queryMode"));
    }

    #[test]
    fn edits_persist_after_close() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let prompter = ScriptedPrompter::new(&["0 1 2", "5", "Paris, FR", "current"]);

        let changed = SettingsEditor::new(&path, &prompter).run().unwrap();
        assert_eq!(changed, vec![DAYS_KEY, LOCATION_KEY, QUERY_MODE_KEY]);

        let settings = load_defaults(&path).unwrap();
        assert_eq!(settings.location, "Paris, FR");
        assert_eq!(settings.mode, QueryMode::Current);
        assert_eq!(settings.forecast_days.get(), 5);
    }

    #[test]
    fn invalid_day_count_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let prompter = ScriptedPrompter::new(&["0", "thirty"]);

        let changed = SettingsEditor::new(&path, &prompter).run().unwrap();

        assert!(changed.is_empty());
        assert!(prompter.transcript().contains("Please enter a valid number"));
        assert_eq!(load_defaults(&path).unwrap().forecast_days.get(), 7);
    }

    #[test]
    fn query_mode_retries_until_valid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let prompter = ScriptedPrompter::new(&["2", "hourly", "Current", "current"]);

        let changed = SettingsEditor::new(&path, &prompter).run().unwrap();

        assert_eq!(changed, vec![QUERY_MODE_KEY]);
        assert_eq!(prompter.transcript().matches("ERROR: Please enter a valid option").count(), 2);
        assert_eq!(load_defaults(&path).unwrap().mode, QueryMode::Current);
    }

    #[test]
    fn cancel_leaves_query_mode_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let prompter = ScriptedPrompter::new(&["2", "CANCEL"]);

        let changed = SettingsEditor::new(&path, &prompter).run().unwrap();

        assert!(changed.is_empty());
        assert_eq!(load_defaults(&path).unwrap().mode, QueryMode::Forecast);
    }

    #[test]
    fn unknown_indices_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let prompter = ScriptedPrompter::new(&["7 x 1", "Oslo"]);

        let changed = SettingsEditor::new(&path, &prompter).run().unwrap();

        assert_eq!(changed, vec![LOCATION_KEY]);
        assert!(prompter.transcript().contains("'7' is not one of the listed settings"));
        assert!(prompter.transcript().contains("'x' is not one of the listed settings"));
        assert_eq!(load_defaults(&path).unwrap().location, "Oslo");
    }
}
