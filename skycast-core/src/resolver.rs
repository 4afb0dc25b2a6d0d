use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::{
    error::{Error, Result},
    settings::{
        DAYS_KEY, DEFAULT_FORECAST_DAYS, DEFAULT_LOCATION, ForecastDays, LOCATION_KEY,
        QUERY_MODE_KEY, QueryModeSetting, Settings,
    },
    store::{OpenMode, SettingsStore},
};

/// What the positional arguments ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// No arguments: use the persisted defaults.
    Defaults,
    /// `<location> <mode> <days>`: use these values for this run only.
    Override {
        location: String,
        mode: String,
        days: String,
    },
}

impl Invocation {
    /// Classify the arguments that follow the program name.
    ///
    /// Only the count is checked here; the values are validated on resolution.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        match args {
            [] => Ok(Invocation::Defaults),
            [location, mode, days] => Ok(Invocation::Override {
                location: location.as_ref().to_string(),
                mode: mode.as_ref().to_string(),
                days: days.as_ref().to_string(),
            }),
            _ => Err(Error::Usage(args.len())),
        }
    }
}

/// Create the default store and seed it, unless it already exists.
///
/// Returns `true` when the store was seeded by this call.
pub fn ensure_default_store(path: &Path) -> Result<bool> {
    if SettingsStore::exists(path) {
        return Ok(false);
    }

    info!(path = %path.display(), "initializing default settings store");

    let mut store = SettingsStore::open(path, OpenMode::Create)?;
    store.set(DAYS_KEY, i64::from(DEFAULT_FORECAST_DAYS))?;
    store.set(QUERY_MODE_KEY, QueryModeSetting::default())?;
    store.set(LOCATION_KEY, DEFAULT_LOCATION)?;
    store.close()?;

    Ok(true)
}

/// Read the persisted defaults into validated settings.
pub fn load_defaults(path: &Path) -> Result<Settings> {
    let store = SettingsStore::open(path, OpenMode::Read)?;

    let days: i64 = store.get_as(DAYS_KEY)?;
    let mode: QueryModeSetting = store.get_as(QUERY_MODE_KEY)?;
    let location: String = store.get_as(LOCATION_KEY)?;
    store.close()?;

    Ok(Settings {
        location,
        mode: mode.mode()?,
        forecast_days: ForecastDays::new(days)?,
    })
}

/// Decides where a run's settings come from.
///
/// Construction seeds the default store on first run, so resolution can always
/// read from it.
#[derive(Debug, Clone)]
pub struct SettingsResolver {
    store_path: PathBuf,
}

impl SettingsResolver {
    pub fn new(store_path: impl Into<PathBuf>) -> Result<Self> {
        let store_path = store_path.into();
        ensure_default_store(&store_path)?;
        Ok(Self { store_path })
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    pub fn resolve(&self, invocation: &Invocation) -> Result<Settings> {
        match invocation {
            Invocation::Defaults => {
                debug!(path = %self.store_path.display(), "using persisted settings");
                load_defaults(&self.store_path)
            }
            Invocation::Override { location, mode, days } => {
                debug!("using command-line settings");
                Ok(Settings {
                    location: location.clone(),
                    mode: mode.parse()?,
                    forecast_days: days.parse()?,
                })
            }
        }
    }

    /// Classify `args` and resolve them in one step.
    pub fn resolve_args<S: AsRef<str>>(&self, args: &[S]) -> Result<Settings> {
        self.resolve(&Invocation::from_args(args)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::QueryMode;

    #[test]
    fn argument_counts() {
        let none: [&str; 0] = [];
        assert_eq!(Invocation::from_args(&none).unwrap(), Invocation::Defaults);

        assert!(matches!(
            Invocation::from_args(&["Oslo", "current", "3"]).unwrap(),
            Invocation::Override { .. }
        ));

        for args in [
            vec!["Oslo"],
            vec!["Oslo", "current"],
            vec!["Oslo", "current", "3", "extra"],
            vec!["a", "b", "c", "d", "e"],
        ] {
            let err = Invocation::from_args(&args).unwrap_err();
            assert!(matches!(err, Error::Usage(n) if n == args.len()));
        }
    }

    #[test]
    fn seeding_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        assert!(ensure_default_store(&path).unwrap());

        let mut store = SettingsStore::open(&path, OpenMode::ReadWrite).unwrap();
        store.set(LOCATION_KEY, "Paris, FR").unwrap();
        store.close().unwrap();

        assert!(!ensure_default_store(&path).unwrap());
        assert_eq!(load_defaults(&path).unwrap().location, "Paris, FR");
    }

    #[test]
    fn override_with_bad_mode_names_it() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = SettingsResolver::new(dir.path().join("settings.toml")).unwrap();

        let err = resolver.resolve_args(&["Oslo", "hourly", "3"]).unwrap_err();
        assert!(matches!(err, Error::InvalidMode(ref m) if m == "hourly"));
    }

    #[test]
    fn override_with_bad_days_names_it() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = SettingsResolver::new(dir.path().join("settings.toml")).unwrap();

        let err = resolver.resolve_args(&["Oslo", "forecast", "lots"]).unwrap_err();
        assert!(matches!(err, Error::InvalidDays(ref d) if d == "lots"));
    }

    #[test]
    fn persisted_bad_mode_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let resolver = SettingsResolver::new(&path).unwrap();

        let mut store = SettingsStore::open(&path, OpenMode::ReadWrite).unwrap();
        let mut mode = QueryModeSetting::default();
        mode.value = "cancel".to_string();
        store.set(QUERY_MODE_KEY, mode).unwrap();
        store.close().unwrap();

        let err = resolver.resolve(&Invocation::Defaults).unwrap_err();
        assert!(err.to_string().contains("'cancel'"));
    }

    #[test]
    fn defaults_resolve_to_seed_values() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = SettingsResolver::new(dir.path().join("settings.toml")).unwrap();

        let settings = resolver.resolve(&Invocation::Defaults).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.mode, QueryMode::Forecast);
        assert_eq!(settings.forecast_days.get(), 7);
    }
}
