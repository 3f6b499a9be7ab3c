//! Runtime configuration from the environment

use crate::router::Route;
use kantin_store::{AppName, LocalStore};
use std::path::PathBuf;

pub const DATA_DIR_VAR: &str = "KANTIN_DATA_DIR";
pub const START_SCREEN_VAR: &str = "KANTIN_START_SCREEN";
pub const LOG_VAR: &str = "RUST_LOG";

pub const DEFAULT_LOG_FILTER: &str = "kantin_dashboard=info,kantin_store=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub app_name: AppName,
    /// Store directory override; the platform directory is used when unset
    pub data_dir: Option<PathBuf>,
    pub start_route: Route,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: AppName::new("id.sch", "smktelkom", "kantin"),
            data_dir: None,
            start_route: Route::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Self {
            data_dir: get(DATA_DIR_VAR).map(PathBuf::from),
            start_route: get(START_SCREEN_VAR)
                .map(|tag| Route::parse(&tag))
                .unwrap_or(defaults.start_route),
            log_filter: get(LOG_VAR).unwrap_or(defaults.log_filter),
            app_name: defaults.app_name,
        }
    }

    /// The store this configuration points at.
    pub fn store(&self) -> LocalStore {
        match &self.data_dir {
            Some(dir) => LocalStore::at(dir),
            None => LocalStore::new(&self.app_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::Screen;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(Config::from_lookup(|_| None), Config::default());
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::from_lookup(lookup(&[
            (DATA_DIR_VAR, "/tmp/kantin"),
            (START_SCREEN_VAR, "admins"),
            (LOG_VAR, "debug"),
        ]));

        assert_eq!(config.start_route, Route::Screen(Screen::Admins));
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.store().dir(), std::path::Path::new("/tmp/kantin"));
    }

    #[test]
    fn unknown_start_screen_is_kept_unmatched() {
        let config = Config::from_lookup(lookup(&[(START_SCREEN_VAR, "laporan")]));
        assert_eq!(config.start_route, Route::Unmatched("laporan".into()));
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = Config::from_lookup(lookup(&[(DATA_DIR_VAR, "  ")]));
        assert_eq!(config.data_dir, None);
    }
}
