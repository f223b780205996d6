//! Runtime configuration for the life hub.
//!
//! Everything the rest of the application needs from the environment is
//! gathered here once at startup and passed around as a value. No module
//! reads `std::env` on its own and there is no process-wide singleton.

use std::env;
use std::path::PathBuf;

/// File locations and provider credentials.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON array of reminders
    pub reminder_file: PathBuf,
    /// CSV table of expenses
    pub expense_file: PathBuf,
    /// Static restaurant catalog CSV
    pub restaurant_file: PathBuf,
    /// OpenWeatherMap key, absent when weather lookups should fail fast
    pub weather_api_key: Option<String>,
    /// newsdata.io key
    pub news_api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reminder_file: PathBuf::from("reminders.json"),
            expense_file: PathBuf::from("expenses.csv"),
            restaurant_file: PathBuf::from("Bengaluru_Restaurants.csv"),
            weather_api_key: None,
            news_api_key: None,
        }
    }
}

impl Config {
    /// Builds the default configuration with API keys taken from the
    /// `WEATHER_API_KEY` and `NEWS_API_KEY` environment variables.
    ///
    /// Empty values count as unset, so a blank export behaves the same as
    /// no export at all.
    pub fn from_env() -> Self {
        Self {
            weather_api_key: non_empty_var("WEATHER_API_KEY"),
            news_api_key: non_empty_var("NEWS_API_KEY"),
            ..Self::default()
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = Config::default();
        assert_eq!(config.reminder_file, PathBuf::from("reminders.json"));
        assert_eq!(config.expense_file, PathBuf::from("expenses.csv"));
        assert!(config.weather_api_key.is_none());
        assert!(config.news_api_key.is_none());
    }
}
