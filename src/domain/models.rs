use serde::{Deserialize, Serialize};

/// A single reminder as stored in the reminder file.
///
/// The backing file is a JSON array of these objects. Older files were
/// written before the `completed` field existed, so it defaults to `false`
/// when absent; the default is applied on load and only reaches disk on the
/// next save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    /// What the reminder is about
    pub task: String,
    /// Due moment as text, either "YYYY-MM-DD HH:MM" or "YYYY-MM-DD"
    pub time: String,
    /// Whether the user has marked this reminder done
    #[serde(default)]
    pub completed: bool,
}

impl Reminder {
    /// Creates a new, not-yet-completed reminder with a trimmed task label.
    pub fn new(task: &str, time: impl Into<String>) -> Self {
        Self {
            task: task.trim().to_string(),
            time: time.into(),
            completed: false,
        }
    }
}

/// One expense row in the expense CSV.
///
/// Serde renames pin the on-disk header row to `Item,Amount,Date` in that
/// order. `date` stays a plain string and is never reinterpreted as a
/// native date type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    #[serde(rename = "Item")]
    pub item: String,
    #[serde(rename = "Amount")]
    pub amount: f64,
    #[serde(rename = "Date")]
    pub date: String,
}

impl Expense {
    pub fn new(item: impl Into<String>, amount: f64, date: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            amount,
            date: date.into(),
        }
    }
}

/// A restaurant row from the static catalog CSV.
///
/// The catalog is read-only reference data; rows are never written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub cuisine: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "localAddress", default)]
    pub local_address: String,
    #[serde(default)]
    pub phone: String,
}

/// Current conditions for one city, as returned by the weather provider.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: f64,
    /// Title-cased description, e.g. "Scattered Clouds"
    pub condition: String,
    /// Coarse condition group from the provider, e.g. "Clouds" or "Rain"
    pub condition_group: String,
}

/// One headline from the news provider. Upstream may omit either field,
/// in which case it arrives here as empty text.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsArticle {
    pub title: String,
    pub description: String,
}
