//! Flat-file stores for reminders and expenses.
//!
//! Each store owns exactly one backing file and keeps no state in memory:
//! every operation reads the whole file, works on the decoded records, and
//! (for mutations) rewrites the whole file. An absent file means an empty
//! store; a present-but-unparseable file is a `Malformed` error that
//! propagates. Writes are plain overwrites, so concurrent writers race with
//! last-writer-wins semantics - an accepted property of the flat-file
//! design, not something the stores detect.

use crate::domain::{
    due_reminders, Expense, Reminder, Restaurant, StoreError, StoreResult,
};
use chrono::NaiveDateTime;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// JSON-array-backed reminder store.
///
/// # Examples
///
/// ```no_run
/// use lifehub::infrastructure::ReminderStore;
///
/// let store = ReminderStore::new("reminders.json");
/// store.add("Call Mom", "2024-06-01 09:00").unwrap();
/// let reminders = store.load().unwrap();
/// assert_eq!(reminders[0].task, "Call Mom");
/// ```
pub struct ReminderStore {
    path: PathBuf,
}

impl ReminderStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads all reminders from the backing file.
    ///
    /// An absent file is an empty store and is never created as a side
    /// effect. Records missing the `completed` field come back with it set
    /// to `false` (serde default at the deserialization boundary).
    pub fn load(&self) -> StoreResult<Vec<Reminder>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Io(e.to_string())),
        };
        serde_json::from_str(&content).map_err(|e| StoreError::Malformed(e.to_string()))
    }

    /// Rewrites the backing file with the full reminder list.
    ///
    /// This is a direct overwrite, not an atomic rename; between two
    /// interleaved load-mutate-save cycles the later save wins.
    pub fn save(&self, reminders: &[Reminder]) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(reminders)
            .map_err(|e| StoreError::Malformed(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| StoreError::Io(e.to_string()))
    }

    /// Appends one new, incomplete reminder and persists the whole list.
    ///
    /// The task label is trimmed; the time text is stored as given.
    pub fn add(&self, task: &str, time_text: &str) -> StoreResult<()> {
        let mut reminders = self.load()?;
        reminders.push(Reminder::new(task, time_text));
        self.save(&reminders)
    }

    /// Returns the task text of every due, incomplete reminder in stored
    /// order, evaluated against `now`.
    ///
    /// Records with an unparseable `time` are silently skipped.
    pub fn due_now(&self, now: NaiveDateTime) -> StoreResult<Vec<String>> {
        Ok(due_reminders(&self.load()?, now))
    }
}

/// CSV-backed expense store with the fixed header `Item,Amount,Date`.
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads all expense rows. An absent file is an empty table; a file
    /// that exists but cannot be parsed as the expected CSV is `Malformed`.
    pub fn load(&self) -> StoreResult<Vec<Expense>> {
        let mut reader = match csv::Reader::from_path(&self.path) {
            Ok(reader) => reader,
            Err(e) => {
                if let csv::ErrorKind::Io(io) = e.kind() {
                    if io.kind() == ErrorKind::NotFound {
                        return Ok(Vec::new());
                    }
                }
                return Err(StoreError::Io(e.to_string()));
            }
        };
        let mut expenses = Vec::new();
        for row in reader.deserialize() {
            let expense: Expense = row.map_err(|e| StoreError::Malformed(e.to_string()))?;
            expenses.push(expense);
        }
        Ok(expenses)
    }

    /// Rewrites the backing file with the full table, headers first.
    pub fn save(&self, expenses: &[Expense]) -> StoreResult<()> {
        let mut writer =
            csv::Writer::from_path(&self.path).map_err(|e| StoreError::Io(e.to_string()))?;
        for expense in expenses {
            writer
                .serialize(expense)
                .map_err(|e| StoreError::Malformed(e.to_string()))?;
        }
        writer.flush().map_err(|e| StoreError::Io(e.to_string()))
    }

    /// Parses the amount, appends one row, and rewrites the table.
    ///
    /// A non-numeric or negative amount fails with `InvalidAmount` before
    /// any file I/O, so the backing file is untouched on failure. The date
    /// text is stored exactly as given; its shape is the caller's concern.
    pub fn add(&self, item: &str, amount_text: &str, date_text: &str) -> StoreResult<()> {
        let amount = parse_amount(amount_text)?;
        let mut expenses = self.load()?;
        expenses.push(Expense::new(item, amount, date_text));
        self.save(&expenses)
    }
}

/// Validates expense amount text: a finite, non-negative number.
fn parse_amount(text: &str) -> StoreResult<f64> {
    let amount: f64 = text
        .trim()
        .parse()
        .map_err(|_| StoreError::InvalidAmount(text.to_string()))?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(StoreError::InvalidAmount(text.to_string()));
    }
    Ok(amount)
}

/// Read-only loader for the static restaurant catalog CSV.
///
/// The catalog is external reference data, not owned state: any failure to
/// open or read it degrades to an empty catalog, and rows that do not fit
/// the expected columns are skipped rather than failing the load.
pub struct RestaurantCatalog;

impl RestaurantCatalog {
    pub fn load(path: impl AsRef<Path>) -> Vec<Restaurant> {
        let Ok(mut reader) = csv::Reader::from_path(path.as_ref()) else {
            return Vec::new();
        };
        reader
            .deserialize()
            .filter_map(|row| row.ok())
            .collect()
    }
}
