//! Core domain logic for the life hub.
//!
//! This module holds the pure computations behind the dashboard pages:
//! due-reminder evaluation, spending insights over the expense table, and
//! restaurant catalog queries. Nothing here touches the filesystem or the
//! network; the infrastructure layer feeds data in and persists results.

use super::models::{Expense, Reminder, Restaurant};
use chrono::{NaiveDate, NaiveDateTime};
use rand::seq::SliceRandom;

/// Format for reminders carrying a specific minute.
pub const TIMED_FORMAT: &str = "%Y-%m-%d %H:%M";
/// Format for all-day reminders.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A reminder timestamp parsed from its stored text form.
///
/// Reminder times are stored as text in one of two fixed shapes. A timed
/// reminder becomes due at its exact minute; an all-day reminder is due for
/// the whole calendar day. That asymmetry (midnight vs exact minute) is
/// long-standing observable behavior and is kept on purpose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReminderTime {
    /// "YYYY-MM-DD HH:MM" - compared against the full instant
    Timed(NaiveDateTime),
    /// "YYYY-MM-DD" - compared by calendar date only
    AllDay(NaiveDate),
}

impl ReminderTime {
    /// Parses stored reminder text, trying the timed format first and
    /// falling back to date-only.
    ///
    /// Returns `None` when the text matches neither format. Callers treat
    /// `None` as "skip this record": an unparseable timestamp never makes a
    /// reminder due and never raises an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use lifehub::domain::ReminderTime;
    ///
    /// assert!(matches!(ReminderTime::parse("2024-01-01 09:00"), Some(ReminderTime::Timed(_))));
    /// assert!(matches!(ReminderTime::parse("2024-01-01"), Some(ReminderTime::AllDay(_))));
    /// assert_eq!(ReminderTime::parse("not-a-date"), None);
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, TIMED_FORMAT) {
            return Some(ReminderTime::Timed(dt));
        }
        if let Ok(d) = NaiveDate::parse_from_str(text, DATE_FORMAT) {
            return Some(ReminderTime::AllDay(d));
        }
        None
    }

    /// Whether this timestamp has arrived relative to `now`.
    ///
    /// Timed values compare full instants; all-day values compare calendar
    /// dates, so an all-day reminder is already due at local midnight.
    pub fn is_due(&self, now: NaiveDateTime) -> bool {
        match self {
            ReminderTime::Timed(dt) => *dt <= now,
            ReminderTime::AllDay(d) => *d <= now.date(),
        }
    }
}

/// Returns the task text of every due, incomplete reminder, in stored order.
///
/// Completed reminders are never due, whatever their timestamp. Records
/// whose `time` text matches neither supported format are silently skipped.
pub fn due_reminders(reminders: &[Reminder], now: NaiveDateTime) -> Vec<String> {
    reminders
        .iter()
        .filter(|r| !r.completed)
        .filter(|r| ReminderTime::parse(&r.time).is_some_and(|t| t.is_due(now)))
        .map(|r| r.task.clone())
        .collect()
}

/// Counts reminders not yet marked completed.
pub fn pending_count(reminders: &[Reminder]) -> usize {
    reminders.iter().filter(|r| !r.completed).count()
}

/// Sum of all expense amounts.
pub fn total_spent(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

/// Builds the human-readable spending summary lines.
///
/// An empty table yields exactly one "no expenses" line. Otherwise the
/// lines come in a fixed order: total, average, count, most expensive row,
/// cheapest row. Ties on amount go to the first occurrence. Values are
/// truncated to two decimals for display only; no rounding is applied to
/// stored amounts.
///
/// # Examples
///
/// ```
/// use lifehub::domain::{spending_insights, Expense};
///
/// let insights = spending_insights(&[Expense::new("Tea", 20.0, "2024-01-01")]);
/// assert_eq!(insights.len(), 5);
/// assert!(insights[0].contains("20.00"));
/// ```
pub fn spending_insights(expenses: &[Expense]) -> Vec<String> {
    if expenses.is_empty() {
        return vec!["No expenses yet to analyze".to_string()];
    }

    let total = total_spent(expenses);
    let avg = total / expenses.len() as f64;

    let mut insights = vec![
        format!("💰 Total spent: ₹{:.2}", total),
        format!("📊 Average per expense: ₹{:.2}", avg),
        format!("📝 Total expenses: {}", expenses.len()),
    ];

    // Strict comparisons keep the first occurrence on ties.
    let mut max = &expenses[0];
    let mut min = &expenses[0];
    for expense in &expenses[1..] {
        if expense.amount > max.amount {
            max = expense;
        }
        if expense.amount < min.amount {
            min = expense;
        }
    }

    insights.push(format!("🔥 Most expensive: {} - ₹{:.2}", max.item, max.amount));
    insights.push(format!("💸 Cheapest: {} - ₹{:.2}", min.item, min.amount));

    insights
}

/// Filters the catalog by cuisine/description substring and minimum rating.
///
/// The query matches case-insensitively against either the cuisine or the
/// description column. Results come back sorted by rating, best first.
pub fn search_restaurants<'a>(
    restaurants: &'a [Restaurant],
    query: &str,
    min_rating: f64,
) -> Vec<&'a Restaurant> {
    let needle = query.to_lowercase();
    let mut results: Vec<&Restaurant> = restaurants
        .iter()
        .filter(|r| {
            r.cuisine.to_lowercase().contains(&needle)
                || r.description.to_lowercase().contains(&needle)
        })
        .filter(|r| r.rating >= min_rating)
        .collect();
    results.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(std::cmp::Ordering::Equal));
    results
}

/// Cuisine suggestions for a named occasion.
///
/// Unknown occasions fall back to a generic trio.
pub fn occasion_suggestions(occasion: &str) -> Vec<&'static str> {
    match occasion {
        "Romantic Dinner" => vec!["Fine Dining", "Italian", "French", "Candle Light"],
        "Family Dinner" => vec!["North Indian", "Chinese", "Multi-cuisine", "Vegetarian"],
        "Business Lunch" => vec!["Quick Bites", "Cafe", "Sandwiches", "Salads"],
        "Birthday Party" => vec!["Pub", "Barbeque", "Multi-cuisine", "Desserts"],
        "Quick Lunch" => vec!["Fast Food", "South Indian", "Street Food", "Snacks"],
        "Date Night" => vec!["Italian", "Chinese", "Continental", "Wine Bar"],
        _ => vec!["Indian", "Chinese", "Italian"],
    }
}

/// Suggests up to three cuisines from the catalog that contain the query.
///
/// Used when a search comes back empty. Cuisine cells hold comma-separated
/// lists, so each cell is split before matching.
pub fn similar_cuisines(restaurants: &[Restaurant], query: &str) -> Vec<String> {
    let needle = query.to_lowercase();
    let mut seen = Vec::new();
    for restaurant in restaurants {
        for cuisine in restaurant.cuisine.split(',') {
            let cuisine = cuisine.trim();
            if cuisine.is_empty() || !cuisine.to_lowercase().contains(&needle) {
                continue;
            }
            if !seen.iter().any(|s: &String| s.eq_ignore_ascii_case(cuisine)) {
                seen.push(cuisine.to_string());
                if seen.len() == 3 {
                    return seen;
                }
            }
        }
    }
    seen
}

/// Picks a random restaurant, preferring well-rated ones (rating >= 4.0).
///
/// Falls back to the whole catalog when nothing clears the bar, and to
/// `None` only when the catalog itself is empty.
pub fn lucky_pick(restaurants: &[Restaurant]) -> Option<&Restaurant> {
    let mut rng = rand::thread_rng();
    let good: Vec<&Restaurant> = restaurants.iter().filter(|r| r.rating >= 4.0).collect();
    if let Some(pick) = good.choose(&mut rng) {
        return Some(*pick);
    }
    restaurants.choose(&mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reminder(task: &str, time: &str, completed: bool) -> Reminder {
        Reminder {
            task: task.to_string(),
            time: time.to_string(),
            completed,
        }
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_timed_format() {
        let parsed = ReminderTime::parse("2024-01-01 09:00");
        match parsed {
            Some(ReminderTime::Timed(dt)) => {
                assert_eq!(dt.format("%Y-%m-%d %H:%M").to_string(), "2024-01-01 09:00");
            }
            other => panic!("expected timed, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_date_only_format() {
        let parsed = ReminderTime::parse("2024-01-01");
        assert_eq!(
            parsed,
            Some(ReminderTime::AllDay(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(ReminderTime::parse("not-a-date"), None);
        assert_eq!(ReminderTime::parse(""), None);
        assert_eq!(ReminderTime::parse("2024/01/01"), None);
        assert_eq!(ReminderTime::parse("2024-01-01 09:00:00"), None);
    }

    #[test]
    fn test_due_reminders_mixed_formats() {
        // Past timed and past date-only are due; future and unparseable are not.
        let reminders = vec![
            reminder("past timed", "2024-01-01 09:00", false),
            reminder("future timed", "2099-01-01 09:00", false),
            reminder("past all-day", "2024-01-01", false),
            reminder("broken", "not-a-date", false),
        ];
        let due = due_reminders(&reminders, now());
        assert_eq!(due, vec!["past timed".to_string(), "past all-day".to_string()]);
    }

    #[test]
    fn test_all_day_reminder_due_at_midnight() {
        // Date-only compares calendar dates, so today's all-day reminder is
        // already due at 00:00 even though a timed 09:00 one is not.
        let reminders = vec![
            reminder("all-day today", "2024-06-01", false),
            reminder("timed today", "2024-06-01 09:00", false),
        ];
        let due = due_reminders(&reminders, now());
        assert_eq!(due, vec!["all-day today".to_string()]);
    }

    #[test]
    fn test_completed_reminders_never_due() {
        let reminders = vec![reminder("done long ago", "2020-01-01 09:00", true)];
        assert!(due_reminders(&reminders, now()).is_empty());
    }

    #[test]
    fn test_due_reminders_preserve_stored_order() {
        let reminders = vec![
            reminder("b", "2023-05-01", false),
            reminder("a", "2021-01-01 08:00", false),
            reminder("c", "2022-12-31", false),
        ];
        let due = due_reminders(&reminders, now());
        assert_eq!(due, vec!["b".to_string(), "a".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_pending_count() {
        let reminders = vec![
            reminder("a", "2024-01-01", false),
            reminder("b", "2024-01-02", true),
            reminder("c", "2024-01-03", false),
        ];
        assert_eq!(pending_count(&reminders), 2);
    }

    #[test]
    fn test_spending_insights_values() {
        let expenses = vec![
            Expense::new("Tea", 20.0, "2024-01-01"),
            Expense::new("Lunch", 150.0, "2024-01-02"),
        ];
        let insights = spending_insights(&expenses);
        assert_eq!(insights.len(), 5);
        assert!(insights[0].contains("170.00"), "total: {}", insights[0]);
        assert!(insights[1].contains("85.00"), "average: {}", insights[1]);
        assert!(insights[2].contains('2'), "count: {}", insights[2]);
        assert!(insights[3].contains("Lunch - ₹150.00"), "max: {}", insights[3]);
        assert!(insights[4].contains("Tea - ₹20.00"), "min: {}", insights[4]);
    }

    #[test]
    fn test_spending_insights_empty_table() {
        let insights = spending_insights(&[]);
        assert_eq!(insights, vec!["No expenses yet to analyze".to_string()]);
    }

    #[test]
    fn test_spending_insights_ties_keep_first_occurrence() {
        let expenses = vec![
            Expense::new("First", 50.0, "2024-01-01"),
            Expense::new("Second", 50.0, "2024-01-02"),
        ];
        let insights = spending_insights(&expenses);
        assert!(insights[3].contains("First"));
        assert!(insights[4].contains("First"));
    }

    fn catalog() -> Vec<Restaurant> {
        let mk = |name: &str, rating: f64, cuisine: &str, description: &str| Restaurant {
            name: name.to_string(),
            rating,
            cuisine: cuisine.to_string(),
            description: description.to_string(),
            local_address: String::new(),
            phone: String::new(),
        };
        vec![
            mk("Truffles", 4.6, "Italian, Continental", "Famous for burgers"),
            mk("MTR", 4.2, "South Indian", "Legendary dosa"),
            mk("Empire", 3.8, "North Indian, Chinese", "Late night biryani"),
            mk("Toit", 4.5, "Pub", "Craft beer and italian style pizza"),
        ]
    }

    #[test]
    fn test_search_matches_cuisine_or_description() {
        let restaurants = catalog();
        let hits = search_restaurants(&restaurants, "italian", 0.0);
        let names: Vec<&str> = hits.iter().map(|r| r.name.as_str()).collect();
        // Truffles matches on cuisine, Toit on description; sorted by rating.
        assert_eq!(names, vec!["Truffles", "Toit"]);
    }

    #[test]
    fn test_search_applies_rating_threshold() {
        let restaurants = catalog();
        assert!(search_restaurants(&restaurants, "Chinese", 4.0).is_empty());
        assert_eq!(search_restaurants(&restaurants, "Chinese", 3.0).len(), 1);
    }

    #[test]
    fn test_search_sorts_by_rating_descending() {
        let restaurants = catalog();
        let hits = search_restaurants(&restaurants, "", 0.0);
        let ratings: Vec<f64> = hits.iter().map(|r| r.rating).collect();
        assert_eq!(ratings, vec![4.6, 4.5, 4.2, 3.8]);
    }

    #[test]
    fn test_occasion_suggestions_known_and_fallback() {
        assert_eq!(occasion_suggestions("Date Night")[0], "Italian");
        assert_eq!(occasion_suggestions("Unknown"), vec!["Indian", "Chinese", "Italian"]);
    }

    #[test]
    fn test_similar_cuisines_splits_and_dedupes() {
        let restaurants = catalog();
        let similar = similar_cuisines(&restaurants, "indian");
        assert_eq!(similar, vec!["South Indian".to_string(), "North Indian".to_string()]);
    }

    #[test]
    fn test_lucky_pick_prefers_good_ratings() {
        let restaurants = catalog();
        for _ in 0..20 {
            let pick = lucky_pick(&restaurants).unwrap();
            assert!(pick.rating >= 4.0);
        }
    }

    #[test]
    fn test_lucky_pick_empty_catalog() {
        assert!(lucky_pick(&[]).is_none());
    }

    #[test]
    fn test_lucky_pick_falls_back_below_threshold() {
        let restaurants = vec![Restaurant {
            name: "Only option".to_string(),
            rating: 2.0,
            cuisine: String::new(),
            description: String::new(),
            local_address: String::new(),
            phone: String::new(),
        }];
        assert_eq!(lucky_pick(&restaurants).unwrap().name, "Only option");
    }
}
