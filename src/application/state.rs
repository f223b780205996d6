//! Application state management for the life hub dashboard.
//!
//! This module contains the main application state: the current page, the
//! active input form, cached store contents, and the results of the latest
//! collaborator calls. All mutation funnels through here; the presentation
//! layer only reads this state and forwards key events.

use crate::application::Config;
use crate::domain::{
    due_reminders, lucky_pick, occasion_suggestions, pending_count, search_restaurants,
    similar_cuisines, spending_insights, total_spent, Expense, FetchResult, NewsArticle,
    Reminder, Restaurant, WeatherReport,
};
use crate::infrastructure::{
    ExpenseStore, NewsClient, ReminderStore, RestaurantCatalog, WeatherClient,
};
use chrono::Local;

/// The dashboard pages, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Reminders,
    Expenses,
    WeatherNews,
    Restaurants,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Reminders,
        Page::Expenses,
        Page::WeatherNews,
        Page::Restaurants,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Reminders => "Reminders",
            Page::Expenses => "Expenses",
            Page::WeatherNews => "Weather & News",
            Page::Restaurants => "Restaurants",
        }
    }

    pub fn next(&self) -> Page {
        let idx = Page::ALL.iter().position(|p| p == self).unwrap_or(0);
        Page::ALL[(idx + 1) % Page::ALL.len()]
    }

    pub fn previous(&self) -> Page {
        let idx = Page::ALL.iter().position(|p| p == self).unwrap_or(0);
        Page::ALL[(idx + Page::ALL.len() - 1) % Page::ALL.len()]
    }
}

/// Occasions the restaurant page can suggest cuisines for, in cycle order.
pub const OCCASIONS: [&str; 6] = [
    "Romantic Dinner",
    "Family Dinner",
    "Business Lunch",
    "Birthday Party",
    "Quick Lunch",
    "Date Night",
];

/// Which reminders the reminders page lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderView {
    All,
    Pending,
    Completed,
}

impl ReminderView {
    pub fn cycle(&self) -> ReminderView {
        match self {
            ReminderView::All => ReminderView::Pending,
            ReminderView::Pending => ReminderView::Completed,
            ReminderView::Completed => ReminderView::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReminderView::All => "All",
            ReminderView::Pending => "Pending",
            ReminderView::Completed => "Completed",
        }
    }

    fn matches(&self, reminder: &Reminder) -> bool {
        match self {
            ReminderView::All => true,
            ReminderView::Pending => !reminder.completed,
            ReminderView::Completed => reminder.completed,
        }
    }
}

/// Current input mode of the application.
///
/// Normal mode navigates; the form modes collect one or more text fields
/// before committing an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Navigation mode - page switching and per-page shortcuts
    Normal,
    /// Help screen is displayed
    Help,
    /// Collecting task / date / time for a new reminder
    AddReminder,
    /// Collecting item / amount / date for a new expense
    AddExpense,
    /// Collecting the city for a weather lookup
    CityInput,
    /// Collecting query / minimum rating for a restaurant search
    RestaurantSearch,
}

/// Main application state for the dashboard.
///
/// Store contents are cached here between refreshes; the stores themselves
/// stay stateless and are re-read on every mutation, so the cache is only a
/// render snapshot, never the source of truth.
pub struct App {
    /// Currently displayed page
    pub page: Page,
    /// Current input mode
    pub mode: AppMode,
    /// Snapshot of the reminder file
    pub reminders: Vec<Reminder>,
    /// Snapshot of the expense file
    pub expenses: Vec<Expense>,
    /// Read-only restaurant catalog, loaded once at startup
    pub restaurants: Vec<Restaurant>,
    /// Task text of reminders due right now
    pub notifications: Vec<String>,
    /// Spending summary lines for the expenses page
    pub insights: Vec<String>,
    /// Active filter on the reminders page
    pub reminder_view: ReminderView,
    /// Selection index into the filtered reminder list
    pub selected_reminder: usize,
    /// Latest successful weather lookup
    pub weather: Option<WeatherReport>,
    /// Latest fetched headlines
    pub headlines: Vec<NewsArticle>,
    /// City used for weather lookups
    pub city: String,
    /// Results of the latest restaurant search
    pub search_results: Vec<Restaurant>,
    /// Cuisine suggestions offered after an empty search
    pub search_suggestions: Vec<String>,
    /// Latest "feeling lucky" pick
    pub lucky: Option<Restaurant>,
    /// Which occasion the next occasion-search will use
    pub occasion_index: usize,
    /// Temporary status message shown in the status bar
    pub status_message: Option<String>,
    /// Text buffers for the active form, one per field
    pub form_fields: Vec<String>,
    /// Index of the field currently being edited
    pub form_index: usize,
    /// Cursor position within the active field
    pub cursor_position: usize,
    /// Scroll position in help text
    pub help_scroll: usize,
    reminder_store: ReminderStore,
    expense_store: ExpenseStore,
    weather_client: WeatherClient,
    news_client: NewsClient,
}

impl App {
    /// Builds the application from an explicit configuration value and
    /// takes the initial snapshot of both stores.
    pub fn new(config: Config) -> Self {
        let restaurants = RestaurantCatalog::load(&config.restaurant_file);
        let mut app = Self {
            page: Page::Home,
            mode: AppMode::Normal,
            reminders: Vec::new(),
            expenses: Vec::new(),
            restaurants,
            notifications: Vec::new(),
            insights: Vec::new(),
            reminder_view: ReminderView::All,
            selected_reminder: 0,
            weather: None,
            headlines: Vec::new(),
            city: "Bangalore".to_string(),
            search_results: Vec::new(),
            search_suggestions: Vec::new(),
            lucky: None,
            occasion_index: 0,
            status_message: None,
            form_fields: Vec::new(),
            form_index: 0,
            cursor_position: 0,
            help_scroll: 0,
            reminder_store: ReminderStore::new(config.reminder_file),
            expense_store: ExpenseStore::new(config.expense_file),
            weather_client: WeatherClient::new(config.weather_api_key),
            news_client: NewsClient::new(config.news_api_key),
        };
        app.refresh();
        app
    }

    /// Re-reads both stores and recomputes the derived views
    /// (notifications, insights). A malformed backing file surfaces in the
    /// status bar and leaves the previous snapshot in place.
    pub fn refresh(&mut self) {
        match self.reminder_store.load() {
            Ok(reminders) => {
                self.notifications = due_reminders(&reminders, Local::now().naive_local());
                self.reminders = reminders;
            }
            Err(e) => self.status_message = Some(e.to_string()),
        }
        match self.expense_store.load() {
            Ok(expenses) => {
                self.insights = spending_insights(&expenses);
                self.expenses = expenses;
            }
            Err(e) => self.status_message = Some(e.to_string()),
        }
        let filtered = self.visible_reminders().len();
        if self.selected_reminder >= filtered {
            self.selected_reminder = filtered.saturating_sub(1);
        }
    }

    /// Reminders not yet marked completed.
    pub fn pending_reminders(&self) -> usize {
        pending_count(&self.reminders)
    }

    /// Sum of all recorded expenses.
    pub fn total_spent(&self) -> f64 {
        total_spent(&self.expenses)
    }

    /// Indices into `reminders` matching the active view filter.
    pub fn visible_reminders(&self) -> Vec<usize> {
        self.reminders
            .iter()
            .enumerate()
            .filter(|(_, r)| self.reminder_view.matches(r))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn cycle_reminder_view(&mut self) {
        self.reminder_view = self.reminder_view.cycle();
        self.selected_reminder = 0;
    }

    pub fn select_previous_reminder(&mut self) {
        if self.selected_reminder > 0 {
            self.selected_reminder -= 1;
        }
    }

    pub fn select_next_reminder(&mut self) {
        let visible = self.visible_reminders().len();
        if visible > 0 && self.selected_reminder < visible - 1 {
            self.selected_reminder += 1;
        }
    }

    /// Flips the completed flag on the selected reminder and persists the
    /// whole list, then refreshes the snapshot.
    pub fn toggle_selected_reminder(&mut self) {
        let visible = self.visible_reminders();
        let Some(&index) = visible.get(self.selected_reminder) else {
            return;
        };
        self.reminders[index].completed = !self.reminders[index].completed;
        match self.reminder_store.save(&self.reminders) {
            Ok(()) => self.refresh(),
            Err(e) => self.status_message = Some(e.to_string()),
        }
    }

    /// Labels for the active form's fields, for rendering.
    pub fn form_labels(&self) -> &'static [&'static str] {
        match self.mode {
            AppMode::AddReminder => &["Task", "Date (YYYY-MM-DD)", "Time (HH:MM, blank = all day)"],
            AppMode::AddExpense => &["Item", "Amount (₹)", "Date (YYYY-MM-DD)"],
            AppMode::CityInput => &["City"],
            AppMode::RestaurantSearch => &["Cuisine or type", "Minimum rating"],
            _ => &[],
        }
    }

    /// Opens the add-reminder form with today's date and a 09:00 default.
    pub fn start_add_reminder(&mut self) {
        self.mode = AppMode::AddReminder;
        let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
        self.open_form(vec![String::new(), today, "09:00".to_string()]);
    }

    /// Opens the add-expense form with today's date prefilled.
    pub fn start_add_expense(&mut self) {
        self.mode = AppMode::AddExpense;
        let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
        self.open_form(vec![String::new(), String::new(), today]);
    }

    /// Opens the weather city prompt with the current city prefilled.
    pub fn start_city_input(&mut self) {
        self.mode = AppMode::CityInput;
        let city = self.city.clone();
        self.open_form(vec![city]);
    }

    /// Opens the restaurant search form with the original defaults.
    pub fn start_restaurant_search(&mut self) {
        self.mode = AppMode::RestaurantSearch;
        self.open_form(vec!["Indian".to_string(), "4.0".to_string()]);
    }

    /// Seeds a restaurant search from an occasion or similar-cuisine
    /// suggestion, with the query prefilled.
    pub fn start_search_with_query(&mut self, query: &str) {
        self.mode = AppMode::RestaurantSearch;
        self.open_form(vec![query.to_string(), "4.0".to_string()]);
    }

    /// Opens a search seeded with the current occasion's first suggested
    /// cuisine, then advances to the next occasion for the following press.
    pub fn occasion_search(&mut self) {
        let occasion = OCCASIONS[self.occasion_index % OCCASIONS.len()];
        self.occasion_index = (self.occasion_index + 1) % OCCASIONS.len();
        let suggestion = occasion_suggestions(occasion)[0];
        self.start_search_with_query(suggestion);
        self.status_message = Some(format!("{}: try {}", occasion, suggestion));
    }

    fn open_form(&mut self, fields: Vec<String>) {
        self.form_index = 0;
        self.cursor_position = fields[0].len();
        self.form_fields = fields;
        self.status_message = None;
    }

    /// Discards the active form and returns to normal mode.
    pub fn cancel_form(&mut self) {
        self.mode = AppMode::Normal;
        self.form_fields.clear();
        self.form_index = 0;
        self.cursor_position = 0;
    }

    /// Advances to the next form field, or commits when the last field is
    /// active.
    pub fn submit_form_field(&mut self) {
        if self.form_index + 1 < self.form_fields.len() {
            self.form_index += 1;
            self.cursor_position = self.form_fields[self.form_index].len();
            return;
        }
        match self.mode {
            AppMode::AddReminder => self.finish_add_reminder(),
            AppMode::AddExpense => self.finish_add_expense(),
            AppMode::CityInput => self.finish_city_input(),
            AppMode::RestaurantSearch => self.finish_restaurant_search(),
            _ => {}
        }
    }

    /// Moves back one form field without losing what was typed.
    pub fn previous_form_field(&mut self) {
        if self.form_index > 0 {
            self.form_index -= 1;
            self.cursor_position = self.form_fields[self.form_index].len();
        }
    }

    fn finish_add_reminder(&mut self) {
        let task = self.form_fields[0].trim().to_string();
        if task.is_empty() {
            self.status_message = Some("Reminder text is required".to_string());
            self.cancel_form();
            return;
        }
        let date = self.form_fields[1].trim();
        let time = self.form_fields[2].trim();
        let time_text = if time.is_empty() {
            date.to_string()
        } else {
            format!("{} {}", date, time)
        };
        let result = self.reminder_store.add(&task, &time_text);
        self.cancel_form();
        match result {
            Ok(()) => {
                self.status_message = Some(format!("Reminder added: {}", task));
                self.refresh();
            }
            Err(e) => self.status_message = Some(e.to_string()),
        }
    }

    fn finish_add_expense(&mut self) {
        let item = self.form_fields[0].trim().to_string();
        if item.is_empty() {
            self.status_message = Some("Expense item is required".to_string());
            self.cancel_form();
            return;
        }
        let amount = self.form_fields[1].clone();
        let date = self.form_fields[2].trim().to_string();
        let result = self.expense_store.add(&item, &amount, &date);
        self.cancel_form();
        match result {
            Ok(()) => {
                self.status_message = Some(format!("Added: {} on {}", item, date));
                self.refresh();
            }
            Err(e) => self.status_message = Some(e.to_string()),
        }
    }

    fn finish_city_input(&mut self) {
        let city = self.form_fields[0].trim().to_string();
        self.cancel_form();
        if city.is_empty() {
            return;
        }
        self.city = city;
        self.fetch_weather();
    }

    fn finish_restaurant_search(&mut self) {
        let query = self.form_fields[0].trim().to_string();
        let min_rating: f64 = self.form_fields[1].trim().parse().unwrap_or(0.0);
        self.cancel_form();
        self.run_restaurant_search(&query, min_rating);
    }

    /// Runs a catalog search, caching either the hits or cuisine
    /// suggestions for the empty case.
    pub fn run_restaurant_search(&mut self, query: &str, min_rating: f64) {
        let hits = search_restaurants(&self.restaurants, query, min_rating);
        if hits.is_empty() {
            self.search_results = Vec::new();
            self.search_suggestions = similar_cuisines(&self.restaurants, query);
            self.status_message = Some(format!("No restaurants found for '{}'", query));
        } else {
            self.status_message = Some(format!("Found {} restaurants", hits.len()));
            self.search_results = hits.into_iter().cloned().collect();
            self.search_suggestions = Vec::new();
        }
    }

    /// Picks a random well-rated restaurant from the catalog.
    pub fn feeling_lucky(&mut self) {
        match lucky_pick(&self.restaurants) {
            Some(pick) => self.lucky = Some(pick.clone()),
            None => self.status_message = Some("Restaurant database not available".to_string()),
        }
    }

    /// Fetches current weather for the configured city. Blocks the event
    /// loop for at most the client timeout.
    pub fn fetch_weather(&mut self) {
        let result = self.weather_client.current(&self.city);
        self.set_weather_result(result);
    }

    /// Processes the outcome of a weather lookup: the report on success, a
    /// fallback status line on failure. Failures never tear down the
    /// session.
    pub fn set_weather_result(&mut self, result: FetchResult<WeatherReport>) {
        match result {
            Ok(report) => {
                self.status_message = Some(format!("Weather updated for {}", self.city));
                self.weather = Some(report);
            }
            Err(crate::domain::FetchError::CityNotFound) => {
                self.status_message = Some("City not found".to_string());
            }
            Err(e) => {
                self.status_message = Some(format!("Weather service unavailable: {}", e));
            }
        }
    }

    /// Fetches the top headlines for the fixed dashboard query.
    pub fn fetch_news(&mut self) {
        let result = self.news_client.top_headlines("india");
        self.set_news_result(result);
    }

    /// Processes the outcome of a headline fetch, mirroring
    /// [`set_weather_result`](Self::set_weather_result).
    pub fn set_news_result(&mut self, result: FetchResult<Vec<NewsArticle>>) {
        match result {
            Ok(articles) => {
                self.status_message = Some(format!("Fetched {} headlines", articles.len()));
                self.headlines = articles;
            }
            Err(e) => {
                self.status_message = Some(format!("News service unavailable: {}", e));
            }
        }
    }

    /// Inserts a character at the cursor in the active form field.
    pub fn insert_char(&mut self, c: char) {
        if let Some(field) = self.form_fields.get_mut(self.form_index) {
            field.insert(self.cursor_position, c);
            self.cursor_position += 1;
        }
    }

    /// Removes the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor_position > 0 {
            if let Some(field) = self.form_fields.get_mut(self.form_index) {
                field.remove(self.cursor_position - 1);
                self.cursor_position -= 1;
            }
        }
    }

    /// Removes the character under the cursor.
    pub fn delete_char(&mut self) {
        if let Some(field) = self.form_fields.get_mut(self.form_index) {
            if self.cursor_position < field.len() {
                field.remove(self.cursor_position);
            }
        }
    }

    pub fn cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn cursor_right(&mut self) {
        if let Some(field) = self.form_fields.get(self.form_index) {
            if self.cursor_position < field.len() {
                self.cursor_position += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_app(dir: &TempDir) -> App {
        App::new(Config {
            reminder_file: dir.path().join("reminders.json"),
            expense_file: dir.path().join("expenses.csv"),
            restaurant_file: dir.path().join("restaurants.csv"),
            weather_api_key: None,
            news_api_key: None,
        })
    }

    #[test]
    fn test_new_app_with_absent_files_is_empty() {
        let dir = TempDir::new().unwrap();
        let app = test_app(&dir);
        assert!(app.reminders.is_empty());
        assert!(app.expenses.is_empty());
        assert!(app.restaurants.is_empty());
        assert_eq!(app.insights, vec!["No expenses yet to analyze".to_string()]);
        // Loading must not create the backing files.
        assert!(!dir.path().join("reminders.json").exists());
        assert!(!dir.path().join("expenses.csv").exists());
    }

    #[test]
    fn test_page_cycling_wraps() {
        assert_eq!(Page::Home.next(), Page::Reminders);
        assert_eq!(Page::Restaurants.next(), Page::Home);
        assert_eq!(Page::Home.previous(), Page::Restaurants);
    }

    #[test]
    fn test_add_reminder_via_form() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);

        app.start_add_reminder();
        assert_eq!(app.mode, AppMode::AddReminder);
        for c in "Call Mom".chars() {
            app.insert_char(c);
        }
        app.submit_form_field(); // task -> date (prefilled today)
        app.submit_form_field(); // date -> time (prefilled 09:00)
        app.submit_form_field(); // commit

        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.reminders.len(), 1);
        assert_eq!(app.reminders[0].task, "Call Mom");
        assert!(app.reminders[0].time.ends_with("09:00"));
    }

    #[test]
    fn test_add_reminder_blank_time_stores_date_only() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);

        app.start_add_reminder();
        app.insert_char('x');
        app.submit_form_field();
        // Clear the prefilled date and type a fixed one.
        app.form_fields[1] = "2024-03-01".to_string();
        app.submit_form_field();
        app.form_fields[2].clear();
        app.cursor_position = 0;
        app.submit_form_field();

        assert_eq!(app.reminders[0].time, "2024-03-01");
    }

    #[test]
    fn test_add_reminder_requires_task_text() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);

        app.start_add_reminder();
        app.submit_form_field();
        app.submit_form_field();
        app.submit_form_field();

        assert!(app.reminders.is_empty());
        assert_eq!(app.status_message.as_deref(), Some("Reminder text is required"));
    }

    #[test]
    fn test_add_expense_via_form() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);

        app.start_add_expense();
        for c in "Tea".chars() {
            app.insert_char(c);
        }
        app.submit_form_field();
        for c in "20".chars() {
            app.insert_char(c);
        }
        app.submit_form_field();
        app.submit_form_field(); // date prefilled

        assert_eq!(app.expenses.len(), 1);
        assert_eq!(app.expenses[0].item, "Tea");
        assert_eq!(app.expenses[0].amount, 20.0);
        assert_eq!(app.insights.len(), 5);
    }

    #[test]
    fn test_add_expense_invalid_amount_sets_status_and_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);

        app.start_add_expense();
        app.insert_char('x');
        app.submit_form_field();
        for c in "lots".chars() {
            app.insert_char(c);
        }
        app.submit_form_field();
        app.submit_form_field();

        assert!(app.expenses.is_empty());
        assert!(!dir.path().join("expenses.csv").exists());
        assert!(app.status_message.as_deref().unwrap().contains("Invalid amount"));
    }

    #[test]
    fn test_toggle_selected_reminder_persists() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.start_add_reminder();
        app.insert_char('a');
        app.submit_form_field();
        app.submit_form_field();
        app.submit_form_field();

        app.toggle_selected_reminder();
        assert!(app.reminders[0].completed);

        // A fresh app over the same files sees the persisted flag.
        let reloaded = test_app(&dir);
        assert!(reloaded.reminders[0].completed);
    }

    #[test]
    fn test_reminder_view_filters_selection() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.reminders = vec![
            Reminder::new("a", "2024-01-01"),
            Reminder {
                task: "b".to_string(),
                time: "2024-01-02".to_string(),
                completed: true,
            },
        ];

        assert_eq!(app.visible_reminders(), vec![0, 1]);
        app.cycle_reminder_view();
        assert_eq!(app.reminder_view, ReminderView::Pending);
        assert_eq!(app.visible_reminders(), vec![0]);
        app.cycle_reminder_view();
        assert_eq!(app.visible_reminders(), vec![1]);
    }

    #[test]
    fn test_form_field_navigation_and_editing() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);

        app.start_restaurant_search();
        // Query is prefilled with "Indian"; cursor sits at the end.
        assert_eq!(app.form_fields[0], "Indian");
        assert_eq!(app.cursor_position, 6);
        app.backspace();
        assert_eq!(app.form_fields[0], "India");
        app.cursor_left();
        app.delete_char();
        assert_eq!(app.form_fields[0], "Indi");
        app.submit_form_field();
        assert_eq!(app.form_index, 1);
        app.previous_form_field();
        assert_eq!(app.form_index, 0);
    }

    #[test]
    fn test_missing_weather_key_becomes_status_message() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.fetch_weather();
        assert!(app.weather.is_none());
        assert!(app
            .status_message
            .as_deref()
            .unwrap()
            .contains("Weather service unavailable"));
    }

    #[test]
    fn test_search_results_and_empty_suggestions() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.restaurants = vec![Restaurant {
            name: "Truffles".to_string(),
            rating: 4.6,
            cuisine: "Italian, Continental".to_string(),
            description: String::new(),
            local_address: String::new(),
            phone: String::new(),
        }];

        app.run_restaurant_search("italian", 4.0);
        assert_eq!(app.search_results.len(), 1);

        app.run_restaurant_search("sushi", 4.0);
        assert!(app.search_results.is_empty());
        assert!(app.status_message.as_deref().unwrap().contains("sushi"));
    }
}
