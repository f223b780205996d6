use crate::application::{App, AppMode, Page};
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key, modifiers),
            AppMode::Help => Self::handle_help_mode(app, key),
            AppMode::AddReminder
            | AppMode::AddExpense
            | AppMode::CityInput
            | AppMode::RestaurantSearch => Self::handle_form_mode(app, key),
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode, _modifiers: KeyModifiers) {
        // Any keypress in normal mode dismisses the previous status line.
        app.status_message = None;

        match key {
            KeyCode::Tab => {
                app.page = app.page.next();
                return;
            }
            KeyCode::BackTab => {
                app.page = app.page.previous();
                return;
            }
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                app.page = Page::ALL[index];
                return;
            }
            KeyCode::F(1) | KeyCode::Char('?') => {
                app.mode = AppMode::Help;
                app.help_scroll = 0;
                return;
            }
            KeyCode::Char('r') => {
                app.refresh();
                return;
            }
            KeyCode::Char('q') => {
                // Handled by the main loop
                return;
            }
            _ => {}
        }

        match app.page {
            Page::Reminders => Self::handle_reminders_page(app, key),
            Page::Expenses => {
                if key == KeyCode::Char('a') {
                    app.start_add_expense();
                }
            }
            Page::WeatherNews => match key {
                KeyCode::Char('w') => app.fetch_weather(),
                KeyCode::Char('c') => app.start_city_input(),
                KeyCode::Char('g') => app.fetch_news(),
                _ => {}
            },
            Page::Restaurants => match key {
                KeyCode::Char('s') => app.start_restaurant_search(),
                KeyCode::Char('o') => app.occasion_search(),
                KeyCode::Char('l') => app.feeling_lucky(),
                _ => {}
            },
            Page::Home => {}
        }
    }

    fn handle_reminders_page(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Char('a') => app.start_add_reminder(),
            KeyCode::Enter => app.toggle_selected_reminder(),
            KeyCode::Up | KeyCode::Char('k') => app.select_previous_reminder(),
            KeyCode::Down | KeyCode::Char('j') => app.select_next_reminder(),
            KeyCode::Char('v') => app.cycle_reminder_view(),
            _ => {}
        }
    }

    fn handle_form_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => {
                app.submit_form_field();
            }
            KeyCode::Esc => {
                app.cancel_form();
            }
            KeyCode::Up => {
                app.previous_form_field();
            }
            KeyCode::Down => {
                // Move forward without committing from the last field.
                if app.form_index + 1 < app.form_fields.len() {
                    app.submit_form_field();
                }
            }
            KeyCode::Backspace => {
                app.backspace();
            }
            KeyCode::Delete => {
                app.delete_char();
            }
            KeyCode::Left => {
                app.cursor_left();
            }
            KeyCode::Right => {
                app.cursor_right();
            }
            KeyCode::Home => {
                app.cursor_position = 0;
            }
            KeyCode::End => {
                app.cursor_position = app
                    .form_fields
                    .get(app.form_index)
                    .map(String::len)
                    .unwrap_or(0);
            }
            KeyCode::Char(c) => {
                app.insert_char(c);
            }
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.mode = AppMode::Normal;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if app.help_scroll > 0 {
                    app.help_scroll -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll += 1;
            }
            KeyCode::PageUp => {
                app.help_scroll = app.help_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                app.help_scroll += 5;
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }
}
