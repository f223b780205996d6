use crate::application::{App, AppMode, Page};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Clear, List, ListItem, Paragraph, Row, Table, Tabs},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_tabs(f, app, chunks[0]);
    match app.page {
        Page::Home => render_home(f, app, chunks[1]),
        Page::Reminders => render_reminders(f, app, chunks[1]),
        Page::Expenses => render_expenses(f, app, chunks[1]),
        Page::WeatherNews => render_weather_news(f, app, chunks[1]),
        Page::Restaurants => render_restaurants(f, app, chunks[1]),
    }
    render_status_bar(f, app, chunks[2]);

    if matches!(app.mode, AppMode::Help) {
        render_help_popup(f, app.help_scroll);
    }
    if !matches!(app.mode, AppMode::Normal | AppMode::Help) {
        render_form_popup(f, app);
    }
}

fn render_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Page::ALL.iter().map(|p| Line::from(p.title())).collect();
    let selected = Page::ALL.iter().position(|p| *p == app.page).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .block(Block::default().borders(Borders::ALL).title("Smart Life Hub"))
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, area);
}

fn render_home(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    let now = chrono::Local::now();
    let metrics = vec![
        Line::from(format!("Current time:       {}", now.format("%H:%M:%S"))),
        Line::from(format!("Pending reminders:  {}", app.pending_reminders())),
        Line::from(format!("Total expenses:     ₹{:.2}", app.total_spent())),
    ];
    let summary = Paragraph::new(metrics)
        .block(Block::default().borders(Borders::ALL).title("Today"));
    f.render_widget(summary, chunks[0]);

    let items: Vec<ListItem> = if app.notifications.is_empty() {
        vec![ListItem::new("Nothing due right now")]
    } else {
        app.notifications
            .iter()
            .map(|n| ListItem::new(format!("🔔 {}", n)).style(Style::default().fg(Color::Yellow)))
            .collect()
    };
    let notifications = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Due reminders"));
    f.render_widget(notifications, chunks[1]);
}

fn render_reminders(f: &mut Frame, app: &App, area: Rect) {
    let visible = app.visible_reminders();
    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(row, &index)| {
            let reminder = &app.reminders[index];
            let status = if reminder.completed { "✅" } else { "⏰" };
            let line = format!("{} {}  ({})", status, reminder.task, reminder.time);
            let style = if row == app.selected_reminder {
                Style::default().bg(Color::Blue).fg(Color::White)
            } else if reminder.completed {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let title = format!(
        "Reminders [{}] - a: add | Enter: toggle | v: view | r: refresh",
        app.reminder_view.label()
    );
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, area);
}

fn render_expenses(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    // Newest first; the YYYY-MM-DD convention makes string order work.
    let mut rows_data: Vec<&crate::domain::Expense> = app.expenses.iter().collect();
    rows_data.sort_by(|a, b| b.date.cmp(&a.date));

    let rows: Vec<Row> = rows_data
        .iter()
        .map(|e| {
            Row::new(vec![
                Cell::from(e.item.clone()),
                Cell::from(format!("₹{:.2}", e.amount)),
                Cell::from(e.date.clone()),
            ])
        })
        .collect();
    let header = Row::new(vec!["Item", "Amount", "Date"])
        .style(Style::default().fg(Color::Yellow));
    let widths = [
        Constraint::Percentage(50),
        Constraint::Percentage(25),
        Constraint::Percentage(25),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Expense history - a: add"));
    f.render_widget(table, chunks[0]);

    let items: Vec<ListItem> = app.insights.iter().map(|i| ListItem::new(i.as_str())).collect();
    let insights = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Spending insights"));
    f.render_widget(insights, chunks[1]);
}

fn render_weather_news(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(area);

    let weather_lines = match &app.weather {
        Some(report) => vec![
            Line::from(format!("Temperature: {}°C", report.temperature)),
            Line::from(format!("Humidity:    {}%", report.humidity)),
            Line::from(format!("Condition:   {}", report.condition)),
        ],
        None => vec![Line::from("Press w to fetch the weather")],
    };
    let weather = Paragraph::new(weather_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Weather in {} - w: fetch | c: change city", app.city)),
    );
    f.render_widget(weather, chunks[0]);

    let items: Vec<ListItem> = if app.headlines.is_empty() {
        vec![ListItem::new("Press g to fetch headlines")]
    } else {
        app.headlines
            .iter()
            .enumerate()
            .map(|(i, article)| {
                let mut lines = vec![Line::from(format!("{}. {}", i + 1, article.title))
                    .style(Style::default().add_modifier(Modifier::BOLD))];
                if !article.description.is_empty() {
                    lines.push(Line::from(format!("   {}", article.description)));
                }
                ListItem::new(lines)
            })
            .collect()
    };
    let news = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Latest news - g: fetch"));
    f.render_widget(news, chunks[1]);
}

fn render_restaurants(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(area);

    let lucky_lines = match &app.lucky {
        Some(r) => vec![
            Line::from(format!("{} ⭐ {:.1}", r.name, r.rating)),
            Line::from(format!("Cuisine: {}", r.cuisine)),
            Line::from(format!("Address: {}", truncate(&r.local_address, 60))),
        ],
        None => vec![Line::from("Press l to get a random good restaurant")],
    };
    let lucky = Paragraph::new(lucky_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Feeling lucky - l: pick | s: search | o: occasion"),
    );
    f.render_widget(lucky, chunks[0]);

    let items: Vec<ListItem> = if app.search_results.is_empty() {
        if app.search_suggestions.is_empty() {
            vec![ListItem::new("No search yet")]
        } else {
            let mut items = vec![ListItem::new("Try similar cuisines:")];
            items.extend(
                app.search_suggestions
                    .iter()
                    .map(|s| ListItem::new(format!("  🔍 {}", s))),
            );
            items
        }
    } else {
        app.search_results
            .iter()
            .take(10)
            .map(|r| {
                let lines = vec![
                    Line::from(format!("{} ⭐ {:.1}", r.name, r.rating))
                        .style(Style::default().add_modifier(Modifier::BOLD)),
                    Line::from(format!("   {} | {}", r.cuisine, truncate(&r.local_address, 50))),
                ];
                ListItem::new(lines)
            })
            .collect()
    };
    let results = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Results"));
    f.render_widget(results, chunks[1]);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let text = match app.mode {
        AppMode::Normal => {
            if let Some(ref status) = app.status_message {
                status.clone()
            } else {
                "Tab/Shift+Tab: switch page | 1-5: jump to page | F1/?: help | q: quit".to_string()
            }
        }
        AppMode::Help => "↑↓/jk: scroll | Home: top | Esc/q: close help".to_string(),
        _ => {
            let labels = app.form_labels();
            let label = labels.get(app.form_index).unwrap_or(&"");
            format!(
                "{}: {} (Enter: next/confirm, Esc: cancel)",
                label,
                app.form_fields.get(app.form_index).map(String::as_str).unwrap_or("")
            )
        }
    };

    let style = match app.mode {
        AppMode::Normal => Style::default(),
        AppMode::Help => Style::default().fg(Color::Cyan),
        _ => Style::default().fg(Color::Green),
    };
    let status = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(style);
    f.render_widget(status, area);
}

fn render_form_popup(f: &mut Frame, app: &App) {
    let labels = app.form_labels();
    let area = f.area();
    let height = (labels.len() as u16 + 2).min(area.height);
    let popup_area = Rect {
        x: area.width / 6,
        y: area.height / 3,
        width: area.width * 2 / 3,
        height,
    };
    f.render_widget(Clear, popup_area);

    let lines: Vec<Line> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let value = app.form_fields.get(i).map(String::as_str).unwrap_or("");
            let marker = if i == app.form_index { ">" } else { " " };
            let line = format!("{} {}: {}", marker, label, value);
            if i == app.form_index {
                Line::from(line).style(Style::default().fg(Color::Green))
            } else {
                Line::from(line)
            }
        })
        .collect();

    let title = match app.mode {
        AppMode::AddReminder => "Add reminder",
        AppMode::AddExpense => "Add expense",
        AppMode::CityInput => "Weather city",
        AppMode::RestaurantSearch => "Search restaurants",
        _ => "",
    };
    let form = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(form, popup_area);
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_text = get_help_text();
    let help_lines: Vec<&str> = help_text.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Smart Life Hub Help")
                .style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    }
}

fn get_help_text() -> String {
    r#"SMART LIFE HUB

=== PAGES ===
Tab / Shift+Tab     Cycle through pages
1-5                 Jump straight to a page
r                   Reload reminders and expenses from disk

=== HOME ===
Shows the clock, pending reminder count, total spending, and every
reminder that is due right now.

=== REMINDERS ===
a                   Add a reminder (task, date, optional time)
Enter               Toggle the selected reminder done/undone
↑↓ or j/k           Move the selection
v                   Cycle the view: All / Pending / Completed

A reminder with a time ("2024-06-01 09:00") becomes due at that exact
minute. A date-only reminder ("2024-06-01") is due for the whole day.
Reminders whose time text fits neither shape are simply never due.

=== EXPENSES ===
a                   Add an expense (item, amount, date)
History is sorted newest first. Insights show total, average, count,
and the most/least expensive entries.

=== WEATHER & NEWS ===
w                   Fetch current weather for the configured city
c                   Change the city
g                   Fetch the top 5 headlines
Both need API keys in WEATHER_API_KEY / NEWS_API_KEY. Failures show in
the status bar; nothing here can crash the session.

=== RESTAURANTS ===
s                   Search by cuisine/description and minimum rating
o                   Seed a search from the next occasion's cuisines
l                   Random pick, preferring rating 4.0+
The catalog file is read once at startup (Bengaluru_Restaurants.csv).

=== FORMS ===
Enter               Next field, or confirm on the last field
Up/Down             Move between fields
Esc                 Cancel

=== DATA FILES ===
reminders.json      JSON array, rewritten whole on every change
expenses.csv        Item,Amount,Date rows, append via the form
Changes are plain overwrites; two concurrent writers would race and the
last save wins."#
        .to_string()
}
