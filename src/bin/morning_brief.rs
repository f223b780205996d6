//! Morning brief - one-shot console summary.
//!
//! Prints the date and time, current weather for a city (first CLI
//! argument, default Bangalore), and the top five news headlines, then
//! exits. Provider failures print a fallback line instead of aborting, so
//! the brief always completes.

use chrono::Local;
use lifehub::application::Config;
use lifehub::infrastructure::{condition_emoji, NewsClient, WeatherClient};

fn main() {
    let config = Config::from_env();
    let city = std::env::args().nth(1).unwrap_or_else(|| "Bangalore".to_string());

    let now = Local::now();
    println!("🌄 Good Morning!");
    println!();
    println!("📆 Date: {}", now.format("%A, %d %B %Y"));
    println!("🕔 Time: {}", now.format("%I:%M %p"));

    println!();
    println!("⛅ Weather in {}", city);
    let weather = WeatherClient::new(config.weather_api_key);
    match weather.current(&city) {
        Ok(report) => {
            println!("Temperature: {} °C", report.temperature);
            println!(
                "Condition: {} {}",
                report.condition,
                condition_emoji(&report.condition_group)
            );
        }
        Err(lifehub::domain::FetchError::CityNotFound) => {
            println!("City not found! Please check spelling.");
        }
        Err(e) => {
            println!("Weather service unavailable: {}", e);
        }
    }

    println!();
    println!("🗞️ Top News Headlines:");
    let news = NewsClient::new(config.news_api_key);
    match news.top_headlines("india AND (politics OR technology OR sports OR cricket)") {
        Ok(articles) if !articles.is_empty() => {
            for (i, article) in articles.iter().enumerate() {
                println!("{}. {}", i + 1, article.title);
            }
        }
        Ok(_) => println!("No headlines right now."),
        Err(e) => println!("News service unavailable: {}", e),
    }
}
