//! Walks the public reference endpoints and runs one vacancy search.
//!
//! Set `HH_USER_AGENT` to your own identification string before running;
//! hh.ru rejects anonymous clients.

use headhunter_lib::{ClientConfig, HeadHunterClient, VacancySearchParams};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(_) => ClientConfig::new("headhunter-lib-example/0.1 (devnull@example.com)"),
    };
    let client = HeadHunterClient::new(config)?;

    // Region tree
    let areas = client.areas().await?;
    println!("Top-level areas: {}", areas.len());
    for area in areas.iter().take(3) {
        println!("  - {} ({}) with {} children", area.name, area.id, area.areas.len());
    }

    // Dictionaries
    let dictionaries = client.dictionaries().await?;
    let mut categories: Vec<&str> = dictionaries.categories().collect();
    categories.sort_unstable();
    println!("\nDictionary categories: {}", dictionaries.len());
    for key in categories.iter().take(8) {
        println!("  - {key}");
    }

    let currencies = client.currencies().await?;
    println!("\nCurrencies: {}", currencies.len());
    for currency in currencies.iter().take(5) {
        println!("  - {}: {}", currency.id, currency.name);
    }

    let experience = client.experience_levels().await?;
    println!("\nExperience bands:");
    for band in &experience {
        println!("  - {}: {}", band.id, band.name);
    }

    // Moscow metro, flattened into stations
    let stations = client.metro_stations("1").await?;
    println!("\nMoscow metro stations: {}", stations.len());
    if let Some(station) = stations.first() {
        println!(
            "  first: {} on {} (#{})",
            station.name, station.line.name, station.line.hex_color
        );
    }

    // Vacancy search
    let params = VacancySearchParams {
        text: Some("rust".to_string()),
        area: vec!["1".to_string()],
        per_page: Some(5),
        ..Default::default()
    };
    let page = client.search_vacancies(&params).await?;
    println!("\nVacancies matching \"rust\" in Moscow: {}", page.found);
    for vacancy in &page.items {
        println!("  - {}", vacancy["name"]);
    }

    Ok(())
}
