//! Plain-text projection of a [`ViewState`].

use std::fmt::Write;

use crate::{City, ViewState};

pub const TITLE: &str = "Weather Forecast App";

const HEADERS: [&str; 3] = ["Name", "Country", "Population"];

/// Render the whole view: title, status lines, cities table and weather details.
pub fn render(state: &ViewState) -> String {
    let mut out = String::new();

    out.push_str(TITLE);
    out.push('\n');
    out.push_str(&render_status(state));

    out.push_str("\nCities\n");
    out.push_str(&render_table(&state.cities));

    if let Some(details) = render_weather(state) {
        out.push('\n');
        out.push_str(&details);
    }

    out
}

/// Loading indicator and error message, one per line, each only when set.
pub fn render_status(state: &ViewState) -> String {
    let mut out = String::new();

    if state.loading {
        out.push_str("Loading...\n");
    }
    if let Some(err) = &state.error {
        let _ = writeln!(out, "{err}");
    }

    out
}

/// The weather details block, or `None` when no lookup has succeeded yet.
pub fn render_weather(state: &ViewState) -> Option<String> {
    let weather = state.weather.as_ref()?;
    let mut out = String::new();

    let _ = writeln!(out, "Weather Details for {}", state.selected_city_name);
    let _ = writeln!(out, "Temperature: {}°C", weather.temperature_c);
    let _ = writeln!(out, "Description: {}", weather.description);
    let _ = writeln!(out, "Humidity: {}%", weather.humidity_pct);
    let _ = writeln!(out, "Wind Speed: {} m/s", weather.wind_speed_mps);
    let _ = writeln!(out, "Pressure: {} hPa", weather.pressure_hpa);

    Some(out)
}

fn render_table(cities: &[City]) -> String {
    let rows: Vec<[String; 3]> = cities
        .iter()
        .map(|c| [c.name.clone(), c.country.clone(), c.population.to_string()])
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS, &widths);

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-"));

    for row in &rows {
        push_row(&mut out, row, &widths);
    }

    out
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize; 3]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref(), width = *width))
        .collect();

    let _ = writeln!(out, "{}", line.join(" | ").trim_end());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ViewError, WeatherSnapshot};

    fn paris() -> WeatherSnapshot {
        WeatherSnapshot {
            temperature_c: 15.0,
            humidity_pct: 60,
            pressure_hpa: 1012,
            description: "clear sky".to_string(),
            wind_speed_mps: 3.1,
        }
    }

    fn cities() -> Vec<City> {
        vec![
            City {
                name: "Paris".into(),
                country: "France".into(),
                population: 2_138_551,
            },
            City {
                name: "Zürich".into(),
                country: "Switzerland".into(),
                population: 341_730,
            },
        ]
    }

    #[test]
    fn empty_state_shows_title_and_empty_table() {
        let out = render(&ViewState::default());
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], TITLE);
        assert!(lines.contains(&"Cities"));
        assert!(lines.contains(&"Name | Country | Population"));
        assert!(!out.contains("Loading..."));
        assert!(!out.contains("Weather Details"));
        assert_eq!(lines.last(), Some(&"-----+---------+-----------"));
    }

    #[test]
    fn loading_and_error_lines_follow_title() {
        let state = ViewState {
            loading: true,
            error: Some(ViewError::CitiesFetch),
            ..ViewState::default()
        };

        let out = render(&state);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[1], "Loading...");
        assert_eq!(lines[2], "Error fetching data");
    }

    #[test]
    fn one_row_per_city_in_order() {
        let state = ViewState {
            cities: cities(),
            ..ViewState::default()
        };

        let out = render(&state);
        let paris = out.find("Paris  | France      | 2138551").unwrap();
        let zurich = out.find("Zürich | Switzerland | 341730").unwrap();

        assert!(paris < zurich);
    }

    #[test]
    fn weather_details_use_display_formatting() {
        let state = ViewState {
            selected_city_name: "Paris".into(),
            weather: Some(paris()),
            ..ViewState::default()
        };

        let details = render_weather(&state).unwrap();

        assert_eq!(
            details,
            "Weather Details for Paris\n\
             Temperature: 15°C\n\
             Description: clear sky\n\
             Humidity: 60%\n\
             Wind Speed: 3.1 m/s\n\
             Pressure: 1012 hPa\n"
        );
        assert!(render(&state).ends_with(&details));
    }

    #[test]
    fn no_weather_block_without_snapshot() {
        let state = ViewState {
            selected_city_name: "Paris".into(),
            ..ViewState::default()
        };

        assert!(render_weather(&state).is_none());
    }
}
