//! Interactive prompts. `inquire` blocks, so each prompt runs on the blocking pool.

use std::fmt;

use anyhow::{Context, Result, bail};
use cityweather_core::{City, Config};
use inquire::{CustomType, InquireError, Password, PasswordDisplayMode, Select};
use tracing::warn;

/// Table row as shown in the selection list.
#[derive(Debug, Clone)]
struct CityChoice(City);

impl fmt::Display for CityChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let City {
            name,
            country,
            population,
        } = &self.0;
        write!(f, "{name} ({country}, pop. {population})")
    }
}

/// Ask which city to look up. `None` when the user quits or there is no terminal.
pub async fn pick_city(cities: Vec<City>) -> Result<Option<City>> {
    let answer = tokio::task::spawn_blocking(move || {
        let options: Vec<CityChoice> = cities.into_iter().map(CityChoice).collect();

        Select::new("Show weather for:", options)
            .with_help_message("↑↓ to move, enter to select, esc to quit")
            .prompt_skippable()
    })
    .await
    .context("City prompt task failed")?;

    match answer {
        Ok(choice) => Ok(choice.map(|CityChoice(city)| city)),
        Err(InquireError::OperationInterrupted) => Ok(None),
        Err(InquireError::NotTTY) => {
            warn!("stdin is not a terminal; skipping city selection");
            Ok(None)
        }
        Err(err) => Err(err).context("City prompt failed"),
    }
}

/// Ask for the API key and row count, updating `config` in place.
pub async fn configure(config: &mut Config) -> Result<()> {
    let current_rows = config.rows;

    let (api_key, rows) = tokio::task::spawn_blocking(move || -> Result<(String, u32)> {
        let api_key = Password::new("OpenWeather API key:")
            .with_display_mode(PasswordDisplayMode::Masked)
            .without_confirmation()
            .prompt()
            .context("Failed to read API key")?;

        let rows = CustomType::<u32>::new("Number of cities to list:")
            .with_default(current_rows)
            .with_error_message("Please type a whole number")
            .prompt()
            .context("Failed to read row count")?;

        Ok((api_key, rows))
    })
    .await
    .context("Configuration prompt task failed")??;

    let api_key = api_key.trim();
    if api_key.is_empty() {
        bail!("API key must not be empty");
    }
    if rows == 0 {
        bail!("Number of cities must be at least 1");
    }

    config.set_api_key(api_key.to_string());
    config.rows = rows;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_shows_all_columns() {
        let choice = CityChoice(City {
            name: "Lima".into(),
            country: "Peru".into(),
            population: 7_737_002,
        });

        assert_eq!(choice.to_string(), "Lima (Peru, pop. 7737002)");
    }
}
