//! Immutable view state and the transitions that produce new states.

use crate::{City, ViewError, WeatherSnapshot};

/// Everything the renderer reads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub cities: Vec<City>,
    /// Name of the city the current `weather` belongs to; empty until a lookup succeeds.
    pub selected_city_name: String,
    pub weather: Option<WeatherSnapshot>,
    /// Only set while the city list is being fetched.
    pub loading: bool,
    /// Shared by both fetches; the latest failure wins.
    pub error: Option<ViewError>,
}

/// A single named change to [`ViewState`].
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    CitiesRequested,
    CitiesLoaded(Vec<City>),
    CitiesFailed,
    WeatherLoaded {
        city: String,
        snapshot: WeatherSnapshot,
    },
    WeatherFailed,
}

impl ViewState {
    /// Produce the state that follows `transition`.
    ///
    /// Successes never clear `error`, and a new city list never clears `weather`.
    pub fn apply(&self, transition: Transition) -> ViewState {
        let mut next = self.clone();

        match transition {
            Transition::CitiesRequested => next.loading = true,
            Transition::CitiesLoaded(cities) => {
                next.cities = cities;
                next.loading = false;
            }
            Transition::CitiesFailed => {
                next.error = Some(ViewError::CitiesFetch);
                next.loading = false;
            }
            Transition::WeatherLoaded { city, snapshot } => {
                next.selected_city_name = city;
                next.weather = Some(snapshot);
            }
            Transition::WeatherFailed => next.error = Some(ViewError::WeatherFetch),
        }

        next
    }
}
