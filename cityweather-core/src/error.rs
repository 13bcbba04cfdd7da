use thiserror::Error;

/// Failures a [`WeatherView`](crate::WeatherView) reports to its user.
///
/// Fetch failures carry no detail on purpose: the underlying cause is logged
/// and only the fixed message is stored in the view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("Error fetching data")]
    CitiesFetch,
    #[error("Error fetching weather data")]
    WeatherFetch,
    #[error("City name must not be empty")]
    MissingCity,
    #[error("View has been torn down")]
    TornDown,
}
