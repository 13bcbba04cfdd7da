use std::{
    future::Future,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::{
    Config, ViewError,
    directory::{CityDirectory, directory_from_config},
    http,
    provider::{WeatherProvider, provider_from_config},
    state::{Transition, ViewState},
};

/// The cities table plus weather details, driven by two fetches.
///
/// State is published through a watch channel on every transition. Once
/// [`teardown`](Self::teardown) is called, in-flight fetches are abandoned and
/// nothing more is published.
#[derive(Debug)]
pub struct WeatherView {
    directory: Arc<dyn CityDirectory>,
    provider: Arc<dyn WeatherProvider>,
    state: watch::Sender<ViewState>,
    mounted: AtomicBool,
    cancel: CancellationToken,
}

impl WeatherView {
    pub fn new(directory: Arc<dyn CityDirectory>, provider: Arc<dyn WeatherProvider>) -> Self {
        let (state, _) = watch::channel(ViewState::default());

        Self {
            directory,
            provider,
            state,
            mounted: AtomicBool::new(false),
            cancel: CancellationToken::new(),
        }
    }

    /// Build a view against the services named in `config`.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let http = http::client(config.timeout())?;
        let provider = provider_from_config(config, http.clone())?;
        let directory = directory_from_config(config, http);

        Ok(Self::new(Arc::new(directory), Arc::new(provider)))
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Receiver woken after each transition; it reads the latest state.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    /// Load the city list. Only the first call fetches; later calls return the current state.
    pub async fn mount(&self) -> Result<ViewState, ViewError> {
        if self.mounted.swap(true, Ordering::SeqCst) {
            return Ok(self.state());
        }

        self.publish(Transition::CitiesRequested)?;

        match self.until_torn_down(self.directory.list_cities()).await? {
            Ok(cities) => {
                info!(count = cities.len(), "loaded cities");
                self.publish(Transition::CitiesLoaded(cities))
            }
            Err(err) => {
                warn!("Failed to fetch cities: {err:#}");
                self.publish(Transition::CitiesFailed)
            }
        }
    }

    /// Look up current weather for `city`, as when its table row is chosen.
    pub async fn select_city(&self, city: &str) -> Result<ViewState, ViewError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(ViewError::MissingCity);
        }

        match self.until_torn_down(self.provider.current_weather(city)).await? {
            Ok(snapshot) => {
                info!(city, "loaded weather");
                self.publish(Transition::WeatherLoaded {
                    city: city.to_string(),
                    snapshot,
                })
            }
            Err(err) => {
                warn!("Failed to fetch weather for {city}: {err:#}");
                self.publish(Transition::WeatherFailed)
            }
        }
    }

    /// End the view's lifetime. In-flight fetches resolve to [`ViewError::TornDown`].
    pub fn teardown(&self) {
        self.cancel.cancel();
    }

    pub fn is_torn_down(&self) -> bool {
        self.cancel.is_cancelled()
    }

    async fn until_torn_down<F: Future>(&self, fut: F) -> Result<F::Output, ViewError> {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(ViewError::TornDown),
            out = fut => Ok(out),
        }
    }

    fn publish(&self, transition: Transition) -> Result<ViewState, ViewError> {
        if self.is_torn_down() {
            return Err(ViewError::TornDown);
        }

        self.state
            .send_modify(|current| *current = current.apply(transition));

        Ok(self.state())
    }
}

impl Drop for WeatherView {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
