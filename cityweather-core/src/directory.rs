use crate::{City, Config, directory::opendatasoft::OpenDataSoftDirectory};
use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;

pub mod opendatasoft;

/// Source of the city list shown in the table.
#[async_trait]
pub trait CityDirectory: Send + Sync + Debug {
    /// Fetch one batch of cities, in the order the service returns them.
    async fn list_cities(&self) -> anyhow::Result<Vec<City>>;
}

/// Construct the directory client described by `config`.
pub fn directory_from_config(config: &Config, http: Client) -> OpenDataSoftDirectory {
    OpenDataSoftDirectory::new(
        http,
        config.cities_url.clone(),
        config.dataset.clone(),
        config.rows,
    )
}
