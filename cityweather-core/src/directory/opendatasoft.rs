use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{http::get_json, model::City};

use super::CityDirectory;

/// Client for the OpenDataSoft records search API.
#[derive(Debug, Clone)]
pub struct OpenDataSoftDirectory {
    http: Client,
    url: String,
    dataset: String,
    rows: u32,
}

impl OpenDataSoftDirectory {
    pub fn new(http: Client, url: String, dataset: String, rows: u32) -> Self {
        Self {
            http,
            url,
            dataset,
            rows,
        }
    }
}

#[derive(Debug, Deserialize)]
struct OdsFields {
    name: String,
    #[serde(default)]
    country: String,
    #[serde(default)]
    population: u64,
}

#[derive(Debug, Deserialize)]
struct OdsRecord {
    fields: OdsFields,
}

#[derive(Debug, Deserialize)]
struct OdsSearchResponse {
    records: Vec<OdsRecord>,
}

impl From<OdsRecord> for City {
    fn from(record: OdsRecord) -> Self {
        let OdsFields {
            name,
            country,
            population,
        } = record.fields;

        City {
            name,
            country,
            population,
        }
    }
}

#[async_trait]
impl CityDirectory for OpenDataSoftDirectory {
    async fn list_cities(&self) -> Result<Vec<City>> {
        debug!(url = %self.url, dataset = %self.dataset, rows = self.rows, "fetching cities");

        let rows = self.rows.to_string();
        let request = self.http.get(&self.url).query(&[
            ("dataset", self.dataset.as_str()),
            ("rows", rows.as_str()),
            ("facet", "country"),
        ]);

        let parsed: OdsSearchResponse = get_json(request, "OpenDataSoft search").await?;

        Ok(parsed.records.into_iter().map(City::from).collect())
    }
}
