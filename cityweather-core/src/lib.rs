//! Core library for the `cityweather` viewer.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Clients for the cities directory and the weather service
//! - The view state, its transitions and the plain-text renderer
//! - [`WeatherView`], which wires the two fetches to the state
//!
//! It is used by `cityweather-cli`, but can also be reused by other front-ends.

pub mod config;
pub mod directory;
pub mod error;
pub mod http;
pub mod model;
pub mod provider;
pub mod render;
pub mod state;
pub mod view;

pub use config::Config;
pub use directory::CityDirectory;
pub use error::ViewError;
pub use model::{City, WeatherSnapshot};
pub use provider::WeatherProvider;
pub use render::render;
pub use state::{Transition, ViewState};
pub use view::WeatherView;
