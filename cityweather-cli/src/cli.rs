use std::{
    future::Future,
    path::{Path, PathBuf},
};

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use cityweather_core::{
    Config, ViewError, ViewState, WeatherView, render,
    render::render_weather,
};
use tracing::info;

use crate::prompt;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cityweather", version, about = "Browse cities and their current weather")]
pub struct Cli {
    /// Use this config file instead of the platform default.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log more to stderr (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and listing options.
    Configure,

    /// List cities and pick one to see its weather (default).
    Browse,

    /// List cities once and exit.
    Cities,

    /// Show current weather for a single city.
    Show {
        /// City name, e.g. "Paris" or "São Paulo".
        city: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let mut config = load_config(self.config.as_deref())?;

        match self.command.unwrap_or(Command::Browse) {
            Command::Configure => {
                prompt::configure(&mut config).await?;
                let path = match self.config {
                    Some(path) => {
                        config.save_to(&path)?;
                        path
                    }
                    None => config.save()?,
                };
                println!("Saved configuration to {}", path.display());
            }
            Command::Browse => {
                let view = WeatherView::from_config(&config)?;
                let result = browse(&view).await;
                view.teardown();
                result?;
            }
            Command::Cities => {
                let view = WeatherView::from_config(&config)?;
                let state = drive(&view, view.mount()).await?;
                if let Some(err) = state.error {
                    return Err(err.into());
                }
            }
            Command::Show { city } => {
                let view = WeatherView::from_config(&config)?;
                let state = view.select_city(&city).await?;
                if let Some(err) = state.error {
                    return Err(err.into());
                }
                if let Some(details) = render_weather(&state) {
                    print!("{details}");
                }
            }
        }

        Ok(())
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Mount the view, then look up weather for each picked city until the user quits.
async fn browse(view: &WeatherView) -> Result<()> {
    let state = drive(view, view.mount()).await?;
    if state.cities.is_empty() {
        return Ok(());
    }

    while let Some(city) = prompt::pick_city(view.state().cities).await? {
        drive(view, view.select_city(&city.name)).await?;
    }

    info!("leaving city browser");
    Ok(())
}

/// Run `fut` while rendering every state the view publishes, then the final one.
async fn drive<F>(view: &WeatherView, fut: F) -> Result<ViewState>
where
    F: Future<Output = Result<ViewState, ViewError>>,
{
    let mut rx = view.subscribe();
    let mut shown: Option<ViewState> = None;
    tokio::pin!(fut);

    let result = loop {
        tokio::select! {
            res = &mut fut => break res,
            Ok(()) = rx.changed() => {
                let state = rx.borrow_and_update().clone();
                show(&state, &mut shown);
            }
        }
    };

    let state = result?;
    show(&state, &mut shown);
    Ok(state)
}

fn show(state: &ViewState, shown: &mut Option<ViewState>) {
    if shown.as_ref() == Some(state) {
        return;
    }

    println!();
    print!("{}", render(state));
    *shown = Some(state.clone());
}
