use std::{process::ExitCode, sync::Arc};

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use citycast_core::{Config, HttpGateway, WeatherWidget};
use inquire::{CustomType, Password, PasswordDisplayMode, Text};

use crate::{render::TerminalSink, repl};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "citycast", version, about = "City weather lookup with autocomplete")]
pub struct Cli {
    /// More log output (-v info, -vv debug).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(flatten)]
    pub overrides: Overrides,

    #[command(subcommand)]
    pub command: Command,
}

/// One-run overrides of the config file.
#[derive(Debug, Default, Args)]
pub struct Overrides {
    /// OpenWeather API key.
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Current-weather endpoint.
    #[arg(long, global = true)]
    pub weather_url: Option<String>,

    /// Countries-with-cities endpoint.
    #[arg(long, global = true)]
    pub cities_url: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,
}

impl Overrides {
    fn apply(self, config: &mut Config) {
        if let Some(key) = self.api_key {
            config.api_key = Some(key);
        }
        if let Some(url) = self.weather_url {
            config.weather_url = url;
        }
        if let Some(url) = self.cities_url {
            config.cities_url = url;
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout_secs = Some(secs);
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the API key and endpoints in the config file.
    Configure,

    /// Look up current weather for a city.
    Show {
        /// City name; several words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        city: Vec<String>,
    },

    /// List city suggestions for a prefix.
    Suggest {
        prefix: String,
    },

    /// Type, pick and submit interactively.
    Repl,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let mut config = Config::load()?;

        match self.command {
            Command::Configure => configure(config)?,
            Command::Show { city } => {
                self.overrides.apply(&mut config);
                config.api_key()?;
                let widget = build_widget(&config)?;

                return Ok(show(&widget, &city.join(" ")).await);
            }
            Command::Suggest { prefix } => {
                self.overrides.apply(&mut config);
                let widget = build_widget(&config)?;

                widget.type_input(&prefix).await;
                if widget.suggestions().await.is_empty() {
                    println!("No cities start with '{}'.", prefix.trim());
                }
            }
            Command::Repl => {
                self.overrides.apply(&mut config);
                if config.api_key().is_err() {
                    println!("No API key configured: suggestions work, :submit does not.");
                    println!("Run `citycast configure` to add one.");
                }
                repl::run(Arc::new(build_widget(&config)?)).await?;
            }
        }

        Ok(ExitCode::SUCCESS)
    }
}

fn build_widget(config: &Config) -> anyhow::Result<WeatherWidget> {
    let gateway = HttpGateway::from_config(config)?;
    Ok(WeatherWidget::new(Arc::new(gateway), Arc::new(TerminalSink)))
}

/// Submit `city` once. The widget reports the outcome itself (card, message or
/// log line), so a failure only sets the exit status.
async fn show(widget: &WeatherWidget, city: &str) -> ExitCode {
    widget.fill_input(city).await;
    match widget.submit().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let has_key = config.api_key().is_ok();

    let mut key_prompt = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation();
    if has_key {
        key_prompt = key_prompt.with_help_message("Leave empty to keep the current key");
    }
    let key = key_prompt.prompt().context("Failed to read API key")?;

    if !key.trim().is_empty() {
        config.api_key = Some(key.trim().to_string());
    } else if !has_key {
        bail!("An API key is required for weather lookups");
    }

    config.weather_url = Text::new("Weather endpoint:")
        .with_default(&config.weather_url)
        .prompt()
        .context("Failed to read weather endpoint")?;

    config.cities_url = Text::new("City list endpoint:")
        .with_default(&config.cities_url)
        .prompt()
        .context("Failed to read city list endpoint")?;

    let timeout = CustomType::<u64>::new("Request timeout in seconds (0 = none):")
        .with_default(config.timeout_secs.unwrap_or(0))
        .prompt()
        .context("Failed to read timeout")?;
    config.timeout_secs = (timeout > 0).then_some(timeout);

    config.save()?;
    println!("Configuration saved to {}", Config::config_file_path()?.display());

    Ok(())
}
