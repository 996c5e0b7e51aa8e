use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};

use skycast_core::{Config, DisplayFields, WeatherService};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "City weather lookup")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show current weather for a city.
    Show {
        /// City name, e.g. "Paris".
        city: String,
    },

    /// Set or clear the service endpoint overrides.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Show { city } => show(&city).await,
            Command::Configure => configure(),
        }
    }
}

async fn show(city: &str) -> anyhow::Result<()> {
    let city = city.trim();
    if city.is_empty() {
        anyhow::bail!("City name must not be empty.");
    }

    let config = Config::load()?;
    let service = WeatherService::from_config(&config);

    let fields = service.lookup(city, Local::now().naive_local()).await?;
    render(&fields);

    Ok(())
}

/// Print the weather panel. Only called with a complete `DisplayFields`, so
/// a failed lookup never leaves a partially written panel behind.
fn render(fields: &DisplayFields) {
    println!("{}", fields.city_label);
    println!("{}", fields.date_label);
    println!();
    println!("  {}  {}  [{}]", fields.temp_label, fields.description_label, fields.icon_id);
    println!();
    println!("  Feels like  {}", fields.feels_like_label);
    println!("  Humidity    {}", fields.humidity_label);
    println!("  Wind speed  {}", fields.wind_label);
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let geocoding = inquire::Text::new("Geocoding endpoint (blank uses the public service):")
        .with_initial_value(config.geocoding_url.as_deref().unwrap_or(""))
        .prompt()
        .context("Failed to read geocoding endpoint")?;

    let forecast = inquire::Text::new("Forecast endpoint (blank uses the public service):")
        .with_initial_value(config.forecast_url.as_deref().unwrap_or(""))
        .prompt()
        .context("Failed to read forecast endpoint")?;

    config.geocoding_url = none_if_blank(geocoding);
    config.forecast_url = none_if_blank(forecast);
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}

fn none_if_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skycast_core::IconId;

    #[test]
    fn parses_show_with_city() {
        let cli = Cli::try_parse_from(["skycast", "show", "Paris"]).expect("parse");
        match cli.command {
            Command::Show { city } => assert_eq!(city, "Paris"),
            other => panic!("expected Show, got {other:?}"),
        }
    }

    #[test]
    fn parses_configure() {
        let cli = Cli::try_parse_from(["skycast", "configure"]).expect("parse");
        assert!(matches!(cli.command, Command::Configure));
    }

    #[test]
    fn show_requires_a_city_argument() {
        assert!(Cli::try_parse_from(["skycast", "show"]).is_err());
    }

    #[test]
    fn none_if_blank_trims_input() {
        assert_eq!(none_if_blank("  ".to_string()), None);
        assert_eq!(none_if_blank(String::new()), None);
        assert_eq!(
            none_if_blank(" http://localhost:1234 ".to_string()),
            Some("http://localhost:1234".to_string())
        );
    }

    #[test]
    fn render_does_not_panic_on_a_full_panel() {
        render(&DisplayFields {
            city_label: "Paris, France".to_string(),
            date_label: "Friday, August 7, 2026".to_string(),
            temp_label: "18°C".to_string(),
            description_label: "Rainy".to_string(),
            icon_id: IconId::CloudRain,
            feels_like_label: "17°C".to_string(),
            humidity_label: "72%".to_string(),
            wind_label: "12 km/h".to_string(),
        });
    }
}
