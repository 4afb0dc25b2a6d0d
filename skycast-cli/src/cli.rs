use clap::Parser;
use std::io::{self, Write};
use tracing::{info, warn};

use skycast_cli::{prompter::InquirePrompter, report};
use skycast_core::{
    ApiKeyFile, Config, SettingsResolver, WeatherReport, WeatherRequest,
    api_key::API_KEY_ENV, provider_from_config,
};

/// Top-level CLI struct.
///
/// Only positional arguments are accepted; their count decides between the
/// stored defaults and a one-off override.
#[derive(Debug, Parser)]
#[command(
    name = "skycast",
    about = "Current weather or a daily forecast from OpenWeather",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Nothing, or `<location> <mode> <days>`.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;

        let resolver = SettingsResolver::new(config.settings_path()?)?;
        let settings = resolver.resolve_args(&self.args)?;
        info!(?settings, "resolved settings");

        let prompter = InquirePrompter::new();
        let api_key = ApiKeyFile::new(config.key_path()?)
            .obtain(std::env::var(API_KEY_ENV).ok(), &prompter)?;

        let provider = provider_from_config(&config, api_key);
        let request = WeatherRequest {
            location: settings.location.clone(),
            mode: settings.mode,
        };

        print!("Loading weather data...");
        io::stdout().flush()?;
        let fetched = provider.get_weather(&request).await;
        println!("{}", if fetched.is_ok() { "Done" } else { "failed" });

        let mut out = io::stdout().lock();
        match fetched? {
            WeatherReport::Current(current) => {
                if let Some(station) = &current.station_name {
                    info!(%station, "provider matched location");
                }
                report::write_current(&mut out, &settings.location, &current)?;
            }
            WeatherReport::Forecast(forecast) => {
                let requested = usize::from(settings.forecast_days.get());
                if forecast.days.len() < requested {
                    warn!(
                        requested,
                        available = forecast.days.len(),
                        "provider returned fewer forecast days than requested"
                    );
                }
                report::write_forecast(&mut out, &settings.location, &forecast, requested)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments() {
        let cli = Cli::try_parse_from(["skycast"]).unwrap();
        assert!(cli.args.is_empty());
    }

    #[test]
    fn positional_override() {
        let cli = Cli::try_parse_from(["skycast", "Paris, FR", "current", "5"]).unwrap();
        assert_eq!(cli.args, vec!["Paris, FR", "current", "5"]);
    }

    #[test]
    fn any_count_is_accepted_for_the_resolver_to_judge() {
        let cli = Cli::try_parse_from(["skycast", "a", "b", "c", "d", "e"]).unwrap();
        assert_eq!(cli.args.len(), 5);
    }

    #[test]
    fn flag_lookalikes_are_positional() {
        let cli = Cli::try_parse_from(["skycast", "--help"]).unwrap();
        assert_eq!(cli.args, vec!["--help"]);

        let cli = Cli::try_parse_from(["skycast", "Oslo", "forecast", "-3"]).unwrap();
        assert_eq!(cli.args, vec!["Oslo", "forecast", "-3"]);
    }
}
