use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{prelude::*, spots};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch the marine forecast and rate the surf conditions per day.
    Forecast(ForecastArgs),

    /// List the known surf spots.
    Spots,
}

#[derive(Parser)]
pub struct ForecastArgs {
    #[clap(flatten)]
    pub location: LocationArgs,

    /// Forecast length in days.
    #[clap(long, default_value = "7", env = "FORECAST_DAYS")]
    pub days: u8,

    /// Render the hourly detail tables in addition to the daily summary.
    #[clap(long)]
    pub hourly: bool,

    /// Write the full result set to a JSON file.
    #[clap(long = "export", env = "EXPORT_PATH")]
    pub export: Option<PathBuf>,
}

#[derive(Parser)]
pub struct LocationArgs {
    /// Named surf spot, see `wavecast spots`.
    #[clap(long, env = "SPOT", conflicts_with_all = ["latitude", "longitude"])]
    pub spot: Option<String>,

    #[clap(long, env = "LATITUDE", requires = "longitude", allow_negative_numbers = true)]
    pub latitude: Option<f64>,

    #[clap(long, env = "LONGITUDE", requires = "latitude", allow_negative_numbers = true)]
    pub longitude: Option<f64>,
}

impl LocationArgs {
    /// Explicit coordinates win, then the named spot, then the default spot.
    pub fn resolve(&self) -> Result<(f64, f64)> {
        if let (Some(latitude), Some(longitude)) = (self.latitude, self.longitude) {
            return Ok((latitude, longitude));
        }
        let slug = self.spot.as_deref().unwrap_or(spots::DEFAULT_SLUG);
        let spot = spots::find(slug).with_context(|| format!("unknown spot: `{slug}`"))?;
        Ok((spot.latitude, spot.longitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_coordinates_win() {
        let location = LocationArgs {
            spot: None,
            latitude: Some(-33.8),
            longitude: Some(151.3),
        };
        assert_eq!(location.resolve().unwrap(), (-33.8, 151.3));
    }

    #[test]
    fn test_defaults_to_the_default_spot() {
        let location = LocationArgs { spot: None, latitude: None, longitude: None };
        let (latitude, longitude) = location.resolve().unwrap();
        let default_spot = spots::find(spots::DEFAULT_SLUG).unwrap();
        assert_eq!((latitude, longitude), (default_spot.latitude, default_spot.longitude));
    }

    #[test]
    fn test_unknown_spot_fails() {
        let location =
            LocationArgs { spot: Some("nazare".to_string()), latitude: None, longitude: None };
        assert!(location.resolve().is_err());
    }
}
