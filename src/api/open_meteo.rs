//! [Open-Meteo Marine API](https://open-meteo.com/en/docs/marine-weather-api) client.

use reqwest::Client;
use serde::Deserialize;

use crate::{api::client, prelude::*};

const BASE_URL: &str = "https://marine-api.open-meteo.com/v1/marine";

/// The hourly variables requested from the API, in payload order.
const HOURLY_FIELDS: &str = "wave_height,wave_direction,wind_wave_height,wind_wave_direction,\
                             swell_wave_height,swell_wave_direction,swell_wave_period";

pub struct Api(Client);

impl Api {
    pub fn try_new() -> Result<Self> {
        Ok(Self(client::try_new()?))
    }

    /// Fetches the hourly marine forecast for a point. Coordinates are passed
    /// through as given: range checking is the API's business.
    #[instrument(
        skip_all,
        fields(latitude = latitude, longitude = longitude, days = days),
        name = "Fetching the marine forecast…",
    )]
    pub async fn get_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        days: u8,
    ) -> Result<MarineForecast> {
        self.0
            .get(BASE_URL)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("hourly", HOURLY_FIELDS.to_string()),
                ("length", days.to_string()),
            ])
            .send()
            .await
            .context("failed to call the marine API")?
            .error_for_status()
            .context("the marine API request failed")?
            .json()
            .await
            .context("failed to deserialize the marine forecast")
    }
}

/// Raw response payload: parallel time-indexed arrays under `hourly`.
#[derive(Debug, Default, Deserialize)]
pub struct MarineForecast {
    /// Absent entirely when the API returned no time series.
    pub hourly: Option<HourlyPayload>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HourlyPayload {
    /// ISO-8601 timestamps; every other array runs parallel to this one.
    #[serde(default)]
    pub time: Vec<String>,

    #[serde(default)]
    pub wave_height: Vec<Option<f64>>,

    #[serde(default)]
    pub wave_direction: Vec<Option<f64>>,

    #[serde(default)]
    pub wind_wave_height: Vec<Option<f64>>,

    #[serde(default)]
    pub wind_wave_direction: Vec<Option<f64>>,

    #[serde(default)]
    pub swell_wave_height: Vec<Option<f64>>,

    #[serde(default)]
    pub swell_wave_direction: Vec<Option<f64>>,

    #[serde(default)]
    pub swell_wave_period: Vec<Option<f64>>,
}
