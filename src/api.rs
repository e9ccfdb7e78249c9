mod client;
mod open_meteo;

pub use self::open_meteo::{Api as OpenMeteo, HourlyPayload, MarineForecast};
