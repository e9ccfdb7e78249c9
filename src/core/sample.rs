use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::condition::Condition;

/// One hourly forecast observation.
///
/// Every measurement is optional: `None` means the feed carried no reading
/// for that hour, which is not the same thing as a reading of zero.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HourlySample {
    pub timestamp: DateTime<Utc>,

    /// Hour of day in UTC, 0–23, always consistent with `timestamp`.
    pub hour: u32,

    pub wave_height: Option<f64>,
    pub wave_direction: Option<f64>,
    pub wind_wave_height: Option<f64>,
    pub wind_wave_direction: Option<f64>,
    pub swell_height: Option<f64>,
    pub swell_direction: Option<f64>,
    pub swell_period: Option<f64>,

    /// Computed once at construction from the wave height, swell height, and
    /// swell period.
    pub condition: Condition,
}
