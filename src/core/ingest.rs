use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike, Utc};

use crate::{
    api::{HourlyPayload, MarineForecast},
    core::{condition::classify, sample::HourlySample, series::Series},
    prelude::*,
};

/// Groups the raw hourly payload into per-day samples, keyed by the UTC
/// calendar date of each timestamp. Buckets are created lazily and distinct
/// dates keep the order in which they first appear.
///
/// A payload without an `hourly` container (or without a `time` array) is
/// "no data", not an error. A timestamp that fails to parse fails the whole
/// call: there is no partial-success mode.
pub fn group_by_day(
    forecast: &MarineForecast,
) -> Result<Series<NaiveDate, Vec<HourlySample>>> {
    let Some(hourly) = &forecast.hourly else {
        return Ok(Series::new());
    };
    let mut buckets: Series<NaiveDate, Vec<HourlySample>> = Series::new();
    for (index, raw_timestamp) in hourly.time.iter().enumerate() {
        let timestamp = parse_timestamp(raw_timestamp)?;
        let sample = build_sample(hourly, index, timestamp);
        let date = timestamp.date_naive();
        match buckets.iter_mut().find(|(key, _)| *key == date) {
            Some((_, samples)) => samples.push(sample),
            None => buckets.push((date, vec![sample])),
        }
    }
    debug!(n_days = buckets.len(), "grouped the hourly payload");
    Ok(buckets)
}

fn build_sample(hourly: &HourlyPayload, index: usize, timestamp: DateTime<Utc>) -> HourlySample {
    let wave_height = value_at(&hourly.wave_height, index);
    let swell_height = value_at(&hourly.swell_wave_height, index);
    let swell_period = value_at(&hourly.swell_wave_period, index);
    HourlySample {
        timestamp,
        hour: timestamp.hour(),
        wave_height,
        wave_direction: value_at(&hourly.wave_direction, index),
        wind_wave_height: value_at(&hourly.wind_wave_height, index),
        wind_wave_direction: value_at(&hourly.wind_wave_direction, index),
        swell_height,
        swell_direction: value_at(&hourly.swell_wave_direction, index),
        swell_period,
        condition: classify(wave_height, swell_height, swell_period),
    }
}

/// A missing array, a too-short array, and an explicit `null` all read as an
/// absent measurement.
fn value_at(values: &[Option<f64>], index: usize) -> Option<f64> {
    values.get(index).copied().flatten()
}

/// Parses an ISO-8601 timestamp and normalises it to UTC. A trailing `Z`
/// designator is `+00:00`, and a timestamp without any offset is taken as
/// already UTC (the Open-Meteo default).
fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(timestamp.with_timezone(&Utc));
    }
    // RFC 3339 insists on seconds, while the API serves minute precision:
    let naive = raw.strip_suffix('Z').unwrap_or(raw);
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(naive, format) {
            return Ok(timestamp.and_utc());
        }
    }
    bail!("malformed timestamp: `{raw}`")
}
