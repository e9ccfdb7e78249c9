use std::{fmt::Display, fs, path::Path};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::{
    core::{DailySummary, HourlySample, Series},
    prelude::*,
};

/// Everything one pipeline run produced, in export shape.
#[derive(Serialize)]
pub struct Document<'a> {
    pub metadata: Metadata,

    #[serde(serialize_with = "serialize_day_keyed")]
    pub hourly: &'a Series<NaiveDate, Vec<HourlySample>>,

    #[serde(serialize_with = "serialize_day_keyed")]
    pub daily_summary: &'a Series<NaiveDate, DailySummary>,
}

#[derive(Serialize)]
pub struct Metadata {
    pub latitude: f64,
    pub longitude: f64,
    pub forecast_days: u8,
    pub collected_at: DateTime<Utc>,
}

pub fn write_json(path: &Path, document: &Document<'_>) -> Result {
    let json = serde_json::to_string_pretty(document)
        .context("failed to serialize the export document")?;
    fs::write(path, json).with_context(|| format!("failed to write `{}`", path.display()))?;
    info!(path = %path.display(), "exported");
    Ok(())
}

/// Day-keyed series serialise as JSON objects, keys in series order.
fn serialize_day_keyed<K: Display, V: Serialize, S: Serializer>(
    series: &Series<K, V>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(series.len()))?;
    for (date, value) in series {
        map.serialize_entry(&date.to_string(), value)?;
    }
    map.end()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::core::{HourlySample, classify, summarize};

    #[test]
    fn test_document_serialises_day_keyed_maps() {
        let sample = |date: NaiveDate| {
            let wave_height = Some(1.5);
            let swell_height = Some(1.2);
            let swell_period = Some(8.0);
            HourlySample {
                timestamp: date.and_hms_opt(6, 0, 0).unwrap().and_utc(),
                hour: 6,
                wave_height,
                wave_direction: Some(290.0),
                wind_wave_height: None,
                wind_wave_direction: None,
                swell_height,
                swell_direction: Some(300.0),
                swell_period,
                condition: classify(wave_height, swell_height, swell_period),
            }
        };
        let first = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let second = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        let hourly = vec![(first, vec![sample(first)]), (second, vec![sample(second)])];
        let daily_summary = summarize(&hourly);
        let document = Document {
            metadata: Metadata {
                latitude: 32.08,
                longitude: 34.77,
                forecast_days: 2,
                collected_at: first.and_hms_opt(12, 0, 0).unwrap().and_utc(),
            },
            hourly: &hourly,
            daily_summary: &daily_summary,
        };

        let json = serde_json::to_string_pretty(&document).unwrap();
        let first_position = json.find(r#""2024-06-01""#).unwrap();
        let second_position = json.find(r#""2024-06-02""#).unwrap();
        assert!(first_position < second_position);
        assert!(json.contains(r#""condition": "Good""#));
        assert!(json.contains(r#""best_condition": "Good""#));
        assert!(json.contains(r#""sample_count": 1"#));
    }
}
