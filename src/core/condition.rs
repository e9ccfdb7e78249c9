use std::fmt::{Display, Formatter};

use serde::Serialize;

/// Surf condition rating for one hourly sample.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub enum Condition {
    Good,

    #[serde(rename = "OK")]
    Ok,

    Bad,

    /// At least one of the rated measurements is absent.
    Unknown,
}

impl Display for Condition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Good => write!(f, "Good"),
            Self::Ok => write!(f, "OK"),
            Self::Bad => write!(f, "Bad"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

struct Rule {
    applies: fn(f64, f64, f64) -> bool,
    verdict: Condition,
}

/// Evaluated top to bottom, first match wins: the safety rejections come
/// before the quality bands, so the bands need not repeat the outer limits.
///
/// Thresholds are tuned for the Israeli Mediterranean coast, where waves run
/// smaller than on open ocean.
const RULES: [Rule; 6] = [
    // Dangerously high.
    Rule { applies: |wave, _, _| wave > 4.0, verdict: Condition::Bad },
    // Too small to surf.
    Rule { applies: |wave, _, _| wave < 0.2, verdict: Condition::Bad },
    // Poor swell.
    Rule { applies: |_, swell, _| swell < 0.4, verdict: Condition::Bad },
    // Poor swell period.
    Rule { applies: |_, _, period| period < 5.0, verdict: Condition::Bad },
    Rule {
        applies: |wave, swell, period| {
            (1.0..=3.2).contains(&wave)
                && (0.8..=3.2).contains(&swell)
                && (7.5..=15.0).contains(&period)
        },
        verdict: Condition::Good,
    },
    Rule {
        applies: |wave, swell, period| {
            (0.5..=4.0).contains(&wave)
                && (0.4..=3.8).contains(&swell)
                && (5.0..=18.0).contains(&period)
        },
        verdict: Condition::Ok,
    },
];

/// Rates a (wave height, swell height, swell period) triple, in metres and
/// seconds. Total over all inputs: an absent measurement yields
/// [`Condition::Unknown`], anything that matches no rule is [`Condition::Bad`].
#[must_use]
pub fn classify(
    wave_height: Option<f64>,
    swell_height: Option<f64>,
    swell_period: Option<f64>,
) -> Condition {
    let (Some(wave), Some(swell), Some(period)) = (wave_height, swell_height, swell_period) else {
        return Condition::Unknown;
    };
    RULES
        .iter()
        .find(|rule| (rule.applies)(wave, swell, period))
        .map_or(Condition::Bad, |rule| rule.verdict)
}
