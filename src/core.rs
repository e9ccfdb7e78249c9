mod condition;
mod ingest;
mod sample;
mod series;
mod summary;

pub use self::{
    condition::{Condition, classify},
    ingest::group_by_day,
    sample::HourlySample,
    series::{Point, Series},
    summary::{DailySummary, summarize},
};
