use chrono::NaiveDate;
use comfy_table::{Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{Condition, DailySummary, HourlySample, Series},
    spots::SPOTS,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

const fn condition_color(condition: Condition) -> Color {
    match condition {
        Condition::Good => Color::Green,
        Condition::Ok => Color::DarkYellow,
        Condition::Bad => Color::Red,
        Condition::Unknown => Color::Reset,
    }
}

fn metres(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |value| format!("{value:.2} m"))
}

fn seconds(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |value| format!("{value:.1} s"))
}

fn degrees(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |value| format!("{value:.0}°"))
}

#[must_use]
pub fn daily_summary_table(summaries: &Series<NaiveDate, DailySummary>) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Date",
        "Min wave",
        "Avg wave",
        "Max wave",
        "Max swell",
        "Avg period",
        "Good",
        "OK",
        "Bad",
        "Best",
    ]);
    for (date, summary) in summaries {
        table.add_row(vec![
            Cell::new(date),
            Cell::new(metres(Some(summary.min_wave_height))).set_alignment(CellAlignment::Right),
            Cell::new(metres(Some(summary.avg_wave_height))).set_alignment(CellAlignment::Right),
            Cell::new(metres(Some(summary.max_wave_height))).set_alignment(CellAlignment::Right),
            Cell::new(metres(summary.max_swell_height)).set_alignment(CellAlignment::Right),
            Cell::new(seconds(summary.avg_swell_period)).set_alignment(CellAlignment::Right),
            Cell::new(summary.good_hours).set_alignment(CellAlignment::Right).fg(Color::Green),
            Cell::new(summary.ok_hours).set_alignment(CellAlignment::Right).fg(Color::DarkYellow),
            Cell::new(summary.bad_hours).set_alignment(CellAlignment::Right).fg(Color::Red),
            Cell::new(summary.best_condition).fg(condition_color(summary.best_condition)),
        ]);
    }
    table
}

#[must_use]
pub fn hourly_table(date: NaiveDate, samples: &[HourlySample]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new(date),
        Cell::new("Wave"),
        Cell::new("Wave dir"),
        Cell::new("Wind wave"),
        Cell::new("Wind dir"),
        Cell::new("Swell"),
        Cell::new("Swell dir"),
        Cell::new("Period"),
        Cell::new("Rating"),
    ]);
    for sample in samples {
        table.add_row(vec![
            Cell::new(format!("{:02}:00", sample.hour)),
            Cell::new(metres(sample.wave_height)).set_alignment(CellAlignment::Right),
            Cell::new(degrees(sample.wave_direction)).set_alignment(CellAlignment::Right),
            Cell::new(metres(sample.wind_wave_height)).set_alignment(CellAlignment::Right),
            Cell::new(degrees(sample.wind_wave_direction)).set_alignment(CellAlignment::Right),
            Cell::new(metres(sample.swell_height)).set_alignment(CellAlignment::Right),
            Cell::new(degrees(sample.swell_direction)).set_alignment(CellAlignment::Right),
            Cell::new(seconds(sample.swell_period)).set_alignment(CellAlignment::Right),
            Cell::new(sample.condition).fg(condition_color(sample.condition)),
        ]);
    }
    table
}

#[must_use]
pub fn spot_table() -> Table {
    let mut table = new_table();
    table.set_header(vec!["Spot", "Name", "Latitude", "Longitude"]);
    for spot in SPOTS {
        table.add_row(vec![
            Cell::new(spot.slug),
            Cell::new(spot.name),
            Cell::new(format!("{:.4}", spot.latitude)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.4}", spot.longitude)).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}
