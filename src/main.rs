mod api;
mod cli;
mod core;
mod export;
mod prelude;
mod render;
mod spots;

use chrono::Utc;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::{
    api::OpenMeteo,
    cli::{Args, Command, ForecastArgs},
    core::{group_by_day, summarize},
    prelude::*,
};

#[tokio::main]
async fn main() -> Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Args::parse().command {
        Command::Forecast(args) => forecast(args).await,
        Command::Spots => {
            println!("{}", render::spot_table());
            Ok(())
        }
    }
}

async fn forecast(args: ForecastArgs) -> Result {
    let (latitude, longitude) = args.location.resolve()?;
    let forecast = OpenMeteo::try_new()?.get_forecast(latitude, longitude, args.days).await?;
    let buckets = group_by_day(&forecast)?;
    info!(n_days = buckets.len(), "grouped the forecast");
    let summaries = summarize(&buckets);

    if args.hourly {
        for (date, samples) in &buckets {
            println!("{}", render::hourly_table(*date, samples));
        }
    }
    println!("{}", render::daily_summary_table(&summaries));

    if let Some(path) = &args.export {
        let document = export::Document {
            metadata: export::Metadata {
                latitude,
                longitude,
                forecast_days: args.days,
                collected_at: Utc::now(),
            },
            hourly: &buckets,
            daily_summary: &summaries,
        };
        export::write_json(path, &document)?;
    }
    Ok(())
}
