use tracing::{Instrument, error, info, span};
use tracing_subscriber::EnvFilter;

use sunrise_sunset_client::config::Config;
use sunrise_sunset_client::sunrise_sunset::{SunriseSunsetClient, transport::ReqwestTransport};

const TIME_FORMAT: &str = "%H:%M:%S";

/// Reads the location, date and timezone from the environment, fetches that day's sun times
/// and prints a short report. Any failure is logged and ends the process with a non-zero status.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    info!(
        "Looking up sun times for {}, {} on {} ({})",
        config.latitude, config.longitude, config.date, config.timezone
    );

    let client = match config.timeout {
        Some(timeout) => SunriseSunsetClient::with_transport(
            ReqwestTransport::with_timeout(timeout)?,
            config.latitude,
            config.longitude,
            config.date,
            config.timezone.as_str(),
        ),
        None => SunriseSunsetClient::new(
            config.latitude,
            config.longitude,
            config.date,
            config.timezone.as_str(),
        ),
    };

    let result = client
        .fetch_localized(config.timezone_policy)
        .instrument(span!(tracing::Level::INFO, "fetch", date = %config.date))
        .await
        .inspect_err(|e| error!("Failed to fetch sun times: {}", e))?;

    println!(
        "Date: {}\nSunrise: {}\nSunset: {}\nDay length: {}",
        config.date.format("%Y-%m-%d"),
        result.sunrise.format(TIME_FORMAT),
        result.sunset.format(TIME_FORMAT),
        result.day_length
    );

    Ok(())
}
