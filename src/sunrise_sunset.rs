// Module containing response data structures for sun event times
pub mod response;
pub mod transport;

use chrono::NaiveDate;
use chrono_tz::Tz;
use tracing::{debug, info, warn};

use crate::error::AppError;
use crate::time_format::seconds_to_human;
use response::{ApiEnvelope, LocalizedResult};
use transport::{HttpGet, ReqwestTransport};

// API endpoint for the sunrise-sunset.org service
const SUNRISE_SUNSET_ENDPOINT: &str = "https://api.sunrise-sunset.org/json";

/// What to do when the configured timezone name cannot be resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimezonePolicy {
    /// Log a warning and display times in UTC
    #[default]
    FallbackToUtc,
    /// Return `AppError::UnknownTimezone` before any request is made
    Fail,
}

/// Resolves an IANA timezone name such as "Europe/Belgrade".
pub fn resolve_timezone(name: &str) -> Result<Tz, AppError> {
    name.parse::<Tz>()
        .map_err(|_| AppError::UnknownTimezone(name.to_string()))
}

/// Client for a single day's sun event times at one location.
///
/// Parameters are not validated here; out-of-range coordinates are reported by the API
/// and an unknown timezone only matters once `fetch_localized` runs.
#[derive(Debug, Clone)]
pub struct SunriseSunsetClient<T = ReqwestTransport> {
    latitude: f64,
    longitude: f64,
    date: NaiveDate,
    timezone: String,
    transport: T,
}

impl SunriseSunsetClient {
    pub fn new(latitude: f64, longitude: f64, date: NaiveDate, timezone: impl Into<String>) -> Self {
        Self::with_transport(ReqwestTransport::default(), latitude, longitude, date, timezone)
    }
}

impl<T: HttpGet> SunriseSunsetClient<T> {
    pub fn with_transport(
        transport: T,
        latitude: f64,
        longitude: f64,
        date: NaiveDate,
        timezone: impl Into<String>,
    ) -> Self {
        SunriseSunsetClient {
            latitude,
            longitude,
            date,
            timezone: timezone.into(),
            transport,
        }
    }

    /// URL of the GET request, with coordinates fixed to 4 decimal places.
    pub fn request_url(&self) -> String {
        format!(
            "{}?lat={:.4}&lng={:.4}&date={}&formatted=0",
            SUNRISE_SUNSET_ENDPOINT,
            self.latitude,
            self.longitude,
            self.date.format("%Y-%m-%d")
        )
    }

    /// Fetches sun event times in UTC.
    ///
    /// # Returns
    /// * `ApiEnvelope` decoded strictly: any field unknown to the schema is an error
    /// * Transport and decode errors unchanged
    pub async fn fetch_utc(&self) -> Result<ApiEnvelope, AppError> {
        let url = self.request_url();
        info!("Fetching sun times: {}", url);

        let body = self.transport.get(&url).await?;
        let envelope: ApiEnvelope = serde_json::from_slice(&body)?;
        debug!("Sun times fetched successfully: {:?}", envelope);
        Ok(envelope)
    }

    /// Fetches sun event times and converts them into the configured timezone.
    ///
    /// The timezone is resolved first; `policy` decides whether an unknown name falls back
    /// to UTC or fails without issuing the request.
    pub async fn fetch_localized(&self, policy: TimezonePolicy) -> Result<LocalizedResult, AppError> {
        let tz = match (resolve_timezone(&self.timezone), policy) {
            (Ok(tz), _) => tz,
            (Err(e), TimezonePolicy::Fail) => return Err(e),
            (Err(e), TimezonePolicy::FallbackToUtc) => {
                warn!("{}, displaying times in UTC", e);
                Tz::UTC
            }
        };

        let envelope = self.fetch_utc().await?;
        if !envelope.is_ok() {
            warn!("API reported status {:?}", envelope.status);
        }

        let day_length = seconds_to_human(envelope.results.day_length);
        Ok(LocalizedResult::from_utc(&envelope.results, tz, day_length))
    }
}
