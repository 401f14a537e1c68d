use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Status value the API reports for a successful lookup
const STATUS_OK: &str = "OK";

/// Response envelope returned by api.sunrise-sunset.org/json
/// Unknown fields are rejected; missing fields keep their default value
#[derive(serde::Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct ApiEnvelope {
    /// Sun event times for the requested day
    pub results: UtcResult,
    /// API status string (e.g. "OK", "INVALID_REQUEST")
    pub status: String,
}

impl ApiEnvelope {
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// Sun event times in UTC, as requested with `formatted=0`
/// Missing timestamps default to the Unix epoch
#[derive(serde::Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct UtcResult {
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
    pub solar_noon: DateTime<Utc>,
    /// Length of the day in seconds
    pub day_length: u64,
    pub civil_twilight_begin: DateTime<Utc>,
    pub civil_twilight_end: DateTime<Utc>,
    pub nautical_twilight_begin: DateTime<Utc>,
    pub nautical_twilight_end: DateTime<Utc>,
    pub astronomical_twilight_begin: DateTime<Utc>,
    pub astronomical_twilight_end: DateTime<Utc>,
}

/// Sun event times displayed in the requested timezone
#[derive(Debug, Clone, PartialEq)]
pub struct LocalizedResult {
    pub sunrise: DateTime<Tz>,
    pub sunset: DateTime<Tz>,
    pub solar_noon: DateTime<Tz>,
    /// Human-readable day length (e.g. "15 hours 10 minutes 37 seconds ")
    pub day_length: String,
    pub civil_twilight_begin: DateTime<Tz>,
    pub civil_twilight_end: DateTime<Tz>,
    pub nautical_twilight_begin: DateTime<Tz>,
    pub nautical_twilight_end: DateTime<Tz>,
    pub astronomical_twilight_begin: DateTime<Tz>,
    pub astronomical_twilight_end: DateTime<Tz>,
}

impl LocalizedResult {
    /// Converts every timestamp of `utc` into `tz` and formats the day length.
    pub fn from_utc(utc: &UtcResult, tz: Tz, day_length: String) -> Self {
        LocalizedResult {
            sunrise: utc.sunrise.with_timezone(&tz),
            sunset: utc.sunset.with_timezone(&tz),
            solar_noon: utc.solar_noon.with_timezone(&tz),
            day_length,
            civil_twilight_begin: utc.civil_twilight_begin.with_timezone(&tz),
            civil_twilight_end: utc.civil_twilight_end.with_timezone(&tz),
            nautical_twilight_begin: utc.nautical_twilight_begin.with_timezone(&tz),
            nautical_twilight_end: utc.nautical_twilight_end.with_timezone(&tz),
            astronomical_twilight_begin: utc.astronomical_twilight_begin.with_timezone(&tz),
            astronomical_twilight_end: utc.astronomical_twilight_end.with_timezone(&tz),
        }
    }
}
