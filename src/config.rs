use std::{env, str::FromStr, time::Duration};

use chrono::{Local, NaiveDate};

use crate::error::AppError;
use crate::sunrise_sunset::TimezonePolicy;

const DEFAULT_LATITUDE: f64 = 44.8040;
const DEFAULT_LONGITUDE: f64 = 20.4651;
const DEFAULT_TIMEZONE: &str = "Europe/Belgrade";

/// Runtime settings for a single lookup, read from `SUNRISE_*` environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub latitude: f64,
    pub longitude: f64,
    pub date: NaiveDate,
    pub timezone: String,
    /// HTTP timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
    pub timezone_policy: TimezonePolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let date = match lookup("SUNRISE_DATE") {
            Some(value) => NaiveDate::parse_from_str(&value, "%Y-%m-%d")
                .map_err(|e| AppError::InvalidConfig(format!("SUNRISE_DATE={}: {}", value, e)))?,
            None => Local::now().date_naive(),
        };

        let timezone_policy = match lookup("SUNRISE_STRICT_TZ").as_deref() {
            Some("1") | Some("true") => TimezonePolicy::Fail,
            Some("0") | Some("false") | None => TimezonePolicy::FallbackToUtc,
            Some(other) => {
                return Err(AppError::InvalidConfig(format!(
                    "SUNRISE_STRICT_TZ={}: expected true or false",
                    other
                )));
            }
        };

        Ok(Config {
            latitude: parse_or(&lookup, "SUNRISE_LAT", DEFAULT_LATITUDE)?,
            longitude: parse_or(&lookup, "SUNRISE_LNG", DEFAULT_LONGITUDE)?,
            date,
            timezone: lookup("SUNRISE_TZ").unwrap_or_else(|| DEFAULT_TIMEZONE.to_string()),
            timeout: parse_opt::<u64>(&lookup, "SUNRISE_TIMEOUT_SECS")?.map(Duration::from_secs),
            timezone_policy,
        })
    }
}

fn parse_opt<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key)
        .map(|value| {
            value
                .trim()
                .parse::<T>()
                .map_err(|e| AppError::InvalidConfig(format!("{}={}: {}", key, value, e)))
        })
        .transpose()
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    Ok(parse_opt(lookup, key)?.unwrap_or(default))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_point_at_belgrade() {
        let c = config(&[]).unwrap();
        assert_eq!(c.latitude, 44.8040);
        assert_eq!(c.longitude, 20.4651);
        assert_eq!(c.timezone, "Europe/Belgrade");
        assert_eq!(c.timeout, None);
        assert_eq!(c.timezone_policy, TimezonePolicy::FallbackToUtc);
    }

    #[test]
    fn reads_every_variable() {
        let c = config(&[
            ("SUNRISE_LAT", "51.5074"),
            ("SUNRISE_LNG", "-0.1278"),
            ("SUNRISE_DATE", "2024-12-21"),
            ("SUNRISE_TZ", "Europe/London"),
            ("SUNRISE_TIMEOUT_SECS", "10"),
            ("SUNRISE_STRICT_TZ", "true"),
        ])
        .unwrap();

        assert_eq!(c.latitude, 51.5074);
        assert_eq!(c.longitude, -0.1278);
        assert_eq!(c.date, NaiveDate::from_ymd_opt(2024, 12, 21).unwrap());
        assert_eq!(c.timezone, "Europe/London");
        assert_eq!(c.timeout, Some(Duration::from_secs(10)));
        assert_eq!(c.timezone_policy, TimezonePolicy::Fail);
    }

    #[test]
    fn rejects_unparsable_values() {
        assert!(matches!(config(&[("SUNRISE_LAT", "north")]), Err(AppError::InvalidConfig(_))));
        assert!(matches!(config(&[("SUNRISE_DATE", "21/12/2024")]), Err(AppError::InvalidConfig(_))));
        assert!(matches!(config(&[("SUNRISE_TIMEOUT_SECS", "-1")]), Err(AppError::InvalidConfig(_))));
        assert!(matches!(config(&[("SUNRISE_STRICT_TZ", "maybe")]), Err(AppError::InvalidConfig(_))));
    }
}
