//! Operator identity
//!
//! Payload of `GET /`: the configured email and repository URL plus the
//! current UTC time as an RFC3339 string with second precision.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Operator email reported by `GET /`
pub const DEFAULT_EMAIL: &str = "stephennwac0007@gmail.com";

/// Repository URL reported by `GET /`
pub const DEFAULT_GITHUB_URL: &str = "https://github.com/stephennwachukwu/stageone";

/// Fixed operator identity, loaded once at startup
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
    pub github_url: String,
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            email: DEFAULT_EMAIL.to_string(),
            github_url: DEFAULT_GITHUB_URL.to_string(),
        }
    }
}

/// Body of `GET /`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct InfoOutput {
    pub email: String,
    pub current_datetime: String,
    pub github_url: String,
}

/// Format a timestamp as RFC3339 with second precision and a `Z` suffix
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Build the identity payload for the given instant
pub fn build_info(identity: &Identity, now: DateTime<Utc>) -> InfoOutput {
    InfoOutput {
        email: identity.email.clone(),
        current_datetime: format_timestamp(now),
        github_url: identity.github_url.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp_rfc3339_utc() {
        let timestamp = Utc.with_ymd_and_hms(2025, 1, 31, 12, 0, 5).unwrap();
        assert_eq!(format_timestamp(timestamp), "2025-01-31T12:00:05Z");
    }

    #[test]
    fn test_format_timestamp_drops_subseconds() {
        let timestamp = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(format_timestamp(timestamp), "2023-11-14T22:13:20Z");
    }

    #[test]
    fn test_format_timestamp_parses_back() {
        let formatted = format_timestamp(Utc::now());
        assert!(DateTime::parse_from_rfc3339(&formatted).is_ok());
    }

    #[test]
    fn test_build_info_default_identity() {
        let now = Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap();
        let info = build_info(&Identity::default(), now);

        assert_eq!(info.email, DEFAULT_EMAIL);
        assert_eq!(info.github_url, DEFAULT_GITHUB_URL);
        assert_eq!(info.current_datetime, "2025-02-01T00:00:00Z");
    }

    #[test]
    fn test_default_identity_values() {
        let identity = Identity::default();

        assert_eq!(identity.email, "stephennwac0007@gmail.com");
        assert_eq!(
            identity.github_url,
            "https://github.com/stephennwachukwu/stageone"
        );
    }

    #[test]
    fn test_build_info_json_keys() {
        let identity = Identity {
            email: "ops@example.com".to_string(),
            github_url: "https://github.com/example/numclass".to_string(),
        };
        let now = Utc.with_ymd_and_hms(2025, 2, 1, 8, 30, 0).unwrap();

        let value = serde_json::to_value(build_info(&identity, now)).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "email": "ops@example.com",
                "current_datetime": "2025-02-01T08:30:00Z",
                "github_url": "https://github.com/example/numclass"
            })
        );
    }
}
