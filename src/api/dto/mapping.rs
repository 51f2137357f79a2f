//! DTOs shared by the mapping lookup endpoints.

use crate::domain::entities::UrlMapping;
use serde::Serialize;

/// A stored mapping as exposed by the read endpoints.
///
/// `short_url` carries the bare 3-character code, not a full URL; clients
/// prepend the service host themselves.
#[derive(Debug, Serialize)]
pub struct MappingResponse {
    pub long_url: String,
    pub short_url: String,
}

impl From<UrlMapping> for MappingResponse {
    fn from(mapping: UrlMapping) -> Self {
        Self {
            long_url: mapping.long_url,
            short_url: mapping.short_code,
        }
    }
}

/// In-body failure payload for lookups of unknown short codes.
///
/// Served with HTTP 200; `status` carries the service's own failure code
/// rather than the transport status.
#[derive(Debug, Serialize)]
pub struct LookupFailure {
    pub status: &'static str,
    pub reason: &'static str,
}

impl LookupFailure {
    /// The unknown-code payload, status code "001".
    pub fn invalid_short_url() -> Self {
        Self {
            status: "001",
            reason: "Invalid Short Url",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn test_mapping_response_from_entity() {
        let mapping = UrlMapping::new(
            3,
            "https://example.com/page".to_string(),
            "xy9".to_string(),
            0,
            Utc::now(),
        );

        let value = serde_json::to_value(MappingResponse::from(mapping)).unwrap();

        assert_eq!(
            value,
            json!({ "long_url": "https://example.com/page", "short_url": "xy9" })
        );
    }

    #[test]
    fn test_invalid_short_url_payload() {
        let value = serde_json::to_value(LookupFailure::invalid_short_url()).unwrap();

        assert_eq!(
            value,
            json!({ "status": "001", "reason": "Invalid Short Url" })
        );
    }
}
