//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};

/// Form payload for `POST /new`.
///
/// Submitted as `application/x-www-form-urlencoded` with a single `url`
/// field. The value is stored verbatim; no URL validation is applied.
#[derive(Debug, Deserialize)]
pub struct NewUrlForm {
    pub url: String,
}

/// Response body for `POST /new`.
///
/// Uses untagged enum for cleaner JSON structure (no discriminator field):
/// a fresh mapping and a duplicate submission serialize to two different
/// flat objects.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum NewUrlResponse {
    /// `{"long_url": ..., "short_url": ...}`
    Created { long_url: String, short_url: String },
    /// `{"status": "002", "reason": "URL already exists", "short_url": ...}`
    AlreadyExists {
        status: &'static str,
        reason: &'static str,
        short_url: String,
    },
}

impl NewUrlResponse {
    /// Builds the response for a newly created mapping.
    pub fn created(long_url: String, short_code: String) -> Self {
        Self::Created {
            long_url,
            short_url: short_code,
        }
    }

    /// Builds the already-exists response, status code "002".
    pub fn already_exists(short_code: String) -> Self {
        Self::AlreadyExists {
            status: "002",
            reason: "URL already exists",
            short_url: short_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_created_serializes_flat() {
        let response = NewUrlResponse::created(
            "https://example.com".to_string(),
            "ab3".to_string(),
        );

        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(
            value,
            json!({ "long_url": "https://example.com", "short_url": "ab3" })
        );
    }

    #[test]
    fn test_already_exists_carries_status_002() {
        let response = NewUrlResponse::already_exists("ab3".to_string());

        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(
            value,
            json!({
                "status": "002",
                "reason": "URL already exists",
                "short_url": "ab3"
            })
        );
    }
}
