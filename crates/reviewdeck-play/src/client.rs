//! HTTP client for the app-directory API.

use reviewdeck_core::AppRecord;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum PlayError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("directory returned {status} for {app_id}: {body}")]
    Server {
        app_id: String,
        status: u16,
        body: String,
    },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Client for the app-directory's per-app metadata endpoint.
pub struct PlayClient {
    client: reqwest::Client,
    base_url: String,
    lang: String,
    country: String,
}

/// Directory response body. Fields the store does not report come back null.
#[derive(Deserialize)]
struct AppDetails {
    title: String,
    score: Option<f64>,
    ratings: Option<u64>,
    installs: Option<String>,
    developer: Option<String>,
}

impl PlayClient {
    /// Create a client for the given directory base URL (no trailing slash)
    /// and store locale.
    pub fn new(base_url: String, lang: String, country: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            lang,
            country,
        }
    }

    /// Fetch current metadata for one app. Not-found and rate-limit
    /// responses surface as [`PlayError::Server`]; callers decide whether
    /// to skip or abort.
    pub async fn app_details(&self, app_id: &str) -> Result<AppRecord, PlayError> {
        let url = format!(
            "{}/apps/{}?lang={}&country={}",
            self.base_url, app_id, self.lang, self.country
        );

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(PlayError::Server {
                app_id: app_id.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text().await?;
        let details: AppDetails = serde_json::from_str(&body)?;
        info!(app_id, title = %details.title, "fetched app details");

        Ok(AppRecord {
            app_id: app_id.to_string(),
            title: details.title,
            score: details.score,
            ratings: details.ratings,
            installs: details.installs,
            developer: details.developer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash() {
        let client = PlayClient::new(
            "https://directory.example/".into(),
            "en".into(),
            "us".into(),
        );
        assert_eq!(client.base_url, "https://directory.example");
    }

    #[test]
    fn app_details_json_with_nulls() {
        let json = r#"{
            "title": "SeaBank",
            "score": null,
            "ratings": null,
            "installs": "10,000,000+",
            "developer": null
        }"#;
        let details: AppDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.title, "SeaBank");
        assert!(details.score.is_none());
        assert_eq!(details.installs.as_deref(), Some("10,000,000+"));
    }

    #[test]
    fn app_details_json_full_record() {
        let json = r#"{
            "title": "Bank Jago",
            "score": 4.6,
            "ratings": 350000,
            "installs": "5,000,000+",
            "developer": "PT Bank Jago Tbk"
        }"#;
        let details: AppDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.score, Some(4.6));
        assert_eq!(details.ratings, Some(350_000));
    }
}
