use crate::config::OmdbConfig;
use crate::types::error::AppError;
use reqwest::{Client, ClientBuilder};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Metadata pulled from the OMDb lookup. Any field the API reports as "N/A"
/// comes back as None.
#[derive(Debug, Clone)]
pub struct OmdbMovie {
    pub title: String,
    pub year: Option<i32>,
    pub director: Option<String>,
    pub rating: Option<f64>,
}

#[derive(Deserialize)]
struct OmdbPayload {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "Director")]
    director: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

#[derive(Clone)]
pub struct OmdbClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(config: &OmdbConfig) -> Result<Self, AppError> {
        let client = ClientBuilder::new()
            .user_agent("moviweb/0.1 (+reqwest)")
            .timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| AppError::Lookup(format!("build client failed: {e}")))?;

        Ok(OmdbClient {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Looks a title up in OMDb. `Ok(None)` means the API answered but knows
    /// no such movie; transport and decode failures surface as `Lookup`.
    pub async fn fetch(&self, title: &str) -> Result<Option<OmdbMovie>, AppError> {
        let url = format!(
            "{}?apikey={}&t={}",
            self.endpoint,
            self.api_key,
            urlencoding::encode(title)
        );

        debug!("OMDb lookup for {:?}", title);

        let res = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Lookup(format!("request failed: {e}")))?;

        let status = res.status();
        if !status.is_success() {
            return Err(AppError::Lookup(format!("OMDb returned HTTP {status}")));
        }

        let payload: OmdbPayload = res
            .json()
            .await
            .map_err(|e| AppError::Lookup(format!("decode failed: {e}")))?;

        if payload.response != "True" {
            debug!(
                "OMDb has no match for {:?}: {}",
                title,
                payload.error.as_deref().unwrap_or("no reason given")
            );
            return Ok(None);
        }

        Ok(Some(parse_movie(payload, title)))
    }
}

fn parse_movie(payload: OmdbPayload, requested_title: &str) -> OmdbMovie {
    OmdbMovie {
        title: payload
            .title
            .filter(|t| t != "N/A")
            .unwrap_or_else(|| requested_title.to_string()),
        // Series report spans like "2010-2015"; keep the leading year.
        year: payload
            .year
            .filter(|y| y != "N/A")
            .and_then(|y| y.get(..4).and_then(|head| head.parse().ok())),
        director: payload.director.filter(|d| d != "N/A"),
        rating: payload
            .imdb_rating
            .filter(|r| r != "N/A")
            .and_then(|r| r.parse().ok()),
    }
}
