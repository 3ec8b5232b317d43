use crate::config::service_config::ServiceConfig;
use crate::core::{MeetQuery, Venue, VenueSource};
use crate::domain::model::venue_url;
use crate::utils::error::{MeetsError, Result};
use crate::utils::validation::{validate_url, Validate};
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

#[derive(Debug, Deserialize)]
struct VenuesResponse {
    venues: Vec<RawVenue>,
}

#[derive(Debug, Deserialize)]
struct RawVenue {
    #[serde(rename = "Id")]
    id: RawId,
    #[serde(rename = "Name")]
    name: String,
}

// 上游的 Id 有時是字串有時是數字，統一當成不透明字串
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Text(text) => text,
            RawId::Number(number) => number.to_string(),
        }
    }
}

/// 依座標查詢附近的聚會地點
pub struct MeetFinder {
    client: Client,
    endpoint: Url,
    venue_base_url: String,
}

impl MeetFinder {
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        config.validate()?;
        let endpoint = validate_url("service.endpoint", &config.endpoint)?;

        // 每次查詢各自建立連線，不保留閒置連線
        let client = Client::builder()
            .timeout(config.timeout())
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| MeetsError::ConfigError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            endpoint,
            venue_base_url: config.venue_base_url.clone(),
        })
    }

    /// `<endpoint>?lat=..&lon=..&rad=..&lim=..`
    pub fn request_url(&self, query: &MeetQuery) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("lat", &query.latitude.to_string())
            .append_pair("lon", &query.longitude.to_string())
            .append_pair("rad", &query.radius.to_string())
            .append_pair("lim", &query.limit.to_string());
        url
    }
}

#[async_trait::async_trait]
impl VenueSource for MeetFinder {
    async fn find_nearby_venues(&self, query: &MeetQuery) -> Result<Vec<Venue>> {
        let url = self.request_url(query);
        tracing::debug!("Requesting nearby venues: {}", url);

        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| MeetsError::fetch(format!("GET {} failed", url), e))?;

        let status = response.status();
        tracing::debug!("Venue service response status: {}", status);

        if !status.is_success() {
            return Err(MeetsError::FetchError {
                message: format!("venue service returned {}", status),
                source: None,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| MeetsError::fetch("failed to read venue service response", e))?;

        let venues = decode_venues(&body, &self.venue_base_url)?;
        tracing::debug!("Decoded {} venues", venues.len());
        Ok(venues)
    }
}

/// 解析 `{"venues": [{"Id": .., "Name": ..}, ..]}`，保留上游順序
pub fn decode_venues(body: &str, venue_base_url: &str) -> Result<Vec<Venue>> {
    let response: VenuesResponse = serde_json::from_str(body)
        .map_err(|e| MeetsError::decode("unexpected venue service response", e))?;

    Ok(response
        .venues
        .into_iter()
        .map(|raw| {
            let id = raw.id.into_string();
            let url = venue_url(venue_base_url, &id);
            Venue::new(id, raw.name, url)
        })
        .collect())
}
