//! BAN geocoding backend (Base Adresse Nationale)
//!
//! Uses the free api-adresse.data.gouv.fr search endpoint. Responses are
//! GeoJSON feature collections; coordinates come as [lng, lat].

use crate::error::{Error, Result};
use crate::geo::{GeoBackend, GeocodedAddress};
use serde::Deserialize;

const USER_AGENT: &str = "net-coverage/0.1.0";

/// BAN geocoding backend
#[derive(Debug, Clone)]
pub struct BanBackend {
    client: reqwest::Client,
    base_url: String,
    min_score: f64,
}

/// BAN search response (GeoJSON feature collection)
#[derive(Debug, Deserialize)]
struct BanResponse {
    #[serde(default)]
    features: Vec<BanFeature>,
}

#[derive(Debug, Deserialize)]
struct BanFeature {
    geometry: BanGeometry,
    #[serde(default)]
    properties: BanProperties,
}

#[derive(Debug, Deserialize)]
struct BanGeometry {
    #[serde(default)]
    coordinates: Vec<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct BanProperties {
    score: Option<f64>,
    label: Option<String>,
}

impl BanBackend {
    /// Create a new BAN backend
    pub fn new(base_url: &str, min_score: f64) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            min_score,
        }
    }

    /// Pick the best candidate from a search response
    ///
    /// A missing score counts as 0.0 and is rejected by the threshold, the
    /// same as an explicit low score. Candidates without a usable [lng, lat]
    /// pair are treated as low-confidence matches.
    fn select_candidate(
        response: BanResponse,
        min_score: f64,
        query: &str,
    ) -> Result<GeocodedAddress> {
        let feature = response
            .features
            .into_iter()
            .next()
            .ok_or_else(|| Error::AddressNotFound(query.to_string()))?;

        let score = feature.properties.score.unwrap_or(0.0);
        if score < min_score {
            return Err(Error::LowConfidence { score });
        }

        let mut coordinates = feature.geometry.coordinates.into_iter();
        let (lng, lat) = match (coordinates.next(), coordinates.next()) {
            (Some(lng), Some(lat)) if lng.is_finite() && lat.is_finite() => (lng, lat),
            _ => return Err(Error::LowConfidence { score }),
        };

        Ok(GeocodedAddress {
            lng,
            lat,
            score,
            label: feature.properties.label.unwrap_or_default(),
        })
    }
}

impl GeoBackend for BanBackend {
    async fn geocode(&self, query: &str) -> Result<GeocodedAddress> {
        let url = format!(
            "{}/search/?q={}&limit=1",
            self.base_url,
            urlencoding::encode(query)
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Upstream(format!("BAN request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Upstream(format!(
                "BAN returned status: {}",
                response.status()
            )));
        }

        let body: BanResponse = response
            .json()
            .await
            .map_err(|e| Error::Upstream(format!("Failed to parse BAN response: {}", e)))?;

        Self::select_candidate(body, self.min_score, query)
    }
}
