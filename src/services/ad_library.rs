use anyhow::{bail, Context};
use async_trait::async_trait;
use serde::Serialize;

use crate::domain::ad::AdLibraryPage;

const AD_LIBRARY_URL: &str = "https://meta-ad-library.p.rapidapi.com/search/ads";
const AD_LIBRARY_HOST: &str = "meta-ad-library.p.rapidapi.com";

// Fixed search filters, not exposed to callers
const ACTIVE_STATUS: &str = "active";
const MEDIA_TYPES: &str = "all";
const AD_TYPE: &str = "all";
const COUNTRY_CODE: &str = "IN";

/// A paginated source of raw ad records.
#[async_trait]
pub trait AdSource {
    async fn fetch_page(
        &self,
        query: &str,
        continuation_token: Option<&str>,
    ) -> anyhow::Result<AdLibraryPage>;
}

pub struct MetaAdLibraryClient {
    client: reqwest::Client,
    api_key: String,
}

#[derive(Serialize)]
struct SearchQuery<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    continuation_token: Option<&'a str>,
    active_status: &'a str,
    media_types: &'a str,
    ad_type: &'a str,
    country_code: &'a str,
}

impl MetaAdLibraryClient {
    pub fn new(api_key: String) -> Self {
        let client = reqwest::Client::new();

        MetaAdLibraryClient { client, api_key }
    }
}

#[async_trait]
impl AdSource for MetaAdLibraryClient {
    async fn fetch_page(
        &self,
        query: &str,
        continuation_token: Option<&str>,
    ) -> anyhow::Result<AdLibraryPage> {
        let res = self
            .client
            .get(AD_LIBRARY_URL)
            .query(&SearchQuery {
                query,
                continuation_token,
                active_status: ACTIVE_STATUS,
                media_types: MEDIA_TYPES,
                ad_type: AD_TYPE,
                country_code: COUNTRY_CODE,
            })
            .header("x-rapidapi-host", AD_LIBRARY_HOST)
            .header("x-rapidapi-key", &self.api_key)
            .send()
            .await
            .context("Failed to send ad library search request")?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            bail!("Ad library returned {}: {}", status, body);
        }

        res.json::<AdLibraryPage>()
            .await
            .context("Failed to deserialize ad library response")
    }
}
