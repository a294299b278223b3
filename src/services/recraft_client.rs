use std::time::Duration;

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

const IMAGE_SIZE: &str = "1024x1024";

pub struct RecraftClient {
    client: reqwest::Client,
    api_key: String,
    url: String,
}

#[derive(Serialize)]
struct GenerationRequest<'a> {
    prompt: &'a str,
    style: &'a str,
    n: u8,
    response_format: &'a str,
    size: &'a str,
    controls: GenerationControls<'a>,
}

#[derive(Serialize)]
struct GenerationControls<'a> {
    quality: &'a str,
    composition: &'a str,
    style_strength: &'a str,
}

#[derive(Deserialize)]
struct GenerationResponse {
    data: Vec<GeneratedImage>,
}

#[derive(Deserialize)]
struct GeneratedImage {
    url: Option<String>,
}

impl RecraftClient {
    pub fn new(api_key: String) -> Self {
        let client = reqwest::Client::new();

        RecraftClient {
            client,
            api_key,
            url: "https://external.api.recraft.ai/v1/images/generations".to_string(),
        }
    }

    pub async fn generate_marketing_ad_image(
        &self,
        prompt: &str,
        style: &str,
    ) -> anyhow::Result<String> {
        let request = GenerationRequest {
            prompt,
            style,
            n: 1,
            response_format: "url",
            size: IMAGE_SIZE,
            controls: GenerationControls {
                quality: "high",
                composition: "centered",
                style_strength: "high",
            },
        };

        let res = self
            .client
            .post(self.url.clone())
            .bearer_auth(&self.api_key)
            .timeout(Duration::from_secs(15))
            .json(&request)
            .send()
            .await
            .context("Failed to send image generation request")?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            bail!("Recraft returned {}: {}", status, body);
        }

        let response = res
            .json::<GenerationResponse>()
            .await
            .context("Failed to deserialize Recraft response")?;

        response
            .data
            .first()
            .and_then(|image| image.url.clone())
            .context("No image url in Recraft response")
    }
}
