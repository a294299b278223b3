use actix_web::{post, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::services::{RecraftClient, TogetherClient};

#[derive(Deserialize)]
pub struct MarketingTextRequest {
    idea: String,
    company_name: String,
    product_name: String,
    user_input: Option<String>,
}

#[derive(Serialize)]
pub struct MarketingTextResponse {
    marketing_text: String,
}

#[post("/generate-marketing-text")]
async fn generate_marketing_text(
    body: web::Json<MarketingTextRequest>,
    together: web::Data<TogetherClient>,
) -> HttpResponse {
    match together
        .generate_marketing_text(
            &body.idea,
            &body.company_name,
            &body.product_name,
            body.user_input.as_deref(),
        )
        .await
    {
        Ok(marketing_text) => HttpResponse::Ok().json(MarketingTextResponse { marketing_text }),
        Err(e) => {
            log::error!("Failed to generate marketing text: {:?}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

fn default_style() -> String {
    "digital_illustration".to_string()
}

#[derive(Deserialize)]
pub struct ImageGenerationRequest {
    prompt: String,
    #[serde(default = "default_style")]
    style: String,
}

#[derive(Serialize)]
pub struct ImageGenerationResponse {
    image_url: String,
}

#[post("/generate-marketing-image")]
async fn generate_marketing_image(
    body: web::Json<ImageGenerationRequest>,
    recraft: web::Data<RecraftClient>,
) -> HttpResponse {
    match recraft
        .generate_marketing_ad_image(&body.prompt, &body.style)
        .await
    {
        Ok(image_url) => HttpResponse::Ok().json(ImageGenerationResponse { image_url }),
        Err(e) => {
            log::error!("Failed to generate marketing image: {:?}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
