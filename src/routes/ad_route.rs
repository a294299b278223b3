use actix_web::{post, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::{
    configuration::CollectorSettings,
    domain::{ad::CollectedAd, idea::AdIdea},
    services::{collect_relevant_ads, MetaAdLibraryClient, TogetherClient},
};

#[derive(Deserialize)]
pub struct CompetitorAdRequest {
    product_name: String,
    company_name: String,
}

#[derive(Serialize)]
pub struct CompetitorAdResponse {
    ads: Vec<CollectedAd>,
}

#[post("/analyze-competitor-ads")]
async fn analyze_competitor_ads(
    body: web::Json<CompetitorAdRequest>,
    ad_library: web::Data<MetaAdLibraryClient>,
    together: web::Data<TogetherClient>,
    collector_settings: web::Data<CollectorSettings>,
) -> HttpResponse {
    let keyword = match together
        .generate_search_keyword(&body.product_name, &body.company_name)
        .await
    {
        Ok(keyword) => keyword,
        Err(e) => {
            log::error!("Failed to generate search keyword: {:?}", e);
            return HttpResponse::InternalServerError().finish();
        }
    };
    log::info!("Generated search keyword: {}", keyword);

    match collect_relevant_ads(
        ad_library.get_ref(),
        together.get_ref(),
        &keyword,
        &body.company_name,
        collector_settings.quota,
        collector_settings.max_pages,
    )
    .await
    {
        Ok(ads) => HttpResponse::Ok().json(CompetitorAdResponse { ads }),
        Err(e) => {
            log::error!("Failed to collect competitor ads: {:?}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[derive(Deserialize)]
pub struct AdIdeaRequest {
    competitor_ads: Vec<CollectedAd>,
    product_name: String,
}

#[derive(Serialize)]
pub struct AdIdeaResponse {
    ad_ideas: Vec<AdIdea>,
}

#[post("/generate-ad-ideas")]
async fn generate_ad_ideas(
    body: web::Json<AdIdeaRequest>,
    together: web::Data<TogetherClient>,
) -> HttpResponse {
    let mut ad_ideas: Vec<AdIdea> = vec![];

    for ad in body.competitor_ads.iter() {
        let text_prompt = match together.idea_from_ad_text(&ad.text, &body.product_name).await {
            Ok(idea) => idea,
            Err(e) => {
                log::error!("Failed to generate text idea: {:?}", e);
                return HttpResponse::InternalServerError().finish();
            }
        };

        let image_prompt = match together
            .idea_from_ad_image(&ad.image_url, &body.product_name)
            .await
        {
            Ok(idea) => idea,
            Err(e) => {
                log::error!("Failed to generate image idea: {:?}", e);
                return HttpResponse::InternalServerError().finish();
            }
        };

        log::info!("Generated idea pair for ad from {}", ad.page_name);
        ad_ideas.push(AdIdea {
            ad_text: ad.text.clone(),
            image_url: ad.image_url.clone(),
            text_prompt,
            image_prompt,
        });
    }

    HttpResponse::Ok().json(AdIdeaResponse { ad_ideas })
}
