use crate::domain::ad::{extract_collected_ad, CollectedAd};

use super::{AdSource, RelevanceClassifier};

/// Walks the ad library page by page, keeping relevant, well-formed ads
/// until `quota` is reached or the source runs out. Malformed records are
/// skipped; source and classifier failures propagate to the caller.
/// `max_pages` caps total fetches so a source that keeps returning empty
/// cursor-bearing pages cannot spin forever.
pub async fn collect_relevant_ads<S, C>(
    source: &S,
    classifier: &C,
    query: &str,
    excluded_advertiser: &str,
    quota: usize,
    max_pages: u32,
) -> anyhow::Result<Vec<CollectedAd>>
where
    S: AdSource,
    C: RelevanceClassifier,
{
    log::info!(
        "Collecting up to {} relevant ads for keyword: {}",
        quota,
        query
    );

    let mut relevant_ads: Vec<CollectedAd> = vec![];
    let mut page = source.fetch_page(query, None).await?;
    let mut pages_fetched: u32 = 1;

    'pages: while relevant_ads.len() < quota {
        for ad_group in page.results.iter() {
            for record in ad_group.iter() {
                // An advertiser is not a competitor of itself
                if record.page_name.as_deref() == Some(excluded_advertiser) {
                    continue;
                }

                let ad = match extract_collected_ad(record) {
                    Ok(ad) => ad,
                    Err(reason) => {
                        log::info!("Skipping malformed ad record: {:?}", reason);
                        continue;
                    }
                };

                if classifier.is_relevant(&ad.text, query).await? {
                    log::info!(
                        "Found relevant ad #{} from advertiser {}",
                        relevant_ads.len() + 1,
                        ad.page_name
                    );
                    relevant_ads.push(ad);

                    if relevant_ads.len() >= quota {
                        break 'pages;
                    }
                }
            }
        }

        let Some(token) = page.continuation_token.clone() else {
            log::info!("Ad library exhausted after {} page(s)", pages_fetched);
            break;
        };

        if pages_fetched >= max_pages {
            log::warn!("Reached the ceiling of {} pages, stopping early", max_pages);
            break;
        }

        page = source.fetch_page(query, Some(&token)).await?;
        pages_fetched += 1;

        // Single-shot retry: the ad library occasionally returns a page
        // with no results but a usable continuation token. A missing token
        // here means a cursor-less fetch of a fresh first page.
        if page.results.is_empty() && pages_fetched < max_pages {
            log::info!("Retrying fetch due to empty response");
            let retry_token = page.continuation_token.clone();
            page = source.fetch_page(query, retry_token.as_deref()).await?;
            pages_fetched += 1;
        }
    }

    log::info!("Collected {} relevant ads", relevant_ads.len());
    Ok(relevant_ads)
}
