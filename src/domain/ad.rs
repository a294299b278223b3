use serde::{Deserialize, Serialize};

/// One page of ad library search results. The source groups ads into
/// sub-arrays; the grouping carries no meaning beyond iteration order.
#[derive(Debug, Clone, Deserialize)]
pub struct AdLibraryPage {
    #[serde(default)]
    pub results: Vec<Vec<AdRecord>>,
    #[serde(default)]
    pub continuation_token: Option<String>,
}

/// A raw ad record as returned by the ad library. The response shape is
/// not uniform across records, so every nested field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdRecord {
    #[serde(rename = "pageName")]
    pub page_name: Option<String>,
    #[serde(default)]
    pub snapshot: AdSnapshot,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdSnapshot {
    #[serde(default)]
    pub images: Vec<AdImage>,
    #[serde(default)]
    pub cards: Vec<AdCard>,
    pub body: Option<AdBody>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdImage {
    pub resized_image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdCard {
    pub resized_image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdBody {
    pub markup: Option<AdMarkup>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdMarkup {
    #[serde(rename = "__html")]
    pub html: Option<String>,
}

/// A fully extracted competitor ad. `image_url` and `text` are non-empty
/// by construction, records failing either extraction are discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectedAd {
    pub image_url: String,
    pub text: String,
    pub page_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SkipReason {
    MissingAdvertiser,
    MissingImage,
    EmptyAdCopy,
}

type ImageExtractor = fn(&AdSnapshot) -> Option<String>;

/// Image lookup strategies in priority order, first hit wins.
const IMAGE_EXTRACTORS: &[ImageExtractor] = &[image_from_images, image_from_cards];

fn image_from_images(snapshot: &AdSnapshot) -> Option<String> {
    snapshot
        .images
        .iter()
        .filter_map(|image| image.resized_image_url.clone())
        .find(|url| !url.is_empty())
}

fn image_from_cards(snapshot: &AdSnapshot) -> Option<String> {
    snapshot
        .cards
        .first()
        .and_then(|card| card.resized_image_url.clone())
        .filter(|url| !url.is_empty())
}

pub fn extract_image_url(snapshot: &AdSnapshot) -> Option<String> {
    IMAGE_EXTRACTORS
        .iter()
        .find_map(|extract| extract(snapshot))
}

pub fn extract_ad_copy(snapshot: &AdSnapshot) -> Option<String> {
    snapshot
        .body
        .as_ref()
        .and_then(|body| body.markup.as_ref())
        .and_then(|markup| markup.html.clone())
        .filter(|text| !text.is_empty())
}

pub fn extract_collected_ad(record: &AdRecord) -> Result<CollectedAd, SkipReason> {
    let page_name = record
        .page_name
        .clone()
        .filter(|name| !name.is_empty())
        .ok_or(SkipReason::MissingAdvertiser)?;
    let image_url = extract_image_url(&record.snapshot).ok_or(SkipReason::MissingImage)?;
    let text = extract_ad_copy(&record.snapshot).ok_or(SkipReason::EmptyAdCopy)?;

    Ok(CollectedAd {
        image_url,
        text,
        page_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markup_body(text: &str) -> Option<AdBody> {
        Some(AdBody {
            markup: Some(AdMarkup {
                html: Some(text.to_string()),
            }),
        })
    }

    #[test]
    fn first_nonempty_image_wins() {
        let snapshot = AdSnapshot {
            images: vec![
                AdImage {
                    resized_image_url: None,
                },
                AdImage {
                    resized_image_url: Some("".to_string()),
                },
                AdImage {
                    resized_image_url: Some("https://cdn.test/second.jpg".to_string()),
                },
            ],
            cards: vec![AdCard {
                resized_image_url: Some("https://cdn.test/card.jpg".to_string()),
            }],
            body: None,
        };

        assert_eq!(
            extract_image_url(&snapshot),
            Some("https://cdn.test/second.jpg".to_string())
        );
    }

    #[test]
    fn falls_back_to_first_card() {
        let snapshot = AdSnapshot {
            images: vec![],
            cards: vec![AdCard {
                resized_image_url: Some("https://cdn.test/card.jpg".to_string()),
            }],
            body: None,
        };

        assert_eq!(
            extract_image_url(&snapshot),
            Some("https://cdn.test/card.jpg".to_string())
        );
    }

    #[test]
    fn record_without_any_image_is_skipped() {
        let record = AdRecord {
            page_name: Some("Glow Cosmetics".to_string()),
            snapshot: AdSnapshot {
                images: vec![],
                cards: vec![],
                body: markup_body("Glow up your skin"),
            },
        };

        assert_eq!(extract_collected_ad(&record), Err(SkipReason::MissingImage));
    }

    #[test]
    fn record_with_empty_markup_is_skipped() {
        let record = AdRecord {
            page_name: Some("Glow Cosmetics".to_string()),
            snapshot: AdSnapshot {
                images: vec![AdImage {
                    resized_image_url: Some("https://cdn.test/ad.jpg".to_string()),
                }],
                cards: vec![],
                body: markup_body(""),
            },
        };

        assert_eq!(extract_collected_ad(&record), Err(SkipReason::EmptyAdCopy));
    }

    #[test]
    fn record_without_advertiser_is_skipped() {
        let record = AdRecord {
            page_name: None,
            snapshot: AdSnapshot {
                images: vec![AdImage {
                    resized_image_url: Some("https://cdn.test/ad.jpg".to_string()),
                }],
                cards: vec![],
                body: markup_body("Some ad copy"),
            },
        };

        assert_eq!(
            extract_collected_ad(&record),
            Err(SkipReason::MissingAdvertiser)
        );
    }

    #[test]
    fn extraction_is_idempotent() {
        let record = AdRecord {
            page_name: Some("Glow Cosmetics".to_string()),
            snapshot: AdSnapshot {
                images: vec![AdImage {
                    resized_image_url: Some("https://cdn.test/ad.jpg".to_string()),
                }],
                cards: vec![],
                body: markup_body("Glow up your skin"),
            },
        };

        assert_eq!(extract_collected_ad(&record), extract_collected_ad(&record));
    }

    #[test]
    fn parses_ad_library_response() {
        let raw = serde_json::json!({
            "results": [[{
                "pageName": "Glow Cosmetics",
                "isActive": true,
                "snapshot": {
                    "images": [{"resized_image_url": "https://cdn.test/ad.jpg"}],
                    "cards": [],
                    "body": {"markup": {"__html": "Glow up your skin"}}
                }
            }]],
            "continuation_token": "abc123"
        });

        let page: AdLibraryPage = serde_json::from_value(raw).unwrap();
        assert_eq!(page.continuation_token.as_deref(), Some("abc123"));

        let record = &page.results[0][0];
        let ad = extract_collected_ad(record).unwrap();
        assert_eq!(ad.page_name, "Glow Cosmetics");
        assert_eq!(ad.image_url, "https://cdn.test/ad.jpg");
        assert_eq!(ad.text, "Glow up your skin");
    }

    #[test]
    fn tolerates_record_with_no_snapshot() {
        let raw = serde_json::json!({
            "results": [[{"pageName": "Glow Cosmetics"}]]
        });

        let page: AdLibraryPage = serde_json::from_value(raw).unwrap();
        assert_eq!(
            extract_collected_ad(&page.results[0][0]),
            Err(SkipReason::MissingImage)
        );
        assert!(page.continuation_token.is_none());
    }
}
