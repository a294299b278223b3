use serde::{Deserialize, Serialize};

/// A template-style creative idea derived from one competitor ad.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdIdea {
    pub ad_text: String,
    pub image_url: String,
    pub text_prompt: String,
    pub image_prompt: String,
}
