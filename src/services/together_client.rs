use anyhow::Context;
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessageContentPartImageArgs,
        ChatCompletionRequestMessageContentPartTextArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs, ImageUrlArgs,
    },
    Client,
};
use async_trait::async_trait;

const TOGETHER_API_BASE: &str = "https://api.together.xyz/v1";
const TEXT_MODEL: &str = "meta-llama/Meta-Llama-3.1-8B-Instruct-Turbo";
const VISION_MODEL: &str = "meta-llama/Llama-3.2-11B-Vision-Instruct-Turbo";

/// Binary judgment of whether ad text relates to a search keyword.
#[async_trait]
pub trait RelevanceClassifier {
    async fn is_relevant(&self, ad_text: &str, keyword: &str) -> anyhow::Result<bool>;
}

pub struct TogetherClient {
    client: Client<OpenAIConfig>,
}

impl TogetherClient {
    pub fn new(api_key: String) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(TOGETHER_API_BASE);

        TogetherClient {
            client: Client::with_config(config),
        }
    }

    async fn complete(&self, prompt: String, model: &str) -> anyhow::Result<String> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(model)
            .messages([ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()?
                .into()])
            .max_tokens(1000_u32)
            .build()?;

        let response = self.client.chat().create(request).await?;

        let first_choice = response
            .choices
            .first()
            .context("No choices in Together response")?
            .message
            .content
            .clone()
            .context("No content")?;

        Ok(first_choice)
    }

    pub async fn generate_search_keyword(
        &self,
        product_name: &str,
        company_name: &str,
    ) -> anyhow::Result<String> {
        let prompt = format!(
            "Generate a short keyword phrase that represents the product: {}. \
            Company name, any adjective or any superlative should not be present \
            in the keyword, remove company name {}. Reply with the keyword only.",
            product_name, company_name
        );

        let answer = self.complete(prompt, TEXT_MODEL).await?;

        Ok(clean_keyword(&answer))
    }

    pub async fn idea_from_ad_text(
        &self,
        ad_text: &str,
        product_name: &str,
    ) -> anyhow::Result<String> {
        let prompt = format!(
            "Analyze the reference advertisement text: {}\n\
            For {}, extract the advertising pattern used focusing on:\n\
            - Text structure and tone\n\
            - Announcement style\n\
            - Promotional language and approach\n\
            - Key messaging elements\n\
            Generate a template-style idea that explains how to adapt this text \
            pattern while maintaining the same impact.",
            ad_text, product_name
        );

        self.complete(prompt, TEXT_MODEL).await
    }

    pub async fn idea_from_ad_image(
        &self,
        image_url: &str,
        product_name: &str,
    ) -> anyhow::Result<String> {
        let prompt = format!(
            "For {}, analyze this reference advertisement image focusing on:\n\
            - Overall visual composition\n\
            - Product positioning\n\
            - Image-to-text ratio and layout\n\
            - Visual style and elements\n\
            Generate a template-style idea that explains how to adapt this visual \
            pattern while maintaining the same impact. Limit this under 500 characters.",
            product_name
        );

        let request = CreateChatCompletionRequestArgs::default()
            .model(VISION_MODEL)
            .messages([ChatCompletionRequestUserMessageArgs::default()
                .content(vec![
                    ChatCompletionRequestMessageContentPartTextArgs::default()
                        .text(prompt)
                        .build()?
                        .into(),
                    ChatCompletionRequestMessageContentPartImageArgs::default()
                        .image_url(ImageUrlArgs::default().url(image_url).build()?)
                        .build()?
                        .into(),
                ])
                .build()?
                .into()])
            .build()?;

        let response = self.client.chat().create(request).await?;

        response
            .choices
            .first()
            .context("No choices in Together response")?
            .message
            .content
            .clone()
            .context("No content")
    }

    pub async fn generate_marketing_text(
        &self,
        idea: &str,
        company_name: &str,
        product_name: &str,
        user_input: Option<&str>,
    ) -> anyhow::Result<String> {
        let mut prompt = format!(
            "Generate a compelling marketing post for {} by {}.\n\n\
            Core idea to incorporate: {}\n\n\
            Guidelines:\n\
            - Create engaging, conversion-focused copy\n\
            - Maintain brand voice and professionalism\n\
            - Include a clear call-to-action\n\
            - Keep the message concise and impactful",
            product_name, company_name, idea
        );

        if let Some(user_input) = user_input {
            prompt.push_str(&format!("\n\nAdditional Requirements:\n{}", user_input));
        }

        self.complete(prompt, TEXT_MODEL).await
    }
}

#[async_trait]
impl RelevanceClassifier for TogetherClient {
    async fn is_relevant(&self, ad_text: &str, keyword: &str) -> anyhow::Result<bool> {
        let prompt = format!(
            "Analyze if the following ad text is related to the keyword: {}\n\n\
            Ad Text:\n{}\n\n\
            Guidelines for analysis:\n\
            1. Check if the text directly mentions the keyword or its close variations\n\
            2. Look for semantic relationships between the text content and the keyword\n\
            3. Consider the context and intended audience of the ad\n\
            4. Analyze if the ad's message or product/service is related to the keyword theme\n\n\
            Based on the above analysis, determine if the text is relevant to the keyword.\n\
            Provide only a single word response: 'yes' or 'no'",
            keyword, ad_text
        );

        let answer = self.complete(prompt, TEXT_MODEL).await?;

        Ok(parse_yes_no(&answer))
    }
}

fn parse_yes_no(answer: &str) -> bool {
    answer
        .trim()
        .trim_matches(|c| c == '\'' || c == '"')
        .to_lowercase()
        .starts_with("yes")
}

fn clean_keyword(raw: &str) -> String {
    raw.trim().trim_matches('"').trim().to_string()
}
