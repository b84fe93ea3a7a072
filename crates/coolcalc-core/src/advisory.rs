//! Optional natural-language advice from a hosted generative model.
//!
//! Advice never gates a calculation: [`AdvisoryClient::advise`] swallows every
//! failure and answers with a localized fallback sentence instead.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::AdvisoryConfig;
use crate::i18n::Language;
use crate::room::RoomType;

#[derive(Debug, Error)]
pub enum AdvisoryError {
    #[error("no API key configured")]
    MissingKey,

    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("service returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("service response contained no text")]
    EmptyResponse,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdvisoryRequest {
    pub area: f64,
    pub room_type: RoomType,
    pub description: String,
    pub language: Language,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisorySource {
    Service,
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Advisory {
    pub text: String,
    pub source: AdvisorySource,
}

pub fn build_prompt(request: &AdvisoryRequest) -> String {
    let room = request.room_type.as_str();
    let area = request.area;
    let description = &request.description;

    match request.language {
        Language::En => format!(
            "Acting as an HVAC engineer using ASHRAE standards, analyze a {room} of {area} square meters. \
             Additional context: \"{description}\". Provide a brief (max 100 words) professional advice on \
             specific cooling challenges for this space and if any adjustments to standard capacity are needed."
        ),
        Language::Fr => format!(
            "En tant qu'ingénieur CVC utilisant les normes ASHRAE, analysez une pièce de type {room} de {area} \
             mètres carrés. Contexte supplémentaire : \"{description}\". Fournissez un bref conseil professionnel \
             (max 100 mots) sur les défis spécifiques de refroidissement pour cet espace et si des ajustements à \
             la capacité standard sont nécessaires."
        ),
        Language::Zh => format!(
            "请以遵循ASHRAE标准的暖通空调工程师身份，分析一个面积为{area}平方米的{room}。\
             补充说明：\"{description}\"。请用不超过100字给出专业建议，说明该空间的具体制冷难点，\
             以及是否需要调整标准制冷量。"
        ),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<PromptPart<'a>>,
}

#[derive(Debug, Serialize)]
struct PromptPart<'a> {
    text: &'a str,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    top_k: u32,
    top_p: f64,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Clone)]
pub struct AdvisoryClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
    generation: GenerationConfig,
}

impl AdvisoryClient {
    pub fn new(config: &AdvisoryConfig, api_key: Option<String>) -> Result<Self, AdvisoryError> {
        let http = reqwest::Client::builder()
            .user_agent(format!("coolcalc/{}", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
            generation: GenerationConfig {
                temperature: config.temperature,
                top_k: config.top_k,
                top_p: config.top_p,
            },
        })
    }

    /// Builds a client whose key comes from the configured environment variable.
    pub fn from_config(config: &AdvisoryConfig) -> Result<Self, AdvisoryError> {
        Self::new(config, config.api_key())
    }

    fn url(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.endpoint, self.model)
    }

    /// Calls the service and returns its text, surfacing every failure.
    pub async fn request(&self, request: &AdvisoryRequest) -> Result<String, AdvisoryError> {
        let api_key = self.api_key.as_deref().ok_or(AdvisoryError::MissingKey)?;
        let prompt = build_prompt(request);
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![PromptPart { text: &prompt }],
            }],
            generation_config: self.generation,
        };

        let response = self
            .http
            .post(self.url())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AdvisoryError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| content.parts.into_iter().map(|part| part.text).collect())
            .unwrap_or_default();

        let text = text.trim();
        if text.is_empty() {
            return Err(AdvisoryError::EmptyResponse);
        }
        Ok(text.to_string())
    }

    /// Like [`request`](Self::request) but never fails.
    pub async fn advise(&self, request: &AdvisoryRequest) -> Advisory {
        match self.request(request).await {
            Ok(text) => {
                info!(room_type = %request.room_type, "Received advisory");
                Advisory {
                    text,
                    source: AdvisorySource::Service,
                }
            }
            Err(err) => {
                warn!(error = %err, "Advisory unavailable; using fallback");
                Advisory {
                    text: request.language.advisory_fallback().to_string(),
                    source: AdvisorySource::Fallback,
                }
            }
        }
    }
}
