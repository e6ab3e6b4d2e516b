use crate::core::fallback;
use crate::domain::model::{
    ApiStatus, AudioClip, AudioRequest, EmergencyAssessment, EmergencyRequest, HealthAnalysis,
    HealthAnalysisRequest, MentalHealthAssessment, MentalHealthRequest, NutritionPlan,
    NutritionRequest, Outcome, SleepAnalysisRequest, SleepPlan,
};
use crate::domain::ports::{GatewayConfigProvider, WellnessApi};
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;

/// The five envelope-based capability endpoints. Audio synthesis and the
/// status probe use their own wire shapes and are handled separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Capability {
    Health,
    Sleep,
    MentalHealth,
    Nutrition,
    Emergency,
}

impl Capability {
    fn endpoint(self) -> &'static str {
        match self {
            Capability::Health => "health-analysis",
            Capability::Sleep => "sleep-optimization",
            Capability::MentalHealth => "mental-health",
            Capability::Nutrition => "nutrition-planning",
            Capability::Emergency => "emergency-assessment",
        }
    }

    fn function_name(self) -> &'static str {
        match self {
            Capability::Health => "advanced_health_analysis",
            Capability::Sleep => "advanced_sleep_coaching",
            Capability::MentalHealth => "mental_health_assessment",
            Capability::Nutrition => "advanced_nutrition_coaching",
            Capability::Emergency => "emergency_triage_assessment",
        }
    }

    fn model_config(self) -> serde_json::Value {
        match self {
            Capability::Health => json!({
                "model_type": "medical_llm",
                "temperature": 0.3,
                "max_tokens": 1500,
                "safety_filter": "medical_strict"
            }),
            Capability::Sleep => json!({
                "model_type": "sleep_specialist_llm",
                "temperature": 0.4,
                "max_tokens": 2000,
                "include_audio_generation": true
            }),
            Capability::MentalHealth => json!({
                "model_type": "mental_health_specialist",
                "temperature": 0.2,
                "max_tokens": 1800,
                "crisis_detection": true,
                "safety_protocols": "strict"
            }),
            Capability::Nutrition => json!({
                "model_type": "nutrition_specialist",
                "temperature": 0.3,
                "max_tokens": 2200,
                "include_meal_images": true
            }),
            Capability::Emergency => json!({
                "model_type": "emergency_medical_specialist",
                "temperature": 0.1,
                "max_tokens": 1500,
                "priority_mode": "life_safety",
                "response_time": "immediate"
            }),
        }
    }
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a, T: Serialize> {
    function_name: &'static str,
    inputs: &'a T,
    model_config: serde_json::Value,
}

#[derive(Debug, Serialize)]
struct AudioInvocation<'a> {
    function_name: &'static str,
    inputs: &'a AudioRequest,
}

/// Outer success envelope. `result` is itself a JSON string that gets parsed
/// into the typed capability record.
#[derive(Debug, Deserialize)]
struct InferenceEnvelope {
    result: String,
    #[serde(default)]
    metadata: Option<InferenceMetadata>,
}

#[derive(Debug, Deserialize)]
struct InferenceMetadata {
    processing_time: f64,
    model_used: String,
    tokens_used: u64,
}

/// HTTP client for the wellness inference service. Capability calls never
/// fail: transport errors, non-2xx statuses, and malformed envelopes all
/// degrade to a locally synthesized [`Outcome`].
pub struct AiGateway {
    client: Client,
    base_url: String,
    api_key: String,
}

impl AiGateway {
    pub fn new(config: &dyn GatewayConfigProvider) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(seconds) = config.timeout_seconds() {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url().trim_end_matches('/').to_string(),
            api_key: config.api_key().to_string(),
        })
    }

    /// POST a capability request and return the inner `result` string.
    async fn invoke<T: Serialize + Sync>(&self, capability: Capability, inputs: &T) -> Result<String> {
        let url = format!("{}/v1/{}", self.base_url, capability.endpoint());
        tracing::debug!("Making inference request to: {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&InferenceRequest {
                function_name: capability.function_name(),
                inputs,
                model_config: capability.model_config(),
            })
            .send()
            .await?;

        tracing::debug!("Inference response status: {}", response.status());
        if !response.status().is_success() {
            return Err(GatewayError::Status {
                code: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        let envelope: InferenceEnvelope = serde_json::from_str(&body)?;
        if let Some(meta) = &envelope.metadata {
            tracing::debug!(
                "Model {} used {} tokens in {:.2}s",
                meta.model_used,
                meta.tokens_used,
                meta.processing_time
            );
        }

        Ok(envelope.result)
    }

    async fn fetch_audio(&self, request: &AudioRequest) -> Result<Vec<u8>> {
        let url = format!("{}/v1/audio-generation", self.base_url);
        tracing::debug!("Requesting audio synthesis from: {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&AudioInvocation {
                function_name: "tts_meditation_generation",
                inputs: request,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GatewayError::Status {
                code: response.status().as_u16(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    async fn fetch_status(&self) -> Result<ApiStatus> {
        let url = format!("{}/v1/status", self.base_url);
        let response = self.client.get(&url).bearer_auth(&self.api_key).send().await?;

        if !response.status().is_success() {
            return Err(GatewayError::Status {
                code: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Collapse the three failure branches into an always-present answer. A raw
/// string that is not the expected JSON still came from the service, so it
/// keeps its text and is tagged `Unstructured` rather than `Fallback`.
fn normalize<T, U, F>(invoked: Result<String>, what: &str, from_text: U, fall_back: F) -> Outcome<T>
where
    T: DeserializeOwned,
    U: FnOnce(&str) -> T,
    F: FnOnce() -> T,
{
    match invoked {
        Ok(raw) => match serde_json::from_str::<T>(&raw) {
            Ok(value) => Outcome::live(value),
            Err(err) => {
                tracing::debug!("{} answer was not structured JSON: {}", what, err);
                Outcome::unstructured(from_text(&raw))
            }
        },
        Err(err) => {
            tracing::warn!("{} unavailable, serving fallback: {}", what, err);
            Outcome::fallback(fall_back())
        }
    }
}

#[async_trait]
impl WellnessApi for AiGateway {
    async fn analyze_health(&self, request: &HealthAnalysisRequest) -> Outcome<HealthAnalysis> {
        normalize(
            self.invoke(Capability::Health, request).await,
            "health analysis",
            fallback::health_analysis_from_text,
            || fallback::health_analysis(request),
        )
    }

    async fn optimize_sleep(&self, request: &SleepAnalysisRequest) -> Outcome<SleepPlan> {
        normalize(
            self.invoke(Capability::Sleep, request).await,
            "sleep optimization",
            fallback::sleep_plan_from_text,
            || fallback::sleep_plan(request),
        )
    }

    async fn assess_mental_health(
        &self,
        request: &MentalHealthRequest,
    ) -> Outcome<MentalHealthAssessment> {
        normalize(
            self.invoke(Capability::MentalHealth, request).await,
            "mental health assessment",
            fallback::mental_health_from_text,
            || fallback::mental_health_assessment(request),
        )
    }

    async fn plan_nutrition(&self, request: &NutritionRequest) -> Outcome<NutritionPlan> {
        normalize(
            self.invoke(Capability::Nutrition, request).await,
            "nutrition planning",
            fallback::nutrition_plan_from_text,
            || fallback::nutrition_plan(request),
        )
    }

    async fn assess_emergency(&self, request: &EmergencyRequest) -> Outcome<EmergencyAssessment> {
        normalize(
            self.invoke(Capability::Emergency, request).await,
            "emergency assessment",
            fallback::emergency_assessment_from_text,
            || fallback::emergency_assessment(request),
        )
    }

    async fn synthesize_audio(&self, request: &AudioRequest) -> Outcome<AudioClip> {
        match self.fetch_audio(request).await {
            Ok(bytes) => Outcome::live(AudioClip {
                bytes,
                format: request.audio_format.clone(),
            }),
            Err(err) => {
                tracing::warn!("audio synthesis unavailable, serving empty clip: {}", err);
                Outcome::fallback(fallback::audio_clip(request))
            }
        }
    }

    async fn check_status(&self) -> Outcome<ApiStatus> {
        match self.fetch_status().await {
            Ok(status) => Outcome::live(status),
            Err(err) => {
                tracing::warn!("status probe failed, reporting inactive: {}", err);
                Outcome::fallback(fallback::api_status())
            }
        }
    }
}
