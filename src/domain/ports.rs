use crate::domain::model::{
    ApiStatus, AudioClip, AudioRequest, Consultation, EmergencyAssessment, EmergencyRequest,
    HealthAnalysis, HealthAnalysisRequest, MentalHealthAssessment, MentalHealthRequest,
    MessageUrgency, NutritionPlan, NutritionRequest, Outcome, SleepAnalysisRequest, SleepPlan,
    Specialist, VideoCall,
};
use async_trait::async_trait;

/// Connection settings for the AI gateway. Implemented by both the CLI and
/// TOML configuration types.
pub trait GatewayConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn api_key(&self) -> &str;
    fn timeout_seconds(&self) -> Option<u64>;
}

/// The six AI-backed capability domains plus the status probe. Every call
/// returns a well-formed record; failures are absorbed into fallback
/// outcomes, never surfaced as errors.
#[async_trait]
pub trait WellnessApi: Send + Sync {
    async fn analyze_health(&self, request: &HealthAnalysisRequest) -> Outcome<HealthAnalysis>;
    async fn optimize_sleep(&self, request: &SleepAnalysisRequest) -> Outcome<SleepPlan>;
    async fn assess_mental_health(
        &self,
        request: &MentalHealthRequest,
    ) -> Outcome<MentalHealthAssessment>;
    async fn plan_nutrition(&self, request: &NutritionRequest) -> Outcome<NutritionPlan>;
    async fn assess_emergency(&self, request: &EmergencyRequest) -> Outcome<EmergencyAssessment>;
    async fn synthesize_audio(&self, request: &AudioRequest) -> Outcome<AudioClip>;
    async fn check_status(&self) -> Outcome<ApiStatus>;
}

#[async_trait]
pub trait ConsultationDirectory: Send + Sync {
    async fn specialists(&self) -> Vec<Specialist>;
    async fn create_consultation(&self, patient_id: &str, specialist_type: &str) -> Consultation;
    async fn start_video_call(&self, room_id: &str) -> VideoCall;
    async fn send_message(&self, message: &str, urgency: MessageUrgency) -> bool;
}
