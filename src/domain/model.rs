use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Where a capability answer came from. `Live` answers were parsed straight
/// from the remote service; `Unstructured` answers arrived but the inner
/// payload was not valid JSON; `Fallback` answers were synthesized locally
/// after a transport failure, non-2xx status, or malformed envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseOrigin {
    Live,
    Unstructured,
    Fallback,
}

/// A capability answer plus its provenance. Every gateway call produces one
/// of these; the record is always well-formed regardless of origin.
#[derive(Debug, Clone)]
pub struct Outcome<T> {
    value: T,
    origin: ResponseOrigin,
}

impl<T> Outcome<T> {
    pub fn live(value: T) -> Self {
        Self {
            value,
            origin: ResponseOrigin::Live,
        }
    }

    pub fn unstructured(value: T) -> Self {
        Self {
            value,
            origin: ResponseOrigin::Unstructured,
        }
    }

    pub fn fallback(value: T) -> Self {
        Self {
            value,
            origin: ResponseOrigin::Fallback,
        }
    }

    pub fn origin(&self) -> ResponseOrigin {
        self.origin
    }

    /// True when the answer did not come back fully structured from the
    /// remote service.
    pub fn is_degraded(&self) -> bool {
        self.origin != ResponseOrigin::Live
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Deref for Outcome<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

// ---------------------------------------------------------------------------
// Capability requests
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthAnalysisRequest {
    pub symptoms: Vec<String>,
    pub duration: String,
    pub severity: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_history: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medications: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepAnalysisRequest {
    pub sleep_hours: f64,
    pub sleep_quality: u8,
    pub sleep_issues: Vec<String>,
    pub bedtime: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wake_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifestyle_factors: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentalHealthRequest {
    pub mood_level: u8,
    pub stress_level: u8,
    pub anxiety_level: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_events: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coping_mechanisms: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionRequest {
    pub goals: Vec<String>,
    pub restrictions: Vec<String>,
    pub current_diet: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyRequest {
    pub situation: String,
    pub symptoms: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoiceType {
    CalmFemale,
    SoothingMale,
    Neutral,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioRequest {
    pub text: String,
    pub voice_type: VoiceType,
    pub speed: f32,
    pub add_background_sounds: bool,
    pub audio_format: String,
}

impl AudioRequest {
    /// The shape the meditation generator always sends: 0.8x speed,
    /// background sounds on, mp3 output.
    pub fn meditation(script: impl Into<String>, voice_type: VoiceType) -> Self {
        Self {
            text: script.into(),
            voice_type,
            speed: 0.8,
            add_background_sounds: true,
            audio_format: "mp3".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Capability responses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Urgent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthAnalysis {
    pub analysis: String,
    pub risk_level: RiskLevel,
    pub recommendations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialist_referral: Option<String>,
    #[serde(default)]
    pub emergency_action: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepPlan {
    pub sleep_score: u8,
    pub detailed_analysis: String,
    pub personalized_plan: Vec<String>,
    pub circadian_insights: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meditation_script: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_music_generation: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrisisRisk {
    None,
    Low,
    Medium,
    High,
    Immediate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentalHealthAssessment {
    pub mental_health_score: u8,
    pub mood_analysis: String,
    pub coping_strategies: Vec<String>,
    pub crisis_risk: CrisisRisk,
    pub professional_referral: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_contacts: Option<Vec<String>>,
    pub therapeutic_exercises: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlan {
    pub breakfast: Vec<String>,
    pub lunch: Vec<String>,
    pub dinner: Vec<String>,
    pub snacks: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionPlan {
    pub nutrition_score: u8,
    pub meal_plan: MealPlan,
    pub shopping_list: Vec<String>,
    pub nutritional_insights: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplement_recommendations: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyLevel {
    Routine,
    Urgent,
    Emergency,
    LifeThreatening,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyAssessment {
    pub urgency_level: UrgencyLevel,
    pub immediate_actions: Vec<String>,
    pub emergency_services: bool,
    pub first_aid_steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospital_preparation: Option<Vec<String>>,
    pub crisis_resources: Vec<String>,
}

/// Synthesized speech returned by the audio capability. The fallback clip is
/// empty but keeps the requested container format.
#[derive(Debug, Clone)]
pub struct AudioClip {
    pub bytes: Vec<u8>,
    pub format: String,
}

impl AudioClip {
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceState {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiStatus {
    pub status: ServiceState,
    pub credits_remaining: u64,
    pub rate_limit_remaining: u64,
}

// ---------------------------------------------------------------------------
// Consultation directory
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Online,
    Busy,
    Offline,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Specialist {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub status: Availability,
    pub rating: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Consultation {
    pub room_id: String,
    pub join_url: String,
    pub consultation_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoCall {
    pub success: bool,
    pub call_id: String,
    pub consultation_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageUrgency {
    Low,
    Medium,
    High,
    Emergency,
}
