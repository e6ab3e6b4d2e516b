use anyhow::Result;
use httpmock::prelude::*;
use lifeguide::domain::model::{
    AudioRequest, CrisisRisk, EmergencyRequest, HealthAnalysisRequest, MentalHealthRequest,
    NutritionRequest, ResponseOrigin, RiskLevel, ServiceState, SleepAnalysisRequest, UrgencyLevel,
    VoiceType,
};
use lifeguide::{AiGateway, GatewayConfigProvider, WellnessApi};

struct MockConfig {
    base_url: String,
}

impl GatewayConfigProvider for MockConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_key(&self) -> &str {
        "integration-test-key"
    }

    fn timeout_seconds(&self) -> Option<u64> {
        Some(5)
    }
}

fn gateway_for(server: &MockServer) -> AiGateway {
    AiGateway::new(&MockConfig {
        base_url: server.base_url(),
    })
    .unwrap()
}

fn envelope(inner: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "result": inner.to_string(),
        "metadata": {
            "processing_time": 0.42,
            "model_used": "test_model",
            "tokens_used": 128
        }
    })
}

#[tokio::test]
async fn health_analysis_success_is_live() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/health-analysis")
            .json_body_partial(r#"{"function_name": "advanced_health_analysis"}"#);
        then.status(200).json_body(envelope(serde_json::json!({
            "analysis": "Symptoms are consistent with a mild viral infection.",
            "risk_level": "low",
            "recommendations": ["Rest", "Fluids"],
            "specialist_referral": null,
            "emergency_action": false
        })));
    });

    let gateway = gateway_for(&server);
    let outcome = gateway
        .analyze_health(&HealthAnalysisRequest {
            symptoms: vec!["cough".to_string(), "fatigue".to_string()],
            duration: "3 days".to_string(),
            severity: 3,
            medical_history: None,
            medications: None,
        })
        .await;

    mock.assert();
    assert_eq!(outcome.origin(), ResponseOrigin::Live);
    assert_eq!(outcome.risk_level, RiskLevel::Low);
    assert_eq!(outcome.recommendations, vec!["Rest", "Fluids"]);
    assert!(!outcome.emergency_action);
    Ok(())
}

#[tokio::test]
async fn sleep_optimization_success_is_live() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/sleep-optimization")
            .json_body_partial(r#"{"function_name": "advanced_sleep_coaching"}"#);
        then.status(200).json_body(envelope(serde_json::json!({
            "sleep_score": 82,
            "detailed_analysis": "Solid baseline with late-night screen exposure.",
            "personalized_plan": ["Dim lights after 21:00"],
            "circadian_insights": "Chronotype suggests a 23:00 bedtime.",
            "meditation_script": "Breathe in for four counts..."
        })));
    });

    let gateway = gateway_for(&server);
    let outcome = gateway
        .optimize_sleep(&SleepAnalysisRequest {
            sleep_hours: 7.5,
            sleep_quality: 7,
            sleep_issues: vec!["restlessness".to_string()],
            bedtime: "23:30".to_string(),
            wake_time: Some("07:00".to_string()),
            lifestyle_factors: None,
        })
        .await;

    mock.assert();
    assert_eq!(outcome.origin(), ResponseOrigin::Live);
    assert_eq!(outcome.sleep_score, 82);
    assert_eq!(
        outcome.meditation_script.as_deref(),
        Some("Breathe in for four counts...")
    );
    Ok(())
}

#[tokio::test]
async fn mental_health_success_is_live() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/mental-health")
            .json_body_partial(r#"{"function_name": "mental_health_assessment"}"#);
        then.status(200).json_body(envelope(serde_json::json!({
            "mental_health_score": 64,
            "mood_analysis": "Moderate stress with stable mood.",
            "coping_strategies": ["Box breathing"],
            "crisis_risk": "low",
            "professional_referral": false,
            "therapeutic_exercises": ["Journaling"]
        })));
    });

    let gateway = gateway_for(&server);
    let outcome = gateway
        .assess_mental_health(&MentalHealthRequest {
            mood_level: 6,
            stress_level: 6,
            anxiety_level: 4,
            recent_events: None,
            coping_mechanisms: None,
        })
        .await;

    mock.assert();
    assert_eq!(outcome.origin(), ResponseOrigin::Live);
    assert_eq!(outcome.crisis_risk, CrisisRisk::Low);
    assert_eq!(outcome.mental_health_score, 64);
    Ok(())
}

#[tokio::test]
async fn nutrition_planning_success_is_live() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/nutrition-planning")
            .json_body_partial(r#"{"function_name": "advanced_nutrition_coaching"}"#);
        then.status(200).json_body(envelope(serde_json::json!({
            "nutrition_score": 68,
            "meal_plan": {
                "breakfast": ["Overnight oats"],
                "lunch": ["Lentil bowl"],
                "dinner": ["Baked salmon"],
                "snacks": ["Almonds"]
            },
            "shopping_list": ["Oats", "Lentils", "Salmon", "Almonds"],
            "nutritional_insights": "Protein intake is below target.",
            "supplement_recommendations": ["Vitamin B12"]
        })));
    });

    let gateway = gateway_for(&server);
    let outcome = gateway
        .plan_nutrition(&NutritionRequest {
            goals: vec!["muscle gain".to_string()],
            restrictions: vec!["pescatarian".to_string()],
            current_diet: "irregular".to_string(),
        })
        .await;

    mock.assert();
    assert_eq!(outcome.origin(), ResponseOrigin::Live);
    assert_eq!(outcome.nutrition_score, 68);
    assert_eq!(outcome.meal_plan.dinner, vec!["Baked salmon"]);
    Ok(())
}

#[tokio::test]
async fn emergency_assessment_success_is_live() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/emergency-assessment")
            .json_body_partial(r#"{"function_name": "emergency_triage_assessment"}"#);
        then.status(200).json_body(envelope(serde_json::json!({
            "urgency_level": "emergency",
            "immediate_actions": ["Apply pressure to the wound"],
            "emergency_services": true,
            "first_aid_steps": ["Elevate the limb"],
            "crisis_resources": ["911 - Emergency Services"]
        })));
    });

    let gateway = gateway_for(&server);
    let outcome = gateway
        .assess_emergency(&EmergencyRequest {
            situation: "Deep cut from broken glass".to_string(),
            symptoms: vec!["bleeding".to_string()],
        })
        .await;

    mock.assert();
    assert_eq!(outcome.origin(), ResponseOrigin::Live);
    assert_eq!(outcome.urgency_level, UrgencyLevel::Emergency);
    assert!(outcome.emergency_services);
    Ok(())
}

#[tokio::test]
async fn audio_synthesis_returns_raw_bytes() -> Result<()> {
    let server = MockServer::start();
    let audio_bytes: &[u8] = &[0x49, 0x44, 0x33, 0x04, 0x00];
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/audio-generation")
            .json_body_partial(r#"{"function_name": "tts_meditation_generation"}"#);
        then.status(200)
            .header("Content-Type", "audio/mpeg")
            .body(audio_bytes);
    });

    let gateway = gateway_for(&server);
    let outcome = gateway
        .synthesize_audio(&AudioRequest::meditation(
            "Close your eyes and settle in.",
            VoiceType::CalmFemale,
        ))
        .await;

    mock.assert();
    assert_eq!(outcome.origin(), ResponseOrigin::Live);
    assert_eq!(outcome.bytes, audio_bytes);
    assert_eq!(outcome.format, "mp3");
    Ok(())
}

#[tokio::test]
async fn status_probe_parses_direct_body() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v1/status");
        then.status(200).json_body(serde_json::json!({
            "status": "active",
            "credits_remaining": 950,
            "rate_limit_remaining": 58
        }));
    });

    let gateway = gateway_for(&server);
    let outcome = gateway.check_status().await;

    mock.assert();
    assert_eq!(outcome.origin(), ResponseOrigin::Live);
    assert_eq!(outcome.status, ServiceState::Active);
    assert_eq!(outcome.credits_remaining, 950);
    assert_eq!(outcome.rate_limit_remaining, 58);
    Ok(())
}
