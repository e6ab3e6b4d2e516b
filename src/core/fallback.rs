//! Deterministic substitute answers used when the remote AI service is
//! unreachable or returns something unusable. These are pure functions so
//! the degradation behavior stays testable without a network.

use crate::domain::model::{
    ApiStatus, AudioClip, AudioRequest, CrisisRisk, EmergencyAssessment, EmergencyRequest,
    HealthAnalysis, HealthAnalysisRequest, MealPlan, MentalHealthAssessment, MentalHealthRequest,
    NutritionPlan, NutritionRequest, RiskLevel, ServiceState, SleepAnalysisRequest, SleepPlan,
    UrgencyLevel,
};

/// Symptom fragments that flag an emergency action in the health fallback.
const ALARMING_SYMPTOMS: [&str; 3] = ["chest pain", "difficulty breathing", "severe"];

/// Situation fragments treated as life-threatening by the emergency fallback.
const LIFE_THREATENING_KEYWORDS: [&str; 4] =
    ["unconscious", "not breathing", "chest pain", "severe bleeding"];

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    let lowered = haystack.to_lowercase();
    needles.iter().any(|needle| lowered.contains(needle))
}

pub fn health_analysis(request: &HealthAnalysisRequest) -> HealthAnalysis {
    let emergency_action = request
        .symptoms
        .iter()
        .any(|symptom| contains_any(symptom, &ALARMING_SYMPTOMS));

    HealthAnalysis {
        analysis: format!(
            "Based on the symptoms provided ({}), it's important to monitor your condition \
             and consult with a healthcare professional for proper evaluation.",
            request.symptoms.join(", ")
        ),
        risk_level: RiskLevel::Medium,
        recommendations: vec![
            "Schedule an appointment with your primary care physician".to_string(),
            "Keep a symptom diary".to_string(),
            "Stay hydrated and get adequate rest".to_string(),
            "Avoid self-medication without professional guidance".to_string(),
        ],
        specialist_referral: None,
        emergency_action,
    }
}

/// Weighted sleep score: 40 points for hours in the 7-9 band (20 otherwise),
/// 6 points per quality unit, minus 5 per reported issue, clamped to 0..=100.
pub fn sleep_score(request: &SleepAnalysisRequest) -> u8 {
    let hours_component = if (7.0..=9.0).contains(&request.sleep_hours) {
        40
    } else {
        20
    };
    let raw = hours_component + i64::from(request.sleep_quality) * 6
        - request.sleep_issues.len() as i64 * 5;
    raw.clamp(0, 100) as u8
}

pub fn sleep_plan(request: &SleepAnalysisRequest) -> SleepPlan {
    let issues_note = if request.sleep_issues.is_empty() {
        String::new()
    } else {
        format!("You're experiencing: {}. ", request.sleep_issues.join(", "))
    };

    SleepPlan {
        sleep_score: sleep_score(request),
        detailed_analysis: format!(
            "Your sleep assessment shows you're getting {} hours of sleep with a quality \
             rating of {}/10. {}Focus on consistent timing and sleep hygiene.",
            request.sleep_hours, request.sleep_quality, issues_note
        ),
        personalized_plan: vec![
            "Maintain a consistent sleep schedule".to_string(),
            "Create a relaxing bedtime routine".to_string(),
            "Optimize your sleep environment (cool, dark, quiet)".to_string(),
            "Limit caffeine and screens before bedtime".to_string(),
            "Consider relaxation techniques like meditation".to_string(),
        ],
        circadian_insights: "Your sleep patterns can be optimized through consistent timing \
                             and environmental adjustments."
            .to_string(),
        meditation_script: None,
        sleep_music_generation: None,
    }
}

pub fn mental_health_assessment(request: &MentalHealthRequest) -> MentalHealthAssessment {
    let average = (f64::from(request.mood_level)
        + f64::from(10 - request.stress_level.min(10))
        + f64::from(10 - request.anxiety_level.min(10)))
        / 3.0;

    let crisis_risk = if request.mood_level < 3 || request.stress_level > 8 || request.anxiety_level > 8
    {
        CrisisRisk::Medium
    } else {
        CrisisRisk::None
    };

    let closing = if average < 5.0 {
        "Consider seeking additional support."
    } else {
        "You're managing well, keep focusing on self-care."
    };

    MentalHealthAssessment {
        mental_health_score: (average * 10.0).round().clamp(0.0, 100.0) as u8,
        mood_analysis: format!(
            "Your current emotional state shows a mood level of {}/10, stress at {}/10, \
             and anxiety at {}/10. {}",
            request.mood_level, request.stress_level, request.anxiety_level, closing
        ),
        coping_strategies: vec![
            "Practice deep breathing exercises".to_string(),
            "Engage in regular physical activity".to_string(),
            "Maintain social connections".to_string(),
            "Try mindfulness or meditation".to_string(),
            "Ensure adequate sleep and nutrition".to_string(),
        ],
        crisis_risk,
        professional_referral: request.mood_level < 4 || request.stress_level > 7,
        emergency_contacts: None,
        therapeutic_exercises: vec![
            "Gratitude journaling".to_string(),
            "Progressive muscle relaxation".to_string(),
            "Mindful walking".to_string(),
            "Creative expression activities".to_string(),
        ],
    }
}

pub fn nutrition_plan(request: &NutritionRequest) -> NutritionPlan {
    NutritionPlan {
        nutrition_score: 75,
        meal_plan: MealPlan {
            breakfast: vec![
                "Whole grain oatmeal with fresh berries".to_string(),
                "Greek yogurt with nuts and seeds".to_string(),
            ],
            lunch: vec![
                "Quinoa salad with mixed vegetables".to_string(),
                "Lean protein with leafy greens".to_string(),
            ],
            dinner: vec![
                "Grilled fish with roasted vegetables".to_string(),
                "Legume-based dishes with whole grains".to_string(),
            ],
            snacks: vec![
                "Fresh fruit with nut butter".to_string(),
                "Vegetable sticks with hummus".to_string(),
            ],
        },
        shopping_list: vec![
            "Oats".to_string(),
            "Berries".to_string(),
            "Greek yogurt".to_string(),
            "Quinoa".to_string(),
            "Mixed vegetables".to_string(),
            "Lean proteins".to_string(),
            "Nuts".to_string(),
            "Seeds".to_string(),
        ],
        nutritional_insights: format!(
            "Based on your goals ({}) and dietary restrictions ({}), focus on whole foods, \
             balanced macronutrients, and adequate hydration.",
            request.goals.join(", "),
            request.restrictions.join(", ")
        ),
        supplement_recommendations: Some(vec![
            "Vitamin D".to_string(),
            "Omega-3 fatty acids".to_string(),
            "Multivitamin (if needed)".to_string(),
        ]),
    }
}

pub fn emergency_assessment(request: &EmergencyRequest) -> EmergencyAssessment {
    let life_threatening = contains_any(&request.situation, &LIFE_THREATENING_KEYWORDS);

    EmergencyAssessment {
        urgency_level: if life_threatening {
            UrgencyLevel::LifeThreatening
        } else {
            UrgencyLevel::Urgent
        },
        immediate_actions: vec![
            "Call 911 immediately if life-threatening".to_string(),
            "Ensure the scene is safe".to_string(),
            "Follow basic first aid protocols".to_string(),
            "Stay calm and provide comfort".to_string(),
        ],
        emergency_services: life_threatening,
        first_aid_steps: vec![
            "Check responsiveness and breathing".to_string(),
            "Control bleeding if present".to_string(),
            "Keep the person comfortable".to_string(),
            "Monitor vital signs".to_string(),
            "Do not move the person unless necessary".to_string(),
        ],
        hospital_preparation: None,
        crisis_resources: vec![
            "911 - Emergency Services".to_string(),
            "Local Emergency Room".to_string(),
            "Poison Control: 1-800-222-1222".to_string(),
            "Crisis Text Line: Text HOME to 741741".to_string(),
        ],
    }
}

pub fn audio_clip(request: &AudioRequest) -> AudioClip {
    AudioClip {
        bytes: Vec::new(),
        format: request.audio_format.clone(),
    }
}

pub fn api_status() -> ApiStatus {
    ApiStatus {
        status: ServiceState::Inactive,
        credits_remaining: 0,
        rate_limit_remaining: 0,
    }
}

// ---------------------------------------------------------------------------
// Lenient defaults for answers that arrived but were not structured JSON.
// The raw text is preserved in the free-text field of each record.
// ---------------------------------------------------------------------------

pub fn health_analysis_from_text(raw: &str) -> HealthAnalysis {
    HealthAnalysis {
        analysis: raw.to_string(),
        risk_level: RiskLevel::Medium,
        recommendations: vec![
            "Consult with a healthcare professional".to_string(),
            "Monitor symptoms".to_string(),
            "Maintain healthy lifestyle".to_string(),
        ],
        specialist_referral: None,
        emergency_action: false,
    }
}

pub fn sleep_plan_from_text(raw: &str) -> SleepPlan {
    SleepPlan {
        sleep_score: 75,
        detailed_analysis: raw.to_string(),
        personalized_plan: vec![
            "Maintain consistent bedtime".to_string(),
            "Create relaxing environment".to_string(),
            "Limit screen time before bed".to_string(),
        ],
        circadian_insights: "Your sleep patterns suggest room for optimization in timing \
                             and consistency."
            .to_string(),
        meditation_script: None,
        sleep_music_generation: None,
    }
}

pub fn mental_health_from_text(raw: &str) -> MentalHealthAssessment {
    MentalHealthAssessment {
        mental_health_score: 70,
        mood_analysis: raw.to_string(),
        coping_strategies: vec![
            "Deep breathing exercises".to_string(),
            "Mindfulness meditation".to_string(),
            "Regular physical activity".to_string(),
        ],
        crisis_risk: CrisisRisk::None,
        professional_referral: false,
        emergency_contacts: None,
        therapeutic_exercises: vec![
            "Gratitude journaling".to_string(),
            "Progressive muscle relaxation".to_string(),
        ],
    }
}

pub fn nutrition_plan_from_text(raw: &str) -> NutritionPlan {
    NutritionPlan {
        nutrition_score: 75,
        meal_plan: MealPlan {
            breakfast: vec![
                "Oatmeal with berries".to_string(),
                "Greek yogurt with nuts".to_string(),
            ],
            lunch: vec![
                "Quinoa salad with vegetables".to_string(),
                "Lean protein with greens".to_string(),
            ],
            dinner: vec![
                "Grilled fish with vegetables".to_string(),
                "Whole grain pasta with tomato sauce".to_string(),
            ],
            snacks: vec![
                "Apple with almond butter".to_string(),
                "Mixed nuts and seeds".to_string(),
            ],
        },
        shopping_list: vec![
            "Oats".to_string(),
            "Berries".to_string(),
            "Greek yogurt".to_string(),
            "Quinoa".to_string(),
            "Mixed vegetables".to_string(),
        ],
        nutritional_insights: raw.to_string(),
        supplement_recommendations: None,
    }
}

pub fn emergency_assessment_from_text(_raw: &str) -> EmergencyAssessment {
    EmergencyAssessment {
        urgency_level: UrgencyLevel::Urgent,
        immediate_actions: vec![
            "Call emergency services if life-threatening".to_string(),
            "Follow first aid protocols".to_string(),
        ],
        emergency_services: true,
        first_aid_steps: vec![
            "Ensure safety".to_string(),
            "Call for help".to_string(),
            "Provide appropriate first aid".to_string(),
        ],
        hospital_preparation: None,
        crisis_resources: vec![
            "911 - Emergency Services".to_string(),
            "Local Emergency Room".to_string(),
            "Poison Control: 1-800-222-1222".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sleep_request(hours: f64, quality: u8, issues: &[&str]) -> SleepAnalysisRequest {
        SleepAnalysisRequest {
            sleep_hours: hours,
            sleep_quality: quality,
            sleep_issues: issues.iter().map(|s| s.to_string()).collect(),
            bedtime: "23:00".to_string(),
            wake_time: None,
            lifestyle_factors: None,
        }
    }

    fn mental_request(mood: u8, stress: u8, anxiety: u8) -> MentalHealthRequest {
        MentalHealthRequest {
            mood_level: mood,
            stress_level: stress,
            anxiety_level: anxiety,
            recent_events: None,
            coping_mechanisms: None,
        }
    }

    #[test]
    fn sleep_score_rewards_healthy_hours() {
        let healthy = sleep_request(8.0, 10, &[]);
        let unhealthy = sleep_request(5.0, 4, &["insomnia", "snoring"]);

        assert_eq!(sleep_score(&healthy), 100);
        assert!(sleep_score(&unhealthy) < sleep_score(&healthy));
    }

    #[test]
    fn sleep_score_is_clamped() {
        // 20 + 0*6 - 5*5 would be negative without the clamp.
        let terrible = sleep_request(3.0, 0, &["a", "b", "c", "d", "e"]);
        assert_eq!(sleep_score(&terrible), 0);

        let perfect = sleep_request(8.0, 10, &[]);
        assert!(sleep_score(&perfect) <= 100);
    }

    #[test]
    fn sleep_score_boundary_hours() {
        assert_eq!(sleep_score(&sleep_request(7.0, 5, &[])), 70);
        assert_eq!(sleep_score(&sleep_request(9.0, 5, &[])), 70);
        assert_eq!(sleep_score(&sleep_request(6.9, 5, &[])), 50);
        assert_eq!(sleep_score(&sleep_request(9.1, 5, &[])), 50);
    }

    #[test]
    fn sleep_plan_mentions_reported_issues() {
        let plan = sleep_plan(&sleep_request(6.0, 5, &["insomnia"]));
        assert!(plan.detailed_analysis.contains("insomnia"));
        assert_eq!(plan.personalized_plan.len(), 5);
    }

    #[test]
    fn low_mood_raises_crisis_risk() {
        let assessment = mental_health_assessment(&mental_request(2, 5, 5));
        assert_ne!(assessment.crisis_risk, CrisisRisk::None);
        assert!(assessment.professional_referral);
    }

    #[test]
    fn high_stress_or_anxiety_raises_crisis_risk() {
        assert_ne!(
            mental_health_assessment(&mental_request(7, 9, 2)).crisis_risk,
            CrisisRisk::None
        );
        assert_ne!(
            mental_health_assessment(&mental_request(7, 2, 9)).crisis_risk,
            CrisisRisk::None
        );
    }

    #[test]
    fn balanced_state_has_no_crisis_risk() {
        let assessment = mental_health_assessment(&mental_request(7, 4, 3));
        assert_eq!(assessment.crisis_risk, CrisisRisk::None);
        assert!(!assessment.professional_referral);
        // (7 + 6 + 7) / 3 * 10 ≈ 67
        assert_eq!(assessment.mental_health_score, 67);
    }

    #[test]
    fn life_threatening_keywords_escalate_emergency() {
        for situation in [
            "Person found unconscious in the hallway",
            "My father is NOT BREATHING",
            "Sudden chest pain while jogging",
            "Deep cut with severe bleeding",
        ] {
            let assessment = emergency_assessment(&EmergencyRequest {
                situation: situation.to_string(),
                symptoms: vec![],
            });
            assert_eq!(assessment.urgency_level, UrgencyLevel::LifeThreatening);
            assert!(assessment.emergency_services);
        }
    }

    #[test]
    fn routine_situations_stay_urgent() {
        let assessment = emergency_assessment(&EmergencyRequest {
            situation: "Twisted an ankle on the stairs".to_string(),
            symptoms: vec!["swelling".to_string()],
        });
        assert_eq!(assessment.urgency_level, UrgencyLevel::Urgent);
        assert!(!assessment.emergency_services);
    }

    #[test]
    fn alarming_symptoms_flag_emergency_action() {
        let request = HealthAnalysisRequest {
            symptoms: vec!["mild fever".to_string(), "Chest Pain".to_string()],
            duration: "1 day".to_string(),
            severity: 5,
            medical_history: None,
            medications: None,
        };
        assert!(health_analysis(&request).emergency_action);

        let calm = HealthAnalysisRequest {
            symptoms: vec!["runny nose".to_string()],
            duration: "1 day".to_string(),
            severity: 2,
            medical_history: None,
            medications: None,
        };
        assert!(!health_analysis(&calm).emergency_action);
    }

    #[test]
    fn nutrition_fallback_interpolates_goals() {
        let plan = nutrition_plan(&NutritionRequest {
            goals: vec!["weight loss".to_string()],
            restrictions: vec!["vegetarian".to_string()],
            current_diet: "mixed".to_string(),
        });
        assert_eq!(plan.nutrition_score, 75);
        assert!(plan.nutritional_insights.contains("weight loss"));
        assert!(plan.nutritional_insights.contains("vegetarian"));
    }

    #[test]
    fn status_fallback_is_inactive() {
        let status = api_status();
        assert_eq!(status.status, ServiceState::Inactive);
        assert_eq!(status.credits_remaining, 0);
        assert_eq!(status.rate_limit_remaining, 0);
    }

    #[test]
    fn text_defaults_preserve_raw_answer() {
        let raw = "plain prose from the model";
        assert_eq!(health_analysis_from_text(raw).analysis, raw);
        assert_eq!(sleep_plan_from_text(raw).detailed_analysis, raw);
        assert_eq!(mental_health_from_text(raw).mood_analysis, raw);
        assert_eq!(nutrition_plan_from_text(raw).nutritional_insights, raw);
    }
}
