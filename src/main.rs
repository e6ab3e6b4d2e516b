use clap::Parser;
use lifeguide::config::WellnessCommand;
use lifeguide::domain::model::{
    AudioRequest, EmergencyRequest, HealthAnalysisRequest, MentalHealthRequest, NutritionRequest,
    Outcome, SleepAnalysisRequest, VoiceType,
};
use lifeguide::utils::error::{ErrorSeverity, GatewayError};
use lifeguide::utils::{logger, validation::Validate};
use lifeguide::{AiGateway, CliConfig, ConsultationDirectory, StaticDirectory, WellnessApi};
use serde::Serialize;

fn report<T: Serialize>(outcome: &Outcome<T>) {
    if outcome.is_degraded() {
        let origin = serde_json::to_string(&outcome.origin()).unwrap_or_default();
        tracing::warn!("⚠️  Degraded answer (origin: {})", origin.trim_matches('"'));
    }
    match serde_json::to_string_pretty(&**outcome) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("❌ Could not render response: {}", e),
    }
}

fn exit_for(error: &GatewayError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        error,
        error.category(),
        error.severity()
    );
    eprintln!("❌ {}", error.user_friendly_message());
    eprintln!("💡 {}", error.recovery_suggestion());

    let exit_code = match error.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

fn parse_voice(voice: &str) -> Result<VoiceType, GatewayError> {
    match voice {
        "calm_female" => Ok(VoiceType::CalmFemale),
        "soothing_male" => Ok(VoiceType::SoothingMale),
        "neutral" => Ok(VoiceType::Neutral),
        other => Err(GatewayError::ConfigValue {
            field: "voice".to_string(),
            value: other.to_string(),
            reason: "Expected calm_female, soothing_male, or neutral".to_string(),
        }),
    }
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse().with_env_credentials();

    logger::init_cli_logger(config.verbose);
    tracing::info!("Starting lifeguide CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        exit_for(&e);
    }

    let gateway = match AiGateway::new(&config) {
        Ok(gateway) => gateway,
        Err(e) => exit_for(&e),
    };

    match &config.command {
        WellnessCommand::Status => {
            let status = gateway.check_status().await;
            report(&status);
        }
        WellnessCommand::Specialists => {
            let directory = StaticDirectory::default();
            let specialists = directory.specialists().await;
            match serde_json::to_string_pretty(&specialists) {
                Ok(json) => println!("{}", json),
                Err(e) => exit_for(&GatewayError::Payload(e)),
            }
        }
        WellnessCommand::Health {
            symptoms,
            duration,
            severity,
        } => {
            let request = HealthAnalysisRequest {
                symptoms: symptoms.clone(),
                duration: duration.clone(),
                severity: *severity,
                medical_history: None,
                medications: None,
            };
            report(&gateway.analyze_health(&request).await);
        }
        WellnessCommand::Sleep {
            hours,
            quality,
            issues,
            bedtime,
        } => {
            let request = SleepAnalysisRequest {
                sleep_hours: *hours,
                sleep_quality: *quality,
                sleep_issues: issues.clone(),
                bedtime: bedtime.clone(),
                wake_time: None,
                lifestyle_factors: None,
            };
            report(&gateway.optimize_sleep(&request).await);
        }
        WellnessCommand::Mental {
            mood,
            stress,
            anxiety,
        } => {
            let request = MentalHealthRequest {
                mood_level: *mood,
                stress_level: *stress,
                anxiety_level: *anxiety,
                recent_events: None,
                coping_mechanisms: None,
            };
            report(&gateway.assess_mental_health(&request).await);
        }
        WellnessCommand::Nutrition {
            goals,
            restrictions,
            current_diet,
        } => {
            let request = NutritionRequest {
                goals: goals.clone(),
                restrictions: restrictions.clone(),
                current_diet: current_diet.clone(),
            };
            report(&gateway.plan_nutrition(&request).await);
        }
        WellnessCommand::Emergency {
            situation,
            symptoms,
        } => {
            let request = EmergencyRequest {
                situation: situation.clone(),
                symptoms: symptoms.clone(),
            };
            report(&gateway.assess_emergency(&request).await);
        }
        WellnessCommand::Audio {
            script,
            voice,
            output,
        } => {
            let voice_type = match parse_voice(voice) {
                Ok(voice_type) => voice_type,
                Err(e) => exit_for(&e),
            };
            let request = AudioRequest::meditation(script.clone(), voice_type);
            let clip = gateway.synthesize_audio(&request).await;

            if clip.is_empty() {
                tracing::warn!("⚠️  No audio was generated; not writing {}", output.display());
            } else if let Err(e) = std::fs::write(output, &clip.bytes) {
                exit_for(&GatewayError::Io(e));
            } else {
                tracing::info!("✅ Audio saved to: {}", output.display());
                println!("✅ Audio saved to: {}", output.display());
            }
        }
    }
}
