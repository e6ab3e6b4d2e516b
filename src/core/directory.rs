use crate::domain::model::{
    Availability, Consultation, MessageUrgency, Specialist, VideoCall,
};
use crate::domain::ports::ConsultationDirectory;
use async_trait::async_trait;
use chrono::Utc;

const DEFAULT_JOIN_BASE: &str = "https://lifeguide-ai.vercel.app";

/// Static specialist roster and consultation-room fabrication. Identifiers
/// embed the current unix-millis timestamp; uniqueness holds only to that
/// granularity.
#[derive(Debug, Clone)]
pub struct StaticDirectory {
    join_base: String,
}

impl StaticDirectory {
    pub fn new(join_base: impl Into<String>) -> Self {
        Self {
            join_base: join_base.into().trim_end_matches('/').to_string(),
        }
    }
}

impl Default for StaticDirectory {
    fn default() -> Self {
        Self::new(DEFAULT_JOIN_BASE)
    }
}

fn roster() -> Vec<Specialist> {
    vec![
        Specialist {
            id: "sleep-specialist-1".to_string(),
            name: "Dr. Sarah Sleep".to_string(),
            specialty: "Sleep Medicine".to_string(),
            status: Availability::Online,
            rating: 4.9,
        },
        Specialist {
            id: "mental-health-1".to_string(),
            name: "Dr. Mind Wellness".to_string(),
            specialty: "Mental Health".to_string(),
            status: Availability::Online,
            rating: 4.8,
        },
        Specialist {
            id: "nutrition-expert-1".to_string(),
            name: "Dr. Healthy Nutrition".to_string(),
            specialty: "Clinical Nutrition".to_string(),
            status: Availability::Busy,
            rating: 4.7,
        },
    ]
}

#[async_trait]
impl ConsultationDirectory for StaticDirectory {
    async fn specialists(&self) -> Vec<Specialist> {
        roster()
    }

    async fn create_consultation(&self, patient_id: &str, specialist_type: &str) -> Consultation {
        let room_id = format!("wellness-{}-{}", specialist_type, Utc::now().timestamp_millis());
        tracing::info!("Creating consultation {} for patient {}", room_id, patient_id);

        Consultation {
            join_url: format!("{}/consultation/{}", self.join_base, room_id),
            room_id,
            consultation_type: specialist_type.to_string(),
        }
    }

    async fn start_video_call(&self, room_id: &str) -> VideoCall {
        let call_id = format!("call-{}", Utc::now().timestamp_millis());
        tracing::info!("Starting video consultation {} in room {}", call_id, room_id);

        VideoCall {
            success: true,
            consultation_url: format!("/video-call/{}", call_id),
            call_id,
        }
    }

    async fn send_message(&self, message: &str, urgency: MessageUrgency) -> bool {
        // Mock transport: the real chat SDK sits behind this seam.
        tracing::info!("Sending wellness message ({:?}): {}", urgency, message);
        true
    }
}
