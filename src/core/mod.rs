pub mod directory;
pub mod fallback;
pub mod gateway;

pub use crate::domain::model::{Outcome, ResponseOrigin};
pub use crate::domain::ports::{ConsultationDirectory, GatewayConfigProvider, WellnessApi};
pub use crate::utils::error::Result;
