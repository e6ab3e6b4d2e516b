pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use core::{directory::StaticDirectory, gateway::AiGateway};
pub use domain::model::{Outcome, ResponseOrigin};
pub use domain::ports::{ConsultationDirectory, GatewayConfigProvider, WellnessApi};
pub use utils::error::{GatewayError, Result};
