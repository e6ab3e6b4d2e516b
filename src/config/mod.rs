pub mod toml_config;

pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, WellnessCommand};

#[cfg(feature = "cli")]
mod cli {
    use crate::domain::ports::GatewayConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::{self, Validate};
    use clap::{Parser, Subcommand};
    use std::path::PathBuf;

    pub const API_KEY_ENV: &str = "LIFEGUIDE_API_KEY";

    #[derive(Debug, Clone, Parser)]
    #[command(name = "lifeguide")]
    #[command(about = "Wellness AI gateway client with deterministic local fallbacks")]
    pub struct CliConfig {
        #[arg(long, default_value = "https://api.modal.com")]
        pub base_url: String,

        /// Bearer credential; read from LIFEGUIDE_API_KEY when omitted.
        #[arg(long)]
        pub api_key: Option<String>,

        #[arg(long)]
        pub timeout_seconds: Option<u64>,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,

        #[command(subcommand)]
        pub command: WellnessCommand,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum WellnessCommand {
        /// Probe service status, credits, and rate limit
        Status,
        /// List the available wellness specialists
        Specialists,
        /// Analyze health symptoms
        Health {
            #[arg(long, value_delimiter = ',')]
            symptoms: Vec<String>,
            #[arg(long, default_value = "unspecified")]
            duration: String,
            #[arg(long, default_value = "5")]
            severity: u8,
        },
        /// Assess sleep and produce an optimization plan
        Sleep {
            #[arg(long)]
            hours: f64,
            #[arg(long)]
            quality: u8,
            #[arg(long, value_delimiter = ',')]
            issues: Vec<String>,
            #[arg(long, default_value = "22:30")]
            bedtime: String,
        },
        /// Assess mood, stress, and anxiety levels (each 0-10)
        Mental {
            #[arg(long)]
            mood: u8,
            #[arg(long)]
            stress: u8,
            #[arg(long)]
            anxiety: u8,
        },
        /// Build a nutrition plan from goals and restrictions
        Nutrition {
            #[arg(long, value_delimiter = ',')]
            goals: Vec<String>,
            #[arg(long, value_delimiter = ',')]
            restrictions: Vec<String>,
            #[arg(long, default_value = "mixed")]
            current_diet: String,
        },
        /// Triage an emergency situation
        Emergency {
            #[arg(long)]
            situation: String,
            #[arg(long, value_delimiter = ',')]
            symptoms: Vec<String>,
        },
        /// Synthesize meditation audio and write it to a file
        Audio {
            #[arg(long)]
            script: String,
            #[arg(long, default_value = "neutral")]
            voice: String,
            #[arg(long, default_value = "meditation.mp3")]
            output: PathBuf,
        },
    }

    impl CliConfig {
        /// Fill the credential from the environment when the flag is absent.
        /// An empty key is allowed: requests will fail and degrade to
        /// fallback answers.
        pub fn with_env_credentials(mut self) -> Self {
            if self.api_key.is_none() {
                self.api_key = std::env::var(API_KEY_ENV).ok();
            }
            self
        }
    }

    impl GatewayConfigProvider for CliConfig {
        fn base_url(&self) -> &str {
            &self.base_url
        }

        fn api_key(&self) -> &str {
            self.api_key.as_deref().unwrap_or_default()
        }

        fn timeout_seconds(&self) -> Option<u64> {
            self.timeout_seconds
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validation::validate_url("base_url", &self.base_url)?;
            if let Some(seconds) = self.timeout_seconds {
                validation::validate_range("timeout_seconds", seconds, 1, 300)?;
            }
            Ok(())
        }
    }

}
