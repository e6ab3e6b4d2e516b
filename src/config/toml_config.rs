use crate::domain::ports::GatewayConfigProvider;
use crate::utils::error::{GatewayError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub service: ServiceConfig,
    pub gateway: GatewaySection,
    pub directory: Option<DirectorySection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewaySection {
    pub base_url: String,
    pub api_key: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectorySection {
    pub join_base: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GatewayError::Io)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| GatewayError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR_NAME}` references with environment values. Unresolved
    /// placeholders are left as-is and caught by `validate()`.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn join_base(&self) -> Option<&str> {
        self.directory
            .as_ref()
            .and_then(|d| d.join_base.as_deref())
    }
}

impl GatewayConfigProvider for TomlConfig {
    fn base_url(&self) -> &str {
        &self.gateway.base_url
    }

    fn api_key(&self) -> &str {
        &self.gateway.api_key
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.gateway.timeout_seconds
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("gateway.base_url", &self.gateway.base_url)?;
        validation::validate_non_empty_string("service.name", &self.service.name)?;

        if self.gateway.api_key.contains("${") {
            return Err(GatewayError::MissingConfig {
                field: "gateway.api_key".to_string(),
            });
        }

        if let Some(seconds) = self.gateway.timeout_seconds {
            validation::validate_range("gateway.timeout_seconds", seconds, 1, 300)?;
        }

        if let Some(join_base) = self.join_base() {
            validation::validate_url("directory.join_base", join_base)?;
        }

        Ok(())
    }
}
