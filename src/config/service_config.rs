use crate::utils::error::{MeetsError, Result};
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://bikermeets.cc/Svc/Venues/-json";
pub const DEFAULT_VENUE_BASE_URL: &str = "http://bikermeets.cc";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 5;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub service: ServiceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub endpoint: String,
    pub venue_base_url: String,
    pub timeout_seconds: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            venue_base_url: DEFAULT_VENUE_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl ServiceConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MeetsError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置，缺少的欄位使用預設值
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content)?;

        let file: ConfigFile =
            toml::from_str(&processed_content).map_err(|e| MeetsError::ConfigError {
                message: format!("TOML parsing error: {}", e),
            })?;
        Ok(file.service)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        validate_url("service.endpoint", &self.endpoint)?;
        validate_url("service.venue_base_url", &self.venue_base_url)?;
        validate_positive_number("service.timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}

/// 替換環境變數 (例如 ${BIKERMEETS_ENDPOINT})，未設定的保持原樣
fn substitute_env_vars(content: &str) -> Result<String> {
    use regex::Regex;
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MeetsError::ConfigError {
        message: format!("Invalid substitution pattern: {}", e),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.to_string())
}
