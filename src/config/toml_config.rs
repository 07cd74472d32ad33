use crate::core::banner::GreetingStyle;
use crate::core::order_stat::DEFAULT_RANK;
use crate::utils::error::{DrillError, Result};
use crate::utils::validation::{
    validate_path, validate_positive_number, validate_range, validate_single_char, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("small-drills/", env!("CARGO_PKG_VERSION"));
pub const MAX_FILL: usize = 200;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub fetch: Option<FetchConfig>,
    pub greeting: Option<GreetingConfig>,
    pub order: Option<OrderConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FetchConfig {
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
    pub base_dir: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GreetingConfig {
    pub style_char: Option<String>,
    pub fill: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderConfig {
    pub default_rank: Option<usize>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DrillError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| DrillError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${TEXT_DIR})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(fetch) = &self.fetch {
            if let Some(timeout) = fetch.timeout_seconds {
                validate_positive_number("fetch.timeout_seconds", timeout as usize, 1)?;
            }
            if let Some(base_dir) = &fetch.base_dir {
                validate_path("fetch.base_dir", base_dir)?;
            }
        }

        if let Some(greeting) = &self.greeting {
            if let Some(style_char) = &greeting.style_char {
                validate_single_char("greeting.style_char", style_char)?;
            }
            if let Some(fill) = greeting.fill {
                validate_range("greeting.fill", fill, 0, MAX_FILL)?;
            }
        }

        if let Some(rank) = self.order.as_ref().and_then(|o| o.default_rank) {
            validate_positive_number("order.default_rank", rank, 1)?;
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        let seconds = self
            .fetch
            .as_ref()
            .and_then(|f| f.timeout_seconds)
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);
        Duration::from_secs(seconds)
    }

    pub fn user_agent(&self) -> &str {
        self.fetch
            .as_ref()
            .and_then(|f| f.user_agent.as_deref())
            .unwrap_or(DEFAULT_USER_AGENT)
    }

    pub fn base_dir(&self) -> Option<&str> {
        self.fetch.as_ref().and_then(|f| f.base_dir.as_deref())
    }

    pub fn default_rank(&self) -> usize {
        self.order
            .as_ref()
            .and_then(|o| o.default_rank)
            .unwrap_or(DEFAULT_RANK)
    }

    pub fn greeting_style(&self) -> Result<GreetingStyle> {
        let mut style = GreetingStyle::default();
        if let Some(greeting) = &self.greeting {
            if let Some(style_char) = &greeting.style_char {
                style = style.with_style_char(validate_single_char(
                    "greeting.style_char",
                    style_char,
                )?);
            }
            if let Some(fill) = greeting.fill {
                style = style.with_fill(fill);
            }
        }
        Ok(style)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
