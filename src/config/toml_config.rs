use crate::core::{ArticleConfig, ConfigProvider};
use crate::domain::model::{ArticleLength, ArticleType};
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::defaults;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub article: ArticleDefaults,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub api_base: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    pub name: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    pub default_query: Option<String>,
    pub result_count: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticleDefaults {
    pub r#type: Option<ArticleType>,
    pub length: Option<ArticleLength>,
    pub keywords: Option<Vec<String>>,
    pub include_faq: Option<bool>,
    pub include_tips: Option<bool>,
    pub include_recipes: Option<bool>,
    pub include_equipment: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| AppError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the variable's value. Unset variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        let re = Regex::new(r"\$\{([^}]+)\}").expect("valid substitution regex");

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    /// Article options with file values laid over the built-in defaults.
    pub fn article_config(&self) -> ArticleConfig {
        let defaults = ArticleConfig::default();
        let article = &self.article;
        ArticleConfig {
            article_type: article.r#type.unwrap_or(defaults.article_type),
            keywords: article.keywords.clone().unwrap_or(defaults.keywords),
            length: article.length.unwrap_or(defaults.length),
            include_faq: article.include_faq.unwrap_or(defaults.include_faq),
            include_tips: article.include_tips.unwrap_or(defaults.include_tips),
            include_recipes: article.include_recipes.unwrap_or(defaults.include_recipes),
            include_equipment: article.include_equipment.unwrap_or(defaults.include_equipment),
        }
    }

    pub fn default_query(&self) -> &str {
        self.search
            .default_query
            .as_deref()
            .unwrap_or(defaults::QUERY)
    }
}

/// A value still reading `${VAR}` means the variable was not set.
pub(crate) fn resolved(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !(v.starts_with("${") && v.ends_with('}')))
}

impl ConfigProvider for TomlConfig {
    fn api_key(&self) -> Option<&str> {
        resolved(self.gemini.api_key.as_deref())
    }

    fn model(&self) -> &str {
        self.gemini.model.as_deref().unwrap_or(defaults::MODEL)
    }

    fn api_base(&self) -> &str {
        self.gemini.api_base.as_deref().unwrap_or(defaults::API_BASE)
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.gemini.timeout_seconds.unwrap_or(defaults::TIMEOUT_SECONDS))
    }

    fn output_path(&self) -> &str {
        self.output.path.as_deref().unwrap_or(defaults::OUTPUT_PATH)
    }

    fn site_name(&self) -> &str {
        self.site.name.as_deref().unwrap_or(defaults::SITE_NAME)
    }

    fn language(&self) -> &str {
        self.site.language.as_deref().unwrap_or(defaults::LANGUAGE)
    }

    fn result_count(&self) -> usize {
        self.search.result_count.unwrap_or(defaults::RESULT_COUNT)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}

/// Checks shared by every configuration source.
pub(crate) fn validate_provider<C: ConfigProvider>(config: &C) -> Result<()> {
    let api_key = config.api_key();
    let api_key = validation::validate_required_field("gemini.api_key", &api_key)?;
    validation::validate_non_empty_string("gemini.api_key", api_key)?;
    validation::validate_non_empty_string("gemini.model", config.model())?;
    validation::validate_url("gemini.api_base", config.api_base())?;
    validation::validate_range(
        "gemini.timeout_seconds",
        config.request_timeout().as_secs(),
        1,
        3600,
    )?;
    validation::validate_range(
        "search.result_count",
        config.result_count(),
        defaults::MIN_RESULT_COUNT,
        defaults::MAX_RESULT_COUNT,
    )?;
    validation::validate_path("output.path", config.output_path())?;
    Ok(())
}
