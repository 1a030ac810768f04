pub mod toml_config;

pub mod defaults {
    pub use crate::adapters::gemini::{DEFAULT_API_BASE as API_BASE, DEFAULT_MODEL as MODEL};
    pub use crate::core::wizard::DEFAULT_QUERY as QUERY;

    pub const TIMEOUT_SECONDS: u64 = 120;
    pub const OUTPUT_PATH: &str = "./output";
    pub const SITE_NAME: &str = "Barão do Espetinho";
    pub const LANGUAGE: &str = "Brazilian Portuguese (pt-BR)";
    pub const RESULT_COUNT: usize = 6;
    pub const MIN_RESULT_COUNT: usize = 1;
    pub const MAX_RESULT_COUNT: usize = 24;
}

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use super::defaults;
    use super::toml_config::{resolved, validate_provider, TomlConfig};
    use crate::core::{ArticleConfig, ConfigProvider};
    use crate::domain::model::{ArticleLength, ArticleType};
    use crate::utils::error::Result;
    use crate::utils::validation::{self, Validate};
    use clap::Parser;
    use std::time::Duration;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "seo-article-machine")]
    #[command(about = "Turn an AI-transcribed video into a ready-to-publish SEO article")]
    pub struct CliConfig {
        /// Gemini API key (falls back to the API_KEY variable)
        #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
        pub api_key: Option<String>,

        /// Model used for all three calls
        #[arg(long)]
        pub model: Option<String>,

        /// Base URL of the Generative Language API
        #[arg(long)]
        pub api_base: Option<String>,

        /// Request timeout in seconds
        #[arg(long, value_name = "SECONDS")]
        pub timeout: Option<u64>,

        /// Path to a TOML configuration file
        #[arg(short, long)]
        pub config: Option<String>,

        /// Directory for saved articles
        #[arg(long)]
        pub output_path: Option<String>,

        /// Search topic (pre-fills the interactive prompt)
        #[arg(short, long)]
        pub query: Option<String>,

        /// Article type: guide, tutorial, list, comparison or news
        #[arg(long)]
        pub article_type: Option<ArticleType>,

        /// Article length: short, medium, long or detailed
        #[arg(long)]
        pub length: Option<ArticleLength>,

        /// Comma separated SEO keywords
        #[arg(long)]
        pub keywords: Option<String>,

        /// Run search, transcription and generation without prompting
        #[arg(long)]
        pub batch: bool,

        /// Which search result to use in batch mode (1-based)
        #[arg(long, default_value_t = 1)]
        pub pick: usize,

        /// Save the generated article to the output directory
        #[arg(long)]
        pub save: bool,

        /// Keep copied text in memory instead of the desktop clipboard
        #[arg(long)]
        pub no_clipboard: bool,

        /// Emit logs as JSON lines
        #[arg(long)]
        pub log_json: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(skip)]
        pub file: Option<TomlConfig>,
    }

    impl CliConfig {
        /// Loads the `--config` file, if any, and applies the `API_KEY`
        /// fallback. Options given on the command line win over the file.
        pub fn load_file(mut self) -> Result<Self> {
            if let Some(path) = &self.config {
                tracing::info!("📁 Loading configuration from: {}", path);
                self.file = Some(TomlConfig::from_file(path)?);
            }
            if self.api_key.is_none() && self.file_api_key().is_none() {
                self.api_key = std::env::var("API_KEY").ok();
            }
            Ok(self)
        }

        fn file_api_key(&self) -> Option<&str> {
            self.file.as_ref().and_then(|f| f.api_key())
        }

        pub fn initial_query(&self) -> String {
            match (&self.query, &self.file) {
                (Some(query), _) => query.clone(),
                (None, Some(file)) => file.default_query().to_string(),
                (None, None) => defaults::QUERY.to_string(),
            }
        }

        pub fn article_config(&self) -> ArticleConfig {
            let mut config = self
                .file
                .as_ref()
                .map(TomlConfig::article_config)
                .unwrap_or_default();
            if let Some(article_type) = self.article_type {
                config.article_type = article_type;
            }
            if let Some(length) = self.length {
                config.length = length;
            }
            if let Some(keywords) = &self.keywords {
                config.set_keywords(keywords);
            }
            config
        }
    }

    impl ConfigProvider for CliConfig {
        fn api_key(&self) -> Option<&str> {
            resolved(self.api_key.as_deref()).or_else(|| self.file_api_key())
        }

        fn model(&self) -> &str {
            match (&self.model, &self.file) {
                (Some(model), _) => model.as_str(),
                (None, Some(file)) => file.model(),
                (None, None) => defaults::MODEL,
            }
        }

        fn api_base(&self) -> &str {
            match (&self.api_base, &self.file) {
                (Some(base), _) => base.as_str(),
                (None, Some(file)) => file.api_base(),
                (None, None) => defaults::API_BASE,
            }
        }

        fn request_timeout(&self) -> Duration {
            match (self.timeout, &self.file) {
                (Some(secs), _) => Duration::from_secs(secs),
                (None, Some(file)) => file.request_timeout(),
                (None, None) => Duration::from_secs(defaults::TIMEOUT_SECONDS),
            }
        }

        fn output_path(&self) -> &str {
            match (&self.output_path, &self.file) {
                (Some(path), _) => path.as_str(),
                (None, Some(file)) => file.output_path(),
                (None, None) => defaults::OUTPUT_PATH,
            }
        }

        fn site_name(&self) -> &str {
            self.file
                .as_ref()
                .map_or(defaults::SITE_NAME, |f| f.site_name())
        }

        fn language(&self) -> &str {
            self.file
                .as_ref()
                .map_or(defaults::LANGUAGE, |f| f.language())
        }

        fn result_count(&self) -> usize {
            self.file
                .as_ref()
                .map_or(defaults::RESULT_COUNT, |f| f.result_count())
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_provider(self)?;
            if self.batch {
                validation::validate_range("pick", self.pick, 1, self.result_count())?;
            }
            Ok(())
        }
    }

}
