pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use adapters::clipboard::SystemClipboard;
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::clipboard::MemoryClipboard;
pub use adapters::gemini::GeminiClient;
pub use adapters::storage::LocalStorage;
pub use app::{Session, TerminalView};
pub use config::toml_config::TomlConfig;
pub use core::export::ArticleExporter;
pub use core::wizard::{StepOutcome, Wizard, WizardState};
pub use domain::model::{ArticleConfig, ArticleLength, ArticleType, GeneratedArticle, Video, WizardStep};
pub use utils::error::{AppError, Result};
