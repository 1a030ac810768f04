pub mod export;
pub mod wizard;

pub use crate::domain::model::{ArticleConfig, GeneratedArticle, Video};
pub use crate::domain::ports::{Clipboard, ConfigProvider, ContentGenerator, Storage, WizardView};
pub use crate::utils::error::Result;
