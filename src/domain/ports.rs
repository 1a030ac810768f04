use crate::core::wizard::WizardState;
use crate::domain::model::{ArticleConfig, GeneratedArticle, ScrollTarget, Video};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// The generative-AI collaborator behind the three wizard calls.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn search_videos(&self, query: &str) -> Result<Vec<Video>>;
    async fn generate_transcription(&self, video: &Video) -> Result<String>;
    async fn generate_article(
        &self,
        video: &Video,
        config: &ArticleConfig,
    ) -> Result<GeneratedArticle>;
}

#[async_trait]
impl<T: ContentGenerator + ?Sized> ContentGenerator for Arc<T> {
    async fn search_videos(&self, query: &str) -> Result<Vec<Video>> {
        (**self).search_videos(query).await
    }

    async fn generate_transcription(&self, video: &Video) -> Result<String> {
        (**self).generate_transcription(video).await
    }

    async fn generate_article(
        &self,
        video: &Video,
        config: &ArticleConfig,
    ) -> Result<GeneratedArticle> {
        (**self).generate_article(video, config).await
    }
}

/// Presentation side of the wizard. `render` is called after every state
/// transition, including the ones that only flip a loading flag.
pub trait WizardView: Send + Sync {
    fn render(&self, state: &WizardState);
    fn scroll_to(&self, target: ScrollTarget);
    fn alert(&self, message: &str);
}

impl<T: WizardView + ?Sized> WizardView for Arc<T> {
    fn render(&self, state: &WizardState) {
        (**self).render(state)
    }

    fn scroll_to(&self, target: ScrollTarget) {
        (**self).scroll_to(target)
    }

    fn alert(&self, message: &str) {
        (**self).alert(message)
    }
}

pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}

impl<T: Clipboard + ?Sized> Clipboard for Arc<T> {
    fn write_text(&self, text: &str) -> Result<()> {
        (**self).write_text(text)
    }
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_key(&self) -> Option<&str>;
    fn model(&self) -> &str;
    fn api_base(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn output_path(&self) -> &str;
    fn site_name(&self) -> &str;
    fn language(&self) -> &str;
    fn result_count(&self) -> usize;
}
