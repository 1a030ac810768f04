use crate::core::{ArticleConfig, Clipboard, ContentGenerator, GeneratedArticle, Video, WizardView};
use crate::domain::model::{ScrollTarget, WizardStep};
use std::time::Duration;
use tokio::time::Instant;

/// How long the "copied" indicator stays on after a copy.
pub const COPY_FEEDBACK: Duration = Duration::from_secs(2);

pub const DEFAULT_QUERY: &str = "como fazer espetinho de carne";

pub const ARTICLE_FAILURE_ALERT: &str = "Failed to generate the article.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Completed,
    /// A guard rejected the action before any network call.
    Skipped,
    /// The call failed; the wizard has already been moved back.
    Failed,
}

#[derive(Debug, Clone)]
pub struct WizardState {
    pub step: WizardStep,
    pub search_query: String,
    pub videos: Vec<Video>,
    pub selected_video: Option<Video>,
    pub config: ArticleConfig,
    pub article: Option<GeneratedArticle>,
    pub is_searching: bool,
    pub is_transcribing: bool,
    pub is_generating: bool,
    copied_at: Option<Instant>,
}

impl WizardState {
    pub fn new(search_query: impl Into<String>, config: ArticleConfig) -> Self {
        Self {
            step: WizardStep::Search,
            search_query: search_query.into(),
            videos: Vec::new(),
            selected_video: None,
            config,
            article: None,
            is_searching: false,
            is_transcribing: false,
            is_generating: false,
            copied_at: None,
        }
    }

    pub fn can_search(&self) -> bool {
        self.step == WizardStep::Search && !self.is_searching && !self.is_transcribing
    }

    pub fn can_select_video(&self) -> bool {
        self.step == WizardStep::Search && !self.is_transcribing
    }

    pub fn can_generate(&self) -> bool {
        self.step == WizardStep::Configure
            && !self.is_generating
            && self
                .selected_video
                .as_ref()
                .is_some_and(Video::has_transcription)
    }

    pub(crate) fn mark_copied(&mut self) {
        self.copied_at = Some(Instant::now());
    }

    pub fn copy_indicator_active(&self) -> bool {
        self.copied_at
            .is_some_and(|at| at.elapsed() < COPY_FEEDBACK)
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new(DEFAULT_QUERY, ArticleConfig::default())
    }
}

pub struct Wizard<G: ContentGenerator, V: WizardView, C: Clipboard> {
    generator: G,
    view: V,
    clipboard: C,
    state: WizardState,
}

impl<G: ContentGenerator, V: WizardView, C: Clipboard> Wizard<G, V, C> {
    pub fn new(generator: G, view: V, clipboard: C) -> Self {
        Self::with_state(generator, view, clipboard, WizardState::default())
    }

    pub fn with_state(generator: G, view: V, clipboard: C, state: WizardState) -> Self {
        Self {
            generator,
            view,
            clipboard,
            state,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.search_query = query.into();
    }

    pub fn config_mut(&mut self) -> &mut ArticleConfig {
        &mut self.state.config
    }

    fn render(&self) {
        self.view.render(&self.state);
    }

    pub async fn search(&mut self) -> StepOutcome {
        let query = self.state.search_query.trim().to_string();
        if query.is_empty() || !self.state.can_search() {
            tracing::debug!("Search skipped (query empty or wizard busy)");
            return StepOutcome::Skipped;
        }

        self.state.is_searching = true;
        self.render();

        tracing::info!("🔍 Searching videos for '{}'", query);
        let outcome = match self.generator.search_videos(&query).await {
            Ok(videos) => {
                tracing::info!("Found {} videos", videos.len());
                self.state.videos = videos;
                self.state.step = WizardStep::Search;
                StepOutcome::Completed
            }
            Err(e) => {
                tracing::error!("❌ Video search failed: {}", e);
                self.state.videos.clear();
                StepOutcome::Failed
            }
        };

        self.state.is_searching = false;
        self.render();
        outcome
    }

    /// Picks the video at `index` in the current result list and asks for
    /// its transcription.
    pub async fn select_video(&mut self, index: usize) -> StepOutcome {
        if !self.state.can_select_video() {
            tracing::debug!("Video selection ignored while step {} is active", self.state.step.number());
            return StepOutcome::Skipped;
        }
        let Some(video) = self.state.videos.get(index).cloned() else {
            tracing::warn!("No video at position {}", index + 1);
            return StepOutcome::Skipped;
        };

        self.state.selected_video = Some(video.clone());
        self.state.is_transcribing = true;
        self.state.step = WizardStep::Configure;
        self.render();

        tracing::info!("📝 Transcribing '{}'", video.title);
        let outcome = match self.generator.generate_transcription(&video).await {
            Ok(transcription) => {
                tracing::debug!("Transcription has {} characters", transcription.len());
                if let Some(selected) = self.state.selected_video.as_mut() {
                    selected.transcription = Some(transcription);
                }
                self.view.scroll_to(ScrollTarget::Configure);
                StepOutcome::Completed
            }
            Err(e) => {
                tracing::error!("❌ Transcription failed: {}", e);
                self.state.step = WizardStep::Search;
                StepOutcome::Failed
            }
        };

        self.state.is_transcribing = false;
        self.render();
        outcome
    }

    pub async fn generate_article(&mut self) -> StepOutcome {
        if !self.state.can_generate() {
            tracing::debug!("Article generation skipped (not on step 2, no transcription or already running)");
            return StepOutcome::Skipped;
        }
        let Some(video) = self.state.selected_video.clone() else {
            return StepOutcome::Skipped;
        };

        self.state.is_generating = true;
        self.state.step = WizardStep::Publish;
        self.render();

        tracing::info!(
            "✍️ Generating {} article ({}, {} keywords)",
            self.state.config.article_type,
            self.state.config.length,
            self.state.config.keywords.len()
        );
        let result = self
            .generator
            .generate_article(&video, &self.state.config)
            .await;
        let outcome = match result {
            Ok(article) => {
                tracing::info!("✅ Article ready: '{}' (SEO score {})", article.title, article.seo_score());
                self.state.article = Some(article);
                self.view.scroll_to(ScrollTarget::Result);
                StepOutcome::Completed
            }
            Err(e) => {
                tracing::error!("❌ Article generation failed: {}", e);
                self.view.alert(ARTICLE_FAILURE_ALERT);
                self.state.step = WizardStep::Configure;
                StepOutcome::Failed
            }
        };

        self.state.is_generating = false;
        self.render();
        outcome
    }

    /// Copies the article body, without markup, to the clipboard.
    pub fn copy_article(&mut self) -> StepOutcome {
        let Some(article) = self.state.article.as_ref() else {
            return StepOutcome::Skipped;
        };

        match self.clipboard.write_text(&article.plain_text()) {
            Ok(()) => {
                self.state.mark_copied();
                self.render();
                StepOutcome::Completed
            }
            Err(e) => {
                tracing::error!("❌ Copy to clipboard failed: {}", e);
                StepOutcome::Failed
            }
        }
    }

    pub fn reset(&mut self) {
        tracing::debug!("Resetting wizard");
        self.state.step = WizardStep::Search;
        self.state.selected_video = None;
        self.state.article = None;
        self.state.videos.clear();
        self.state.copied_at = None;
        self.view.scroll_to(ScrollTarget::Top);
        self.render();
    }
}
