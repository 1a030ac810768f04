use crate::core::{ArticleConfig, GeneratedArticle, Storage, Video};
use crate::utils::error::Result;
use crate::utils::html::{escape_text, sanitize_html, strip_html_tags};
use chrono::{DateTime, Utc};
use serde::Serialize;

const MAX_SLUG_LEN: usize = 60;

/// Relative names of the files written for one article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedArticle {
    pub html: String,
    pub text: String,
    pub json: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportRecord<'a> {
    generated_at: DateTime<Utc>,
    video: &'a Video,
    config: &'a ArticleConfig,
    article: &'a GeneratedArticle,
}

pub struct ArticleExporter<S: Storage> {
    storage: S,
}

impl<S: Storage> ArticleExporter<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub async fn export(
        &self,
        article: &GeneratedArticle,
        video: &Video,
        config: &ArticleConfig,
    ) -> Result<ExportedArticle> {
        self.export_at(article, video, config, Utc::now()).await
    }

    pub async fn export_at(
        &self,
        article: &GeneratedArticle,
        video: &Video,
        config: &ArticleConfig,
        generated_at: DateTime<Utc>,
    ) -> Result<ExportedArticle> {
        let stem = format!(
            "{}-{}",
            slugify(&article.title),
            generated_at.format("%Y%m%d-%H%M%S")
        );
        let exported = ExportedArticle {
            html: format!("{}.html", stem),
            text: format!("{}.txt", stem),
            json: format!("{}.json", stem),
        };

        tracing::debug!("Exporting article '{}' as {}.*", article.title, stem);

        self.storage
            .write_file(&exported.html, render_html_document(article).as_bytes())
            .await?;
        self.storage
            .write_file(&exported.text, render_text_document(article).as_bytes())
            .await?;

        let record = ExportRecord {
            generated_at,
            video,
            config,
            article,
        };
        let json = serde_json::to_string_pretty(&record)?;
        self.storage.write_file(&exported.json, json.as_bytes()).await?;

        Ok(exported)
    }
}

fn render_html_document(article: &GeneratedArticle) -> String {
    let title = escape_text(&article.title);
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<article>\n<h1>{title}</h1>\n{}\n</article>\n</body>\n</html>\n",
        sanitize_html(&article.content)
    )
}

fn render_text_document(article: &GeneratedArticle) -> String {
    format!(
        "{}\n\n{}\n\n---\n{}\n",
        article.title,
        strip_html_tags(&sanitize_html(&article.content)).trim(),
        article.meta_tags.trim()
    )
}

/// Lowercase ASCII slug; anything else becomes a single hyphen.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.truncate(MAX_SLUG_LEN);
    let slug = slug.trim_end_matches('-');

    if slug.is_empty() {
        "article".to_string()
    } else {
        slug.to_string()
    }
}
