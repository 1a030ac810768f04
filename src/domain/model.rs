use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::AppError;
use crate::utils::html::strip_html_tags;

/// A (fictitious) video returned by the search call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub channel: String,
    pub duration: String,
    pub thumbnail: String,
    pub views: String,
    pub published: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcription: Option<String>,
}

impl Video {
    /// True once a non-empty transcription has been attached.
    pub fn has_transcription(&self) -> bool {
        self.transcription
            .as_deref()
            .is_some_and(|text| !text.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleType {
    #[default]
    Guide,
    Tutorial,
    List,
    Comparison,
    News,
}

impl ArticleType {
    pub const ALL: [ArticleType; 5] = [
        ArticleType::Guide,
        ArticleType::Tutorial,
        ArticleType::List,
        ArticleType::Comparison,
        ArticleType::News,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleType::Guide => "guide",
            ArticleType::Tutorial => "tutorial",
            ArticleType::List => "list",
            ArticleType::Comparison => "comparison",
            ArticleType::News => "news",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ArticleType::Guide => "Master Guide",
            ArticleType::Tutorial => "Step by Step",
            ArticleType::List => "List / Top 10",
            ArticleType::Comparison => "Comparison",
            ArticleType::News => "News",
        }
    }
}

impl fmt::Display for ArticleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ArticleType::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| AppError::InvalidConfigValueError {
                field: "article.type".to_string(),
                value: s.to_string(),
                reason: "expected one of guide, tutorial, list, comparison, news".to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleLength {
    Short,
    #[default]
    Medium,
    Long,
    Detailed,
}

impl ArticleLength {
    pub const ALL: [ArticleLength; 4] = [
        ArticleLength::Short,
        ArticleLength::Medium,
        ArticleLength::Long,
        ArticleLength::Detailed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleLength::Short => "short",
            ArticleLength::Medium => "medium",
            ArticleLength::Long => "long",
            ArticleLength::Detailed => "detailed",
        }
    }

    /// Approximate word count requested from the generator.
    /// `Detailed` shares the top tier with `Long`.
    pub fn target_words(&self) -> u32 {
        match self {
            ArticleLength::Short => 1000,
            ArticleLength::Medium => 1800,
            ArticleLength::Long | ArticleLength::Detailed => 2500,
        }
    }
}

impl fmt::Display for ArticleLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleLength {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ArticleLength::ALL
            .into_iter()
            .find(|l| l.as_str() == wanted)
            .ok_or_else(|| AppError::InvalidConfigValueError {
                field: "article.length".to_string(),
                value: s.to_string(),
                reason: "expected one of short, medium, long, detailed".to_string(),
            })
    }
}

/// Optional article sections the generator can be asked to include.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Faq,
    Tips,
    Recipes,
    Equipment,
}

impl FromStr for Section {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "faq" => Ok(Section::Faq),
            "tips" => Ok(Section::Tips),
            "recipes" => Ok(Section::Recipes),
            "equipment" => Ok(Section::Equipment),
            _ => Err(AppError::ValidationError {
                message: format!(
                    "unknown section '{}', expected faq, tips, recipes or equipment",
                    s.trim()
                ),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleConfig {
    #[serde(rename = "type")]
    pub article_type: ArticleType,
    pub keywords: Vec<String>,
    pub length: ArticleLength,
    #[serde(rename = "includeFAQ")]
    pub include_faq: bool,
    pub include_tips: bool,
    pub include_recipes: bool,
    pub include_equipment: bool,
}

impl Default for ArticleConfig {
    fn default() -> Self {
        Self {
            article_type: ArticleType::Guide,
            keywords: vec![
                "espetinho de carne".to_string(),
                "como fazer espetinho".to_string(),
                "churrasco caseiro".to_string(),
            ],
            length: ArticleLength::Medium,
            include_faq: true,
            include_tips: true,
            include_recipes: true,
            include_equipment: false,
        }
    }
}

impl ArticleConfig {
    /// Splits a comma separated keyword line, dropping blank entries.
    pub fn parse_keywords(input: &str) -> Vec<String> {
        input
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn set_keywords(&mut self, input: &str) {
        self.keywords = Self::parse_keywords(input);
    }

    pub fn includes(&self, section: Section) -> bool {
        match section {
            Section::Faq => self.include_faq,
            Section::Tips => self.include_tips,
            Section::Recipes => self.include_recipes,
            Section::Equipment => self.include_equipment,
        }
    }

    pub fn toggle(&mut self, section: Section) {
        let flag = match section {
            Section::Faq => &mut self.include_faq,
            Section::Tips => &mut self.include_tips,
            Section::Recipes => &mut self.include_recipes,
            Section::Equipment => &mut self.include_equipment,
        };
        *flag = !*flag;
    }
}

/// The article record produced by the generator. All metrics are opaque
/// values reported by the model; none are computed locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedArticle {
    pub title: String,
    pub content: String,
    #[serde(deserialize_with = "number_as_u32")]
    pub seo_score: u32,
    #[serde(deserialize_with = "number_as_u32")]
    pub word_count: u32,
    #[serde(deserialize_with = "number_as_u32")]
    pub reading_time: u32,
    pub keyword_density: String,
    #[serde(deserialize_with = "number_as_u32")]
    pub heading_count: u32,
    #[serde(deserialize_with = "number_as_u32")]
    pub internal_links: u32,
    #[serde(deserialize_with = "number_as_u32")]
    pub image_count: u32,
    pub meta_tags: String,
}

impl GeneratedArticle {
    pub fn seo_score(&self) -> u32 {
        self.seo_score.min(100)
    }

    /// The article body with every HTML tag removed.
    pub fn plain_text(&self) -> String {
        strip_html_tags(&self.content)
    }
}

// The response schema only promises "NUMBER", so 12 and 12.0 both show up.
fn number_as_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() || value < 0.0 {
        return Err(serde::de::Error::custom(format!(
            "expected a non-negative number, got {}",
            value
        )));
    }
    Ok(value.round().min(u32::MAX as f64) as u32)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum WizardStep {
    #[default]
    Search,
    Configure,
    Publish,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [WizardStep::Search, WizardStep::Configure, WizardStep::Publish];

    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Search => 1,
            WizardStep::Configure => 2,
            WizardStep::Publish => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::Search => "Search",
            WizardStep::Configure => "Configure",
            WizardStep::Publish => "Publish",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    Top,
    Configure,
    Result,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_wire_format() {
        let json = serde_json::json!({
            "id": "abc123",
            "title": "Espetinho perfeito",
            "channel": "Churrasco Raiz",
            "duration": "12:34",
            "thumbnail": "https://picsum.photos/seed/abc/640/360",
            "views": "1.2M",
            "published": "2 weeks ago"
        });
        let video: Video = serde_json::from_value(json).unwrap();
        assert_eq!(video.channel, "Churrasco Raiz");
        assert!(video.transcription.is_none());

        let out = serde_json::to_value(&video).unwrap();
        assert!(out.get("transcription").is_none());
    }

    #[test]
    fn test_has_transcription_requires_non_empty_text() {
        let mut video: Video = serde_json::from_value(serde_json::json!({
            "id": "1", "title": "t", "channel": "c", "duration": "1:00",
            "thumbnail": "x", "views": "1", "published": "today"
        }))
        .unwrap();
        assert!(!video.has_transcription());
        video.transcription = Some(String::new());
        assert!(!video.has_transcription());
        video.transcription = Some("   ".to_string());
        assert!(video.has_transcription());
        video.transcription = Some("Fala, pessoal!".to_string());
        assert!(video.has_transcription());
    }

    #[test]
    fn test_article_config_wire_names() {
        let value = serde_json::to_value(ArticleConfig::default()).unwrap();
        assert_eq!(value["type"], "guide");
        assert_eq!(value["length"], "medium");
        assert_eq!(value["includeFAQ"], true);
        assert_eq!(value["includeEquipment"], false);
        assert_eq!(value["keywords"][0], "espetinho de carne");
    }

    #[test]
    fn test_parse_keywords_trims_and_drops_blanks() {
        let keywords = ArticleConfig::parse_keywords(" picanha , , sal grosso,brasa ");
        assert_eq!(keywords, vec!["picanha", "sal grosso", "brasa"]);
        assert!(ArticleConfig::parse_keywords(" , ").is_empty());
    }

    #[test]
    fn test_toggle_section() {
        let mut config = ArticleConfig::default();
        assert!(!config.includes(Section::Equipment));
        config.toggle(Section::Equipment);
        assert!(config.includes(Section::Equipment));
        config.toggle(Section::Faq);
        assert!(!config.include_faq);
    }

    #[test]
    fn test_type_and_length_parsing() {
        assert_eq!("Comparison".parse::<ArticleType>().unwrap(), ArticleType::Comparison);
        assert_eq!(" news ".parse::<ArticleType>().unwrap(), ArticleType::News);
        assert!("essay".parse::<ArticleType>().is_err());
        assert_eq!("DETAILED".parse::<ArticleLength>().unwrap(), ArticleLength::Detailed);
        assert!("huge".parse::<ArticleLength>().is_err());
        assert!("sauces".parse::<Section>().is_err());
    }

    #[test]
    fn test_length_word_targets() {
        assert_eq!(ArticleLength::Short.target_words(), 1000);
        assert_eq!(ArticleLength::Medium.target_words(), 1800);
        assert_eq!(ArticleLength::Long.target_words(), 2500);
        assert_eq!(ArticleLength::Detailed.target_words(), 2500);
    }

    #[test]
    fn test_article_accepts_float_metrics() {
        let json = serde_json::json!({
            "title": "Como fazer espetinho",
            "content": "<h2>Intro</h2><p>Texto</p>",
            "seoScore": 92.0,
            "wordCount": 1810,
            "readingTime": 8.6,
            "keywordDensity": "1.8%",
            "headingCount": 9,
            "internalLinks": 3.0,
            "imageCount": 2,
            "metaTags": "<meta name=\"description\" content=\"...\">"
        });
        let article: GeneratedArticle = serde_json::from_value(json).unwrap();
        assert_eq!(article.seo_score(), 92);
        assert_eq!(article.reading_time, 9);
        assert_eq!(article.internal_links, 3);
        assert_eq!(article.plain_text(), "IntroTexto");
    }

    #[test]
    fn test_article_rejects_negative_metrics() {
        let json = serde_json::json!({
            "title": "t", "content": "c", "seoScore": -5, "wordCount": 1,
            "readingTime": 1, "keywordDensity": "1%", "headingCount": 1,
            "internalLinks": 0, "imageCount": 0, "metaTags": ""
        });
        assert!(serde_json::from_value::<GeneratedArticle>(json).is_err());
    }

    #[test]
    fn test_seo_score_is_clamped() {
        let article = GeneratedArticle {
            title: String::new(),
            content: String::new(),
            seo_score: 140,
            word_count: 0,
            reading_time: 0,
            keyword_density: String::new(),
            heading_count: 0,
            internal_links: 0,
            image_count: 0,
            meta_tags: String::new(),
        };
        assert_eq!(article.seo_score(), 100);
    }

    #[test]
    fn test_step_numbers() {
        let numbers: Vec<u8> = WizardStep::ALL.iter().map(WizardStep::number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert!(WizardStep::Configure < WizardStep::Publish);
    }
}
