use crate::core::{ArticleConfig, Video};

pub fn search_prompt(query: &str, result_count: usize) -> String {
    format!(
        r#"Generate a list of {result_count} fictitious but realistic YouTube videos about the topic: "{query}".
Return JSON in the format:
Array<{{ id: string, title: string, channel: string, duration: string, thumbnail: string, views: string, published: string }}>.
Use Picsum image URLs (https://picsum.photos) for the thumbnails."#
    )
}

pub fn transcription_prompt(video: &Video, language: &str) -> String {
    format!(
        r#"Act as a professional transcriber. Write a detailed transcription in {language} of a YouTube video titled "{}" from the channel "{}".
The text must read like the natural speech of an expert barbecue pit-master, full of tips, steps and enthusiasm."#,
        video.title, video.channel
    )
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

pub fn article_prompt(
    video: &Video,
    config: &ArticleConfig,
    site_name: &str,
    language: &str,
) -> String {
    format!(
        r#"Act as an SEO copywriter for the website "{site_name}".
Based on the video "{title}" and its transcription: "{transcription}",
write a high quality article of type "{article_type}" focused on the keywords: {keywords}.
The article must be written in {language} and have approximately {words} words.

Rules:
- Use HTML for formatting (h2, h3, p, strong, ul, li).
- Include these sections as requested: FAQ ({faq}), Tips ({tips}), Recipes ({recipes}), Equipment ({equipment}).
- The tone must be professional yet passionate about barbecue.
- Optimize for SEO (keyword density, headings).

Return the result as JSON with: title, content (HTML), seoScore (0-100), wordCount, readingTime (minutes), keywordDensity (percentage), headingCount, internalLinks, imageCount, metaTags (formatted as text)."#,
        title = video.title,
        transcription = video.transcription.as_deref().unwrap_or_default(),
        article_type = config.article_type,
        keywords = config.keywords.join(", "),
        words = config.length.target_words(),
        faq = yes_no(config.include_faq),
        tips = yes_no(config.include_tips),
        recipes = yes_no(config.include_recipes),
        equipment = yes_no(config.include_equipment),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ArticleLength, ArticleType};

    fn video() -> Video {
        Video {
            id: "v1".to_string(),
            title: "Espetinho de frango suculento".to_string(),
            channel: "Brasa Viva".to_string(),
            duration: "9:41".to_string(),
            thumbnail: "https://picsum.photos/seed/v1/640/360".to_string(),
            views: "87K".to_string(),
            published: "5 days ago".to_string(),
            transcription: Some("Fala, galera da brasa!".to_string()),
        }
    }

    #[test]
    fn test_search_prompt_mentions_query_and_count() {
        let prompt = search_prompt("picanha na brasa", 6);
        assert!(prompt.contains("6 fictitious"));
        assert!(prompt.contains("\"picanha na brasa\""));
        assert!(prompt.contains("Picsum"));
    }

    #[test]
    fn test_transcription_prompt_uses_title_channel_and_language() {
        let prompt = transcription_prompt(&video(), "Brazilian Portuguese (pt-BR)");
        assert!(prompt.contains("\"Espetinho de frango suculento\""));
        assert!(prompt.contains("\"Brasa Viva\""));
        assert!(prompt.contains("in Brazilian Portuguese (pt-BR)"));
    }

    #[test]
    fn test_article_prompt_carries_config() {
        let config = ArticleConfig {
            article_type: ArticleType::Comparison,
            keywords: vec!["espetinho".to_string(), "frango".to_string()],
            length: ArticleLength::Short,
            include_faq: false,
            include_tips: true,
            include_recipes: false,
            include_equipment: true,
        };
        let prompt = article_prompt(&video(), &config, "Barão do Espetinho", "pt-BR");

        assert!(prompt.contains("\"Barão do Espetinho\""));
        assert!(prompt.contains("\"Fala, galera da brasa!\""));
        assert!(prompt.contains("type \"comparison\""));
        assert!(prompt.contains("keywords: espetinho, frango."));
        assert!(prompt.contains("approximately 1000 words"));
        assert!(prompt.contains("FAQ (no), Tips (yes), Recipes (no), Equipment (yes)"));
    }
}
