use crate::core::wizard::WizardState;
use crate::core::{ArticleConfig, GeneratedArticle, Video, WizardView};
use crate::domain::model::{ScrollTarget, WizardStep};
use std::io::{self, Write};
use std::sync::Mutex;

const RULE: &str = "────────────────────────────────────────────────────────────";

/// Renders the wizard as plain text.
pub struct TerminalView<W: Write + Send = io::Stdout> {
    out: Mutex<W>,
}

impl TerminalView<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    fn write(&self, text: &str) {
        if let Ok(mut out) = self.out.lock() {
            // A closed stdout is not worth aborting the session for.
            let _ = out.write_all(text.as_bytes()).and_then(|_| out.flush());
        }
    }
}

pub fn format_step_indicator(current: WizardStep) -> String {
    WizardStep::ALL
        .iter()
        .map(|step| {
            if *step == current {
                format!("[{} {}]", step.number(), step.label())
            } else {
                format!(" {} {} ", step.number(), step.label())
            }
        })
        .collect::<Vec<_>>()
        .join(" › ")
}

pub fn format_video_card(position: usize, video: &Video) -> String {
    format!(
        "{:>2}. {}\n    {} · {} · {} views · {}\n",
        position, video.title, video.channel, video.duration, video.views, video.published
    )
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

pub fn format_config(config: &ArticleConfig) -> String {
    format!(
        "Style:    {} ({})\nLength:   {} (~{} words)\nKeywords: {}\nSections: faq {} · tips {} · recipes {} · equipment {}\n",
        config.article_type.label(),
        config.article_type,
        config.length,
        config.length.target_words(),
        if config.keywords.is_empty() {
            "(none)".to_string()
        } else {
            config.keywords.join(", ")
        },
        on_off(config.include_faq),
        on_off(config.include_tips),
        on_off(config.include_recipes),
        on_off(config.include_equipment),
    )
}

pub fn format_article(article: &GeneratedArticle, keywords: &[String]) -> String {
    let mut text = String::new();
    text.push_str(&format!("{}\n", article.title));
    if !keywords.is_empty() {
        let tags: Vec<String> = keywords.iter().map(|k| format!("# {}", k)).collect();
        text.push_str(&format!("{}\n", tags.join("  ")));
    }
    text.push_str(&format!(
        "\nSEO score {}/100 · {} min read · {} words · {} headings · density {} · {} internal links · {} images\n\n",
        article.seo_score(),
        article.reading_time,
        article.word_count,
        article.heading_count,
        article.keyword_density,
        article.internal_links,
        article.image_count,
    ));
    text.push_str(article.plain_text().trim());
    text.push_str(&format!("\n\nMeta tags (head section)\n{}\n", article.meta_tags.trim()));
    text
}

fn format_state(state: &WizardState) -> String {
    let mut text = format!("\n{}\n", format_step_indicator(state.step));

    if state.is_searching {
        text.push_str("⏳ Searching videos...\n");
        return text;
    }
    if state.is_transcribing {
        text.push_str("⏳ Reading the video... turning it into material for your article.\n");
        return text;
    }
    if state.is_generating {
        text.push_str("⏳ Writing the article... structuring headings and keyword density.\n");
        return text;
    }

    match state.step {
        WizardStep::Search => {
            if state.videos.is_empty() {
                text.push_str(&format!(
                    "Type a topic and press Enter to search (Enter alone searches \"{}\").\n",
                    state.search_query
                ));
            } else {
                for (i, video) in state.videos.iter().enumerate() {
                    text.push_str(&format_video_card(i + 1, video));
                }
                text.push_str("Pick a video by number, or type a new topic.\n");
            }
        }
        WizardStep::Configure => {
            if let Some(video) = &state.selected_video {
                text.push_str(&format!("✔ Selected video: {}\n", video.title));
                if video.has_transcription() {
                    text.push_str("Transcription ready.\n");
                }
            }
            text.push('\n');
            text.push_str(&format_config(&state.config));
            text.push_str(
                "Commands: type <t> · length <l> · keywords <a, b> · toggle <section> · generate · new\n",
            );
        }
        WizardStep::Publish => {
            if let Some(article) = &state.article {
                text.push_str(&format_article(article, &state.config.keywords));
                if state.copy_indicator_active() {
                    text.push_str("\n✔ Copied!");
                }
                text.push_str("\nCommands: copy · save · new\n");
            }
        }
    }
    text
}

impl<W: Write + Send> WizardView for TerminalView<W> {
    fn render(&self, state: &WizardState) {
        self.write(&format_state(state));
    }

    fn scroll_to(&self, target: ScrollTarget) {
        match target {
            ScrollTarget::Top => self.write("\x1B[2J\x1B[1;1H"),
            ScrollTarget::Configure => self.write(&format!("\n{}\n2 · Configure the article\n", RULE)),
            ScrollTarget::Result => self.write(&format!("\n{}\n3 · Article ready\n", RULE)),
        }
    }

    fn alert(&self, message: &str) {
        eprintln!("⚠️  {}", message);
    }
}
