use crate::core::export::{ArticleExporter, ExportedArticle};
use crate::core::wizard::{StepOutcome, Wizard};
use crate::core::{Clipboard, ContentGenerator, Storage, WizardView};
use crate::domain::model::{ArticleLength, ArticleType, Section, WizardStep};
use crate::utils::error::{AppError, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const HELP: &str = "\
Step 1 · <topic> search · <n> pick video · Enter repeats the current topic
Step 2 · type <guide|tutorial|list|comparison|news> · length <short|medium|long|detailed>
         keywords <a, b, c> · toggle <faq|tips|recipes|equipment> · generate · new
Step 3 · copy · save · new
Always · :new start over · :help · :q quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Reset,
    Help,
    Search(Option<String>),
    Pick(usize),
    SetType(ArticleType),
    SetLength(ArticleLength),
    SetKeywords(String),
    Toggle(Section),
    Generate,
    Copy,
    Save,
    Nothing,
}

fn unknown(line: &str, step: WizardStep) -> AppError {
    AppError::ValidationError {
        message: format!(
            "'{}' is not a step {} command (:help lists them)",
            line,
            step.number()
        ),
    }
}

/// Reads one input line in the context of the current step.
pub fn parse_command(step: WizardStep, line: &str) -> Result<Command> {
    let line = line.trim();
    match line {
        ":q" | ":quit" => return Ok(Command::Quit),
        ":new" => return Ok(Command::Reset),
        ":help" | "?" => return Ok(Command::Help),
        _ => {}
    }

    match step {
        WizardStep::Search => {
            if line.is_empty() {
                return Ok(Command::Search(None));
            }
            match line.parse::<usize>() {
                Ok(0) => Err(unknown(line, step)),
                Ok(n) => Ok(Command::Pick(n)),
                Err(_) => Ok(Command::Search(Some(line.to_string()))),
            }
        }
        WizardStep::Configure => {
            let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
            let rest = rest.trim();
            match word.to_ascii_lowercase().as_str() {
                "" => Ok(Command::Nothing),
                "type" => Ok(Command::SetType(rest.parse()?)),
                "length" => Ok(Command::SetLength(rest.parse()?)),
                "keywords" => Ok(Command::SetKeywords(rest.to_string())),
                "toggle" => Ok(Command::Toggle(rest.parse()?)),
                "generate" | "g" => Ok(Command::Generate),
                "new" => Ok(Command::Reset),
                _ => Err(unknown(line, step)),
            }
        }
        WizardStep::Publish => match line.to_ascii_lowercase().as_str() {
            "" => Ok(Command::Nothing),
            "copy" => Ok(Command::Copy),
            "save" => Ok(Command::Save),
            "new" => Ok(Command::Reset),
            _ => Err(unknown(line, step)),
        },
    }
}

/// Drives the wizard from text commands.
pub struct Session<G, V, C, S>
where
    G: ContentGenerator,
    V: WizardView,
    C: Clipboard,
    S: Storage,
{
    wizard: Wizard<G, V, C>,
    exporter: ArticleExporter<S>,
    output_label: String,
}

impl<G, V, C, S> Session<G, V, C, S>
where
    G: ContentGenerator,
    V: WizardView,
    C: Clipboard,
    S: Storage,
{
    pub fn new(wizard: Wizard<G, V, C>, storage: S, output_label: impl Into<String>) -> Self {
        Self {
            wizard,
            exporter: ArticleExporter::new(storage),
            output_label: output_label.into(),
        }
    }

    pub fn wizard(&self) -> &Wizard<G, V, C> {
        &self.wizard
    }

    /// Runs commands until `:q` or end of input.
    pub async fn run<R: AsyncBufRead + Unpin>(&mut self, input: R) -> Result<()> {
        let mut lines = input.lines();
        self.wizard.reset();

        while let Some(line) = lines.next_line().await? {
            let command = match parse_command(self.wizard.state().step, &line) {
                Ok(command) => command,
                Err(e) => {
                    eprintln!("{}", e.user_friendly_message());
                    continue;
                }
            };
            if command == Command::Quit {
                break;
            }
            self.execute(command).await?;
        }

        tracing::debug!("Session finished");
        Ok(())
    }

    pub async fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Quit | Command::Nothing => {}
            Command::Help => println!("{}", HELP),
            Command::Reset => self.wizard.reset(),
            Command::Search(query) => {
                if let Some(query) = query {
                    self.wizard.set_query(query);
                }
                self.wizard.search().await;
            }
            Command::Pick(position) => {
                if let Some(index) = position.checked_sub(1) {
                    self.wizard.select_video(index).await;
                }
            }
            Command::SetType(article_type) => {
                self.wizard.config_mut().article_type = article_type;
                self.print_config();
            }
            Command::SetLength(length) => {
                self.wizard.config_mut().length = length;
                self.print_config();
            }
            Command::SetKeywords(keywords) => {
                self.wizard.config_mut().set_keywords(&keywords);
                self.print_config();
            }
            Command::Toggle(section) => {
                self.wizard.config_mut().toggle(section);
                self.print_config();
            }
            Command::Generate => {
                self.wizard.generate_article().await;
            }
            Command::Copy => {
                if self.wizard.copy_article() == StepOutcome::Failed {
                    eprintln!("Could not copy the article to the clipboard.");
                }
            }
            Command::Save => match self.save().await {
                Ok(Some(exported)) => println!(
                    "📁 Saved to {}: {}, {}, {}",
                    self.output_label, exported.html, exported.text, exported.json
                ),
                Ok(None) => println!("Nothing to save yet."),
                Err(e) => {
                    tracing::error!("❌ Saving the article failed: {}", e);
                    eprintln!("{}", e.user_friendly_message());
                }
            },
        }
        Ok(())
    }

    fn print_config(&self) {
        print!(
            "{}",
            crate::app::terminal::format_config(&self.wizard.state().config)
        );
    }

    /// Exports the current article, if there is one.
    pub async fn save(&self) -> Result<Option<ExportedArticle>> {
        let state = self.wizard.state();
        let (Some(article), Some(video)) = (&state.article, &state.selected_video) else {
            return Ok(None);
        };
        let exported = self.exporter.export(article, video, &state.config).await?;
        tracing::info!("📁 Article saved as {}", exported.html);
        Ok(Some(exported))
    }

    /// Search, pick, generate and optionally save, without prompting.
    /// `pick` is 1-based.
    pub async fn run_batch(&mut self, pick: usize, save: bool) -> Result<Option<ExportedArticle>> {
        self.wizard.reset();

        if self.wizard.search().await != StepOutcome::Completed
            || self.wizard.state().videos.is_empty()
        {
            return Err(AppError::ValidationError {
                message: "the search returned no videos".to_string(),
            });
        }

        if pick == 0 || self.wizard.select_video(pick - 1).await != StepOutcome::Completed {
            return Err(AppError::ValidationError {
                message: format!("could not transcribe video #{}", pick),
            });
        }

        if self.wizard.generate_article().await != StepOutcome::Completed {
            return Err(AppError::ValidationError {
                message: "article generation failed".to_string(),
            });
        }

        if save {
            self.save().await
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_commands() {
        for step in WizardStep::ALL {
            assert_eq!(parse_command(step, ":q").unwrap(), Command::Quit);
            assert_eq!(parse_command(step, " :new ").unwrap(), Command::Reset);
            assert_eq!(parse_command(step, ":help").unwrap(), Command::Help);
        }
    }

    #[test]
    fn test_search_step_commands() {
        assert_eq!(parse_command(WizardStep::Search, "").unwrap(), Command::Search(None));
        assert_eq!(parse_command(WizardStep::Search, "3").unwrap(), Command::Pick(3));
        assert_eq!(
            parse_command(WizardStep::Search, "picanha na brasa").unwrap(),
            Command::Search(Some("picanha na brasa".to_string()))
        );
        assert!(parse_command(WizardStep::Search, "0").is_err());
    }

    #[test]
    fn test_configure_step_commands() {
        assert_eq!(
            parse_command(WizardStep::Configure, "type tutorial").unwrap(),
            Command::SetType(ArticleType::Tutorial)
        );
        assert_eq!(
            parse_command(WizardStep::Configure, "LENGTH  detailed").unwrap(),
            Command::SetLength(ArticleLength::Detailed)
        );
        assert_eq!(
            parse_command(WizardStep::Configure, "keywords picanha, alho").unwrap(),
            Command::SetKeywords("picanha, alho".to_string())
        );
        assert_eq!(
            parse_command(WizardStep::Configure, "toggle equipment").unwrap(),
            Command::Toggle(Section::Equipment)
        );
        assert_eq!(parse_command(WizardStep::Configure, "g").unwrap(), Command::Generate);
        assert!(parse_command(WizardStep::Configure, "type essay").is_err());
        assert!(parse_command(WizardStep::Configure, "publish").is_err());
    }

    #[test]
    fn test_publish_step_commands() {
        assert_eq!(parse_command(WizardStep::Publish, "COPY").unwrap(), Command::Copy);
        assert_eq!(parse_command(WizardStep::Publish, "save").unwrap(), Command::Save);
        assert_eq!(parse_command(WizardStep::Publish, "").unwrap(), Command::Nothing);
        assert!(parse_command(WizardStep::Publish, "generate").is_err());
    }

    #[test]
    fn test_new_starts_over_after_step_one() {
        assert_eq!(parse_command(WizardStep::Configure, "new").unwrap(), Command::Reset);
        assert_eq!(parse_command(WizardStep::Publish, " NEW ").unwrap(), Command::Reset);
        assert_eq!(parse_command(WizardStep::Configure, ":new").unwrap(), Command::Reset);
        assert_eq!(parse_command(WizardStep::Publish, ":new").unwrap(), Command::Reset);
        // On step 1 a bare word is a topic.
        assert_eq!(
            parse_command(WizardStep::Search, "new").unwrap(),
            Command::Search(Some("new".to_string()))
        );
        assert_eq!(parse_command(WizardStep::Search, ":new").unwrap(), Command::Reset);
    }
}
