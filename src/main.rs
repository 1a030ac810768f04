use clap::Parser;
use seo_article_machine::adapters::clipboard::system_or_memory;
use seo_article_machine::core::Clipboard;
use seo_article_machine::utils::error::{AppError, ErrorSeverity};
use seo_article_machine::utils::{logger, validation::Validate};
use seo_article_machine::{
    CliConfig, GeminiClient, LocalStorage, MemoryClipboard, Session, TerminalView, Wizard,
    WizardState,
};
use seo_article_machine::core::ConfigProvider;
use std::sync::Arc;
use tokio::io::BufReader;

fn exit_with(e: &AppError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("🚀 Starting seo-article-machine");

    let config = config.load_file().unwrap_or_else(|e| exit_with(&e));
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }
    tracing::debug!("Using model {} at {}", config.model(), config.api_base());

    let generator = GeminiClient::new(&config).unwrap_or_else(|e| exit_with(&e));
    let clipboard: Arc<dyn Clipboard> = if config.no_clipboard {
        Arc::new(MemoryClipboard::new())
    } else {
        system_or_memory()
    };

    let state = WizardState::new(config.initial_query(), config.article_config());
    let wizard = Wizard::with_state(generator, TerminalView::stdout(), clipboard, state);
    let storage = LocalStorage::new(config.output_path());
    let mut session = Session::new(wizard, storage, config.output_path());

    if config.batch {
        match session.run_batch(config.pick, config.save).await {
            Ok(Some(exported)) => {
                println!("📁 Output saved to: {}/{}", config.output_path(), exported.html);
            }
            Ok(None) => {}
            Err(e) => exit_with(&e),
        }
    } else if let Err(e) = session.run(BufReader::new(tokio::io::stdin())).await {
        exit_with(&e);
    }

    tracing::info!("✅ Done");
    Ok(())
}
