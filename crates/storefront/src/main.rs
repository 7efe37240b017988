use std::path::PathBuf;
use std::sync::Arc;

use catalog::links::StoreLinks;
use chat_session::ChatSession;
use clap::{Parser, Subcommand};
use gemini_assistant::GeminiAssistant;
use tracing::info;
use tracing_subscriber::EnvFilter;
use translations::Locale;

mod config;
mod error;
mod page;
mod render;
mod repl;
mod social_proof;
mod view;

use config::StorefrontConfig;
use error::StorefrontError;
use page::Page;
use view::Theme;

#[derive(Debug, Parser)]
#[command(name = "storefront")]
#[command(about = "Browse the Tehran Records vinyl collection and chat with Spin")]
struct Args {
    /// Interface language: en, fa or es (falls back to SPIN_LANG)
    #[arg(long, global = true)]
    lang: Option<Locale>,

    /// Color scheme
    #[arg(long, global = true, value_enum)]
    theme: Option<Theme>,

    /// Catalog JSON file (falls back to SPIN_CATALOG_PATH, then the embedded catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show a page: home, shop, genres, rarities, free-music, about, contact, share-me
    Page {
        page: Page,

        /// Only list records of this genre (home page)
        #[arg(long)]
        genre: Option<String>,
    },

    /// Search albums and artists
    Search {
        /// Search text; an empty query lists everything
        #[arg(num_args = 0..)]
        query: Vec<String>,
    },

    /// Show one record with its purchase links
    Product { id: String },

    /// Chat with Spin, the vinyl assistant
    Chat {
        /// Show periodic shopper activity notices
        #[arg(long)]
        social_proof: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = StorefrontConfig::from_env().with_overrides(args.lang, args.theme, args.catalog);
    run(args.command, &config).await?;
    Ok(())
}

async fn run(command: Command, config: &StorefrontConfig) -> Result<(), StorefrontError> {
    let ctx = config.view_context();
    let catalog = config.load_catalog()?;

    match command {
        Command::Page { page, genre } => {
            println!("{}", render::render(page, &ctx, &catalog, genre.as_deref()));
        }
        Command::Search { query } => {
            println!("{}", render::render_search(&ctx, &catalog, &query.join(" ")));
        }
        Command::Product { id } => {
            let product = catalog
                .get(&id)
                .ok_or_else(|| StorefrontError::UnknownProduct(id.clone()))?;
            println!(
                "{}",
                render::render_product(&ctx, product, &StoreLinks::default())
            );
        }
        Command::Chat { social_proof } => {
            let assistant = GeminiAssistant::from_env(&catalog)?;
            info!("Starting chat with model {}", assistant.config().model);

            // Terminals have no speech recognizer; /voice reports that.
            let session = ChatSession::builder(Arc::new(assistant))
                .localized_greeting(ctx.locale)
                .build();
            repl::run_chat(session, ctx, social_proof).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_page_with_globals() {
        let args = Args::try_parse_from([
            "storefront",
            "page",
            "free-music",
            "--lang",
            "fa",
            "--theme",
            "plain",
        ])
        .unwrap();

        assert_eq!(args.lang, Some(Locale::Fa));
        assert_eq!(args.theme, Some(Theme::Plain));
        assert!(matches!(
            args.command,
            Command::Page {
                page: Page::FreeMusic,
                genre: None
            }
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_page() {
        assert!(Args::try_parse_from(["storefront", "page", "checkout"]).is_err());
        assert!(Args::try_parse_from(["storefront", "page", "home", "--lang", "de"]).is_err());
    }

    #[test]
    fn test_parse_search_words() {
        let args = Args::try_parse_from(["storefront", "search", "kind", "of", "blue"]).unwrap();
        match args.command {
            Command::Search { query } => assert_eq!(query.join(" "), "kind of blue"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unknown_product() {
        let config = StorefrontConfig::default();
        let err = run(
            Command::Product {
                id: "tr-999".to_string(),
            },
            &config,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, StorefrontError::UnknownProduct(id) if id == "tr-999"));
    }
}
