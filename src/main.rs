//! Admin CLI: operate on article HTML locally and on the backend remotely.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gemcms::{ApiClient, BlogAdmin};
use gemcms_core::markup::{self, EntityStore};
use gemcms_core::models::ArticleStatus;
use gemcms_core::Config;

/// Editable article state as a JSON document: the buffer plus the three
/// entity registries. `decode` emits it; `encode` consumes it.
#[derive(Debug, Serialize, Deserialize)]
struct Bundle {
    buffer: String,
    #[serde(flatten)]
    store: EntityStore,
}

#[derive(Parser)]
#[command(name = "gemcms", about = "Blog admin toolbox", version)]
struct Cli {
    /// Backend base URL; defaults to GEMCMS_API_URL.
    #[arg(short, long)]
    api: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode persisted article HTML into an editable bundle (JSON).
    Decode { file: PathBuf },
    /// Encode an editable bundle (JSON) back into article HTML.
    Encode { file: PathBuf },
    /// Print the list-card excerpt of an article HTML file.
    Excerpt { file: PathBuf },
    /// Print the page-preview HTML of an article HTML file.
    Preview { file: PathBuf },
    /// List articles for a status tab.
    Posts {
        #[arg(short, long, default_value = "published")]
        status: String,
        #[arg(short, long, default_value = "")]
        term: String,
        #[arg(short, long, default_value = "1")]
        page: u32,
    },
    /// Change an article's status.
    SetStatus { id: u64, status: String },
    /// List, create, or delete categories.
    Categories {
        #[command(subcommand)]
        action: CategoryAction,
    },
    /// Search storefront products by keyword.
    FindProduct { term: String },
}

#[derive(Subcommand)]
enum CategoryAction {
    List,
    Add { name: String },
    Rm { id: u64 },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gemcms=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env();
    if let Some(api) = cli.api {
        config.api_base_url = api.trim_end_matches('/').to_string();
    }

    match cli.command {
        Commands::Decode { file } => {
            let html = read(&file)?;
            let decoded = markup::decode(&html);
            let bundle = Bundle {
                buffer: decoded.buffer,
                store: decoded.store,
            };
            println!("{}", serde_json::to_string_pretty(&bundle)?);
        }
        Commands::Encode { file } => {
            let bundle: Bundle = serde_json::from_str(&read(&file)?)
                .with_context(|| format!("{} is not an editable bundle", file.display()))?;
            println!("{}", markup::encode(&bundle.buffer, &bundle.store));
        }
        Commands::Excerpt { file } => {
            let decoded = markup::decode(&read(&file)?);
            println!("{}", markup::preview::excerpt(&decoded.buffer));
        }
        Commands::Preview { file } => {
            let decoded = markup::decode(&read(&file)?);
            println!(
                "{}",
                markup::preview::render_page(&decoded.buffer, &decoded.store)
            );
        }
        Commands::Posts { status, term, page } => {
            let admin = admin(&config);
            let listing = admin
                .list_articles(parse_status(&status)?, &term, page)
                .await?;
            for article in &listing.items {
                println!(
                    "{:<8} {:<48} curtidas={} visualizações={}",
                    article.id,
                    article.title,
                    article.like_count(),
                    article.view_count()
                );
            }
            println!("página {page} de {}", listing.total_pages);
        }
        Commands::SetStatus { id, status } => {
            admin(&config).change_status(id, parse_status(&status)?).await?;
            println!("artigo {id} atualizado");
        }
        Commands::Categories { action } => {
            let admin = admin(&config);
            match action {
                CategoryAction::List => {
                    for category in admin.categories().await? {
                        println!("{:<8} {}", category.id, category.name);
                    }
                }
                CategoryAction::Add { name } => {
                    let category = admin.create_category(&name).await?;
                    println!("criada: {} ({})", category.name, category.id);
                }
                CategoryAction::Rm { id } => {
                    admin.delete_category(id).await?;
                    println!("removida: {id}");
                }
            }
        }
        Commands::FindProduct { term } => {
            let admin = admin(&config);
            for product in admin.client().search_products(&term).await? {
                println!("{:<8} {:<40} R$ {:.2}", product.id, product.name, product.value);
            }
        }
    }

    Ok(())
}

fn admin(config: &Config) -> BlogAdmin {
    BlogAdmin::new(ApiClient::from_config(config), config)
}

fn read(file: &Path) -> anyhow::Result<String> {
    fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))
}

fn parse_status(value: &str) -> anyhow::Result<ArticleStatus> {
    Ok(match value.to_ascii_lowercase().as_str() {
        "archived" => ArticleStatus::Archived,
        "published" => ArticleStatus::Published,
        "canceled" => ArticleStatus::Canceled,
        "deleted" => ArticleStatus::Deleted,
        other => bail!("unknown status: {other} (use archived|published|canceled|deleted)"),
    })
}
