use clap::Parser;
use colored::*;
use folio::api::FolioApi;
use folio::client::render::render_view;
use folio::client::view::{TypeFilter, Workspace};
use folio::client::{CatalogApi, RemoteCatalog};
use folio::config::{self, FolioConfig};
use folio::error::{FolioError, Result};
use folio::http::{router, AppState};
use folio::model::{ItemDraft, ItemKind};
use folio::store::fs::FileStore;
use std::path::PathBuf;
use tracing::{info, warn};
use uuid::Uuid;

mod args;
use args::{Cli, Commands};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let base_url = config::base_url(cli.url.clone());

    match cli.command {
        Commands::Serve { port, data_dir } => serve(port, data_dir).await,
        Commands::List { search, kind } => handle_list(&base_url, search, kind).await,
        Commands::Add {
            title,
            kind,
            description,
            details,
        } => handle_add(&base_url, title, kind, description, details).await,
        Commands::Remove { id } => handle_remove(&base_url, &id).await,
    }
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

/// Bootstrap order matters: the store must open before the listener
/// binds, and either failure takes the process down.
async fn serve(port: Option<u16>, data_dir: Option<PathBuf>) -> Result<()> {
    let config = FolioConfig::from_env().with_overrides(data_dir, port);

    let store = FileStore::open(config.data_dir.clone())?;
    info!(data_dir = %store.data_dir().display(), "store opened");

    let state = AppState::new(FolioApi::new(store));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .map_err(FolioError::Io)?;
    info!(port = config.port, "listening");
    axum::serve(listener, app).await.map_err(FolioError::Io)?;
    Ok(())
}

/// Fetch once, then filter and render locally. A failed fetch degrades
/// to an empty collection rather than aborting.
async fn handle_list(base_url: &str, search: Option<String>, kind: Option<String>) -> Result<()> {
    let type_filter = parse_type_filter(kind.as_deref())?;
    let catalog = RemoteCatalog::new(base_url);

    let snapshot = match catalog.fetch_items().await {
        Ok(items) => items,
        Err(e) => {
            warn!("fetch failed, showing empty collection: {}", e);
            Vec::new()
        }
    };

    let mut workspace = Workspace::new(snapshot);
    workspace.set_type_filter(type_filter);
    if let Some(term) = search {
        workspace.set_search_text(term);
    }

    println!("{}", render_view(&workspace.view()));
    Ok(())
}

async fn handle_add(
    base_url: &str,
    title: String,
    kind: String,
    description: String,
    details: Option<String>,
) -> Result<()> {
    let catalog = RemoteCatalog::new(base_url);
    let draft = ItemDraft::new(&title, &kind, &description, details.as_deref());

    let snapshot = catalog.fetch_items().await.unwrap_or_default();
    let mut workspace = Workspace::new(snapshot);

    // Create failures surface the server's message; the draft inputs
    // stay in the user's shell history for retry.
    let item = catalog.create_item(&draft).await?;
    println!("{}", format!("Item created: {} ({})", item.title, item.id).green());

    workspace.apply_created(item);
    println!("{}", render_view(&workspace.view()));
    Ok(())
}

async fn handle_remove(base_url: &str, id: &str) -> Result<()> {
    let id: Uuid = id
        .parse()
        .map_err(|_| FolioError::Api(format!("invalid item id: {}", id)))?;
    let catalog = RemoteCatalog::new(base_url);

    let snapshot = catalog.fetch_items().await.unwrap_or_default();
    let mut workspace = Workspace::new(snapshot);
    workspace.begin_delete(&id);

    match catalog.delete_item(&id).await {
        Ok(()) => {
            workspace.confirm_removed(&id);
            println!("{}", format!("Item deleted: {}", id).green());
        }
        Err(e) => {
            // Roll the card back so the local view stays consistent
            // with the store.
            workspace.cancel_delete(&id);
            println!("{}", format!("Delete failed: {}", e).red());
        }
    }

    println!("{}", render_view(&workspace.view()));
    Ok(())
}

fn parse_type_filter(kind: Option<&str>) -> Result<TypeFilter> {
    match kind {
        None => Ok(TypeFilter::All),
        Some(s) if s.eq_ignore_ascii_case("all") => Ok(TypeFilter::All),
        Some(s) => Ok(TypeFilter::Kind(s.parse::<ItemKind>()?)),
    }
}
