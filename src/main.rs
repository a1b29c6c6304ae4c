use clap::Parser;
use recipes::{
    api::{handlers::AppState, routes},
    cli::{commands, Cli, Commands},
    config::Settings,
    Error, RecipeStore, Result,
};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if it exists
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,recipes=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run(Cli::parse()).await {
        error!("{}", e.log_safe());
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    // Load configuration
    let mut settings = Settings::from_env()?;
    if let Some(path) = cli.command.data_path() {
        settings.data.recipes_path = path.clone();
    }
    if let Commands::Serve { port, host, .. } = &cli.command {
        if let Some(port) = port {
            settings.server.port = *port;
        }
        if let Some(host) = host {
            settings.server.host = host.clone();
        }
    }
    settings.validate()?;

    // No fallback source: a failed load stops here
    let store = RecipeStore::load(&settings.data.recipes_path)?;

    let mut stdout = std::io::stdout();
    match cli.command {
        Commands::Serve { .. } => serve(store, settings).await?,
        Commands::List { page, .. } => commands::list(
            &store,
            page,
            settings.pagination.recipes_per_page,
            &mut stdout,
        )?,
        Commands::Show { id, .. } => commands::show(&store, id, &mut stdout)?,
        Commands::Search { query, limit, .. } => {
            let limit = limit.unwrap_or(settings.pagination.search_limit as i64);
            commands::search(&store, &query, limit, &mut stdout)?
        }
    }

    Ok(())
}

async fn serve(store: RecipeStore, settings: Settings) -> Result<()> {
    info!("Starting Recipe Browser server");
    info!("Recipes: {} loaded from {:?}", store.size(), settings.data.recipes_path);
    info!("Frontend: {:?}", settings.web.frontend);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let state = AppState::new(store, settings);
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::Internal(format!("Failed to bind to {addr}: {e}")))?;

    println!("\n========================================");
    println!("Recipe Browser");
    println!("========================================");
    println!("Address: http://{addr}");
    println!("\nPages:");
    println!("  GET  /recipes?page=N");
    println!("  GET  /recipe/:id");
    println!("  GET  /search?q=...");
    println!("\nAPI Endpoints:");
    println!("  GET  /api/recipes");
    println!("  GET  /api/recipes/:id");
    println!("  GET  /api/search");
    println!("  GET  /health");
    println!("\nPress Ctrl+C to stop");
    println!("========================================\n");

    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| Error::Internal(format!("Server error: {e}")))?;

    info!("Shutting down...");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}
