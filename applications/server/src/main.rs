/// Encore Server - voice music skill backend
use clap::{Parser, Subcommand};
use encore_server::{api, config::ServerConfig, state::AppState};
use encore_storage::{seed::CatalogFixture, SqliteCatalog};
use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "encore-server")]
#[command(about = "Encore voice music skill backend", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Apply database migrations and exit
    Migrate,
    /// Load a JSON catalog fixture into the database
    Seed {
        /// Fixture file with artists, tracks and playlists
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "encore_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = ServerConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Serve => serve(config).await?,
        Commands::Migrate => migrate(&config).await?,
        Commands::Seed { file } => seed(&config, &file).await?,
    }

    Ok(())
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Encore Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);
    tracing::info!("Media: {}", config.media.base_url);

    let pool = open_database(&config).await?;
    let catalog = Arc::new(SqliteCatalog::new(pool));
    tracing::info!("Database connected");

    let app = api::router(AppState::from_catalog(catalog, &config));

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn migrate(config: &ServerConfig) -> anyhow::Result<()> {
    open_database(config).await?;
    tracing::info!("Migrations applied to {}", config.storage.database_url);
    Ok(())
}

async fn seed(config: &ServerConfig, file: &Path) -> anyhow::Result<()> {
    let pool = open_database(config).await?;
    let fixture = CatalogFixture::from_file(file).await?;
    let report = encore_storage::seed::load(&pool, &fixture).await?;

    println!(
        "Seeded {} artists, {} tracks, {} playlists",
        report.artists, report.tracks, report.playlists
    );

    Ok(())
}

/// Open the pool and bring the schema up to date
async fn open_database(config: &ServerConfig) -> anyhow::Result<sqlx::SqlitePool> {
    let url = &config.storage.database_url;

    if let Some(parent) = url
        .strip_prefix("sqlite://")
        .and_then(|path| Path::new(path).parent())
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        tokio::fs::create_dir_all(parent).await?;
    }

    let pool = encore_storage::create_pool(url).await?;
    encore_storage::run_migrations(&pool).await?;
    Ok(pool)
}
