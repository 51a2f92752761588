//! Catalog backend entry point.

use clap::{Parser, Subcommand};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use catalog_backend::api::{create_router, AppState};
use catalog_backend::config::Config;
use catalog_backend::firebase;
use catalog_backend::utils::shutdown_signal;

/// Catalog web backend.
#[derive(Parser, Debug)]
#[command(name = "catalog-backend")]
#[command(about = "HTTP backend for the catalog frontend with optional Firestore connectivity")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port (overrides PORT from the environment).
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Run {
        /// HTTP server port (overrides PORT from the environment).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,

    /// Check the credential file and Firestore connectivity.
    CheckDb,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("catalog_backend=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Handle subcommands
    match args.command {
        Some(Command::CheckConfig) => cmd_check_config().await,
        Some(Command::CheckDb) => cmd_check_db().await,
        Some(Command::Run { port }) => cmd_run(port).await,
        None => cmd_run(args.port).await,
    }
}

/// Check configuration validity.
async fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("CATALOG BACKEND - CONFIGURATION CHECK");
    println!("======================================================================");

    // Load configuration
    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    // Validate configuration
    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    // Show configuration summary
    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Listen Address: {}", config.bind_addr());
    println!("  Credential File: {}", config.credentials_path);
    println!(
        "  Credential File Present: {}",
        std::path::Path::new(&config.credentials_path).exists()
    );
    println!("  Firestore Database: {}", config.firestore_database);
    println!("  Log Level: {}", config.rust_log);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Check the credential file and Firestore connectivity.
async fn cmd_check_db() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("CATALOG BACKEND - DATABASE CHECK");
    println!("======================================================================");

    let config = Config::load()?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    println!("Credential File: {}", config.credentials_path);
    println!("Firestore Database: {}", config.firestore_database);
    println!("======================================================================");

    print!("\n1. Connecting to Firestore... ");
    match firebase::connect_firestore(&config).await {
        Ok(Some(handle)) => {
            println!("OK");
            println!("   Database: {}", handle.database_id());
        }
        Ok(None) => {
            println!("SKIPPED");
            println!("   Credential file not found; backend would run without a database.");
        }
        Err(e) => {
            println!("FAILED");
            println!("   Error: {}", e);
            return Err(anyhow::anyhow!("Firestore connection failed"));
        }
    }

    println!("\n======================================================================");
    println!("DATABASE CHECK COMPLETED");
    println!("======================================================================");

    Ok(())
}

/// Run the HTTP server.
async fn cmd_run(port_override: Option<u16>) -> anyhow::Result<()> {
    // Load configuration
    info!("Loading configuration...");
    let mut config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    // Override with CLI args if provided
    if let Some(port) = port_override {
        config.port = port;
    }

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    info!("Configuration loaded successfully");

    // Best-effort Firestore setup. A missing credential file degrades to
    // no-database mode; any other failure aborts startup.
    let firestore = firebase::connect_firestore(&config).await?;
    if firestore.is_none() {
        warn!("Running without a Firestore connection");
    }

    // Build application state and router
    let state = AppState::new(firestore);
    let router = create_router(state);

    // Start HTTP server
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("HTTP server listening on {}", config.bind_addr());

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
