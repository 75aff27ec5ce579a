use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

use ideahub::{build_router, AppState, GatewayConfig, GatewayError, GatewayResult};
use ideahub_authz::get_engine;

/// IdeaHub: multi-tenant idea management gateway
#[derive(Parser, Debug)]
#[command(name = "ideahub", version, about, long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP gateway
    Serve {
        /// Bind address, overrides the config file
        #[arg(long)]
        bind: Option<String>,

        /// Port, overrides the config file
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the active policy set in evaluation order
    Policies,
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("ideahub=debug,ideahub_authz=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ideahub=info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> GatewayResult<GatewayConfig> {
    match path {
        Some(p) => GatewayConfig::load(p),
        None => {
            let default_path = GatewayConfig::default_config_path();
            GatewayConfig::load(&default_path)
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = run(cli).await;
    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> GatewayResult<()> {
    match cli.command {
        Commands::Serve { bind, port } => cmd_serve(cli.config.as_ref(), bind, port).await,
        Commands::Policies => cmd_policies(),
    }
}

async fn cmd_serve(
    config_path: Option<&PathBuf>,
    bind: Option<String>,
    port: Option<u16>,
) -> GatewayResult<()> {
    let mut config = load_config(config_path)?;

    if let Some(bind) = bind {
        config.http.bind = bind;
    }
    if let Some(port) = port {
        config.http.port = port;
    }
    config.validate()?;

    let addr = format!("{}:{}", config.http.bind, config.http.port);
    let state = Arc::new(AppState::new(config));
    let router = build_router(state);

    info!(addr = %addr, "starting gateway");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(GatewayError::Io)?;
    axum::serve(listener, router).await.map_err(GatewayError::Io)
}

fn cmd_policies() -> GatewayResult<()> {
    let engine = get_engine();
    println!("Active policies ({}):", engine.policies().len());
    for policy in engine.policies() {
        println!(
            "  [{:>4}] {} {} ({} predicates)",
            policy.priority,
            policy.effect,
            policy.reason,
            policy.predicates.len()
        );
    }
    Ok(())
}
