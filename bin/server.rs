// Numerology Calculator - Web Server
// REST API with Axum

use anyhow::{Context, Result};
use clap::Parser;
use numerology::api::router;
use numerology::config::DEFAULT_BIND;
use numerology::{KuaFormula, ServerConfig};
use tracing::info;

#[derive(Parser)]
#[command(name = "numerology-server")]
#[command(about = "HTTP API for numerology reports")]
struct Cli {
    /// Address to listen on
    #[arg(short, long, env = "NUMEROLOGY_BIND", default_value = DEFAULT_BIND)]
    bind: String,

    /// Default Kua formula (century or classic)
    #[arg(long, env = "NUMEROLOGY_KUA_FORMULA", default_value = "century")]
    kua_formula: KuaFormula,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("numerology=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let config = ServerConfig {
        bind: cli.bind,
        kua_formula: cli.kua_formula,
    };

    println!("🔢 Numerology Calculator - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    info!(bind = %config.bind, kua_formula = config.kua_formula.name(), "starting server");

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind))?;

    println!("\n🚀 Server running on http://{}", config.bind);
    println!("   API: http://{}/api/analyze", config.bind);
    println!("\n   Press Ctrl+C to stop\n");

    let app = router(config);
    axum::serve(listener, app)
        .await
        .context("Server terminated unexpectedly")?;

    Ok(())
}
