//! Salon site CLI - serve the landing page
//!
//! ```bash
//! salon-site serve                      # Serve frontend/dist on port 8080
//! salon-site serve --port 3000 --dist ./dist
//! salon-site check                      # Verify the build output
//! ```

use clap::{Parser, Subcommand};
use salon_site::{inspect_dist, SiteConfig, SiteResult};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "salon-site")]
#[command(about = "Serve the Beta Salon landing page", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server
    Serve(SiteConfig),

    /// Check that the dist directory can be served
    Check(SiteConfig),
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve(config) => salon_site::server::start_server(config).await,
        Commands::Check(config) => cmd_check(&config),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_check(config: &SiteConfig) -> SiteResult<()> {
    eprintln!("🔎 Checking: {}", config.dist.display());

    let report = inspect_dist(&config.dist)?;
    eprintln!("   ✅ Entry page: {}", report.index.display());
    match report.hero_image {
        Some(path) => eprintln!("   ✅ Hero image: {}", path.display()),
        None => eprintln!("   ⚠️  Hero image missing, the page will show a broken image"),
    }

    eprintln!("✨ Ready to serve on port {}", config.checked_port()?);
    Ok(())
}
