use anyhow::{bail, Result};
use tracing::info;

use lightkeeper::{categories, Audit, AuditClient, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lightkeeper=info".parse()?),
        )
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let targets: Vec<String> = std::env::args().skip(1).collect();
    if targets.is_empty() {
        bail!("usage: lightkeeper <url> [<url>...]");
    }

    info!("Starting lightkeeper v{}", env!("CARGO_PKG_VERSION"));
    info!("Audit categories: {:?}", categories::names());

    let client = match &config.api_url {
        Some(endpoint) => AuditClient::with_endpoint(config.api_key.clone(), endpoint.clone()),
        None => AuditClient::new(config.api_key.clone()),
    };

    for target in &targets {
        let audit = client.audit(target).await?;
        print_summary(target, &audit);
    }

    Ok(())
}

/// Per-category scores and CrUX availability for one audited URL.
fn print_summary(target: &str, audit: &Audit) {
    println!("{}", target);
    for category in categories::names() {
        let score = audit
            .lhr
            .pointer(&format!("/categories/{}/score", category))
            .and_then(|score| score.as_f64());
        match score {
            Some(score) => println!("  {:<16} {:.2}", category, score),
            None => println!("  {:<16} -", category),
        }
    }
    if audit.crux.is_empty() {
        println!("  no field data");
    } else {
        if audit.crux.loading_experience.is_some() {
            println!("  field data: loadingExperience");
        }
        if audit.crux.origin_loading_experience.is_some() {
            println!("  field data: originLoadingExperience");
        }
    }
}
