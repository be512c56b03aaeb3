//! Game sales report
//!
//! Loads the dataset named by `GAMESALES_DATA` (default `games.csv`), an
//! optional TOML config from `GAMESALES_CONFIG`, and prints every dashboard
//! view as pretty JSON on stdout. Logs go to stderr and follow `RUST_LOG`.

use gamesales_core::{Dashboard, DashboardConfig, Request, ViewOutput};
use serde::Serialize;

#[derive(Serialize)]
struct Entry {
    request: Request,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<ViewOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn load_config() -> Result<DashboardConfig, Box<dyn std::error::Error>> {
    match std::env::var("GAMESALES_CONFIG") {
        Ok(path) => {
            let text = std::fs::read_to_string(&path)?;
            let config = DashboardConfig::from_toml(&text)?;
            tracing::info!("Loaded config from {}", path);
            Ok(config)
        }
        Err(_) => Ok(DashboardConfig::default()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::var("GAMESALES_DATA").unwrap_or_else(|_| "games.csv".to_string());
    let dashboard = Dashboard::open(&path, load_config()?)?;
    tracing::info!(
        "Loaded {} rows, {} usable for the home page",
        dashboard.raw().len(),
        dashboard.cleaned().len()
    );

    let entries: Vec<Entry> = Request::all()
        .into_iter()
        .map(|request| match dashboard.render(request) {
            Ok(output) => Entry {
                request,
                output: Some(output),
                error: None,
            },
            Err(e) => {
                tracing::warn!("Failed to render {:?}: {}", request, e);
                Entry {
                    request,
                    output: None,
                    error: Some(e.to_string()),
                }
            }
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}
