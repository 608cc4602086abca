//! irma-abused - abuse report intake server
//!
//! ## Usage
//!
//! ```bash
//! irma-abused                      # Read config.yaml from the working dir
//! irma-abused --config /etc/irma-abused/config.yaml
//! ```

use std::path::Path;
use std::sync::Arc;

use abused_web::{config::Conf, serve, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "abused_web=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse args
    let args: Vec<String> = std::env::args().collect();
    let mut conf_path = "config.yaml".to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    conf_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" => {
                println!(
                    r#"
irma-abused - abuse report intake server

USAGE:
    irma-abused [OPTIONS]

OPTIONS:
    -c, --config <PATH>    Path to configuration file [default: config.yaml]
    --help                 Print help information
"#
                );
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let conf_path = Path::new(&conf_path);
    if !conf_path.exists() {
        println!("Could not find config file: {}", conf_path.display());
        println!("It should look like");
        println!();
        println!("   db: sqlite");
        println!("   dsn: /var/lib/irma-abused/abuse.db");
        println!("   bindaddr: ':8383'");
        std::process::exit(1);
    }

    let conf = Conf::load(conf_path)?;

    // Open the database and bring the schema up to date. Either step
    // failing means we refuse to start.
    tracing::info!("connecting to {} database", conf.db);
    let store = abused_store::connect(&conf.db, &conf.dsn)?;
    store.ensure_schema()?;

    let state = Arc::new(AppState::new(store));
    serve(state, &conf.bindaddr).await?;

    Ok(())
}
