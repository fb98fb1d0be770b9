//! UniShop - E-commerce REST backend
//!
//! Entry point: load config, init logging, connect PostgreSQL, serve.

use std::sync::Arc;

use unishop::gateway::state::AppState;
use unishop::store::Database;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

fn main() {
    let env = get_env();
    let app_config = unishop::config::AppConfig::load(&env);
    let _log_guard = unishop::logging::init_logging(&app_config);

    tracing::info!("Starting UniShop in {} mode", env);

    let port = get_port_override().unwrap_or(app_config.gateway.port);
    let host = app_config.gateway.host.clone();

    let postgres_url = match app_config.postgres_url.clone() {
        Some(url) => url,
        None => {
            eprintln!("FATAL: postgres_url not configured (config/{}.yaml or DATABASE_URL)", env);
            std::process::exit(1);
        }
    };

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    rt.block_on(async {
        let db = match Database::connect(&postgres_url).await {
            Ok(db) => Arc::new(db),
            Err(e) => {
                eprintln!("FATAL: Failed to connect to PostgreSQL: {}", e);
                std::process::exit(1);
            }
        };

        let state = Arc::new(AppState::new(db, app_config.jwt_secret.clone()));

        unishop::gateway::run_server(&host, port, state).await;
    });
}
