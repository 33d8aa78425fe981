//! Service endpoints resolved at startup.
//!
//! Native builds read `insightflow.toml` from the working directory, then a
//! `.env` file, then the process environment. Browser builds have no
//! filesystem or environment, so the variables are captured at compile time.

use domain::ServiceConfig;

/// Load the configuration, falling back to defaults for anything unset.
pub fn load() -> ServiceConfig {
    let config = base_config();
    let config = config.overlay(lookup);
    tracing::debug!(
        users = %config.users_api_url,
        documents = %config.documents_api_url,
        tasks = %config.tasks_api_url,
        "service endpoints"
    );
    config
}

#[cfg(not(target_arch = "wasm32"))]
fn base_config() -> ServiceConfig {
    dotenvy::dotenv().ok();

    let path = std::path::Path::new(ServiceConfig::filename());
    match std::fs::read_to_string(path) {
        Ok(contents) => ServiceConfig::from_toml(&contents).unwrap_or_else(|e| {
            tracing::warn!("Ignoring malformed {}: {}", path.display(), e);
            ServiceConfig::default()
        }),
        Err(_) => ServiceConfig::default(),
    }
}

#[cfg(target_arch = "wasm32")]
fn base_config() -> ServiceConfig {
    ServiceConfig::default()
}

#[cfg(not(target_arch = "wasm32"))]
fn lookup(var: &str) -> Option<String> {
    std::env::var(var).ok()
}

#[cfg(target_arch = "wasm32")]
fn lookup(var: &str) -> Option<String> {
    use domain::config::{DOCUMENTS_API_URL_VAR, TASKS_API_URL_VAR, USERS_API_URL_VAR};

    let value = match var {
        USERS_API_URL_VAR => option_env!("INSIGHTFLOW_USERS_API_URL"),
        DOCUMENTS_API_URL_VAR => option_env!("INSIGHTFLOW_DOCUMENTS_API_URL"),
        TASKS_API_URL_VAR => option_env!("INSIGHTFLOW_TASKS_API_URL"),
        _ => None,
    };
    value.map(str::to_string)
}
