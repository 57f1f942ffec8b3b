//! Smoke binary: sign in against a live API and list projects.

use std::sync::Arc;

use copper_client::net::types::Credentials;
use copper_client::{ApiConfig, AuthStore, HttpApi, ProjectsStore};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let email = std::env::var("COPPER_EMAIL").expect("COPPER_EMAIL required");
    let password = std::env::var("COPPER_PASSWORD").expect("COPPER_PASSWORD required");

    let config = ApiConfig::from_env();
    tracing::info!(base_url = %config.base_url, "copper-client starting");

    let api: Arc<HttpApi> = Arc::new(HttpApi::new(&config).expect("http client build failed"));

    let auth = AuthStore::new(api.clone());
    if !auth.login(Credentials { email, password }).await {
        let state = auth.snapshot().await;
        tracing::error!(error = ?state.login_error, "login failed");
        std::process::exit(1);
    }
    let state = auth.snapshot().await;
    tracing::info!(user = ?state.user, "signed in");

    let projects = ProjectsStore::new(api);
    projects.list_projects().await;
    let state = projects.snapshot().await;
    match state.list.error() {
        Some(error) => tracing::error!(%error, "project list failed"),
        None => {
            for project in &state.projects {
                println!("{}  {}", project.id, project.title);
            }
            tracing::info!(count = state.projects.len(), "projects listed");
        }
    }

    auth.logout().await;
}
