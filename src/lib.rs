//! Headless client for the copper task-tracker REST API.
//!
//! ARCHITECTURE
//! ============
//! Three layers: `net` speaks HTTP+JSON behind the [`net::CopperApi`] trait,
//! `state` holds the auth/projects/account containers that fold adapter
//! results into display-ready fields, and `flow` covers the one-shot
//! constructs (email confirmation, redirect countdown, password reset).
//! `validate` gates dispatch with the form rules the UI evaluates eagerly.

pub mod config;
pub mod flow;
pub mod net;
pub mod state;
pub mod validate;

pub use config::ApiConfig;
pub use net::CopperApi;
pub use net::http::HttpApi;
pub use state::auth::AuthStore;
pub use state::projects::ProjectsStore;
