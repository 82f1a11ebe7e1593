//! MedNLP Server - HTTP REST API for medical entity annotation
//!
//! Exposes the `mednlp` annotation pipeline over HTTP with API key
//! authentication, per-key rate limiting, request ids and structured logging.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! ## Public Endpoints (No Authentication)
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//!
//! ## Protected Endpoints (API Key Required)
//!
//! - `POST /api/v1/annotate` - Annotate one text
//! - `POST /api/v1/batch` - Annotate many documents
//! - `GET /api/v1/lexicon` - Full lexicon
//! - `GET /api/v1/lexicon/{category}` - One category's terms
//!
//! Configuration comes from an optional `server.{toml,yaml,json}` file and
//! `MEDNLP_SERVER__*` environment variables.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
