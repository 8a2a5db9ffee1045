//! API server configuration.

/// Configuration for the API server.
///
/// The JWT secret is injected here once at startup and passed explicitly
/// into every token issue/verify call; there is no process-global.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:8080").
    pub bind_addr: String,
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// JWT signing secret.
    pub jwt_secret: String,
}
